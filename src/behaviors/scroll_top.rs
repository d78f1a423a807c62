//! Floating scroll-to-top control: shown past a fixed scroll offset,
//! clicking it scrolls back to the top.

use crate::behaviors::{Action, BehaviorConfig};
use crate::dom::NodeId;
use crate::page::Page;
use crate::Result;

#[derive(Debug)]
pub(crate) struct ScrollTop {
    button: NodeId,
    threshold_px: i64,
    smooth: bool,
}

impl ScrollTop {
    pub(crate) fn install(page: &mut Page, config: &BehaviorConfig) -> Result<Option<Self>> {
        let Some(button) = page.dom().query_selector(".scroll-top")? else {
            return Ok(None);
        };
        let root = page.dom().root;
        page.add_listener(root, "scroll", Action::ScrollCheck);
        page.add_listener(button, "click", Action::ScrollTopClick);
        Ok(Some(Self {
            button,
            threshold_px: config.scroll_top_threshold_px,
            smooth: config.smooth_scroll,
        }))
    }

    pub(crate) fn on_scroll(&mut self, page: &mut Page) -> Result<()> {
        let visible = page.scroll_y() > self.threshold_px;
        page.dom_mut().class_set(self.button, "visible", visible)
    }

    pub(crate) fn on_click(&mut self, page: &mut Page) -> Result<()> {
        page.request_scroll(0, self.smooth);
        self.on_scroll(page)
    }
}
