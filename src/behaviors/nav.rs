//! Mobile navigation toggle: the hamburger trigger and its panel flip an
//! `open` class together, and picking any link inside the panel closes both.

use crate::behaviors::Action;
use crate::dom::NodeId;
use crate::page::Page;
use crate::Result;

#[derive(Debug)]
pub(crate) struct NavMenu {
    trigger: NodeId,
    panel: NodeId,
}

impl NavMenu {
    pub(crate) fn install(page: &mut Page) -> Result<Option<Self>> {
        let Some(trigger) = page.dom().query_selector(".hamburger")? else {
            return Ok(None);
        };
        let Some(panel) = page.dom().query_selector(".mobile-nav")? else {
            return Ok(None);
        };
        let links = page.dom().query_selector_all_from(panel, "a")?;

        page.add_listener(trigger, "click", Action::NavToggle);
        for link in links {
            page.add_listener(link, "click", Action::NavClose);
        }
        Ok(Some(Self { trigger, panel }))
    }

    pub(crate) fn on_toggle(&mut self, page: &mut Page) -> Result<()> {
        page.dom_mut().class_toggle(self.trigger, "open")?;
        page.dom_mut().class_toggle(self.panel, "open")?;
        Ok(())
    }

    pub(crate) fn on_close(&mut self, page: &mut Page) -> Result<()> {
        page.dom_mut().class_remove(self.trigger, "open")?;
        page.dom_mut().class_remove(self.panel, "open")?;
        Ok(())
    }
}
