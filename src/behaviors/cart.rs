//! Cart counter and toast. The count is monotone for the page lifetime
//! and mirrored into every counter display at once; each add pulses the
//! counter and (re)shows a toast naming the product. The toast surface
//! is created lazily when the page does not provide one.

use std::collections::HashMap;

use crate::behaviors::{Action, BehaviorConfig, TimerTask};
use crate::dom::NodeId;
use crate::page::Page;
use crate::Result;

const FALLBACK_ITEM_NAME: &str = "Item";

#[derive(Debug)]
pub(crate) struct CartCounter {
    count: u64,
    toast: NodeId,
    icon: Option<NodeId>,
    toast_timer: Option<i64>,
    bump_timer: Option<i64>,
    toast_dismiss_ms: i64,
    bump_ms: i64,
}

impl CartCounter {
    pub(crate) fn install(page: &mut Page, config: &BehaviorConfig) -> Result<Option<Self>> {
        let buttons = page.dom().query_selector_all(".add-to-cart")?;
        if buttons.is_empty() {
            return Ok(None);
        }

        let toast = match page.dom().query_selector(".cart-toast")? {
            Some(existing) => existing,
            None => {
                let parent = page.dom().find_by_tag("body").unwrap_or(page.dom().root);
                let mut attrs = HashMap::new();
                attrs.insert("class".to_string(), "cart-toast".to_string());
                let created = page.dom_mut().create_element(parent, "div".to_string(), attrs);
                page.dom_mut()
                    .set_text_content(created, "🛍️ Item added to cart!")?;
                created
            }
        };

        let icon = page.dom().query_selector(".cart-count")?;
        for button in buttons {
            page.add_listener(button, "click", Action::CartAdd { button });
        }
        Ok(Some(Self {
            count: 0,
            toast,
            icon,
            toast_timer: None,
            bump_timer: None,
            toast_dismiss_ms: config.toast_dismiss_ms,
            bump_ms: config.cart_bump_ms,
        }))
    }

    pub(crate) fn on_add(&mut self, page: &mut Page, button: NodeId) -> Result<()> {
        self.count += 1;

        // Duplicated displays (desktop and mobile headers) all show the
        // same count.
        let displays = page.dom().query_selector_all(".cart-count")?;
        let text = self.count.to_string();
        for display in &displays {
            page.dom_mut().set_text_content(*display, &text)?;
        }

        self.bump_icon(page)?;

        let name = self.product_name(page, button)?;
        page.dom_mut()
            .set_text_content(self.toast, &format!("🛍️ \"{name}\" added to cart!"))?;
        page.dom_mut().class_add(self.toast, "show")?;
        if let Some(timer) = self.toast_timer.take() {
            page.clear_timer(timer);
        }
        self.toast_timer = Some(page.set_timeout(TimerTask::ToastDismiss, self.toast_dismiss_ms));
        Ok(())
    }

    fn bump_icon(&mut self, page: &mut Page) -> Result<()> {
        let Some(icon) = self.icon else {
            return Ok(());
        };
        // Remove-and-re-add across a forced layout restarts the pulse
        // even when the previous one is still running.
        page.dom_mut().class_remove(icon, "bump")?;
        page.force_layout();
        page.dom_mut().class_add(icon, "bump")?;
        if let Some(timer) = self.bump_timer.take() {
            page.clear_timer(timer);
        }
        self.bump_timer = Some(page.set_timeout(TimerTask::CartBumpEnd, self.bump_ms));
        Ok(())
    }

    fn product_name(&self, page: &Page, button: NodeId) -> Result<String> {
        let Some(card) = page.dom().closest(button, ".product-card")? else {
            return Ok(FALLBACK_ITEM_NAME.to_string());
        };
        let Some(heading) = page.dom().query_selector_from(card, "h3")? else {
            return Ok(FALLBACK_ITEM_NAME.to_string());
        };
        let name = page.dom().text_content(heading).trim().to_string();
        if name.is_empty() {
            Ok(FALLBACK_ITEM_NAME.to_string())
        } else {
            Ok(name)
        }
    }

    pub(crate) fn on_toast_dismiss(&mut self, page: &mut Page) -> Result<()> {
        page.dom_mut().class_remove(self.toast, "show")?;
        self.toast_timer = None;
        Ok(())
    }

    pub(crate) fn on_bump_end(&mut self, page: &mut Page) -> Result<()> {
        if let Some(icon) = self.icon {
            page.dom_mut().class_remove(icon, "bump")?;
        }
        self.bump_timer = None;
        Ok(())
    }
}
