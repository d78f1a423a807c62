//! Product filter: one active filter button at a time; matching cards
//! (or all of them for the universal filter) are shown and marked as
//! visible fade-in candidates, the rest are hidden inline.

use crate::behaviors::Action;
use crate::dom::NodeId;
use crate::page::Page;
use crate::Result;

const UNIVERSAL_FILTER: &str = "all";

#[derive(Debug)]
pub(crate) struct ProductFilter {
    buttons: Vec<NodeId>,
    cards: Vec<NodeId>,
}

impl ProductFilter {
    pub(crate) fn install(page: &mut Page) -> Result<Option<Self>> {
        let buttons = page.dom().query_selector_all(".filter-btn")?;
        let cards = page
            .dom()
            .query_selector_all(".product-card[data-category]")?;
        if buttons.is_empty() || cards.is_empty() {
            return Ok(None);
        }
        for button in &buttons {
            page.add_listener(*button, "click", Action::FilterSelect { button: *button });
        }
        Ok(Some(Self { buttons, cards }))
    }

    pub(crate) fn on_select(&mut self, page: &mut Page, button: NodeId) -> Result<()> {
        for other in &self.buttons {
            page.dom_mut().class_remove(*other, "active")?;
        }
        page.dom_mut().class_add(button, "active")?;

        let filter = page.dom().attr(button, "data-filter").unwrap_or_default();
        for &card in &self.cards {
            let matches = filter == UNIVERSAL_FILTER
                || page.dom().attr(card, "data-category").as_deref() == Some(filter.as_str());
            if matches {
                page.dom_mut().style_set(card, "display", "")?;
                page.dom_mut().class_add(card, "fade-in")?;
                page.dom_mut().class_add(card, "visible")?;
            } else {
                page.dom_mut().style_set(card, "display", "none")?;
            }
        }
        Ok(())
    }
}
