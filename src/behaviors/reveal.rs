//! One-shot fade-in reveal: each candidate is watched for viewport
//! intersection and marked visible the first time it clears the
//! threshold, then unobserved. The reveal never reverses.

use crate::behaviors::{Action, BehaviorConfig};
use crate::dom::NodeId;
use crate::page::Page;
use crate::Result;

#[derive(Debug)]
pub(crate) struct FadeInReveal;

impl FadeInReveal {
    pub(crate) fn install(page: &mut Page, config: &BehaviorConfig) -> Result<Option<Self>> {
        let targets = page.dom().query_selector_all(".fade-in")?;
        if targets.is_empty() {
            return Ok(None);
        }
        for target in targets {
            page.observe_intersection(target, config.reveal_threshold, Action::Reveal { target });
        }
        Ok(Some(Self))
    }

    pub(crate) fn on_reveal(&mut self, page: &mut Page, target: NodeId) -> Result<()> {
        page.dom_mut().class_add(target, "visible")?;
        page.unobserve_intersection(target);
        Ok(())
    }
}
