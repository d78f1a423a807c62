//! Newsletter subscription form: submission is always intercepted, the
//! trimmed email is validated, and both outcomes surface as blocking
//! alerts. A valid submission clears the form.

use crate::behaviors::Action;
use crate::dom::NodeId;
use crate::page::{EventState, Page};
use crate::validate::Patterns;
use crate::Result;

const INVALID_EMAIL_ALERT: &str = "Please enter a valid email address.";
const SUBSCRIBED_ALERT: &str = "🎉 Thank you for subscribing!";

#[derive(Debug)]
pub(crate) struct NewsletterForm {
    form: NodeId,
    input: Option<NodeId>,
    patterns: Patterns,
}

impl NewsletterForm {
    pub(crate) fn install(page: &mut Page) -> Result<Option<Self>> {
        let Some(form) = page.dom().query_selector(".newsletter-form")? else {
            return Ok(None);
        };
        let input = page.dom().query_selector_from(form, "input[type=email]")?;
        page.add_listener(form, "submit", Action::NewsletterSubmit);
        Ok(Some(Self {
            form,
            input,
            patterns: Patterns::new()?,
        }))
    }

    pub(crate) fn on_submit(&mut self, page: &mut Page, event: &mut EventState) -> Result<()> {
        event.prevent_default();

        let email = match self.input {
            Some(input) => page.dom().value(input)?.trim().to_string(),
            None => String::new(),
        };
        if email.is_empty() || !self.patterns.email_ok(&email)? {
            page.alert(INVALID_EMAIL_ALERT);
            return Ok(());
        }

        page.alert(SUBSCRIBED_ALERT);
        page.dom_mut().reset_form(self.form)
    }
}
