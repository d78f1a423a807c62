//! Contact form validation. Each field is a two-state machine (valid /
//! invalid) rendered as an `invalid` class on the field and a `show`
//! class on the adjacent error message. Blur evaluates the field's rule,
//! input clears the invalid state optimistically, and submission
//! re-validates every present field exactly once.

use crate::behaviors::{Action, BehaviorConfig, TimerTask};
use crate::dom::NodeId;
use crate::page::{EventState, Page};
use crate::validate::Patterns;
use crate::Result;

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

#[derive(Debug)]
pub(crate) struct ContactForm {
    form: NodeId,
    name: Option<NodeId>,
    email: Option<NodeId>,
    phone: Option<NodeId>,
    message: Option<NodeId>,
    success: Option<NodeId>,
    success_timer: Option<i64>,
    success_hide_ms: i64,
    patterns: Patterns,
}

impl ContactForm {
    pub(crate) fn install(page: &mut Page, config: &BehaviorConfig) -> Result<Option<Self>> {
        let Some(form) = page.dom().query_selector("#contactForm")? else {
            return Ok(None);
        };

        let name = page.dom().query_selector_from(form, "#name")?;
        let email = page.dom().query_selector_from(form, "#email")?;
        let phone = page.dom().query_selector_from(form, "#phone")?;
        let message = page.dom().query_selector_from(form, "#message")?;
        let success = page.dom().query_selector_from(form, ".success-msg")?;

        for field in [name, email, phone, message].into_iter().flatten() {
            page.add_listener(field, "blur", Action::ContactBlur { field });
            page.add_listener(field, "input", Action::ContactInput { field });
        }
        page.add_listener(form, "submit", Action::ContactSubmit);

        Ok(Some(Self {
            form,
            name,
            email,
            phone,
            message,
            success,
            success_timer: None,
            success_hide_ms: config.success_hide_ms,
            patterns: Patterns::new()?,
        }))
    }

    pub(crate) fn on_blur(&mut self, page: &mut Page, field: NodeId) -> Result<()> {
        let invalid = self.field_invalid(page, field)?;
        self.render_validity(page, field, invalid)?;
        Ok(())
    }

    /// Editing a field clears its error immediately, independent of
    /// whether the new value would actually validate.
    pub(crate) fn on_input(&mut self, page: &mut Page, field: NodeId) -> Result<()> {
        self.render_validity(page, field, false)?;
        Ok(())
    }

    pub(crate) fn on_submit(&mut self, page: &mut Page, event: &mut EventState) -> Result<()> {
        event.prevent_default();

        let mut valid = true;
        for field in [self.name, self.email, self.phone, self.message]
            .into_iter()
            .flatten()
        {
            let invalid = self.field_invalid(page, field)?;
            self.render_validity(page, field, invalid)?;
            if invalid {
                valid = false;
            }
        }
        if !valid {
            return Ok(());
        }

        if let Some(success) = self.success {
            page.dom_mut().class_add(success, "show")?;
            if let Some(timer) = self.success_timer.take() {
                page.clear_timer(timer);
            }
            self.success_timer =
                Some(page.set_timeout(TimerTask::ContactSuccessHide, self.success_hide_ms));
        }
        page.dom_mut().reset_form(self.form)
    }

    pub(crate) fn on_success_hide(&mut self, page: &mut Page) -> Result<()> {
        if let Some(success) = self.success {
            page.dom_mut().class_remove(success, "show")?;
        }
        self.success_timer = None;
        Ok(())
    }

    fn field_invalid(&self, page: &Page, field: NodeId) -> Result<bool> {
        let value = page.dom().value(field)?;
        let trimmed = value.trim();
        if self.name == Some(field) {
            Ok(trimmed.chars().count() < MIN_NAME_CHARS)
        } else if self.email == Some(field) {
            Ok(!self.patterns.email_ok(trimmed)?)
        } else if self.phone == Some(field) {
            // Optional: only a non-empty value is held to the pattern.
            Ok(!trimmed.is_empty() && !self.patterns.phone_ok(trimmed)?)
        } else if self.message == Some(field) {
            Ok(trimmed.chars().count() < MIN_MESSAGE_CHARS)
        } else {
            Ok(false)
        }
    }

    fn render_validity(&self, page: &mut Page, field: NodeId, invalid: bool) -> Result<()> {
        page.dom_mut().class_set(field, "invalid", invalid)?;
        let error = match page.dom().parent(field) {
            Some(parent) => page.dom().query_selector_from(parent, ".error-msg")?,
            None => None,
        };
        if let Some(error) = error {
            page.dom_mut().class_set(error, "show", invalid)?;
        }
        Ok(())
    }
}
