//! The behavior layer: one module per feature area of the storefront
//! page. Each unit installs against its markup hooks and stays inert
//! when they are missing. Listeners and timer callbacks are plain data
//! ([`Action`] / [`TimerTask`]) executed by the page harness, so units
//! never hold a reference into the page they mutate.

use crate::dom::NodeId;
use crate::page::{EventState, Page};
use crate::Result;

mod active_link;
mod cart;
mod contact;
mod filter;
mod nav;
mod newsletter;
mod reveal;
mod scroll_top;
mod slider;

/// Behavior constants, grouped so tests can shrink delays or thresholds.
/// The page markup remains the only feature toggle.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Scroll offset above which the scroll-to-top control shows.
    pub scroll_top_threshold_px: i64,
    /// Whether the scroll-to-top control requests a smooth scroll.
    pub smooth_scroll: bool,
    /// Visibility ratio at which a fade-in candidate reveals.
    pub reveal_threshold: f64,
    /// How long the cart toast stays up before auto-dismissing.
    pub toast_dismiss_ms: i64,
    /// Duration of the cart counter bump pulse.
    pub cart_bump_ms: i64,
    /// Slider autoplay advance interval.
    pub autoplay_interval_ms: i64,
    /// How long the contact form success message stays up.
    pub success_hide_ms: i64,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            scroll_top_threshold_px: 400,
            smooth_scroll: true,
            reveal_threshold: 0.15,
            toast_dismiss_ms: 2500,
            cart_bump_ms: 300,
            autoplay_interval_ms: 5000,
            success_hide_ms: 6000,
        }
    }
}

/// A listener payload: which unit reacts, and to what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    NavToggle,
    NavClose,
    ScrollCheck,
    ScrollTopClick,
    Reveal { target: NodeId },
    CartAdd { button: NodeId },
    NewsletterSubmit,
    ContactBlur { field: NodeId },
    ContactInput { field: NodeId },
    ContactSubmit,
    SliderPrev,
    SliderNext,
    SliderJump { index: usize },
    SliderPause,
    SliderResume,
    FilterSelect { button: NodeId },
}

/// A timer payload. Each re-triggerable concern owns at most one
/// outstanding timer at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TimerTask {
    ToastDismiss,
    CartBumpEnd,
    SliderAdvance,
    ContactSuccessHide,
}

#[derive(Debug, Default)]
pub(crate) struct Behaviors {
    nav: Option<nav::NavMenu>,
    scroll_top: Option<scroll_top::ScrollTop>,
    reveal: Option<reveal::FadeInReveal>,
    cart: Option<cart::CartCounter>,
    newsletter: Option<newsletter::NewsletterForm>,
    contact: Option<contact::ContactForm>,
    slider: Option<slider::TestimonialSlider>,
    filter: Option<filter::ProductFilter>,
}

impl Behaviors {
    /// Installs every unit in document order. A unit with missing hooks
    /// registers nothing and owns no state.
    pub(crate) fn install(page: &mut Page, config: BehaviorConfig) -> Result<Self> {
        let nav = nav::NavMenu::install(page)?;
        active_link::highlight(page)?;
        let scroll_top = scroll_top::ScrollTop::install(page, &config)?;
        let reveal = reveal::FadeInReveal::install(page, &config)?;
        let cart = cart::CartCounter::install(page, &config)?;
        let newsletter = newsletter::NewsletterForm::install(page)?;
        let contact = contact::ContactForm::install(page, &config)?;
        let slider = slider::TestimonialSlider::install(page, &config)?;
        let filter = filter::ProductFilter::install(page)?;
        Ok(Self {
            nav,
            scroll_top,
            reveal,
            cart,
            newsletter,
            contact,
            slider,
            filter,
        })
    }

    pub(crate) fn run(
        &mut self,
        page: &mut Page,
        action: &Action,
        event: &mut EventState,
    ) -> Result<()> {
        match action {
            Action::NavToggle => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.on_toggle(page)?;
                }
            }
            Action::NavClose => {
                if let Some(nav) = self.nav.as_mut() {
                    nav.on_close(page)?;
                }
            }
            Action::ScrollCheck => {
                if let Some(scroll_top) = self.scroll_top.as_mut() {
                    scroll_top.on_scroll(page)?;
                }
            }
            Action::ScrollTopClick => {
                if let Some(scroll_top) = self.scroll_top.as_mut() {
                    scroll_top.on_click(page)?;
                }
            }
            Action::Reveal { target } => {
                if let Some(reveal) = self.reveal.as_mut() {
                    reveal.on_reveal(page, *target)?;
                }
            }
            Action::CartAdd { button } => {
                if let Some(cart) = self.cart.as_mut() {
                    cart.on_add(page, *button)?;
                }
            }
            Action::NewsletterSubmit => {
                if let Some(newsletter) = self.newsletter.as_mut() {
                    newsletter.on_submit(page, event)?;
                }
            }
            Action::ContactBlur { field } => {
                if let Some(contact) = self.contact.as_mut() {
                    contact.on_blur(page, *field)?;
                }
            }
            Action::ContactInput { field } => {
                if let Some(contact) = self.contact.as_mut() {
                    contact.on_input(page, *field)?;
                }
            }
            Action::ContactSubmit => {
                if let Some(contact) = self.contact.as_mut() {
                    contact.on_submit(page, event)?;
                }
            }
            Action::SliderPrev => {
                if let Some(slider) = self.slider.as_mut() {
                    slider.on_prev(page)?;
                }
            }
            Action::SliderNext => {
                if let Some(slider) = self.slider.as_mut() {
                    slider.on_next(page)?;
                }
            }
            Action::SliderJump { index } => {
                if let Some(slider) = self.slider.as_mut() {
                    slider.on_jump(page, *index)?;
                }
            }
            Action::SliderPause => {
                if let Some(slider) = self.slider.as_mut() {
                    slider.on_pause(page);
                }
            }
            Action::SliderResume => {
                if let Some(slider) = self.slider.as_mut() {
                    slider.on_resume(page);
                }
            }
            Action::FilterSelect { button } => {
                if let Some(filter) = self.filter.as_mut() {
                    filter.on_select(page, *button)?;
                }
            }
        }
        Ok(())
    }

    pub(crate) fn run_timer(&mut self, page: &mut Page, task: &TimerTask) -> Result<()> {
        match task {
            TimerTask::ToastDismiss => {
                if let Some(cart) = self.cart.as_mut() {
                    cart.on_toast_dismiss(page)?;
                }
            }
            TimerTask::CartBumpEnd => {
                if let Some(cart) = self.cart.as_mut() {
                    cart.on_bump_end(page)?;
                }
            }
            TimerTask::SliderAdvance => {
                if let Some(slider) = self.slider.as_mut() {
                    slider.on_autoplay_tick(page)?;
                }
            }
            TimerTask::ContactSuccessHide => {
                if let Some(contact) = self.contact.as_mut() {
                    contact.on_success_hide(page)?;
                }
            }
        }
        Ok(())
    }
}
