//! Deterministic behavior layer for a static storefront page.
//!
//! The crate models the interactive layer of a small marketing site —
//! navigation toggling, scroll effects, a cart counter with a toast,
//! form validation, a testimonial slider, a product filter — on top of
//! an in-memory DOM with virtual time. Everything a browser would do
//! asynchronously (timers, scrolling, viewport intersection, alerts) is
//! owned by [`Page`] and driven explicitly, so every behavior is
//! reproducible and assertable from plain tests:
//!
//! ```
//! use storefront_behaviors::Page;
//!
//! let html = r#"
//!     <span class='cart-count'>0</span>
//!     <div class='product-card'>
//!       <h3>Sticker Pack</h3>
//!       <button class='add-to-cart'>Add</button>
//!     </div>
//!     <div class='cart-toast'></div>
//! "#;
//! let mut page = Page::from_html(html)?;
//! page.click(".add-to-cart")?;
//! page.assert_text(".cart-count", "1")?;
//! page.assert_has_class(".cart-toast", "show", true)?;
//! page.advance_time(2500)?;
//! page.assert_has_class(".cart-toast", "show", false)?;
//! # Ok::<(), storefront_behaviors::Error>(())
//! ```
//!
//! A behavior unit whose markup hooks are absent installs as inert: the
//! page markup is the only configuration mechanism, exactly like the
//! site it models.

use std::error::Error as StdError;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    HtmlParse(String),
    SelectorNotFound(String),
    UnsupportedSelector(String),
    TypeMismatch {
        selector: String,
        expected: String,
        actual: String,
    },
    Dom(String),
    Pattern(String),
    Harness(String),
    AssertionFailed {
        selector: String,
        expected: String,
        actual: String,
        dom_snippet: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HtmlParse(msg) => write!(f, "html parse error: {msg}"),
            Self::SelectorNotFound(selector) => write!(f, "selector not found: {selector}"),
            Self::UnsupportedSelector(selector) => write!(f, "unsupported selector: {selector}"),
            Self::TypeMismatch {
                selector,
                expected,
                actual,
            } => write!(
                f,
                "type mismatch for {selector}: expected {expected}, actual {actual}"
            ),
            Self::Dom(msg) => write!(f, "dom error: {msg}"),
            Self::Pattern(msg) => write!(f, "pattern error: {msg}"),
            Self::Harness(msg) => write!(f, "harness error: {msg}"),
            Self::AssertionFailed {
                selector,
                expected,
                actual,
                dom_snippet,
            } => write!(
                f,
                "assertion failed for {selector}: expected {expected}, actual {actual}, snippet {dom_snippet}"
            ),
        }
    }
}

impl StdError for Error {}

mod behaviors;
mod dom;
mod html;
mod page;
mod selector;
mod validate;

pub use behaviors::BehaviorConfig;
pub use page::{Page, PendingTimer, ScrollRequest};
