//! Marks the navigation link for the current page. Runs once at install;
//! a full reload is assumed between pages.

use crate::page::Page;
use crate::Result;

const HOME_PAGE: &str = "index.html";

pub(crate) fn highlight(page: &mut Page) -> Result<()> {
    let last_segment = page
        .location_path()
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string();
    let current = if last_segment.is_empty() {
        HOME_PAGE.to_string()
    } else {
        last_segment
    };

    let links = page
        .dom()
        .query_selector_all(".nav-links a, .mobile-nav a")?;
    for link in links {
        if page.dom().attr(link, "href").as_deref() == Some(current.as_str()) {
            page.dom_mut().class_add(link, "active")?;
        }
    }
    Ok(())
}
