use storefront_behaviors::{Page, Result};

const NAV_HTML: &str = r#"
    <header>
      <button class='hamburger'><span></span></button>
      <ul class='nav-links'>
        <li><a href='index.html'>Home</a></li>
        <li><a href='shop.html'>Shop</a></li>
        <li><a href='contact.html'>Contact</a></li>
      </ul>
    </header>
    <nav class='mobile-nav'>
      <a href='index.html'>Home</a>
      <a href='shop.html'>Shop</a>
      <a href='contact.html'>Contact</a>
    </nav>
"#;

#[test]
fn hamburger_toggles_trigger_and_panel_together() -> Result<()> {
    let mut page = Page::from_html(NAV_HTML)?;

    page.click(".hamburger")?;
    page.assert_has_class(".hamburger", "open", true)?;
    page.assert_has_class(".mobile-nav", "open", true)?;

    page.click(".hamburger")?;
    page.assert_has_class(".hamburger", "open", false)?;
    page.assert_has_class(".mobile-nav", "open", false)?;
    Ok(())
}

#[test]
fn selecting_a_panel_link_forces_the_menu_closed() -> Result<()> {
    let mut page = Page::from_html(NAV_HTML)?;

    page.click(".hamburger")?;
    page.click(".mobile-nav a")?;
    page.assert_has_class(".hamburger", "open", false)?;
    page.assert_has_class(".mobile-nav", "open", false)?;

    // Closing an already-closed menu is a no-op, not a toggle.
    page.click(".mobile-nav a")?;
    page.assert_has_class(".mobile-nav", "open", false)?;
    Ok(())
}

#[test]
fn menu_without_hamburger_stays_inert() -> Result<()> {
    let html = "<nav class='mobile-nav'><a href='shop.html'>Shop</a></nav>";
    let mut page = Page::from_html(html)?;

    page.click(".mobile-nav a")?;
    page.assert_has_class(".mobile-nav", "open", false)?;
    Ok(())
}

#[test]
fn current_page_link_is_marked_active_in_both_menus() -> Result<()> {
    let page = Page::from_html_with_path("/site/shop.html", NAV_HTML)?;

    assert_eq!(page.count("a.active")?, 2);
    page.assert_has_class(".nav-links a.active", "active", true)?;
    assert_eq!(
        page.attr_of(".mobile-nav a.active", "href")?.as_deref(),
        Some("shop.html")
    );
    Ok(())
}

#[test]
fn empty_path_segment_falls_back_to_the_home_page() -> Result<()> {
    let page = Page::from_html_with_path("/", NAV_HTML)?;

    assert_eq!(page.count("a.active")?, 2);
    assert_eq!(
        page.attr_of("a.active", "href")?.as_deref(),
        Some("index.html")
    );
    Ok(())
}

#[test]
fn unknown_page_marks_no_link_active() -> Result<()> {
    let page = Page::from_html_with_path("/site/press.html", NAV_HTML)?;
    assert_eq!(page.count("a.active")?, 0);
    Ok(())
}
