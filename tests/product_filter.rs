use storefront_behaviors::{Page, Result};

const FILTER_HTML: &str = r#"
    <div class='filters'>
      <button id='f-all' class='filter-btn active' data-filter='all'>All</button>
      <button id='f-plush' class='filter-btn' data-filter='plush'>Plush</button>
      <button id='f-paper' class='filter-btn' data-filter='stationery'>Stationery</button>
      <button id='f-wood' class='filter-btn' data-filter='wooden'>Wooden</button>
    </div>
    <div id='card-bear' class='product-card' data-category='plush'><h3>Bear</h3></div>
    <div id='card-bunny' class='product-card' data-category='plush'><h3>Bunny</h3></div>
    <div id='card-notes' class='product-card' data-category='stationery'><h3>Notebook</h3></div>
    <div id='card-misc' class='product-card'><h3>Uncategorized</h3></div>
"#;

#[test]
fn selecting_a_category_hides_everything_else() -> Result<()> {
    let mut page = Page::from_html(FILTER_HTML)?;

    page.click("#f-plush")?;

    page.assert_has_class("#f-plush", "active", true)?;
    page.assert_has_class("#f-all", "active", false)?;
    assert_eq!(page.count(".filter-btn.active")?, 1);

    assert_eq!(page.style_of("#card-bear", "display")?, "");
    assert_eq!(page.style_of("#card-bunny", "display")?, "");
    assert_eq!(page.style_of("#card-notes", "display")?, "none");

    page.assert_has_class("#card-bear", "fade-in", true)?;
    page.assert_has_class("#card-bear", "visible", true)?;
    Ok(())
}

#[test]
fn the_universal_filter_restores_every_card() -> Result<()> {
    let mut page = Page::from_html(FILTER_HTML)?;

    page.click("#f-plush")?;
    assert_eq!(page.style_of("#card-notes", "display")?, "none");

    page.click("#f-all")?;
    for selector in ["#card-bear", "#card-bunny", "#card-notes"] {
        assert_eq!(page.style_of(selector, "display")?, "");
        page.assert_has_class(selector, "visible", true)?;
    }
    assert_eq!(page.count(".filter-btn.active")?, 1);
    page.assert_has_class("#f-all", "active", true)?;
    Ok(())
}

#[test]
fn a_category_with_no_cards_hides_them_all() -> Result<()> {
    let mut page = Page::from_html(FILTER_HTML)?;

    page.click("#f-wood")?;
    for selector in ["#card-bear", "#card-bunny", "#card-notes"] {
        assert_eq!(page.style_of(selector, "display")?, "none");
    }
    Ok(())
}

#[test]
fn cards_without_a_category_are_not_managed() -> Result<()> {
    let mut page = Page::from_html(FILTER_HTML)?;

    page.click("#f-plush")?;
    // The uncategorized card has no data-category hook, so the filter
    // never touches it.
    assert_eq!(page.style_of("#card-misc", "display")?, "");
    page.assert_has_class("#card-misc", "visible", false)?;
    Ok(())
}

#[test]
fn filter_without_buttons_or_cards_stays_inert() -> Result<()> {
    let html = "<div class='product-card' data-category='plush'><h3>Bear</h3></div>";
    let page = Page::from_html(html)?;
    assert_eq!(page.style_of(".product-card", "display")?, "");
    Ok(())
}
