use storefront_behaviors::{BehaviorConfig, Error, Page, Result, ScrollRequest};

const SCROLL_HTML: &str = "<button class='scroll-top'>↑</button>";

#[test]
fn control_shows_strictly_above_the_threshold() -> Result<()> {
    let mut page = Page::from_html(SCROLL_HTML)?;

    page.set_scroll_y(400)?;
    page.assert_has_class(".scroll-top", "visible", false)?;

    page.set_scroll_y(401)?;
    page.assert_has_class(".scroll-top", "visible", true)?;

    page.set_scroll_y(120)?;
    page.assert_has_class(".scroll-top", "visible", false)?;
    Ok(())
}

#[test]
fn clicking_the_control_requests_a_smooth_scroll_to_top() -> Result<()> {
    let mut page = Page::from_html(SCROLL_HTML)?;

    page.set_scroll_y(900)?;
    page.assert_has_class(".scroll-top", "visible", true)?;

    page.click(".scroll-top")?;
    assert_eq!(page.scroll_y(), 0);
    assert_eq!(
        page.last_scroll_request(),
        Some(&ScrollRequest {
            top: 0,
            smooth: true
        })
    );
    page.assert_has_class(".scroll-top", "visible", false)?;
    Ok(())
}

#[test]
fn threshold_is_configurable() -> Result<()> {
    let config = BehaviorConfig {
        scroll_top_threshold_px: 100,
        smooth_scroll: false,
        ..BehaviorConfig::default()
    };
    let mut page = Page::from_html_with_config(SCROLL_HTML, config)?;

    page.set_scroll_y(101)?;
    page.assert_has_class(".scroll-top", "visible", true)?;

    page.click(".scroll-top")?;
    assert_eq!(
        page.last_scroll_request(),
        Some(&ScrollRequest {
            top: 0,
            smooth: false
        })
    );
    Ok(())
}

#[test]
fn negative_scroll_offset_is_rejected() -> Result<()> {
    let mut page = Page::from_html(SCROLL_HTML)?;
    assert!(matches!(page.set_scroll_y(-1), Err(Error::Harness(_))));
    Ok(())
}

const REVEAL_HTML: &str = r#"
    <section id='hero' class='fade-in'>Hero</section>
    <section id='story' class='fade-in'>Story</section>
    <section id='plain'>Not a candidate</section>
"#;

#[test]
fn candidate_reveals_at_the_visibility_threshold() -> Result<()> {
    let mut page = Page::from_html(REVEAL_HTML)?;

    page.intersect("#hero", 0.10)?;
    page.assert_has_class("#hero", "visible", false)?;

    page.intersect("#hero", 0.15)?;
    page.assert_has_class("#hero", "visible", true)?;

    // Independent candidates reveal independently.
    page.assert_has_class("#story", "visible", false)?;
    page.intersect("#story", 1.0)?;
    page.assert_has_class("#story", "visible", true)?;
    Ok(())
}

#[test]
fn reveal_is_one_shot_and_ignores_non_candidates() -> Result<()> {
    let mut page = Page::from_html(REVEAL_HTML)?;

    page.intersect("#hero", 0.5)?;
    page.intersect("#hero", 0.0)?;
    page.intersect("#hero", 1.0)?;
    page.assert_has_class("#hero", "visible", true)?;

    page.intersect("#plain", 1.0)?;
    page.assert_has_class("#plain", "visible", false)?;
    Ok(())
}

#[test]
fn out_of_range_ratio_is_rejected() -> Result<()> {
    let mut page = Page::from_html(REVEAL_HTML)?;
    assert!(matches!(
        page.intersect("#hero", 1.5),
        Err(Error::Harness(_))
    ));
    assert!(matches!(
        page.intersect("#hero", -0.1),
        Err(Error::Harness(_))
    ));
    Ok(())
}
