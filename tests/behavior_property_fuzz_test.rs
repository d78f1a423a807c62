use proptest::prelude::*;
use storefront_behaviors::Page;

const SLIDER_HTML: &str = r#"
    <div class='slider-track'>
      <div class='slide'>a</div>
      <div class='slide'>b</div>
      <div class='slide'>c</div>
      <div class='slide'>d</div>
    </div>
    <button class='slider-btn prev'>&lt;</button>
    <button class='slider-btn next'>&gt;</button>
    <div class='dots'>
      <button id='dot-0' class='dot'></button>
      <button id='dot-1' class='dot'></button>
      <button id='dot-2' class='dot'></button>
      <button id='dot-3' class='dot'></button>
    </div>
"#;

const SLIDER_TOTAL: i64 = 4;

#[derive(Clone, Debug)]
enum SliderOp {
    Next,
    Prev,
    Jump(usize),
}

fn slider_op() -> impl Strategy<Value = SliderOp> {
    prop_oneof![
        Just(SliderOp::Next),
        Just(SliderOp::Prev),
        (0usize..4).prop_map(SliderOp::Jump),
    ]
}

fn fuzz_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(fuzz_config())]

    /// After any sequence of transitions the index equals the euclidean
    /// modulo of the model, and exactly one indicator is active.
    #[test]
    fn slider_index_always_normalizes(ops in proptest::collection::vec(slider_op(), 1..40)) {
        let mut page = Page::from_html(SLIDER_HTML).unwrap();
        // Park the pointer on the track so autoplay cannot interleave.
        page.pointer_enter(".slider-track").unwrap();

        let mut model: i64 = 0;
        for op in ops {
            match op {
                SliderOp::Next => {
                    page.click(".slider-btn.next").unwrap();
                    model += 1;
                }
                SliderOp::Prev => {
                    page.click(".slider-btn.prev").unwrap();
                    model -= 1;
                }
                SliderOp::Jump(index) => {
                    page.click(&format!("#dot-{index}")).unwrap();
                    model = index as i64;
                }
            }
            model = model.rem_euclid(SLIDER_TOTAL);

            prop_assert_eq!(page.count(".dot.active").unwrap(), 1);
            let active_dot = format!("#dot-{model}");
            prop_assert!(page.has_class(&active_dot, "active").unwrap());
            prop_assert_eq!(
                page.style_of(".slider-track", "transform").unwrap(),
                format!("translateX(-{}%)", model * 100)
            );
        }
    }

    #[test]
    fn well_formed_emails_subscribe(
        local in "[A-Za-z0-9._%+-]{1,10}",
        host in "[a-z0-9-]{1,10}",
        tld in "[a-z]{2,6}",
    ) {
        let html = r#"
            <form class='newsletter-form'>
              <input type='email'>
            </form>
        "#;
        let mut page = Page::from_html(html).unwrap();
        page.type_text("input[type=email]", &format!("{local}@{host}.{tld}")).unwrap();
        page.submit(".newsletter-form").unwrap();
        prop_assert_eq!(
            page.take_alerts(),
            vec!["🎉 Thank you for subscribing!".to_string()]
        );
    }

    #[test]
    fn emails_without_an_at_or_dot_are_rejected(
        local in "[A-Za-z0-9.]{1,12}",
        host in "[a-z0-9]{1,12}",
    ) {
        let html = r#"
            <form class='newsletter-form'>
              <input type='email'>
            </form>
        "#;
        let mut page = Page::from_html(html).unwrap();

        // No @ at all.
        page.type_text("input[type=email]", &local).unwrap();
        page.submit(".newsletter-form").unwrap();
        prop_assert_eq!(
            page.take_alerts(),
            vec!["Please enter a valid email address.".to_string()]
        );

        // An @ but no dot after it.
        page.type_text("input[type=email]", &format!("{local}@{host}")).unwrap();
        page.submit(".newsletter-form").unwrap();
        prop_assert_eq!(
            page.take_alerts(),
            vec!["Please enter a valid email address.".to_string()]
        );
    }

    /// The displayed count equals the number of add interactions, on
    /// every counter display simultaneously.
    #[test]
    fn cart_count_tracks_add_interactions(adds in proptest::collection::vec(0usize..2, 1..30)) {
        let html = r#"
            <span id='count-a' class='cart-count'>0</span>
            <span id='count-b' class='cart-count'>0</span>
            <div class='product-card'><h3>Bear</h3><button id='add-0' class='add-to-cart'>Add</button></div>
            <div class='product-card'><h3>Bunny</h3><button id='add-1' class='add-to-cart'>Add</button></div>
            <div class='cart-toast'></div>
        "#;
        let mut page = Page::from_html(html).unwrap();

        for (n, which) in adds.iter().enumerate() {
            page.click(&format!("#add-{which}")).unwrap();
            let expected = (n + 1).to_string();
            prop_assert_eq!(page.text_of("#count-a").unwrap(), expected.clone());
            prop_assert_eq!(page.text_of("#count-b").unwrap(), expected);
        }
    }
}
