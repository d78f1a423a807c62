//! Testimonials slider. The index always normalizes into `[0, total)`
//! with euclidean modulo, the track translates by one slide width per
//! index, and exactly one indicator dot is active after any transition.
//! Autoplay pauses while the pointer is over the track. A track with no
//! slides installs inert.

use crate::behaviors::{Action, BehaviorConfig, TimerTask};
use crate::dom::NodeId;
use crate::page::Page;
use crate::Result;

#[derive(Debug)]
pub(crate) struct TestimonialSlider {
    track: NodeId,
    total: usize,
    dots: Vec<NodeId>,
    current: usize,
    autoplay: Option<i64>,
    interval_ms: i64,
}

impl TestimonialSlider {
    pub(crate) fn install(page: &mut Page, config: &BehaviorConfig) -> Result<Option<Self>> {
        let Some(track) = page.dom().query_selector(".slider-track")? else {
            return Ok(None);
        };
        let total = page.dom().query_selector_all_from(track, ".slide")?.len();
        if total == 0 {
            return Ok(None);
        }

        let dots = page.dom().query_selector_all(".dot")?;
        if let Some(prev) = page.dom().query_selector(".slider-btn.prev")? {
            page.add_listener(prev, "click", Action::SliderPrev);
        }
        if let Some(next) = page.dom().query_selector(".slider-btn.next")? {
            page.add_listener(next, "click", Action::SliderNext);
        }
        for (index, dot) in dots.iter().enumerate() {
            page.add_listener(*dot, "click", Action::SliderJump { index });
        }
        page.add_listener(track, "mouseenter", Action::SliderPause);
        page.add_listener(track, "mouseleave", Action::SliderResume);

        if let Some(first) = dots.first() {
            page.dom_mut().class_add(*first, "active")?;
        }
        let autoplay = page.set_interval(TimerTask::SliderAdvance, config.autoplay_interval_ms);

        Ok(Some(Self {
            track,
            total,
            dots,
            current: 0,
            autoplay: Some(autoplay),
            interval_ms: config.autoplay_interval_ms,
        }))
    }

    fn go_to(&mut self, page: &mut Page, index: i64) -> Result<()> {
        self.current = index.rem_euclid(self.total as i64) as usize;
        page.dom_mut().style_set(
            self.track,
            "transform",
            &format!("translateX(-{}%)", self.current * 100),
        )?;
        for (i, dot) in self.dots.iter().enumerate() {
            page.dom_mut().class_set(*dot, "active", i == self.current)?;
        }
        Ok(())
    }

    pub(crate) fn on_prev(&mut self, page: &mut Page) -> Result<()> {
        self.go_to(page, self.current as i64 - 1)
    }

    pub(crate) fn on_next(&mut self, page: &mut Page) -> Result<()> {
        self.go_to(page, self.current as i64 + 1)
    }

    pub(crate) fn on_jump(&mut self, page: &mut Page, index: usize) -> Result<()> {
        self.go_to(page, index as i64)
    }

    pub(crate) fn on_autoplay_tick(&mut self, page: &mut Page) -> Result<()> {
        self.go_to(page, self.current as i64 + 1)
    }

    pub(crate) fn on_pause(&mut self, page: &mut Page) {
        if let Some(timer) = self.autoplay.take() {
            page.clear_timer(timer);
        }
    }

    pub(crate) fn on_resume(&mut self, page: &mut Page) {
        if let Some(timer) = self.autoplay.take() {
            page.clear_timer(timer);
        }
        self.autoplay = Some(page.set_interval(TimerTask::SliderAdvance, self.interval_ms));
    }
}
