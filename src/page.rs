//! The page harness: DOM plus every environment primitive the behavior
//! layer leans on in a real browser — event dispatch, cancelable virtual
//! timers, the scroll offset, intersection watches, blocking alerts, and
//! the location path. Listeners are data ([`Action`] values) executed by
//! the harness, so the whole layer stays single-threaded and replayable.

use std::collections::HashMap;

use crate::behaviors::{Action, BehaviorConfig, Behaviors, TimerTask};
use crate::dom::{Dom, NodeId};
use crate::html::parse_html;
use crate::{Error, Result};

const DEFAULT_PATH: &str = "/index.html";

#[derive(Debug, Clone)]
pub(crate) struct EventState {
    pub(crate) event_type: String,
    pub(crate) default_prevented: bool,
}

impl EventState {
    fn new(event_type: &str) -> Self {
        Self {
            event_type: event_type.to_string(),
            default_prevented: false,
        }
    }

    pub(crate) fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[derive(Debug, Default)]
struct ListenerStore {
    map: HashMap<NodeId, HashMap<String, Vec<Action>>>,
}

impl ListenerStore {
    fn add(&mut self, node_id: NodeId, event: String, action: Action) {
        self.map
            .entry(node_id)
            .or_default()
            .entry(event)
            .or_default()
            .push(action);
    }

    fn get(&self, node_id: NodeId, event: &str) -> Vec<Action> {
        self.map
            .get(&node_id)
            .and_then(|events| events.get(event))
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
struct ScheduledTask {
    id: i64,
    due_at: i64,
    order: i64,
    interval_ms: Option<i64>,
    task: TimerTask,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTimer {
    pub id: i64,
    pub due_at: i64,
    pub order: i64,
    pub interval_ms: Option<i64>,
}

/// A programmatic scroll requested by a behavior unit, recorded for
/// assertions since there is no real viewport to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub top: i64,
    pub smooth: bool,
}

#[derive(Debug, Clone)]
struct IntersectionWatch {
    target: NodeId,
    threshold: f64,
    action: Action,
}

pub struct Page {
    dom: Dom,
    listeners: ListenerStore,
    behaviors: Behaviors,
    task_queue: Vec<ScheduledTask>,
    watches: Vec<IntersectionWatch>,
    active_element: Option<NodeId>,
    now_ms: i64,
    timer_step_limit: usize,
    next_timer_id: i64,
    next_task_order: i64,
    running_timer_id: Option<i64>,
    running_timer_canceled: bool,
    scroll_y: i64,
    last_scroll_request: Option<ScrollRequest>,
    layout_flushes: u64,
    alerts: Vec<String>,
    location_path: String,
    trace: bool,
    trace_logs: Vec<String>,
    trace_log_limit: usize,
    trace_to_stderr: bool,
}

impl Page {
    pub fn from_html(html: &str) -> Result<Self> {
        Self::build(DEFAULT_PATH, html, BehaviorConfig::default())
    }

    pub fn from_html_with_path(path: &str, html: &str) -> Result<Self> {
        Self::build(path, html, BehaviorConfig::default())
    }

    pub fn from_html_with_config(html: &str, config: BehaviorConfig) -> Result<Self> {
        Self::build(DEFAULT_PATH, html, config)
    }

    pub fn from_html_with_path_and_config(
        path: &str,
        html: &str,
        config: BehaviorConfig,
    ) -> Result<Self> {
        Self::build(path, html, config)
    }

    fn build(path: &str, html: &str, config: BehaviorConfig) -> Result<Self> {
        let dom = parse_html(html)?;
        let mut page = Self {
            dom,
            listeners: ListenerStore::default(),
            behaviors: Behaviors::default(),
            task_queue: Vec::new(),
            watches: Vec::new(),
            active_element: None,
            now_ms: 0,
            timer_step_limit: 10_000,
            next_timer_id: 1,
            next_task_order: 0,
            running_timer_id: None,
            running_timer_canceled: false,
            scroll_y: 0,
            last_scroll_request: None,
            layout_flushes: 0,
            alerts: Vec::new(),
            location_path: path.to_string(),
            trace: false,
            trace_logs: Vec::new(),
            trace_log_limit: 10_000,
            trace_to_stderr: true,
        };
        let behaviors = Behaviors::install(&mut page, config)?;
        page.behaviors = behaviors;
        Ok(page)
    }

    // ---- tracing ----------------------------------------------------

    pub fn enable_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    pub fn take_trace_logs(&mut self) -> Vec<String> {
        std::mem::take(&mut self.trace_logs)
    }

    pub fn set_trace_stderr(&mut self, enabled: bool) {
        self.trace_to_stderr = enabled;
    }

    fn trace_line(&mut self, line: String) {
        if !self.trace {
            return;
        }
        if self.trace_to_stderr {
            eprintln!("{line}");
        }
        self.trace_logs.push(line);
        while self.trace_logs.len() > self.trace_log_limit {
            self.trace_logs.remove(0);
        }
    }

    // ---- user interaction -------------------------------------------

    pub fn click(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.disabled(target) {
            return Ok(());
        }

        let outcome = self.dispatch_event(target, "click")?;
        if outcome.default_prevented {
            return Ok(());
        }

        if self.is_submit_control(target) {
            if let Some(form) = self.dom.find_ancestor_by_tag(target, "form") {
                self.dispatch_event(form, "submit")?;
            }
        }
        Ok(())
    }

    pub fn type_text(&mut self, selector: &str, text: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        if self.dom.disabled(target) {
            return Ok(());
        }

        let tag = self
            .dom
            .tag_name(target)
            .map(|t| t.to_ascii_lowercase())
            .unwrap_or_default();
        if tag != "input" && tag != "textarea" {
            return Err(Error::TypeMismatch {
                selector: selector.to_string(),
                expected: "input or textarea".into(),
                actual: tag,
            });
        }

        self.focus_node(target)?;
        self.dom.set_value(target, text)?;
        self.dispatch_event(target, "input")?;
        Ok(())
    }

    pub fn focus(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.focus_node(target)
    }

    pub fn blur(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.blur_node(target)
    }

    pub fn submit(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let form = if self
            .dom
            .tag_name(target)
            .map(|t| t.eq_ignore_ascii_case("form"))
            .unwrap_or(false)
        {
            Some(target)
        } else {
            self.dom.find_ancestor_by_tag(target, "form")
        };

        if let Some(form) = form {
            self.dispatch_event(form, "submit")?;
        }
        Ok(())
    }

    pub fn pointer_enter(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dispatch_event(target, "mouseenter")?;
        Ok(())
    }

    pub fn pointer_leave(&mut self, selector: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dispatch_event(target, "mouseleave")?;
        Ok(())
    }

    pub fn dispatch(&mut self, selector: &str, event: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        self.dispatch_event(target, event)?;
        Ok(())
    }

    // ---- scrolling ---------------------------------------------------

    /// Moves the viewport to `y` and fires a `scroll` event on the
    /// document, like a passive scroll listener would observe.
    pub fn set_scroll_y(&mut self, y: i64) -> Result<()> {
        if y < 0 {
            return Err(Error::Harness(
                "set_scroll_y requires a non-negative offset".into(),
            ));
        }
        self.scroll_y = y;
        self.trace_line(format!("[scroll] y={y}"));
        self.dispatch_event(self.dom.root, "scroll")?;
        Ok(())
    }

    pub fn scroll_y(&self) -> i64 {
        self.scroll_y
    }

    /// The most recent programmatic scroll, if any behavior requested one.
    pub fn last_scroll_request(&self) -> Option<&ScrollRequest> {
        self.last_scroll_request.as_ref()
    }

    /// Records a programmatic scroll and moves the offset without firing
    /// a `scroll` event: callers run inside an action, where dispatching
    /// would re-enter the behavior state. The requesting unit updates its
    /// own scroll-dependent rendering directly.
    pub(crate) fn request_scroll(&mut self, top: i64, smooth: bool) {
        self.last_scroll_request = Some(ScrollRequest { top, smooth });
        self.scroll_y = top.max(0);
        self.trace_line(format!("[scroll] request top={top} smooth={smooth}"));
    }

    // ---- intersection observation -----------------------------------

    /// Reports that `selector`'s element is visible at `ratio` of its
    /// area, feeding any registered intersection watch.
    pub fn intersect(&mut self, selector: &str, ratio: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(Error::Harness(format!(
                "intersect requires a ratio in [0, 1], got {ratio}"
            )));
        }
        let target = self.select_one(selector)?;
        let actions = self
            .watches
            .iter()
            .filter(|watch| watch.target == target && ratio >= watch.threshold)
            .map(|watch| watch.action.clone())
            .collect::<Vec<_>>();
        self.trace_line(format!(
            "[intersect] selector={selector} ratio={ratio} fired={}",
            actions.len()
        ));
        for action in actions {
            let mut event = EventState::new("intersect");
            self.run_action(action, &mut event)?;
        }
        Ok(())
    }

    pub(crate) fn observe_intersection(&mut self, target: NodeId, threshold: f64, action: Action) {
        self.watches.push(IntersectionWatch {
            target,
            threshold,
            action,
        });
    }

    pub(crate) fn unobserve_intersection(&mut self, target: NodeId) {
        self.watches.retain(|watch| watch.target != target);
    }

    // ---- alerts ------------------------------------------------------

    pub(crate) fn alert(&mut self, message: &str) {
        self.trace_line(format!("[alert] {message}"));
        self.alerts.push(message.to_string());
    }

    /// Drains the blocking alerts raised since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    // ---- layout ------------------------------------------------------

    pub(crate) fn force_layout(&mut self) {
        self.layout_flushes += 1;
    }

    /// How many forced synchronous layouts behaviors have requested,
    /// e.g. to restart a CSS animation between class writes.
    pub fn layout_flushes(&self) -> u64 {
        self.layout_flushes
    }

    // ---- location ----------------------------------------------------

    pub(crate) fn location_path(&self) -> &str {
        &self.location_path
    }

    // ---- timers ------------------------------------------------------

    pub fn now_ms(&self) -> i64 {
        self.now_ms
    }

    pub fn set_timer_step_limit(&mut self, max_steps: usize) -> Result<()> {
        if max_steps == 0 {
            return Err(Error::Harness(
                "set_timer_step_limit requires at least 1 step".into(),
            ));
        }
        self.timer_step_limit = max_steps;
        Ok(())
    }

    pub(crate) fn set_timeout(&mut self, task: TimerTask, delay_ms: i64) -> i64 {
        self.schedule(task, delay_ms, None)
    }

    pub(crate) fn set_interval(&mut self, task: TimerTask, interval_ms: i64) -> i64 {
        let interval_ms = interval_ms.max(0);
        self.schedule(task, interval_ms, Some(interval_ms))
    }

    fn schedule(&mut self, task: TimerTask, delay_ms: i64, interval_ms: Option<i64>) -> i64 {
        let id = self.next_timer_id;
        self.next_timer_id += 1;
        let order = self.next_task_order;
        self.next_task_order += 1;
        let due_at = self.now_ms.saturating_add(delay_ms.max(0));
        self.trace_line(format!(
            "[timer] schedule id={id} due_at={due_at} interval_ms={interval_ms:?} task={task:?}"
        ));
        self.task_queue.push(ScheduledTask {
            id,
            due_at,
            order,
            interval_ms,
            task,
        });
        id
    }

    pub(crate) fn clear_timer(&mut self, timer_id: i64) -> bool {
        let before = self.task_queue.len();
        self.task_queue.retain(|task| task.id != timer_id);
        let mut existed = self.task_queue.len() != before;
        if self.running_timer_id == Some(timer_id) {
            self.running_timer_canceled = true;
            existed = true;
        }
        self.trace_line(format!("[timer] clear id={timer_id} existed={existed}"));
        existed
    }

    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        let mut timers = self
            .task_queue
            .iter()
            .map(|task| PendingTimer {
                id: task.id,
                due_at: task.due_at,
                order: task.order,
                interval_ms: task.interval_ms,
            })
            .collect::<Vec<_>>();
        timers.sort_by_key(|timer| (timer.due_at, timer.order));
        timers
    }

    pub fn advance_time(&mut self, delta_ms: i64) -> Result<()> {
        if delta_ms < 0 {
            return Err(Error::Harness(
                "advance_time requires non-negative milliseconds".into(),
            ));
        }
        self.now_ms = self.now_ms.saturating_add(delta_ms);
        self.run_timer_queue(Some(self.now_ms), false)?;
        Ok(())
    }

    pub fn advance_time_to(&mut self, target_ms: i64) -> Result<()> {
        if target_ms < self.now_ms {
            return Err(Error::Harness(format!(
                "advance_time_to requires target >= now_ms (target={target_ms}, now_ms={})",
                self.now_ms
            )));
        }
        self.now_ms = target_ms;
        self.run_timer_queue(Some(self.now_ms), false)?;
        Ok(())
    }

    /// Drains the timer queue, advancing the clock to each task. Errors
    /// out at the step limit, which catches a live interval (autoplay)
    /// that nothing will ever cancel.
    pub fn flush(&mut self) -> Result<()> {
        self.run_timer_queue(None, true)?;
        Ok(())
    }

    pub fn run_due_timers(&mut self) -> Result<usize> {
        self.run_timer_queue(Some(self.now_ms), false)
    }

    fn run_timer_queue(&mut self, due_limit: Option<i64>, advance_clock: bool) -> Result<usize> {
        let mut steps = 0usize;
        while let Some(next_idx) = self.next_task_index(due_limit) {
            steps += 1;
            if steps > self.timer_step_limit {
                return Err(Error::Harness(format!(
                    "timer queue exceeded {} steps (possible uncleared interval), now_ms={}, pending={}",
                    self.timer_step_limit,
                    self.now_ms,
                    self.task_queue.len()
                )));
            }
            let task = self.task_queue.remove(next_idx);
            if advance_clock && task.due_at > self.now_ms {
                self.now_ms = task.due_at;
            }
            self.execute_timer_task(task)?;
        }
        Ok(steps)
    }

    fn next_task_index(&self, due_limit: Option<i64>) -> Option<usize> {
        self.task_queue
            .iter()
            .enumerate()
            .filter(|(_, task)| due_limit.is_none_or(|limit| task.due_at <= limit))
            .min_by_key(|(_, task)| (task.due_at, task.order))
            .map(|(idx, _)| idx)
    }

    fn execute_timer_task(&mut self, task: ScheduledTask) -> Result<()> {
        self.trace_line(format!(
            "[timer] run id={} due_at={} now_ms={} task={:?}",
            task.id, task.due_at, self.now_ms, task.task
        ));

        self.running_timer_id = Some(task.id);
        self.running_timer_canceled = false;
        let mut behaviors = std::mem::take(&mut self.behaviors);
        let outcome = behaviors.run_timer(self, &task.task);
        self.behaviors = behaviors;
        let canceled = self.running_timer_canceled;
        self.running_timer_id = None;
        self.running_timer_canceled = false;
        outcome?;

        if let Some(interval_ms) = task.interval_ms {
            if !canceled {
                let order = self.next_task_order;
                self.next_task_order += 1;
                self.task_queue.push(ScheduledTask {
                    id: task.id,
                    due_at: task.due_at.saturating_add(interval_ms),
                    order,
                    interval_ms: Some(interval_ms),
                    task: task.task,
                });
            }
        }
        Ok(())
    }

    // ---- event dispatch ---------------------------------------------

    pub(crate) fn add_listener(&mut self, node_id: NodeId, event: &str, action: Action) {
        self.listeners.add(node_id, event.to_string(), action);
    }

    fn dispatch_event(&mut self, target: NodeId, event_type: &str) -> Result<EventState> {
        let mut event = EventState::new(event_type);

        let mut path = vec![target];
        if event_bubbles(event_type) {
            let mut cursor = self.dom.parent(target);
            while let Some(node) = cursor {
                path.push(node);
                cursor = self.dom.parent(node);
            }
        }

        for node in path {
            for action in self.listeners.get(node, event_type) {
                self.run_action(action, &mut event)?;
            }
        }

        self.trace_line(format!(
            "[event] type={} default_prevented={}",
            event.event_type, event.default_prevented
        ));
        Ok(event)
    }

    fn run_action(&mut self, action: Action, event: &mut EventState) -> Result<()> {
        let mut behaviors = std::mem::take(&mut self.behaviors);
        let outcome = behaviors.run(self, &action, event);
        self.behaviors = behaviors;
        outcome
    }

    fn focus_node(&mut self, node: NodeId) -> Result<()> {
        if self.dom.disabled(node) || self.active_element == Some(node) {
            return Ok(());
        }
        if let Some(current) = self.active_element {
            self.blur_node_inner(current)?;
        }
        self.active_element = Some(node);
        self.dispatch_event(node, "focus")?;
        Ok(())
    }

    fn blur_node(&mut self, node: NodeId) -> Result<()> {
        if self.active_element != Some(node) {
            return Ok(());
        }
        self.blur_node_inner(node)
    }

    fn blur_node_inner(&mut self, node: NodeId) -> Result<()> {
        self.dispatch_event(node, "blur")?;
        self.active_element = None;
        Ok(())
    }

    fn is_submit_control(&self, node: NodeId) -> bool {
        let Some(tag) = self.dom.tag_name(node).map(|t| t.to_ascii_lowercase()) else {
            return false;
        };
        let kind = self
            .dom
            .attr(node, "type")
            .map(|t| t.to_ascii_lowercase());
        match tag.as_str() {
            "button" => kind.as_deref().is_none_or(|k| k == "submit"),
            "input" => kind.as_deref() == Some("submit"),
            _ => false,
        }
    }

    // ---- dom access and assertions ----------------------------------

    pub(crate) fn dom(&self) -> &Dom {
        &self.dom
    }

    pub(crate) fn dom_mut(&mut self) -> &mut Dom {
        &mut self.dom
    }

    fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    pub fn text_of(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.text_content(target))
    }

    pub fn value_of(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.value(target)
    }

    pub fn attr_of(&self, selector: &str, name: &str) -> Result<Option<String>> {
        let target = self.select_one(selector)?;
        Ok(self.dom.attr(target, name))
    }

    pub fn style_of(&self, selector: &str, property: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        self.dom.style_get(target, property)
    }

    pub fn has_class(&self, selector: &str, class_name: &str) -> Result<bool> {
        let target = self.select_one(selector)?;
        self.dom.class_contains(target, class_name)
    }

    pub fn count(&self, selector: &str) -> Result<usize> {
        Ok(self.dom.query_selector_all(selector)?.len())
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        let _ = self.select_one(selector)?;
        Ok(())
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_value(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.value(target)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_has_class(&self, selector: &str, class_name: &str, expected: bool) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.class_contains(target, class_name)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format!(".{class_name} present: {expected}"),
                actual: format!(".{class_name} present: {actual}"),
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn dump_dom(&self, selector: &str) -> Result<String> {
        let target = self.select_one(selector)?;
        Ok(self.dom.dump_node(target))
    }

    fn node_snippet(&self, node_id: NodeId) -> String {
        let dump = self.dom.dump_node(node_id);
        let mut end = dump.len();
        for (count, (idx, _)) in dump.char_indices().enumerate() {
            if count == 200 {
                end = idx;
                break;
            }
        }
        dump[..end].to_string()
    }
}

fn event_bubbles(event_type: &str) -> bool {
    !matches!(event_type, "mouseenter" | "mouseleave" | "focus" | "blur")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_page() -> Page {
        // No behavior hooks: every unit installs inert, so scheduled
        // tasks run against no-op handlers.
        Page::from_html("<div id='only'></div>").expect("blank page parses")
    }

    #[test]
    fn timers_run_in_due_then_insertion_order() -> Result<()> {
        let mut page = blank_page();
        let late = page.set_timeout(TimerTask::ToastDismiss, 200);
        let early_a = page.set_timeout(TimerTask::CartBumpEnd, 100);
        let early_b = page.set_timeout(TimerTask::ToastDismiss, 100);

        let pending = page.pending_timers();
        assert_eq!(
            pending.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![early_a, early_b, late]
        );

        page.advance_time(100)?;
        assert_eq!(page.pending_timers().len(), 1);
        page.advance_time(100)?;
        assert!(page.pending_timers().is_empty());
        Ok(())
    }

    #[test]
    fn cleared_timers_never_fire_and_intervals_requeue() -> Result<()> {
        let mut page = blank_page();
        let doomed = page.set_timeout(TimerTask::ToastDismiss, 50);
        assert!(page.clear_timer(doomed));
        assert!(!page.clear_timer(doomed));

        let interval = page.set_interval(TimerTask::SliderAdvance, 100);
        page.advance_time(250)?;
        let pending = page.pending_timers();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, interval);
        assert_eq!(pending[0].due_at, 300);
        assert_eq!(pending[0].interval_ms, Some(100));

        assert!(page.clear_timer(interval));
        page.advance_time(1_000)?;
        assert!(page.pending_timers().is_empty());
        Ok(())
    }

    #[test]
    fn flush_bails_out_on_a_live_interval() -> Result<()> {
        let mut page = blank_page();
        page.set_timer_step_limit(10)?;
        page.set_interval(TimerTask::SliderAdvance, 5);
        assert!(matches!(page.flush(), Err(Error::Harness(_))));
        Ok(())
    }

    #[test]
    fn clock_only_moves_forward() -> Result<()> {
        let mut page = blank_page();
        page.advance_time(500)?;
        assert_eq!(page.now_ms(), 500);
        assert!(matches!(page.advance_time(-1), Err(Error::Harness(_))));
        assert!(matches!(page.advance_time_to(499), Err(Error::Harness(_))));
        page.advance_time_to(500)?;
        Ok(())
    }

    #[test]
    fn unknown_selectors_surface_as_errors() {
        let page = blank_page();
        assert!(matches!(
            page.assert_exists("#missing"),
            Err(Error::SelectorNotFound(_))
        ));
        assert!(matches!(
            page.text_of("li:last-child"),
            Err(Error::UnsupportedSelector(_))
        ));
    }

    #[test]
    fn trace_log_records_timer_and_alert_activity() -> Result<()> {
        let mut page = blank_page();
        page.enable_trace(true);
        page.set_trace_stderr(false);

        page.set_timeout(TimerTask::ToastDismiss, 10);
        page.advance_time(10)?;
        page.alert("hello");

        let logs = page.take_trace_logs();
        assert!(logs.iter().any(|line| line.starts_with("[timer] schedule")));
        assert!(logs.iter().any(|line| line.starts_with("[timer] run")));
        assert!(logs.iter().any(|line| line == "[alert] hello"));
        assert!(page.take_trace_logs().is_empty());
        Ok(())
    }

    #[test]
    fn type_text_rejects_non_editable_targets() {
        let mut page = blank_page();
        assert!(matches!(
            page.type_text("#only", "hi"),
            Err(Error::TypeMismatch { .. })
        ));
    }
}
