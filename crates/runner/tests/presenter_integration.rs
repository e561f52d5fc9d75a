//! Presenter Integration Test
//!
//! Drives the full chain on tokio's paused clock:
//! - ManualClock (time source)
//! - ClockMonitor (background unit)
//! - AnswerPresenter (render task)
//! - A recording view

use holiday_clock::{ManualClock, TimeMode};
use holiday_core::{Holiday, Timestamp};
use holiday_monitor::ClockMonitor;
use holiday_ports::AnswerView;
use holiday_runner::{AnswerPresenter, LineView};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn ts(s: &str) -> Timestamp {
    Timestamp::parse_from_rfc3339(s).unwrap()
}

/// View that records every label it is asked to show
#[derive(Clone, Default)]
struct RecordingView {
    shown: Arc<Mutex<Vec<String>>>,
}

impl RecordingView {
    fn shown(&self) -> Vec<String> {
        self.shown.lock().unwrap().clone()
    }
}

impl AnswerView for RecordingView {
    fn show(&mut self, text: &str) {
        self.shown.lock().unwrap().push(text.to_string());
    }
}

/// Christmas Eve turning into Christmas while the view is visible
#[tokio::test(start_paused = true)]
async fn test_view_follows_midnight() {
    let _ = env_logger::try_init();

    let clock = ManualClock::new(ts("2024-12-24T23:59:58+00:00"), TimeMode::Running);
    let mut presenter = AnswerPresenter::new(ClockMonitor::new(Holiday::CHRISTMAS, clock));
    let view = RecordingView::default();
    let render = presenter.bind(view.clone()).unwrap();

    presenter.on_start().unwrap();
    tokio::time::sleep(Duration::from_millis(3500)).await;
    presenter.shutdown().await.unwrap();
    drop(presenter);
    render.await.unwrap();

    // Checks at 23:59:58, 23:59:59, 00:00:00 and 00:00:01
    assert_eq!(view.shown(), vec!["No", "No", "Yes", "Yes"]);
}

/// Nothing is rendered before the view is first started
#[tokio::test(start_paused = true)]
async fn test_nothing_rendered_before_start() {
    let clock = ManualClock::new(ts("2024-12-25T10:00:00+00:00"), TimeMode::Running);
    let presenter = AnswerPresenter::new(ClockMonitor::new(Holiday::CHRISTMAS, clock));
    let view = RecordingView::default();
    let _render = presenter.bind(view.clone()).unwrap();

    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(view.shown().is_empty());
    assert!(!presenter.monitor().is_running());
}

/// Hiding the view stops updates; showing it again resumes them
#[tokio::test(start_paused = true)]
async fn test_stop_and_restart_visibility() {
    let clock = ManualClock::new(ts("2024-12-25T10:00:00+00:00"), TimeMode::Running);
    let mut presenter = AnswerPresenter::new(ClockMonitor::new(Holiday::CHRISTMAS, clock));
    let view = RecordingView::default();
    let _render = presenter.bind(view.clone()).unwrap();

    presenter.on_start().unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;
    presenter.on_stop();
    assert!(!presenter.monitor().is_running());

    let shown_while_visible = view.shown().len();
    assert_eq!(shown_while_visible, 2);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(view.shown().len(), shown_while_visible);

    presenter.on_start().unwrap();
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(view.shown().len(), shown_while_visible + 1);
    assert_eq!(view.shown().last().map(String::as_str), Some("Yes"));

    presenter.shutdown().await.unwrap();
}

/// The line view collapses repeated answers into single lines
#[tokio::test(start_paused = true)]
async fn test_line_view_prints_changes_only() {
    let clock = ManualClock::new(ts("2024-12-24T23:59:57+00:00"), TimeMode::Running);
    let mut presenter = AnswerPresenter::new(ClockMonitor::new(Holiday::CHRISTMAS, clock));
    let render = presenter.bind(LineView::new(Vec::new())).unwrap();

    presenter.on_start().unwrap();
    tokio::time::sleep(Duration::from_millis(5500)).await;
    presenter.shutdown().await.unwrap();
    drop(presenter);

    let view = render.await.unwrap();
    assert_eq!(view.current(), Some("Yes"));
    assert_eq!(String::from_utf8(view.into_inner()).unwrap(), "No\nYes\n");
}
