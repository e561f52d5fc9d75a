//! Answer Presenter - binds view lifecycle to the clock monitor
//!
//! Mirrors a screen's visibility: `on_start()` when the view becomes
//! visible, `on_stop()` when it is hidden. Rendering is a separate task that
//! observes the answer for as long as the monitor exists, independent of
//! whether it is currently running.

use holiday_core::label;
use holiday_monitor::{AnswerReceiver, ClockMonitor};
use holiday_ports::{AnswerView, MonitorError, MonitorResult};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Presentation adapter for a single "is it the holiday?" view
pub struct AnswerPresenter {
    monitor: ClockMonitor,
}

impl AnswerPresenter {
    pub fn new(monitor: ClockMonitor) -> Self {
        Self { monitor }
    }

    pub fn monitor(&self) -> &ClockMonitor {
        &self.monitor
    }

    /// View became visible: start publishing answers
    pub fn on_start(&mut self) -> MonitorResult<()> {
        self.monitor.start()
    }

    /// View was hidden: stop publishing answers
    pub fn on_stop(&mut self) {
        self.monitor.stop();
    }

    /// Like [`on_stop`](Self::on_stop), but waits until the monitor's unit has exited
    pub async fn shutdown(&mut self) -> MonitorResult<()> {
        self.monitor.shutdown().await
    }

    /// Attach a view and keep it rendered
    ///
    /// The render task shows the current answer right away, then every
    /// publication. It ends, handing the view back, once the presenter is
    /// dropped.
    pub fn bind<V>(&self, view: V) -> MonitorResult<JoinHandle<V>>
    where
        V: AnswerView + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| MonitorError::NoRuntime)?;
        Ok(runtime.spawn(render(self.monitor.subscribe(), view)))
    }
}

/// Render answers from `rx` into `view` until the answer cell is gone
///
/// Unset answers leave the view untouched.
pub async fn render<V: AnswerView>(mut rx: AnswerReceiver, mut view: V) -> V {
    let answer = *rx.borrow_and_update();
    if let Some(text) = label(answer) {
        view.show(text);
    }

    while rx.changed().await.is_ok() {
        let answer = *rx.borrow_and_update();
        match label(answer) {
            Some(text) => view.show(text),
            None => log::trace!("Answer unset, keeping previous text"),
        }
    }

    log::debug!("Answer cell closed, render task done");
    view
}
