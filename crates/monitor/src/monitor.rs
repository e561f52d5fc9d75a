//! Clock Monitor - owns the background unit and its start/stop lifecycle
//!
//! The unit checks for a stop request only while sleeping between checks,
//! so `stop()` takes effect within one second at worst, and a check that was
//! already running when `stop()` was called may still publish once.

use crate::answer::{AnswerCell, AnswerReceiver};
use holiday_core::{Holiday, millis_until_next_second};
use holiday_ports::{Clock, MonitorError, MonitorResult};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// A launched background unit
struct Unit {
    id: Uuid,
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// Periodically publishes whether "today" is the configured holiday
pub struct ClockMonitor {
    holiday: Holiday,
    clock: Arc<dyn Clock>,
    answer: AnswerCell,
    unit: Option<Unit>,
}

impl ClockMonitor {
    /// Create a stopped monitor
    pub fn new(holiday: Holiday, clock: Arc<dyn Clock>) -> Self {
        Self {
            holiday,
            clock,
            answer: AnswerCell::new(),
            unit: None,
        }
    }

    /// The holiday being watched for
    pub fn holiday(&self) -> Holiday {
        self.holiday
    }

    /// Handle on the published answer
    pub fn answer(&self) -> &AnswerCell {
        &self.answer
    }

    /// Subscribe to answer publications
    pub fn subscribe(&self) -> AnswerReceiver {
        self.answer.subscribe()
    }

    /// Whether a background unit is currently active
    pub fn is_running(&self) -> bool {
        self.unit
            .as_ref()
            .is_some_and(|unit| !unit.handle.is_finished())
    }

    /// Identifier of the current background unit, if one is held
    pub fn unit_id(&self) -> Option<Uuid> {
        self.unit.as_ref().map(|unit| unit.id)
    }

    /// Launch the background unit
    ///
    /// No-op while a unit is active. A held unit that has already exited on
    /// its own is replaced with a fresh one. Must be called from within a
    /// tokio runtime.
    pub fn start(&mut self) -> MonitorResult<()> {
        if let Some(unit) = &self.unit {
            if !unit.handle.is_finished() {
                log::debug!("[monitor {}] Already running", unit.id);
                return Ok(());
            }
            log::warn!("[monitor {}] Unit exited unexpectedly, replacing", unit.id);
            self.unit = None;
        }

        let runtime = Handle::try_current().map_err(|_| MonitorError::NoRuntime)?;

        let id = Uuid::new_v4();
        let (stop_tx, stop_rx) = oneshot::channel();
        let handle = runtime.spawn(run_unit(
            id,
            self.holiday,
            Arc::clone(&self.clock),
            self.answer.clone(),
            stop_rx,
        ));

        log::info!(
            "[monitor {}] Started watching for {} using {}",
            id,
            self.holiday,
            self.clock.name()
        );
        self.unit = Some(Unit {
            id,
            stop_tx,
            handle,
        });
        Ok(())
    }

    /// Request the background unit to stop and forget it
    ///
    /// No-op when not running. Returns immediately; the unit exits at its
    /// next sleep point.
    pub fn stop(&mut self) {
        // Detaching the handle is fine: the unit exits on its own
        let _ = self.signal_stop();
    }

    /// Stop the background unit and wait for it to exit
    ///
    /// Once this returns, nothing further is published. Reports a unit that
    /// panicked as [`MonitorError::UnitFailed`].
    pub async fn shutdown(&mut self) -> MonitorResult<()> {
        let Some(handle) = self.signal_stop() else {
            return Ok(());
        };

        handle
            .await
            .map_err(|e| MonitorError::UnitFailed(e.to_string()))
    }

    fn signal_stop(&mut self) -> Option<JoinHandle<()>> {
        let unit = self.unit.take()?;

        // Err only means the unit already exited
        let _ = unit.stop_tx.send(());
        log::info!("[monitor {}] Stop requested", unit.id);

        Some(unit.handle)
    }
}

impl Drop for ClockMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Body of the background unit
async fn run_unit(
    id: Uuid,
    holiday: Holiday,
    clock: Arc<dyn Clock>,
    answer: AnswerCell,
    mut stop_rx: oneshot::Receiver<()>,
) {
    loop {
        let today = clock.now();
        let is_holiday = holiday.matches(&today);
        answer.publish(is_holiday);
        log::debug!(
            "[monitor {}] {} is holiday: {}",
            id,
            today.date_naive(),
            is_holiday
        );

        let pause = millis_until_next_second(clock.now().timestamp_millis());

        tokio::select! {
            _ = tokio::time::sleep(pause) => {}
            // Explicit stop, or the monitor was dropped
            _ = &mut stop_rx => {
                log::debug!("[monitor {}] Stop received while sleeping", id);
                break;
            }
        }
    }

    log::info!("[monitor {}] Stopped", id);
}
