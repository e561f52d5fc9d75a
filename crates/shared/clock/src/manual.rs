use holiday_core::Timestamp;
use holiday_ports::Clock;
use chrono::Duration;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::time::Instant;

/// How a [`ManualClock`] moves between explicit adjustments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeMode {
    /// Advances 1:1 with tokio's clock (virtual time when the runtime is paused)
    #[default]
    Running,
    /// Only moves when explicitly set or advanced
    Frozen,
}

struct Anchor {
    time: Timestamp,
    instant: Instant,
    mode: TimeMode,
}

impl Anchor {
    fn now(&self) -> Timestamp {
        match self.mode {
            TimeMode::Frozen => self.time,
            TimeMode::Running => {
                let elapsed =
                    Duration::from_std(self.instant.elapsed()).unwrap_or(Duration::zero());
                self.time + elapsed
            }
        }
    }
}

/// Clock driven by hand, for deterministic tests and demos
///
/// Time is tracked as an anchor (a timestamp plus the tokio instant it was
/// taken at). In `Running` mode the clock moves forward from the anchor as
/// tokio time passes, so `#[tokio::test(start_paused = true)]` tests can walk
/// it across midnight without waiting.
pub struct ManualClock {
    anchor: RwLock<Anchor>,
}

impl ManualClock {
    /// Create a new manual clock starting at `start`
    pub fn new(start: Timestamp, mode: TimeMode) -> Arc<Self> {
        Arc::new(Self {
            anchor: RwLock::new(Anchor {
                time: start,
                instant: Instant::now(),
                mode,
            }),
        })
    }

    /// Create a clock frozen at `time`
    pub fn frozen(time: Timestamp) -> Arc<Self> {
        Self::new(time, TimeMode::Frozen)
    }

    fn read(&self) -> RwLockReadGuard<'_, Anchor> {
        self.anchor
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Anchor> {
        self.anchor
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Get the current time mode
    pub fn time_mode(&self) -> TimeMode {
        self.read().mode
    }

    /// Switch mode, keeping the current time continuous
    pub fn set_time_mode(&self, mode: TimeMode) {
        let mut anchor = self.write();
        anchor.time = anchor.now();
        anchor.instant = Instant::now();
        anchor.mode = mode;
    }

    /// Jump the clock forward (or backward, with a negative duration)
    pub fn advance(&self, duration: Duration) {
        let mut anchor = self.write();
        anchor.time = anchor.now() + duration;
        anchor.instant = Instant::now();
    }

    /// Explicitly set the current time
    pub fn set_time(&self, time: Timestamp) {
        let mut anchor = self.write();
        anchor.time = time;
        anchor.instant = Instant::now();
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.read().now()
    }

    fn name(&self) -> &str {
        "ManualClock"
    }
}
