use holiday_core::Timestamp;
use holiday_ports::Clock;
use chrono::Local;

/// Real system clock for production use
///
/// Returns the current wall-clock time in the machine's local time zone.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Local::now().fixed_offset()
    }

    fn name(&self) -> &str {
        "SystemClock"
    }
}
