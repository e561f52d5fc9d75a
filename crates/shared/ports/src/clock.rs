use holiday_core::Timestamp;

/// Port for time abstraction
///
/// This allows the monitor to use different time sources:
/// - Local system time for production
/// - Manually driven time for deterministic tests
pub trait Clock: Send + Sync {
    /// Get the current local time according to this clock
    fn now(&self) -> Timestamp;

    /// Get the clock's name/identifier for debugging
    fn name(&self) -> &str {
        "Clock"
    }
}
