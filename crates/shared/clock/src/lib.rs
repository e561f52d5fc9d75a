//! Holiday Watch Clock Infrastructure
//!
//! Provides time sources for the clock monitor:
//!
//! - [`SystemClock`]: local wall time, for production
//! - [`ManualClock`]: a clock whose time is set by hand, either frozen or
//!   running along with tokio's clock (so paused-time tests can step it)
//!
//! ## Usage
//!
//! ```ignore
//! use holiday_clock::{ManualClock, TimeMode};
//! use chrono::Duration;
//!
//! let start = "2024-12-24T23:59:58+01:00".parse().unwrap();
//! let clock = ManualClock::new(start, TimeMode::Running);
//!
//! clock.set_time_mode(TimeMode::Frozen); // Stop the clock
//! clock.advance(Duration::seconds(5));   // Jump forward
//! ```

mod manual;
mod system;

pub use manual::{ManualClock, TimeMode};
pub use system::SystemClock;

// Re-export the Clock trait for convenience
pub use holiday_ports::Clock;
