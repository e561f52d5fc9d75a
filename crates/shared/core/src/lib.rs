//! Holiday Watch Core Domain
//!
//! Pure domain types for Holiday Watch.
//! This crate contains no async, no I/O, and is 100% unit testable.

pub mod answer;
pub mod holiday;
pub mod values;

// Re-export commonly used types at crate root
pub use answer::{NO, YES, label};
pub use holiday::{Holiday, HolidayParseError};
pub use values::{Timestamp, millis_until_next_second};
