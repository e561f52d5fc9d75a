//! Holiday Monitor - Periodic "is it the holiday yet?" check
//!
//! A [`ClockMonitor`] owns at most one background unit (a tokio task) that:
//!
//! 1. reads the current local time from a [`Clock`](holiday_ports::Clock)
//! 2. compares month and day against the configured [`Holiday`](holiday_core::Holiday)
//! 3. publishes the result to the [`AnswerCell`]
//! 4. sleeps until the next whole-second boundary, or exits if stopped
//!
//! ```text
//!  ┌──────────┐  now()  ┌──────────────┐ publish ┌────────────┐ subscribe ┌───────────┐
//!  │  Clock   │ ──────▶ │ ClockMonitor │ ──────▶ │ AnswerCell │ ────────▶ │ observers │
//!  └──────────┘         │  (bg unit)   │         │  (watch)   │           └───────────┘
//!                       └──────────────┘         └────────────┘
//! ```

pub mod answer;
pub mod monitor;

pub use answer::{AnswerCell, AnswerReceiver};
pub use monitor::ClockMonitor;
