//! Holiday Runner - Presentation layer for Holiday Watch
//!
//! Wires the pieces together for a visible surface:
//!
//! - **Config**: holiday selection from JSON, command line, or environment
//! - **Args**: command-line parsing for the `holiday-watch` binary
//! - **Presenter**: binds view visibility to the monitor's start/stop and
//!   renders answers as "Yes" / "No"
//! - **View**: line-oriented terminal view
//!
//! ## Architecture
//!
//! ```text
//!  ┌──────────────┐  Yes/No  ┌────────────────┐  answers  ┌──────────────┐
//!  │   LineView   │ ◀─────── │ AnswerPresenter│ ◀──────── │ ClockMonitor │
//!  │  (stdout)    │  show()  │  (render task) │  (watch)  │  (bg unit)   │
//!  └──────────────┘          └────────────────┘           └──────────────┘
//!                                on_start() / on_stop() ───────▲
//! ```

pub mod args;
pub mod config;
pub mod presenter;
pub mod view;

// Re-export main types
pub use args::{ArgsError, Command, RunOptions, parse_args};
pub use config::WatchConfig;
pub use presenter::{AnswerPresenter, render};
pub use view::LineView;
