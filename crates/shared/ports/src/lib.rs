//! Holiday Watch Ports
//!
//! Port definitions (traits) for Holiday Watch.
//! These define the boundaries between domain logic and infrastructure.

mod clock;
mod error;
mod view;

pub use clock::Clock;
pub use error::{ConfigError, ConfigResult, MonitorError, MonitorResult};
pub use view::AnswerView;
