use chrono::{DateTime, FixedOffset};
use std::time::Duration;

/// Local wall time, carrying the UTC offset it was read in
pub type Timestamp = DateTime<FixedOffset>;

/// Time left until the next whole-second boundary
///
/// Always in `1..=1000` ms: a timestamp exactly on a boundary waits a full second.
pub fn millis_until_next_second(epoch_millis: i64) -> Duration {
    let into_second = epoch_millis.rem_euclid(1000) as u64;
    Duration::from_millis(1000 - into_second)
}
