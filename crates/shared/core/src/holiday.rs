use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A fixed month/day pair that recurs every year
///
/// Day validity relative to the month is not enforced: a holiday on
/// February 30th is representable and simply never matches any date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    /// Month of the year (1-12)
    pub month: u32,
    /// Day of the month (1-31)
    pub day_in_month: u32,
}

impl Holiday {
    /// December 25th
    pub const CHRISTMAS: Holiday = Holiday::new(12, 25);

    pub const fn new(month: u32, day_in_month: u32) -> Self {
        Self {
            month,
            day_in_month,
        }
    }

    /// Whether `date` falls on this holiday, in any year
    pub fn matches<D: Datelike>(&self, date: &D) -> bool {
        date.month() == self.month && date.day() == self.day_in_month
    }
}

impl Default for Holiday {
    fn default() -> Self {
        Self::CHRISTMAS
    }
}

impl fmt::Display for Holiday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day_in_month)
    }
}

/// Errors from parsing a `MM-DD` holiday string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HolidayParseError {
    #[error("Expected MM-DD, got {0:?}")]
    Format(String),

    #[error("Month out of range (1-12): {0}")]
    MonthOutOfRange(u32),

    #[error("Day out of range (1-31): {0}")]
    DayOutOfRange(u32),
}

impl FromStr for Holiday {
    type Err = HolidayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || HolidayParseError::Format(s.to_string());

        let (month, day) = s.trim().split_once('-').ok_or_else(format_error)?;
        let month: u32 = month.parse().map_err(|_| format_error())?;
        let day: u32 = day.parse().map_err(|_| format_error())?;

        if !(1..=12).contains(&month) {
            return Err(HolidayParseError::MonthOutOfRange(month));
        }
        if !(1..=31).contains(&day) {
            return Err(HolidayParseError::DayOutOfRange(day));
        }

        Ok(Holiday::new(month, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_christmas_matches() {
        let christmas = Holiday::CHRISTMAS;

        assert!(christmas.matches(&date(2024, 12, 25)));
        assert!(!christmas.matches(&date(2024, 12, 24)));
        assert!(!christmas.matches(&date(2024, 12, 26)));
    }

    #[test]
    fn test_year_independent() {
        let christmas = Holiday::CHRISTMAS;

        assert!(christmas.matches(&date(2025, 12, 25)));
        assert!(christmas.matches(&date(1999, 12, 25)));
    }

    #[test]
    fn test_same_day_other_month() {
        let christmas = Holiday::CHRISTMAS;

        assert!(!christmas.matches(&date(2024, 11, 25)));
        assert!(!christmas.matches(&date(2024, 1, 25)));
    }

    #[test]
    fn test_every_day_of_year() {
        let holiday = Holiday::new(7, 4);
        let mut day = date(2024, 1, 1);
        let mut hits = 0;

        while day.year() == 2024 {
            if holiday.matches(&day) {
                hits += 1;
                assert_eq!((day.month(), day.day()), (7, 4));
            }
            day = day.succ_opt().unwrap();
        }

        assert_eq!(hits, 1);
    }

    #[test]
    fn test_impossible_day_never_matches() {
        let holiday = Holiday::new(2, 30);
        let mut day = date(2024, 1, 1);

        while day.year() == 2024 {
            assert!(!holiday.matches(&day));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_default_is_christmas() {
        assert_eq!(Holiday::default(), Holiday::new(12, 25));
    }

    #[test]
    fn test_parse_and_display() {
        let holiday: Holiday = "07-04".parse().unwrap();
        assert_eq!(holiday, Holiday::new(7, 4));
        assert_eq!(holiday.to_string(), "07-04");

        let holiday: Holiday = "1-1".parse().unwrap();
        assert_eq!(holiday, Holiday::new(1, 1));
    }

    #[test]
    fn test_parse_accepts_day_missing_from_month() {
        let holiday: Holiday = "04-31".parse().unwrap();
        assert_eq!(holiday, Holiday::new(4, 31));
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert_eq!(
            "13-01".parse::<Holiday>(),
            Err(HolidayParseError::MonthOutOfRange(13))
        );
        assert_eq!(
            "00-10".parse::<Holiday>(),
            Err(HolidayParseError::MonthOutOfRange(0))
        );
        assert_eq!(
            "12-32".parse::<Holiday>(),
            Err(HolidayParseError::DayOutOfRange(32))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "christmas".parse::<Holiday>(),
            Err(HolidayParseError::Format(_))
        ));
        assert!(matches!(
            "12/25".parse::<Holiday>(),
            Err(HolidayParseError::Format(_))
        ));
        assert!(matches!(
            "12-".parse::<Holiday>(),
            Err(HolidayParseError::Format(_))
        ));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Holiday::CHRISTMAS).unwrap();
        assert_eq!(json, r#"{"month":12,"day_in_month":25}"#);

        let back: Holiday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Holiday::CHRISTMAS);
    }
}
