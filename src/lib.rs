//! Split an inclusive date range into adjacent, non-overlapping sub-ranges of
//! bounded length.
//!
//! Large date-range queries against an analytical store can be issued chunk by
//! chunk to keep memory usage down:
//!
//! ```
//! use date_chunks::split_into_smaller_intervals;
//!
//! let intervals = split_into_smaller_intervals("2018-08-23", "2018-08-29", 3)?;
//! let rendered: Vec<String> = intervals
//!     .iter()
//!     .map(|(start, end)| format!("{start}/{end}"))
//!     .collect();
//! assert_eq!(
//!     rendered,
//!     ["2018-08-23/2018-08-25", "2018-08-26/2018-08-28", "2018-08-29/2018-08-29"]
//! );
//! # Ok::<(), date_chunks::RangeError>(())
//! ```

mod consts;
mod prelude;
mod range;
mod split;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use range::{DateRange, RangeError};
pub use split::{Chunks, IntervalSplitter, split_into_smaller_intervals};
pub use types::{DaysPerInterval, Month, Year};

use crate::prelude::*;
use chrono::{Datelike, Days, NaiveDate};
use std::ops::{RangeInclusive, Sub};
use std::str::FromStr;

/// A calendar day in the proleptic Gregorian calendar.
/// The year is always within `MIN_YEAR..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Into)]
#[display(fmt = "{:04}-{:02}-{:02}", "_0.year()", "_0.month()", "_0.day()")]
pub struct Date(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl Date {
    /// Creates a date from its components.
    ///
    /// # Errors
    /// Returns the `ParseError` variant naming the first invalid component.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Year::new(year)?;
        Month::new(month)?;
        NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), u32::from(day))
            .map(Self)
            .ok_or(ParseError::InvalidDay { year, month, day })
    }

    // Components are bounded by construction, so the narrowing casts below are lossless.

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn year(&self) -> u16 {
        self.0.year() as u16
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    /// Returns the underlying `chrono` date
    pub const fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Adds `days` to this date.
    /// Returns `None` if the result would pass the last day of `MAX_YEAR`.
    pub fn checked_add_days(self, days: u64) -> Option<Self> {
        self.0
            .checked_add_days(Days::new(days))
            .and_then(|date| Self::try_from(date).ok())
    }

    /// The following day, or `None` on the last day of `MAX_YEAR`.
    pub fn succ(self) -> Option<Self> {
        self.checked_add_days(1)
    }

    /// Signed number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: Self) -> i64 {
        self.0.signed_duration_since(earlier.0).num_days()
    }

    /// Parses one numeric component, allowing only ASCII digits.
    fn parse_component<T: FromStr>(part: &str, digits: RangeInclusive<usize>) -> Result<T, ParseError> {
        if !digits.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(part.to_owned()));
        }
        part.parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(part.to_owned()))
    }
}

impl FromStr for Date {
    type Err = ParseError;

    /// Parses `YYYY-MM-DD`. Month and day may drop their leading zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = s.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {s:?}"
            )));
        };

        let year = Self::parse_component::<u16>(year, YEAR_DIGITS..=YEAR_DIGITS)?;
        let month = Self::parse_component::<u8>(month, 1..=MAX_MONTH_DAY_DIGITS)?;
        let day = Self::parse_component::<u8>(day, 1..=MAX_MONTH_DAY_DIGITS)?;

        Self::from_ymd(year, month, day)
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = ParseError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year()).map_err(|_| ParseError::InvalidFormat(date.to_string()))?;
        Year::new(year)?;
        Ok(Self(date))
    }
}

impl Sub for Date {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        self.days_since(rhs)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_parse_iso_date() {
        let parsed = "2018-08-23".parse::<Date>().unwrap();
        assert_eq!(parsed, date(2018, 8, 23));
        assert_eq!(parsed.year(), 2018);
        assert_eq!(parsed.month(), 8);
        assert_eq!(parsed.day(), 23);
    }

    #[test]
    fn test_parse_without_leading_zeros() {
        assert_eq!("2018-8-3".parse::<Date>().unwrap(), date(2018, 8, 3));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        struct TestCase {
            input:       &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2018/08/23",
                description: "slash separators",
            },
            TestCase {
                input:       "20180823",
                description: "no separators",
            },
            TestCase {
                input:       "2018-08",
                description: "missing day",
            },
            TestCase {
                input:       "2018-08-23-01",
                description: "extra component",
            },
            TestCase {
                input:       "18-08-23",
                description: "two-digit year",
            },
            TestCase {
                input:       "2018-008-23",
                description: "three-digit month",
            },
            TestCase {
                input:       "2018-0a-23",
                description: "non-numeric month",
            },
            TestCase {
                input:       "+018-08-23",
                description: "signed year",
            },
            TestCase {
                input:       " 2018-08-23",
                description: "leading whitespace",
            },
            TestCase {
                input:       "2018--23",
                description: "empty month",
            },
        ];

        for case in &cases {
            let result = case.input.parse::<Date>();
            assert!(
                matches!(result, Err(ParseError::InvalidFormat(_))),
                "Expected InvalidFormat for {} ({:?}), got {:?}",
                case.description,
                case.input,
                result
            );
        }
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!("".parse::<Date>(), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_parse_invalid_components() {
        assert_eq!("0000-01-01".parse::<Date>(), Err(ParseError::InvalidYear(0)));
        assert_eq!("2018-13-01".parse::<Date>(), Err(ParseError::InvalidMonth(13)));
        assert_eq!("2018-00-01".parse::<Date>(), Err(ParseError::InvalidMonth(0)));
        assert_eq!(
            "2018-04-31".parse::<Date>(),
            Err(ParseError::InvalidDay {
                year:  2018,
                month: 4,
                day:   31,
            })
        );
        assert!(matches!("2018-01-00".parse::<Date>(), Err(ParseError::InvalidDay { .. })));
    }

    #[test]
    fn test_leap_day() {
        assert!("2020-02-29".parse::<Date>().is_ok());
        assert!("2000-02-29".parse::<Date>().is_ok());
        assert!(matches!("2018-02-29".parse::<Date>(), Err(ParseError::InvalidDay { .. })));
        assert!(matches!("1900-02-29".parse::<Date>(), Err(ParseError::InvalidDay { .. })));
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2018, 8, 3).to_string(), "2018-08-03");
        assert_eq!(date(987, 1, 5).to_string(), "0987-01-05");
    }

    #[test]
    fn test_display_components_are_digits() {
        let rendered = date(2017, 8, 29).to_string();
        assert!(rendered[0..4].chars().all(|c| c.is_ascii_digit()));
        assert!(rendered[5..7].chars().all(|c| c.is_ascii_digit()));
        assert!(rendered[8..10].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::InvalidYear(0).to_string(), "Invalid year: 0 (must be 1-9999)");
        assert_eq!(
            ParseError::InvalidDay {
                year:  2018,
                month: 4,
                day:   31,
            }
            .to_string(),
            "Invalid day 31 for month 2018-04"
        );
    }

    #[test]
    fn test_subtraction_counts_days() {
        assert_eq!(date(2018, 8, 29) - date(2018, 8, 23), 6);
        assert_eq!(date(2018, 8, 23) - date(2018, 8, 29), -6);
        assert_eq!(date(2018, 8, 29) - date(2017, 8, 29), 365);
        assert_eq!(date(2020, 3, 1) - date(2020, 2, 1), 29);
        assert_eq!(date(2018, 8, 23).days_since(date(2018, 8, 23)), 0);
    }

    #[test]
    fn test_checked_add_days() {
        assert_eq!(date(2018, 7, 23).checked_add_days(29), Some(date(2018, 8, 21)));
        assert_eq!(date(2018, 12, 31).checked_add_days(1), Some(date(2019, 1, 1)));
        assert_eq!(date(2020, 2, 28).checked_add_days(1), Some(date(2020, 2, 29)));
        assert_eq!(date(2018, 8, 23).checked_add_days(0), Some(date(2018, 8, 23)));
    }

    #[test]
    fn test_checked_add_days_past_max_year() {
        assert_eq!(date(9999, 12, 31).checked_add_days(1), None);
        assert_eq!(date(9999, 12, 1).succ(), Some(date(9999, 12, 2)));
        assert_eq!(date(9999, 12, 31).succ(), None);
        assert_eq!(date(1, 1, 1).checked_add_days(u64::MAX), None);
    }

    #[test]
    fn test_naive_date_conversions() {
        let naive = NaiveDate::from_ymd_opt(2018, 8, 23).unwrap();
        let converted = Date::try_from(naive).unwrap();
        assert_eq!(converted, date(2018, 8, 23));
        assert_eq!(NaiveDate::from(converted), naive);
        assert_eq!(converted.as_naive(), naive);

        let too_late = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        assert_eq!(Date::try_from(too_late), Err(ParseError::InvalidYear(10000)));

        let too_early = NaiveDate::from_ymd_opt(0, 12, 31).unwrap();
        assert_eq!(Date::try_from(too_early), Err(ParseError::InvalidYear(0)));

        let negative = NaiveDate::from_ymd_opt(-5, 1, 1).unwrap();
        assert!(matches!(Date::try_from(negative), Err(ParseError::InvalidFormat(_))));
    }

    #[test]
    fn test_ordering() {
        assert!(date(2018, 8, 23) < date(2018, 8, 24));
        assert!(date(2017, 12, 31) < date(2018, 1, 1));
        assert_eq!(date(2018, 8, 23).max(date(2018, 8, 21)), date(2018, 8, 23));
    }

    #[test]
    fn test_serde() {
        let d = date(2018, 8, 23);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""2018-08-23""#);

        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);

        assert!(serde_json::from_str::<Date>(r#""2018-02-30""#).is_err());
    }
}
