use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Date, ParseError, RANGE_SEPARATOR, prelude::*};

/// Represents an inclusive range of calendar days.
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: Date,
    end:   Date,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: Date, end: Date },

    /// Chunk size of zero days.
    #[error("Invalid interval length: {0} days (must be at least 1)")]
    InvalidIntervalLength(u32),

    /// Error parsing a date.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: Date, end: Date) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Builds a range from bounds the caller already knows are ordered.
    pub(crate) fn from_ordered(start: Date, end: Date) -> Self {
        debug_assert!(start <= end, "unordered bounds {start}/{end}");
        Self { start, end }
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (Date, Date) {
        (self.start, self.end)
    }

    /// Number of days in the range, counting both ends.
    pub fn len_days(&self) -> u64 {
        self.end.days_since(self.start).unsigned_abs() + 1
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Checks if `next` starts on the day right after this range ends,
    /// leaving neither a gap nor an overlap.
    pub fn is_followed_by(&self, next: &Self) -> bool {
        self.end.succ() == Some(next.start)
    }
}

impl From<DateRange> for (Date, Date) {
    fn from(range: DateRange) -> Self {
        range.dates()
    }
}

impl TryFrom<(Date, Date)> for DateRange {
    type Error = RangeError;

    fn try_from((start, end): (Date, Date)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        match trimmed.split_once(RANGE_SEPARATOR) {
            None => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            Some((_, rest)) if rest.contains(RANGE_SEPARATOR) => {
                let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
                Err(RangeError::InvalidFormat(format!(
                    "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
                )))
            },
            Some((start, end)) => {
                let start = start.trim().parse::<Date>()?;
                let end = end.trim().parse::<Date>()?;

                Self::new(start, end)
            },
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.end.cmp(&other.end))
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
