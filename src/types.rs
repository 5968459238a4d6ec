use crate::consts::{DEFAULT_DAYS_PER_INTERVAL, MAX_MONTH, MAX_YEAR, MIN_YEAR};
use crate::{ParseError, RangeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU16, NonZeroU32, NonZeroU8};

/// A year value guaranteed to be in the range `MIN_YEAR..=MAX_YEAR` (1..=9999)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        let non_zero = NonZeroU16::new(value).ok_or(ParseError::InvalidYear(value))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ParseError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Maximum number of days in every produced sub-interval except possibly the last.
///
/// Zero is unrepresentable; the default is [`DEFAULT_DAYS_PER_INTERVAL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DaysPerInterval(NonZeroU32);

impl DaysPerInterval {
    pub const DEFAULT: Self = match NonZeroU32::new(DEFAULT_DAYS_PER_INTERVAL) {
        Some(days) => Self(days),
        None => panic!("default days per interval must be non-zero"),
    };

    /// Creates a chunk size of `value` days.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidIntervalLength` if the value is 0.
    pub fn new(value: u32) -> Result<Self, RangeError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(RangeError::InvalidIntervalLength(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for DaysPerInterval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NonZeroU32> for DaysPerInterval {
    fn from(days: NonZeroU32) -> Self {
        Self(days)
    }
}

impl TryFrom<u32> for DaysPerInterval {
    type Error = RangeError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DaysPerInterval> for u32 {
    fn from(days: DaysPerInterval) -> Self {
        days.0.get()
    }
}

impl fmt::Display for DaysPerInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
