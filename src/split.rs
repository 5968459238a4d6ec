//! Splitting of an inclusive date range into adjacent chunks.
//!
//! Chunk `i` of a range starting at `start` covers
//! `start + i * n ..= start + (i + 1) * n - 1` days, where `n` is the chunk
//! size. There are `(end - start) / n + 1` chunks and the last one is cut
//! short at `end`.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Date, DateRange, DaysPerInterval, RangeError};

/// Iterator over the chunks of a [`DateRange`], earliest first.
///
/// Created by [`DateRange::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks {
    range: DateRange,
    step:  DaysPerInterval,
    front: u64,
    back:  u64,
}

impl Chunks {
    fn new(range: DateRange, step: DaysPerInterval) -> Self {
        let span = range.len_days() - 1;
        let count = span / u64::from(step.get()) + 1;
        Self {
            range,
            step,
            front: 0,
            back: count,
        }
    }

    /// Chunk at `index`. Only the last chunk can reach past the range end,
    /// including past the last representable day, so its end is clamped.
    fn chunk(&self, index: u64) -> DateRange {
        let step = u64::from(self.step.get());
        let (start, end) = self.range.dates();

        let chunk_start = start.checked_add_days(index * step).unwrap_or(end);
        let chunk_end = start
            .checked_add_days((index + 1) * step - 1)
            .map_or(end, |candidate| candidate.min(end));

        DateRange::from_ordered(chunk_start, chunk_end)
    }

    fn remaining(&self) -> u64 {
        self.back - self.front
    }
}

impl Iterator for Chunks {
    type Item = DateRange;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let chunk = self.chunk(self.front);
        self.front += 1;
        Some(chunk)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Chunks {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.chunk(self.back))
    }
}

impl ExactSizeIterator for Chunks {}

impl FusedIterator for Chunks {}

impl DateRange {
    /// Lazily splits the range into adjacent chunks of `days_per_interval`
    /// days. The last chunk may be shorter.
    pub fn chunks(self, days_per_interval: DaysPerInterval) -> Chunks {
        Chunks::new(self, days_per_interval)
    }

    /// Splits the range into adjacent chunks of `days_per_interval` days.
    /// The last chunk may be shorter.
    pub fn split(self, days_per_interval: DaysPerInterval) -> Vec<Self> {
        self.chunks(days_per_interval).collect()
    }
}

/// Splitting configuration.
///
/// Deserializes from `{"days_per_interval": n}`; a missing field means the
/// default of 30 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntervalSplitter {
    #[serde(default)]
    pub days_per_interval: DaysPerInterval,
}

impl IntervalSplitter {
    pub const fn new(days_per_interval: DaysPerInterval) -> Self {
        Self { days_per_interval }
    }

    pub fn split(&self, range: DateRange) -> Vec<DateRange> {
        let chunks = range.chunks(self.days_per_interval);
        debug!(
            start = %range.start(),
            end = %range.end(),
            days_per_interval = self.days_per_interval.get(),
            intervals = chunks.len(),
            "splitting date range"
        );
        chunks.collect()
    }

    /// Splits `start..=end`.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `start` is after `end`.
    pub fn split_dates(&self, start: Date, end: Date) -> Result<Vec<DateRange>, RangeError> {
        let range = DateRange::new(start, end).inspect_err(|err| debug!(%err, "rejected date range"))?;
        Ok(self.split(range))
    }

    /// Parses two `YYYY-MM-DD` dates and splits the range between them.
    ///
    /// # Errors
    /// Returns `RangeError::ParseError` if either date fails to parse and
    /// `RangeError::InvalidRange` if `start` is after `end`.
    pub fn split_str(&self, start: &str, end: &str) -> Result<Vec<DateRange>, RangeError> {
        let parse = |s: &str| {
            s.parse::<Date>()
                .inspect_err(|err| debug!(input = s, %err, "rejected date"))
        };
        let start = parse(start)?;
        let end = parse(end)?;
        self.split_dates(start, end)
    }
}

/// Splits the inclusive range `start_date..=end_date`, both given as
/// `YYYY-MM-DD`, into adjacent `(start, end)` pairs of at most
/// `days_per_interval` days each. Only the last pair can be shorter.
///
/// [`DEFAULT_DAYS_PER_INTERVAL`](crate::DEFAULT_DAYS_PER_INTERVAL) is the
/// conventional chunk size.
///
/// # Errors
/// - `RangeError::ParseError` if either date is not a valid `YYYY-MM-DD` date.
/// - `RangeError::InvalidRange` if `start_date` is after `end_date`.
/// - `RangeError::InvalidIntervalLength` if `days_per_interval` is 0.
pub fn split_into_smaller_intervals(
    start_date: &str,
    end_date: &str,
    days_per_interval: u32,
) -> Result<Vec<(Date, Date)>, RangeError> {
    let splitter = IntervalSplitter::new(DaysPerInterval::new(days_per_interval)?);
    let intervals = splitter.split_str(start_date, end_date)?;
    Ok(intervals.into_iter().map(Into::into).collect())
}
