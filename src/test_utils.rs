//! Shorthand constructors shared by the unit tests.

use crate::{Date, DateRange, DaysPerInterval};

pub fn date(year: u16, month: u8, day: u8) -> Date {
    Date::from_ymd(year, month, day).unwrap_or_else(|err| panic!("invalid test date: {err}"))
}

pub fn range(start: (u16, u8, u8), end: (u16, u8, u8)) -> DateRange {
    let start = date(start.0, start.1, start.2);
    let end = date(end.0, end.1, end.2);
    DateRange::new(start, end).unwrap_or_else(|err| panic!("invalid test range: {err}"))
}

pub fn days(n: u32) -> DaysPerInterval {
    DaysPerInterval::new(n).unwrap_or_else(|err| panic!("invalid test chunk size: {err}"))
}
