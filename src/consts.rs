/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of digits in the year component of `YYYY-MM-DD`
pub const YEAR_DIGITS: usize = 4;

/// Maximum number of digits in the month and day components of `YYYY-MM-DD`
pub const MAX_MONTH_DAY_DIGITS: usize = 2;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';

/// Chunk size used when the caller does not pick one
pub const DEFAULT_DAYS_PER_INTERVAL: u32 = 30;
