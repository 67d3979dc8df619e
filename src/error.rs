//! Error types for the merch-calendar crate.

use crate::date::Date;

/// Error type for all fallible operations in the merch-calendar crate.
///
/// Every variant represents invalid caller input (or, for the defensive
/// variants, an internal bound check). Nothing here is retryable: the
/// library computes pure functions over small integers and fails loudly
/// at the point of violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year is outside the supported range 1..=9999.
    #[error("invalid year: {year} (must be 1..=9999)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when date arithmetic leaves the supported range
    /// 0001-01-01..=9999-12-31.
    #[error("date arithmetic out of range (serial {serial})")]
    DateOutOfRange {
        /// Serial day number of the unrepresentable result.
        serial: i32,
    },

    /// Returned when a date range has its start after its end.
    #[error("invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// The start date that was provided.
        start: Date,
        /// The end date that was provided.
        end: Date,
    },

    /// Returned when a merchandise week number is outside 0..=53.
    #[error("invalid merchandise week: {week} (must be 0..=53)")]
    InvalidWeek {
        /// The invalid week number that was provided.
        week: u8,
    },

    /// Returned when a merchandise period is outside 1..=12.
    #[error("invalid merchandise period: {period} (must be 1..=12)")]
    InvalidPeriod {
        /// The invalid period number that was provided.
        period: u8,
    },

    /// Returned when a computed quarter number falls outside 1..=4.
    ///
    /// Unreachable for any valid period input; kept as a guard on the
    /// period-to-quarter derivation.
    #[error("invalid merchandise quarter: {quarter} (must be 1..=4)")]
    InvalidQuarter {
        /// The invalid quarter number.
        quarter: u8,
    },

    /// Returned when a season name fails to parse to a known variant.
    #[error("invalid season: {name:?} (must be \"Spring\" or \"Fall\")")]
    InvalidSeason {
        /// The unrecognized season name.
        name: String,
    },

    /// Returned when a merchandise day-of-year is outside its documented
    /// bound (0..=371 for lookup keys, 1..=371 for snapshots).
    #[error("invalid merchandise day of year: {day_of_year} (must be at most 371)")]
    InvalidDayOfYear {
        /// The invalid day-of-year value that was provided.
        day_of_year: u16,
    },

    /// Returned when an index lookup names a day-of-year the merchandise
    /// year does not contain (for example day 366 of a 52-week year).
    #[error("merchandise year {year} has no day {day_of_year}")]
    DayNotInYear {
        /// The merchandise year that was queried.
        year: i32,
        /// The day-of-year the year does not contain.
        day_of_year: u16,
    },
}
