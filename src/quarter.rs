//! Merchandise quarters: three periods each, named by season of the year.

use crate::date::Date;
use crate::error::CalendarError;
use crate::period::{period_of_date, period_range, validate_period};
use crate::range::DateRange;
use crate::year::merch_year_of;

/// One merchandise quarter of a specific year.
///
/// Quarters group periods 1-3, 4-6, 7-9 and 10-12; the date range spans
/// the first through the last period of the group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quarter {
    number: u8,
    name: &'static str,
    year: i32,
    range: DateRange,
}

impl Quarter {
    /// Returns the quarter number (1..=4).
    pub fn number(self) -> u8 {
        self.number
    }

    /// Returns the quarter name.
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Returns the merchandise year the quarter belongs to.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the inclusive date range of the quarter.
    pub fn range(self) -> DateRange {
        self.range
    }
}

/// Returns the quarter containing a merchandise period.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidPeriod`] if `period` is outside 1..=12,
/// or a year resolution error. [`CalendarError::InvalidQuarter`] guards the
/// computed number and is unreachable for valid periods.
pub fn quarter_of_period(period: u8, year: i32) -> Result<Quarter, CalendarError> {
    validate_period(period)?;
    let number = period.div_ceil(3);

    let name = match number {
        1 => "Spring",
        2 => "Summer",
        3 => "Fall",
        4 => "Winter",
        _ => return Err(CalendarError::InvalidQuarter { quarter: number }),
    };

    let first_period = (number - 1) * 3 + 1;
    let last_period = number * 3;
    let start = period_range(first_period, year, false)?.start();
    let end = period_range(last_period, year, false)?.end();

    Ok(Quarter {
        number,
        name,
        year,
        range: DateRange::new(start, end)?,
    })
}

/// Returns the quarter containing `date`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn quarter_of_date(date: Date, restated: bool) -> Result<Quarter, CalendarError> {
    quarter_of_period(period_of_date(date, restated)?, merch_year_of(date)?)
}
