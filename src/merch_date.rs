//! The per-date merchandise snapshot and its aggregation.

use crate::date::Date;
use crate::error::CalendarError;
use crate::period::period_of_week;
use crate::quarter::quarter_of_period;
use crate::range::DateRange;
use crate::week::merch_week;
use crate::year::{merch_year_of, MerchYear};

/// Display names for periods 1..=12. Period 1 opens the year in February;
/// period 12 closes it in January.
const PERIOD_NAMES: [&str; 12] = [
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
    "January",
];

/// Returns the display name of a merchandise period.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidPeriod`] if `period` is outside 1..=12.
pub fn period_name(period: u8) -> Result<&'static str, CalendarError> {
    crate::period::validate_period(period)?;
    Ok(PERIOD_NAMES[usize::from(period) - 1])
}

/// An immutable merchandise-calendar snapshot of one calendar date.
///
/// Every field is validated at construction; an out-of-range value is a
/// construction error, never a clamped value. Two snapshots with equal
/// `(year, day_of_year)` describe the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerchandiseDate {
    date: Date,
    day_of_year: u16,
    period: u8,
    period_name: &'static str,
    quarter: u8,
    quarter_name: &'static str,
    week: u8,
    year: i32,
}

impl MerchandiseDate {
    /// Builds a snapshot, validating every field range.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if `day_of_year` is outside 1..=371,
    /// `period` outside 1..=12, `quarter` outside 1..=4, `week` outside
    /// 1..=53, or `year` outside 1..=9999.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: Date,
        day_of_year: u16,
        period: u8,
        period_name: &'static str,
        quarter: u8,
        quarter_name: &'static str,
        week: u8,
        year: i32,
    ) -> Result<Self, CalendarError> {
        if !(1..=371).contains(&day_of_year) {
            return Err(CalendarError::InvalidDayOfYear { day_of_year });
        }
        crate::period::validate_period(period)?;
        if !(1..=4).contains(&quarter) {
            return Err(CalendarError::InvalidQuarter { quarter });
        }
        if !(1..=53).contains(&week) {
            return Err(CalendarError::InvalidWeek { week });
        }
        if !(1..=9999).contains(&year) {
            return Err(CalendarError::InvalidYear { year });
        }
        Ok(Self {
            date,
            day_of_year,
            period,
            period_name,
            quarter,
            quarter_name,
            week,
            year,
        })
    }

    /// Returns the calendar date this snapshot describes.
    pub fn date(self) -> Date {
        self.date
    }

    /// Returns the 1-based day within the merchandise year (1..=371).
    pub fn day_of_year(self) -> u16 {
        self.day_of_year
    }

    /// Returns the merchandise period (1..=12).
    pub fn period(self) -> u8 {
        self.period
    }

    /// Returns the period display name.
    pub fn period_name(self) -> &'static str {
        self.period_name
    }

    /// Returns the quarter number (1..=4).
    pub fn quarter(self) -> u8 {
        self.quarter
    }

    /// Returns the quarter name.
    pub fn quarter_name(self) -> &'static str {
        self.quarter_name
    }

    /// Returns the merchandise week (1..=53).
    pub fn week(self) -> u8 {
        self.week
    }

    /// Returns the merchandise year.
    pub fn year(self) -> i32 {
        self.year
    }
}

/// Returns the 1-based day of the merchandise year (1..=371).
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn merch_day_of_year(date: Date) -> Result<u16, CalendarError> {
    let week = u16::from(merch_week(date, false)?);
    let day_of_week = u16::from(date.weekday().index()) + 1;
    Ok((week - 1) * 7 + day_of_week)
}

/// Builds the full merchandise snapshot for one calendar date.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn merchandise_date(date: Date) -> Result<MerchandiseDate, CalendarError> {
    let year = merch_year_of(date)?;
    let week = merch_week(date, false)?;
    let period = period_of_week(week)?;
    let quarter = quarter_of_period(period, year)?;

    MerchandiseDate::new(
        date,
        merch_day_of_year(date)?,
        period,
        period_name(period)?,
        quarter.number(),
        quarter.name(),
        week,
        year,
    )
}

/// Builds snapshots for every date in `range`, in ascending order.
///
/// # Errors
///
/// Returns [`CalendarError`] if any date's merchandise year cannot be
/// resolved.
pub fn merchandise_dates_between(
    range: DateRange,
) -> Result<Vec<MerchandiseDate>, CalendarError> {
    range.iter().map(merchandise_date).collect()
}

/// Builds snapshots for every date of a merchandise year, day 1 through
/// day 364 or 371.
///
/// # Errors
///
/// Returns [`CalendarError`] if the merchandise year cannot be resolved.
pub fn merchandise_dates_by_year(year: i32) -> Result<Vec<MerchandiseDate>, CalendarError> {
    merchandise_dates_between(MerchYear::new(year)?.range())
}
