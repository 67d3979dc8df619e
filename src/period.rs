//! The twelve 4-5-4 merchandise periods and their date ranges.
//!
//! Each quarter repeats the 4-5-4 week pattern, so periods 2, 5, 8 and 11
//! hold five weeks and all others four. Period 12 owns weeks 49 onward:
//! `period_of_week(53)` is 12, but a period range always spans the
//! period's nominal weeks (49..=52), leaving the 53rd week to the year and
//! season ranges.

use crate::date::Date;
use crate::error::CalendarError;
use crate::range::DateRange;
use crate::season::Season;
use crate::week::{merch_week, validate_week};
use crate::year::{merch_year_of, MerchYear};

pub(crate) fn validate_period(period: u8) -> Result<(), CalendarError> {
    if !(1..=12).contains(&period) {
        return Err(CalendarError::InvalidPeriod { period });
    }
    Ok(())
}

const fn period_weeks(period: u8) -> u8 {
    match period {
        2 | 5 | 8 | 11 => 5,
        _ => 4,
    }
}

/// Returns the number of Sunday-through-Saturday weeks in a period (4 or 5).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidPeriod`] if `period` is outside 1..=12.
pub fn weeks_in_period(period: u8) -> Result<u8, CalendarError> {
    validate_period(period)?;
    Ok(period_weeks(period))
}

/// Returns the merchandise period (1..=12) containing a week number.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWeek`] if `week` is outside 0..=53.
pub fn period_of_week(week: u8) -> Result<u8, CalendarError> {
    validate_week(week)?;
    Ok(match week {
        0..=4 => 1,
        5..=9 => 2,
        10..=13 => 3,
        14..=17 => 4,
        18..=22 => 5,
        23..=26 => 6,
        27..=30 => 7,
        31..=35 => 8,
        36..=39 => 9,
        40..=43 => 10,
        44..=48 => 11,
        _ => 12,
    })
}

/// Returns the merchandise period containing `date`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn period_of_date(date: Date, restated: bool) -> Result<u8, CalendarError> {
    period_of_week(merch_week(date, restated)?)
}

/// Returns the date range of a merchandise period.
///
/// With `restated` set in a 53-week year, the extra week is treated as
/// inserted before the period, shifting every period range forward by one
/// week.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidPeriod`] if `period` is outside 1..=12,
/// or a year resolution error.
pub fn period_range(period: u8, year: i32, restated: bool) -> Result<DateRange, CalendarError> {
    validate_period(period)?;
    let merch_year = MerchYear::new(year)?;

    let mut weeks_to_skip: i32 = (1..period).map(|p| i32::from(period_weeks(p))).sum();
    if merch_year.extra_week() && restated {
        weeks_to_skip += 1;
    }

    let start = merch_year.range().start().add_days(weeks_to_skip * 7)?;
    let end = start.add_days(i32::from(period_weeks(period)) * 7 - 1)?;
    DateRange::new(start, end)
}

/// Returns the date range of the merchandise period containing `date`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn period_range_of(date: Date, restated: bool) -> Result<DateRange, CalendarError> {
    period_range(period_of_date(date, restated)?, merch_year_of(date)?, restated)
}

/// Returns the range from the start of the merchandise period through `date`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn period_to_date(date: Date, restated: bool) -> Result<DateRange, CalendarError> {
    let start = period_range_of(date, restated)?.start();
    DateRange::new(start, date)
}

/// Returns the sales release day of a period: its first Thursday, four days
/// after the period starts.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidPeriod`] if `period` is outside 1..=12,
/// or a year resolution error.
pub fn sales_release_day(period: u8, year: i32) -> Result<Date, CalendarError> {
    period_range(period, year, false)?.start().add_days(4)
}

/// Returns the sales release day of the period containing `date`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn sales_release_day_of(date: Date) -> Result<Date, CalendarError> {
    sales_release_day(period_of_date(date, false)?, merch_year_of(date)?)
}

/// Returns the six sales release days of a season (periods 1..=6 for
/// Spring, 7..=12 for Fall).
///
/// # Errors
///
/// Returns [`CalendarError`] if the merchandise year cannot be resolved.
pub fn sales_release_days_for_season(
    season: Season,
    year: i32,
) -> Result<Vec<Date>, CalendarError> {
    let start_period = match season {
        Season::Spring => 1,
        Season::Fall => 7,
    };
    (start_period..start_period + 6)
        .map(|period| sales_release_day(period, year))
        .collect()
}

/// Returns the twelve sales release days of a merchandise year, period 1
/// through 12 in order.
///
/// # Errors
///
/// Returns [`CalendarError`] if the merchandise year cannot be resolved.
pub fn sales_release_days_for_year(year: i32) -> Result<Vec<Date>, CalendarError> {
    (1..=12).map(|period| sales_release_day(period, year)).collect()
}
