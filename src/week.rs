//! Merchandise week numbering and week date ranges.

use crate::date::{Date, Weekday};
use crate::error::CalendarError;
use crate::range::DateRange;
use crate::year::{merch_year_of, MerchYear};

pub(crate) fn validate_week(week: u8) -> Result<(), CalendarError> {
    // 0 is the "no comparable week" sentinel produced by restatement.
    if week > 53 {
        return Err(CalendarError::InvalidWeek { week });
    }
    Ok(())
}

/// Returns the merchandise week (1..=53) a date falls in.
///
/// With `restated` set, week numbers in a 53-week year are shifted down by
/// one so that later dates line up with the 52-week convention. Dates in
/// the first (lost) week then report week 0, the "no comparable week"
/// sentinel. An explicit no-equivalent-day signal for the 53rd week itself
/// is the job of [`comparison_day`](crate::compare::comparison_day), not of
/// this raw mapping.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn merch_week(date: Date, restated: bool) -> Result<u8, CalendarError> {
    let merch_year = MerchYear::new(merch_year_of(date)?)?;
    let days = date.days_since(merch_year.range().start());
    let mut week = (days / 7 + 1) as u8;
    if merch_year.extra_week() && restated {
        week -= 1;
    }
    Ok(week)
}

/// Returns the Sunday-through-Saturday date range of a merchandise week.
///
/// With `restated` set in a 53-week year the week is shifted forward by one
/// internally: restated week N occupies raw week N + 1 once the extra week
/// is inserted.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWeek`] if `week` is outside 0..=53, or a
/// year resolution error.
pub fn week_range(week: u8, year: i32, restated: bool) -> Result<DateRange, CalendarError> {
    validate_week(week)?;
    let merch_year = MerchYear::new(year)?;
    let week = if merch_year.extra_week() && restated {
        week + 1
    } else {
        week
    };
    let start = merch_year
        .range()
        .start()
        .add_days(7 * (i32::from(week) - 1))?;
    let end = start.add_days(6)?;
    DateRange::new(start, end)
}

/// Returns the date range of the merchandise week containing `date`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn week_range_of(date: Date, restated: bool) -> Result<DateRange, CalendarError> {
    week_range(merch_week(date, restated)?, merch_year_of(date)?, restated)
}

/// Returns the range from the start of the merchandise week through `date`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn week_to_date(date: Date, restated: bool) -> Result<DateRange, CalendarError> {
    let start = week_range_of(date, restated)?.start();
    DateRange::new(start, date)
}

/// Returns the week-to-date range for the given weekday of a merchandise
/// week identified by number and year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWeek`] if `week` is outside 0..=53, or a
/// year resolution error.
pub fn week_to_date_for(
    week: u8,
    year: i32,
    weekday: Weekday,
    restated: bool,
) -> Result<DateRange, CalendarError> {
    let range = week_range(week, year, restated)?;
    let start = range.start();
    let offset = (7 + i32::from(weekday.index()) - i32::from(start.weekday().index())) % 7;
    week_to_date(start.add_days(offset)?, restated)
}
