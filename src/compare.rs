//! Year-over-year comparison days.
//!
//! A comparison day is the date in another merchandise year occupying the
//! same week-number and day-of-week position as a given date. Week 53 has
//! no such position in a 52-week year, so the caller picks a policy for it.

use crate::date::Date;
use crate::error::CalendarError;
use crate::week::{merch_week, week_range};

/// How to map a date that falls in the 53rd week onto a comparison year.
///
/// The enum is exhaustive: an unrecognized policy cannot be expressed, so
/// the original's out-of-range policy error has no counterpart here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Week53Policy {
    /// Treat week 53 as week 1 of the following merchandise year.
    AddWeek,
    /// Treat week 53 as week 52 of the same merchandise year.
    SubtractWeek,
    /// Week 53 has no equivalent: the comparison is explicitly absent.
    NonComp,
}

/// Returns the date in merchandise year `year` occupying the same week
/// number and day of week as `date`.
///
/// When `date` falls in a 53rd week, `policy` decides the mapping;
/// [`Week53Policy::NonComp`] yields `Ok(None)`, the explicit
/// "no equivalent day" result (not an error).
///
/// # Errors
///
/// Returns [`CalendarError`] if either merchandise year cannot be resolved.
pub fn comparison_day(
    date: Date,
    year: i32,
    policy: Week53Policy,
) -> Result<Option<Date>, CalendarError> {
    let mut week = merch_week(date, false)?;
    let mut year = year;

    if week == 53 {
        match policy {
            Week53Policy::AddWeek => {
                week = 1;
                year += 1;
            }
            Week53Policy::SubtractWeek => week = 52,
            Week53Policy::NonComp => return Ok(None),
        }
    }

    let start = week_range(week, year, false)?.start();
    // Week ranges run Sunday through Saturday, so the target weekday sits at
    // its own Sunday-based index.
    let offset = (7 + i32::from(date.weekday().index()) - i32::from(start.weekday().index())) % 7;
    Ok(Some(start.add_days(offset)?))
}
