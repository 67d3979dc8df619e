//! The two merchandise seasons and their date ranges.

use std::fmt;
use std::str::FromStr;

use crate::date::Date;
use crate::error::CalendarError;
use crate::range::DateRange;
use crate::week::{merch_week, validate_week, week_range};
use crate::year::{merch_year_of, MerchYear};

/// Merchandise season: Spring covers weeks 1..=26 (periods 1..=6), Fall the
/// rest of the year including any 53rd week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// First half of the merchandise year.
    Spring,
    /// Second half of the merchandise year.
    Fall,
}

impl Season {
    /// Returns the season name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Season {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Spring" => Ok(Self::Spring),
            "Fall" => Ok(Self::Fall),
            _ => Err(CalendarError::InvalidSeason {
                name: s.to_string(),
            }),
        }
    }
}

/// Returns the season a merchandise week belongs to.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidWeek`] if `week` is outside 0..=53.
pub fn season_of_week(week: u8) -> Result<Season, CalendarError> {
    validate_week(week)?;
    if week <= 26 {
        Ok(Season::Spring)
    } else {
        Ok(Season::Fall)
    }
}

/// Returns the season containing `date`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn season_of_date(date: Date, restated: bool) -> Result<Season, CalendarError> {
    season_of_week(merch_week(date, restated)?)
}

/// Returns the date range of a season.
///
/// Spring spans weeks 1..=26. Fall spans week 27 through the end of the
/// year: week 53 when the year has the extra week and is not restated,
/// week 52 otherwise.
///
/// # Errors
///
/// Returns [`CalendarError`] if the merchandise year cannot be resolved.
pub fn season_range(season: Season, year: i32, restated: bool) -> Result<DateRange, CalendarError> {
    let (start_week, end_week) = match season {
        Season::Spring => (1, 26),
        Season::Fall => {
            let extra_week = MerchYear::new(year)?.extra_week();
            let end_week = if extra_week && !restated { 53 } else { 52 };
            (27, end_week)
        }
    };
    let start = week_range(start_week, year, restated)?.start();
    let end = week_range(end_week, year, restated)?.end();
    DateRange::new(start, end)
}

/// Returns the date range of the season containing `date`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved.
pub fn season_range_of(date: Date, restated: bool) -> Result<DateRange, CalendarError> {
    season_range(season_of_date(date, restated)?, merch_year_of(date)?, restated)
}
