//! Merchandise year boundary resolution.
//!
//! The merchandise year is the 52-week (occasionally 53-week) fiscal year
//! the NRF 4-5-4 calendar is built on. It starts with the first Sunday
//! through Saturday week of February that carries at most three January
//! days; when the 52 weeks leave more than three January days before the
//! following February, a 53rd week is appended. The extra week recurs on a
//! five-to-six year cadence, absorbing the one-day drift between the
//! 364-day merchandise year and the solar year.

use crate::date::Date;
use crate::error::CalendarError;
use crate::period::period_range;
use crate::range::DateRange;

/// Boundary information for one merchandise year.
///
/// Immutable once computed: the range and the extra-week flag are pure
/// functions of the year. The range always starts on a Sunday, ends on a
/// Saturday, and spans exactly 364 days (371 with the extra week).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerchYear {
    year: i32,
    range: DateRange,
    extra_week: bool,
}

impl MerchYear {
    /// Computes the boundaries of the given merchandise year.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is outside the
    /// supported date range (the resolver looks one January past the year,
    /// so 9999 is itself out of reach).
    pub fn new(year: i32) -> Result<Self, CalendarError> {
        let first_of_feb = Date::from_ymd(year, 2, 1)?;
        let weekday = i32::from(first_of_feb.weekday().index());

        // Back up to the Sunday on or before February 1...
        let mut start = first_of_feb.add_days(-weekday)?;

        // ...unless that week holds more than three January days (February 1
        // on Thursday through Saturday); that week closed the prior
        // merchandise year, so this one starts a week later.
        if weekday > 3 {
            start = start.add_days(7)?;
        }

        // 52 weeks, counting the start date itself.
        let mut end = start.add_days(363)?;

        // Ending on or before January 27 would leave more than three January
        // days before the next February: append the 53rd week instead.
        let extra_week = end <= Date::from_ymd(year + 1, 1, 27)?;
        if extra_week {
            end = end.add_days(7)?;
        }

        Ok(Self {
            year,
            range: DateRange::new(start, end)?,
            extra_week,
        })
    }

    /// Returns the merchandise year number.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the inclusive date range of the merchandise year.
    pub fn range(self) -> DateRange {
        self.range
    }

    /// Returns `true` if the year carries a 53rd week.
    pub fn extra_week(self) -> bool {
        self.extra_week
    }

    /// Returns the number of weeks in the year (52 or 53).
    pub fn weeks(self) -> u8 {
        if self.extra_week {
            53
        } else {
            52
        }
    }

    /// Returns `true` if `date` falls within this merchandise year.
    pub fn contains(self, date: Date) -> bool {
        self.range.contains(date)
    }
}

/// Returns the merchandise year a date belongs to.
///
/// A date outside its calendar year's merchandise range belongs to the
/// previous merchandise year (consecutive merchandise years are contiguous,
/// so no further fallback is needed).
///
/// # Errors
///
/// Returns [`CalendarError`] if the containing merchandise year cannot be
/// resolved at the edges of the supported date range.
pub fn merch_year_of(date: Date) -> Result<i32, CalendarError> {
    let year = date.year();
    let merch_year = MerchYear::new(year)?;
    if merch_year.contains(date) {
        Ok(year)
    } else {
        Ok(year - 1)
    }
}

/// Returns the range from the start of the merchandise year through `date`.
///
/// # Errors
///
/// Returns [`CalendarError`] if the merchandise year cannot be resolved.
pub fn year_to_date(date: Date, restated: bool) -> Result<DateRange, CalendarError> {
    let year = merch_year_of(date)?;
    let start = period_range(1, year, restated)?.start();
    DateRange::new(start, date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u8, day: u8) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn fy2023_has_extra_week() {
        // February 1, 2023 is a Wednesday: three January days retained.
        let my = MerchYear::new(2023).unwrap();
        assert_eq!(my.range().start(), d(2023, 1, 29));
        assert_eq!(my.range().end(), d(2024, 2, 3));
        assert!(my.extra_week());
        assert_eq!(my.weeks(), 53);
        assert_eq!(my.range().days(), 371);
    }

    #[test]
    fn fy2024_starts_late() {
        // February 1, 2024 is a Thursday: the four-January-day week belongs
        // to the prior year, so the start is pushed one week later.
        let my = MerchYear::new(2024).unwrap();
        assert_eq!(my.range().start(), d(2024, 2, 4));
        assert_eq!(my.range().end(), d(2025, 2, 1));
        assert!(!my.extra_week());
        assert_eq!(my.range().days(), 364);
    }

    #[test]
    fn fy2026_starts_on_february_first() {
        // February 1, 2026 is itself a Sunday.
        let my = MerchYear::new(2026).unwrap();
        assert_eq!(my.range().start(), d(2026, 2, 1));
        assert_eq!(my.range().end(), d(2027, 1, 30));
        assert!(!my.extra_week());
    }

    #[test]
    fn fy2028_extension_boundary() {
        // The raw 52-week end lands exactly on January 27, 2029, the last
        // serial that still triggers the 53rd week.
        let my = MerchYear::new(2028).unwrap();
        assert_eq!(my.range().start(), d(2028, 1, 30));
        assert_eq!(my.range().end(), d(2029, 2, 3));
        assert!(my.extra_week());
    }

    #[test]
    fn historical_extra_week_cadence() {
        assert!(MerchYear::new(2012).unwrap().extra_week());
        assert!(MerchYear::new(2017).unwrap().extra_week());
        for year in [2013, 2014, 2015, 2016, 2018, 2019, 2020, 2021, 2022] {
            assert!(
                !MerchYear::new(year).unwrap().extra_week(),
                "year {year} should have 52 weeks"
            );
        }
    }

    #[test]
    fn years_are_contiguous() {
        for year in 2000..2040 {
            let this = MerchYear::new(year).unwrap();
            let next = MerchYear::new(year + 1).unwrap();
            assert_eq!(
                this.range().end().add_days(1).unwrap(),
                next.range().start(),
                "gap between merchandise years {year} and {}",
                year + 1
            );
        }
    }

    #[test]
    fn always_sunday_to_saturday() {
        use crate::date::Weekday;
        for year in 2000..2040 {
            let my = MerchYear::new(year).unwrap();
            assert_eq!(my.range().start().weekday(), Weekday::Sunday);
            assert_eq!(my.range().end().weekday(), Weekday::Saturday);
            let days = my.range().days();
            assert!(days == 364 || days == 371, "year {year} spans {days} days");
            assert_eq!(days == 371, my.extra_week());
        }
    }

    #[test]
    fn merch_year_of_inside_range() {
        assert_eq!(merch_year_of(d(2024, 2, 4)).unwrap(), 2024);
        assert_eq!(merch_year_of(d(2024, 7, 15)).unwrap(), 2024);
        assert_eq!(merch_year_of(d(2025, 2, 1)).unwrap(), 2024);
    }

    #[test]
    fn merch_year_of_january_belongs_to_prior_year() {
        assert_eq!(merch_year_of(d(2024, 1, 15)).unwrap(), 2023);
        assert_eq!(merch_year_of(d(2024, 2, 3)).unwrap(), 2023);
    }

    #[test]
    fn year_to_date_range() {
        let range = year_to_date(d(2026, 5, 5), false).unwrap();
        assert_eq!(range.start(), d(2026, 2, 1));
        assert_eq!(range.end(), d(2026, 5, 5));
    }

    #[test]
    fn year_to_date_restated_shifts_start() {
        // FY2023 has the extra week: the restated year starts a week in.
        let range = year_to_date(d(2023, 6, 1), true).unwrap();
        assert_eq!(range.start(), d(2023, 2, 5));
        assert_eq!(range.end(), d(2023, 6, 1));
    }

    #[test]
    fn invalid_year_is_reported() {
        assert!(MerchYear::new(0).is_err());
        assert!(MerchYear::new(10_000).is_err());
    }
}
