//! Concurrent, lazily-populated merchandise date lookup.

use dashmap::DashMap;
use tracing::debug;

use crate::date::Date;
use crate::error::CalendarError;
use crate::merch_date::{merchandise_dates_by_year, MerchandiseDate};
use crate::year::merch_year_of;

/// Alternate identity of a merchandise date: `(year, day_of_year)`.
///
/// Two snapshots with equal keys describe the same calendar date. Day 0 is
/// accepted at construction (the historical validator bound) but no
/// snapshot ever carries it, so looking it up fails with
/// [`CalendarError::DayNotInYear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayOfYearKey {
    year: i32,
    day_of_year: u16,
}

impl DayOfYearKey {
    /// Creates a key, validating `year >= 0` and `day_of_year <= 371`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] or
    /// [`CalendarError::InvalidDayOfYear`] on a bound violation.
    pub fn new(year: i32, day_of_year: u16) -> Result<Self, CalendarError> {
        if year < 0 {
            return Err(CalendarError::InvalidYear { year });
        }
        if day_of_year > 371 {
            return Err(CalendarError::InvalidDayOfYear { day_of_year });
        }
        Ok(Self { year, day_of_year })
    }

    /// Returns the merchandise year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the day within the merchandise year.
    pub fn day_of_year(self) -> u16 {
        self.day_of_year
    }
}

/// A concurrent cache of merchandise date snapshots, keyed both by calendar
/// date and by `(year, day_of_year)`.
///
/// Population is lazy: a miss computes every snapshot of the containing
/// merchandise year (a pure computation) and inserts each under both keys
/// with insert-if-absent. Racing populators of the same year do redundant
/// but identical work; a key is either absent or fully present, never
/// partial. Entries are never evicted.
#[derive(Debug, Default)]
pub struct MerchandiseDateIndex {
    by_date: DashMap<Date, MerchandiseDate>,
    by_day_of_year: DashMap<DayOfYearKey, MerchandiseDate>,
}

impl MerchandiseDateIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot for a calendar date, populating the containing
    /// merchandise year on first access.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the containing merchandise year cannot
    /// be resolved.
    pub fn get(&self, date: Date) -> Result<MerchandiseDate, CalendarError> {
        if let Some(found) = self.by_date.get(&date) {
            return Ok(*found);
        }

        self.populate_year(merch_year_of(date)?)?;

        let found = self
            .by_date
            .get(&date)
            .expect("a populated merchandise year contains all of its dates");
        Ok(*found)
    }

    /// Returns the snapshot for `(year, day_of_year)`, populating the year
    /// on first access.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayNotInYear`] if the populated year does
    /// not contain the requested day (for example day 366..=371 of a
    /// 52-week year), or a key validation / year resolution error.
    pub fn get_by_day_of_year(
        &self,
        year: i32,
        day_of_year: u16,
    ) -> Result<MerchandiseDate, CalendarError> {
        let key = DayOfYearKey::new(year, day_of_year)?;
        if let Some(found) = self.by_day_of_year.get(&key) {
            return Ok(*found);
        }

        self.populate_year(year)?;

        match self.by_day_of_year.get(&key) {
            Some(found) => Ok(*found),
            None => Err(CalendarError::DayNotInYear { year, day_of_year }),
        }
    }

    /// Returns the snapshot in merchandise year `year` occupying the same
    /// day-of-year position as `date`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DayNotInYear`] if `date` sits in a 53rd
    /// week and `year` has only 52, or a year resolution error.
    pub fn comparison_merchandise_date(
        &self,
        year: i32,
        date: Date,
    ) -> Result<MerchandiseDate, CalendarError> {
        let snapshot = self.get(date)?;
        self.get_by_day_of_year(year, snapshot.day_of_year())
    }

    /// Returns the number of cached snapshots.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    fn populate_year(&self, year: i32) -> Result<(), CalendarError> {
        debug!(year, "populating merchandise date index");
        for snapshot in merchandise_dates_by_year(year)? {
            self.by_date.entry(snapshot.date()).or_insert(snapshot);
            let key = DayOfYearKey::new(snapshot.year(), snapshot.day_of_year())?;
            self.by_day_of_year.entry(key).or_insert(snapshot);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(year: i32, month: u8, day: u8) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn key_validation() {
        assert!(DayOfYearKey::new(2024, 0).is_ok());
        assert!(DayOfYearKey::new(2024, 371).is_ok());
        assert_eq!(
            DayOfYearKey::new(-1, 1).unwrap_err(),
            CalendarError::InvalidYear { year: -1 }
        );
        assert_eq!(
            DayOfYearKey::new(2024, 372).unwrap_err(),
            CalendarError::InvalidDayOfYear { day_of_year: 372 }
        );
    }

    #[test]
    fn get_populates_whole_year() {
        let index = MerchandiseDateIndex::new();
        assert!(index.is_empty());
        let md = index.get(d(2024, 6, 15)).unwrap();
        assert_eq!(md.year(), 2024);
        assert_eq!(index.len(), 364);
    }

    #[test]
    fn get_matches_direct_computation() {
        let index = MerchandiseDateIndex::new();
        for date in [d(2024, 2, 4), d(2024, 7, 1), d(2025, 2, 1)] {
            assert_eq!(
                index.get(date).unwrap(),
                crate::merch_date::merchandise_date(date).unwrap()
            );
        }
        // All three dates share FY2024: one population only.
        assert_eq!(index.len(), 364);
    }

    #[test]
    fn get_by_day_of_year_roundtrip() {
        let index = MerchandiseDateIndex::new();
        let md = index.get(d(2023, 8, 10)).unwrap();
        let by_key = index
            .get_by_day_of_year(md.year(), md.day_of_year())
            .unwrap();
        assert_eq!(md, by_key);
    }

    #[test]
    fn day_366_missing_in_52_week_year() {
        let index = MerchandiseDateIndex::new();
        assert!(index.get_by_day_of_year(2024, 364).is_ok());
        assert_eq!(
            index.get_by_day_of_year(2024, 366).unwrap_err(),
            CalendarError::DayNotInYear {
                year: 2024,
                day_of_year: 366,
            }
        );
        // 53-week year holds all 371 days.
        assert!(index.get_by_day_of_year(2023, 371).is_ok());
    }

    #[test]
    fn day_zero_never_present() {
        let index = MerchandiseDateIndex::new();
        assert_eq!(
            index.get_by_day_of_year(2024, 0).unwrap_err(),
            CalendarError::DayNotInYear {
                year: 2024,
                day_of_year: 0,
            }
        );
    }

    #[test]
    fn comparison_by_day_of_year() {
        let index = MerchandiseDateIndex::new();
        // Day 94 of FY2026 is May 5, 2026; the same slot in FY2024.
        let md = index.comparison_merchandise_date(2024, d(2026, 5, 5)).unwrap();
        assert_eq!(md.year(), 2024);
        assert_eq!(md.day_of_year(), 94);
        assert_eq!(md.week(), 14);
    }

    #[test]
    fn comparison_of_week_53_day_into_52_week_year_fails() {
        let index = MerchandiseDateIndex::new();
        // February 3, 2024 is day 371 of FY2023; FY2024 has no day 371.
        assert_eq!(
            index
                .comparison_merchandise_date(2024, d(2024, 2, 3))
                .unwrap_err(),
            CalendarError::DayNotInYear {
                year: 2024,
                day_of_year: 371,
            }
        );
    }
}
