//! Inclusive date ranges and lazy day iteration.

use crate::date::Date;
use crate::error::CalendarError;

/// An inclusive range of whole calendar days.
///
/// Both endpoints are included: a one-week range spans seven dates. The
/// original reporting convention of running the end date through
/// 23:59:59.999 is expressed here simply by the end date belonging to the
/// range in full; no sub-day arithmetic exists anywhere in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Creates a new `DateRange` from inclusive start and end dates.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDateRange`] if `start` is after
    /// `end`. Violations are reported, never silently swapped.
    pub fn new(start: Date, end: Date) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first date of the range.
    pub fn start(self) -> Date {
        self.start
    }

    /// Returns the last date of the range.
    pub fn end(self) -> Date {
        self.end
    }

    /// Returns the number of days in the range, both endpoints included.
    pub fn days(self) -> u32 {
        (self.end.serial() - self.start.serial()) as u32 + 1
    }

    /// Returns `true` if `date` lies within the range (endpoints included).
    pub fn contains(self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns a lazy iterator over every date in the range.
    ///
    /// The iterator is finite and restartable: `DateRange` is `Copy`, so
    /// calling `iter` again walks the range from the start.
    pub fn iter(self) -> DateIter {
        DateIter {
            next: self.start.serial(),
            last: self.end.serial(),
        }
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lazy iterator over the days of a [`DateRange`], in ascending order.
#[derive(Debug, Clone)]
pub struct DateIter {
    next: i32,
    last: i32,
}

impl Iterator for DateIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        if self.next > self.last {
            return None;
        }
        let date = Date::from_serial_unchecked(self.next);
        self.next += 1;
        Some(date)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.last {
            0
        } else {
            (self.last - self.next) as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateIter {}

impl std::iter::FusedIterator for DateIter {}

/// Returns a lazy iterator over every date from `start` through `end`,
/// both included.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidDateRange`] if `start` is after `end`.
pub fn dates_between(start: Date, end: Date) -> Result<DateIter, CalendarError> {
    Ok(DateRange::new(start, end)?.iter())
}
