//! Gregorian calendar date as a serial day number.
//!
//! Dates are whole days: the merchandise calendar has no meaningful time
//! component, and ranges treat their end date as included in full. The
//! serial representation (days since 1970-01-01) makes the day arithmetic
//! the week and period engines lean on a single integer add.

use std::fmt;

use crate::error::CalendarError;

/// Serial number of 0001-01-01, the earliest supported date.
const MIN_SERIAL: i32 = serial_from_ymd(1, 1, 1);

/// Serial number of 9999-12-31, the latest supported date.
const MAX_SERIAL: i32 = serial_from_ymd(9999, 12, 31);

/// Day of the week, indexed Sunday = 0 through Saturday = 6.
///
/// Sunday-first indexing is the merchandise calendar convention: every
/// merchandise week runs Sunday through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// Sunday, index 0. First day of every merchandise week.
    Sunday,
    /// Monday, index 1.
    Monday,
    /// Tuesday, index 2.
    Tuesday,
    /// Wednesday, index 3.
    Wednesday,
    /// Thursday, index 4.
    Thursday,
    /// Friday, index 5.
    Friday,
    /// Saturday, index 6. Last day of every merchandise week.
    Saturday,
}

impl Weekday {
    /// Returns the Sunday-based index (0..=6).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub(crate) fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            _ => Self::Saturday,
        }
    }
}

/// A Gregorian calendar date in 0001-01-01..=9999-12-31.
///
/// Internally a serial day count with epoch 1970-01-01 (serial 0).
/// Ordering, equality and hashing all reduce to the serial number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// Creates a new `Date` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is outside 1..=9999, the month
    /// is outside 1..=12, or the day is invalid for the (leap-year aware)
    /// month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if !(1..=9999).contains(&year) {
            return Err(CalendarError::InvalidYear { year });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self(serial_from_ymd(year, month, day)))
    }

    /// Creates a `Date` from a serial already known to be in range.
    pub(crate) fn from_serial_unchecked(serial: i32) -> Self {
        debug_assert!((MIN_SERIAL..=MAX_SERIAL).contains(&serial));
        Self(serial)
    }

    /// Returns the serial day number (days since 1970-01-01).
    pub fn serial(self) -> i32 {
        self.0
    }

    /// Returns the year (1..=9999).
    pub fn year(self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (u8, u8) {
        let (_, month, day) = ymd_from_serial(self.0);
        (month, day)
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        // Serial 0 (1970-01-01) is a Thursday, Sunday-based index 4.
        Weekday::from_index((self.0 + 4).rem_euclid(7) as u8)
    }

    /// Returns this date moved by `days` (negative moves backward).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOutOfRange`] if the result leaves
    /// 0001-01-01..=9999-12-31.
    pub fn add_days(self, days: i32) -> Result<Self, CalendarError> {
        let serial = self.0 + days;
        if !(MIN_SERIAL..=MAX_SERIAL).contains(&serial) {
            return Err(CalendarError::DateOutOfRange { serial });
        }
        Ok(Self(serial))
    }

    /// Returns the signed number of days from `earlier` to `self`.
    pub fn days_since(self, earlier: Self) -> i32 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day) = ymd_from_serial(self.0);
        write!(f, "{year:04}-{month:02}-{day:02}")
    }
}

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given month of the given year.
pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

// Proleptic-Gregorian conversions between (year, month, day) and the serial
// day count, via the era/year-of-era decomposition (400-year cycles of
// 146097 days). Shifted months (March = 0) put the leap day last.

const fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = if month > 2 {
        month as i32 - 3
    } else {
        month as i32 + 9
    };
    let doy = (153 * mp + 2) / 5 + day as i32 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

const fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = if month <= 2 { y + 1 } else { y };
    (year, month, day)
}
