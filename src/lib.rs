//! # merch-calendar
//!
//! Conversions between Gregorian calendar dates and the NRF 4-5-4 retail
//! merchandise calendar: a 52- or 53-week fiscal year starting in February,
//! divided into 12 periods (4-5-4 weeks per quarter), four quarters and two
//! seasons, with "restatement" support for comparing 53-week years against
//! 52-week ones.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["MerchYear (boundaries)"] --> B["week engine"]
//!     B --> C["period engine"]
//!     C --> D["quarter / season"]
//!     B --> E["comparison_day"]
//!     D --> F["MerchandiseDate (snapshot)"]
//!     F --> G["MerchandiseDateIndex (cache)"]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use merch_calendar::{merchandise_date, Date, MerchYear};
//!
//! // FY2024 runs February 4, 2024 through February 1, 2025.
//! let fy2024 = MerchYear::new(2024)?;
//! assert!(!fy2024.extra_week());
//! assert_eq!(fy2024.range().days(), 364);
//!
//! let snapshot = merchandise_date(Date::from_ymd(2024, 6, 15)?)?;
//! assert_eq!(snapshot.year(), 2024);
//! assert_eq!(snapshot.quarter_name(), "Summer");
//! # Ok::<(), merch_calendar::CalendarError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Serial-number Gregorian date and weekday |
//! | `range` | Inclusive date ranges and lazy day iteration |
//! | `year` | Merchandise year boundary resolution |
//! | `week` | Week numbering and week date ranges |
//! | `period` | 4-5-4 periods, period ranges, sales release days |
//! | `quarter` | Quarter grouping and names |
//! | `season` | Spring/Fall split and season ranges |
//! | `compare` | Year-over-year comparison days (week 53 policies) |
//! | `merch_date` | Per-date snapshot and aggregation |
//! | `index` | Concurrent lazily-populated snapshot cache |
//! | `error` | Error types |

mod compare;
mod date;
mod error;
mod index;
mod merch_date;
mod period;
mod quarter;
mod range;
mod season;
mod week;
mod year;

pub use compare::{comparison_day, Week53Policy};
pub use date::{is_leap_year, Date, Weekday};
pub use error::CalendarError;
pub use index::{DayOfYearKey, MerchandiseDateIndex};
pub use merch_date::{
    merch_day_of_year, merchandise_date, merchandise_dates_between, merchandise_dates_by_year,
    period_name, MerchandiseDate,
};
pub use period::{
    period_of_date, period_of_week, period_range, period_range_of, period_to_date,
    sales_release_day, sales_release_day_of, sales_release_days_for_season,
    sales_release_days_for_year, weeks_in_period,
};
pub use quarter::{quarter_of_date, quarter_of_period, Quarter};
pub use range::{dates_between, DateIter, DateRange};
pub use season::{season_of_date, season_of_week, season_range, season_range_of, Season};
pub use week::{merch_week, week_range, week_range_of, week_to_date, week_to_date_for};
pub use year::{merch_year_of, year_to_date, MerchYear};
