//! Calendar periods over [`chrono::NaiveDate`].
//!
//! [`Day`], [`Week`], [`Month`] and [`Year`] each wrap an anchor date and
//! derive their boundaries once, at construction. Periods are immutable:
//! `next` and `previous` build new values. Any anchored value can be
//! compared with another and turned into a humanized distance:
//!
//! ```
//! use chrono::NaiveDate;
//! use date_utils::{Anchored, Month, Week};
//!
//! let week = Week::new(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()).unwrap();
//! assert_eq!(week.first_day(), NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
//!
//! let feb = Month::new(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap()).unwrap();
//! assert_eq!(feb.num_days(), 29);
//! assert_eq!(feb.distance_in_words(&week), "1 month,2 days ago");
//! ```

mod consts;
mod day;
mod distance;
mod month;
mod options;
mod period;
mod prelude;
mod week;
mod year;
mod zone;

pub use consts::*;
pub use day::Day;
pub use distance::{Direction, Distance, distance_in_words};
pub use month::Month;
pub use options::{MonthQuery, WeekQuery, YearQuery};
pub use period::{Anchored, Period, ToTimestamp};
pub use week::Week;
pub use year::Year;
pub use zone::{GmtOffset, gmt_offsets};

use chrono::NaiveDate;

/// Error type for period construction and lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Text is not an ISO `YYYY-MM-DD` date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Year outside the supported range.
    #[error("Invalid year: {0} (must be {min}-{max})", min = MIN_YEAR, max = MAX_YEAR)]
    InvalidYear(i32),

    /// Month number outside 1-12.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u32),

    /// Week number the year does not have.
    #[error("Invalid week: {week} (must be 1-{max})")]
    InvalidWeek { week: u32, max: u32 },

    /// A factory query lacks a required key.
    #[error("Missing required option: {0}")]
    MissingOption(&'static str),

    /// Day arithmetic left the representable calendar.
    #[error("Date out of range: stepping from {0}")]
    OutOfRange(NaiveDate),

    /// GMT offset outside the listed range.
    #[error(
        "Invalid GMT offset: {0} (must be {min}-{max})",
        min = GMT_OFFSET_MIN,
        max = GMT_OFFSET_MAX
    )]
    InvalidOffset(i8),
}
