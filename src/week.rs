use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    DAYS_PER_WEEK, Month, PeriodError, WeekQuery, Year,
    period::{self, Period},
    prelude::*,
};

/// A Monday-to-Sunday week, derived from an anchor date inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-W{:02}", "date.iso_week().year()", "num_week")]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct Week {
    date:      NaiveDate,
    first_day: NaiveDate,
    last_day:  NaiveDate,
    num_week:  u32,
    month:     Month,
}

period::impl_anchored!(Week);

impl Week {
    /// Creates the week containing `date`.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` if the year of `date` is unsupported.
    pub fn new(date: NaiveDate) -> Result<Self, PeriodError> {
        let date = period::supported(date)?;
        let weekday = date.weekday().number_from_monday();
        let first_day = period::sub_days(date, weekday - 1)?;
        let last_day = period::add_days(date, DAYS_PER_WEEK - weekday)?;

        Ok(Self {
            date,
            first_day,
            last_day,
            num_week: date.iso_week().week(),
            month: Month::new(date)?,
        })
    }

    /// The current week.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` if the system clock is outside the supported range.
    pub fn today() -> Result<Self, PeriodError> {
        Self::new(period::today())
    }

    /// Creates a week from a query.
    ///
    /// Without `week`, this is the week containing January 1st of `year`
    /// (or the current week when `year` is also absent). With `week`, the
    /// lookup goes through [`Year::get_week`] of `year` (default: this year).
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` for an unsupported year and
    /// `PeriodError::InvalidWeek` for a week number the year does not have.
    pub fn create(query: &WeekQuery) -> Result<Self, PeriodError> {
        let anchor = match query.year {
            Some(year) => period::new_year_day(year)?,
            None => period::today(),
        };
        match query.week {
            None => Self::new(anchor),
            Some(week) => Year::new(anchor)?.get_week(week),
        }
    }

    /// The following week, anchored on its Monday.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` past the end of the supported range.
    pub fn next(&self) -> Result<Self, PeriodError> {
        Self::new(period::add_days(self.last_day, 1)?)
    }

    /// The preceding week, anchored on its Sunday.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` before the start of the supported range.
    pub fn previous(&self) -> Result<Self, PeriodError> {
        Self::new(period::sub_days(self.first_day, 1)?)
    }

    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Monday of the week
    #[inline]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Sunday of the week
    #[inline]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// ISO 8601 week number of the anchor date
    #[inline]
    pub const fn num_week(&self) -> u32 {
        self.num_week
    }

    /// The month containing the anchor date
    #[inline]
    pub const fn month(&self) -> &Month {
        &self.month
    }
}

impl Period for Week {
    fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    fn last_day(&self) -> NaiveDate {
        self.last_day
    }
}

impl TryFrom<NaiveDate> for Week {
    type Error = PeriodError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl FromStr for Week {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = s
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| PeriodError::InvalidDate(s.to_owned()))?;
        Self::new(date)
    }
}
