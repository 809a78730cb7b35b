use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    MAX_MONTH, Month, PeriodError, WEEKS_PER_LONG_YEAR, WEEKS_PER_YEAR, Week, YearQuery,
    period::{self, Period},
    prelude::*,
};

/// A calendar year, derived from an anchor date inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{year:04}")]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct Year {
    date:      NaiveDate,
    year:      i32,
    first_day: NaiveDate,
    last_day:  NaiveDate,
    num_weeks: u32,
}

period::impl_anchored!(Year);

impl Year {
    /// Creates the year containing `date`.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` if the year of `date` is unsupported.
    pub fn new(date: NaiveDate) -> Result<Self, PeriodError> {
        let date = period::supported(date)?;
        let year = date.year();
        let first_day = period::new_year_day(year)?;
        let last_day = NaiveDate::from_ymd_opt(year, 12, 31).ok_or(PeriodError::InvalidYear(year))?;
        let num_weeks = if last_day.weekday() == Weekday::Thu {
            WEEKS_PER_LONG_YEAR
        } else {
            WEEKS_PER_YEAR
        };

        Ok(Self {
            date,
            year,
            first_day,
            last_day,
            num_weeks,
        })
    }

    /// The current year.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` if the system clock is outside the supported range.
    pub fn today() -> Result<Self, PeriodError> {
        Self::new(period::today())
    }

    /// Creates a year anchored on January 1st of `query.year`.
    ///
    /// # Errors
    /// Returns `PeriodError::MissingOption` when `year` is absent and
    /// `PeriodError::InvalidYear` when it is unsupported.
    pub fn create(query: &YearQuery) -> Result<Self, PeriodError> {
        let year = query.year.ok_or(PeriodError::MissingOption("year"))?;
        Self::new(period::new_year_day(year)?)
    }

    /// The twelve months of the year, January first, each anchored on its
    /// first day.
    pub fn months(&self) -> Vec<Month> {
        // a supported year always yields all twelve
        (1..=MAX_MONTH)
            .filter_map(|month| NaiveDate::from_ymd_opt(self.year, month, 1))
            .filter_map(|first| Month::new(first).ok())
            .collect()
    }

    /// Hands each month of the year to `f`, January first.
    pub fn each_month<F: FnMut(Month)>(&self, f: F) {
        self.months().into_iter().for_each(f);
    }

    /// The week containing January 1st followed by `num_weeks` successive
    /// weeks, so the list holds `num_weeks + 1` entries and overlaps both
    /// neighbouring years.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` when a week would be anchored past
    /// the supported range.
    pub fn weeks(&self) -> Result<Vec<Week>, PeriodError> {
        let mut week = Week::new(self.first_day)?;
        let mut weeks = Vec::with_capacity(self.num_weeks as usize + 1);
        weeks.push(week);
        for _ in 0..self.num_weeks {
            week = week.next()?;
            weeks.push(week);
        }
        trace!(year = self.year, count = weeks.len(), "built week list");
        Ok(weeks)
    }

    /// Hands each entry of [`Year::weeks`] to `f`, in order.
    ///
    /// # Errors
    /// See [`Year::weeks`].
    pub fn each_week<F: FnMut(Week)>(&self, f: F) -> Result<(), PeriodError> {
        self.weeks()?.into_iter().for_each(f);
        Ok(())
    }

    /// Week `num` of the year, counted through [`Year::weeks`].
    ///
    /// In a 53-week year week `num` is entry `num - 1`; in a 52-week year it
    /// is entry `num`, skipping the week containing January 1st.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidWeek` if `num` is 0 or above `num_weeks`.
    pub fn get_week(&self, num: u32) -> Result<Week, PeriodError> {
        let invalid = PeriodError::InvalidWeek {
            week: num,
            max:  self.num_weeks,
        };
        if num == 0 || num > self.num_weeks {
            debug!(year = self.year, week = num, "rejected week number");
            return Err(invalid);
        }
        let index = if self.num_weeks > WEEKS_PER_YEAR {
            num - 1
        } else {
            num
        };
        self.weeks()?.get(index as usize).copied().ok_or(invalid)
    }

    /// Month `num` (1-12) of the year.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidMonth` if `num` is 0 or above 12.
    pub fn get_month(&self, num: u32) -> Result<Month, PeriodError> {
        if num == 0 || num > MAX_MONTH {
            debug!(year = self.year, month = num, "rejected month number");
            return Err(PeriodError::InvalidMonth(num));
        }
        self.months()
            .get(num as usize - 1)
            .copied()
            .ok_or(PeriodError::InvalidMonth(num))
    }

    /// The year after, anchored on the same month and day.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` past the end of the supported range.
    pub fn next(&self) -> Result<Self, PeriodError> {
        self.shifted(1)
    }

    /// The year before, anchored on the same month and day.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` before the start of the supported range.
    pub fn previous(&self) -> Result<Self, PeriodError> {
        self.shifted(-1)
    }

    /// Same month and day `years` away; February 29th falls back to the 28th.
    fn shifted(&self, years: i32) -> Result<Self, PeriodError> {
        let target = self
            .year
            .checked_add(years)
            .ok_or(PeriodError::InvalidYear(self.year))?;
        period::check_year(target)?;
        let (month, day) = (self.date.month(), self.date.day());
        let date = match NaiveDate::from_ymd_opt(target, month, day) {
            Some(date) => date,
            None => {
                debug!(
                    year = target,
                    month,
                    day,
                    "anchor day missing in target year, using day before"
                );
                NaiveDate::from_ymd_opt(target, month, day - 1)
                    .ok_or(PeriodError::InvalidYear(target))?
            }
        };
        Self::new(date)
    }

    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// January 1st
    #[inline]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// December 31st
    #[inline]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// 53 when December 31st is a Thursday, 52 otherwise
    #[inline]
    pub const fn num_weeks(&self) -> u32 {
        self.num_weeks
    }
}

impl Period for Year {
    fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    fn last_day(&self) -> NaiveDate {
        self.last_day
    }
}

impl TryFrom<NaiveDate> for Year {
    type Error = PeriodError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl FromStr for Year {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = s
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| PeriodError::InvalidDate(s.to_owned()))?;
        Self::new(date)
    }
}
