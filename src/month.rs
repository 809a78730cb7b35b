use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, JANUARY, MAX_MONTH, MonthQuery, PeriodError,
    period::{self, Period},
    prelude::*,
};

/// A calendar month, derived from an anchor date inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{:04}-{:02}", "first_day.year()", "month")]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct Month {
    date:      NaiveDate,
    month:     u32,
    num_days:  u32,
    first_day: NaiveDate,
    last_day:  NaiveDate,
}

period::impl_anchored!(Month);

impl Month {
    /// Creates the month containing `date`.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` if the year of `date` is unsupported.
    pub fn new(date: NaiveDate) -> Result<Self, PeriodError> {
        let date = period::supported(date)?;
        let month = date.month();
        let first_day = period::sub_days(date, date.day() - 1)?;
        // February follows the anchor's own leap year
        let num_days = if month == FEBRUARY && period::is_leap(date) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[month as usize]
        };
        let last_day = period::add_days(first_day, num_days - 1)?;

        Ok(Self {
            date,
            month,
            num_days,
            first_day,
            last_day,
        })
    }

    /// The current month.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` if the system clock is outside the supported range.
    pub fn today() -> Result<Self, PeriodError> {
        Self::new(period::today())
    }

    /// Creates month `month` (1-12) of the current year, anchored on its first day.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidMonth` if `month` is 0 or greater than 12.
    pub fn from_number(month: u32) -> Result<Self, PeriodError> {
        Self::from_year_month(period::today().year(), month)
    }

    /// Creates a month from a query; `year` defaults to the current year and
    /// `month` to January.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidMonth` or `PeriodError::InvalidYear` for
    /// values outside the calendar.
    pub fn create(query: &MonthQuery) -> Result<Self, PeriodError> {
        let year = query.year.unwrap_or_else(|| period::today().year());
        Self::from_year_month(year, query.month.unwrap_or(JANUARY))
    }

    fn from_year_month(year: i32, month: u32) -> Result<Self, PeriodError> {
        if month == 0 || month > MAX_MONTH {
            return Err(PeriodError::InvalidMonth(month));
        }
        period::check_year(year)?;
        let first =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or(PeriodError::InvalidYear(year))?;
        Self::new(first)
    }

    /// The following month, anchored on its first day.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidYear` past the end of the supported range.
    pub fn next(&self) -> Result<Self, PeriodError> {
        Self::new(period::add_days(self.last_day, 1)?)
    }

    /// The preceding month, anchored on its last day.
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

    /// Month number, 1-12
    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    #[inline]
    pub const fn num_days(&self) -> u32 {
        self.num_days
    }

    #[inline]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    #[inline]
    pub const fn last_day(&self) -> NaiveDate {
        self.last_day
    }
}

impl Period for Month {
    fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    fn last_day(&self) -> NaiveDate {
        self.last_day
    }
}

impl TryFrom<NaiveDate> for Month {
    type Error = PeriodError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl FromStr for Month {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = s
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| PeriodError::InvalidDate(s.to_owned()))?;
        Self::new(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_leap_february() {
        let m = Month::new(date(2024, 2, 10)).unwrap();
        assert_eq!(m.num_days(), 29);
        assert_eq!(m.first_day(), date(2024, 2, 1));
        assert_eq!(m.last_day(), date(2024, 2, 29));
        assert_eq!(m.month(), 2);
    }

    #[test]
    fn test_common_february() {
        let m = Month::new(date(2023, 2, 10)).unwrap();
        assert_eq!(m.num_days(), 28);
        assert_eq!(m.last_day(), date(2023, 2, 28));
    }

    #[test]
    fn test_century_february() {
        assert_eq!(Month::new(date(1900, 2, 1)).unwrap().num_days(), 28);
        assert_eq!(Month::new(date(2000, 2, 1)).unwrap().num_days(), 29);
    }

    #[test]
    fn test_month_lengths() {
        let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for (i, days) in expected.into_iter().enumerate() {
            let month = u32::try_from(i + 1).unwrap();
            let m = Month::new(date(2023, month, 15)).unwrap();
            assert_eq!(m.num_days(), days, "month {month}");
        }
    }

    #[test]
    fn test_anchor_on_first_day() {
        let m = Month::new(date(2024, 5, 1)).unwrap();
        assert_eq!(m.first_day(), date(2024, 5, 1));
        assert_eq!(m.last_day(), date(2024, 5, 31));
        assert_eq!(m.date(), date(2024, 5, 1));
    }

    #[test]
    fn test_next_rolls_to_first() {
        let next = Month::new(date(2024, 1, 20)).unwrap().next().unwrap();
        assert_eq!(next.date(), date(2024, 2, 1));
        assert_eq!(next.num_days(), 29);

        let next_year = Month::new(date(2023, 12, 5)).unwrap().next().unwrap();
        assert_eq!(next_year.date(), date(2024, 1, 1));
        assert_eq!(next_year.year(), 2024);
    }

    #[test]
    fn test_previous_rolls_to_last() {
        let prev = Month::new(date(2024, 3, 20)).unwrap().previous().unwrap();
        assert_eq!(prev.date(), date(2024, 2, 29));
        assert_eq!(prev.first_day(), date(2024, 2, 1));

        let prev_year = Month::new(date(2024, 1, 5)).unwrap().previous().unwrap();
        assert_eq!(prev_year.date(), date(2023, 12, 31));
    }

    #[test]
    fn test_navigation_at_range_limits() {
        let last = Month::new(date(9999, 12, 1)).unwrap();
        assert_eq!(last.next(), Err(PeriodError::InvalidYear(10000)));

        let first = Month::new(date(1, 1, 1)).unwrap();
        assert_eq!(first.previous(), Err(PeriodError::InvalidYear(0)));
    }

    #[test]
    fn test_from_number() {
        let m = Month::from_number(7).unwrap();
        assert_eq!(m.month(), 7);
        assert_eq!(m.date().day(), 1);
        assert_eq!(m.year(), chrono::Local::now().year());

        assert_eq!(Month::from_number(0), Err(PeriodError::InvalidMonth(0)));
        assert_eq!(Month::from_number(13), Err(PeriodError::InvalidMonth(13)));
    }

    #[test]
    fn test_create() {
        let m = Month::create(&MonthQuery {
            year:  Some(1991),
            month: Some(8),
        })
        .unwrap();
        assert_eq!(m.first_day(), date(1991, 8, 1));
        assert_eq!(m.date(), date(1991, 8, 1));

        let january = Month::create(&MonthQuery {
            year:  Some(1991),
            month: None,
        })
        .unwrap();
        assert_eq!(january.month(), 1);

        let this_year = Month::create(&MonthQuery::default()).unwrap();
        assert_eq!(this_year.month(), 1);
        assert_eq!(this_year.year(), chrono::Local::now().year());

        let bad = Month::create(&MonthQuery {
            year:  Some(1991),
            month: Some(14),
        });
        assert_eq!(bad, Err(PeriodError::InvalidMonth(14)));
    }

    #[test]
    fn test_days() {
        let m = Month::new(date(2024, 2, 10)).unwrap();
        let days: Vec<_> = m.days().collect();
        assert_eq!(days.len(), 29);
        assert_eq!(days.first(), Some(&date(2024, 2, 1)));
        assert_eq!(days.last(), Some(&date(2024, 2, 29)));

        // restartable
        assert_eq!(m.days().count(), 29);

        let mut seen = 0;
        m.each_day(|_| seen += 1);
        assert_eq!(seen, 29);
    }

    #[test]
    fn test_includes() {
        let m = Month::new(date(2024, 2, 10)).unwrap();
        assert!(m.includes(date(2024, 2, 1)));
        assert!(m.includes(date(2024, 2, 29)));
        assert!(!m.includes(date(2024, 3, 1)));
        assert!(!m.includes(date(2023, 2, 10)));
    }

    #[test]
    fn test_ordering() {
        let a = Month::new(date(2024, 2, 10)).unwrap();
        let b = Month::new(date(2024, 2, 11)).unwrap();
        assert!(a < b);
        let mut months = vec![b, a];
        months.sort();
        assert_eq!(months, vec![a, b]);
    }

    #[test]
    fn test_display_and_parse() {
        let m: Month = "2024-03-14".parse().unwrap();
        assert_eq!(m.to_string(), "2024-03");
        assert_eq!(m.date(), date(2024, 3, 14));
        assert!(matches!(
            "2024-13-01".parse::<Month>(),
            Err(PeriodError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_serde() {
        let m = Month::new(date(2024, 3, 14)).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#""2024-03-14""#);
        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);

        let out_of_range: Result<Month, _> = serde_json::from_str(r#""0000-06-01""#);
        assert!(out_of_range.is_err());
    }

    proptest! {
        #[test]
        fn test_boundaries(y in 1i32..=9999, m in 1u32..=12, d in 1u32..=28) {
            let month = Month::new(date(y, m, d)).unwrap();
            prop_assert_eq!(month.first_day().day(), 1);
            prop_assert_eq!(month.last_day().day(), month.num_days());
            prop_assert_eq!(month.last_day().month(), m);
            prop_assert!(month.includes(date(y, m, d)));
        }

        #[test]
        fn test_next_previous_round_trip(y in 2i32..=9998, m in 1u32..=12, d in 1u32..=28) {
            let month = Month::new(date(y, m, d)).unwrap();
            let back = month.next().unwrap().previous().unwrap();
            prop_assert_eq!(back.first_day(), month.first_day());
            prop_assert_eq!(back.last_day(), month.last_day());
        }
    }
}
