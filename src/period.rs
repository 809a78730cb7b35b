use std::{cmp::Ordering, iter::Take};

use chrono::{
    DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone,
    naive::NaiveDateDaysIterator,
};

use crate::{
    FEBRUARY, FEBRUARY_DAYS_LEAP, MAX_YEAR, MIN_YEAR, PeriodError, distance::distance_in_words,
};

/// A value that can be placed on the wall-clock timeline, in seconds.
///
/// Dates map to their midnight and zoned datetimes to their local reading,
/// so a date and "now" compare the way a calendar on the wall would.
pub trait ToTimestamp {
    fn to_timestamp(&self) -> i64;
}

impl ToTimestamp for NaiveDate {
    fn to_timestamp(&self) -> i64 {
        self.and_time(NaiveTime::MIN).to_timestamp()
    }
}

impl ToTimestamp for NaiveDateTime {
    fn to_timestamp(&self) -> i64 {
        self.and_utc().timestamp()
    }
}

impl<Tz: TimeZone> ToTimestamp for DateTime<Tz> {
    fn to_timestamp(&self) -> i64 {
        self.naive_local().to_timestamp()
    }
}

/// Something built around a single anchor date.
///
/// Ordering and humanized distances are defined purely in terms of the
/// anchor, so any two anchored values can be compared with each other.
pub trait Anchored {
    /// The date this value was constructed from
    fn date(&self) -> NaiveDate;

    /// Compares anchors, across period kinds.
    fn cmp_anchor<A: Anchored + ?Sized>(&self, other: &A) -> Ordering {
        self.date().cmp(&other.date())
    }

    /// Humanized distance from this anchor to `other`.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use date_utils::{Anchored, Year};
    ///
    /// let year = Year::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()).unwrap();
    /// let later = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
    /// assert_eq!(year.distance_in_words(&later), "2 weeks ago");
    /// ```
    fn distance_in_words<T: ToTimestamp + ?Sized>(&self, other: &T) -> String {
        distance_in_words(self.date().to_timestamp(), other.to_timestamp())
    }

    /// Humanized distance from this anchor to the current local time.
    fn distance_to_now_in_words(&self) -> String {
        self.distance_in_words(&Local::now())
    }
}

/// A calendar span with inclusive first and last days.
pub trait Period: Anchored {
    fn first_day(&self) -> NaiveDate;

    fn last_day(&self) -> NaiveDate;

    /// Every day from `first_day` to `last_day`, inclusive, in order.
    /// Recomputed on each call.
    fn days(&self) -> Take<NaiveDateDaysIterator> {
        let span = self
            .last_day()
            .signed_duration_since(self.first_day())
            .num_days()
            + 1;
        self.first_day()
            .iter_days()
            .take(usize::try_from(span).unwrap_or(0))
    }

    /// Hands every day of the period to `f`, in order.
    fn each_day<F: FnMut(NaiveDate)>(&self, f: F) {
        self.days().for_each(f);
    }

    /// Is `date` one of this period's days?
    fn includes(&self, date: NaiveDate) -> bool {
        self.days().any(|day| day == date)
    }
}

/// Implements [`Anchored`], anchor ordering and [`ToTimestamp`] for a type
/// with a `date: NaiveDate` field.
macro_rules! impl_anchored {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::period::Anchored for $ty {
            #[inline]
            fn date(&self) -> ::chrono::NaiveDate {
                self.date
            }
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<::std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.date.cmp(&other.date)
            }
        }

        impl $crate::period::ToTimestamp for $ty {
            fn to_timestamp(&self) -> i64 {
                $crate::period::ToTimestamp::to_timestamp(&self.date)
            }
        }

        impl From<$ty> for ::chrono::NaiveDate {
            fn from(value: $ty) -> Self {
                value.date
            }
        }
    )+};
}

pub(crate) use impl_anchored;

// --- helpers shared by the period types ---

/// Current local date.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Rejects anchors whose year lies outside `MIN_YEAR..=MAX_YEAR`.
pub(crate) fn supported(date: NaiveDate) -> Result<NaiveDate, PeriodError> {
    check_year(date.year())?;
    Ok(date)
}

pub(crate) const fn check_year(year: i32) -> Result<i32, PeriodError> {
    if year < MIN_YEAR || year > MAX_YEAR {
        return Err(PeriodError::InvalidYear(year));
    }
    Ok(year)
}

/// January 1st of `year`.
pub(crate) fn new_year_day(year: i32) -> Result<NaiveDate, PeriodError> {
    check_year(year)?;
    NaiveDate::from_ymd_opt(year, 1, 1).ok_or(PeriodError::InvalidYear(year))
}

pub(crate) fn add_days(date: NaiveDate, days: u32) -> Result<NaiveDate, PeriodError> {
    date.checked_add_days(Days::new(u64::from(days)))
        .ok_or(PeriodError::OutOfRange(date))
}

pub(crate) fn sub_days(date: NaiveDate, days: u32) -> Result<NaiveDate, PeriodError> {
    date.checked_sub_days(Days::new(u64::from(days)))
        .ok_or(PeriodError::OutOfRange(date))
}

/// Leap year test of the date's own year: does its February have a 29th?
pub(crate) fn is_leap(date: NaiveDate) -> bool {
    NaiveDate::from_ymd_opt(date.year(), FEBRUARY, FEBRUARY_DAYS_LEAP).is_some()
}
