use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{PeriodError, period, prelude::*};

/// A single calendar day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Deref, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Day {
    date: NaiveDate,
}

period::impl_anchored!(Day);

impl Day {
    pub const fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn today() -> Self {
        Self::new(period::today())
    }

    /// Returns the wrapped date
    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

impl FromStr for Day {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NaiveDate>()
            .map(Self::new)
            .map_err(|_| PeriodError::InvalidDate(s.to_owned()))
    }
}
