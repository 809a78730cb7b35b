use std::fmt;

use serde::Serialize;

use crate::{GMT_OFFSET_MAX, GMT_OFFSET_MIN, PeriodError, prelude::*};

/// A whole-hour offset from GMT, between `GMT_OFFSET_MIN` and `GMT_OFFSET_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, Into, Serialize)]
#[serde(into = "i8")]
pub struct GmtOffset(i8);

impl GmtOffset {
    /// # Errors
    /// Returns `PeriodError::InvalidOffset` outside the listed range.
    pub const fn new(hours: i8) -> Result<Self, PeriodError> {
        if hours < GMT_OFFSET_MIN || hours > GMT_OFFSET_MAX {
            return Err(PeriodError::InvalidOffset(hours));
        }
        Ok(Self(hours))
    }

    /// Every listed offset, westernmost first.
    pub fn all() -> impl Iterator<Item = Self> {
        (GMT_OFFSET_MIN..=GMT_OFFSET_MAX).map(Self)
    }
}

impl fmt::Display for GmtOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        write!(f, "GMT {sign}{:02}:00", self.0.unsigned_abs())
    }
}

/// `"GMT -12:00"` through `"GMT +13:00"`.
pub fn gmt_offsets() -> Vec<String> {
    GmtOffset::all().map(|offset| offset.to_string()).collect()
}
