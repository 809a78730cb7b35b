//! Typed queries accepted by the period factories.
//!
//! Every field is optional and unknown keys are ignored, so a query can be
//! deserialized from loosely shaped configuration:
//!
//! ```
//! use date_utils::{Week, WeekQuery};
//!
//! let json = r#"{"year": 2020, "week": 10, "label": "x"}"#;
//! let query: WeekQuery = serde_json::from_str(json).unwrap();
//! assert_eq!(Week::create(&query).unwrap().num_week(), 10);
//! ```

use serde::{Deserialize, Serialize};

/// Selects a week: by number within a year, or the week containing
/// January 1st when no number is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekQuery {
    pub year: Option<i32>,
    pub week: Option<u32>,
}

/// Selects a month; defaults to January of the current year.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthQuery {
    pub year:  Option<i32>,
    pub month: Option<u32>,
}

/// Selects a year. `year` is required by [`crate::Year::create`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct YearQuery {
    pub year: Option<i32>,
}
