//! Humanized distances between two points on the wall-clock timeline.
//!
//! A distance is decomposed greedily into years, months, weeks and days
//! using fixed approximate lengths for each unit, so "one month" is always
//! [`SECONDS_PER_MONTH`] regardless of which month it is. Anything under a
//! day is reported as "less than a day".

use std::fmt;

use serde::Serialize;

use crate::{
    SECONDS_PER_DAY, SECONDS_PER_MONTH, SECONDS_PER_WEEK, SECONDS_PER_YEAR, prelude::*,
};

/// Which side of the reference point the other point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
pub enum Direction {
    /// The other point is later than the reference
    #[display(fmt = "ago")]
    Past,
    /// The other point is the same as or earlier than the reference
    #[display(fmt = "in future")]
    Future,
}

/// A signed span broken into calendar-ish buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Distance {
    years:     u64,
    months:    u64,
    weeks:     u64,
    days:      u64,
    direction: Direction,
}

/// The units in decomposition order, largest first.
const UNITS: [(f64, &str, &str); 4] = [
    (SECONDS_PER_YEAR, "year", "years"),
    (SECONDS_PER_MONTH, "month", "months"),
    (SECONDS_PER_WEEK, "week", "weeks"),
    (SECONDS_PER_DAY, "day", "days"),
];

const SAME_DAY: &str = "less than a day";

impl Distance {
    /// Decomposes `to - from` (seconds).
    ///
    /// The direction only looks at the sign of the raw difference: a later
    /// `to` is [`Direction::Past`], anything else is [`Direction::Future`].
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn between(from: i64, to: i64) -> Self {
        let direction = if to > from {
            Direction::Past
        } else {
            Direction::Future
        };

        let mut left = to.abs_diff(from);
        let mut buckets = [0u64; 4];
        if (left as f64) >= SECONDS_PER_DAY {
            for (bucket, (unit, ..)) in buckets.iter_mut().zip(UNITS) {
                let count = (left as f64 / unit).floor() as u64;
                if count >= 1 {
                    // Whole seconds only: a fractional month leaves its
                    // fraction in the remainder rather than eating a day.
                    left = left.saturating_sub((unit * count as f64) as u64);
                    *bucket = count;
                }
            }
        }

        let [years, months, weeks, days] = buckets;
        Self {
            years,
            months,
            weeks,
            days,
            direction,
        }
    }

    pub const fn years(&self) -> u64 {
        self.years
    }

    pub const fn months(&self) -> u64 {
        self.months
    }

    pub const fn weeks(&self) -> u64 {
        self.weeks
    }

    pub const fn days(&self) -> u64 {
        self.days
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// True when the span was shorter than a day.
    pub const fn is_same_day(&self) -> bool {
        self.years == 0 && self.months == 0 && self.weeks == 0 && self.days == 0
    }

    /// The four bucket magnitudes, largest unit first.
    pub const fn buckets(&self) -> [u64; 4] {
        [self.years, self.months, self.weeks, self.days]
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_same_day() {
            return write!(f, "{SAME_DAY} {}", self.direction);
        }

        let words: Vec<String> = self
            .buckets()
            .into_iter()
            .zip(UNITS)
            .filter(|(count, _)| *count > 0)
            .map(|(count, (_, singular, plural))| {
                format!("{count} {}", if count == 1 { singular } else { plural })
            })
            .collect();
        write!(f, "{} {}", words.join(","), self.direction)
    }
}

/// Humanizes the span from `from` to `to`, both in seconds.
///
/// ```
/// use date_utils::distance_in_words;
///
/// assert_eq!(distance_in_words(0, 86_399), "less than a day ago");
/// assert_eq!(distance_in_words(0, 3 * 86_400), "3 days ago");
/// assert_eq!(distance_in_words(3 * 86_400, 0), "3 days in future");
/// ```
pub fn distance_in_words(from: i64, to: i64) -> String {
    Distance::between(from, to).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const DAY: i64 = 86_400;
    const WEEK: i64 = 604_800;
    const MONTH: i64 = 2_629_743;
    const YEAR: i64 = 31_556_926;

    #[test]
    fn test_less_than_a_day() {
        assert_eq!(distance_in_words(0, 86_399), "less than a day ago");
        assert_eq!(distance_in_words(86_399, 0), "less than a day in future");
        assert_eq!(distance_in_words(0, 1), "less than a day ago");
    }

    #[test]
    fn test_zero_difference_reads_as_future() {
        assert_eq!(distance_in_words(42, 42), "less than a day in future");
    }

    #[test]
    fn test_exactly_one_day() {
        assert_eq!(distance_in_words(0, DAY), "1 day ago");
        assert_eq!(distance_in_words(DAY, 0), "1 day in future");
    }

    #[test]
    fn test_year_month_days() {
        let diff = YEAR + MONTH + 5 * DAY;
        assert_eq!(distance_in_words(0, diff), "1 year,1 month,5 days ago");
    }

    #[test]
    fn test_plurals() {
        // an hour of slack absorbs the fractional month seconds
        let diff = 2 * YEAR + 3 * MONTH + 2 * WEEK + 2 * DAY + 3_600;
        let d = Distance::between(0, diff);
        assert_eq!(d.buckets(), [2, 3, 2, 2]);
        assert_eq!(d.to_string(), "2 years,3 months,2 weeks,2 days ago");
    }

    #[test]
    fn test_skips_empty_buckets() {
        assert_eq!(distance_in_words(0, WEEK), "1 week ago");
        assert_eq!(distance_in_words(0, YEAR + DAY), "1 year,1 day ago");
        assert_eq!(distance_in_words(0, 3 * WEEK + 1_000), "3 weeks ago");
    }

    #[test]
    fn test_sub_day_remainder_is_dropped() {
        assert_eq!(distance_in_words(0, DAY + 86_399), "1 day ago");
    }

    #[test]
    fn test_direction() {
        assert_eq!(Distance::between(0, DAY).direction(), Direction::Past);
        assert_eq!(Distance::between(DAY, 0).direction(), Direction::Future);
        assert_eq!(Direction::Past.to_string(), "ago");
        assert_eq!(Direction::Future.to_string(), "in future");
    }

    #[test]
    fn test_serialize() {
        let d = Distance::between(0, WEEK + 2 * DAY);
        let json = serde_json::to_value(d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "years": 0,
                "months": 0,
                "weeks": 1,
                "days": 2,
                "direction": "Past"
            })
        );

        let future = serde_json::to_string(&Direction::Future).unwrap();
        assert_eq!(future, r#""Future""#);
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        let d = Distance::between(i64::MIN, i64::MAX);
        assert_eq!(d.direction(), Direction::Past);
        assert!(d.years() > 0);
    }

    proptest! {
        #[test]
        fn test_symmetric_buckets(
            from in -4_000_000_000i64..4_000_000_000,
            to in -4_000_000_000i64..4_000_000_000,
        ) {
            let forward = Distance::between(from, to);
            let backward = Distance::between(to, from);
            prop_assert_eq!(forward.buckets(), backward.buckets());
            if from != to {
                prop_assert_ne!(forward.direction(), backward.direction());
            }
        }

        #[test]
        fn test_same_day_iff_under_a_day(
            from in -4_000_000_000i64..4_000_000_000,
            delta in -300_000i64..300_000,
        ) {
            let d = Distance::between(from, from + delta);
            prop_assert_eq!(d.is_same_day(), delta.abs() < DAY);
        }
    }
}
