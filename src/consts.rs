/// Minimum supported anchor year (inclusive)
pub const MIN_YEAR: i32 = 1;

/// Maximum supported anchor year (inclusive)
pub const MAX_YEAR: i32 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Days in a week, Monday through Sunday
pub const DAYS_PER_WEEK: u32 = 7;

/// Weeks in a regular year
pub const WEEKS_PER_YEAR: u32 = 52;
/// Weeks in a year whose December 31st falls on a Thursday
pub const WEEKS_PER_LONG_YEAR: u32 = 53;

/// Days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by leap year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// Seconds in a week
pub const SECONDS_PER_WEEK: f64 = 604_800.0;
/// Approximate seconds in a month (a twelfth of a tropical year)
pub const SECONDS_PER_MONTH: f64 = 2_629_743.83;
/// Approximate seconds in a tropical year
pub const SECONDS_PER_YEAR: f64 = 31_556_926.0;

/// Westernmost listed GMT offset, in hours
pub const GMT_OFFSET_MIN: i8 = -12;
/// Easternmost listed GMT offset, in hours
pub const GMT_OFFSET_MAX: i8 = 13;
