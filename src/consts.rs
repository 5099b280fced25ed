/// Minimum valid year (inclusive), the first full year of the Gregorian calendar
pub const MIN_YEAR: u16 = 1583;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Length of the longest month
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Reference date used for day and month offsets: 1 January `MIN_YEAR`
pub const REFERENCE_DATE: (u8, u8, u16) = (MIN_DAY, JANUARY, MIN_YEAR);

/// Date component separator (dash form)
pub const DATE_SEPARATOR: char = '-';
/// Date component separator (slash form)
pub const DATE_SEPARATOR_SLASH: char = '/';
/// Clock component separator
pub const TIME_SEPARATOR: char = ':';

/// Largest valid hour
pub const MAX_HOUR: u8 = 23;
/// Largest valid minute
pub const MAX_MINUTE: u8 = 59;
/// Largest valid second
pub const MAX_SECOND: u8 = 59;
/// Largest valid millisecond
pub const MAX_MILLISECOND: u16 = 999;

pub const HOURS_PER_DAY: i64 = 24;
pub const MINUTES_PER_HOUR: i64 = 60;
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const MILLIS_PER_SECOND: i64 = 1000;
pub const MILLIS_PER_DAY: i64 = HOURS_PER_DAY * MINUTES_PER_HOUR * SECONDS_PER_MINUTE * MILLIS_PER_SECOND;

/// Long English month names (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Three-letter English month names (index 0 is unused)
pub const MONTH_SHORT_NAMES: [&str; 13] = [
    "", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Calendar grid header, Monday first
pub const WEEKDAY_HEADER: &str = "Mo Tu We Th Fr Sa Su";
