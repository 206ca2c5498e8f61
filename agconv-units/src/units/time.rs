//! Time units (base: second)
//!
//! Months and years are fixed lengths (30.4167 and 365 days).

use crate::unit::TimeUnit;

pub static SECOND: TimeUnit = TimeUnit::new("s", "second", "s", &["seconds", "sec", "secs"], 1.0);

pub static MINUTE: TimeUnit = TimeUnit::new("min", "minute", "min", &["minutes", "mins", "m"], 60.0);

pub static HOUR: TimeUnit = TimeUnit::new("h", "hour", "h", &["hours", "hr", "hrs"], 3600.0);

pub static DAY: TimeUnit = TimeUnit::new("d", "day", "d", &["days"], 86_400.0);

pub static WEEK: TimeUnit = TimeUnit::new("wk", "week", "wk", &["weeks", "wks"], 604_800.0);

pub static MONTH: TimeUnit = TimeUnit::new("mo", "month", "mo", &["months"], 2_628_000.0);

pub static YEAR: TimeUnit = TimeUnit::new("yr", "year", "yr", &["years", "y", "yrs"], 31_536_000.0);

pub static TIME_UNITS: [&TimeUnit; 7] = [
    &SECOND,
    &MINUTE,
    &HOUR,
    &DAY,
    &WEEK,
    &MONTH,
    &YEAR,
];
