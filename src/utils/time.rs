//! Time utilities: parsing HH:MM, minutes-since-midnight math, quarter-hour
//! cell keys.

use chrono::{NaiveTime, Timelike};

pub const MINUTES_PER_DAY: i64 = 24 * 60;
pub const QUARTER: i64 = 15;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// "HH:MM" → minutes since midnight, or None when malformed
pub fn parse_minutes(t: &str) -> Option<i64> {
    let parsed = parse_time(t)?;
    Some(parsed.hour() as i64 * 60 + parsed.minute() as i64)
}

/// Malformed times count as midnight rather than erroring
pub fn parse_minutes_or_zero(t: &str) -> i64 {
    parse_minutes(t).unwrap_or(0)
}

/// Quarter-hour cell key for a minute of the (possibly virtual) day.
/// The hour wraps modulo 24 and the minute is floored to its quarter,
/// so any non-negative input lands on one of the 96 "HH:MM" keys.
pub fn quarter_key(minute_of_day: i64) -> String {
    let hour = (minute_of_day / 60).rem_euclid(24);
    let quarter = (minute_of_day % 60) / QUARTER * QUARTER;
    format!("{:02}:{:02}", hour, quarter)
}
