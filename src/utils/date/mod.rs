// Date utility functions
// Calendar arithmetic shared by the flight-date services

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Returns the date `days` days after `date` (before it when negative).
///
/// Results that would leave chrono's representable range saturate at
/// `NaiveDate::MIN` / `NaiveDate::MAX`.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(magnitude).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_days(magnitude).unwrap_or(NaiveDate::MIN)
    }
}

/// Next occurrence of `weekday` strictly after `from` (1 to 7 days later).
///
/// When `from` already falls on `weekday` the result is a full week later.
pub fn next_weekday_after(from: NaiveDate, weekday: Weekday) -> NaiveDate {
    let target = weekday.num_days_from_monday() as i64;
    let current = from.weekday().num_days_from_monday() as i64;
    let offset = match (target - current).rem_euclid(7) {
        0 => 7,
        days => days,
    };
    add_days(from, offset)
}

/// Next Saturday after `from`.
///
/// A Saturday maps to the following Saturday (+7), a Sunday to +6.
pub fn next_saturday(from: NaiveDate) -> NaiveDate {
    next_weekday_after(from, Weekday::Sat)
}

pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Whole days from `now` until `target`, rounded up and never negative.
pub fn days_until_ceil(now: NaiveDateTime, target: NaiveDateTime) -> i64 {
    let millis = (target - now).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}
