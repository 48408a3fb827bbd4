//! Cap and leaderboard time windows, all in UTC.

use chrono::{DateTime, Datelike, NaiveTime, Utc};

/// UTC midnight of the instant's calendar date.
pub fn day_start(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// First instant of the instant's UTC calendar month.
pub fn month_start(at: DateTime<Utc>) -> DateTime<Utc> {
    let date = at.date_naive();
    // with_day(1) is always valid for an existing date
    let first = date.with_day(1).unwrap_or(date);
    first.and_time(NaiveTime::MIN).and_utc()
}
