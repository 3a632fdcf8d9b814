//! Date helpers for the registration and check-in rules
//!
//! The registration rules compare dates truncated to the start of the hour
//! and advance start dates by whole calendar months. The check-in rules use
//! two different windows on purpose: the daily cap runs on local calendar-day
//! boundaries, the weekly cap on a rolling window ending at the instant of
//! the call.

use chrono::{DateTime, Duration, Local, Months, NaiveTime, TimeZone, Timelike, Utc};

/// Truncate a timestamp to the start of its hour
pub fn start_of_hour(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

/// Advance a timestamp by whole calendar months (month-end clamped)
pub fn add_months(ts: DateTime<Utc>, months: u32) -> Option<DateTime<Utc>> {
    ts.checked_add_months(Months::new(months))
}

/// Bounds of the current calendar day in the server's local frame,
/// returned as UTC instants: [local midnight, next local midnight)
pub fn local_day_bounds(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let local = now.with_timezone(&Local);
    let day = local.date_naive();

    let start = Local
        .from_local_datetime(&day.and_time(NaiveTime::MIN))
        .earliest()
        .unwrap_or(local);
    let end = day
        .succ_opt()
        .and_then(|next| Local.from_local_datetime(&next.and_time(NaiveTime::MIN)).earliest())
        .unwrap_or(start + Duration::days(1));

    (start.with_timezone(&Utc), end.with_timezone(&Utc))
}

/// Start of the rolling window of the given length, ending at `now`
pub fn rolling_window_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Format a timestamp the way outbound mails present dates
pub fn format_mail_date(ts: DateTime<Utc>) -> String {
    ts.format("%B %e, %Y").to_string()
}
