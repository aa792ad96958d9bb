//! Epoch-millisecond time helpers.
//!
//! All task timestamps are epoch milliseconds, the representation the
//! original persisted records used. Calendar arithmetic for the date
//! buckets (today / this-week / overdue) happens in the local timezone.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Milliseconds in one day.
pub const DAY_MS: i64 = 86_400_000;

/// Current time as epoch milliseconds.
#[must_use]
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current local time, for calendar-bucket evaluation.
#[must_use]
pub fn now_local() -> DateTime<Local> {
    Local::now()
}

/// Convert epoch milliseconds to a local datetime.
///
/// Returns `None` only for timestamps outside chrono's representable
/// range, which no realistic task record hits.
#[must_use]
pub fn to_local(ms: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(ms).single()
}

/// Epoch milliseconds of local midnight on `now`'s calendar day.
#[must_use]
pub fn start_of_day_ms(now: DateTime<Local>) -> i64 {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|dt| dt.and_local_timezone(Local).earliest())
        .map_or_else(
            // Midnight skipped by a DST jump: fall back to the UTC day start.
            || now.timestamp_millis().div_euclid(DAY_MS) * DAY_MS,
            |midnight| midnight.timestamp_millis(),
        )
}

/// Whether `ms` falls on the same local calendar day as `now`.
#[must_use]
pub fn same_local_day(ms: i64, now: DateTime<Local>) -> bool {
    to_local(ms).is_some_and(|dt| dt.date_naive() == now.date_naive())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
