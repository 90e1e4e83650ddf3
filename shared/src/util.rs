use chrono::{DateTime, Utc};

/// Current UTC instant, truncated to microseconds.
///
/// PostgreSQL `timestamptz` keeps microsecond precision, so values produced
/// here survive a round trip through the store unchanged.
pub fn now_utc() -> DateTime<Utc> {
    let now = Utc::now();
    let micros = now.timestamp_micros();
    DateTime::from_timestamp_micros(micros).unwrap_or(now)
}
