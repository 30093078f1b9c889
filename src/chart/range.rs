use chrono::{DateTime, TimeDelta, Utc};

/// Window length used when the caller gives no usable start.
pub const DEFAULT_WINDOW: TimeDelta = TimeDelta::hours(24);

/// A chart window in Unix seconds, after defaulting of unusable bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartRange {
    pub from: i64,
    pub to: i64,
}

impl ChartRange {
    /// Normalise caller-supplied bounds against the current time.
    pub fn normalize(start: Option<&str>, end: Option<&str>) -> Self {
        Self::normalize_at(start, end, Utc::now())
    }

    /// Normalise against an explicit `now`.
    ///
    /// Each bound is kept only if it parses as an integer, is not negative and is not
    /// after `now`. Otherwise `from` becomes `now - 24h` and `to` becomes `now`, each
    /// bound independently of the other.
    pub fn normalize_at(start: Option<&str>, end: Option<&str>, now: DateTime<Utc>) -> Self {
        let now_ts = now.timestamp();
        let from = usable_bound(start, now_ts).unwrap_or_else(|| (now - DEFAULT_WINDOW).timestamp());
        let to = usable_bound(end, now_ts).unwrap_or(now_ts);
        Self { from, to }
    }
}

fn usable_bound(raw: Option<&str>, now_ts: i64) -> Option<i64> {
    raw?.parse::<i64>().ok().filter(|ts| (0..=now_ts).contains(ts))
}
