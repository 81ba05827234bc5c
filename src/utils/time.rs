//! Time utilities: epoch timestamps, elapsed seconds, duration formatting.

use chrono::{DateTime, Local, TimeZone};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" as seconds since the Unix epoch.
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall clock used in production.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// Whole seconds between two timestamps, truncated and never negative.
pub fn elapsed_secs(start: f64, end: f64) -> i64 {
    let delta = (end - start).floor();
    if delta.is_finite() && delta > 0.0 {
        delta as i64
    } else {
        0
    }
}

/// Render seconds as `"H hours, M minutes, S seconds"`. Hours are unbounded.
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    let (minutes, seconds) = (secs / 60, secs % 60);
    let (hours, minutes) = (minutes / 60, minutes % 60);
    format!("{} hours, {} minutes, {} seconds", hours, minutes, seconds)
}

/// Render an epoch timestamp in local time, or the raw number if out of range.
pub fn format_timestamp(ts: f64, fmt: &str) -> String {
    let secs = ts.floor() as i64;
    let nanos = ((ts - ts.floor()) * 1e9) as u32;
    match Local.timestamp_opt(secs, nanos).single() {
        Some(dt) => dt.format(fmt).to_string(),
        None => format!("{:.0}", ts),
    }
}

pub fn to_local(ts: f64) -> Option<DateTime<Local>> {
    Local.timestamp_opt(ts.floor() as i64, 0).single()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_matches_reference_values() {
        assert_eq!(format_duration(3661), "1 hours, 1 minutes, 1 seconds");
        assert_eq!(format_duration(0), "0 hours, 0 minutes, 0 seconds");
        assert_eq!(format_duration(59), "0 hours, 0 minutes, 59 seconds");
    }

    #[test]
    fn hours_do_not_roll_over_into_days() {
        assert_eq!(format_duration(90_000), "25 hours, 0 minutes, 0 seconds");
    }

    #[test]
    fn elapsed_truncates_instead_of_rounding() {
        assert_eq!(elapsed_secs(100.0, 104.99), 4);
        assert_eq!(elapsed_secs(100.2, 101.1), 0);
        assert_eq!(elapsed_secs(100.0, 99.0), 0);
    }

    #[test]
    fn timestamp_out_of_range_falls_back_to_number() {
        assert_eq!(format_timestamp(f64::MAX, "%Y"), format!("{:.0}", f64::MAX));
    }
}
