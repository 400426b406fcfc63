//! Timestamp and uptime utilities

use chrono::{DateTime, SecondsFormat, Utc};
use std::time::Instant;

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Format a timestamp as ISO-8601 with millisecond precision (`2026-10-19T12:34:56.789Z`)
pub fn to_iso8601(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Current wall-clock time as an ISO-8601 string
pub fn now_iso8601() -> String {
    to_iso8601(now())
}

/// Process uptime clock
///
/// Captured once at startup. Reads are based on a monotonic clock, so
/// successive `uptime_secs()` values never decrease.
#[derive(Debug, Clone, Copy)]
pub struct UptimeClock {
    started: Instant,
}

impl UptimeClock {
    /// Start the clock at the current instant
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds elapsed since the clock was started
    pub fn uptime_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

impl Default for UptimeClock {
    fn default() -> Self {
        Self::start()
    }
}
