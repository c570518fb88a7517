//! Shared clock and timestamp helpers for to-do integration tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Builds a UTC instant from calendar parts.
///
/// # Panics
///
/// Panics when the parts do not form a valid timestamp.
pub fn utc(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid UTC timestamp")
}

/// Wednesday 2026-10-14 09:00 UTC, the reference "now" for scenarios.
pub fn reference_now() -> DateTime<Utc> {
    utc(2026, 10, 14, 9, 0)
}
