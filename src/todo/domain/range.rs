//! Incoming-item queries and the expiration windows they resolve to.

use super::ParseIncomingRangeError;
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named range relative to the current calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomingRange {
    /// Items expiring on the current date.
    Today,
    /// Items expiring on the following date.
    Tomorrow,
    /// Items expiring within the Monday-to-Sunday week containing today.
    ThisWeek,
}

impl IncomingRange {
    /// Returns the canonical string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::ThisWeek => "this_week",
        }
    }

    /// Resolves the range to an inclusive UTC expiration window.
    ///
    /// Calendar dates are taken in `offset`. Each window runs from local
    /// midnight of its first day up to the last nanosecond before local
    /// midnight following its last day, so `ThisWeek` ends at Sunday
    /// 23:59:59.999999999.
    ///
    /// Returns `None` only when the window falls outside chrono's
    /// representable date range.
    #[must_use]
    pub fn window(self, now: DateTime<Utc>, offset: FixedOffset) -> Option<ExpirationWindow> {
        let today = now.with_timezone(&offset).date_naive();
        let (first_day, day_count) = match self {
            Self::Today => (today, 1),
            Self::Tomorrow => (today.checked_add_days(Days::new(1))?, 1),
            Self::ThisWeek => {
                let since_monday = u64::from(today.weekday().num_days_from_monday());
                (today.checked_sub_days(Days::new(since_monday))?, 7)
            }
        };
        let following_day = first_day.checked_add_days(Days::new(day_count))?;
        let start = local_midnight(first_day, offset)?;
        let end = local_midnight(following_day, offset)? - TimeDelta::nanoseconds(1);
        ExpirationWindow::new(start, end)
    }
}

impl TryFrom<&str> for IncomingRange {
    type Error = ParseIncomingRangeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "today" => Ok(Self::Today),
            "tomorrow" => Ok(Self::Tomorrow),
            "this_week" | "thisweek" => Ok(Self::ThisWeek),
            _ => Err(ParseIncomingRangeError(value.to_owned())),
        }
    }
}

impl fmt::Display for IncomingRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn local_midnight(date: NaiveDate, offset: FixedOffset) -> Option<DateTime<Utc>> {
    date.and_time(NaiveTime::MIN)
        .and_local_timezone(offset)
        .single()
        .map(|local| local.with_timezone(&Utc))
}

/// Inclusive expiration interval with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl ExpirationWindow {
    /// Creates a window, or `None` when `start` is after `end`.
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Returns the first instant inside the window.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the last instant inside the window.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when `instant` lies within the window, bounds included.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Shape of an incoming-items query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomingQuery {
    /// Undone items expiring within a named range.
    Named(IncomingRange),
    /// Items expiring within `[start, end]`, done or not.
    Between {
        /// Inclusive lower bound.
        start: DateTime<Utc>,
        /// Inclusive upper bound.
        end: DateTime<Utc>,
    },
}

impl IncomingQuery {
    /// Creates an explicit-range query.
    #[must_use]
    pub const fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::Between { start, end }
    }
}

impl From<IncomingRange> for IncomingQuery {
    fn from(range: IncomingRange) -> Self {
        Self::Named(range)
    }
}
