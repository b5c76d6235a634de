//! Civil-timezone time utilities.
//!
//! Every date/time string in the planner is pinned to one fixed civil
//! timezone so that documents remain meaningful regardless of the host's
//! local clock configuration. All helpers are pure functions over an
//! explicit `DateTime<Utc>`.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// The fixed civil timezone used for all date/time strings and comparisons.
pub const CIVIL_TZ: Tz = chrono_tz::Asia::Shanghai;

/// Civil calendar date of `now`, `YYYY-MM-DD`.
pub fn today_str(now: DateTime<Utc>) -> String {
    now.with_timezone(&CIVIL_TZ).format("%Y-%m-%d").to_string()
}

/// Civil time of `now` to the minute, `YYYY-MM-DDTHH:MM`.
///
/// Zero-padded, so lexicographic order on these strings equals
/// chronological order. Reminder due-ness is decided by comparing them.
/// The same form is used when converting an absolute instant into a
/// reminder setting.
pub fn minute_str(now: DateTime<Utc>) -> String {
    now.with_timezone(&CIVIL_TZ)
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}

/// Live-clock rendering parts for `now` in the civil timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockDisplay {
    /// `HH:MM:SS`
    pub time: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Abbreviated weekday name.
    pub weekday: String,
}

pub fn clock_display(now: DateTime<Utc>) -> ClockDisplay {
    let local = now.with_timezone(&CIVIL_TZ);
    ClockDisplay {
        time: local.format("%H:%M:%S").to_string(),
        date: local.format("%Y-%m-%d").to_string(),
        weekday: local.format("%a").to_string(),
    }
}
