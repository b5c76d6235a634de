use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Timer state changes produce an Event. Hosts poll the timer and can
/// forward these to whatever surface renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    FocusStarted {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    FocusPaused {
        remaining_secs: u32,
        at: DateTime<Utc>,
    },
    /// A completed session long enough to log as a focus block.
    SessionLogged {
        minutes: u32,
        deep: bool,
        at: DateTime<Utc>,
    },
    /// The countdown was completed or abandoned without logging a block.
    FocusReset {
        at: DateTime<Utc>,
    },
}
