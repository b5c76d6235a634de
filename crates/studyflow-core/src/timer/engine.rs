//! Focus timer implementation.
//!
//! The timer is a wall-clock-based state machine. It does not use internal
//! threads - the caller is responsible for calling `tick()` once per second
//! while it runs.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> Idle
//! ```
//!
//! Completion (explicit, or automatic when the countdown reaches zero) logs
//! a focus block into the store when the session rounded to more than one
//! minute. Logged minutes come from wall-clock elapsed time, not the tick
//! count, so a suspended or throttled host still produces an accurate
//! session length; ticking only drives the live countdown and the focused
//! task's per-second counters.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::events::Event;
use crate::storage::StorageBackend;
use crate::store::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

/// Read model for rendering the countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerDisplay {
    pub running: bool,
    /// Remaining minutes, zero-padded to two digits.
    pub minutes: String,
    /// Remaining seconds within the minute, zero-padded.
    pub seconds: String,
    /// Rounded percent elapsed, 0-100.
    pub percent: u8,
}

/// Countdown state machine bound to the store's focused task.
///
/// Operates on wall-clock deltas -- no internal thread. The caller drives
/// `tick()`; the `*_at` variants take the instant explicitly and carry the
/// actual semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    state: TimerState,
    /// Remaining seconds in the current countdown.
    remaining_secs: u32,
    /// Full countdown length in seconds.
    focus_len_secs: u32,
    /// Sessions of at least this many minutes are tagged deep.
    deep_minutes: u32,
    /// Wall-clock instant (ms since epoch) of the last start. Cleared on
    /// pause and completion; surviving a pause is what lets a resumed
    /// session keep its earlier elapsed time in `accum_secs`.
    #[serde(default)]
    started_at_ms: Option<u64>,
    /// Seconds folded in by earlier start/pause spans of this session.
    #[serde(default)]
    accum_secs: u64,
}

impl FocusTimer {
    pub fn new(config: &Config) -> Self {
        let focus_len_secs = config.focus_minutes * 60;
        Self {
            state: TimerState::Idle,
            remaining_secs: focus_len_secs,
            focus_len_secs,
            deep_minutes: config.deep_minutes,
            started_at_ms: None,
            accum_secs: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn display(&self) -> TimerDisplay {
        let total = self.focus_len_secs.max(1);
        let elapsed = total.saturating_sub(self.remaining_secs);
        let percent = ((elapsed as f64 / total as f64) * 100.0).round() as u8;
        TimerDisplay {
            running: self.is_running(),
            minutes: format!("{:02}", self.remaining_secs / 60),
            seconds: format!("{:02}", self.remaining_secs % 60),
            percent: percent.min(100),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        self.start_at(now_ms())
    }

    /// Idle -> Running. Keeps an already-recorded start instant so a
    /// resume after pause does not lose prior accumulated time.
    pub fn start_at(&mut self, now_ms: u64) -> Option<Event> {
        if self.state == TimerState::Running {
            return None;
        }
        if self.started_at_ms.is_none() {
            self.started_at_ms = Some(now_ms);
        }
        self.state = TimerState::Running;
        Some(Event::FocusStarted {
            remaining_secs: self.remaining_secs,
            at: instant(now_ms),
        })
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.pause_at(now_ms())
    }

    /// Running -> Idle. Folds wall-clock time since the last start into
    /// the accumulator; logs nothing.
    pub fn pause_at(&mut self, now_ms: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        if let Some(started) = self.started_at_ms.take() {
            self.accum_secs += now_ms.saturating_sub(started) / 1000;
        }
        self.state = TimerState::Idle;
        Some(Event::FocusPaused {
            remaining_secs: self.remaining_secs,
            at: instant(now_ms),
        })
    }

    pub fn tick<B: StorageBackend>(&mut self, store: &mut Store<B>) -> Option<Event> {
        self.tick_at(now_ms(), store)
    }

    /// Call once per second while running: counts the live countdown down
    /// by one, credits one second to the focused task, and completes the
    /// session when the countdown reaches zero.
    pub fn tick_at<B: StorageBackend>(
        &mut self,
        now_ms: u64,
        store: &mut Store<B>,
    ) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if let Some(id) = store.document().current_focus_id.clone() {
            store.add_time_secs(&id, 1);
        }
        if self.remaining_secs == 0 {
            return self.complete_at(now_ms, store);
        }
        None
    }

    pub fn complete<B: StorageBackend>(&mut self, store: &mut Store<B>) -> Option<Event> {
        self.complete_at(now_ms(), store)
    }

    /// Stop and log the session. Elapsed seconds are the accumulator plus
    /// the span since the last start; when both are empty (a countdown
    /// driven to zero without a recorded start span) the consumed portion
    /// of the countdown stands in. Sessions rounding above one minute are
    /// appended as a block dated today, tagged deep at the threshold.
    pub fn complete_at<B: StorageBackend>(
        &mut self,
        now_ms: u64,
        store: &mut Store<B>,
    ) -> Option<Event> {
        self.state = TimerState::Idle;
        let mut secs = self.accum_secs
            + self
                .started_at_ms
                .take()
                .map_or(0, |started| now_ms.saturating_sub(started) / 1000);
        self.accum_secs = 0;
        if secs == 0 {
            secs = u64::from(self.focus_len_secs - self.remaining_secs);
        }
        let minutes = ((secs + 59) / 60) as u32;
        let at = instant(now_ms);
        let event = if minutes > 1 {
            let deep = minutes >= self.deep_minutes;
            let note = if deep { "deep" } else { "short-focus" };
            store.add_block(at, minutes, Some(note.to_string()));
            Event::SessionLogged { minutes, deep, at }
        } else {
            Event::FocusReset { at }
        };
        self.remaining_secs = self.focus_len_secs;
        Some(event)
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

fn instant(epoch_ms: u64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(epoch_ms as i64)
        .single()
        .unwrap_or_else(Utc::now)
}
