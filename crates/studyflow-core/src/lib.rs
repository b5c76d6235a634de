//! # Studyflow Core Library
//!
//! This library provides the core logic for Studyflow, a single-user,
//! local-first study planner. It owns the persisted planner document
//! (projects, tasks, evidence, focus blocks, health records), a focus-timer
//! state machine and a reminder watcher. Presentation layers are thin
//! consumers of the store's actions and selectors.
//!
//! ## Architecture
//!
//! - **Store**: the full planner document held in memory, replaced on every
//!   mutation and written back whole to a key-value storage backend
//! - **Focus Timer**: a wall-clock-based countdown state machine that requires
//!   the caller to invoke `tick()` once per second
//! - **Reminder Watcher**: a poll-driven scanner that raises at most one
//!   due-reminder alert per cycle
//! - **Clock**: pure helpers pinning all date/time strings to one civil
//!   timezone, independent of the host's local clock settings
//!
//! ## Key Components
//!
//! - [`Store`]: actions + selectors over the planner [`Document`]
//! - [`FocusTimer`]: countdown state machine logging completed sessions
//! - [`ReminderWatcher`]: due-reminder polling
//! - [`Config`]: application configuration management

pub mod clock;
pub mod config;
pub mod error;
pub mod events;
pub mod reminder;
pub mod storage;
pub mod store;
pub mod summary;
pub mod timer;

pub use config::Config;
pub use error::{ConfigError, CoreError, Result, StorageError};
pub use events::Event;
pub use reminder::{ReminderAlert, ReminderWatcher, POLL_PERIOD_SECS};
pub use storage::{FileBackend, MemoStore, MemoryBackend, StorageBackend};
pub use store::{
    DeepBlock, Document, Evidence, EvidencePatch, Health, Milestone, NewEvidence, Progress,
    Project, Reminder, Store, Task,
};
pub use summary::daily_summary;
pub use timer::{FocusTimer, TimerDisplay, TimerState};
