//! Due-reminder polling.
//!
//! A stateless scan over the document's tasks, driven by the host on a
//! fixed period. Each cycle surfaces at most one alert: the first task in
//! document order whose reminder is due and has not fired yet. The alert is
//! held until it is cleared or the task is started.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::storage::StorageBackend;
use crate::store::Store;

/// How often hosts should schedule `poll()`, in seconds.
pub const POLL_PERIOD_SECS: u64 = 30;

/// A reminder that came due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderAlert {
    pub task_id: String,
    pub title: String,
}

#[derive(Debug, Default)]
pub struct ReminderWatcher {
    alert: Option<ReminderAlert>,
}

impl ReminderWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently held alert, if any.
    pub fn alert(&self) -> Option<&ReminderAlert> {
        self.alert.as_ref()
    }

    pub fn poll<B: StorageBackend>(&mut self, store: &mut Store<B>) -> Option<ReminderAlert> {
        self.poll_at(Utc::now(), store)
    }

    /// Scan tasks in document order and raise the first due reminder,
    /// marking it so it cannot fire again. Later due tasks wait for a
    /// subsequent cycle.
    pub fn poll_at<B: StorageBackend>(
        &mut self,
        now: DateTime<Utc>,
        store: &mut Store<B>,
    ) -> Option<ReminderAlert> {
        let due = store
            .document()
            .tasks
            .iter()
            .find(|t| !t.reminded && t.reminder().map_or(false, |r| r.is_due(now)))
            .map(|t| ReminderAlert {
                task_id: t.id.clone(),
                title: t.title.clone(),
            })?;
        store.mark_reminded(&due.task_id);
        self.alert = Some(due.clone());
        Some(due)
    }

    pub fn clear(&mut self) {
        self.alert = None;
    }

    /// "Start task" from the alert: focus the task and drop the alert.
    pub fn start_task<B: StorageBackend>(&mut self, store: &mut Store<B>, task_id: &str) {
        store.set_focus(Some(task_id.to_string()));
        self.alert = None;
    }
}
