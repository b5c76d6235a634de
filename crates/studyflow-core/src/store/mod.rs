//! The persistent planner store.
//!
//! [`Store`] owns the in-memory [`Document`] and a storage backend. Every
//! mutation replaces the document and writes it back whole, JSON-serialized
//! under one fixed key. Load falls back to the seeded default when the key
//! is absent or unreadable; a failed write is logged and swallowed so the
//! prior in-memory document stays authoritative.
//!
//! Selectors are read-only views. The ones that depend on "today" take the
//! current instant explicitly and stay pure.

mod document;

pub use document::{
    DeepBlock, Document, Evidence, EvidencePatch, Health, Milestone, NewEvidence, Project,
    Reminder, Task,
};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::clock::today_str;
use crate::config::Config;
use crate::error::{CoreError, Result};
use crate::storage::StorageBackend;

/// Storage key holding the serialized document.
pub const DOC_KEY: &str = "planner_v1";

/// Task completion tally for a project filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub done: usize,
    pub total: usize,
    /// Rounded 0-100; 0 when there are no tasks.
    pub percent: u32,
}

pub struct Store<B: StorageBackend> {
    doc: Document,
    backend: B,
    config: Config,
}

impl<B: StorageBackend> Store<B> {
    /// Load the document from the backend, falling back to the seeded
    /// default when the key is absent or fails to parse.
    pub fn open(backend: B, config: Config) -> Self {
        let doc = match backend.get(DOC_KEY) {
            Some(raw) => match serde_json::from_str::<Document>(&raw) {
                Ok(doc) => doc,
                Err(err) => {
                    log::warn!("discarding unreadable planner document: {err}");
                    Document::default()
                }
            },
            None => Document::default(),
        };
        Self {
            doc,
            backend,
            config,
        }
    }

    /// Read-only snapshot of the document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.doc) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("failed to serialize planner document: {err}");
                return;
            }
        };
        if let Err(err) = self.backend.set(DOC_KEY, &raw) {
            log::warn!("failed to persist planner document: {err}");
        }
    }

    // ── Project actions ──────────────────────────────────────────────

    pub fn add_project(&mut self, name: impl Into<String>) -> String {
        let project = Project::new(name);
        let id = project.id.clone();
        self.doc.projects.insert(0, project);
        self.persist();
        id
    }

    pub fn set_project_goal(&mut self, id: &str, goal: Option<String>) {
        if let Some(p) = self.doc.projects.iter_mut().find(|p| p.id == id) {
            p.goal = goal;
            self.persist();
        }
    }

    pub fn rename_project(&mut self, id: &str, name: impl Into<String>) {
        if let Some(p) = self.doc.projects.iter_mut().find(|p| p.id == id) {
            p.name = name.into();
            self.persist();
        }
    }

    /// Delete a project and cascade: its tasks go with it, and the focus /
    /// active-project selections are cleared if they pointed into it.
    pub fn delete_project(&mut self, id: &str) {
        let focused_in_project = self
            .doc
            .current_focus_id
            .as_ref()
            .and_then(|fid| self.doc.tasks.iter().find(|t| &t.id == fid))
            .and_then(|t| t.project_id.as_deref())
            .map_or(false, |pid| pid == id);
        if focused_in_project {
            self.doc.current_focus_id = None;
        }
        if self.doc.active_project_id.as_deref() == Some(id) {
            self.doc.active_project_id = None;
        }
        self.doc.projects.retain(|p| p.id != id);
        self.doc.tasks.retain(|t| t.project_id.as_deref() != Some(id));
        self.persist();
    }

    pub fn set_active_project(&mut self, id: Option<String>) {
        self.doc.active_project_id = id;
        self.persist();
    }

    pub fn add_milestone(&mut self, project_id: &str, title: impl Into<String>) {
        if let Some(p) = self.doc.projects.iter_mut().find(|p| p.id == project_id) {
            p.milestones.push(Milestone::new(title));
            self.persist();
        }
    }

    pub fn toggle_milestone(&mut self, project_id: &str, milestone_id: &str) {
        if let Some(p) = self.doc.projects.iter_mut().find(|p| p.id == project_id) {
            if let Some(m) = p.milestones.iter_mut().find(|m| m.id == milestone_id) {
                m.done = !m.done;
                self.persist();
            }
        }
    }

    pub fn delete_milestone(&mut self, project_id: &str, milestone_id: &str) {
        if let Some(p) = self.doc.projects.iter_mut().find(|p| p.id == project_id) {
            p.milestones.retain(|m| m.id != milestone_id);
            self.persist();
        }
    }

    // ── Task actions ─────────────────────────────────────────────────

    pub fn add_task(&mut self, title: impl Into<String>, project_id: Option<String>) -> String {
        let task = Task::new(title, project_id);
        let id = task.id.clone();
        self.doc.tasks.insert(0, task);
        self.persist();
        id
    }

    /// Toggle done. When the transition is to done and the task was
    /// focused, the focus is cleared.
    pub fn toggle_task(&mut self, id: &str) {
        let now_done = match self.doc.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                task.done
            }
            None => return,
        };
        if now_done && self.doc.current_focus_id.as_deref() == Some(id) {
            self.doc.current_focus_id = None;
        }
        self.persist();
    }

    pub fn delete_task(&mut self, id: &str) {
        self.doc.tasks.retain(|t| t.id != id);
        if self.doc.current_focus_id.as_deref() == Some(id) {
            self.doc.current_focus_id = None;
        }
        self.persist();
    }

    /// Bind the focus to a task, or clear it with `None`. A target that
    /// does not exist or is already done is silently ignored: the focus
    /// must always name an existing, not-yet-done task.
    pub fn set_focus(&mut self, id: Option<String>) {
        if let Some(id) = &id {
            let valid = self.doc.tasks.iter().any(|t| &t.id == id && !t.done);
            if !valid {
                return;
            }
        }
        self.doc.current_focus_id = id;
        self.persist();
    }

    /// Add elapsed seconds to both the lifetime and the today counter.
    /// Zero is a silent no-op.
    pub fn add_time_secs(&mut self, id: &str, secs: u64) {
        if secs == 0 {
            return;
        }
        if let Some(task) = self.doc.tasks.iter_mut().find(|t| t.id == id) {
            // Fold the legacy minutes counter in before incrementing so the
            // lifetime total never moves backwards.
            task.spent_sec = Some(task.spent_secs() + secs);
            task.today_sec += secs;
            self.persist();
        }
    }

    /// Set (or clear) the civil-string reminder. Re-arming resets the
    /// reminded guard.
    pub fn set_reminder_civil(&mut self, id: &str, at: Option<String>) {
        if let Some(task) = self.doc.tasks.iter_mut().find(|t| t.id == id) {
            task.remind_at_civil = at;
            task.reminded = false;
            self.persist();
        }
    }

    /// Legacy absolute-instant form, kept for documents that predate the
    /// civil-string reminders.
    pub fn set_reminder_instant(&mut self, id: &str, at: Option<DateTime<Utc>>) {
        if let Some(task) = self.doc.tasks.iter_mut().find(|t| t.id == id) {
            task.remind_at = at;
            task.reminded = false;
            self.persist();
        }
    }

    pub fn mark_reminded(&mut self, id: &str) {
        if let Some(task) = self.doc.tasks.iter_mut().find(|t| t.id == id) {
            task.reminded = true;
            self.persist();
        }
    }

    // ── Evidence actions ─────────────────────────────────────────────

    pub fn add_evidence(&mut self, fields: NewEvidence) -> String {
        let item = Evidence::new(fields);
        let id = item.id.clone();
        self.doc.evidence.insert(0, item);
        self.persist();
        id
    }

    pub fn update_evidence(&mut self, id: &str, patch: EvidencePatch) {
        if let Some(item) = self.doc.evidence.iter_mut().find(|e| e.id == id) {
            if let Some(title) = patch.title {
                item.title = title;
            }
            if let Some(project_id) = patch.project_id {
                item.project_id = Some(project_id);
            }
            if let Some(note) = patch.note {
                item.note = Some(note);
            }
            if let Some(file_hint) = patch.file_hint {
                item.file_hint = Some(file_hint);
            }
            self.persist();
        }
    }

    pub fn delete_evidence(&mut self, id: &str) {
        self.doc.evidence.retain(|e| e.id != id);
        self.persist();
    }

    // ── Block and health actions ─────────────────────────────────────

    /// Log a completed focus session, stamped with the civil date of `now`.
    pub fn add_block(&mut self, now: DateTime<Utc>, minutes: u32, note: Option<String>) {
        let block = DeepBlock::new(today_str(now), minutes, note);
        self.doc.blocks.insert(0, block);
        self.persist();
    }

    /// Upsert today's sleep-hours record.
    pub fn set_sleep_hours(&mut self, now: DateTime<Utc>, hours: f32) {
        let date = today_str(now);
        match self.doc.health.iter_mut().find(|h| h.date == date) {
            Some(record) => record.sleep_hours = Some(hours),
            None => self.doc.health.insert(
                0,
                Health {
                    date,
                    sleep_hours: Some(hours),
                    mood: None,
                },
            ),
        }
        self.persist();
    }

    // ── Whole-document actions ───────────────────────────────────────

    pub fn reset_to_default(&mut self) {
        self.doc = Document::default();
        self.persist();
    }

    /// Replace the document with the payload merged onto the default
    /// shape: missing fields are backfilled, unknown fields ignored.
    ///
    /// # Errors
    /// Returns [`CoreError::Import`] when the payload is not a valid
    /// document; the in-memory document is left unchanged.
    pub fn import_json(&mut self, raw: &str) -> Result<()> {
        let doc = serde_json::from_str::<Document>(raw).map_err(CoreError::Import)?;
        self.doc = doc;
        self.persist();
        Ok(())
    }

    /// Pretty-printed JSON serialization of the full document.
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.doc)?)
    }

    // ── Selectors ────────────────────────────────────────────────────

    fn is_deep(&self, block: &DeepBlock) -> bool {
        block.minutes >= self.config.deep_minutes
    }

    pub fn today_blocks(&self, now: DateTime<Utc>) -> Vec<&DeepBlock> {
        let date = today_str(now);
        self.doc.blocks.iter().filter(|b| b.date == date).collect()
    }

    pub fn today_deep_blocks(&self, now: DateTime<Utc>) -> Vec<&DeepBlock> {
        let date = today_str(now);
        self.doc
            .blocks
            .iter()
            .filter(|b| b.date == date && self.is_deep(b))
            .collect()
    }

    pub fn today_short_blocks(&self, now: DateTime<Utc>) -> Vec<&DeepBlock> {
        let date = today_str(now);
        self.doc
            .blocks
            .iter()
            .filter(|b| b.date == date && !self.is_deep(b))
            .collect()
    }

    /// Tasks, optionally restricted to one project.
    pub fn tasks_by_project(&self, project_id: Option<&str>) -> Vec<&Task> {
        self.doc
            .tasks
            .iter()
            .filter(|t| project_id.map_or(true, |pid| t.project_id.as_deref() == Some(pid)))
            .collect()
    }

    /// Evidence, optionally restricted to one project.
    pub fn evidence_by_project(&self, project_id: Option<&str>) -> Vec<&Evidence> {
        self.doc
            .evidence
            .iter()
            .filter(|e| project_id.map_or(true, |pid| e.project_id.as_deref() == Some(pid)))
            .collect()
    }

    pub fn project_progress(&self, project_id: Option<&str>) -> Progress {
        let tasks = self.tasks_by_project(project_id);
        let total = tasks.len();
        let done = tasks.iter().filter(|t| t.done).count();
        let percent = if total == 0 {
            0
        } else {
            ((done as f64 / total as f64) * 100.0).round() as u32
        };
        Progress {
            done,
            total,
            percent,
        }
    }

    /// Today's recorded sleep hours, 0 when unset.
    pub fn sleep_today(&self, now: DateTime<Utc>) -> f32 {
        let date = today_str(now);
        self.doc
            .health
            .iter()
            .find(|h| h.date == date)
            .and_then(|h| h.sleep_hours)
            .unwrap_or(0.0)
    }

    pub fn current_focus_task(&self) -> Option<&Task> {
        let id = self.doc.current_focus_id.as_deref()?;
        self.doc.tasks.iter().find(|t| t.id == id)
    }

    /// Sum of all tasks' today-seconds, as floored whole minutes.
    pub fn today_total_task_min(&self) -> u64 {
        self.doc.tasks.iter().map(|t| t.today_sec).sum::<u64>() / 60
    }

    /// The next not-done task after `after` in document order, wrapping
    /// around; with no anchor, the first not-done task.
    pub fn next_undone_task(&self, after: Option<&str>) -> Option<&Task> {
        let tasks = &self.doc.tasks;
        let idx = after.and_then(|id| tasks.iter().position(|t| t.id == id));
        let start = idx.map_or(0, |i| i + 1);
        tasks[start.min(tasks.len())..]
            .iter()
            .chain(tasks[..idx.unwrap_or(0)].iter())
            .find(|t| !t.done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn store() -> Store<MemoryBackend> {
        Store::open(MemoryBackend::new(), Config::default())
    }

    fn empty_store() -> Store<MemoryBackend> {
        let mut s = store();
        s.import_json(r#"{"projects": [], "tasks": [], "active_project_id": null}"#)
            .unwrap();
        s
    }

    #[test]
    fn first_open_yields_the_seeded_document() {
        let s = store();
        assert_eq!(s.document().projects.len(), 1);
        assert_eq!(s.document().tasks.len(), 2);
        assert_eq!(s.document().active_project_id.as_deref(), Some("p1"));
    }

    #[test]
    fn corrupt_persisted_state_falls_back_to_default() {
        let mut backend = MemoryBackend::new();
        backend.set(DOC_KEY, "not json {").unwrap();
        let s = Store::open(backend, Config::default());
        assert_eq!(s.document().projects.len(), 1);
    }

    #[test]
    fn every_mutation_is_reloadable() {
        let mut s = store();
        let id = s.add_task("persisted", None);
        let backend = s.backend.clone();

        let reloaded = Store::open(backend, Config::default());
        assert!(reloaded.document().tasks.iter().any(|t| t.id == id));
    }

    #[test]
    fn add_and_delete_task_change_exactly_one_entry() {
        let mut s = empty_store();
        let a = s.add_task("a", None);
        let before = s.document().tasks.clone();
        let b = s.add_task("b", None);
        assert_eq!(s.document().tasks.len(), before.len() + 1);
        // The pre-existing task is untouched.
        let a_after = s.document().tasks.iter().find(|t| t.id == a).unwrap();
        assert_eq!(a_after.title, before[0].title);
        assert_eq!(a_after.today_sec, before[0].today_sec);

        s.delete_task(&b);
        assert_eq!(s.document().tasks.len(), before.len());
        assert!(s.document().tasks.iter().all(|t| t.id != b));
    }

    #[test]
    fn add_time_secs_zero_is_a_no_op() {
        let mut s = empty_store();
        let id = s.add_task("t", None);
        s.add_time_secs(&id, 0);
        let t = s.document().tasks.first().unwrap();
        assert_eq!(t.spent_secs(), 0);
        assert_eq!(t.today_sec, 0);
    }

    #[test]
    fn add_time_secs_increments_both_counters() {
        let mut s = empty_store();
        let id = s.add_task("t", None);
        s.add_time_secs(&id, 90);
        s.add_time_secs(&id, 30);
        let t = s.document().tasks.first().unwrap();
        assert_eq!(t.spent_secs(), 120);
        assert_eq!(t.today_sec, 120);
    }

    #[test]
    fn add_time_secs_folds_the_legacy_minutes_counter_in() {
        let mut s = empty_store();
        s.import_json(
            r#"{"projects": [], "active_project_id": null,
                "tasks": [{"id": "x", "title": "legacy", "spent_min": 2}]}"#,
        )
        .unwrap();
        s.add_time_secs("x", 10);
        let t = s.document().tasks.first().unwrap();
        assert_eq!(t.spent_secs(), 130);
    }

    #[test]
    fn thirty_single_seconds_are_zero_whole_minutes() {
        let mut s = store();
        let id = s.add_task("T", Some("p1".to_string()));
        s.set_focus(Some(id.clone()));
        for _ in 0..30 {
            s.add_time_secs(&id, 1);
        }
        let t = s.document().tasks.iter().find(|t| t.id == id).unwrap();
        assert_eq!(t.today_min(), 0);
        assert_eq!(t.spent_secs(), 30);
    }

    #[test]
    fn deleting_a_project_cascades() {
        let mut s = empty_store();
        let keep = s.add_project("keep");
        let doomed = s.add_project("doomed");
        let t_keep = s.add_task("stays", Some(keep.clone()));
        let t_doomed = s.add_task("goes", Some(doomed.clone()));
        s.set_focus(Some(t_doomed.clone()));
        s.set_active_project(Some(doomed.clone()));

        s.delete_project(&doomed);

        assert!(s.document().projects.iter().all(|p| p.id != doomed));
        assert!(s.document().tasks.iter().all(|t| t.id != t_doomed));
        assert!(s.document().tasks.iter().any(|t| t.id == t_keep));
        assert!(s.document().current_focus_id.is_none());
        assert!(s.document().active_project_id.is_none());
    }

    #[test]
    fn deleting_an_unrelated_project_leaves_selections_alone() {
        let mut s = empty_store();
        let keep = s.add_project("keep");
        let doomed = s.add_project("doomed");
        let t_keep = s.add_task("stays", Some(keep.clone()));
        s.set_focus(Some(t_keep.clone()));
        s.set_active_project(Some(keep.clone()));

        s.delete_project(&doomed);

        assert_eq!(s.document().current_focus_id.as_deref(), Some(&*t_keep));
        assert_eq!(s.document().active_project_id, Some(keep));
    }

    #[test]
    fn completing_the_focused_task_clears_the_focus() {
        let mut s = empty_store();
        let id = s.add_task("t", None);
        s.set_focus(Some(id.clone()));
        s.toggle_task(&id);
        assert!(s.document().tasks.first().unwrap().done);
        assert!(s.document().current_focus_id.is_none());

        // Un-completing does not restore it.
        s.toggle_task(&id);
        assert!(s.document().current_focus_id.is_none());
    }

    #[test]
    fn deleting_the_focused_task_clears_the_focus() {
        let mut s = empty_store();
        let id = s.add_task("t", None);
        s.set_focus(Some(id.clone()));
        s.delete_task(&id);
        assert!(s.document().current_focus_id.is_none());
    }

    #[test]
    fn focus_rejects_missing_or_done_tasks() {
        let mut s = empty_store();
        let id = s.add_task("t", None);
        s.toggle_task(&id);
        s.set_focus(Some(id));
        assert!(s.document().current_focus_id.is_none());
        s.set_focus(Some("nope".to_string()));
        assert!(s.document().current_focus_id.is_none());
    }

    #[test]
    fn rearming_a_reminder_resets_the_guard() {
        let mut s = empty_store();
        let id = s.add_task("t", None);
        s.set_reminder_civil(&id, Some("2024-01-01T08:00".to_string()));
        s.mark_reminded(&id);
        assert!(s.document().tasks.first().unwrap().reminded);
        s.set_reminder_civil(&id, Some("2024-01-02T08:00".to_string()));
        assert!(!s.document().tasks.first().unwrap().reminded);
    }

    #[test]
    fn evidence_crud() {
        let mut s = empty_store();
        let pid = s.add_project("p");
        let id = s.add_evidence(NewEvidence {
            title: "first draft".to_string(),
            project_id: Some(pid.clone()),
            ..NewEvidence::default()
        });
        assert_eq!(s.evidence_by_project(Some(&pid)).len(), 1);
        assert_eq!(s.evidence_by_project(Some("other")).len(), 0);

        s.update_evidence(
            &id,
            EvidencePatch {
                note: Some("v2 attached".to_string()),
                ..EvidencePatch::default()
            },
        );
        let e = s.document().evidence.first().unwrap();
        assert_eq!(e.title, "first draft");
        assert_eq!(e.note.as_deref(), Some("v2 attached"));

        s.delete_evidence(&id);
        assert!(s.document().evidence.is_empty());
    }

    #[test]
    fn deep_and_short_blocks_split_at_the_threshold() {
        let mut s = empty_store();
        let now = Utc::now();
        s.add_block(now, 25, None);
        s.add_block(now, 10, None);
        assert_eq!(s.today_deep_blocks(now).len(), 1);
        assert_eq!(s.today_short_blocks(now).len(), 1);
        let total: u32 = s.today_blocks(now).iter().map(|b| b.minutes).sum();
        assert_eq!(total, 35);
    }

    #[test]
    fn blocks_from_another_day_are_not_todays() {
        let mut s = empty_store();
        let yesterday = Utc.with_ymd_and_hms(2024, 6, 1, 4, 0, 0).unwrap();
        let today = Utc.with_ymd_and_hms(2024, 6, 2, 4, 0, 0).unwrap();
        s.add_block(yesterday, 30, None);
        assert!(s.today_blocks(today).is_empty());
        assert_eq!(s.today_blocks(yesterday).len(), 1);
    }

    #[test]
    fn sleep_hours_upsert_today() {
        let mut s = empty_store();
        let now = Utc::now();
        assert_eq!(s.sleep_today(now), 0.0);
        s.set_sleep_hours(now, 7.5);
        s.set_sleep_hours(now, 8.0);
        assert_eq!(s.sleep_today(now), 8.0);
        assert_eq!(s.document().health.len(), 1);
    }

    #[test]
    fn project_progress_rounds_and_handles_empty() {
        let mut s = empty_store();
        assert_eq!(
            s.project_progress(None),
            Progress {
                done: 0,
                total: 0,
                percent: 0
            }
        );
        let pid = s.add_project("p");
        let a = s.add_task("a", Some(pid.clone()));
        s.add_task("b", Some(pid.clone()));
        s.add_task("c", Some(pid.clone()));
        s.toggle_task(&a);
        let progress = s.project_progress(Some(&pid));
        assert_eq!(progress.done, 1);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.percent, 33);
    }

    #[test]
    fn next_undone_task_wraps_around() {
        let mut s = empty_store();
        // Tasks prepend, so document order is c, b, a.
        let a = s.add_task("a", None);
        let b = s.add_task("b", None);
        let c = s.add_task("c", None);

        assert_eq!(s.next_undone_task(None).unwrap().id, c);
        assert_eq!(s.next_undone_task(Some(&b)).unwrap().id, a);
        // After the last task, scanning wraps to the front.
        assert_eq!(s.next_undone_task(Some(&a)).unwrap().id, c);

        s.toggle_task(&c);
        assert_eq!(s.next_undone_task(Some(&a)).unwrap().id, b);
    }

    #[test]
    fn import_of_export_round_trips() {
        let mut s = store();
        let pid = s.add_project("thesis");
        let tid = s.add_task("outline", Some(pid.clone()));
        s.add_time_secs(&tid, 90);
        s.set_reminder_civil(&tid, Some("2030-01-01T08:00".to_string()));
        s.add_block(Utc::now(), 30, Some("deep".to_string()));
        s.set_sleep_hours(Utc::now(), 7.0);

        let exported = s.export_json().unwrap();
        let mut other = empty_store();
        other.import_json(&exported).unwrap();

        let a = serde_json::to_value(s.document()).unwrap();
        let b = serde_json::to_value(other.document()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bad_import_leaves_the_document_unchanged() {
        let mut s = store();
        let before = s.export_json().unwrap();
        assert!(s.import_json("not a document").is_err());
        assert!(s.import_json(r#"{"tasks": 3}"#).is_err());
        assert_eq!(s.export_json().unwrap(), before);
    }

    #[test]
    fn import_backfills_missing_fields() {
        let mut s = empty_store();
        s.import_json(r#"{"blocks": []}"#).unwrap();
        // Top-level fields absent from the payload come from the seed.
        assert_eq!(s.document().projects.len(), 1);
        assert_eq!(s.document().active_project_id.as_deref(), Some("p1"));
    }

    #[test]
    fn reset_restores_the_seeded_document() {
        let mut s = empty_store();
        s.add_task("scratch", None);
        s.reset_to_default();
        assert_eq!(s.document().tasks.len(), 2);
        assert_eq!(s.document().active_project_id.as_deref(), Some("p1"));
    }

    proptest! {
        #[test]
        fn counters_stay_in_lockstep_and_never_decrease(
            increments in proptest::collection::vec(0u64..120, 1..40)
        ) {
            let mut s = empty_store();
            let id = s.add_task("t", None);
            let mut last = 0u64;
            for secs in &increments {
                s.add_time_secs(&id, *secs);
                let t = s.document().tasks.first().unwrap();
                prop_assert!(t.spent_secs() >= last);
                prop_assert_eq!(t.spent_secs(), t.today_sec);
                last = t.spent_secs();
            }
            let expected: u64 = increments.iter().sum();
            prop_assert_eq!(s.document().tasks.first().unwrap().spent_secs(), expected);
        }
    }
}
