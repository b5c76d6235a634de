//! Plain-text daily wrap-up.
//!
//! Derived entirely from store selectors and the timer's read model;
//! consumers hand the text to a clipboard or file-download surface.

use chrono::{DateTime, Utc};

use crate::clock::today_str;
use crate::storage::StorageBackend;
use crate::store::Store;
use crate::timer::FocusTimer;

/// Multi-line wrap-up of today's focus blocks, task progress and timer
/// state. Task counts are scoped to the active project (or the first
/// project when none is selected).
pub fn daily_summary<B: StorageBackend>(
    store: &Store<B>,
    timer: &FocusTimer,
    now: DateTime<Utc>,
) -> String {
    let doc = store.document();
    let date = today_str(now);
    let total_min: u64 = store
        .today_blocks(now)
        .iter()
        .map(|b| u64::from(b.minutes))
        .sum();
    let deep = store.today_deep_blocks(now).len();
    let short = store.today_short_blocks(now).len();

    let pid = doc
        .active_project_id
        .clone()
        .or_else(|| doc.projects.first().map(|p| p.id.clone()));
    let progress = store.project_progress(pid.as_deref());

    let focus_line = match store.current_focus_task() {
        Some(t) => format!(
            "Current task: {} (lifetime {} min | today {} min)",
            t.title,
            t.spent_min_total(),
            t.today_min()
        ),
        None => "Current task: none".to_string(),
    };

    let display = timer.display();
    let timer_line = format!(
        "Timer: {} (remaining {}:{})",
        if display.running {
            "focusing"
        } else {
            "not started"
        },
        display.minutes,
        display.seconds
    );

    [
        format!("[{date} study wrap-up]"),
        format!("Focus: {deep} deep block(s), {short} short, {total_min} min total"),
        format!("Tasks: {}/{} done", progress.done, progress.total.max(1)),
        format!(
            "Today's task time: {} min total",
            store.today_total_task_min()
        ),
        focus_line,
        timer_line,
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::storage::MemoryBackend;

    #[test]
    fn summary_reflects_the_day() {
        let mut store = Store::open(MemoryBackend::new(), Config::default());
        store
            .import_json(r#"{"projects": [], "tasks": [], "active_project_id": null}"#)
            .unwrap();
        let now = Utc::now();
        let pid = store.add_project("thesis");
        store.set_active_project(Some(pid.clone()));
        let tid = store.add_task("outline", Some(pid));
        store.set_focus(Some(tid.clone()));
        store.add_time_secs(&tid, 150);
        store.add_block(now, 30, Some("deep".to_string()));
        store.add_block(now, 10, Some("short-focus".to_string()));

        let timer = FocusTimer::new(&Config::default());
        let text = daily_summary(&store, &timer, now);

        assert!(text.contains("1 deep block(s), 1 short, 40 min total"));
        assert!(text.contains("Tasks: 0/1 done"));
        assert!(text.contains("Today's task time: 2 min total"));
        assert!(text.contains("Current task: outline (lifetime 2 min | today 2 min)"));
        assert!(text.contains("Timer: not started (remaining 45:00)"));
    }

    #[test]
    fn summary_without_focus_or_blocks() {
        let store = Store::open(MemoryBackend::new(), Config::default());
        let timer = FocusTimer::new(&Config::default());
        let text = daily_summary(&store, &timer, Utc::now());
        assert!(text.contains("0 deep block(s), 0 short, 0 min total"));
        assert!(text.contains("Current task: none"));
        // The seeded project has two open tasks; the denominator never
        // renders as zero.
        assert!(text.contains("Tasks: 0/2 done"));
    }
}
