//! The planner document and its entities.
//!
//! The document is the sole unit of persistence: every mutation rewrites it
//! whole. All cross-entity references are weak, id-valued fields; deleting
//! the referenced entity must actively clean up dependents (the store does).
//!
//! Per-field serde defaults encode the seeded starter document, so
//! deserializing a partial object overlays its top-level fields onto the
//! default shape. Loading, importing and first-run all share that path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::minute_str;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl Milestone {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            done: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub goal: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            goal: None,
            created_at: Utc::now(),
            milestones: Vec::new(),
        }
    }
}

/// A reminder setting, normalized from the two on-disk forms.
///
/// The civil-string form takes precedence over the legacy absolute-instant
/// form; that rule lives here and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reminder {
    /// Civil-timezone local time to the minute, `YYYY-MM-DDTHH:MM`.
    Civil(String),
    /// Legacy absolute instant.
    Instant(DateTime<Utc>),
}

impl Reminder {
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        match self {
            Reminder::Civil(at) => minute_str(now).as_str() >= at.as_str(),
            Reminder::Instant(at) => now >= *at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub difficulty: Option<u8>,
    /// Lifetime seconds spent. Absent on documents written before the
    /// seconds-granularity counter existed; read through [`Task::spent_secs`].
    #[serde(default)]
    pub spent_sec: Option<u64>,
    /// Seconds spent today. Reset is owned by an external daily rollover,
    /// never by the store.
    #[serde(default)]
    pub today_sec: u64,
    /// Legacy minutes-granularity lifetime counter, superseded by `spent_sec`.
    #[serde(default)]
    pub spent_min: Option<u64>,
    /// Reminder as a civil-timezone local string, `YYYY-MM-DDTHH:MM`.
    #[serde(default)]
    pub remind_at_civil: Option<String>,
    /// Legacy absolute-instant reminder, superseded by `remind_at_civil`.
    #[serde(default)]
    pub remind_at: Option<DateTime<Utc>>,
    /// Guards against a reminder firing twice.
    #[serde(default)]
    pub reminded: bool,
}

impl Task {
    pub fn new(title: impl Into<String>, project_id: Option<String>) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            project_id,
            done: false,
            due: None,
            difficulty: None,
            spent_sec: Some(0),
            today_sec: 0,
            spent_min: None,
            remind_at_civil: None,
            remind_at: None,
            reminded: false,
        }
    }

    /// The effective reminder, civil form winning over the legacy instant.
    pub fn reminder(&self) -> Option<Reminder> {
        if let Some(at) = &self.remind_at_civil {
            return Some(Reminder::Civil(at.clone()));
        }
        self.remind_at.map(Reminder::Instant)
    }

    /// Lifetime seconds, falling back to the legacy minutes counter.
    pub fn spent_secs(&self) -> u64 {
        self.spent_sec
            .unwrap_or_else(|| self.spent_min.unwrap_or(0) * 60)
    }

    /// Lifetime whole minutes.
    pub fn spent_min_total(&self) -> u64 {
        self.spent_secs() / 60
    }

    /// Today's whole minutes.
    pub fn today_min(&self) -> u64 {
        self.today_sec / 60
    }
}

/// A logged proof-of-work artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evidence {
    pub id: String,
    #[serde(default)]
    pub project_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub file_hint: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Evidence {
    pub fn new(fields: NewEvidence) -> Self {
        Self {
            id: new_id(),
            project_id: fields.project_id,
            title: fields.title,
            note: fields.note,
            file_hint: fields.file_hint,
            created_at: Utc::now(),
        }
    }
}

/// Fields for creating an [`Evidence`] item.
#[derive(Debug, Clone, Default)]
pub struct NewEvidence {
    pub title: String,
    pub project_id: Option<String>,
    pub note: Option<String>,
    pub file_hint: Option<String>,
}

/// Partial update for an [`Evidence`] item. `Some` fields replace the
/// current value; `None` fields are left alone.
#[derive(Debug, Clone, Default)]
pub struct EvidencePatch {
    pub title: Option<String>,
    pub project_id: Option<String>,
    pub note: Option<String>,
    pub file_hint: Option<String>,
}

/// One completed focus session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeepBlock {
    pub id: String,
    /// Civil calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub minutes: u32,
    #[serde(default)]
    pub note: Option<String>,
}

impl DeepBlock {
    pub fn new(date: impl Into<String>, minutes: u32, note: Option<String>) -> Self {
        Self {
            id: new_id(),
            date: date.into(),
            minutes,
            note,
        }
    }
}

/// Per-day wellbeing record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Civil calendar date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub sleep_hours: Option<f32>,
    #[serde(default)]
    pub mood: Option<String>,
}

/// The complete planner state tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(default = "seed_projects")]
    pub projects: Vec<Project>,
    #[serde(default = "seed_tasks")]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub blocks: Vec<DeepBlock>,
    #[serde(default)]
    pub health: Vec<Health>,
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    /// Task currently bound to the focus timer, if any.
    #[serde(default)]
    pub current_focus_id: Option<String>,
    /// Project currently selected for filtering, if any.
    #[serde(default = "seed_active_project_id")]
    pub active_project_id: Option<String>,
}

// Fixed ids so the seeded document is deterministic.
const SEED_PROJECT_ID: &str = "p1";

fn seed_projects() -> Vec<Project> {
    vec![Project {
        id: SEED_PROJECT_ID.to_string(),
        name: "Getting started".to_string(),
        goal: Some("Ship a first working week".to_string()),
        created_at: Utc::now(),
        milestones: vec![
            Milestone {
                id: "m1".to_string(),
                title: "v0 skeleton".to_string(),
                done: false,
            },
            Milestone {
                id: "m2".to_string(),
                title: "First reproducible result".to_string(),
                done: false,
            },
            Milestone {
                id: "m3".to_string(),
                title: "Freeze and write it up".to_string(),
                done: false,
            },
        ],
    }]
}

fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "t1".to_string(),
            project_id: Some(SEED_PROJECT_ID.to_string()),
            ..Task::new("Plan this week", None)
        },
        Task {
            id: "t2".to_string(),
            project_id: Some(SEED_PROJECT_ID.to_string()),
            ..Task::new("Run a first focus session", None)
        },
    ]
}

fn seed_active_project_id() -> Option<String> {
    Some(SEED_PROJECT_ID.to_string())
}

impl Default for Document {
    fn default() -> Self {
        Self {
            projects: seed_projects(),
            tasks: seed_tasks(),
            blocks: Vec::new(),
            health: Vec::new(),
            evidence: Vec::new(),
            current_focus_id: None,
            active_project_id: seed_active_project_id(),
        }
    }
}
