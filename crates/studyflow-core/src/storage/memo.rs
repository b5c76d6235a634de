//! Per-day free-text memo.
//!
//! One storage key per civil calendar day, outside the planner document.
//! Text is capped at a configured character count.

use chrono::{DateTime, Utc};

use crate::clock::today_str;
use crate::config::Config;
use crate::storage::StorageBackend;

fn memo_key(date: &str) -> String {
    format!("daily_memo_{date}")
}

/// Daily memo storage sharing the planner's key-value mechanism.
#[derive(Debug)]
pub struct MemoStore<B: StorageBackend> {
    backend: B,
    char_limit: usize,
}

impl<B: StorageBackend> MemoStore<B> {
    pub fn new(backend: B, config: &Config) -> Self {
        Self {
            backend,
            char_limit: config.memo_char_limit,
        }
    }

    /// Today's memo, or the empty string when none was saved.
    pub fn load(&self, now: DateTime<Utc>) -> String {
        self.backend
            .get(&memo_key(&today_str(now)))
            .unwrap_or_default()
    }

    /// Save today's memo, truncated to the character cap.
    /// Write failures are logged and swallowed.
    pub fn save(&mut self, now: DateTime<Utc>, text: &str) {
        let capped: String = text.chars().take(self.char_limit).collect();
        let key = memo_key(&today_str(now));
        if let Err(err) = self.backend.set(&key, &capped) {
            log::warn!("failed to save daily memo: {err}");
        }
    }

    pub fn clear(&mut self, now: DateTime<Utc>) {
        self.save(now, "");
    }
}
