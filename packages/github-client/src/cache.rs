use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::types::Repository;

/// In-memory repository cache keyed by lowercased `owner/repo`.
///
/// The lock is never held across an await point.
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, (Instant, Repository)>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached entry for `name` if it was stored less than `ttl` ago.
    pub fn get(&self, name: &str, ttl: Duration) -> Option<Repository> {
        if ttl.is_zero() {
            return None;
        }
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&name.to_lowercase())
            .filter(|(stored_at, _)| stored_at.elapsed() < ttl)
            .map(|(_, repo)| repo.clone())
    }

    pub fn insert(&self, name: &str, repo: Repository) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(name.to_lowercase(), (Instant::now(), repo));
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
