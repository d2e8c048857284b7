// src/history/memory.rs
use std::sync::Mutex;

use super::{HistoryBackend, Result};
use crate::models::HistoryEntry;

/// Keeps the history in memory only. Nothing touches the filesystem.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<Option<Vec<HistoryEntry>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries(entries: Vec<HistoryEntry>) -> Self {
        Self {
            entries: Mutex::new(Some(entries)),
        }
    }
}

impl HistoryBackend for MemoryBackend {
    fn load(&self) -> Result<Option<Vec<HistoryEntry>>> {
        let guard = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(guard.clone())
    }

    fn store(&self, entries: &[HistoryEntry]) -> Result<()> {
        let mut guard = self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Some(entries.to_vec());
        Ok(())
    }
}
