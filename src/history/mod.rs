// src/history/mod.rs
//! Persisted record of every generated password and the settings behind it.
//!
//! The whole log is read, extended, and written back on every append. Storage
//! is abstracted behind [`HistoryBackend`] so the location is chosen by the
//! caller: [`JsonFileBackend`] in production, [`MemoryBackend`] in tests.

mod file;
#[cfg(test)]
mod memory;

pub use file::{JsonFileBackend, DEFAULT_HISTORY_FILE};
#[cfg(test)]
pub use memory::MemoryBackend;

use std::io;

use thiserror::Error;

use crate::models::{GenerationSettings, HistoryEntry};

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not replace history file: {0}")]
    Persist(#[from] tempfile::PersistError),
}

pub type Result<T> = std::result::Result<T, HistoryError>;

/// Where the history collection lives.
pub trait HistoryBackend {
    /// Returns `None` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<Vec<HistoryEntry>>>;

    /// Replaces the persisted collection with `entries`.
    fn store(&self, entries: &[HistoryEntry]) -> Result<()>;
}

pub struct PasswordHistory<B> {
    backend: B,
}

impl<B: HistoryBackend> PasswordHistory<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Record a password stamped with the current local time.
    pub fn append(&self, password: &str, settings: GenerationSettings) -> Result<HistoryEntry> {
        self.push(HistoryEntry::new(password, settings))
    }

    #[cfg(test)]
    pub fn append_at(&self, password: &str, settings: GenerationSettings, timestamp: &str) -> Result<HistoryEntry> {
        self.push(HistoryEntry::with_timestamp(password, settings, timestamp))
    }

    pub fn load_all(&self) -> Result<Option<Vec<HistoryEntry>>> {
        self.backend.load()
    }

    fn push(&self, entry: HistoryEntry) -> Result<HistoryEntry> {
        let mut entries = match self.backend.load()? {
            Some(entries) => entries,
            None => {
                log::info!("No password history yet, starting a new one");
                Vec::new()
            }
        };

        entries.push(entry.clone());
        self.backend.store(&entries)?;

        log::debug!("Password history now holds {} entries", entries.len());
        Ok(entry)
    }
}
