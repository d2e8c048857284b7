// src/history/file.rs
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tempfile::NamedTempFile;

use super::{HistoryBackend, Result};
use crate::models::HistoryEntry;

/// Conventional history location, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "password_history.json";

/// Stores the history as a pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl Default for JsonFileBackend {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_FILE)
    }
}

impl HistoryBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<Vec<HistoryEntry>>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("History file {} does not exist", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let entries: Vec<HistoryEntry> = serde_json::from_str(&content)?;
        log::debug!("Loaded {} history entries from {}", entries.len(), self.path.display());
        Ok(Some(entries))
    }

    fn store(&self, entries: &[HistoryEntry]) -> Result<()> {
        // Write beside the target, then rename over it
        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        {
            let mut writer = BufWriter::new(tmp.as_file_mut());
            let mut serializer = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
            entries.serialize(&mut serializer)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        log::info!("Saved {} history entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}
