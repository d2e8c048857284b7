// src/models.rs
use std::fmt;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Layout of the timestamp stored with every history entry (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Password generation settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            length: 12,
            include_upper: true,
            include_lower: true,
            include_digits: true,
            include_symbols: true,
            exclude_similar: true,
        }
    }
}

impl GenerationSettings {
    /// True when at least one of the four character classes is enabled.
    pub fn has_character_class(&self) -> bool {
        self.include_upper || self.include_lower || self.include_digits || self.include_symbols
    }
}

impl fmt::Display for GenerationSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "length={}, upper={}, lower={}, digits={}, symbols={}, exclude_similar={}",
            self.length,
            self.include_upper,
            self.include_lower,
            self.include_digits,
            self.include_symbols,
            self.exclude_similar
        )
    }
}

// One persisted password generation event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub password: String,
    pub settings: GenerationSettings,
    pub timestamp: String,
}

impl HistoryEntry {
    /// Stamp a new entry with the current local time.
    pub fn new(password: impl Into<String>, settings: GenerationSettings) -> Self {
        Self::with_timestamp(password, settings, Local::now().format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn with_timestamp(
        password: impl Into<String>,
        settings: GenerationSettings,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            password: password.into(),
            settings,
            timestamp: timestamp.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn settings_serialize_with_exact_field_names() {
        let value = serde_json::to_value(GenerationSettings::default()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "exclude_similar",
                "include_digits",
                "include_lower",
                "include_symbols",
                "include_upper",
                "length",
            ]
        );
        assert_eq!(object["length"], 12);
    }

    #[test]
    fn entry_serializes_password_settings_timestamp() {
        let entry = HistoryEntry::with_timestamp("abcDEF12", GenerationSettings::default(), "2024-01-02 03:04:05");
        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(value["password"], "abcDEF12");
        assert_eq!(value["timestamp"], "2024-01-02 03:04:05");
        assert_eq!(value["settings"]["include_upper"], true);
    }

    #[test]
    fn new_entry_timestamp_matches_format() {
        let entry = HistoryEntry::new("secret", GenerationSettings::default());
        assert!(NaiveDateTime::parse_from_str(&entry.timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(entry.timestamp.len(), 19);
    }

    #[test]
    fn has_character_class_ignores_exclude_similar() {
        let settings = GenerationSettings {
            length: 8,
            include_upper: false,
            include_lower: false,
            include_digits: false,
            include_symbols: false,
            exclude_similar: true,
        };
        assert!(!settings.has_character_class());
        assert!(GenerationSettings { include_digits: true, ..settings }.has_character_class());
    }
}
