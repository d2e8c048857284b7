// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::history::DEFAULT_HISTORY_FILE;

// Runtime configuration for the password generator
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // History
    pub history_file: PathBuf,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // History
            history_file: PathBuf::from(DEFAULT_HISTORY_FILE),

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // History
        if let Some(path) = lookup("PASSGEN_HISTORY_FILE") {
            if !path.trim().is_empty() {
                config.history_file = PathBuf::from(path);
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => log::warn!("Unknown log level '{}', using {}", level, config.log_level),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_conventional_layout() {
        let config = config_from(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.history_file, PathBuf::from("password_history.json"));
        assert_eq!(config.log_level, LevelFilter::Warn);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("PASSGEN_HISTORY_FILE", "/tmp/other.json"),
            ("LOG_LEVEL", "DEBUG"),
            ("LOG_FILE", "passgen.log"),
        ]);
        assert_eq!(config.history_file, PathBuf::from("/tmp/other.json"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file, Some(PathBuf::from("passgen.log")));
    }

    #[test]
    fn blank_or_unknown_values_keep_defaults() {
        let config = config_from(&[("PASSGEN_HISTORY_FILE", "  "), ("LOG_LEVEL", "loud"), ("LOG_FILE", "")]);
        assert_eq!(config, Config::default());
    }
}
