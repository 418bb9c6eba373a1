//! Runtime configuration resolution.
//!
//! # Responsibility
//! - Resolve database path and logging settings from the environment.
//!
//! # Invariants
//! - Blank or unset variables fall back to defaults; resolution never fails.
//! - Values are trimmed before use.

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "GROCERY_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "GROCERY_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "GROCERY_LOG_DIR";

const DEFAULT_DB_FILE_NAME: &str = "grocery_items.sqlite3";
const DEFAULT_LOG_DIR_NAME: &str = "grocery_logs";

/// Settings needed to bootstrap logging and the grocery database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            db_path: std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level().to_string(),
            log_dir: std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME),
        }
    }
}

impl CoreConfig {
    /// Resolves configuration from `GROCERY_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV).map_or(defaults.db_path, PathBuf::from),
            log_level: read(LOG_LEVEL_ENV).unwrap_or(defaults.log_level),
            log_dir: read(LOG_DIR_ENV).map_or(defaults.log_dir, PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn unset_values_fall_back_to_defaults() {
        let config = CoreConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, CoreConfig::default());
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = CoreConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, "   "),
            (LOG_LEVEL_ENV, ""),
        ]));
        assert_eq!(config.db_path, CoreConfig::default().db_path);
        assert_eq!(config.log_level, CoreConfig::default().log_level);
    }

    #[test]
    fn provided_values_are_trimmed_and_used() {
        let config = CoreConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, " /data/groceries.db "),
            (LOG_LEVEL_ENV, "warn"),
            (LOG_DIR_ENV, "/var/log/grocery"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/data/groceries.db"));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/grocery"));
    }
}
