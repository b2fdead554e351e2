//! Runtime configuration from environment variables.
//!
//! | variable                      | default            |
//! |-------------------------------|--------------------|
//! | `GUIDE_DATASET`               | bundled dataset    |
//! | `GUIDE_STATE_FILE`            | in-memory store    |
//! | `GUIDE_CONTENT_DEBOUNCE_MS`   | 300                |
//! | `GUIDE_DIRECTORY_DEBOUNCE_MS` | 150                |

use crate::data::GuideData;
use crate::error::Result;
use crate::search::{DEFAULT_CONTENT_DEBOUNCE, DEFAULT_DIRECTORY_DEBOUNCE};
use crate::storage::{JsonFileStore, KeyValueStore, MemoryStore};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct GuideConfig {
    pub dataset_path: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
    pub content_debounce: Duration,
    pub directory_debounce: Duration,
}

impl Default for GuideConfig {
    fn default() -> Self {
        Self {
            dataset_path: None,
            state_file: None,
            content_debounce: DEFAULT_CONTENT_DEBOUNCE,
            directory_debounce: DEFAULT_DIRECTORY_DEBOUNCE,
        }
    }
}

impl GuideConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source; unset or empty values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Self {
            dataset_path: non_empty("GUIDE_DATASET").map(PathBuf::from),
            state_file: non_empty("GUIDE_STATE_FILE").map(PathBuf::from),
            content_debounce: non_empty("GUIDE_CONTENT_DEBOUNCE_MS")
                .map(|raw| parse_millis("GUIDE_CONTENT_DEBOUNCE_MS", &raw, defaults.content_debounce))
                .unwrap_or(defaults.content_debounce),
            directory_debounce: non_empty("GUIDE_DIRECTORY_DEBOUNCE_MS")
                .map(|raw| parse_millis("GUIDE_DIRECTORY_DEBOUNCE_MS", &raw, defaults.directory_debounce))
                .unwrap_or(defaults.directory_debounce),
        }
    }

    /// Load the configured dataset, or the bundled one.
    pub fn load_dataset(&self) -> Result<GuideData> {
        match &self.dataset_path {
            Some(path) => GuideData::load(path),
            None => GuideData::bundled(),
        }
    }

    /// Open the configured selection store.
    pub fn open_store(&self) -> Result<Box<dyn KeyValueStore>> {
        match &self.state_file {
            Some(path) => Ok(Box::new(JsonFileStore::open(path)?)),
            None => Ok(Box::new(MemoryStore::new())),
        }
    }
}

fn parse_millis(key: &str, raw: &str, fallback: Duration) -> Duration {
    match raw.trim().parse::<u64>() {
        Ok(ms) => Duration::from_millis(ms),
        Err(_) => {
            tracing::warn!("Ignoring {}={:?}: not a whole number of milliseconds", key, raw);
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> GuideConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GuideConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, GuideConfig::default());
        assert_eq!(config.content_debounce, Duration::from_millis(300));
        assert_eq!(config.directory_debounce, Duration::from_millis(150));
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("GUIDE_DATASET", "/srv/guide/universities.json"),
            ("GUIDE_CONTENT_DEBOUNCE_MS", "250"),
            ("GUIDE_STATE_FILE", ""),
        ]);
        assert_eq!(
            config.dataset_path,
            Some(PathBuf::from("/srv/guide/universities.json"))
        );
        assert_eq!(config.content_debounce, Duration::from_millis(250));
        assert_eq!(config.state_file, None);
    }

    #[test]
    fn test_bad_number_falls_back() {
        let config = config_from(&[("GUIDE_DIRECTORY_DEBOUNCE_MS", "fast")]);
        assert_eq!(config.directory_debounce, DEFAULT_DIRECTORY_DEBOUNCE);
    }

    #[test]
    fn test_default_config_loads_bundle() {
        let data = GuideConfig::default().load_dataset().unwrap();
        assert!(!data.is_empty());
    }
}
