/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notebook_core::history::HistoryConfig;
use notebook_core::SortCondition;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "NOTEBOOK_CONFIG";

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Max undo steps kept per session. `null` = unlimited.
    pub max_history_depth: Option<usize>,
    /// Sort condition applied to a new notebook (e.g. "title", "created").
    pub default_sort: String,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_history_depth: None,
            default_sort: SortCondition::default().name().to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `NOTEBOOK_CONFIG` environment variable
    /// 2. `notebook.json` next to the executable
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|d| d.join("notebook.json")))
            .unwrap_or_else(|| PathBuf::from("notebook.json"))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (missing file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Don't overwrite a broken file
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e:#}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Resets invalid fields to usable values.
    pub fn sanitize(&mut self) {
        if self.max_history_depth == Some(0) {
            self.max_history_depth = None;
        }
        match self.default_sort.parse::<SortCondition>() {
            Ok(cond) => self.default_sort = cond.name().to_string(),
            Err(e) => {
                tracing::warn!("{e}, falling back to insertion order");
                self.default_sort = SortCondition::default().name().to_string();
            }
        }
        if self.log_filter.trim().is_empty() {
            self.log_filter = "info".to_string();
        }
    }

    /// The sort condition named by `default_sort`.
    pub fn sort_condition(&self) -> SortCondition {
        self.default_sort.parse().unwrap_or_default()
    }

    /// History engine settings derived from this config.
    pub fn history_config(&self) -> HistoryConfig {
        HistoryConfig {
            max_history_depth: self.max_history_depth,
        }
    }
}
