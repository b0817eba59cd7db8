//! Configuration loading and management
//!
//! Handles parsing of `.tablero.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Display labels for rendered cards
    #[serde(default)]
    pub labels: LabelsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            labels: LabelsConfig::default(),
        }
    }
}

/// Backend connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the tasks backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Labels shown in card metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsConfig {
    /// Status label for tasks that are not completed
    #[serde(default = "default_pending_label")]
    pub pending: String,

    /// Status label for completed tasks
    #[serde(default = "default_completed_label")]
    pub completed: String,

    /// Priority names indexed by ordinal, lowest first
    #[serde(default = "default_priority_labels")]
    pub priorities: Vec<String>,
}

fn default_pending_label() -> String {
    "Pendiente".to_string()
}

fn default_completed_label() -> String {
    "Completada".to_string()
}

fn default_priority_labels() -> Vec<String> {
    vec![
        "baja".to_string(),
        "media".to_string(),
        "alta".to_string(),
    ]
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            pending: default_pending_label(),
            completed: default_completed_label(),
            priorities: default_priority_labels(),
        }
    }
}

impl LabelsConfig {
    /// Priority name for a 1-based ordinal, if configured.
    pub fn priority_name(&self, priority: i64) -> Option<&str> {
        if priority < 1 {
            return None;
        }
        self.priorities
            .get((priority - 1) as usize)
            .map(String::as_str)
    }

    fn validate(&self) -> crate::error::Result<()> {
        if self.pending.trim().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "labels.pending cannot be empty".to_string(),
            ));
        }
        if self.completed.trim().is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "labels.completed cannot be empty".to_string(),
            ));
        }
        for name in &self.priorities {
            if name.trim().is_empty() {
                return Err(crate::error::Error::InvalidConfig(
                    "labels.priorities cannot include empty entries".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl ServerConfig {
    fn validate(&self) -> crate::error::Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(crate::error::Error::InvalidConfig(
                "server.base_url cannot be empty".to_string(),
            ));
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(crate::error::Error::InvalidConfig(format!(
                "server.base_url must start with http:// or https:// (got '{url}')"
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from a `.tablero.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(".tablero.toml");
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &PathBuf) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.server.validate()?;
        self.labels.validate()?;
        Ok(())
    }
}
