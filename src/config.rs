//! Editor configuration persistence
//!
//! Stores user preferences in `~/.config/reqline/config.yaml`

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::layout::WrapOptions;

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Height of a visual line in pixels
    #[serde(default = "default_line_height")]
    pub line_height: f32,

    /// Indent, in columns, of soft-wrapped continuation lines
    #[serde(default = "default_continuation_indent")]
    pub continuation_indent: usize,

    /// Maximum command length in bytes
    #[serde(default = "default_max_command_len")]
    pub max_command_len: usize,

    /// Maximum number of undo steps kept
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_line_height() -> f32 {
    20.0
}

fn default_continuation_indent() -> usize {
    2
}

fn default_max_command_len() -> usize {
    64 * 1024
}

fn default_history_limit() -> usize {
    1000
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            line_height: default_line_height(),
            continuation_indent: default_continuation_indent(),
            max_command_len: default_max_command_len(),
            history_limit: default_history_limit(),
        }
    }
}

impl EditorConfig {
    /// Load config from disk, or return defaults if not found or unreadable
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| anyhow!("no config directory available"))?;
        self.save_to(&path)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }

        let content = serde_yaml::to_string(self).context("failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Wrap options for a given available width
    pub fn wrap_options(&self, max_width: f32) -> WrapOptions {
        WrapOptions {
            max_width,
            continuation_indent: self.continuation_indent,
        }
    }
}
