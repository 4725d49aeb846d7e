//! Engine configuration persistence
//!
//! Stores text box preferences in `~/.config/textbox/config.yaml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::editable::{EditConstraints, PasteMode};

/// Text box configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum number of lines; Enter is refused at the limit
    #[serde(default)]
    pub max_lines: Option<usize>,

    /// Maximum characters per line
    #[serde(default)]
    pub max_line_length: Option<usize>,

    /// Reject typed control characters
    #[serde(default = "default_printable_only")]
    pub printable_only: bool,

    #[serde(default)]
    pub paste_mode: PasteMode,
}

fn default_printable_only() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_lines: None,
            max_line_length: None,
            printable_only: default_printable_only(),
            paste_mode: PasteMode::default(),
        }
    }
}

impl EngineConfig {
    /// Load config from the user config dir, or return defaults if missing or invalid
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
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    /// Save config to the user config dir
    pub fn save(&self) -> Result<()> {
        let path = crate::config_paths::config_file().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Runtime constraints for an engine using this config
    pub fn constraints(&self) -> EditConstraints {
        EditConstraints {
            max_lines: self.max_lines,
            max_line_length: self.max_line_length,
            printable_only: self.printable_only,
            char_filter: None,
            paste_mode: self.paste_mode,
        }
    }
}
