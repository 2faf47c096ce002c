//! Configuration handling for the TUI

use crate::state::Identity;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Signed-in visitor, used to prefill contact fields
    pub identity: Option<Identity>,
    /// Delay before the simulated sink acknowledges, in milliseconds
    pub submission_delay_ms: Option<u64>,
    /// Make the simulated sink fail every submission
    pub simulate_failure: Option<bool>,
    /// Start on the home screen instead of the loading screen
    pub skip_loading_screen: Option<bool>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "agency", "agency-intake")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn simulate_failure(&self) -> bool {
        self.simulate_failure.unwrap_or(false)
    }

    pub fn skip_loading_screen(&self) -> bool {
        self.skip_loading_screen.unwrap_or(false)
    }
}
