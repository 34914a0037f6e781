//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the intake TUI.
/// Every field is optional; unset fields fall back to the built-in
/// production identifiers.
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IntakeConfig {
    /// Media host upload endpoint
    pub upload_url: Option<String>,
    /// Unsigned upload preset name
    pub upload_preset: Option<String>,
    /// Email dispatch endpoint
    pub email_url: Option<String>,
    /// Email dispatch service id
    pub email_service_id: Option<String>,
    /// Email dispatch template id
    pub email_template_id: Option<String>,
    /// Email dispatch account id
    pub email_user_id: Option<String>,
}

#[allow(dead_code)]
impl IntakeConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "phonetel", "intake-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: IntakeConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}
