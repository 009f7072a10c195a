//! Workspace configuration (`.crew/config.yaml`)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::capacity::DEFAULT_COMPLETION_WINDOW_DAYS;
use crate::core::team::Actor;

/// Workspace-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Who is operating the tool
    pub actor: Actor,

    /// Lookahead window for nearing-completion detection, in days
    pub completion_window_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            actor: Actor::default(),
            completion_window_days: DEFAULT_COMPLETION_WINDOW_DAYS,
        }
    }
}

impl Config {
    /// Load config from a file, falling back to defaults if absent or unreadable
    pub fn load(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_yml::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Write config to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let content = serde_yml::to_string(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }
}
