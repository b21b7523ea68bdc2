//! Admin configuration persistence
//!
//! Stored as JSON in `<config_dir>/cartadmin/config.json`.

use crate::error::CoreError;
use crate::visibility::Breakpoint;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIG_FILE: &str = "config.json";

/// cartadmin settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Web viewport width (CSS px) below which the sidebar becomes an overlay
    pub web_breakpoint_px: Breakpoint,
    /// Terminal width (columns) below which the sidebar becomes an overlay
    pub tui_breakpoint_cols: Breakpoint,
    /// Menu file to use instead of the built-in OpenCart menu
    pub menu: Option<PathBuf>,
    /// Route shown on startup
    pub start_route: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            web_breakpoint_px: Breakpoint::WEB,
            tui_breakpoint_cols: Breakpoint::TERMINAL,
            menu: None,
            start_route: "/".to_string(),
        }
    }
}

impl AdminConfig {
    /// `<config_dir>/cartadmin/config.json`, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("cartadmin").join(CONFIG_FILE))
    }

    /// Load the config at `path`.
    /// Returns defaults on any I/O, parse or validation error (graceful degradation).
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "No config file, using defaults");
                return Self::default();
            }
        };

        let config: Self = match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Unreadable config, using defaults");
                return Self::default();
            }
        };

        match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// Persist the config to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.web_breakpoint_px.0 == 0 {
            return Err(CoreError::InvalidConfig {
                message: "web_breakpoint_px must be greater than zero".to_string(),
            });
        }
        if self.tui_breakpoint_cols.0 == 0 {
            return Err(CoreError::InvalidConfig {
                message: "tui_breakpoint_cols must be greater than zero".to_string(),
            });
        }
        if !self.start_route.starts_with('/') {
            return Err(CoreError::InvalidConfig {
                message: format!("start_route '{}' must start with '/'", self.start_route),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AdminConfig::load(&dir.path().join("config.json"));
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.web_breakpoint_px, Breakpoint(1024));
        assert_eq!(config.tui_breakpoint_cols, Breakpoint(100));
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = AdminConfig {
            web_breakpoint_px: Breakpoint(800),
            menu: Some(PathBuf::from("/srv/menu.yaml")),
            start_route: "/catalog/products".to_string(),
            ..Default::default()
        };

        config.save(&path).unwrap();
        assert_eq!(AdminConfig::load(&path), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "tui_breakpoint_cols": 80 }"#).unwrap();

        let config = AdminConfig::load(&path);
        assert_eq!(config.tui_breakpoint_cols, Breakpoint(80));
        assert_eq!(config.web_breakpoint_px, Breakpoint::WEB);
        assert_eq!(config.start_route, "/");
    }

    #[test]
    fn test_garbage_and_invalid_values_fall_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        std::fs::write(&path, "not json").unwrap();
        assert_eq!(AdminConfig::load(&path), AdminConfig::default());

        std::fs::write(&path, r#"{ "start_route": "catalog" }"#).unwrap();
        assert_eq!(AdminConfig::load(&path), AdminConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_breakpoint() {
        let config = AdminConfig {
            web_breakpoint_px: Breakpoint(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CoreError::InvalidConfig { .. })
        ));
    }
}
