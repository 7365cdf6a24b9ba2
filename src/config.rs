//! Grid configuration
//!
//! Stored in `~/.config/lead-grid/config.yaml`. Every key is optional and
//! falls back to the built-in default.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{InsertPlacement, ResizeBounds};

/// Size range accepted by a resize handle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl HandleRange {
    pub fn bounds(self) -> ResizeBounds {
        ResizeBounds::new(self.min, self.max)
    }
}

/// Tunables for sizes, resize bounds and sync behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Initial width of every column
    pub default_column_width: f64,
    /// Initial height of every row
    pub default_row_height: f64,
    /// Floor applied on every column resize
    pub min_column_width: f64,
    /// Floor applied on every row resize
    pub min_row_height: f64,
    /// Range of the column header resize handle
    pub header_resize: HandleRange,
    /// Range of a column handle that does not override it
    pub column_handle_resize: HandleRange,
    /// Ceiling for row resize handles (none by default)
    pub row_resize_max: Option<f64>,
    /// How long mutation errors stay on screen
    pub error_display_ms: u64,
    /// Where realtime inserts are placed
    pub insert_placement: InsertPlacement,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            default_column_width: 150.0,
            default_row_height: 32.0,
            min_column_width: 100.0,
            min_row_height: 32.0,
            header_resize: HandleRange {
                min: 100.0,
                max: Some(600.0),
            },
            column_handle_resize: HandleRange {
                min: 50.0,
                max: Some(800.0),
            },
            row_resize_max: None,
            error_display_ms: 3000,
            insert_placement: InsertPlacement::Append,
        }
    }
}

impl GridConfig {
    /// Load config from the default location, or return defaults
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

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Write config to `path`, creating parent directories
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

    pub fn error_display(&self) -> Duration {
        Duration::from_millis(self.error_display_ms)
    }

    /// Bounds of a row resize handle
    pub fn row_handle_bounds(&self) -> ResizeBounds {
        ResizeBounds::new(self.min_row_height, self.row_resize_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.default_column_width, 150.0);
        assert_eq!(config.error_display(), Duration::from_secs(3));
        assert_eq!(config.header_resize.bounds(), ResizeBounds::new(100.0, Some(600.0)));
        assert_eq!(config.row_handle_bounds(), ResizeBounds::new(32.0, None));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = GridConfig::from_yaml("error_display_ms: 500\ninsert_placement: by_created_at\n")
            .unwrap();
        assert_eq!(config.error_display_ms, 500);
        assert_eq!(config.insert_placement, InsertPlacement::ByCreatedAt);
        assert_eq!(config.min_row_height, 32.0);
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        assert!(GridConfig::from_yaml("insert_placement: sideways").is_err());
    }
}
