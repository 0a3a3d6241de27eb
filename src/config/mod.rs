use anyhow::Result;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::grid::{DEFAULT_CANCEL_KEY, DEFAULT_HIGHLIGHT};
use crate::theme;

fn default_columns() -> usize {
    4
}

fn default_cell_width() -> usize {
    20
}

fn default_highlight() -> String {
    "dark_gray".to_string()
}

fn default_cancel_key() -> char {
    DEFAULT_CANCEL_KEY
}

/// Defaults for menus launched from the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Cells per row
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Label width in characters
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,

    /// Color name, "#RRGGBB" or palette index
    #[serde(default = "default_highlight")]
    pub highlight: String,

    #[serde(default = "default_cancel_key")]
    pub cancel_key: char,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            cell_width: default_cell_width(),
            highlight: default_highlight(),
            cancel_key: default_cancel_key(),
        }
    }
}

impl MenuConfig {
    /// Get the config file path
    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("gridmenu");

        if let Err(e) = std::fs::create_dir_all(&config_dir) {
            tracing::warn!("Could not create config directory: {}", e);
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(_) => return Ok(MenuConfig::default()),
        };

        if path.exists() {
            match Self::load_from(&path) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    // Don't overwrite a file the user may want to fix
                    tracing::warn!("Failed to load config {}: {}", path.display(), e);
                    return Ok(MenuConfig::default());
                }
            }
        }

        let config = MenuConfig::default();
        if let Err(e) = config.save_to(&path) {
            tracing::warn!("Failed to write default config: {}", e);
        }
        Ok(config)
    }

    /// Read and parse a config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolved highlight color; unknown names fall back to the default
    pub fn highlight_color(&self) -> Color {
        theme::parse_color(&self.highlight).unwrap_or_else(|| {
            tracing::warn!("Unknown highlight color {:?}, using default", self.highlight);
            DEFAULT_HIGHLIGHT
        })
    }
}
