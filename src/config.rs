//! Widget configuration.
//!
//! Layout and input constants for the widget: font size, inner margins,
//! the caret width coefficient, and tab expansion. Persists as YAML; the
//! host decides where the file lives.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Widget configuration that persists across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Font point size; also the basis for the caret width.
    pub font_size: u32,
    /// Left inner margin in pixels.
    pub x_margin: i32,
    /// Top inner margin in pixels.
    pub y_margin: i32,
    /// Caret width as a fraction of the font size.
    pub cursor_coefficient: f32,
    /// Number of spaces a Tab inserts.
    pub tab_width: usize,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            font_size: 16,
            x_margin: 5,
            y_margin: 5,
            cursor_coefficient: 0.1,
            tab_width: 4,
        }
    }
}

impl WidgetConfig {
    /// Caret width in pixels (fraction of the font size, truncated).
    pub fn cursor_width(&self) -> i32 {
        (self.cursor_coefficient * self.font_size as f32) as i32
    }

    /// Load config from a file, or return defaults if missing or invalid.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!("config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                tracing::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("failed to load config at {}: {e:#}", path.display());
                Self::default()
            }
        }
    }

    /// Load config from a file, surfacing read and parse errors.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Save config to a file, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {}", parent.display()))?;
        }

        let content = serde_yaml::to_string(self).context("failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config to {}", path.display()))?;

        tracing::info!("saved config to {}", path.display());
        Ok(())
    }
}
