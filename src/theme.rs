//! Word-color configuration for the highlighter.
//!
//! Provides YAML-based color configs with a compile-time embedded default
//! and user-defined configs loaded from a file. A config maps literal
//! words to a foreground/background pair; every word not in the map gets
//! the default pair.
//!
//! Configs are immutable once built and are passed to the widget
//! explicitly, so independent widgets (and tests) can carry different
//! configurations side by side.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

/// The builtin config compiled into the library.
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../themes/default.yaml");

/// RGBA color (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> anyhow::Result<Self> {
        let s = s.trim_start_matches('#');
        let channel = |range| {
            u8::from_str_radix(&s[range], 16).with_context(|| format!("invalid hex color: {s}"))
        };
        match s.len() {
            6 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: 255,
            }),
            8 => Ok(Color {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => bail!("invalid color format: {s}"),
        }
    }
}

/// A foreground color with an optional background.
///
/// Compared by value: two pairs with equal channels are the same color
/// for run-merging purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Option<Color>,
}

// =============================================================================
// Raw YAML schema
// =============================================================================

/// Raw config data as parsed from YAML.
#[derive(Debug, Clone, Deserialize)]
struct ColorConfigData {
    #[allow(dead_code)]
    version: u32,
    name: String,
    #[serde(default)]
    #[allow(dead_code)]
    description: Option<String>,
    default: PairData,
    #[serde(default)]
    groups: Vec<GroupData>,
}

/// A raw fg/bg pair (hex strings from YAML).
#[derive(Debug, Clone, Deserialize)]
struct PairData {
    fg: String,
    #[serde(default)]
    bg: Option<String>,
}

/// A group of words sharing one color pair.
#[derive(Debug, Clone, Deserialize)]
struct GroupData {
    fg: String,
    #[serde(default)]
    bg: Option<String>,
    words: Vec<String>,
}

impl PairData {
    fn resolve(&self) -> anyhow::Result<ColorPair> {
        Ok(ColorPair {
            fg: Color::from_hex(&self.fg)?,
            bg: self.bg.as_deref().map(Color::from_hex).transpose()?,
        })
    }
}

// =============================================================================
// ColorConfig
// =============================================================================

/// Resolved word-color configuration.
#[derive(Debug, Clone)]
pub struct ColorConfig {
    name: String,
    default: ColorPair,
    words: HashMap<String, ColorPair>,
}

impl ColorConfig {
    /// The builtin configuration embedded in the library.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_yaml(DEFAULT_CONFIG_YAML).context("embedded default color config")
    }

    /// Parses a configuration from YAML text.
    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        let data: ColorConfigData =
            serde_yaml::from_str(yaml).context("failed to parse color config")?;

        let default = data.default.resolve()?;
        let mut words = HashMap::new();
        for group in &data.groups {
            let pair = ColorPair {
                fg: Color::from_hex(&group.fg)?,
                bg: group.bg.as_deref().map(Color::from_hex).transpose()?,
            };
            for word in &group.words {
                words.insert(word.clone(), pair);
            }
        }

        tracing::debug!(name = %data.name, words = words.len(), "color config loaded");
        Ok(Self {
            name: data.name,
            default,
            words,
        })
    }

    /// Loads a configuration from a YAML file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read color config {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Display name of the configuration.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pair for unmatched words.
    pub fn default_pair(&self) -> ColorPair {
        self.default
    }

    /// Looks up a word by exact text; unmatched words get the default.
    pub fn pair_for(&self, word: &str) -> ColorPair {
        self.words.get(word).copied().unwrap_or(self.default)
    }
}

impl Default for ColorConfig {
    /// A minimal config: white foreground, no background, no word map.
    fn default() -> Self {
        Self {
            name: "plain".to_string(),
            default: ColorPair {
                fg: Color::rgb(255, 255, 255),
                bg: None,
            },
            words: HashMap::new(),
        }
    }
}
