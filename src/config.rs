//! TOML configuration file support for the preview.
//!
//! Settings are layered with figment: built-in defaults, then the TOML file
//! given with `--config`, then flags given on the command line.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::layout::ViewMode;
use crate::seed::SeedColor;
use crate::style::StyleId;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("config error: {0}")]
    Extract(#[from] Box<figment::Error>),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Root configuration structure for TOML files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleboardConfig {
    /// Initial preview selection
    pub preview: PreviewConfig,
}

/// Initial seed, style and view mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Seed color (any CSS color format)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Style name; unknown names fall back to flat
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// desktop or mobile
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewMode>,
}

/// A fully resolved starting point for the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub seed: SeedColor,
    pub style: StyleId,
    pub view: ViewMode,
}

impl StyleboardConfig {
    /// Load a configuration file on its own.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::layered(Some(path), &Self::default())
    }

    /// Merge defaults, an optional TOML file and CLI overrides, in that order.
    ///
    /// An explicitly named file that does not exist is an error; figment
    /// would otherwise skip it silently.
    pub fn layered(path: Option<&Path>, overrides: &StyleboardConfig) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }
        let config: Self = figment
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(Box::new)?;
        tracing::debug!(?config, "Configuration loaded");
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Resolve to concrete values, using defaults for anything unset.
    ///
    /// An unparseable color falls back to the default seed, the same way an
    /// unknown style name falls back to flat.
    pub fn selection(&self) -> Selection {
        let seed = match self.preview.color.as_deref() {
            Some(color) => SeedColor::parse_css(color).unwrap_or_else(|e| {
                tracing::warn!(color, error = %e, "Invalid configured color, using default seed");
                SeedColor::default()
            }),
            None => SeedColor::default(),
        };
        let style = self
            .preview
            .style
            .as_deref()
            .map(StyleId::from_name)
            .unwrap_or_default();
        Selection {
            seed,
            style,
            view: self.preview.view.unwrap_or_default(),
        }
    }

    /// Create from a resolved selection, writing the seed as hex.
    pub fn from_selection(selection: &Selection) -> Self {
        Self {
            preview: PreviewConfig {
                color: Some(selection.seed.to_hex()),
                style: Some(selection.style.name().to_string()),
                view: Some(selection.view),
            },
        }
    }
}
