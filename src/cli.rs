//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::config::{PreviewConfig, StyleboardConfig};
use crate::layout::ViewMode;

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML format (default)
    #[default]
    Yaml,
    /// JSON format
    Json,
}

/// What to print instead of launching the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PrintTarget {
    /// The derived color palette
    Palette,
    /// Every resolved style rule of the selected style
    Rules,
    /// The plain-text summary that the preview copies to the clipboard
    Summary,
}

/// Preview UI style presets against a palette derived from one seed color.
#[derive(Parser, Debug, Serialize)]
#[command(name = "styleboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed color in any CSS format (hex, rgb(), oklch(), hsl(), named)
    #[arg(
        short,
        long,
        value_parser = |s: &str| s.parse::<csscolorparser::Color>().map(|_| s.to_string()).map_err(|e| e.to_string())
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Style preset: flat, neumorphic, glassmorphic, ios, material, rounded,
    /// brutalist, industrial, corporate (unknown names fall back to flat)
    #[arg(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// View mode: desktop or mobile
    #[arg(long, value_parser = |s: &str| s.parse::<ViewMode>())]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewMode>,

    /// Print palette, rules or summary to stdout and exit
    #[arg(short, long, value_enum, value_name = "WHAT")]
    #[serde(skip)]
    pub print: Option<PrintTarget>,

    /// Output format for --print palette and --print rules
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    #[serde(skip)]
    pub format: OutputFormat,

    /// Copy the summary to the clipboard and exit
    #[arg(long)]
    #[serde(skip)]
    pub copy: bool,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Save current configuration to TOML file
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub save_config: Option<PathBuf>,

    /// Log file path (default: styleboard.log)
    #[arg(long, value_name = "FILE")]
    #[serde(skip)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    #[serde(skip)]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    #[serde(skip)]
    pub completions: Option<clap_complete::Shell>,
}

impl Cli {
    /// Whether the interactive preview should start.
    pub fn is_interactive(&self) -> bool {
        self.print.is_none() && !self.copy && self.save_config.is_none()
    }

    /// Convert flat CLI args to a nested config for figment merging.
    ///
    /// Unset flags stay `None` and are skipped on serialization, so they never
    /// shadow values from the TOML file.
    pub fn to_config_overrides(&self) -> StyleboardConfig {
        StyleboardConfig {
            preview: PreviewConfig {
                color: self.color.clone(),
                style: self.style.clone(),
                view: self.view,
            },
        }
    }
}
