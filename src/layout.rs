//! View mode and the layout arity it implies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view mode '{0}' (expected desktop or mobile)")]
pub struct ViewModeError(String);

/// Wide or narrow preview. Affects layout only, never colors or rules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Desktop,
    Mobile,
}

/// Main axis for a group of sibling widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Row,
    Column,
}

impl ViewMode {
    pub fn name(self) -> &'static str {
        match self {
            ViewMode::Desktop => "desktop",
            ViewMode::Mobile => "mobile",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Desktop => ViewMode::Mobile,
            ViewMode::Mobile => ViewMode::Desktop,
        }
    }

    /// Columns in the content card grid.
    pub fn card_columns(self) -> usize {
        match self {
            ViewMode::Desktop => 2,
            ViewMode::Mobile => 1,
        }
    }

    /// How the button trio is laid out.
    pub fn button_direction(self) -> Direction {
        match self {
            ViewMode::Desktop => Direction::Row,
            ViewMode::Mobile => Direction::Column,
        }
    }

    /// Maximum preview width in terminal cells, `None` for full width.
    pub fn max_width(self) -> Option<u16> {
        match self {
            ViewMode::Desktop => None,
            ViewMode::Mobile => Some(48),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = ViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "desktop" | "wide" => Ok(ViewMode::Desktop),
            "mobile" | "narrow" => Ok(ViewMode::Mobile),
            _ => Err(ViewModeError(s.to_string())),
        }
    }
}
