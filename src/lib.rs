//! Terminal preview of UI style presets driven by a single seed color.
//!
//! One seed color is expanded into a [`generate::ColorPalette`]; nine style
//! presets ([`style::StyleId`]) map every showcase widget to a
//! [`style::StyleRule`] that is painted with that palette.

pub mod apca;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod gamut_map;
pub mod generate;
pub mod layout;
pub mod logging;
pub mod preview;
pub mod seed;
pub mod showcase;
pub mod style;
pub mod summary;
pub mod tui;
pub mod validation;
