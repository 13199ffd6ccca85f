//! Root preview state: seed, style, view mode and the derived palette.
//!
//! [`PreviewState::apply`] is the only writer. The palette is rebuilt
//! wholesale whenever the seed changes and never patched field by field.

use crate::generate::{ColorPalette, generate_palette};
use crate::layout::ViewMode;
use crate::seed::{SeedColor, SeedError};
use crate::style::StyleId;

/// Seed presets offered by the control panel.
pub const PRESETS: [(&str, SeedColor); 8] = [
    ("Blue", SeedColor::new(0x3B, 0x82, 0xF6)),
    ("Purple", SeedColor::new(0x8B, 0x5C, 0xF6)),
    ("Pink", SeedColor::new(0xEC, 0x48, 0x99)),
    ("Green", SeedColor::new(0x10, 0xB9, 0x81)),
    ("Orange", SeedColor::new(0xF9, 0x73, 0x16)),
    ("Red", SeedColor::new(0xEF, 0x44, 0x44)),
    ("Cyan", SeedColor::new(0x06, 0xB6, 0xD4)),
    ("Yellow", SeedColor::new(0xEA, 0xB3, 0x08)),
];

/// Requested change to the root state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewMsg {
    SetSeed(SeedColor),
    /// Raw custom entry; rejected input keeps the current seed
    SubmitHex(String),
    SetStyle(StyleId),
    SetView(ViewMode),
    ToggleView,
}

/// What an applied message changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    None,
    Seed,
    Style,
    View,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    seed: SeedColor,
    style: StyleId,
    view: ViewMode,
    palette: ColorPalette,
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new(SeedColor::default(), StyleId::default(), ViewMode::default())
    }
}

impl PreviewState {
    pub fn new(seed: SeedColor, style: StyleId, view: ViewMode) -> Self {
        Self {
            seed,
            style,
            view,
            palette: generate_palette(seed),
        }
    }

    pub fn seed(&self) -> SeedColor {
        self.seed
    }

    pub fn style(&self) -> StyleId {
        self.style
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Index into [`PRESETS`] when the seed is a preset.
    pub fn preset_index(&self) -> Option<usize> {
        PRESETS.iter().position(|(_, seed)| *seed == self.seed)
    }

    /// Apply one message.
    ///
    /// Only [`PreviewMsg::SubmitHex`] can fail; on failure the state is left
    /// untouched so the last valid seed stays in effect.
    pub fn apply(&mut self, msg: PreviewMsg) -> Result<Change, SeedError> {
        let change = match msg {
            PreviewMsg::SetSeed(seed) => self.set_seed(seed),
            PreviewMsg::SubmitHex(input) => match SeedColor::parse(&input) {
                Ok(seed) => self.set_seed(seed),
                Err(e) => {
                    tracing::warn!(input, error = %e, seed = %self.seed, "Rejected custom seed");
                    return Err(e);
                }
            },
            PreviewMsg::SetStyle(style) if style != self.style => {
                self.style = style;
                Change::Style
            }
            PreviewMsg::SetView(view) if view != self.view => {
                self.view = view;
                Change::View
            }
            PreviewMsg::ToggleView => {
                self.view = self.view.toggle();
                Change::View
            }
            PreviewMsg::SetStyle(_) | PreviewMsg::SetView(_) => Change::None,
        };
        if change != Change::None {
            tracing::debug!(?change, seed = %self.seed, style = %self.style, view = %self.view, "Preview updated");
        }
        Ok(change)
    }

    fn set_seed(&mut self, seed: SeedColor) -> Change {
        if seed == self.seed {
            return Change::None;
        }
        self.seed = seed;
        self.palette = generate_palette(seed);
        Change::Seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_hex_keeps_last_valid_seed() {
        let pink = SeedColor::new(0xEC, 0x48, 0x99);
        let mut state = PreviewState::new(pink, StyleId::Flat, ViewMode::Desktop);
        let before = state.clone();
        assert!(state.apply(PreviewMsg::SubmitHex("#12".into())).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn seed_change_rebuilds_palette() {
        let mut state = PreviewState::default();
        let green = PRESETS[3].1;
        assert_eq!(state.apply(PreviewMsg::SetSeed(green)), Ok(Change::Seed));
        assert_eq!(*state.palette(), generate_palette(green));
        assert_eq!(state.preset_index(), Some(3));
    }

    #[test]
    fn repeated_values_report_no_change() {
        let mut state = PreviewState::default();
        assert_eq!(
            state.apply(PreviewMsg::SetStyle(StyleId::Flat)),
            Ok(Change::None)
        );
        assert_eq!(
            state.apply(PreviewMsg::SubmitHex("#3b82f6".into())),
            Ok(Change::None)
        );
    }
}
