//! Palette generation logic.

use palette::{Oklch, Srgb};
use serde::{Serialize, Serializer};

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::apca::apca_contrast;
use crate::gamut_map::{lightness, to_oklch, to_srgb_u8};
use crate::seed::{DEFAULT_SEED, SeedColor, hex};

/// Fraction of the remaining distance to white used for `primary_light`.
pub const LIGHT_SHIFT: f32 = 0.35;

/// Fraction of the distance to black used for `primary_dark`.
pub const DARK_SHIFT: f32 = 0.30;

/// Hue rotation (degrees) from primary to accent.
pub const ACCENT_ROTATION: f32 = 40.0;

/// Increment applied when quantization swallows a lightness shift.
const SHIFT_STEP: f32 = 0.05;

/// Neutral colors shared by every palette.
pub mod neutrals {
    use palette::Srgb;

    pub const SURFACE: Srgb<u8> = Srgb::new(0xF9, 0xFA, 0xFB);
    pub const BORDER: Srgb<u8> = Srgb::new(0xE5, 0xE7, 0xEB);
    pub const TEXT: Srgb<u8> = Srgb::new(0x11, 0x18, 0x27);
    pub const TEXT_SECONDARY: Srgb<u8> = Srgb::new(0x6B, 0x72, 0x80);
    pub const WHITE: Srgb<u8> = Srgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Srgb<u8> = Srgb::new(0x00, 0x00, 0x00);
}

/// Semantic colors, fixed so alerts stay recognizable for every seed.
pub mod semantic {
    use palette::Srgb;

    pub const SUCCESS: Srgb<u8> = Srgb::new(0x10, 0xB9, 0x81);
    pub const WARNING: Srgb<u8> = Srgb::new(0xF5, 0x9E, 0x0B);
    pub const ERROR: Srgb<u8> = Srgb::new(0xEF, 0x44, 0x44);
    pub const INFO: Srgb<u8> = Srgb::new(0x3B, 0x82, 0xF6);
}

/// Palette derived from a single seed color.
///
/// Serialized with every field as an upper-case `#RRGGBB` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    #[serde(serialize_with = "serialize_hex")]
    pub primary: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub primary_light: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub primary_dark: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub accent: Srgb<u8>,
    /// Text drawn on primary fills
    #[serde(serialize_with = "serialize_hex")]
    pub on_primary: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub surface: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub border: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub text: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub text_secondary: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub success: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub warning: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub error: Srgb<u8>,
    #[serde(serialize_with = "serialize_hex")]
    pub info: Srgb<u8>,
}

fn serialize_hex<S: Serializer>(color: &Srgb<u8>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex(*color))
}

impl ColorPalette {
    /// Named fields in display order.
    pub fn entries(&self) -> [(&'static str, Srgb<u8>); 13] {
        [
            ("primary", self.primary),
            ("primaryLight", self.primary_light),
            ("primaryDark", self.primary_dark),
            ("accent", self.accent),
            ("onPrimary", self.on_primary),
            ("surface", self.surface),
            ("border", self.border),
            ("text", self.text),
            ("textSecondary", self.text_secondary),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("info", self.info),
        ]
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        generate_palette(DEFAULT_SEED)
    }
}

/// Result of generating from raw user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteOutcome {
    /// Seed actually used
    pub seed: SeedColor,
    pub palette: ColorPalette,
    /// Whether the input was invalid and the default seed was substituted
    pub used_fallback: bool,
}

/// Generate a palette from a seed color.
///
/// Deterministic and infallible: the same seed always yields the same palette.
#[cfg_attr(debug_assertions, instrument(level = "debug"))]
pub fn generate_palette(seed: SeedColor) -> ColorPalette {
    let primary = seed.rgb();
    let base = to_oklch(primary);

    let primary_light = shift_lighter(primary, base);
    let primary_dark = shift_darker(primary, base);
    let accent = to_srgb_u8(Oklch::new(
        base.l,
        base.chroma,
        base.hue.into_positive_degrees() + ACCENT_ROTATION,
    ));

    ColorPalette {
        primary,
        primary_light,
        primary_dark,
        accent,
        on_primary: on_color(primary),
        surface: neutrals::SURFACE,
        border: neutrals::BORDER,
        text: neutrals::TEXT,
        text_secondary: neutrals::TEXT_SECONDARY,
        success: semantic::SUCCESS,
        warning: semantic::WARNING,
        error: semantic::ERROR,
        info: semantic::INFO,
    }
}

/// Parse raw input and generate, substituting the default seed when invalid.
pub fn generate_from_input(input: &str) -> PaletteOutcome {
    match SeedColor::parse(input) {
        Ok(seed) => PaletteOutcome {
            seed,
            palette: generate_palette(seed),
            used_fallback: false,
        },
        Err(e) => {
            tracing::warn!(input, error = %e, "Invalid seed, using default palette");
            PaletteOutcome {
                seed: DEFAULT_SEED,
                palette: generate_palette(DEFAULT_SEED),
                used_fallback: true,
            }
        }
    }
}

/// Pick white or the neutral text color, whichever reads better on `fill`.
pub fn on_color(fill: Srgb<u8>) -> Srgb<u8> {
    let white = apca_contrast(neutrals::WHITE, fill).abs();
    let dark = apca_contrast(neutrals::TEXT, fill).abs();
    if white >= dark {
        neutrals::WHITE
    } else {
        neutrals::TEXT
    }
}

fn shift_lighter(primary: Srgb<u8>, base: Oklch<f32>) -> Srgb<u8> {
    let base_l = lightness(primary);
    let mut amount = LIGHT_SHIFT;
    loop {
        // Gamut mapping at L=1 can land back on the seed itself
        if amount >= 1.0 {
            return neutrals::WHITE;
        }
        let l = base.l + (1.0 - base.l) * amount;
        let candidate = to_srgb_u8(Oklch::new(l, base.chroma, base.hue));
        if candidate != primary && lightness(candidate) > base_l {
            return candidate;
        }
        amount = (amount + SHIFT_STEP).min(1.0);
    }
}

fn shift_darker(primary: Srgb<u8>, base: Oklch<f32>) -> Srgb<u8> {
    let base_l = lightness(primary);
    let mut amount = DARK_SHIFT;
    loop {
        if amount >= 1.0 {
            return neutrals::BLACK;
        }
        let l = base.l * (1.0 - amount);
        let candidate = to_srgb_u8(Oklch::new(l, base.chroma, base.hue));
        if candidate != primary && lightness(candidate) < base_l {
            return candidate;
        }
        amount = (amount + SHIFT_STEP).min(1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_color_prefers_white_on_saturated_blue() {
        assert_eq!(on_color(Srgb::new(0x3B, 0x82, 0xF6)), neutrals::WHITE);
    }

    #[test]
    fn on_color_prefers_dark_on_yellow() {
        assert_eq!(on_color(Srgb::new(0xEA, 0xB3, 0x08)), neutrals::TEXT);
    }

    #[test]
    fn near_white_seed_still_gets_lighter_variant() {
        let seed = SeedColor::new(0xFE, 0xFE, 0xFE);
        let palette = generate_palette(seed);
        assert!(lightness(palette.primary_light) > lightness(palette.primary));
    }

    #[test]
    fn near_white_seeds_that_map_back_onto_themselves_reach_white() {
        for seed in [
            SeedColor::new(0xFF, 0xFF, 0xFA),
            SeedColor::new(0xFF, 0xFF, 0xFE),
            SeedColor::new(0xFE, 0xFF, 0xFD),
        ] {
            let palette = generate_palette(seed);
            assert_ne!(palette.primary_light, palette.primary, "{seed}");
            assert!(
                lightness(palette.primary_light) > lightness(palette.primary),
                "{seed}"
            );
        }
    }

    #[test]
    fn gamut_ends_saturate_instead_of_looping() {
        let white = generate_palette(SeedColor::new(0xFF, 0xFF, 0xFF));
        assert_eq!(white.primary_light, neutrals::WHITE);
        let black = generate_palette(SeedColor::new(0, 0, 0));
        assert_eq!(black.primary_dark, neutrals::BLACK);
    }
}
