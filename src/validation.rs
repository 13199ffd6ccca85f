//! Palette validation with APCA contrast checking.

use float_cmp::approx_eq;
use tracing::warn;

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::apca::{Threshold, apca_contrast, thresholds};
use crate::generate::ColorPalette;
use crate::style::ColorRole;

/// A color pair that should be validated for contrast.
#[derive(Debug, Clone, Copy)]
pub struct ValidationPair {
    pub foreground: ColorRole,
    pub background: ColorRole,
    pub threshold: Threshold,
}

/// Result of validating a single color pair.
#[derive(Debug, Clone, Copy)]
pub struct ValidationResult {
    pub pair: ValidationPair,
    pub contrast: f64,
    pub passes: bool,
}

/// Pairs that must pass for the palette to be legible.
///
/// Text roles are fixed neutrals, so these hold for every seed.
pub fn required_validation_pairs() -> Vec<ValidationPair> {
    vec![
        ValidationPair {
            foreground: ColorRole::Text,
            background: ColorRole::Surface,
            threshold: thresholds::BODY_TEXT_MIN,
        },
        ValidationPair {
            foreground: ColorRole::TextSecondary,
            background: ColorRole::Surface,
            threshold: thresholds::SECONDARY_TEXT,
        },
    ]
}

/// Seed-dependent pairs, shown for reference only.
pub fn reference_validation_pairs() -> Vec<ValidationPair> {
    [ColorRole::Primary, ColorRole::PrimaryDark]
        .into_iter()
        .map(|bg| ValidationPair {
            foreground: ColorRole::OnPrimary,
            background: bg,
            threshold: thresholds::CONTENT_TEXT,
        })
        .chain(std::iter::once(ValidationPair {
            foreground: ColorRole::Primary,
            background: ColorRole::Surface,
            threshold: thresholds::SECONDARY_TEXT,
        }))
        .collect()
}

/// Combined validation results with required and reference checks separated.
#[derive(Debug, Clone)]
pub struct ValidationResults {
    pub required: Vec<ValidationResult>,
    pub reference: Vec<ValidationResult>,
}

impl ValidationResults {
    pub fn all_required_pass(&self) -> bool {
        self.required.iter().all(|r| r.passes)
    }
}

fn check(palette: &ColorPalette, pair: ValidationPair) -> ValidationResult {
    let contrast = apca_contrast(
        palette.resolve(pair.foreground),
        palette.resolve(pair.background),
    );
    let abs_contrast = contrast.abs();
    let threshold = pair.threshold.min_lc;
    let passes =
        abs_contrast > threshold || approx_eq!(f64, abs_contrast, threshold, epsilon = 0.5);
    ValidationResult {
        pair,
        contrast,
        passes,
    }
}

/// Validate a palette and return separated required/reference results.
#[cfg_attr(debug_assertions, instrument(skip(palette), fields(primary = %crate::seed::hex(palette.primary))))]
pub fn validate(palette: &ColorPalette) -> ValidationResults {
    ValidationResults {
        required: required_validation_pairs()
            .into_iter()
            .map(|pair| check(palette, pair))
            .collect(),
        reference: reference_validation_pairs()
            .into_iter()
            .map(|pair| check(palette, pair))
            .collect(),
    }
}

/// Validate a palette and return warnings for any failing required pairs.
pub fn validate_with_warnings(palette: &ColorPalette) -> Vec<String> {
    validate(palette)
        .required
        .into_iter()
        .filter(|r| !r.passes)
        .map(|r| {
            let message = format!(
                "{} on {}: Lc={:.1} (required: {:.0} for {})",
                r.pair.foreground.name(),
                r.pair.background.name(),
                r.contrast.abs(),
                r.pair.threshold.min_lc,
                r.pair.threshold.description
            );
            warn!("{message}");
            message
        })
        .collect()
}
