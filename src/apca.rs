//! APCA (Accessible Perceptual Contrast Algorithm) implementation.
//!
//! Calculates perceptual contrast between foreground and background colors
//! following the APCA-W3 0.0.98G constants.

use palette::Srgb;

/// APCA luminance coefficients for sRGB D65
const COEF_R: f64 = 0.2126729;
const COEF_G: f64 = 0.7151522;
const COEF_B: f64 = 0.0721750;

/// Simple power curve used by APCA in place of the piecewise sRGB transfer
const MAIN_TRC: f64 = 2.4;

/// Threshold for low-luminance soft clamp
const LOW_Y_THRESHOLD: f64 = 0.022;
const LOW_Y_EXPONENT: f64 = 1.414;

/// APCA contrast calculation constants
const SCALE: f64 = 1.14;
const OFFSET: f64 = 0.027;
const THRESHOLD: f64 = 0.1;

/// Exponents for light background (dark text on light bg)
const EXP_BG_LIGHT: f64 = 0.56;
const EXP_FG_LIGHT: f64 = 0.57;

/// Exponents for dark background (light text on dark bg)
const EXP_BG_DARK: f64 = 0.65;
const EXP_FG_DARK: f64 = 0.62;

#[inline]
fn linearize(channel: u8) -> f64 {
    (f64::from(channel) / 255.0).powf(MAIN_TRC)
}

/// Convert an sRGB color to APCA luminance (Y), soft-clamped near black.
pub fn srgb_to_luminance(color: Srgb<u8>) -> f64 {
    let y = COEF_R * linearize(color.red)
        + COEF_G * linearize(color.green)
        + COEF_B * linearize(color.blue);

    if y < LOW_Y_THRESHOLD {
        y + (LOW_Y_THRESHOLD - y).powf(LOW_Y_EXPONENT)
    } else {
        y
    }
}

/// Calculate APCA contrast (Lc) of `fg` text on a `bg` background.
///
/// Positive values mean dark text on a light background, negative values
/// light text on a dark background. Typical range: -108 to +106.
///
/// ```
/// use palette::Srgb;
/// use styleboard::apca::apca_contrast;
///
/// let black = Srgb::new(0u8, 0, 0);
/// let white = Srgb::new(255u8, 255, 255);
///
/// assert!(apca_contrast(black, white) > 100.0);
/// assert!(apca_contrast(white, black) < -100.0);
/// ```
pub fn apca_contrast(fg: Srgb<u8>, bg: Srgb<u8>) -> f64 {
    contrast_from_luminances(srgb_to_luminance(fg), srgb_to_luminance(bg))
}

/// Compute APCA contrast from pre-computed luminance values.
pub fn contrast_from_luminances(y_fg: f64, y_bg: f64) -> f64 {
    let c = if y_bg > y_fg {
        SCALE * (y_bg.powf(EXP_BG_LIGHT) - y_fg.powf(EXP_FG_LIGHT))
    } else {
        SCALE * (y_bg.powf(EXP_BG_DARK) - y_fg.powf(EXP_FG_DARK))
    };

    if c.abs() < THRESHOLD {
        0.0
    } else if c > 0.0 {
        (c - OFFSET) * 100.0
    } else {
        (c + OFFSET) * 100.0
    }
}

/// APCA contrast thresholds for different use cases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub min_lc: f64,
    pub description: &'static str,
}

/// Predefined APCA thresholds
pub mod thresholds {
    use super::Threshold;

    /// Body text (minimum level) - Lc 75
    pub const BODY_TEXT_MIN: Threshold = Threshold {
        min_lc: 75.0,
        description: "Body text (minimum)",
    };

    /// Content text (non-body) - Lc 60
    pub const CONTENT_TEXT: Threshold = Threshold {
        min_lc: 60.0,
        description: "Content text",
    };

    /// Labels, placeholders and secondary text - Lc 45
    pub const SECONDARY_TEXT: Threshold = Threshold {
        min_lc: 45.0,
        description: "Secondary text",
    };
}
