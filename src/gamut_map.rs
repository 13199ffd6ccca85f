//! Chroma-reduction gamut mapping in OKLCH.
//!
//! Lightness and hue are preserved; when the requested color falls outside
//! sRGB, chroma is reduced until it fits. Near the lightness extremes this
//! desaturates gracefully toward the achromatic axis instead of clipping
//! individual channels.

use palette::{IntoColor, LinSrgb, Oklch, Srgb};

/// Bisection iterations for the in-gamut chroma search.
const MAX_BISECT_ITERS: usize = 24;

/// Channel tolerance when deciding whether a linear color is in gamut.
const GAMUT_EPSILON: f32 = 1e-4;

/// Whether an OKLCH color maps into the sRGB cube.
pub fn in_gamut(color: Oklch<f32>) -> bool {
    let linear: LinSrgb<f32> = color.into_color();
    [linear.red, linear.green, linear.blue]
        .iter()
        .all(|c| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(c))
}

/// Largest chroma `<= color.chroma` that is in gamut at the same L and h.
pub fn max_chroma_at(color: Oklch<f32>) -> f32 {
    if in_gamut(color) {
        return color.chroma;
    }

    let mut lo = 0.0f32;
    let mut hi = color.chroma;
    for _ in 0..MAX_BISECT_ITERS {
        let mid = (lo + hi) * 0.5;
        if in_gamut(Oklch::new(color.l, mid, color.hue)) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Map an OKLCH color into sRGB by reducing chroma.
pub fn gamut_map(color: Oklch<f32>) -> Oklch<f32> {
    let l = color.l.clamp(0.0, 1.0);
    let clamped = Oklch::new(l, color.chroma.max(0.0), color.hue);
    let chroma = max_chroma_at(clamped);
    if chroma < clamped.chroma {
        tracing::trace!(
            l,
            requested = clamped.chroma,
            chroma,
            "Reduced chroma to fit sRGB"
        );
    }
    Oklch::new(l, chroma, color.hue)
}

/// Gamut map and quantize to 8-bit sRGB.
pub fn to_srgb_u8(color: Oklch<f32>) -> Srgb<u8> {
    let mapped = gamut_map(color);
    let linear: LinSrgb<f32> = mapped.into_color();
    let srgb: Srgb<f32> = Srgb::from_linear(linear);
    Srgb::new(
        (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8,
        (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8,
        (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

/// Convert 8-bit sRGB to OKLCH.
pub fn to_oklch(color: Srgb<u8>) -> Oklch<f32> {
    let linear: LinSrgb<f32> = color.into_format::<f32>().into_linear();
    linear.into_color()
}

/// OKLCH lightness of an 8-bit sRGB color.
pub fn lightness(color: Srgb<u8>) -> f32 {
    to_oklch(color).l
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_gamut_colors_are_unchanged() {
        let color = to_oklch(Srgb::new(0x3Bu8, 0x82, 0xF6));
        let mapped = gamut_map(color);
        assert!((mapped.chroma - color.chroma).abs() < 1e-6);
        assert_eq!(to_srgb_u8(color), Srgb::new(0x3Bu8, 0x82, 0xF6));
    }

    #[test]
    fn out_of_gamut_chroma_is_reduced() {
        let color = Oklch::new(0.95f32, 0.3, 264.0);
        assert!(!in_gamut(color));
        let mapped = gamut_map(color);
        assert!(mapped.chroma < 0.3);
        assert!(in_gamut(mapped));
        assert!((mapped.l - 0.95).abs() < 1e-6);
    }

    #[test]
    fn extremes_collapse_to_achromatic() {
        assert_eq!(
            to_srgb_u8(Oklch::new(1.0f32, 0.2, 30.0)),
            Srgb::new(255u8, 255, 255)
        );
        assert_eq!(
            to_srgb_u8(Oklch::new(0.0f32, 0.2, 30.0)),
            Srgb::new(0u8, 0, 0)
        );
    }
}
