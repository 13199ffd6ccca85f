use approx::assert_relative_eq;
use palette::Srgb;
use styleboard::apca::{apca_contrast, srgb_to_luminance, thresholds};
use styleboard::generate::{ColorPalette, generate_palette, neutrals, on_color};
use styleboard::preview::PRESETS;

fn gray(level: u8) -> Srgb<u8> {
    Srgb::new(level, level, level)
}

#[test]
fn test_on_color_follows_the_larger_contrast() {
    // White wins whenever it reads at least as well, ties included
    for level in 0..=255u8 {
        let fill = gray(level);
        let white = apca_contrast(neutrals::WHITE, fill).abs();
        let dark = apca_contrast(neutrals::TEXT, fill).abs();
        let expected = if white >= dark {
            neutrals::WHITE
        } else {
            neutrals::TEXT
        };
        assert_eq!(on_color(fill), expected, "gray {level}");
    }
}

#[test]
fn test_on_color_switches_once_along_the_gray_ramp() {
    assert_eq!(on_color(gray(164)), neutrals::WHITE);
    assert_eq!(on_color(gray(165)), neutrals::TEXT);

    let switches = (0..255u8)
        .filter(|&level| on_color(gray(level)) != on_color(gray(level + 1)))
        .count();
    assert_eq!(switches, 1);
}

#[test]
fn test_on_color_when_dark_text_vanishes() {
    // The text color on black is below the APCA noise floor, so white wins
    assert_eq!(apca_contrast(neutrals::TEXT, gray(0)), 0.0);
    assert_eq!(on_color(gray(0)), neutrals::WHITE);
}

#[test]
fn test_on_primary_reads_on_every_preset() {
    for (name, seed) in PRESETS {
        let palette = generate_palette(seed);
        let lc = apca_contrast(palette.on_primary, palette.primary).abs();
        assert!(
            lc >= thresholds::SECONDARY_TEXT.min_lc,
            "{name}: on_primary only reaches Lc {lc:.1}"
        );
    }
}

#[test]
fn test_neutral_text_clears_its_floors() {
    let palette = ColorPalette::default();

    let body = apca_contrast(palette.text, palette.surface);
    assert!(body >= thresholds::BODY_TEXT_MIN.min_lc);
    assert_relative_eq!(body, 101.4, epsilon = 0.5);

    let secondary = apca_contrast(palette.text_secondary, palette.surface);
    assert!(secondary >= thresholds::SECONDARY_TEXT.min_lc);
    assert!(secondary < thresholds::BODY_TEXT_MIN.min_lc);
    assert_relative_eq!(secondary, 70.5, epsilon = 0.5);
}

#[test]
fn test_primary_on_surface_against_secondary_floor() {
    // Blue clears the floor for primary-colored labels, yellow does not
    let blue = apca_contrast(Srgb::new(0x3B, 0x82, 0xF6), neutrals::SURFACE);
    assert!(blue >= thresholds::SECONDARY_TEXT.min_lc);

    let yellow = apca_contrast(Srgb::new(0xEA, 0xB3, 0x08), neutrals::SURFACE);
    assert!(yellow < thresholds::SECONDARY_TEXT.min_lc);
}

#[test]
fn test_soft_clamp_lifts_near_black() {
    let floor = 0.022_f64.powf(1.414);
    assert_relative_eq!(srgb_to_luminance(gray(0)), floor, epsilon = 1e-9);

    // Luminance keeps rising through the clamped region
    let mut previous = srgb_to_luminance(gray(0));
    for level in 1..=40u8 {
        let y = srgb_to_luminance(gray(level));
        assert!(y > previous, "gray {level}");
        previous = y;
    }
}

#[test]
fn test_soft_clamp_flattens_contrast_near_black() {
    // White on black and on a near-black fill read the same
    let on_black = apca_contrast(neutrals::WHITE, gray(0));
    let on_near_black = apca_contrast(neutrals::WHITE, gray(5));
    assert!(on_black < 0.0);
    assert_relative_eq!(on_black, on_near_black, epsilon = 0.1);
}
