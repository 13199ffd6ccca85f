use palette::Srgb;
use styleboard::apca::thresholds;
use styleboard::generate::{ColorPalette, generate_palette};
use styleboard::seed::SeedColor;
use styleboard::style::ColorRole;
use styleboard::validation::{validate, validate_with_warnings};

#[test]
fn test_validate_returns_results() {
    let results = validate(&ColorPalette::default());
    assert_eq!(results.required.len(), 2);
    assert_eq!(results.reference.len(), 3);
}

#[test]
fn test_default_palette_passes_required_checks() {
    let results = validate(&ColorPalette::default());
    assert!(results.all_required_pass());
    assert!(validate_with_warnings(&ColorPalette::default()).is_empty());
}

#[test]
fn test_required_checks_hold_for_any_seed() {
    for seed in [
        SeedColor::new(0xFF, 0xFF, 0xFF),
        SeedColor::new(0x00, 0x00, 0x00),
        SeedColor::new(0xEA, 0xB3, 0x08),
        SeedColor::new(0xEC, 0x48, 0x99),
    ] {
        assert!(validate(&generate_palette(seed)).all_required_pass(), "{seed}");
    }
}

#[test]
fn test_body_text_contrast_is_measured() {
    let results = validate(&ColorPalette::default());
    let body = results
        .required
        .iter()
        .find(|r| r.pair.foreground == ColorRole::Text)
        .unwrap();
    assert_eq!(body.pair.background, ColorRole::Surface);
    assert_eq!(body.pair.threshold.min_lc, thresholds::BODY_TEXT_MIN.min_lc);
    // Dark text on a light surface has positive polarity
    assert!(body.contrast > 90.0, "Lc = {}", body.contrast);
}

#[test]
fn test_validate_with_warnings_returns_failures() {
    let mut palette = ColorPalette::default();
    palette.text = Srgb::new(0xE0, 0xE0, 0xE0);

    let warnings = validate_with_warnings(&palette);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("text on surface"));
    assert!(!validate(&palette).all_required_pass());
}

#[test]
fn test_reference_checks_do_not_gate_required() {
    // Pale yellow fails the on-primary check but body text is unaffected
    let palette = generate_palette(SeedColor::new(0xFF, 0xF5, 0x9D));
    let results = validate(&palette);
    assert!(results.all_required_pass());
    assert!(results.reference.iter().any(|r| !r.passes));
}
