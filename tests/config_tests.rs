use std::path::PathBuf;

use styleboard::config::{ConfigError, PreviewConfig, Selection, StyleboardConfig};
use styleboard::layout::ViewMode;
use styleboard::seed::{DEFAULT_SEED, SeedColor};
use styleboard::style::StyleId;

/// A scratch file path unique to one test.
fn scratch(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("styleboard-{}-{name}.toml", std::process::id()))
}

#[test]
fn test_default_config() {
    let config = StyleboardConfig::default();
    assert!(config.preview.color.is_none());
    assert!(config.preview.style.is_none());
    assert!(config.preview.view.is_none());

    let selection = config.selection();
    assert_eq!(selection.seed, DEFAULT_SEED);
    assert_eq!(selection.style, StyleId::Flat);
    assert_eq!(selection.view, ViewMode::Desktop);
}

#[test]
fn test_parse_toml() {
    let toml_str = r##"
[preview]
color = "#ec4899"
style = "brutalist"
view = "mobile"
"##;

    let config: StyleboardConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.preview.color.as_deref(), Some("#ec4899"));
    assert_eq!(config.preview.view, Some(ViewMode::Mobile));

    let selection = config.selection();
    assert_eq!(selection.seed, SeedColor::new(0xEC, 0x48, 0x99));
    assert_eq!(selection.style, StyleId::Brutalist);
}

#[test]
fn test_file_overrides_defaults_and_cli_overrides_file() {
    let path = scratch("layered");
    std::fs::write(
        &path,
        "[preview]\ncolor = \"#10b981\"\nstyle = \"ios\"\nview = \"mobile\"\n",
    )
    .unwrap();

    let from_file = StyleboardConfig::layered(Some(&path), &StyleboardConfig::default()).unwrap();
    assert_eq!(from_file.preview.style.as_deref(), Some("ios"));
    assert_eq!(from_file.preview.view, Some(ViewMode::Mobile));

    let overrides = StyleboardConfig {
        preview: PreviewConfig {
            style: Some("corporate".to_string()),
            ..Default::default()
        },
    };
    let merged = StyleboardConfig::layered(Some(&path), &overrides).unwrap();
    let selection = merged.selection();
    assert_eq!(selection.style, StyleId::Corporate);
    // Untouched by the overrides
    assert_eq!(selection.seed, SeedColor::new(0x10, 0xB9, 0x81));
    assert_eq!(selection.view, ViewMode::Mobile);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_is_an_error() {
    let path = scratch("missing");
    let result = StyleboardConfig::load(&path);
    assert!(matches!(result, Err(ConfigError::NotFound(p)) if p == path));
}

#[test]
fn test_save_then_load_round_trips() {
    let path = scratch("roundtrip");
    let selection = Selection {
        seed: SeedColor::new(0x8B, 0x5C, 0xF6),
        style: StyleId::Glassmorphic,
        view: ViewMode::Mobile,
    };

    StyleboardConfig::from_selection(&selection)
        .save(&path)
        .unwrap();
    let loaded = StyleboardConfig::load(&path).unwrap();
    assert_eq!(loaded.preview.color.as_deref(), Some("#8B5CF6"));
    assert_eq!(loaded.selection(), selection);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_unknown_style_falls_back_to_flat() {
    let config = StyleboardConfig {
        preview: PreviewConfig {
            style: Some("skeuomorphic".to_string()),
            ..Default::default()
        },
    };
    assert_eq!(config.selection().style, StyleId::Flat);
}

#[test]
fn test_css_color_formats_are_accepted() {
    let config = StyleboardConfig {
        preview: PreviewConfig {
            color: Some("rgb(59, 130, 246)".to_string()),
            ..Default::default()
        },
    };
    assert_eq!(config.selection().seed, DEFAULT_SEED);
}

#[test]
fn test_invalid_color_falls_back_to_default_seed() {
    let config: StyleboardConfig = toml::from_str(
        r#"
[preview]
color = "not-a-color"
style = "brutalist"
"#,
    )
    .unwrap();

    let selection = config.selection();
    assert_eq!(selection.seed, DEFAULT_SEED);
    // The rest of the file still applies
    assert_eq!(selection.style, StyleId::Brutalist);
}

#[test]
fn test_invalid_color_in_file_is_not_fatal() {
    let path = scratch("bad-color");
    std::fs::write(&path, "[preview]\ncolor = \"#12345\"\nview = \"mobile\"\n").unwrap();

    let config = StyleboardConfig::layered(Some(&path), &StyleboardConfig::default()).unwrap();
    let selection = config.selection();
    assert_eq!(selection.seed, DEFAULT_SEED);
    assert_eq!(selection.view, ViewMode::Mobile);

    std::fs::remove_file(&path).unwrap();
}
