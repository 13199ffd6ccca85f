use palette::Srgb;
use styleboard::generate::neutrals;
use styleboard::layout::ViewMode;
use styleboard::preview::{Change, PRESETS, PreviewMsg, PreviewState};
use styleboard::seed::SeedColor;
use styleboard::showcase::title;
use styleboard::style::{
    AlertKind, Border, ColorRole, ComponentKind, Fill, InteractionState, Radius, Shadow, Side,
    Stripe, StyleId, TextTransform, Variant, resolve,
};
use styleboard::summary;

#[test]
fn test_blue_flat_desktop_scenario() {
    let state = PreviewState::new(
        SeedColor::new(0x3B, 0x82, 0xF6),
        StyleId::Flat,
        ViewMode::Desktop,
    );
    let palette = state.palette();
    assert_eq!(palette.primary, Srgb::new(0x3B, 0x82, 0xF6));
    assert_eq!(palette.on_primary, neutrals::WHITE);

    let button = resolve(
        StyleId::Flat,
        ComponentKind::Button,
        Variant::Primary,
        InteractionState::Idle,
    );
    let Fill::Solid(role) = button.fill else {
        panic!("flat primary button should be solid, got {:?}", button.fill);
    };
    assert_eq!(palette.resolve(role), palette.primary);
    assert_eq!(state.view().card_columns(), 2);

    let card = resolve(
        StyleId::Flat,
        ComponentKind::Card,
        Variant::Default,
        InteractionState::Idle,
    );
    assert_eq!(card.border, Some(Border::new(2, ColorRole::Border)));
    assert_eq!(palette.resolve(ColorRole::Border), neutrals::BORDER);
    assert!(card.shadow.is_none());
    assert_eq!(card.radius, Radius::Md);

    for kind in AlertKind::ALL {
        let alert = resolve(
            StyleId::Flat,
            ComponentKind::Alert,
            Variant::Alert(kind),
            InteractionState::Idle,
        );
        assert_eq!(
            alert.stripe,
            Some(Stripe {
                side: Side::Left,
                width: 4,
                color: kind.role(),
            }),
            "{kind:?}"
        );
        assert_eq!(alert.fill, Fill::Tint(kind.role()));
        assert!(!alert.blur, "{kind:?}");
    }
}

#[test]
fn test_pink_brutalist_scenario() {
    let state = PreviewState::new(
        SeedColor::new(0xEC, 0x48, 0x99),
        StyleId::Brutalist,
        ViewMode::Desktop,
    );
    assert_eq!(state.palette().on_primary, neutrals::WHITE);

    let button = resolve(
        StyleId::Brutalist,
        ComponentKind::Button,
        Variant::Primary,
        InteractionState::Idle,
    );
    assert_eq!(button.fill, Fill::Solid(ColorRole::Primary));
    assert_eq!(button.transform, TextTransform::Uppercase);
    assert!(matches!(button.shadow, Shadow::Offset { .. }));
    let border = button.border.unwrap();
    assert_eq!(state.palette().resolve(border.color), Srgb::new(0, 0, 0));

    assert_eq!(title(state.style()), "/// Demo App ///");
    let text = summary::render(state.palette(), state.style(), state.view());
    assert!(text.contains("Seed color: #EC4899"));
}

#[test]
fn test_view_toggle_leaves_palette_alone() {
    let mut state = PreviewState::new(PRESETS[2].1, StyleId::Ios, ViewMode::Desktop);
    let palette = *state.palette();

    assert_eq!(state.apply(PreviewMsg::ToggleView), Ok(Change::View));
    assert_eq!(state.view(), ViewMode::Mobile);
    assert_eq!(state.view().card_columns(), 1);
    assert_eq!(*state.palette(), palette);
}

#[test]
fn test_style_change_leaves_palette_alone() {
    let mut state = PreviewState::default();
    let palette = *state.palette();
    for style in StyleId::ALL.into_iter().skip(1) {
        assert_eq!(state.apply(PreviewMsg::SetStyle(style)), Ok(Change::Style));
        assert_eq!(*state.palette(), palette);
    }
}

#[test]
fn test_rejected_hex_keeps_seed() {
    let mut state = PreviewState::new(PRESETS[4].1, StyleId::Flat, ViewMode::Desktop);
    assert!(state.apply(PreviewMsg::SubmitHex("not-a-color".into())).is_err());
    assert_eq!(state.seed(), PRESETS[4].1);
    assert_eq!(state.preset_index(), Some(4));
}

#[test]
fn test_custom_hex_is_applied() {
    let mut state = PreviewState::default();
    assert_eq!(
        state.apply(PreviewMsg::SubmitHex("#123456".into())),
        Ok(Change::Seed)
    );
    assert_eq!(state.seed().to_hex(), "#123456");
    assert_eq!(state.preset_index(), None);
}
