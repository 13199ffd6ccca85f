use styleboard::style::{
    AlertKind, Border, ColorRole, ComponentKind, Fill, InteractionState, Motion, Radius, Shadow,
    StyleId, TextRole, TextTransform, Variant, decorate, resolve, resolved_rules, table, tone,
};

#[test]
fn test_builtin_table_validates() {
    assert_eq!(table().validate(), Ok(()));
    assert_eq!(table().sheets().len(), StyleId::ALL.len());
}

#[test]
fn test_every_style_lists_every_rule() {
    // 9 single-state components, 4 states for the six stateful ones,
    // 3 button variants and 4 alert kinds for alert and icon
    for style in StyleId::ALL {
        let rules = resolved_rules(style);
        assert_eq!(rules.len(), 48, "{style}");
        assert!(
            rules
                .iter()
                .all(|r| !r.rule.roles().contains(&ColorRole::Alert)),
            "{style}: unresolved alert placeholder"
        );
    }
}

#[test]
fn test_resolution_is_a_pure_lookup() {
    for style in StyleId::ALL {
        for component in ComponentKind::ALL {
            for &variant in component.variants() {
                for state in InteractionState::ALL {
                    assert_eq!(
                        resolve(style, component, variant, state),
                        resolve(style, component, variant, state)
                    );
                }
            }
        }
    }
}

#[test]
fn test_stateful_components_change_when_active() {
    for style in StyleId::ALL {
        for component in ComponentKind::ALL.into_iter().filter(|c| c.is_stateful()) {
            assert_ne!(
                resolve(style, component, Variant::Default, InteractionState::Idle),
                resolve(style, component, Variant::Default, InteractionState::Active),
                "{style}: {} looks the same when active",
                component.name()
            );
        }
    }
}

#[test]
fn test_default_button_is_primary() {
    for style in StyleId::ALL {
        assert_eq!(
            resolve(style, ComponentKind::Button, Variant::Default, InteractionState::Idle),
            resolve(style, ComponentKind::Button, Variant::Primary, InteractionState::Idle)
        );
    }
}

#[test]
fn test_flat_primary_button() {
    let rule = resolve(
        StyleId::Flat,
        ComponentKind::Button,
        Variant::Primary,
        InteractionState::Idle,
    );
    assert_eq!(rule.fill, Fill::Solid(ColorRole::Primary));
    assert_eq!(rule.text, ColorRole::OnPrimary);
    assert_eq!(rule.radius, Radius::Md);
    assert!(rule.shadow.is_none());

    let hover = resolve(
        StyleId::Flat,
        ComponentKind::Button,
        Variant::Primary,
        InteractionState::Hover,
    );
    assert_eq!(hover.motion, Motion::Dim);
}

#[test]
fn test_flat_input_focus_uses_primary_border() {
    let focused = resolve(
        StyleId::Flat,
        ComponentKind::Input,
        Variant::Default,
        InteractionState::Active,
    );
    assert_eq!(focused.border, Some(Border::new(2, ColorRole::Primary)));
}

#[test]
fn test_brutalist_buttons_sink_into_their_shadow() {
    let idle = resolve(
        StyleId::Brutalist,
        ComponentKind::Button,
        Variant::Secondary,
        InteractionState::Idle,
    );
    assert_eq!(idle.shadow, Shadow::Offset { x: 6, y: 6 });
    assert_eq!(idle.transform, TextTransform::Uppercase);
    assert_eq!(idle.radius, Radius::None);
    assert_eq!(
        idle.border,
        Some(Border::new(3, ColorRole::Fixed(tone::BLACK)))
    );

    // Pressed has no branch of its own and reads as hover
    let pressed = resolve(
        StyleId::Brutalist,
        ComponentKind::Button,
        Variant::Secondary,
        InteractionState::Pressed,
    );
    assert!(pressed.shadow.is_none());
    assert_eq!(pressed.motion, Motion::Sink);
}

#[test]
fn test_brutalist_alert_takes_alert_color() {
    let rule = resolve(
        StyleId::Brutalist,
        ComponentKind::Alert,
        Variant::Alert(AlertKind::Error),
        InteractionState::Idle,
    );
    assert_eq!(rule.fill, Fill::Tint(ColorRole::Error));

    let icon = resolve(
        StyleId::Brutalist,
        ComponentKind::AlertIcon,
        Variant::Alert(AlertKind::Warning),
        InteractionState::Idle,
    );
    assert_eq!(icon.fill, Fill::Solid(ColorRole::Warning));
}

#[test]
fn test_default_alert_is_info() {
    for style in StyleId::ALL {
        assert_eq!(
            resolve(style, ComponentKind::Alert, Variant::Default, InteractionState::Idle),
            resolve(
                style,
                ComponentKind::Alert,
                Variant::Alert(AlertKind::Info),
                InteractionState::Idle
            )
        );
    }
}

#[test]
fn test_rules_serialize_with_role_names() {
    let rules = resolved_rules(StyleId::Flat);
    let json = serde_json::to_value(&rules).unwrap();
    let first = &json[0];
    assert_eq!(first["component"], "container");
    assert_eq!(first["variant"], "default");
    assert_eq!(first["state"], "idle");
    assert_eq!(first["rule"]["fill"]["kind"], "solid");
}

#[test]
fn test_brutalist_decorations() {
    let style = StyleId::Brutalist;
    assert_eq!(decorate(style, TextRole::Title, "Demo App"), "/// Demo App ///");
    assert_eq!(
        decorate(style, TextRole::Section, "Button Styles"),
        ">>> BUTTON STYLES <<<"
    );
    assert_eq!(decorate(style, TextRole::ItemTitle(2), "Project"), "[2] Project");
    assert_eq!(
        decorate(style, TextRole::Alert(AlertKind::Info), "Here is a helpful tip"),
        "[!] Here is a helpful tip"
    );
}

#[test]
fn test_plain_styles_only_number_items() {
    for style in [StyleId::Flat, StyleId::Ios, StyleId::Rounded] {
        assert_eq!(decorate(style, TextRole::Title, "Demo App"), "Demo App");
        assert_eq!(decorate(style, TextRole::ItemTitle(3), "Project"), "Project 3");
    }
}

#[test]
fn test_every_style_has_a_description() {
    for style in StyleId::ALL {
        let profile = style.profile();
        assert!(!profile.display_name.is_empty());
        assert!(!profile.description.is_empty());
        assert!(!profile.traits.is_empty());
        assert!(!profile.use_cases.is_empty());
    }
}
