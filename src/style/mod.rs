//! Style presets and per-component rule resolution.
//!
//! Each [`StyleId`] owns one [`StyleSheet`] in the global [`StyleTable`].
//! Resolution is a pure lookup keyed by (style, component, variant, state).

mod profile;
mod rule;
mod table;

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::generate::ColorPalette;

pub use profile::{StyleProfile, TextRole, decorate};
pub use rule::{
    Border, Fill, Motion, Radius, Shadow, Side, Sides, Stripe, StyleRule, TextTransform, Weight,
};
pub use table::{StateRules, StyleSheet, StyleTable, StyleTableError, table, tone};

/// One of the nine UI style presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StyleId {
    #[default]
    Flat,
    Neumorphic,
    Glassmorphic,
    Ios,
    Material,
    Rounded,
    Brutalist,
    Industrial,
    Corporate,
}

impl StyleId {
    /// All presets in display order.
    pub const ALL: [StyleId; 9] = [
        StyleId::Flat,
        StyleId::Neumorphic,
        StyleId::Glassmorphic,
        StyleId::Ios,
        StyleId::Material,
        StyleId::Rounded,
        StyleId::Brutalist,
        StyleId::Industrial,
        StyleId::Corporate,
    ];

    /// Stable lower-case identifier.
    pub fn name(self) -> &'static str {
        match self {
            StyleId::Flat => "flat",
            StyleId::Neumorphic => "neumorphic",
            StyleId::Glassmorphic => "glassmorphic",
            StyleId::Ios => "ios",
            StyleId::Material => "material",
            StyleId::Rounded => "rounded",
            StyleId::Brutalist => "brutalist",
            StyleId::Industrial => "industrial",
            StyleId::Corporate => "corporate",
        }
    }

    /// Exact lookup by identifier (case-insensitive).
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Lookup that falls back to [`StyleId::Flat`] for unknown names.
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            tracing::warn!(name, "Unknown style, falling back to flat");
            StyleId::Flat
        })
    }

    /// Position in [`StyleId::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleId {
    type Err = std::convert::Infallible;

    /// Never fails: unknown names become [`StyleId::Flat`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl Serialize for StyleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for StyleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_name(&s))
    }
}

/// Widget kinds the showcase renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Container,
    NavBar,
    TabBar,
    Tab,
    Button,
    Card,
    Input,
    Switch,
    Checkbox,
    Slider,
    ItemCard,
    Alert,
    AlertIcon,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 13] = [
        ComponentKind::Container,
        ComponentKind::NavBar,
        ComponentKind::TabBar,
        ComponentKind::Tab,
        ComponentKind::Button,
        ComponentKind::Card,
        ComponentKind::Input,
        ComponentKind::Switch,
        ComponentKind::Checkbox,
        ComponentKind::Slider,
        ComponentKind::ItemCard,
        ComponentKind::Alert,
        ComponentKind::AlertIcon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::Container => "container",
            ComponentKind::NavBar => "navBar",
            ComponentKind::TabBar => "tabBar",
            ComponentKind::Tab => "tab",
            ComponentKind::Button => "button",
            ComponentKind::Card => "card",
            ComponentKind::Input => "input",
            ComponentKind::Switch => "switch",
            ComponentKind::Checkbox => "checkbox",
            ComponentKind::Slider => "slider",
            ComponentKind::ItemCard => "itemCard",
            ComponentKind::Alert => "alert",
            ComponentKind::AlertIcon => "alertIcon",
        }
    }

    /// Components whose rule depends on an on/off or selected state.
    pub fn is_stateful(self) -> bool {
        matches!(
            self,
            ComponentKind::Tab | ComponentKind::Switch | ComponentKind::Checkbox
        )
    }

    /// States with their own rule branches. Others resolve as idle.
    pub fn states(self) -> &'static [InteractionState] {
        match self {
            ComponentKind::Tab
            | ComponentKind::Switch
            | ComponentKind::Checkbox
            | ComponentKind::Button
            | ComponentKind::Card
            | ComponentKind::Input
            | ComponentKind::ItemCard => &InteractionState::ALL,
            _ => &[InteractionState::Idle],
        }
    }

    /// Variants meaningful for this component. Others resolve as [`Variant::Default`].
    pub fn variants(self) -> &'static [Variant] {
        match self {
            ComponentKind::Button => &[Variant::Primary, Variant::Secondary, Variant::Outline],
            ComponentKind::Alert | ComponentKind::AlertIcon => &[
                Variant::Alert(AlertKind::Success),
                Variant::Alert(AlertKind::Warning),
                Variant::Alert(AlertKind::Error),
                Variant::Alert(AlertKind::Info),
            ],
            _ => &[Variant::Default],
        }
    }
}

/// Semantic alert flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    Success,
    Warning,
    Error,
    Info,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [
        AlertKind::Success,
        AlertKind::Warning,
        AlertKind::Error,
        AlertKind::Info,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Warning => "warning",
            AlertKind::Error => "error",
            AlertKind::Info => "info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AlertKind::Success => "✓",
            AlertKind::Warning => "⚠",
            AlertKind::Error => "✕",
            AlertKind::Info => "ℹ",
        }
    }

    /// Palette role carrying this alert's color.
    pub fn role(self) -> ColorRole {
        match self {
            AlertKind::Success => ColorRole::Success,
            AlertKind::Warning => ColorRole::Warning,
            AlertKind::Error => ColorRole::Error,
            AlertKind::Info => ColorRole::Info,
        }
    }
}

/// Component variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    #[default]
    Default,
    Primary,
    Secondary,
    Outline,
    Alert(AlertKind),
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Outline => "outline",
            Variant::Alert(kind) => kind.name(),
        }
    }
}

/// Interaction state of a single widget.
///
/// `Active` covers the selected tab, a switch turned on, a checked checkbox
/// and a focused input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    #[default]
    Idle,
    Active,
    Hover,
    Pressed,
}

impl InteractionState {
    pub const ALL: [InteractionState; 4] = [
        InteractionState::Idle,
        InteractionState::Active,
        InteractionState::Hover,
        InteractionState::Pressed,
    ];

    pub fn name(self) -> &'static str {
        match self {
            InteractionState::Idle => "idle",
            InteractionState::Active => "active",
            InteractionState::Hover => "hover",
            InteractionState::Pressed => "pressed",
        }
    }
}

/// Symbolic color reference resolved against a [`ColorPalette`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    PrimaryLight,
    PrimaryDark,
    Accent,
    OnPrimary,
    Surface,
    Border,
    Text,
    TextSecondary,
    Success,
    Warning,
    Error,
    Info,
    /// Placeholder for the semantic color of the alert being drawn
    Alert,
    /// Style-specific override independent of the palette
    Fixed(Srgb<u8>),
}

impl ColorRole {
    pub fn name(self) -> &'static str {
        match self {
            ColorRole::Primary => "primary",
            ColorRole::PrimaryLight => "primaryLight",
            ColorRole::PrimaryDark => "primaryDark",
            ColorRole::Accent => "accent",
            ColorRole::OnPrimary => "onPrimary",
            ColorRole::Surface => "surface",
            ColorRole::Border => "border",
            ColorRole::Text => "text",
            ColorRole::TextSecondary => "textSecondary",
            ColorRole::Success => "success",
            ColorRole::Warning => "warning",
            ColorRole::Error => "error",
            ColorRole::Info => "info",
            ColorRole::Alert => "alert",
            ColorRole::Fixed(_) => "fixed",
        }
    }

    /// Replace the [`ColorRole::Alert`] placeholder with a concrete alert role.
    pub fn for_alert(self, kind: AlertKind) -> Self {
        match self {
            ColorRole::Alert => kind.role(),
            other => other,
        }
    }
}

impl Serialize for ColorRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ColorRole::Fixed(color) => serializer.serialize_str(&crate::seed::hex(*color)),
            role => serializer.serialize_str(role.name()),
        }
    }
}

impl ColorPalette {
    /// Concrete color for a role. An unsubstituted [`ColorRole::Alert`] reads as info.
    pub fn resolve(&self, role: ColorRole) -> Srgb<u8> {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::PrimaryLight => self.primary_light,
            ColorRole::PrimaryDark => self.primary_dark,
            ColorRole::Accent => self.accent,
            ColorRole::OnPrimary => self.on_primary,
            ColorRole::Surface => self.surface,
            ColorRole::Border => self.border,
            ColorRole::Text => self.text,
            ColorRole::TextSecondary => self.text_secondary,
            ColorRole::Success => self.success,
            ColorRole::Warning => self.warning,
            ColorRole::Error => self.error,
            ColorRole::Info | ColorRole::Alert => self.info,
            ColorRole::Fixed(color) => color,
        }
    }
}

/// Resolve the rule for one widget.
///
/// Buttons read `Default` as `Primary`; alerts read `Default` as info.
/// Variants are ignored by components that have none.
pub fn resolve(
    style: StyleId,
    component: ComponentKind,
    variant: Variant,
    state: InteractionState,
) -> StyleRule {
    table().sheet(style).rule(component, variant, state)
}

/// One row of a style's resolved rule listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedRule {
    pub component: &'static str,
    pub variant: &'static str,
    pub state: &'static str,
    pub rule: StyleRule,
}

/// Every (component, variant, state) rule of a style, in display order.
pub fn resolved_rules(style: StyleId) -> Vec<ResolvedRule> {
    let sheet = table().sheet(style);
    let mut rows = Vec::new();
    for component in ComponentKind::ALL {
        for &variant in component.variants() {
            for &state in component.states() {
                rows.push(ResolvedRule {
                    component: component.name(),
                    variant: variant.name(),
                    state: state.name(),
                    rule: sheet.rule(component, variant, state),
                });
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for style in StyleId::ALL {
            assert_eq!(StyleId::lookup(style.name()), Some(style));
        }
        assert_eq!(StyleId::lookup("BRUTALIST"), Some(StyleId::Brutalist));
    }

    #[test]
    fn unknown_name_falls_back_to_flat() {
        assert_eq!(StyleId::from_name("skeuomorphic"), StyleId::Flat);
        assert_eq!("".parse::<StyleId>(), Ok(StyleId::Flat));
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(StyleId::Corporate.next(), StyleId::Flat);
        assert_eq!(StyleId::Flat.prev(), StyleId::Corporate);
    }

    #[test]
    fn alert_placeholder_substitutes() {
        assert_eq!(
            ColorRole::Alert.for_alert(AlertKind::Error),
            ColorRole::Error
        );
        assert_eq!(
            ColorRole::Text.for_alert(AlertKind::Error),
            ColorRole::Text
        );
    }
}
