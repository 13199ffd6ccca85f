//! Per-style rule sheets.

use std::sync::LazyLock;

use thiserror::Error;

use super::rule::{Border, Fill, Motion, Radius, Shadow, Side, Sides, StyleRule, Weight};
use super::{AlertKind, ColorRole, ComponentKind, InteractionState, StyleId, Variant};

/// Fixed tones used by style overrides.
pub mod tone {
    use palette::Srgb;

    pub const WHITE: Srgb<u8> = Srgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Srgb<u8> = Srgb::new(0x00, 0x00, 0x00);
    /// Neumorphic base
    pub const CLAY: Srgb<u8> = Srgb::new(0xE8, 0xE8, 0xE8);
    pub const CREAM: Srgb<u8> = Srgb::new(0xFE, 0xFC, 0xE8);
    pub const GRAY_50: Srgb<u8> = Srgb::new(0xF9, 0xFA, 0xFB);
    pub const GRAY_100: Srgb<u8> = Srgb::new(0xF3, 0xF4, 0xF6);
    pub const GRAY_200: Srgb<u8> = Srgb::new(0xE5, 0xE7, 0xEB);
    pub const GRAY_300: Srgb<u8> = Srgb::new(0xD1, 0xD5, 0xDB);
    pub const GRAY_400: Srgb<u8> = Srgb::new(0x9C, 0xA3, 0xAF);
    pub const GRAY_500: Srgb<u8> = Srgb::new(0x6B, 0x72, 0x80);
    pub const GRAY_600: Srgb<u8> = Srgb::new(0x4B, 0x55, 0x63);
    pub const GRAY_700: Srgb<u8> = Srgb::new(0x37, 0x41, 0x51);
    pub const GRAY_800: Srgb<u8> = Srgb::new(0x1F, 0x29, 0x37);
    pub const GRAY_900: Srgb<u8> = Srgb::new(0x11, 0x18, 0x27);
}

const fn fixed(color: palette::Srgb<u8>) -> ColorRole {
    ColorRole::Fixed(color)
}

const WHITE: ColorRole = fixed(tone::WHITE);
const BLACK: ColorRole = fixed(tone::BLACK);

/// Rules for a component that may respond to interaction.
///
/// Missing branches fall back to `idle`; `pressed` falls back to `hover` first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateRules {
    pub idle: StyleRule,
    pub active: Option<StyleRule>,
    pub hover: Option<StyleRule>,
    pub pressed: Option<StyleRule>,
}

impl StateRules {
    pub const fn new(idle: StyleRule) -> Self {
        Self {
            idle,
            active: None,
            hover: None,
            pressed: None,
        }
    }

    pub const fn active(mut self, rule: StyleRule) -> Self {
        self.active = Some(rule);
        self
    }

    pub const fn hover(mut self, rule: StyleRule) -> Self {
        self.hover = Some(rule);
        self
    }

    pub const fn pressed(mut self, rule: StyleRule) -> Self {
        self.pressed = Some(rule);
        self
    }

    pub fn get(&self, state: InteractionState) -> StyleRule {
        match state {
            InteractionState::Idle => self.idle,
            InteractionState::Active => self.active.unwrap_or(self.idle),
            InteractionState::Hover => self.hover.unwrap_or(self.idle),
            InteractionState::Pressed => self.pressed.or(self.hover).unwrap_or(self.idle),
        }
    }
}

/// Every component rule for one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheet {
    pub style: StyleId,
    /// Body text on the style's cards
    pub text: ColorRole,
    pub text_secondary: ColorRole,
    pub container: StyleRule,
    pub nav_bar: StyleRule,
    pub tab_bar: StyleRule,
    pub tab: StateRules,
    pub button_primary: StateRules,
    pub button_secondary: StateRules,
    pub button_outline: StateRules,
    pub card: StateRules,
    /// `Active` is focus
    pub input: StateRules,
    pub switch: StateRules,
    pub checkbox: StateRules,
    pub slider: StyleRule,
    pub item_card: StateRules,
    /// Colors use [`ColorRole::Alert`], substituted per alert kind
    pub alert: StyleRule,
    pub alert_icon: StyleRule,
}

impl StyleSheet {
    pub fn rule(
        &self,
        component: ComponentKind,
        variant: Variant,
        state: InteractionState,
    ) -> StyleRule {
        let alert_kind = match variant {
            Variant::Alert(kind) => kind,
            _ => AlertKind::Info,
        };
        match component {
            ComponentKind::Container => self.container,
            ComponentKind::NavBar => self.nav_bar,
            ComponentKind::TabBar => self.tab_bar,
            ComponentKind::Tab => self.tab.get(state),
            ComponentKind::Button => match variant {
                Variant::Secondary => self.button_secondary.get(state),
                Variant::Outline => self.button_outline.get(state),
                _ => self.button_primary.get(state),
            },
            ComponentKind::Card => self.card.get(state),
            ComponentKind::Input => self.input.get(state),
            ComponentKind::Switch => self.switch.get(state),
            ComponentKind::Checkbox => self.checkbox.get(state),
            ComponentKind::Slider => self.slider,
            ComponentKind::ItemCard => self.item_card.get(state),
            ComponentKind::Alert => self.alert.for_alert(alert_kind),
            ComponentKind::AlertIcon => self.alert_icon.for_alert(alert_kind),
        }
    }

    fn state_rules(&self, component: ComponentKind) -> Option<&StateRules> {
        match component {
            ComponentKind::Tab => Some(&self.tab),
            ComponentKind::Switch => Some(&self.switch),
            ComponentKind::Checkbox => Some(&self.checkbox),
            _ => None,
        }
    }
}

/// Coverage problems found by [`StyleTable::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleTableError {
    #[error("expected {expected} style sheets, found {found}")]
    Count { expected: usize, found: usize },
    #[error("sheet {index} is '{found}', expected '{expected}'")]
    Order {
        index: usize,
        expected: StyleId,
        found: StyleId,
    },
    #[error("style '{style}' has no active rule for {component}")]
    MissingActive {
        style: StyleId,
        component: &'static str,
    },
}

/// One sheet per [`StyleId`], in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    sheets: Vec<StyleSheet>,
}

static TABLE: LazyLock<StyleTable> = LazyLock::new(StyleTable::builtin);

/// The built-in table.
pub fn table() -> &'static StyleTable {
    &TABLE
}

impl StyleTable {
    pub fn from_sheets(sheets: Vec<StyleSheet>) -> Self {
        Self { sheets }
    }

    pub fn builtin() -> Self {
        Self::from_sheets(vec![
            flat(),
            neumorphic(),
            glassmorphic(),
            ios(),
            material(),
            rounded(),
            brutalist(),
            industrial(),
            corporate(),
        ])
    }

    pub fn sheets(&self) -> &[StyleSheet] {
        &self.sheets
    }

    /// Sheet for `style`, or the first sheet if the table has no matching row.
    pub fn sheet(&self, style: StyleId) -> &StyleSheet {
        self.sheets
            .get(style.index())
            .filter(|s| s.style == style)
            .or_else(|| self.sheets.iter().find(|s| s.style == style))
            .unwrap_or_else(|| {
                tracing::warn!(%style, "No style sheet, using default");
                &TABLE.sheets[0]
            })
    }

    /// Check coverage: one sheet per style, in order, with every stateful
    /// component carrying an active branch.
    pub fn validate(&self) -> Result<(), StyleTableError> {
        if self.sheets.len() != StyleId::ALL.len() {
            return Err(StyleTableError::Count {
                expected: StyleId::ALL.len(),
                found: self.sheets.len(),
            });
        }
        for (index, (sheet, expected)) in self.sheets.iter().zip(StyleId::ALL).enumerate() {
            if sheet.style != expected {
                return Err(StyleTableError::Order {
                    index,
                    expected,
                    found: sheet.style,
                });
            }
            for component in ComponentKind::ALL.into_iter().filter(|c| c.is_stateful()) {
                let has_active = sheet
                    .state_rules(component)
                    .is_some_and(|rules| rules.active.is_some());
                if !has_active {
                    return Err(StyleTableError::MissingActive {
                        style: sheet.style,
                        component: component.name(),
                    });
                }
            }
        }
        Ok(())
    }
}

fn tab_bar(width: u8, color: ColorRole) -> StyleRule {
    StyleRule::new().border(Border::new(width, color).sides(Sides::Bottom))
}

/// Underlined tab used by most styles.
fn underline_tab(width: u8) -> StateRules {
    StateRules::new(StyleRule::new().text(ColorRole::TextSecondary).weight(Weight::Medium))
        .hover(StyleRule::new().text(ColorRole::Text).weight(Weight::Medium))
        .active(
            StyleRule::new()
                .text(ColorRole::Primary)
                .weight(Weight::Medium)
                .stripe(Side::Bottom, width, ColorRole::Primary),
        )
}

fn switch(border: Option<Border>) -> StateRules {
    let off = StyleRule::new()
        .radius(Radius::Full)
        .fill(Fill::Solid(ColorRole::Border))
        .text(WHITE);
    let on = off.fill(Fill::Solid(ColorRole::Primary));
    match border {
        Some(border) => StateRules::new(off.border(border)).active(on.border(border)),
        None => StateRules::new(off).active(on),
    }
}

fn checkbox(border: Option<Border>) -> StateRules {
    let unchecked = StyleRule::new()
        .radius(Radius::Sm)
        .fill(Fill::Solid(WHITE))
        .border(border.unwrap_or(Border::new(2, ColorRole::Border)));
    let checked = StyleRule::new()
        .radius(Radius::Sm)
        .fill(Fill::Solid(ColorRole::Primary))
        .border(border.unwrap_or(Border::new(2, ColorRole::Primary)))
        .text(WHITE)
        .weight(Weight::Bold);
    StateRules::new(unchecked).active(checked)
}

/// Filled portion primary, remainder border.
fn slider() -> StyleRule {
    StyleRule::new()
        .radius(Radius::Lg)
        .fill(Fill::gradient(ColorRole::Primary, ColorRole::Border))
        .text(ColorRole::TextSecondary)
}

fn alert_icon(radius: Radius) -> StyleRule {
    StyleRule::new()
        .radius(radius)
        .fill(Fill::Solid(ColorRole::Alert))
        .text(WHITE)
        .weight(Weight::Bold)
}

fn flat() -> StyleSheet {
    let card = StyleRule::new()
        .radius(Radius::Md)
        .fill(Fill::Solid(WHITE))
        .border(Border::new(2, ColorRole::Border));
    let button = StyleRule::new().radius(Radius::Md).weight(Weight::Medium);
    let primary = button
        .fill(Fill::Solid(ColorRole::Primary))
        .text(ColorRole::OnPrimary);
    let secondary = button
        .fill(Fill::Solid(ColorRole::Surface))
        .border(Border::new(2, ColorRole::Border));
    let outline = button
        .border(Border::new(2, ColorRole::Primary))
        .text(ColorRole::Primary);
    let input = StyleRule::new()
        .radius(Radius::Md)
        .fill(Fill::Solid(WHITE))
        .border(Border::new(2, fixed(tone::GRAY_300)));
    let item = card.border(Border::new(2, fixed(tone::GRAY_200)));

    StyleSheet {
        style: StyleId::Flat,
        text: ColorRole::Text,
        text_secondary: ColorRole::TextSecondary,
        container: StyleRule::new().fill(Fill::Solid(fixed(tone::GRAY_50))),
        nav_bar: card,
        tab_bar: tab_bar(1, ColorRole::Border),
        tab: underline_tab(2),
        button_primary: StateRules::new(primary).hover(primary.motion(Motion::Dim)),
        button_secondary: StateRules::new(secondary).hover(secondary.motion(Motion::Dim)),
        button_outline: StateRules::new(outline)
            .hover(outline.fill(Fill::Tint(ColorRole::Primary))),
        card: StateRules::new(card),
        input: StateRules::new(input)
            .active(input.border(Border::new(2, ColorRole::Primary))),
        switch: switch(None),
        checkbox: checkbox(None),
        slider: slider(),
        item_card: StateRules::new(item).hover(item.border(Border::new(2, fixed(tone::GRAY_300)))),
        alert: StyleRule::new()
            .radius(Radius::Md)
            .fill(Fill::Tint(ColorRole::Alert))
            .stripe(Side::Left, 4, ColorRole::Alert),
        alert_icon: alert_icon(Radius::Full),
    }
}

fn neumorphic() -> StyleSheet {
    let clay = fixed(tone::CLAY);
    let raised = Shadow::Neumorphic { inset: false };
    let inset = Shadow::Neumorphic { inset: true };
    let card = StyleRule::new()
        .radius(Radius::Xxxl)
        .fill(Fill::Solid(clay))
        .shadow(raised);
    let button = StyleRule::new()
        .radius(Radius::Xxxl)
        .shadow(raised)
        .weight(Weight::Medium);
    let primary = button
        .fill(Fill::Solid(ColorRole::Primary))
        .text(ColorRole::OnPrimary);
    let secondary = button
        .fill(Fill::Solid(ColorRole::Surface))
        .border(Border::new(2, ColorRole::Border));
    let outline = button
        .fill(Fill::Solid(clay))
        .border(Border::new(1, ColorRole::Primary))
        .text(ColorRole::Primary);
    let input = StyleRule::new()
        .radius(Radius::Xxl)
        .fill(Fill::Solid(clay))
        .shadow(inset);
    let item = StyleRule::new()
        .radius(Radius::Xxl)
        .fill(Fill::Solid(clay))
        .shadow(raised);

    StyleSheet {
        style: StyleId::Neumorphic,
        text: ColorRole::Text,
        text_secondary: ColorRole::TextSecondary,
        container: StyleRule::new().fill(Fill::Solid(clay)),
        nav_bar: card,
        tab_bar: tab_bar(1, ColorRole::Border),
        tab: StateRules::new(StyleRule::new().text(ColorRole::TextSecondary))
            .active(
                StyleRule::new()
                    .radius(Radius::Lg)
                    .shadow(inset)
                    .text(ColorRole::Primary)
                    .weight(Weight::Medium),
            ),
        button_primary: StateRules::new(primary)
            .hover(primary.shadow(inset))
            .pressed(primary.shadow(inset).motion(Motion::Sink)),
        button_secondary: StateRules::new(secondary).hover(secondary.shadow(inset)),
        button_outline: StateRules::new(outline).hover(outline.shadow(inset)),
        card: StateRules::new(card),
        input: StateRules::new(input).active(input.text(ColorRole::Primary)),
        switch: switch(None),
        checkbox: checkbox(None),
        slider: slider(),
        item_card: StateRules::new(item).hover(item.motion(Motion::Lift)),
        alert: StyleRule::new()
            .radius(Radius::Xxl)
            .fill(Fill::Solid(clay))
            .shadow(raised),
        alert_icon: alert_icon(Radius::Full).shadow(inset),
    }
}

fn glassmorphic() -> StyleSheet {
    let glass_edge = Border::new(2, WHITE);
    let card = StyleRule::new()
        .radius(Radius::Xxl)
        .fill(Fill::Translucent(25))
        .border(glass_edge)
        .shadow(Shadow::Glass)
        .blur();
    let button = StyleRule::new()
        .radius(Radius::Xxl)
        .border(glass_edge)
        .shadow(Shadow::Glass)
        .weight(Weight::Medium)
        .blur();
    let primary = button
        .fill(Fill::Solid(ColorRole::Primary))
        .text(ColorRole::OnPrimary);
    let secondary = button
        .fill(Fill::Solid(ColorRole::Surface))
        .border(Border::new(2, ColorRole::Border));
    let outline = button
        .fill(Fill::Translucent(20))
        .border(Border::new(2, ColorRole::Primary))
        .text(ColorRole::Primary);
    let input = StyleRule::new()
        .radius(Radius::Xl)
        .fill(Fill::Translucent(20))
        .border(glass_edge)
        .blur();
    let item = StyleRule::new()
        .radius(Radius::Xl)
        .fill(Fill::Translucent(30))
        .border(glass_edge)
        .blur();

    StyleSheet {
        style: StyleId::Glassmorphic,
        text: ColorRole::Text,
        text_secondary: ColorRole::TextSecondary,
        container: StyleRule::new().fill(Fill::Gradient {
            from: ColorRole::PrimaryLight,
            via: Some(ColorRole::Accent),
            to: ColorRole::Primary,
        }),
        nav_bar: card,
        tab_bar: tab_bar(1, ColorRole::Border),
        tab: StateRules::new(StyleRule::new().text(ColorRole::TextSecondary))
            .active(
                StyleRule::new()
                    .radius(Radius::Xl)
                    .fill(Fill::Translucent(40))
                    .text(ColorRole::Primary)
                    .weight(Weight::Medium)
                    .blur(),
            ),
        button_primary: StateRules::new(primary).hover(primary.motion(Motion::Dim)),
        button_secondary: StateRules::new(secondary)
            .hover(secondary.fill(Fill::Translucent(30))),
        button_outline: StateRules::new(outline).hover(outline.fill(Fill::Translucent(30))),
        card: StateRules::new(card),
        input: StateRules::new(input).active(input.fill(Fill::Translucent(35))),
        switch: switch(None),
        checkbox: checkbox(None),
        slider: slider(),
        item_card: StateRules::new(item).hover(item.fill(Fill::Translucent(40))),
        alert: StyleRule::new()
            .radius(Radius::Xl)
            .fill(Fill::Translucent(30))
            .border(glass_edge)
            .blur(),
        alert_icon: alert_icon(Radius::Full),
    }
}

fn ios() -> StyleSheet {
    let card = StyleRule::new()
        .radius(Radius::Xxl)
        .fill(Fill::Solid(WHITE))
        .border(Border::new(1, fixed(tone::GRAY_100)))
        .shadow(Shadow::Soft);
    let button = StyleRule::new()
        .radius(Radius::Xl)
        .shadow(Shadow::Soft)
        .weight(Weight::Medium);
    let primary = button
        .fill(Fill::Solid(ColorRole::Primary))
        .text(ColorRole::OnPrimary)
        .shadow(Shadow::Elevation { level: 1 });
    let secondary = button
        .fill(Fill::Solid(ColorRole::Surface))
        .border(Border::new(2, ColorRole::Border));
    let outline = button
        .border(Border::new(1, ColorRole::Primary))
        .text(ColorRole::Primary);
    let input = StyleRule::new()
        .radius(Radius::Xl)
        .fill(Fill::Solid(fixed(tone::GRAY_50)))
        .border(Border::new(1, fixed(tone::GRAY_200)));
    let item = StyleRule::new()
        .radius(Radius::Xl)
        .fill(Fill::Solid(WHITE))
        .shadow(Shadow::Soft);

    StyleSheet {
        style: StyleId::Ios,
        text: ColorRole::Text,
        text_secondary: ColorRole::TextSecondary,
        container: StyleRule::new().fill(Fill::Solid(fixed(tone::GRAY_50))),
        nav_bar: card,
        tab_bar: tab_bar(1, ColorRole::Border),
        tab: underline_tab(2),
        button_primary: StateRules::new(primary)
            .hover(primary.shadow(Shadow::Elevation { level: 2 }))
            .pressed(primary.motion(Motion::Shrink)),
        button_secondary: StateRules::new(secondary).pressed(secondary.motion(Motion::Shrink)),
        button_outline: StateRules::new(outline).pressed(outline.motion(Motion::Shrink)),
        card: StateRules::new(card),
        input: StateRules::new(input).active(
            input
                .fill(Fill::Solid(WHITE))
                .border(Border::new(1, fixed(tone::GRAY_300)))
                .shadow(Shadow::Soft),
        ),
        switch: switch(None),
        checkbox: checkbox(None),
        slider: slider(),
        item_card: StateRules::new(item).hover(item.motion(Motion::Grow)),
        alert: StyleRule::new()
            .radius(Radius::Xl)
            .fill(Fill::Tint(ColorRole::Alert))
            .border(Border::new(1, ColorRole::Alert))
            .shadow(Shadow::Soft),
        alert_icon: alert_icon(Radius::Full),
    }
}

fn material() -> StyleSheet {
    let level = |level| Shadow::Elevation { level };
    let card = StyleRule::new()
        .radius(Radius::Sm)
        .fill(Fill::Solid(WHITE))
        .shadow(level(1));
    let button = StyleRule::new()
        .radius(Radius::Sm)
        .shadow(level(1))
        .weight(Weight::Medium)
        .uppercase();
    let primary = button
        .fill(Fill::Solid(ColorRole::Primary))
        .text(ColorRole::OnPrimary);
    let secondary = button
        .fill(Fill::Solid(ColorRole::Surface))
        .border(Border::new(2, ColorRole::Border));
    let outline = button
        .border(Border::new(1, ColorRole::Primary))
        .text(ColorRole::Primary);
    let input = StyleRule::new()
        .radius(Radius::Sm)
        .fill(Fill::Solid(fixed(tone::GRAY_50)))
        .border(Border::new(2, fixed(tone::GRAY_400)).sides(Sides::Bottom));
    let item = card.shadow(level(1));

    StyleSheet {
        style: StyleId::Material,
        text: ColorRole::Text,
        text_secondary: ColorRole::TextSecondary,
        container: StyleRule::new().fill(Fill::Solid(fixed(tone::GRAY_100))),
        nav_bar: card.uppercase(),
        tab_bar: tab_bar(2, fixed(tone::GRAY_300)),
        tab: StateRules::new(StyleRule::new().text(ColorRole::TextSecondary))
            .hover(StyleRule::new().text(ColorRole::Text))
            .active(
                StyleRule::new()
                    .text(ColorRole::Primary)
                    .weight(Weight::Medium)
                    .stripe(Side::Bottom, 3, ColorRole::Primary)
                    .uppercase(),
            ),
        button_primary: StateRules::new(primary)
            .hover(primary.shadow(level(2)))
            .pressed(primary.shadow(level(3))),
        button_secondary: StateRules::new(secondary).hover(secondary.shadow(level(2))),
        button_outline: StateRules::new(outline).hover(outline.shadow(level(2))),
        card: StateRules::new(card).hover(card.shadow(level(2))),
        input: StateRules::new(input).active(
            input.border(Border::new(3, ColorRole::Primary).sides(Sides::Bottom)),
        ),
        switch: switch(None),
        checkbox: checkbox(None),
        slider: slider(),
        item_card: StateRules::new(item).hover(item.shadow(level(2)).motion(Motion::Lift)),
        alert: StyleRule::new()
            .radius(Radius::Sm)
            .fill(Fill::Tint(ColorRole::Alert))
            .stripe(Side::Left, 4, ColorRole::Alert)
            .shadow(level(2))
            .uppercase(),
        alert_icon: alert_icon(Radius::Full),
    }
}

fn rounded() -> StyleSheet {
    let card = StyleRule::new()
        .radius(Radius::Xxxl)
        .fill(Fill::Solid(WHITE))
        .shadow(Shadow::Soft);
    let button = StyleRule::new()
        .radius(Radius::Full)
        .shadow(Shadow::Soft)
        .weight(Weight::Medium);
    let primary = button
        .fill(Fill::Solid(ColorRole::Primary))
        .text(ColorRole::OnPrimary);
    let secondary = button
        .fill(Fill::Solid(ColorRole::Surface))
        .border(Border::new(2, ColorRole::Border));
    let outline = button
        .border(Border::new(2, ColorRole::Primary))
        .text(ColorRole::Primary);
    let input = StyleRule::new()
        .radius(Radius::Full)
        .border(Border::new(2, fixed(tone::GRAY_300)));

    StyleSheet {
        style: StyleId::Rounded,
        text: ColorRole::Text,
        text_secondary: ColorRole::TextSecondary,
        container: StyleRule::new()
            .fill(Fill::gradient(fixed(tone::GRAY_50), fixed(tone::GRAY_100))),
        nav_bar: card,
        tab_bar: tab_bar(1, ColorRole::Border),
        tab: StateRules::new(StyleRule::new().text(ColorRole::TextSecondary))
            .active(
                StyleRule::new()
                    .radius(Radius::Xxxl)
                    .text(ColorRole::Primary)
                    .weight(Weight::Medium)
                    .stripe(Side::Bottom, 2, ColorRole::Primary),
            ),
        button_primary: StateRules::new(primary).hover(primary.motion(Motion::Lift)),
        button_secondary: StateRules::new(secondary).hover(secondary.motion(Motion::Lift)),
        button_outline: StateRules::new(outline).hover(outline.motion(Motion::Lift)),
        card: StateRules::new(card),
        input: StateRules::new(input).active(
            input
                .border(Border::new(2, fixed(tone::GRAY_400)))
                .shadow(Shadow::Soft),
        ),
        switch: switch(None),
        checkbox: checkbox(None),
        slider: slider(),
        item_card: StateRules::new(card).hover(card.motion(Motion::Lift)),
        alert: StyleRule::new()
            .radius(Radius::Xxxl)
            .fill(Fill::Tint(ColorRole::Alert))
            .border(Border::new(2, ColorRole::Alert)),
        alert_icon: alert_icon(Radius::Full),
    }
}

fn brutalist() -> StyleSheet {
    let offset = |n| Shadow::Offset { x: n, y: n };
    let heavy = Border::new(3, BLACK);
    let card = StyleRule::new()
        .fill(Fill::Solid(WHITE))
        .border(Border::new(4, BLACK))
        .shadow(offset(10))
        .text(BLACK);
    let button = StyleRule::new()
        .border(heavy)
        .shadow(offset(6))
        .weight(Weight::Bold)
        .uppercase();
    let pushed = |rule: StyleRule| rule.shadow(Shadow::None).motion(Motion::Sink);
    let primary = button
        .fill(Fill::Solid(ColorRole::Primary))
        .text(ColorRole::OnPrimary);
    let secondary = button.fill(Fill::Solid(ColorRole::Surface));
    let outline = button.fill(Fill::Solid(WHITE)).text(ColorRole::Primary);
    let input = StyleRule::new().fill(Fill::Solid(WHITE)).border(heavy);
    let item = StyleRule::new()
        .fill(Fill::Solid(WHITE))
        .border(heavy)
        .shadow(offset(6));
    let square = Some(Border::new(2, BLACK));

    StyleSheet {
        style: StyleId::Brutalist,
        text: ColorRole::Text,
        text_secondary: ColorRole::TextSecondary,
        container: StyleRule::new().fill(Fill::Solid(fixed(tone::CREAM))),
        nav_bar: card.weight(Weight::Bold),
        tab_bar: tab_bar(4, BLACK),
        tab: StateRules::new(StyleRule::new().text(ColorRole::TextSecondary))
            .active(
                StyleRule::new()
                    .border(heavy.sides(Sides::Open))
                    .fill(Fill::Solid(WHITE))
                    .text(ColorRole::Primary)
                    .weight(Weight::Bold),
            ),
        button_primary: StateRules::new(primary).hover(pushed(primary)),
        button_secondary: StateRules::new(secondary).hover(pushed(secondary)),
        button_outline: StateRules::new(outline).hover(pushed(outline)),
        card: StateRules::new(card),
        input: StateRules::new(input).active(input.shadow(offset(4)).motion(Motion::Sink)),
        switch: switch(square),
        checkbox: checkbox(square),
        slider: slider().border(Border::new(2, BLACK)),
        item_card: StateRules::new(item)
            .hover(item.shadow(offset(4)).motion(Motion::Sink))
            .pressed(pushed(item)),
        alert: StyleRule::new()
            .fill(Fill::Tint(ColorRole::Alert))
            .border(heavy)
            .shadow(offset(4))
            .weight(Weight::Bold),
        alert_icon: alert_icon(Radius::None).border(Border::new(2, BLACK)),
    }
}

fn industrial() -> StyleSheet {
    let metal = |from, to| Fill::gradient(fixed(from), fixed(to));
    let bevel = Shadow::Bevel { inset: false };
    let card = StyleRule::new()
        .fill(metal(tone::GRAY_800, tone::GRAY_900))
        .border(Border::new(2, fixed(tone::GRAY_700)))
        .shadow(bevel)
        .text(WHITE);
    let primary = StyleRule::new()
        .fill(metal(tone::GRAY_700, tone::GRAY_900))
        .border(Border::new(1, fixed(tone::GRAY_600)))
        .shadow(bevel)
        .text(WHITE)
        .weight(Weight::Medium);
    let secondary = StyleRule::new()
        .fill(metal(tone::GRAY_200, tone::GRAY_300))
        .border(Border::new(1, fixed(tone::GRAY_400)))
        .shadow(bevel)
        .weight(Weight::Semibold);
    let outline = secondary
        .border(Border::new(1, ColorRole::Primary))
        .text(ColorRole::Primary);
    let input = StyleRule::new()
        .fill(metal(tone::GRAY_700, tone::GRAY_800))
        .border(Border::new(2, fixed(tone::GRAY_600)))
        .shadow(Shadow::Bevel { inset: true })
        .text(WHITE);
    let item = StyleRule::new()
        .fill(metal(tone::GRAY_700, tone::GRAY_800))
        .border(Border::new(2, fixed(tone::GRAY_600)))
        .shadow(bevel)
        .text(WHITE);

    StyleSheet {
        style: StyleId::Industrial,
        text: WHITE,
        text_secondary: fixed(tone::GRAY_400),
        container: StyleRule::new().fill(Fill::Gradient {
            from: fixed(tone::GRAY_900),
            via: Some(fixed(tone::GRAY_800)),
            to: fixed(tone::GRAY_900),
        }),
        nav_bar: card,
        tab_bar: tab_bar(1, fixed(tone::GRAY_600)),
        tab: StateRules::new(StyleRule::new().text(fixed(tone::GRAY_400)))
            .hover(StyleRule::new().text(WHITE))
            .active(
                StyleRule::new()
                    .text(ColorRole::Primary)
                    .weight(Weight::Medium)
                    .stripe(Side::Bottom, 2, ColorRole::Primary),
            ),
        button_primary: StateRules::new(primary)
            .hover(primary.motion(Motion::Sink))
            .pressed(
                primary
                    .shadow(Shadow::Bevel { inset: true })
                    .motion(Motion::Sink),
            ),
        button_secondary: StateRules::new(secondary).hover(secondary.motion(Motion::Sink)),
        button_outline: StateRules::new(outline).hover(outline.motion(Motion::Sink)),
        card: StateRules::new(card),
        input: StateRules::new(input)
            .active(input.border(Border::new(2, fixed(tone::GRAY_500)))),
        switch: switch(None),
        checkbox: checkbox(None),
        slider: slider(),
        item_card: StateRules::new(item).hover(item.shadow(Shadow::Elevation { level: 2 })),
        alert: StyleRule::new()
            .fill(metal(tone::GRAY_800, tone::GRAY_700))
            .border(Border::new(2, fixed(tone::GRAY_600)))
            .stripe(Side::Left, 4, ColorRole::Alert)
            .text(WHITE),
        alert_icon: alert_icon(Radius::None),
    }
}

fn corporate() -> StyleSheet {
    let card = StyleRule::new()
        .fill(Fill::Solid(WHITE))
        .border(Border::new(1, fixed(tone::GRAY_300)))
        .stripe(Side::Top, 4, ColorRole::Primary)
        .shadow(Shadow::Soft);
    let primary = StyleRule::new()
        .fill(Fill::Solid(ColorRole::Primary))
        .text(ColorRole::OnPrimary)
        .stripe(Side::Bottom, 3, ColorRole::PrimaryDark)
        .shadow(Shadow::Soft)
        .weight(Weight::Semibold);
    let secondary = StyleRule::new()
        .fill(Fill::Solid(ColorRole::Surface))
        .border(Border::new(2, ColorRole::Border))
        .weight(Weight::Semibold);
    let outline = StyleRule::new()
        .border(Border::new(2, ColorRole::Primary))
        .text(ColorRole::Primary)
        .weight(Weight::Semibold);
    let input = StyleRule::new()
        .fill(Fill::Solid(WHITE))
        .border(Border::new(1, fixed(tone::GRAY_300)))
        .stripe(Side::Bottom, 2, fixed(tone::GRAY_300));
    let item = StyleRule::new()
        .fill(Fill::Solid(WHITE))
        .border(Border::new(1, fixed(tone::GRAY_300)));

    StyleSheet {
        style: StyleId::Corporate,
        text: ColorRole::Text,
        text_secondary: ColorRole::TextSecondary,
        container: StyleRule::new().fill(Fill::gradient(fixed(tone::GRAY_50), WHITE)),
        nav_bar: card,
        tab_bar: tab_bar(1, ColorRole::Border),
        tab: underline_tab(2),
        button_primary: StateRules::new(primary)
            .hover(primary.shadow(Shadow::Elevation { level: 1 }))
            .pressed(primary.shadow(Shadow::Bevel { inset: true })),
        button_secondary: StateRules::new(secondary)
            .hover(secondary.fill(Fill::Solid(fixed(tone::GRAY_200)))),
        button_outline: StateRules::new(outline)
            .hover(outline.fill(Fill::Solid(fixed(tone::GRAY_50)))),
        card: StateRules::new(card).hover(card.shadow(Shadow::Elevation { level: 2 })),
        input: StateRules::new(input).active(
            input
                .stripe(Side::Bottom, 3, fixed(tone::GRAY_400))
                .shadow(Shadow::Soft),
        ),
        switch: switch(None),
        checkbox: checkbox(None),
        slider: slider(),
        item_card: StateRules::new(item).hover(
            item.shadow(Shadow::Elevation { level: 3 })
                .motion(Motion::Lift),
        ),
        alert: StyleRule::new()
            .fill(Fill::Solid(WHITE))
            .border(Border::new(1, ColorRole::Border))
            .stripe(Side::Left, 4, ColorRole::Alert),
        alert_icon: alert_icon(Radius::Full),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_complete() {
        assert_eq!(StyleTable::builtin().validate(), Ok(()));
    }

    #[test]
    fn missing_sheet_is_reported() {
        let mut sheets = StyleTable::builtin().sheets().to_vec();
        sheets.pop();
        assert_eq!(
            StyleTable::from_sheets(sheets).validate(),
            Err(StyleTableError::Count {
                expected: 9,
                found: 8
            })
        );
    }

    #[test]
    fn misordered_sheets_are_reported() {
        let mut sheets = StyleTable::builtin().sheets().to_vec();
        sheets.swap(0, 1);
        assert!(matches!(
            StyleTable::from_sheets(sheets).validate(),
            Err(StyleTableError::Order { index: 0, .. })
        ));
    }

    #[test]
    fn stateful_components_need_active_branch() {
        let mut sheets = StyleTable::builtin().sheets().to_vec();
        sheets[3].switch.active = None;
        assert_eq!(
            StyleTable::from_sheets(sheets).validate(),
            Err(StyleTableError::MissingActive {
                style: StyleId::Ios,
                component: "switch"
            })
        );
    }

    #[test]
    fn pressed_falls_back_to_hover() {
        let idle = StyleRule::new();
        let hover = idle.motion(Motion::Lift);
        let rules = StateRules::new(idle).hover(hover);
        assert_eq!(rules.get(InteractionState::Pressed), hover);
        assert_eq!(rules.get(InteractionState::Active), idle);
    }
}
