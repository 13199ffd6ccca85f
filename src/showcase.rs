//! Showcase widget state and content.
//!
//! The state is ephemeral: it belongs to one mounted showcase and is dropped
//! with it. Every transition keeps the values inside their bounds.

use crate::style::{AlertKind, StyleId, TextRole, decorate};

/// Tab labels, in order.
pub const TABS: [&str; 3] = ["Home", "Features", "Settings"];

pub const SLIDER_MIN: u8 = 0;
pub const SLIDER_MAX: u8 = 100;
pub const SLIDER_DEFAULT: u8 = 50;

/// Number of content cards in the grid.
pub const ITEM_COUNT: usize = 4;

/// Interactive widgets that can hold keyboard focus, in traversal order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ShowcaseFocus {
    #[default]
    Tabs,
    Switch,
    Checkbox,
    Slider,
}

impl ShowcaseFocus {
    const ORDER: [ShowcaseFocus; 4] = [
        ShowcaseFocus::Tabs,
        ShowcaseFocus::Switch,
        ShowcaseFocus::Checkbox,
        ShowcaseFocus::Slider,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowcaseState {
    active_tab: usize,
    slider: u8,
    switch_on: bool,
    checked: bool,
    focus: ShowcaseFocus,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self {
            active_tab: 0,
            slider: SLIDER_DEFAULT,
            switch_on: false,
            checked: false,
            focus: ShowcaseFocus::default(),
        }
    }
}

impl ShowcaseState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    pub fn slider(&self) -> u8 {
        self.slider
    }

    pub fn switch_on(&self) -> bool {
        self.switch_on
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn focus(&self) -> ShowcaseFocus {
        self.focus
    }

    /// Select a tab directly. Out-of-range indices clamp to the last tab.
    pub fn select_tab(&mut self, index: usize) {
        self.active_tab = index.min(TABS.len() - 1);
    }

    /// Move the tab selection by `delta`, stopping at either end.
    pub fn step_tab(&mut self, delta: isize) {
        let target = self.active_tab.saturating_add_signed(delta);
        self.select_tab(target);
    }

    /// Set the slider from any integer, clamped to `[0, 100]`.
    pub fn set_slider(&mut self, value: i64) {
        self.slider = value.clamp(i64::from(SLIDER_MIN), i64::from(SLIDER_MAX)) as u8;
    }

    pub fn nudge_slider(&mut self, delta: i16) {
        self.set_slider(i64::from(self.slider) + i64::from(delta));
    }

    pub fn toggle_switch(&mut self) {
        self.switch_on = !self.switch_on;
    }

    pub fn toggle_checkbox(&mut self) {
        self.checked = !self.checked;
    }

    pub fn focus_next(&mut self) {
        let order = ShowcaseFocus::ORDER;
        self.focus = order[(self.focus.index() + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = ShowcaseFocus::ORDER;
        self.focus = order[(self.focus.index() + order.len() - 1) % order.len()];
    }

    pub fn active_tab_label(&self) -> &'static str {
        TABS[self.active_tab]
    }
}

/// Showcase sections with a heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Buttons,
    Form,
    Toggles,
    Slider,
    Cards,
}

/// Decorated heading for a section. Corporate uses its own wording.
pub fn heading(style: StyleId, section: Section) -> String {
    let text = match (style, section) {
        (StyleId::Corporate, Section::Buttons) => "Actions",
        (StyleId::Corporate, Section::Form) => "Data Entry",
        (StyleId::Corporate, Section::Toggles) => "Options",
        (StyleId::Corporate, Section::Slider) => "Parameters",
        (StyleId::Corporate, Section::Cards) => "Projects",
        (_, Section::Buttons) => "Button Styles",
        (_, Section::Form) => "Form Controls",
        (_, Section::Toggles) => "Selection Controls",
        (_, Section::Slider) => "Slider",
        (_, Section::Cards) => "Content Cards",
    };
    decorate(style, TextRole::Section, text)
}

pub fn title(style: StyleId) -> String {
    decorate(style, TextRole::Title, "Demo App")
}

pub fn tab_body(style: StyleId, state: &ShowcaseState) -> String {
    let text = format!("This is the {} tab.", state.active_tab_label());
    decorate(style, TextRole::Body, &text)
}

pub fn item_title(style: StyleId, n: usize) -> String {
    decorate(style, TextRole::ItemTitle(n), "Project")
}

pub fn item_body(style: StyleId) -> &'static str {
    match style {
        StyleId::Industrial => "Industrial-grade solution",
        StyleId::Corporate => "Enterprise project management",
        _ => "An example card body",
    }
}

pub fn alert_text(style: StyleId, kind: AlertKind) -> String {
    let text = match kind {
        AlertKind::Success => "Operation completed successfully!",
        AlertKind::Warning => "Please check your input",
        AlertKind::Error => "Something went wrong, try again",
        AlertKind::Info => "Here is a helpful tip",
    };
    decorate(style, TextRole::Alert(kind), text)
}

/// Form fields as (label, placeholder).
pub fn form_fields(style: StyleId) -> [(&'static str, &'static str); 3] {
    match style {
        StyleId::Industrial => [
            ("Username", "Enter username"),
            ("Email", "user@company.com"),
            ("Description", "Enter details..."),
        ],
        _ => [
            ("Username", "Please enter a username"),
            ("Email", "example@email.com"),
            ("Description", "Please enter a description..."),
        ],
    }
}

pub fn switch_label(style: StyleId) -> String {
    decorate(style, TextRole::Label, "Enable notifications")
}

pub const CHECKBOX_LABEL: &str = "I agree to the terms of service";

pub fn slider_label(style: StyleId) -> &'static str {
    match style {
        StyleId::Industrial => "⚡ Volume",
        _ => "Volume",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = ShowcaseState::new();
        assert_eq!(state.active_tab(), 0);
        assert_eq!(state.slider(), 50);
        assert!(!state.switch_on());
        assert!(!state.checked());
    }

    #[test]
    fn step_tab_stops_at_ends() {
        let mut state = ShowcaseState::new();
        state.step_tab(-1);
        assert_eq!(state.active_tab(), 0);
        state.step_tab(5);
        assert_eq!(state.active_tab(), 2);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut state = ShowcaseState::new();
        state.focus_prev();
        assert_eq!(state.focus(), ShowcaseFocus::Slider);
        state.focus_next();
        assert_eq!(state.focus(), ShowcaseFocus::Tabs);
    }

    #[test]
    fn corporate_headings_use_own_wording() {
        assert_eq!(heading(StyleId::Corporate, Section::Buttons), "Actions");
        assert_eq!(heading(StyleId::Flat, Section::Buttons), "Button Styles");
    }
}
