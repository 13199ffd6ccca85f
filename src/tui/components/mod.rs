//! TUI components using tui-realm.

pub mod controls;
pub mod help;
pub mod palette;
pub mod showcase;

use crossterm_actions::{SelectionEvent, TuiEvent};
use tuirealm::props::{AttrValue, Attribute, Props};

use crate::tui::activities::Msg;
use crate::tui::{AppAction, handle_global_app_events};

pub use controls::{SeedPicker, StyleSelector, ViewToggle};
pub use help::{MAIN_FOOTER_ACTIONS, SUMMARY_FOOTER_ACTIONS, format_footer, render_help};
pub use palette::Palette;
pub use showcase::Showcase;

fn is_focused(props: &Props) -> bool {
    props
        .get_or(Attribute::Focus, AttrValue::Flag(false))
        .unwrap_flag()
}

/// Global actions and focus traversal, shared by every focusable component.
fn common_action(action: &AppAction) -> Option<Msg> {
    if let Some(msg) = handle_global_app_events(action) {
        return Some(msg);
    }
    match action {
        AppAction::Tui(TuiEvent::Selection(SelectionEvent::Next)) => Some(Msg::FocusNext),
        AppAction::Tui(TuiEvent::Selection(SelectionEvent::Prev)) => Some(Msg::FocusPrev),
        _ => None,
    }
}
