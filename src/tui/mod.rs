//! Interactive preview of style presets.
//!
//! Architecture: Activity-based with tui-realm for components.
//! Each screen (activity) has its own Application instance and message types;
//! the [`Model`] carrying the root preview state travels between them.

mod activities;
mod activity;
mod components;
mod model;
mod paint;

use std::io::stdout;
use std::sync::LazyLock;

use color_eyre::eyre::Result;
use crossterm_actions::{
    ActionBinding, ActionConfig, AppEvent, EditingMode, TuiEvent, TuiRealmDispatcher,
    defaults, keys,
};
use ratatui::{
    Terminal,
    crossterm::ExecutableCommand,
    crossterm::terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    },
    prelude::CrosstermBackend,
};

use crate::config::Selection;

pub use model::Model;

use activities::Msg;
use activity::{ActivityManager, Context};

// ============================================================================
// Event handling (shared across activities)
// ============================================================================

/// Unified application events - wraps TuiEvent + custom actions.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum AppAction {
    /// Standard TUI events (navigation, input, selection, app)
    Tui(TuiEvent),
    /// Copy the summary to the clipboard
    CopySummary,
    /// Show the summary screen
    Summary,
    /// Switch between desktop and mobile layout
    ToggleView,
    /// Select the next style preset
    NextStyle,
    /// Select the previous style preset
    PrevStyle,
}

/// Global dispatcher instance - shared by all components.
pub static DISPATCHER: LazyLock<TuiRealmDispatcher<AppAction>> = LazyLock::new(|| {
    let mut config = ActionConfig::new(EditingMode::Emacs);

    // Import all standard TuiEvent bindings wrapped in AppAction::Tui
    for binding in defaults::emacs_defaults().bindings() {
        config.bind(ActionBinding {
            action: AppAction::Tui(binding.action),
            keys: binding.keys.clone(),
            description: binding.description.clone(),
        });
    }

    config.bind(
        ActionBinding::builder()
            .action(AppAction::CopySummary)
            .key(keys::char('y'))
            .description("Copy summary to clipboard")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::Summary)
            .key(keys::char('s'))
            .description("Show summary")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::ToggleView)
            .key(keys::char('v'))
            .description("Toggle desktop/mobile view")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::PrevStyle)
            .key(keys::char('['))
            .description("Previous style")
            .build(),
    );
    config.bind(
        ActionBinding::builder()
            .action(AppAction::NextStyle)
            .key(keys::char(']'))
            .description("Next style")
            .build(),
    );

    config.compile();
    TuiRealmDispatcher::new(config)
});

/// Convenience function for components to access the dispatcher.
pub fn dispatcher() -> &'static TuiRealmDispatcher<AppAction> {
    &DISPATCHER
}

/// Handle global application events that are common across all components.
/// Returns Some(Msg) if the action was handled, None otherwise.
pub fn handle_global_app_events(action: &AppAction) -> Option<Msg> {
    match action {
        AppAction::Tui(TuiEvent::App(AppEvent::Quit)) => Some(Msg::Quit),
        AppAction::Tui(TuiEvent::App(AppEvent::Help)) => Some(Msg::ShowHelp),
        AppAction::CopySummary => Some(Msg::CopySummary),
        AppAction::Summary => Some(Msg::SwitchToSummary),
        AppAction::ToggleView => Some(Msg::ToggleView),
        AppAction::NextStyle => Some(Msg::NextStyle),
        AppAction::PrevStyle => Some(Msg::PrevStyle),
        _ => None,
    }
}

// ============================================================================
// TUI entry point
// ============================================================================

/// Run the interactive preview starting from `selection`.
pub fn run(selection: Selection) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let model = Model::new(selection);
    tracing::info!(seed = %selection.seed, style = %selection.style, view = %selection.view, "Preview started");

    let context = Context { model };
    let mut manager = ActivityManager::new(context);

    let result = manager.run(&mut terminal);

    // Cleanup terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}
