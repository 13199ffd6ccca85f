//! Main activity - control panel beside the live showcase.

use std::io::Stdout;
use std::time::{Duration, Instant};

use color_eyre::eyre::{Result, eyre};
use ratatui::{
    Terminal,
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Direction, Layout},
    prelude::CrosstermBackend,
    style::{Modifier, Style},
    widgets::Paragraph,
};
use tuirealm::{Application, EventListenerCfg, PollStrategy, Update};

use crate::layout::ViewMode;
use crate::seed::SeedColor;
use crate::showcase::ShowcaseState;
use crate::style::StyleId;
use crate::tui::Model;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{
    MAIN_FOOTER_ACTIONS, Palette, SeedPicker, Showcase, StyleSelector, ViewToggle, format_footer,
    render_help,
};

/// Width of the control column.
const CONTROLS_WIDTH: u16 = 46;

// ============================================================================
// Component identifiers (scoped to MainActivity)
// ============================================================================

/// Unique identifiers for all components in MainActivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    // Controls (editable)
    SeedPicker,
    StyleSelector,
    ViewToggle,

    // Preview
    Showcase,

    // Display panel (read-only)
    Palette,
}

// ============================================================================
// Messages (scoped to MainActivity)
// ============================================================================

/// All possible messages that can be sent in MainActivity.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    // Application control
    Quit,
    ShowHelp,
    HideHelp,

    // Focus/Navigation
    FocusNext,
    FocusPrev,

    // Root state changes
    SeedChanged(SeedColor),
    CustomHex(String),
    StyleChanged(StyleId),
    NextStyle,
    PrevStyle,
    ViewChanged(ViewMode),
    ToggleView,

    // Showcase-local state, kept by the activity across remounts
    ShowcaseChanged(ShowcaseState),
    ShowcaseScrolled(u16),

    // Export flow
    CopySummary,

    // Activity transition
    SwitchToSummary,

    // Chained after a root state change
    PreviewChanged,
}

// ============================================================================
// User events (required by tui-realm, currently unused)
// ============================================================================

/// Custom user events (currently unused, but required by tui-realm).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// Focus management (scoped to MainActivity)
// ============================================================================

/// All focusable component IDs in order.
const ALL_FOCUS_IDS: &[Id] = &[Id::SeedPicker, Id::StyleSelector, Id::ViewToggle, Id::Showcase];

/// Manages focus state for Tab navigation in MainActivity.
pub struct FocusManager {
    current_idx: usize,
}

impl FocusManager {
    pub fn new() -> Self {
        Self { current_idx: 0 }
    }

    /// Get the current focus component ID.
    pub fn current_focus(&self) -> Id {
        ALL_FOCUS_IDS
            .get(self.current_idx)
            .copied()
            .unwrap_or(Id::SeedPicker)
    }

    /// Move focus to next component and return its ID.
    pub fn focus_next(&mut self) -> Id {
        self.current_idx = (self.current_idx + 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }

    /// Move focus to previous component and return its ID.
    pub fn focus_prev(&mut self) -> Id {
        self.current_idx = (self.current_idx + ALL_FOCUS_IDS.len() - 1) % ALL_FOCUS_IDS.len();
        self.current_focus()
    }
}

impl Default for FocusManager {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MainActivity
// ============================================================================

/// The main preview activity.
#[derive(Default)]
pub struct MainActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    focus: FocusManager,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
    showcase: ShowcaseState,
    scroll: u16,
}

impl MainActivity {
    /// Create and configure the tui-realm application.
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }

    fn showcase(model: &Model, state: ShowcaseState, scroll: u16) -> Showcase {
        let preview = &model.preview;
        Showcase::new(
            *preview.palette(),
            preview.style(),
            preview.view(),
            state,
            scroll,
        )
    }

    fn palette(model: &Model) -> Palette {
        Palette::new(*model.preview.palette()).with_validation(model.validation.clone())
    }

    /// Mount all initial components.
    fn mount_components(
        app: &mut Application<Id, Msg, UserEvent>,
        model: &Model,
        showcase: ShowcaseState,
        scroll: u16,
    ) -> Result<()> {
        let preview = &model.preview;
        app.mount(
            Id::SeedPicker,
            Box::new(SeedPicker::new(preview.seed())),
            vec![],
        )?;
        app.mount(
            Id::StyleSelector,
            Box::new(StyleSelector::new(preview.style())),
            vec![],
        )?;
        app.mount(
            Id::ViewToggle,
            Box::new(ViewToggle::new(preview.view())),
            vec![],
        )?;
        app.mount(
            Id::Showcase,
            Box::new(Self::showcase(model, showcase, scroll)),
            vec![],
        )?;
        app.mount(Id::Palette, Box::new(Self::palette(model)), vec![])?;

        // Set initial focus
        app.active(&Id::SeedPicker)?;

        Ok(())
    }

    /// Remount every component from the current root state.
    fn sync_components(
        app: &mut Application<Id, Msg, UserEvent>,
        model: &Model,
        showcase: ShowcaseState,
        scroll: u16,
    ) -> Result<()> {
        let preview = &model.preview;
        app.remount(
            Id::SeedPicker,
            Box::new(SeedPicker::new(preview.seed())),
            vec![],
        )?;
        app.remount(
            Id::StyleSelector,
            Box::new(StyleSelector::new(preview.style())),
            vec![],
        )?;
        app.remount(
            Id::ViewToggle,
            Box::new(ViewToggle::new(preview.view())),
            vec![],
        )?;
        app.remount(
            Id::Showcase,
            Box::new(Self::showcase(model, showcase, scroll)),
            vec![],
        )?;
        app.remount(Id::Palette, Box::new(Self::palette(model)), vec![])?;
        Ok(())
    }
}

impl Activity for MainActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();
        if let Err(e) = Self::mount_components(&mut app, &context.model, self.showcase, self.scroll)
        {
            tracing::error!("Failed to mount components: {}", e);
        }

        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let (Some(app), Some(context)) = (self.app.as_mut(), self.context.as_mut()) else {
            return Err(eyre!("Main activity drawn before it was created"));
        };
        let model = &mut context.model;
        model.tick(Instant::now());

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            let main_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(10),   // Content
                    Constraint::Length(1), // Status
                ])
                .split(area);

            // Title bar
            let preview = &model.preview;
            let title = format!(
                " styleboard - {} - {} - {} ",
                preview.style().profile().display_name,
                preview.seed(),
                preview.view()
            );
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, main_rows[0]);

            // Content: controls | showcase
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(CONTROLS_WIDTH), Constraint::Min(20)])
                .split(main_rows[1]);

            let left_rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5),  // Seed picker
                    Constraint::Length(14), // Style selector
                    Constraint::Length(3),  // View toggle
                    Constraint::Min(4),     // Palette
                ])
                .split(cols[0]);

            app.view(&Id::SeedPicker, frame, left_rows[0]);
            app.view(&Id::StyleSelector, frame, left_rows[1]);
            app.view(&Id::ViewToggle, frame, left_rows[2]);
            app.view(&Id::Palette, frame, left_rows[3]);
            app.view(&Id::Showcase, frame, cols[1]);

            // Status bar
            let status = model
                .status()
                .unwrap_or_else(|| format_footer(MAIN_FOOTER_ACTIONS, &[("preset", "1-8")]));

            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, main_rows[2]);

            // Help modal overlay
            if model.show_help {
                render_help(frame);
            }
        })?;

        // Handle help modal events separately (intercepts all input when visible)
        if model.show_help {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') => {
                        model.update(Some(Msg::HideHelp));
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        // Use tick() - the canonical tui-realm heartbeat
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                let mut needs_sync = false;

                for msg in messages {
                    // Handle focus and showcase state at activity level
                    match &msg {
                        Msg::FocusNext => {
                            let next = self.focus.focus_next();
                            let _ = app.active(&next);
                        }
                        Msg::FocusPrev => {
                            let prev = self.focus.focus_prev();
                            let _ = app.active(&prev);
                        }
                        Msg::ShowcaseChanged(state) => self.showcase = *state,
                        Msg::ShowcaseScrolled(scroll) => self.scroll = *scroll,
                        Msg::SwitchToSummary => {
                            self.exit_reason = Some(ExitReason::SwitchToSummary);
                            return Ok(());
                        }
                        _ => {}
                    }

                    // Check for quit
                    if matches!(msg, Msg::Quit) {
                        self.exit_reason = Some(ExitReason::Quit);
                        return Ok(());
                    }

                    // Process through model, handle chained messages
                    let mut current = Some(msg);
                    while let Some(m) = current {
                        if matches!(m, Msg::PreviewChanged) {
                            needs_sync = true;
                        }
                        current = model.update(Some(m));
                    }
                }

                // Sync components after changes
                if needs_sync {
                    if let Err(e) =
                        Self::sync_components(app, model, self.showcase, self.scroll)
                    {
                        tracing::error!("Failed to remount components: {}", e);
                    }
                    // Restore focus after remounting
                    if let Err(e) = app.active(&self.focus.current_focus()) {
                        tracing::error!("Failed to restore focus: {}", e);
                    }
                }
            }
            Err(_) => {
                // Timeout is fine, just continue
            }
        }

        Ok(())
    }

    fn will_umount(&self) -> Option<&ExitReason> {
        self.exit_reason.as_ref()
    }

    fn on_destroy(&mut self) -> Option<Context> {
        self.app = None;
        self.context.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StyleboardConfig;

    #[test]
    fn focus_cycles_through_controls_and_showcase() {
        let mut focus = FocusManager::new();
        assert_eq!(focus.current_focus(), Id::SeedPicker);
        assert_eq!(focus.focus_next(), Id::StyleSelector);
        assert_eq!(focus.focus_next(), Id::ViewToggle);
        assert_eq!(focus.focus_next(), Id::Showcase);
        assert_eq!(focus.focus_next(), Id::SeedPicker);
        assert_eq!(focus.focus_prev(), Id::Showcase);
    }

    #[test]
    fn sync_mounts_missing_components_and_replaces_existing_ones() {
        let model = Model::new(StyleboardConfig::default().selection());
        let mut app: Application<Id, Msg, UserEvent> =
            Application::init(EventListenerCfg::default());

        MainActivity::sync_components(&mut app, &model, ShowcaseState::new(), 0).unwrap();
        assert!(app.mounted(&Id::Palette));
        assert!(app.mounted(&Id::Showcase));

        MainActivity::sync_components(&mut app, &model, ShowcaseState::new(), 3).unwrap();
        assert!(app.mounted(&Id::SeedPicker));
    }
}
