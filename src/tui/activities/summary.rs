//! Summary activity - the exportable text summary, scrollable and copyable.

use std::io::Stdout;
use std::time::{Duration, Instant};

use color_eyre::eyre::{Result, eyre};
use crossterm_actions::{NavigationEvent, TuiEvent};
use ratatui::{
    Terminal,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use tuirealm::{
    Application, Component, Event, EventListenerCfg, MockComponent, PollStrategy, State,
    StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    event::Key,
    props::{AttrValue, Attribute, Props},
};

use super::main::Msg as MainMsg;
use crate::tui::activity::{Activity, Context, ExitReason};
use crate::tui::components::{SUMMARY_FOOTER_ACTIONS, format_footer};
use crate::tui::{AppAction, dispatcher, handle_global_app_events};

// ============================================================================
// Component identifiers (scoped to SummaryActivity)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Id {
    SummaryView,
}

// ============================================================================
// Messages (scoped to SummaryActivity)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Quit,
    Back,
    Copy,
    ScrollUp,
    ScrollDown,
}

// ============================================================================
// User events (required by tui-realm)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserEvent {}

// ============================================================================
// SummaryView Component
// ============================================================================

pub struct SummaryView {
    props: Props,
    lines: Vec<String>,
    scroll: usize,
    visible_height: usize,
}

impl SummaryView {
    pub fn new(text: &str) -> Self {
        Self {
            props: Props::default(),
            lines: text.lines().map(str::to_string).collect(),
            scroll: 0,
            visible_height: 20,
        }
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    fn scroll_down(&mut self) {
        let max_scroll = self.lines.len().saturating_sub(self.visible_height);
        self.scroll = (self.scroll + 1).min(max_scroll);
    }

    /// Underline-only lines mark the heading above them.
    fn styled_line(&self, index: usize) -> Line<'static> {
        let text = &self.lines[index];
        let is_heading = self
            .lines
            .get(index + 1)
            .is_some_and(|next| !next.is_empty() && next.chars().all(|c| c == '='));
        if is_heading || (text.ends_with(':') && !text.starts_with(' ')) {
            Line::from(Span::styled(
                text.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(text.clone())
        }
    }
}

impl MockComponent for SummaryView {
    fn view(&mut self, frame: &mut ratatui::Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.visible_height = inner.height as usize;
        let max_scroll = self.lines.len().saturating_sub(self.visible_height);
        self.scroll = self.scroll.min(max_scroll);

        let visible_lines: Vec<Line> = (self.scroll..self.lines.len())
            .take(self.visible_height)
            .map(|i| self.styled_line(i))
            .collect();
        frame.render_widget(Paragraph::new(visible_lines), inner);

        // Scrollbar
        if self.lines.len() > self.visible_height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.scroll);
            frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.scroll))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Scroll(CmdDirection::Up) => {
                self.scroll_up();
                CmdResult::Changed(self.state())
            }
            Cmd::Scroll(CmdDirection::Down) => {
                self.scroll_down();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for SummaryView {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Esc is not mapped in the dispatcher
        if key_event.code == Key::Esc {
            return Some(Msg::Back);
        }

        let action = dispatcher().dispatch(&key_event)?;

        if let Some(msg) = handle_global_app_events(&action) {
            // Convert global Msg to our local Msg
            return match msg {
                MainMsg::Quit => Some(Msg::Quit),
                MainMsg::CopySummary => Some(Msg::Copy),
                MainMsg::SwitchToSummary => Some(Msg::Back), // Toggle back
                _ => None,
            };
        }

        match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Scroll(CmdDirection::Up));
                Some(Msg::ScrollUp)
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Scroll(CmdDirection::Down));
                Some(Msg::ScrollDown)
            }
            _ => None,
        }
    }
}

// ============================================================================
// SummaryActivity
// ============================================================================

#[derive(Default)]
pub struct SummaryActivity {
    app: Option<Application<Id, Msg, UserEvent>>,
    context: Option<Context>,
    exit_reason: Option<ExitReason>,
}

impl SummaryActivity {
    fn create_application() -> Application<Id, Msg, UserEvent> {
        Application::init(
            EventListenerCfg::default()
                .crossterm_input_listener(Duration::from_millis(20), 10)
                .poll_timeout(Duration::from_millis(50)),
        )
    }
}

impl Activity for SummaryActivity {
    fn on_create(&mut self, context: Context) {
        let mut app = Self::create_application();
        let view = SummaryView::new(&context.model.summary());
        if let Err(e) = app.mount(Id::SummaryView, Box::new(view), vec![]) {
            tracing::error!("Failed to mount summary view: {}", e);
        }
        let _ = app.active(&Id::SummaryView);

        self.context = Some(context);
        self.app = Some(app);
    }

    fn on_draw(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let (Some(app), Some(context)) = (self.app.as_mut(), self.context.as_mut()) else {
            return Err(eyre!("Summary activity drawn before it was created"));
        };
        let model = &mut context.model;
        model.tick(Instant::now());

        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Title
                    Constraint::Min(5),    // Summary
                    Constraint::Length(1), // Status
                ])
                .split(area);

            let title = format!(
                " Summary - {} ",
                model.preview.style().profile().display_name
            );
            let title_widget =
                Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD));
            frame.render_widget(title_widget, rows[0]);

            app.view(&Id::SummaryView, frame, rows[1]);

            // Status bar
            let status = model
                .status()
                .unwrap_or_else(|| format_footer(SUMMARY_FOOTER_ACTIONS, &[("back", "Esc")]));
            let status_widget =
                Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
            frame.render_widget(status_widget, rows[2]);
        })?;

        // Process events through tui-realm
        match app.tick(PollStrategy::Once) {
            Ok(messages) => {
                for msg in messages {
                    match msg {
                        Msg::Quit => {
                            self.exit_reason = Some(ExitReason::Quit);
                            return Ok(());
                        }
                        Msg::Back => {
                            self.exit_reason = Some(ExitReason::SwitchToMain);
                            return Ok(());
                        }
                        Msg::Copy => model.copy_summary(),
                        Msg::ScrollUp | Msg::ScrollDown => {
                            // Already handled in component
                        }
                    }
                }
            }
            Err(_) => {
                // Timeout, continue
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

    #[test]
    fn scrolling_stops_at_the_last_page() {
        let text = (0..30).map(|i| format!("line {i}\n")).collect::<String>();
        let mut view = SummaryView::new(&text);
        view.visible_height = 10;
        for _ in 0..50 {
            view.perform(Cmd::Scroll(CmdDirection::Down));
        }
        assert_eq!(view.scroll, 20);
        view.perform(Cmd::Scroll(CmdDirection::Up));
        assert_eq!(view.scroll, 19);
    }

    #[test]
    fn title_underline_marks_a_heading() {
        let view = SummaryView::new("Title\n=====\nplain");
        assert!(view.styled_line(2).spans[0].style.add_modifier.is_empty());
        assert!(
            view.styled_line(0).spans[0]
                .style
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }
}
