//! Desktop / mobile toggle.

use crossterm_actions::{InputEvent, NavigationEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult},
    event::Key,
    props::{AttrValue, Attribute, Props},
};

use crate::layout::ViewMode;
use crate::tui::activities::{Msg, UserEvent};
use crate::tui::components::{common_action, is_focused};
use crate::tui::{AppAction, dispatcher};

pub struct ViewToggle {
    props: Props,
    view: ViewMode,
}

impl ViewToggle {
    pub fn new(view: ViewMode) -> Self {
        Self {
            props: Props::default(),
            view,
        }
    }

    fn flip(&mut self) -> Msg {
        self.perform(Cmd::Toggle);
        Msg::ViewChanged(self.view)
    }
}

impl MockComponent for ViewToggle {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = is_focused(&self.props);
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(" View ")
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let option = |mode: ViewMode, label: &'static str| {
            if mode == self.view {
                let style = Style::default()
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                    .fg(if focused { Color::Cyan } else { Color::Reset });
                Span::styled(format!(" {label} "), style)
            } else {
                Span::styled(
                    format!(" {label} "),
                    Style::default().add_modifier(Modifier::DIM),
                )
            }
        };
        let line = Line::from(vec![
            option(ViewMode::Desktop, "Desktop"),
            Span::raw(" "),
            option(ViewMode::Mobile, "Mobile"),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::String(self.view.name().to_string()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Toggle => {
                self.view = self.view.toggle();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for ViewToggle {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        if !is_focused(&self.props) {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        if key_event.code == Key::Char(' ') {
            return Some(self.flip());
        }

        let action = dispatcher().dispatch(&key_event)?;

        match action {
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm))
            | AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left))
            | AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => Some(self.flip()),
            other => common_action(&other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_reports_the_new_view() {
        let mut toggle = ViewToggle::new(ViewMode::Desktop);
        assert_eq!(toggle.flip(), Msg::ViewChanged(ViewMode::Mobile));
        assert_eq!(toggle.flip(), Msg::ViewChanged(ViewMode::Desktop));
    }
}
