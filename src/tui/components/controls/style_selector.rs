//! Style preset list with the selected preset's description.

use crossterm_actions::{NavigationEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    props::{AttrValue, Attribute, Props},
};

use crate::style::StyleId;
use crate::tui::activities::{Msg, UserEvent};
use crate::tui::components::{common_action, is_focused};
use crate::tui::{AppAction, dispatcher};

pub struct StyleSelector {
    props: Props,
    selected: StyleId,
}

impl StyleSelector {
    pub fn new(selected: StyleId) -> Self {
        Self {
            props: Props::default(),
            selected,
        }
    }
}

impl MockComponent for StyleSelector {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = is_focused(&self.props);
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(" Style ")
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [list_area, description_area] = Layout::vertical([
            Constraint::Length(StyleId::ALL.len() as u16),
            Constraint::Min(0),
        ])
        .areas(inner);

        let lines: Vec<Line> = StyleId::ALL
            .iter()
            .map(|style| {
                let name = style.profile().display_name;
                if *style == self.selected {
                    let style = if focused {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().add_modifier(Modifier::BOLD)
                    };
                    Line::from(Span::styled(format!("▸ {name}"), style))
                } else {
                    Line::from(format!("  {name}"))
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), list_area);

        let description = Paragraph::new(self.selected.profile().description)
            .style(Style::default().add_modifier(Modifier::DIM))
            .wrap(Wrap { trim: true });
        frame.render_widget(description, description_area);
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::Usize(self.selected.index()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Up) => {
                self.selected = self.selected.prev();
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Down) => {
                self.selected = self.selected.next();
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for StyleSelector {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        if !is_focused(&self.props) {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        let action = dispatcher().dispatch(&key_event)?;

        match action {
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                self.perform(Cmd::Move(CmdDirection::Up));
                Some(Msg::StyleChanged(self.selected))
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                self.perform(Cmd::Move(CmdDirection::Down));
                Some(Msg::StyleChanged(self.selected))
            }
            other => common_action(&other),
        }
    }
}
