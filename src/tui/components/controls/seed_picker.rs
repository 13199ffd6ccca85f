//! Seed color picker: eight presets plus a custom hex entry.

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
    command::{Cmd, CmdResult, Direction as CmdDirection},
    event::Key,
    props::{AttrValue, Attribute, Props},
};

use crate::generate::on_color;
use crate::preview::PRESETS;
use crate::seed::SeedColor;
use crate::tui::activities::{Msg, UserEvent};
use crate::tui::components::{common_action, is_focused};
use crate::tui::paint::rgb;
use crate::tui::{AppAction, dispatcher};

/// `#` plus six digits.
const MAX_ENTRY: usize = 7;

pub struct SeedPicker {
    props: Props,
    seed: SeedColor,
    /// Highlighted preset; `None` when the seed is custom
    selected: Option<usize>,
    editing: bool,
    buffer: String,
}

impl SeedPicker {
    pub fn new(seed: SeedColor) -> Self {
        Self {
            props: Props::default(),
            seed,
            selected: PRESETS.iter().position(|(_, preset)| *preset == seed),
            editing: false,
            buffer: String::new(),
        }
    }

    fn select(&mut self, index: usize) -> Option<Msg> {
        let (_, seed) = PRESETS.get(index)?;
        self.selected = Some(index);
        self.seed = *seed;
        Some(Msg::SeedChanged(*seed))
    }

    fn start_editing(&mut self) {
        self.editing = true;
        self.buffer = String::from("#");
    }

    fn type_char(&mut self, c: char) {
        if c == '#' && self.buffer.is_empty() {
            self.buffer.push(c);
        } else if c.is_ascii_hexdigit() && self.buffer.len() < MAX_ENTRY {
            self.buffer.push(c.to_ascii_uppercase());
        }
    }

    fn confirm_editing(&mut self) -> Msg {
        self.editing = false;
        Msg::CustomHex(std::mem::take(&mut self.buffer))
    }

    fn cancel_editing(&mut self) {
        self.editing = false;
        self.buffer.clear();
    }

    fn chips(&self, focused: bool) -> Line<'static> {
        let mut spans = Vec::with_capacity(PRESETS.len() * 2);
        for (i, (_, seed)) in PRESETS.iter().enumerate() {
            let color = seed.rgb();
            let mut style = Style::default().bg(rgb(color)).fg(rgb(on_color(color)));
            if self.selected == Some(i) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                if focused {
                    style = style.add_modifier(Modifier::REVERSED);
                }
            }
            spans.push(Span::styled(format!(" {} ", i + 1), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }
}

impl MockComponent for SeedPicker {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = is_focused(&self.props);
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title(" Seed color ")
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let name = self
            .selected
            .and_then(|i| PRESETS.get(i))
            .map_or("Custom", |(name, _)| *name);
        let current = Line::from(vec![
            Span::styled("  ", Style::default().bg(rgb(self.seed.rgb()))),
            Span::raw(format!(" {name} ")),
            Span::styled(self.seed.to_hex(), Style::default().fg(Color::Gray)),
        ]);

        let entry = if self.editing {
            Line::from(vec![
                Span::raw("Custom: "),
                Span::styled(
                    format!("{:<7}", self.buffer),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ),
            ])
        } else {
            Line::from(Span::styled(
                "Custom: Enter to type a hex color",
                Style::default().add_modifier(Modifier::DIM),
            ))
        };

        frame.render_widget(
            Paragraph::new(vec![self.chips(focused), current, entry]),
            inner,
        );
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::String(self.seed.to_hex()))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        let step = |selected: Option<usize>, forward: bool| {
            let len = PRESETS.len();
            match (selected, forward) {
                (Some(i), true) => (i + 1) % len,
                (Some(i), false) => (i + len - 1) % len,
                (None, true) => 0,
                (None, false) => len - 1,
            }
        };
        match cmd {
            Cmd::Move(CmdDirection::Left) => {
                self.select(step(self.selected, false));
                CmdResult::Changed(self.state())
            }
            Cmd::Move(CmdDirection::Right) => {
                self.select(step(self.selected, true));
                CmdResult::Changed(self.state())
            }
            _ => CmdResult::None,
        }
    }
}

impl Component<Msg, UserEvent> for SeedPicker {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        if !is_focused(&self.props) {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        // Editing mode takes raw key input
        if self.editing {
            match key_event.code {
                Key::Enter => return Some(self.confirm_editing()),
                Key::Esc => self.cancel_editing(),
                Key::Backspace => {
                    if self.buffer.len() > 1 {
                        self.buffer.pop();
                    }
                }
                Key::Char(c) => self.type_char(c),
                _ => {}
            }
            return None;
        }

        if let Key::Char(c) = key_event.code {
            if let Some(digit) = c.to_digit(10)
                && (1..=PRESETS.len() as u32).contains(&digit)
            {
                return self.select(digit as usize - 1);
            }
            if c == '#' {
                self.start_editing();
                return None;
            }
        }

        let action = dispatcher().dispatch(&key_event)?;

        match action {
            AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => {
                self.start_editing();
                None
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                self.perform(Cmd::Move(CmdDirection::Left));
                Some(Msg::SeedChanged(self.seed))
            }
            AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                self.perform(Cmd::Move(CmdDirection::Right));
                Some(Msg::SeedChanged(self.seed))
            }
            other => common_action(&other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_entry_keeps_only_hex_digits() {
        let mut picker = SeedPicker::new(SeedColor::default());
        picker.start_editing();
        for c in "1a2g3b#4c5d6".chars() {
            picker.type_char(c);
        }
        assert_eq!(picker.buffer, "#1A23B4");
        assert_eq!(picker.confirm_editing(), Msg::CustomHex("#1A23B4".to_string()));
        assert!(!picker.editing);
    }

    #[test]
    fn preset_steps_wrap() {
        let mut picker = SeedPicker::new(PRESETS[0].1);
        assert_eq!(picker.selected, Some(0));
        picker.perform(Cmd::Move(CmdDirection::Left));
        assert_eq!(picker.selected, Some(PRESETS.len() - 1));
        assert_eq!(picker.seed, PRESETS[PRESETS.len() - 1].1);
    }

    #[test]
    fn custom_seed_has_no_preset() {
        let picker = SeedPicker::new(SeedColor::new(0x12, 0x34, 0x56));
        assert_eq!(picker.selected, None);
    }
}
