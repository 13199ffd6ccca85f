//! Palette display Component showing the 13 derived colors and contrast checks.

use ratatui::Frame;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tuirealm::{
    Component, Event, MockComponent, State,
    command::{Cmd, CmdResult},
    props::{AttrValue, Attribute, Props},
};

use crate::generate::{ColorPalette, on_color};
use crate::seed::hex;
use crate::tui::activities::{Msg, UserEvent};
use crate::tui::paint::rgb;
use crate::validation::{ValidationResult, ValidationResults};

/// Read-only palette strip.
pub struct Palette {
    props: Props,
    palette: ColorPalette,
    validation: Option<ValidationResults>,
}

impl Palette {
    pub fn new(palette: ColorPalette) -> Self {
        Self {
            props: Props::default(),
            palette,
            validation: None,
        }
    }

    pub fn with_validation(mut self, validation: ValidationResults) -> Self {
        self.validation = Some(validation);
        self
    }

    fn swatch_line(name: &str, color: palette::Srgb<u8>) -> Line<'static> {
        let chip = Style::default().bg(rgb(color)).fg(rgb(on_color(color)));
        Line::from(vec![
            Span::styled(" Aa ", chip),
            Span::raw(format!(" {name:<14}")),
            Span::styled(hex(color), Style::default().fg(Color::Gray)),
        ])
    }

    fn check_line(result: &ValidationResult) -> Line<'static> {
        let (mark, style) = if result.passes {
            ("✓", Style::default().fg(Color::Green))
        } else {
            ("✗", Style::default().fg(Color::Red))
        };
        Line::from(vec![
            Span::styled(format!(" {mark} "), style),
            Span::raw(format!(
                "{}/{} ",
                result.pair.foreground.name(),
                result.pair.background.name()
            )),
            Span::styled(
                format!("Lc {:.0}", result.contrast.abs()),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ])
    }
}

impl MockComponent for Palette {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title(" Palette ").borders(Borders::ALL);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let entries = self.palette.entries();
        let [swatches, checks] = Layout::vertical([
            Constraint::Length(entries.len() as u16),
            Constraint::Min(0),
        ])
        .areas(inner);

        let lines: Vec<Line> = entries
            .iter()
            .map(|(name, color)| Self::swatch_line(name, *color))
            .collect();
        frame.render_widget(Paragraph::new(lines), swatches);

        if let Some(validation) = &self.validation {
            let lines: Vec<Line> = validation
                .required
                .iter()
                .chain(&validation.reference)
                .map(Self::check_line)
                .collect();
            frame.render_widget(Paragraph::new(lines), checks);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::None
    }

    fn perform(&mut self, _cmd: Cmd) -> CmdResult {
        CmdResult::None
    }
}

impl Component<Msg, UserEvent> for Palette {
    fn on(&mut self, _ev: Event<UserEvent>) -> Option<Msg> {
        // Read-only component, no events handled
        None
    }
}
