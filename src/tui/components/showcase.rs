//! Showcase panel: a demo app drawn with the active style and palette.
//!
//! The content is painted onto an off-screen canvas as tall as it needs to
//! be, then the visible window is copied into the frame. The canvas is drawn
//! twice: once to measure, once at its final height so containers close
//! right below their content.

use crossterm_actions::{InputEvent, NavigationEvent, TuiEvent};
use ratatui::Frame;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Scrollbar, ScrollbarOrientation, ScrollbarState},
};
use tuirealm::{
    Component, Event, MockComponent, State, StateValue,
    command::{Cmd, CmdResult, Direction as CmdDirection},
    event::Key,
    props::{AttrValue, Attribute, Props},
};

use crate::generate::ColorPalette;
use crate::layout::{Direction, ViewMode};
use crate::showcase::{
    self, CHECKBOX_LABEL, ITEM_COUNT, Section, ShowcaseFocus, ShowcaseState, TABS,
};
use crate::style::{
    AlertKind, ColorRole, ComponentKind, InteractionState, StyleId, StyleRule, StyleSheet,
    Variant, resolve, table,
};
use crate::tui::activities::{Msg, UserEvent};
use crate::tui::components::{common_action, is_focused};
use crate::tui::paint::{Painter, label, rgb, vertical_chrome};
use crate::tui::{AppAction, dispatcher};

/// Upper bound for the measuring pass.
const CANVAS_ROWS: u16 = 256;
/// Columns left of the content, the first one holding the focus marker.
const GUTTER: u16 = 2;
const SCROLL_STEP: u16 = 5;
const SLIDER_STEP: i16 = 5;

const BUTTONS: [(Variant, &str); 3] = [
    (Variant::Primary, "Primary"),
    (Variant::Secondary, "Secondary"),
    (Variant::Outline, "Outline"),
];

/// Rows for a widget with `rows` lines of content, its chrome and shadow row.
fn slot_rows(rule: &StyleRule, rows: u16) -> u16 {
    rows + vertical_chrome(rule) + 1
}

/// Write `text` at (x, y), clipped to `right` and the buffer.
fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, right: u16, style: Style) -> u16 {
    let right = right.min(buf.area.right());
    if y < buf.area.y || y >= buf.area.bottom() || x < buf.area.x || x >= right {
        return x;
    }
    buf.set_stringn(x, y, text, usize::from(right - x), style).0
}

/// Write cursor for the canvas.
struct Pen {
    x: u16,
    y: u16,
    width: u16,
    /// Column of the focus marker
    marker: u16,
}

impl Pen {
    fn right(&self) -> u16 {
        self.x + self.width
    }
}

pub struct Showcase {
    props: Props,
    palette: ColorPalette,
    style: StyleId,
    view: ViewMode,
    state: ShowcaseState,
    scroll: u16,
    max_scroll: u16,
}

impl Showcase {
    pub fn new(
        palette: ColorPalette,
        style: StyleId,
        view: ViewMode,
        state: ShowcaseState,
        scroll: u16,
    ) -> Self {
        Self {
            props: Props::default(),
            palette,
            style,
            view,
            state,
            scroll,
            max_scroll: u16::MAX,
        }
    }

    fn sheet(&self) -> &'static StyleSheet {
        table().sheet(self.style)
    }

    fn rule(
        &self,
        component: ComponentKind,
        variant: Variant,
        state: InteractionState,
    ) -> StyleRule {
        resolve(self.style, component, variant, state)
    }

    fn idle(&self, component: ComponentKind, variant: Variant) -> StyleRule {
        self.rule(component, variant, InteractionState::Idle)
    }

    /// Sub-widget drawn with hover treatment and the marker, if any.
    fn hovered(&self) -> Option<ShowcaseFocus> {
        is_focused(&self.props).then(|| self.state.focus())
    }

    fn toggle_state(&self, on: bool, widget: ShowcaseFocus) -> InteractionState {
        if on {
            InteractionState::Active
        } else if self.hovered() == Some(widget) {
            InteractionState::Hover
        } else {
            InteractionState::Idle
        }
    }

    fn mark(&self, buf: &mut Buffer, pen: &Pen, widget: ShowcaseFocus, y: u16) {
        if self.hovered() == Some(widget) {
            let style = Style::default()
                .fg(rgb(self.palette.primary))
                .add_modifier(Modifier::BOLD);
            put(buf, pen.marker, y, "▸", pen.marker + 1, style);
        }
    }

    fn render_canvas(&self, width: u16) -> Buffer {
        let mut scratch = Buffer::empty(Rect::new(0, 0, width, CANVAS_ROWS));
        let used = self.draw(&mut scratch);
        let height = used
            .saturating_add(slot_rows(&self.sheet().container, 0))
            .min(CANVAS_ROWS);
        let mut canvas = Buffer::empty(Rect::new(0, 0, width, height));
        self.draw(&mut canvas);
        canvas
    }

    /// Paint everything into `buf`. Returns the row below the last widget.
    fn draw(&self, buf: &mut Buffer) -> u16 {
        let sheet = self.sheet();
        let painter = Painter::new(&self.palette, self.palette.surface);
        let area = buf.area;
        let container = painter.surface(buf, area, &sheet.container);
        let inner = container.inner;
        let mut pen = Pen {
            x: inner.x + GUTTER,
            y: inner.y + 1,
            width: inner.width.saturating_sub(GUTTER * 2),
            marker: inner.x,
        };

        self.nav_bar(buf, &painter, sheet, &mut pen);
        self.tabs(buf, &painter, sheet, &mut pen);
        self.buttons(buf, &painter, sheet, &mut pen);
        self.form(buf, &painter, sheet, &mut pen);
        self.toggles(buf, &painter, sheet, &mut pen);
        self.slider(buf, &painter, sheet, &mut pen);
        self.cards(buf, &painter, sheet, &mut pen);
        self.alerts(buf, &painter, &mut pen);
        pen.y
    }

    fn heading(
        &self,
        buf: &mut Buffer,
        painter: &Painter,
        sheet: &StyleSheet,
        pen: &mut Pen,
        section: Section,
    ) {
        let style = painter.fg(sheet.text).add_modifier(Modifier::BOLD);
        let text = showcase::heading(self.style, section);
        put(buf, pen.x, pen.y, &text, pen.right(), style);
        pen.y += 2;
    }

    fn nav_bar(&self, buf: &mut Buffer, painter: &Painter, sheet: &StyleSheet, pen: &mut Pen) {
        let rule = sheet.nav_bar;
        let slot = Rect::new(pen.x, pen.y, pen.width, slot_rows(&rule, 1));
        let surface = painter.surface(buf, slot, &rule);
        let (y, right) = (surface.inner.y, surface.inner.right());

        let mut x = surface.inner.x + 1;
        for role in [ColorRole::Error, ColorRole::Warning, ColorRole::Success] {
            x = put(buf, x, y, "● ", right, painter.fg(role));
        }
        let title = label(&rule, &showcase::title(self.style));
        put(buf, x + 1, y, &title, right, painter.text_style(&rule));
        pen.y = slot.bottom() + 1;
    }

    fn tabs(&self, buf: &mut Buffer, painter: &Painter, sheet: &StyleSheet, pen: &mut Pen) {
        let active = self.state.active_tab();
        let rules: Vec<StyleRule> = (0..TABS.len())
            .map(|i| {
                let state = if i == active {
                    InteractionState::Active
                } else {
                    InteractionState::Idle
                };
                self.rule(ComponentKind::Tab, Variant::Default, state)
            })
            .collect();
        let tab_rows = rules.iter().map(|r| slot_rows(r, 1)).max().unwrap_or(2);

        let bar = sheet.tab_bar;
        let slot = Rect::new(pen.x, pen.y, pen.width, tab_rows + slot_rows(&bar, 0));
        let surface = painter.surface(buf, slot, &bar);
        let inner = surface.inner;

        let mut x = inner.x;
        for (name, rule) in TABS.iter().zip(&rules) {
            let text = label(rule, name);
            let width = (text.chars().count() as u16 + 5).min(inner.right().saturating_sub(x));
            if width == 0 {
                break;
            }
            let slot = Rect::new(x, inner.y, width, tab_rows.min(inner.height));
            let tab = painter.surface(buf, slot, rule);
            let style = painter.text_style(rule);
            put(buf, tab.inner.x + 1, tab.inner.y, &text, tab.inner.right(), style);
            x += width;
        }
        self.mark(buf, pen, ShowcaseFocus::Tabs, inner.y);

        pen.y = slot.bottom();
        let body = showcase::tab_body(self.style, &self.state);
        put(buf, pen.x, pen.y, &body, pen.right(), painter.fg(sheet.text));
        pen.y += 2;
    }

    fn buttons(&self, buf: &mut Buffer, painter: &Painter, sheet: &StyleSheet, pen: &mut Pen) {
        self.heading(buf, painter, sheet, pen, Section::Buttons);
        let rules = BUTTONS.map(|(variant, _)| self.idle(ComponentKind::Button, variant));

        let draw = |buf: &mut Buffer, slot: Rect, rule: &StyleRule, name: &str| {
            let surface = painter.surface(buf, slot, rule);
            let text = label(rule, name);
            let len = text.chars().count() as u16;
            let x = surface.inner.x + surface.inner.width.saturating_sub(len) / 2;
            let style = painter.text_style(rule);
            put(buf, x, surface.inner.y, &text, surface.inner.right(), style);
        };

        match self.view.button_direction() {
            Direction::Row => {
                let rows = rules.iter().map(|r| slot_rows(r, 1)).max().unwrap_or(2);
                let mut x = pen.x;
                for ((_, name), rule) in BUTTONS.iter().zip(&rules) {
                    let width = (name.len() as u16 + 7).min(pen.right().saturating_sub(x));
                    draw(buf, Rect::new(x, pen.y, width, rows), rule, name);
                    x += width + 1;
                }
                pen.y += rows + 1;
            }
            Direction::Column => {
                for ((_, name), rule) in BUTTONS.iter().zip(&rules) {
                    let rows = slot_rows(rule, 1);
                    draw(buf, Rect::new(pen.x, pen.y, pen.width, rows), rule, name);
                    pen.y += rows;
                }
                pen.y += 1;
            }
        }
    }

    fn form(&self, buf: &mut Buffer, painter: &Painter, sheet: &StyleSheet, pen: &mut Pen) {
        self.heading(buf, painter, sheet, pen, Section::Form);
        let card = self.idle(ComponentKind::Card, Variant::Default);
        let input = self.idle(ComponentKind::Input, Variant::Default);
        let fields = showcase::form_fields(self.style);
        let input_rows = slot_rows(&input, 1);
        let body_rows = fields.len() as u16 * (input_rows + 1);

        let slot = Rect::new(pen.x, pen.y, pen.width, body_rows + 2 + slot_rows(&card, 0));
        let surface = painter.surface(buf, slot, &card);
        let x = surface.inner.x + 2;
        let width = surface.inner.width.saturating_sub(4);
        let mut y = surface.inner.y + 1;
        for (name, placeholder) in fields {
            put(buf, x, y, name, x + width, painter.fg(sheet.text_secondary));
            y += 1;
            let field = painter.surface(buf, Rect::new(x, y, width, input_rows), &input);
            put(
                buf,
                field.inner.x + 1,
                field.inner.y,
                placeholder,
                field.inner.right(),
                painter.fg(ColorRole::TextSecondary).add_modifier(Modifier::ITALIC),
            );
            y += input_rows;
        }
        pen.y = slot.bottom() + 1;
    }

    fn toggles(&self, buf: &mut Buffer, painter: &Painter, sheet: &StyleSheet, pen: &mut Pen) {
        self.heading(buf, painter, sheet, pen, Section::Toggles);
        let text = painter.fg(sheet.text);

        let on = self.state.switch_on();
        let rule = self.rule(
            ComponentKind::Switch,
            Variant::Default,
            self.toggle_state(on, ShowcaseFocus::Switch),
        );
        let rows = slot_rows(&rule, 1);
        let slot = Rect::new(pen.x, pen.y, 8.min(pen.width), rows);
        let surface = painter.surface(buf, slot, &rule);
        let knob = if on {
            surface.inner.right().saturating_sub(2)
        } else {
            surface.inner.x + 1
        };
        put(buf, knob, surface.inner.y, "●", surface.inner.right(), painter.text_style(&rule));
        let caption = showcase::switch_label(self.style);
        put(buf, slot.right() + 1, surface.inner.y, &caption, pen.right(), text);
        self.mark(buf, pen, ShowcaseFocus::Switch, surface.inner.y);
        pen.y += rows;

        let checked = self.state.checked();
        let rule = self.rule(
            ComponentKind::Checkbox,
            Variant::Default,
            self.toggle_state(checked, ShowcaseFocus::Checkbox),
        );
        let rows = 1 + vertical_chrome(&rule);
        let slot = Rect::new(pen.x, pen.y, 4.min(pen.width), rows);
        let surface = painter.surface(buf, slot, &rule);
        if checked {
            let x = surface.inner.x + surface.inner.width.saturating_sub(1) / 2;
            put(buf, x, surface.inner.y, "✓", surface.inner.right(), painter.text_style(&rule));
        }
        put(buf, slot.right() + 2, surface.inner.y, CHECKBOX_LABEL, pen.right(), text);
        self.mark(buf, pen, ShowcaseFocus::Checkbox, surface.inner.y);
        pen.y += rows + 1;
    }

    fn slider(&self, buf: &mut Buffer, painter: &Painter, sheet: &StyleSheet, pen: &mut Pen) {
        self.heading(buf, painter, sheet, pen, Section::Slider);
        let value = self.state.slider();
        let caption = format!("{}: {value}%", showcase::slider_label(self.style));
        put(buf, pen.x, pen.y, &caption, pen.right(), painter.fg(sheet.text));
        pen.y += 1;

        let rule = self.idle(ComponentKind::Slider, Variant::Default);
        let width = pen.width.max(1);
        let span = f32::from(width.saturating_sub(1).max(1));
        let thumb = (u32::from(width - 1) * u32::from(value) / 100) as u16;
        let track = painter.fg(ColorRole::Border);
        for dx in 0..width {
            let t = f32::from(dx) / span;
            let filled = painter
                .fill_at(&rule, self.palette.surface, t)
                .unwrap_or(self.palette.primary);
            let (symbol, style) = match dx.cmp(&thumb) {
                std::cmp::Ordering::Less => ("━", Style::default().fg(rgb(filled))),
                std::cmp::Ordering::Equal => ("●", Style::default().fg(rgb(filled))),
                std::cmp::Ordering::Greater => ("─", track),
            };
            put(buf, pen.x + dx, pen.y, symbol, pen.right(), style);
        }
        self.mark(buf, pen, ShowcaseFocus::Slider, pen.y);
        pen.y += 2;
    }

    fn cards(&self, buf: &mut Buffer, painter: &Painter, sheet: &StyleSheet, pen: &mut Pen) {
        self.heading(buf, painter, sheet, pen, Section::Cards);
        let rule = self.idle(ComponentKind::ItemCard, Variant::Default);
        let columns = self.view.card_columns() as u16;
        let width = pen.width.saturating_sub(columns - 1) / columns;
        let rows = slot_rows(&rule, 2);

        for i in 0..ITEM_COUNT {
            let (row, column) = (i as u16 / columns, i as u16 % columns);
            let slot = Rect::new(pen.x + column * (width + 1), pen.y + row * rows, width, rows);
            let surface = painter.surface(buf, slot, &rule);
            let (x, right) = (surface.inner.x + 1, surface.inner.right());
            let title = label(&rule, &showcase::item_title(self.style, i + 1));
            let bold = painter.text_style(&rule).add_modifier(Modifier::BOLD);
            put(buf, x, surface.inner.y, &title, right, bold);
            let body = showcase::item_body(self.style);
            put(buf, x, surface.inner.y + 1, body, right, painter.fg(sheet.text_secondary));
        }
        let grid_rows = (ITEM_COUNT as u16).div_ceil(columns);
        pen.y += grid_rows * rows + 1;
    }

    fn alerts(&self, buf: &mut Buffer, painter: &Painter, pen: &mut Pen) {
        for kind in AlertKind::ALL {
            let rule = self.idle(ComponentKind::Alert, Variant::Alert(kind));
            let icon = self.idle(ComponentKind::AlertIcon, Variant::Alert(kind));
            let rows = slot_rows(&rule, 1);
            let slot = Rect::new(pen.x, pen.y, pen.width, rows);
            let surface = painter.surface(buf, slot, &rule);
            let (y, right) = (surface.inner.y, surface.inner.right());

            let chip = match painter.fill_at(&icon, surface.bg, 0.5) {
                Some(bg) => painter.text_style(&icon).bg(rgb(bg)),
                None => painter.text_style(&icon),
            };
            let x = put(buf, surface.inner.x + 1, y, &format!(" {} ", kind.icon()), right, chip);
            let text = label(&rule, &showcase::alert_text(self.style, kind));
            put(buf, x + 1, y, &text, right, painter.text_style(&rule));
            pen.y += rows;
        }
        pen.y += 1;
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll));
        self.scroll = target as u16;
    }
}

impl MockComponent for Showcase {
    fn view(&mut self, frame: &mut Frame, area: Rect) {
        let focused = is_focused(&self.props);
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let title = format!(
            " {} · {} ",
            self.style.profile().display_name,
            self.view.name()
        );
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = self
            .view
            .max_width()
            .map_or(inner.width, |max| max.min(inner.width));
        let x = inner.x + (inner.width - width) / 2;
        let canvas = self.render_canvas(width);

        let total = canvas.area.height;
        self.max_scroll = total.saturating_sub(inner.height);
        self.scroll = self.scroll.min(self.max_scroll);
        let rows = inner.height.min(total - self.scroll);

        let buf = frame.buffer_mut();
        for dy in 0..rows {
            for dx in 0..width {
                buf[(x + dx, inner.y + dy)] = canvas[(dx, self.scroll + dy)].clone();
            }
        }

        if total > inner.height {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
            let mut state = ScrollbarState::new(usize::from(self.max_scroll))
                .position(usize::from(self.scroll));
            frame.render_stateful_widget(scrollbar, area, &mut state);
        }
    }

    fn query(&self, attr: Attribute) -> Option<AttrValue> {
        self.props.get(attr)
    }

    fn attr(&mut self, attr: Attribute, value: AttrValue) {
        self.props.set(attr, value);
    }

    fn state(&self) -> State {
        State::One(StateValue::U16(self.scroll))
    }

    fn perform(&mut self, cmd: Cmd) -> CmdResult {
        match cmd {
            Cmd::Move(CmdDirection::Left) => match self.state.focus() {
                ShowcaseFocus::Tabs => self.state.step_tab(-1),
                ShowcaseFocus::Slider => self.state.nudge_slider(-SLIDER_STEP),
                _ => return CmdResult::None,
            },
            Cmd::Move(CmdDirection::Right) => match self.state.focus() {
                ShowcaseFocus::Tabs => self.state.step_tab(1),
                ShowcaseFocus::Slider => self.state.nudge_slider(SLIDER_STEP),
                _ => return CmdResult::None,
            },
            Cmd::Move(CmdDirection::Up) => self.state.focus_prev(),
            Cmd::Move(CmdDirection::Down) => self.state.focus_next(),
            Cmd::Toggle => match self.state.focus() {
                ShowcaseFocus::Switch => self.state.toggle_switch(),
                ShowcaseFocus::Checkbox => self.state.toggle_checkbox(),
                _ => return CmdResult::None,
            },
            Cmd::Scroll(CmdDirection::Up) => {
                self.scroll_by(-i32::from(SCROLL_STEP));
                return CmdResult::Changed(self.state());
            }
            Cmd::Scroll(CmdDirection::Down) => {
                self.scroll_by(i32::from(SCROLL_STEP));
                return CmdResult::Changed(self.state());
            }
            _ => return CmdResult::None,
        }
        CmdResult::Changed(self.state())
    }
}

impl Component<Msg, UserEvent> for Showcase {
    fn on(&mut self, ev: Event<UserEvent>) -> Option<Msg> {
        if !is_focused(&self.props) {
            return None;
        }

        let Event::Keyboard(key_event) = ev else {
            return None;
        };

        let cmd = match key_event.code {
            Key::PageUp => Some(Cmd::Scroll(CmdDirection::Up)),
            Key::PageDown => Some(Cmd::Scroll(CmdDirection::Down)),
            Key::Char(' ') => Some(Cmd::Toggle),
            _ => None,
        };
        let cmd = match cmd {
            Some(cmd) => cmd,
            None => match dispatcher().dispatch(&key_event)? {
                AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Left)) => {
                    Cmd::Move(CmdDirection::Left)
                }
                AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Right)) => {
                    Cmd::Move(CmdDirection::Right)
                }
                AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Up)) => {
                    Cmd::Move(CmdDirection::Up)
                }
                AppAction::Tui(TuiEvent::Navigation(NavigationEvent::Down)) => {
                    Cmd::Move(CmdDirection::Down)
                }
                AppAction::Tui(TuiEvent::Input(InputEvent::Confirm)) => Cmd::Toggle,
                other => return common_action(&other),
            },
        };

        let scrolling = matches!(cmd, Cmd::Scroll(_));
        match self.perform(cmd) {
            CmdResult::None => None,
            _ if scrolling => Some(Msg::ShowcaseScrolled(self.scroll)),
            _ => Some(Msg::ShowcaseChanged(self.state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::generate_palette;
    use crate::seed::SeedColor;

    fn showcase(style: StyleId, view: ViewMode) -> Showcase {
        let palette = generate_palette(SeedColor::default());
        Showcase::new(palette, style, view, ShowcaseState::new(), 0)
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn canvas_fits_every_style() {
        for style in StyleId::ALL {
            for view in [ViewMode::Desktop, ViewMode::Mobile] {
                let canvas = showcase(style, view).render_canvas(60);
                assert!(canvas.area.height < CANVAS_ROWS, "{style} {view} overflowed");
                assert!(canvas.area.height > 30);
            }
        }
    }

    #[test]
    fn canvas_shows_title_and_alerts() {
        let canvas = showcase(StyleId::Flat, ViewMode::Desktop).render_canvas(70);
        let text: Vec<String> = (0..canvas.area.height).map(|y| row_text(&canvas, y)).collect();
        assert!(text.iter().any(|row| row.contains("Demo App")));
        assert!(text.iter().any(|row| row.contains("Operation completed successfully!")));
        assert!(text.iter().any(|row| row.contains("This is the Home tab.")));
    }

    #[test]
    fn left_right_adjust_the_focused_widget() {
        let mut panel = showcase(StyleId::Flat, ViewMode::Desktop);
        panel.perform(Cmd::Move(CmdDirection::Right));
        assert_eq!(panel.state.active_tab(), 1);

        // Tabs -> Switch -> Checkbox -> Slider
        for _ in 0..3 {
            panel.perform(Cmd::Move(CmdDirection::Down));
        }
        assert_eq!(panel.state.focus(), ShowcaseFocus::Slider);
        panel.perform(Cmd::Move(CmdDirection::Left));
        assert_eq!(panel.state.slider(), 45);
    }

    #[test]
    fn toggle_only_applies_to_switch_and_checkbox() {
        let mut panel = showcase(StyleId::Ios, ViewMode::Mobile);
        assert_eq!(panel.perform(Cmd::Toggle), CmdResult::None);
        panel.perform(Cmd::Move(CmdDirection::Down));
        panel.perform(Cmd::Toggle);
        assert!(panel.state.switch_on());
    }

    #[test]
    fn scroll_is_clamped() {
        let mut panel = showcase(StyleId::Material, ViewMode::Desktop);
        panel.max_scroll = 7;
        panel.perform(Cmd::Scroll(CmdDirection::Down));
        panel.perform(Cmd::Scroll(CmdDirection::Down));
        assert_eq!(panel.scroll, 7);
        panel.perform(Cmd::Scroll(CmdDirection::Up));
        panel.perform(Cmd::Scroll(CmdDirection::Up));
        assert_eq!(panel.scroll, 0);
    }
}
