//! Translate renderer-independent [`StyleRule`]s into terminal cells.
//!
//! Fills are painted straight into the frame buffer so translucent and
//! gradient fills can blend with whatever is already behind them. Text is
//! drawn afterwards with foreground-only styles, leaving those fills intact.

use palette::Srgb;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use crate::generate::ColorPalette;
use crate::style::{
    Border, ColorRole, Fill, Motion, Radius, Shadow, Side, Sides, StyleRule, TextTransform, Weight,
};

const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
const WHITE: Srgb<u8> = Srgb::new(0xFF, 0xFF, 0xFF);

pub fn rgb(color: Srgb<u8>) -> Color {
    Color::Rgb(color.red, color.green, color.blue)
}

/// Mix `top` over `bottom` at opacity `alpha` (0..=1), per sRGB channel.
pub fn blend(top: Srgb<u8>, bottom: Srgb<u8>, alpha: f32) -> Srgb<u8> {
    let alpha = alpha.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (f32::from(a) * alpha + f32::from(b) * (1.0 - alpha)).round() as u8;
    Srgb::new(
        mix(top.red, bottom.red),
        mix(top.green, bottom.green),
        mix(top.blue, bottom.blue),
    )
}

/// Background already painted at a cell, if it is a true color.
fn backdrop_at(buf: &Buffer, x: u16, y: u16, fallback: Srgb<u8>) -> Srgb<u8> {
    if !buf.area.contains((x, y).into()) {
        return fallback;
    }
    match buf[(x, y)].bg {
        Color::Rgb(r, g, b) => Srgb::new(r, g, b),
        _ => fallback,
    }
}

/// Outcome of painting one widget surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    /// Content area inside borders and stripes
    pub inner: Rect,
    /// Representative background color under the content
    pub bg: Srgb<u8>,
}

/// Paints rules with one palette.
#[derive(Debug, Clone, Copy)]
pub struct Painter<'a> {
    palette: &'a ColorPalette,
    base: Srgb<u8>,
}

impl<'a> Painter<'a> {
    /// `base` is the color assumed behind cells that carry no true color.
    pub fn new(palette: &'a ColorPalette, base: Srgb<u8>) -> Self {
        Self { palette, base }
    }

    pub fn color(&self, role: ColorRole) -> Srgb<u8> {
        self.palette.resolve(role)
    }

    /// Fill color at horizontal position `t` (0..=1) over `backdrop`.
    pub fn fill_at(&self, rule: &StyleRule, backdrop: Srgb<u8>, t: f32) -> Option<Srgb<u8>> {
        let color = match rule.fill {
            Fill::None => return None,
            Fill::Solid(role) => self.color(role),
            Fill::Tint(role) => blend(self.color(role), WHITE, 0.12),
            Fill::Translucent(percent) => {
                let lift = if rule.blur { 10 } else { 0 };
                blend(WHITE, backdrop, f32::from(percent.saturating_add(lift)) / 100.0)
            }
            Fill::Gradient { from, via, to } => {
                let (from, to, t) = match via {
                    Some(via) if t < 0.5 => (self.color(from), self.color(via), t * 2.0),
                    Some(via) => (self.color(via), self.color(to), (t - 0.5) * 2.0),
                    None => (self.color(from), self.color(to), t),
                };
                blend(to, from, t)
            }
        };
        let color = match rule.shadow {
            Shadow::Neumorphic { inset: true } | Shadow::Bevel { inset: true } => {
                blend(BLACK, color, 0.06)
            }
            _ => color,
        };
        Some(match rule.motion {
            Motion::Dim => blend(color, backdrop, 0.8),
            _ => color,
        })
    }

    /// Foreground-only style for text drawn on a rule's surface.
    pub fn text_style(&self, rule: &StyleRule) -> Style {
        let mut style = Style::default().fg(rgb(self.color(rule.text)));
        if rule.weight >= Weight::Semibold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if rule.motion == Motion::Dim {
            style = style.add_modifier(Modifier::DIM);
        }
        style
    }

    /// Plain foreground style for a bare color role.
    pub fn fg(&self, role: ColorRole) -> Style {
        Style::default().fg(rgb(self.color(role)))
    }

    /// Paint shadow, fill, border and stripe of `rule` into `slot`.
    ///
    /// When the slot is large enough, one column on the right and one row at
    /// the bottom are kept for the shadow, and the body moves into them on
    /// [`Motion::Sink`].
    pub fn surface(&self, buf: &mut Buffer, slot: Rect, rule: &StyleRule) -> Surface {
        let slot = slot.intersection(buf.area);
        let body = body_rect(slot, rule);

        if let Some(shade) = self.shadow_color(rule.shadow, buf, slot) {
            let offset = Rect::new(body.x + 1, body.y + 1, body.width, body.height);
            buf.set_style(offset.intersection(slot), Style::default().bg(rgb(shade)));
        }

        let mid = body.x + body.width / 2;
        let backdrop_mid = backdrop_at(buf, mid, body.y, self.base);
        let bg = self.fill_at(rule, backdrop_mid, 0.5).unwrap_or(backdrop_mid);
        if !matches!(rule.fill, Fill::None) {
            let span = body.width.saturating_sub(1).max(1);
            for dx in 0..body.width {
                let t = f32::from(dx) / f32::from(span);
                for dy in 0..body.height {
                    let (x, y) = (body.x + dx, body.y + dy);
                    let backdrop = backdrop_at(buf, x, y, self.base);
                    if let Some(color) = self.fill_at(rule, backdrop, t) {
                        let cell = &mut buf[(x, y)];
                        cell.set_symbol(" ");
                        cell.set_bg(rgb(color));
                    }
                }
            }
        }

        let mut inner = body;
        if let Some(border) = rule.border {
            let block = Block::default()
                .borders(borders(border.sides))
                .border_type(border_type(&border, rule.radius))
                .border_style(Style::default().fg(rgb(self.color(border.color))));
            inner = block.inner(body);
            block.render(body, buf);
        }

        if let Some(stripe) = rule.stripe {
            let color = rgb(self.color(stripe.color));
            match stripe.side {
                Side::Left if body.width > 0 => {
                    let symbol = if stripe.width >= 4 { "▌" } else { "▏" };
                    for y in body.y..body.bottom() {
                        let cell = &mut buf[(body.x, y)];
                        cell.set_symbol(symbol);
                        cell.set_fg(color);
                    }
                    if inner.x == body.x {
                        inner.x += 1;
                        inner.width = inner.width.saturating_sub(1);
                    }
                }
                Side::Top | Side::Bottom if body.height > 0 => {
                    let (y, symbol) = match stripe.side {
                        Side::Top => (body.y, if stripe.width >= 3 { "▀" } else { "▔" }),
                        _ => (body.bottom() - 1, if stripe.width >= 3 { "▄" } else { "▁" }),
                    };
                    for x in body.x..body.right() {
                        let cell = &mut buf[(x, y)];
                        cell.set_symbol(symbol);
                        cell.set_fg(color);
                    }
                    if stripe.side == Side::Top && inner.y == body.y {
                        inner.y += 1;
                        inner.height = inner.height.saturating_sub(1);
                    } else if stripe.side == Side::Bottom && inner.bottom() == body.bottom() {
                        inner.height = inner.height.saturating_sub(1);
                    }
                }
                _ => {}
            }
        }

        Surface { inner, bg }
    }

    fn shadow_color(&self, shadow: Shadow, buf: &Buffer, slot: Rect) -> Option<Srgb<u8>> {
        let corner = (slot.right().saturating_sub(1), slot.bottom().saturating_sub(1));
        let behind = backdrop_at(buf, corner.0, corner.1, self.base);
        match shadow {
            Shadow::None | Shadow::Neumorphic { inset: true } | Shadow::Bevel { inset: true } => {
                None
            }
            Shadow::Offset { .. } => Some(BLACK),
            Shadow::Elevation { level } => {
                Some(blend(BLACK, behind, 0.08 * f32::from(level.min(3))))
            }
            Shadow::Soft | Shadow::Glass => Some(blend(BLACK, behind, 0.08)),
            Shadow::Neumorphic { inset: false } => Some(blend(BLACK, behind, 0.14)),
            Shadow::Bevel { inset: false } => Some(blend(BLACK, behind, 0.35)),
        }
    }
}

/// Apply the rule's text transform.
pub fn label(rule: &StyleRule, text: &str) -> String {
    match rule.transform {
        TextTransform::Uppercase => text.to_uppercase(),
        TextTransform::None => text.to_string(),
    }
}

/// Rows taken by the top and bottom border or stripe, for sizing slots.
pub fn vertical_chrome(rule: &StyleRule) -> u16 {
    let sides = rule.border.map(|b| b.sides);
    let stripe = rule.stripe.map(|s| s.side);
    let top = matches!(sides, Some(Sides::All | Sides::Open | Sides::Top))
        || stripe == Some(Side::Top);
    let bottom = matches!(sides, Some(Sides::All | Sides::Bottom)) || stripe == Some(Side::Bottom);
    u16::from(top) + u16::from(bottom)
}

fn body_rect(slot: Rect, rule: &StyleRule) -> Rect {
    let reserve = slot.width > 4 && slot.height > 2;
    let mut body = if reserve {
        Rect::new(slot.x, slot.y, slot.width - 1, slot.height - 1)
    } else {
        slot
    };
    match rule.motion {
        Motion::Sink if reserve => {
            body.x += 1;
            body.y += 1;
        }
        Motion::Shrink if body.width > 4 => {
            body.x += 1;
            body.width -= 2;
        }
        _ => {}
    }
    body
}

fn borders(sides: Sides) -> Borders {
    match sides {
        Sides::All => Borders::ALL,
        Sides::Open => Borders::LEFT | Borders::RIGHT | Borders::TOP,
        Sides::Top => Borders::TOP,
        Sides::Bottom => Borders::BOTTOM,
        Sides::Left => Borders::LEFT,
    }
}

fn border_type(border: &Border, radius: Radius) -> BorderType {
    if border.width >= 3 {
        BorderType::Thick
    } else if radius >= Radius::Md {
        BorderType::Rounded
    } else {
        BorderType::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_endpoints() {
        let red = Srgb::new(255, 0, 0);
        assert_eq!(blend(red, WHITE, 1.0), red);
        assert_eq!(blend(red, WHITE, 0.0), WHITE);
    }

    #[test]
    fn gradient_runs_from_first_to_last_stop() {
        let palette = ColorPalette::default();
        let painter = Painter::new(&palette, WHITE);
        let rule = StyleRule::new().fill(Fill::gradient(ColorRole::Primary, ColorRole::Accent));
        assert_eq!(painter.fill_at(&rule, WHITE, 0.0), Some(palette.primary));
        assert_eq!(painter.fill_at(&rule, WHITE, 1.0), Some(palette.accent));
    }

    #[test]
    fn thick_borders_win_over_radius() {
        let border = Border::new(3, ColorRole::Text);
        assert_eq!(border_type(&border, Radius::Full), BorderType::Thick);
        let thin = Border::new(1, ColorRole::Text);
        assert_eq!(border_type(&thin, Radius::Xl), BorderType::Rounded);
        assert_eq!(border_type(&thin, Radius::None), BorderType::Plain);
    }

    #[test]
    fn sink_moves_into_shadow_margin() {
        let slot = Rect::new(0, 0, 10, 4);
        let rule = StyleRule::new().motion(Motion::Sink);
        assert_eq!(body_rect(slot, &rule), Rect::new(1, 1, 9, 3));
    }
}
