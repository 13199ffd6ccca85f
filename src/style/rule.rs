//! Renderer-independent visual attributes for one widget.

use serde::Serialize;

use super::{AlertKind, ColorRole};

/// Corner rounding, smallest to largest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Radius {
    #[default]
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
    Full,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Shadow {
    #[default]
    None,
    /// Diffuse low-opacity drop shadow
    Soft,
    /// Layered material shadow, level 1..=3
    Elevation { level: u8 },
    /// Paired light/dark shadows on a matching base
    Neumorphic { inset: bool },
    /// Solid black block offset down-right
    Offset { x: u8, y: u8 },
    /// Tinted glass glow
    Glass,
    /// Hard bottom edge with an inner highlight
    Bevel { inset: bool },
}

impl Shadow {
    pub fn is_none(&self) -> bool {
        matches!(self, Shadow::None)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Sides {
    #[default]
    All,
    /// Left, right and top
    Open,
    Top,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Top,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Border {
    pub width: u8,
    pub color: ColorRole,
    pub sides: Sides,
}

impl Border {
    pub const fn new(width: u8, color: ColorRole) -> Self {
        Self {
            width,
            color,
            sides: Sides::All,
        }
    }

    pub const fn sides(mut self, sides: Sides) -> Self {
        self.sides = sides;
        self
    }
}

/// Emphasis line drawn on one edge (tab underline, alert edge, card stripe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stripe {
    pub side: Side,
    pub width: u8,
    pub color: ColorRole,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum Fill {
    /// Inherit whatever is behind
    #[default]
    None,
    Solid(ColorRole),
    /// Color at low opacity over the surface
    Tint(ColorRole),
    /// White at the given opacity percent over the backdrop
    Translucent(u8),
    /// Linear gradient with an optional middle stop
    Gradient {
        from: ColorRole,
        via: Option<ColorRole>,
        to: ColorRole,
    },
}

impl Fill {
    pub const fn gradient(from: ColorRole, to: ColorRole) -> Self {
        Fill::Gradient {
            from,
            via: None,
            to,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    #[default]
    None,
    Uppercase,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
}

/// Positional response to hover or press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Motion {
    #[default]
    None,
    /// Moves up
    Lift,
    /// Moves down or down-right, into its own shadow
    Sink,
    /// Scales down slightly
    Shrink,
    /// Scales up slightly
    Grow,
    /// Reduced opacity
    Dim,
}

/// Visual attributes for one (style, component, variant, state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    pub radius: Radius,
    pub shadow: Shadow,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<Border>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe: Option<Stripe>,
    pub fill: Fill,
    pub text: ColorRole,
    pub transform: TextTransform,
    pub weight: Weight,
    pub blur: bool,
    pub motion: Motion,
}

impl Default for StyleRule {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleRule {
    pub const fn new() -> Self {
        Self {
            radius: Radius::None,
            shadow: Shadow::None,
            border: None,
            stripe: None,
            fill: Fill::None,
            text: ColorRole::Text,
            transform: TextTransform::None,
            weight: Weight::Regular,
            blur: false,
            motion: Motion::None,
        }
    }

    pub const fn radius(mut self, radius: Radius) -> Self {
        self.radius = radius;
        self
    }

    pub const fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = shadow;
        self
    }

    pub const fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub const fn stripe(mut self, side: Side, width: u8, color: ColorRole) -> Self {
        self.stripe = Some(Stripe { side, width, color });
        self
    }

    pub const fn fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }

    pub const fn text(mut self, text: ColorRole) -> Self {
        self.text = text;
        self
    }

    pub const fn uppercase(mut self) -> Self {
        self.transform = TextTransform::Uppercase;
        self
    }

    pub const fn weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub const fn blur(mut self) -> Self {
        self.blur = true;
        self
    }

    pub const fn motion(mut self, motion: Motion) -> Self {
        self.motion = motion;
        self
    }

    /// Whether the rule draws anything of its own beyond text.
    pub fn is_visible(&self) -> bool {
        !matches!(self.fill, Fill::None)
            || self.border.is_some()
            || self.stripe.is_some()
            || !self.shadow.is_none()
    }

    /// Every color role this rule references.
    pub fn roles(&self) -> Vec<ColorRole> {
        let mut roles = vec![self.text];
        match self.fill {
            Fill::Solid(c) | Fill::Tint(c) => roles.push(c),
            Fill::Gradient { from, via, to } => {
                roles.push(from);
                roles.extend(via);
                roles.push(to);
            }
            Fill::None | Fill::Translucent(_) => {}
        }
        roles.extend(self.border.map(|b| b.color));
        roles.extend(self.stripe.map(|s| s.color));
        roles
    }

    /// Substitute the alert placeholder in every color slot.
    pub fn for_alert(mut self, kind: AlertKind) -> Self {
        self.text = self.text.for_alert(kind);
        self.fill = match self.fill {
            Fill::Solid(c) => Fill::Solid(c.for_alert(kind)),
            Fill::Tint(c) => Fill::Tint(c.for_alert(kind)),
            Fill::Gradient { from, via, to } => Fill::Gradient {
                from: from.for_alert(kind),
                via: via.map(|v| v.for_alert(kind)),
                to: to.for_alert(kind),
            },
            other => other,
        };
        if let Some(border) = self.border.as_mut() {
            border.color = border.color.for_alert(kind);
        }
        if let Some(stripe) = self.stripe.as_mut() {
            stripe.color = stripe.color.for_alert(kind);
        }
        self
    }
}
