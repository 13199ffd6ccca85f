//! Human-facing descriptions of each style and its text decoration.

use super::{AlertKind, StyleId};

/// Display metadata for a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    pub display_name: &'static str,
    pub description: &'static str,
    /// (component, trait) notes used in the exported summary
    pub traits: &'static [(&'static str, &'static str)],
    pub use_cases: &'static [&'static str],
}

const FLAT: StyleProfile = StyleProfile {
    display_name: "Flat",
    description: "Clean, modern flat design",
    traits: &[
        ("Buttons", "solid color blocks, medium radius, no shadow"),
        ("Cards", "2px neutral border, no shadow"),
        ("Inputs", "simple border with a focus ring"),
        ("Alerts", "left accent border on a light tint"),
    ],
    use_cases: &["SaaS dashboards", "Admin panels", "Documentation sites"],
};

const NEUMORPHIC: StyleProfile = StyleProfile {
    display_name: "Neumorphic",
    description: "Soft 3D embossed surfaces",
    traits: &[
        ("Buttons", "raised with paired soft shadows, inset when pressed"),
        ("Cards", "embossed on a matching light gray base"),
        ("Inputs", "recessed wells"),
        ("Alerts", "raised panels with inset icons"),
    ],
    use_cases: &["Smart home controls", "Music players", "Calculator apps"],
};

const GLASSMORPHIC: StyleProfile = StyleProfile {
    display_name: "Glassmorphic",
    description: "Translucent frosted glass",
    traits: &[
        ("Buttons", "translucent with a light edge and backdrop blur"),
        ("Cards", "frosted panels over a color gradient"),
        ("Inputs", "see-through fields that brighten on focus"),
        ("Alerts", "blurred translucent banners"),
    ],
    use_cases: &["Landing pages", "Weather widgets", "Media overlays"],
};

const IOS: StyleProfile = StyleProfile {
    display_name: "iOS",
    description: "Apple system design language",
    traits: &[
        ("Buttons", "large radius, light shadow, shrink on press"),
        ("Cards", "white rounded panels with hairline borders"),
        ("Inputs", "light gray fields that turn white on focus"),
        ("Alerts", "rounded tinted banners with a colored outline"),
    ],
    use_cases: &["Mobile apps", "Settings screens", "Consumer products"],
};

const MATERIAL: StyleProfile = StyleProfile {
    display_name: "Material Design",
    description: "Google material design",
    traits: &[
        ("Buttons", "small radius, layered elevation, upper-case labels"),
        ("Cards", "paper sheets that rise on hover"),
        ("Inputs", "filled fields with an underline that thickens on focus"),
        ("Alerts", "left accent border with elevation"),
    ],
    use_cases: &["Android apps", "Productivity tools", "Enterprise web apps"],
};

const ROUNDED: StyleProfile = StyleProfile {
    display_name: "Rounded",
    description: "Large radius, soft shapes",
    traits: &[
        ("Buttons", "pill shaped, lift on hover"),
        ("Cards", "very large radius with diffuse shadows"),
        ("Inputs", "pill shaped fields"),
        ("Alerts", "rounded banners with a colored outline"),
    ],
    use_cases: &["Social apps", "Education products", "Kids and casual apps"],
};

const BRUTALIST: StyleProfile = StyleProfile {
    display_name: "Brutalist",
    description: "Raw, bold and unpolished",
    traits: &[
        ("Buttons", "thick black borders, solid offset shadow, upper-case bold"),
        ("Cards", "square panels with heavy offset shadows"),
        ("Inputs", "thick black outlines"),
        ("Alerts", "bold bracketed messages in black frames"),
    ],
    use_cases: &["Portfolios", "Art and fashion sites", "Indie products"],
};

const INDUSTRIAL: StyleProfile = StyleProfile {
    display_name: "Industrial",
    description: "Heavy machinery, metal finish",
    traits: &[
        ("Buttons", "dark metal gradients with beveled edges"),
        ("Cards", "dark plates with riveted borders"),
        ("Inputs", "recessed dark fields with white text"),
        ("Alerts", "tagged status lines with a colored edge"),
    ],
    use_cases: &["Monitoring consoles", "Manufacturing systems", "Developer tools"],
};

const CORPORATE: StyleProfile = StyleProfile {
    display_name: "Corporate",
    description: "Formal, rigorous enterprise site",
    traits: &[
        ("Buttons", "square corners with an emphasised bottom edge"),
        ("Cards", "thin gray borders with a top color stripe"),
        ("Inputs", "white fields with a bottom emphasis line"),
        ("Alerts", "left accent border on white"),
    ],
    use_cases: &["Enterprise portals", "Banking and finance", "Government services"],
};

impl StyleId {
    pub fn profile(self) -> &'static StyleProfile {
        match self {
            StyleId::Flat => &FLAT,
            StyleId::Neumorphic => &NEUMORPHIC,
            StyleId::Glassmorphic => &GLASSMORPHIC,
            StyleId::Ios => &IOS,
            StyleId::Material => &MATERIAL,
            StyleId::Rounded => &ROUNDED,
            StyleId::Brutalist => &BRUTALIST,
            StyleId::Industrial => &INDUSTRIAL,
            StyleId::Corporate => &CORPORATE,
        }
    }
}

/// Where a piece of showcase text appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRole {
    /// Application title in the navigation bar
    Title,
    /// Heading of a showcase section
    Section,
    /// Title of the n-th content card (1-based)
    ItemTitle(usize),
    /// Tab body text
    Body,
    Alert(AlertKind),
    /// Toggle label
    Label,
}

/// Apply a style's wording and typographic decoration to `text`.
///
/// ```
/// use styleboard::style::{StyleId, TextRole, decorate};
///
/// assert_eq!(decorate(StyleId::Brutalist, TextRole::Title, "Demo App"), "/// Demo App ///");
/// assert_eq!(decorate(StyleId::Flat, TextRole::Title, "Demo App"), "Demo App");
/// ```
pub fn decorate(style: StyleId, role: TextRole, text: &str) -> String {
    match (style, role) {
        (StyleId::Brutalist, TextRole::Title) => format!("/// {text} ///"),
        (StyleId::Brutalist, TextRole::Section) => format!(">>> {} <<<", text.to_uppercase()),
        (StyleId::Brutalist, TextRole::ItemTitle(n)) => format!("[{n}] {text}"),
        (StyleId::Brutalist, TextRole::Body) => format!(">>> {text}"),
        (StyleId::Brutalist, TextRole::Alert(_)) => format!("[!] {text}"),

        (StyleId::Material, TextRole::ItemTitle(n)) => format!("{} {n}", text.to_uppercase()),
        (StyleId::Material, TextRole::Body) => format!("{text} Tap a tab above to switch."),
        (StyleId::Material, TextRole::Title | TextRole::Section | TextRole::Alert(_)) => {
            text.to_uppercase()
        }

        (StyleId::Industrial, TextRole::Title | TextRole::Section) => format!("⚙ {text}"),
        (StyleId::Industrial, TextRole::ItemTitle(n)) => format!("⚙ {text} #{n}"),
        (StyleId::Industrial, TextRole::Body) => format!("[INFO] {text}"),
        (StyleId::Industrial, TextRole::Alert(kind)) => {
            format!("[{}] {text}", kind.name().to_uppercase())
        }
        (StyleId::Industrial, TextRole::Label) => format!("[ ] {text}"),

        (StyleId::Corporate, TextRole::Title) => format!("{text} System"),
        (StyleId::Corporate, TextRole::ItemTitle(n)) => format!("{text} No. {n}"),
        (StyleId::Corporate, TextRole::Body) => format!("{text} Select a module above."),

        (_, TextRole::ItemTitle(n)) => format!("{text} {n}"),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_style_has_a_profile() {
        for style in StyleId::ALL {
            let profile = style.profile();
            assert!(!profile.display_name.is_empty());
            assert!(!profile.traits.is_empty());
            assert!(!profile.use_cases.is_empty());
        }
    }

    #[test]
    fn brutalist_sections_are_bracketed_and_upper_case() {
        assert_eq!(
            decorate(StyleId::Brutalist, TextRole::Section, "Content Cards"),
            ">>> CONTENT CARDS <<<"
        );
        assert_eq!(
            decorate(StyleId::Brutalist, TextRole::ItemTitle(2), "Project"),
            "[2] Project"
        );
        assert_eq!(
            decorate(StyleId::Brutalist, TextRole::Alert(AlertKind::Error), "Failed"),
            "[!] Failed"
        );
    }

    #[test]
    fn industrial_tags_alerts_by_kind() {
        assert_eq!(
            decorate(
                StyleId::Industrial,
                TextRole::Alert(AlertKind::Warning),
                "Check input"
            ),
            "[WARNING] Check input"
        );
    }

    #[test]
    fn plain_styles_number_items() {
        assert_eq!(
            decorate(StyleId::Ios, TextRole::ItemTitle(3), "Project"),
            "Project 3"
        );
        assert_eq!(
            decorate(StyleId::Corporate, TextRole::ItemTitle(3), "Project"),
            "Project No. 3"
        );
    }
}
