//! Plain-text summary of the current selection, for the clipboard.

use std::fmt;

use crate::generate::ColorPalette;
use crate::layout::ViewMode;
use crate::seed::hex;
use crate::style::StyleId;

/// Render the human-readable summary. Not meant to be parsed back.
pub fn render(palette: &ColorPalette, style: StyleId, view: ViewMode) -> String {
    Summary {
        palette,
        style,
        view,
    }
    .to_string()
}

/// The summary template over one selection.
struct Summary<'a> {
    palette: &'a ColorPalette,
    style: StyleId,
    view: ViewMode,
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let profile = self.style.profile();

        writeln!(f, "UI Style Preview Summary")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Style: {} ({})", profile.display_name, self.style.name())?;
        writeln!(f, "Description: {}", profile.description)?;
        writeln!(f, "View: {}", self.view.name())?;
        writeln!(f)?;
        writeln!(f, "Seed color: {}", hex(self.palette.primary))?;
        writeln!(f, "Palette:")?;
        for (name, color) in self.palette.entries() {
            writeln!(f, "  {name:<14} {}", hex(color))?;
        }
        writeln!(f)?;
        writeln!(f, "Component traits:")?;
        for (component, note) in profile.traits {
            writeln!(f, "  - {component}: {note}")?;
        }
        writeln!(f)?;
        writeln!(f, "Suggested use cases:")?;
        for case in profile.use_cases {
            writeln!(f, "  - {case}")?;
        }
        Ok(())
    }
}
