//! Control panel: seed picker, style selector and view toggle.

mod seed_picker;
mod style_selector;
mod view_toggle;

pub use seed_picker::SeedPicker;
pub use style_selector::StyleSelector;
pub use view_toggle::ViewToggle;
