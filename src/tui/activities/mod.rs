//! Activity modules for the TUI.

pub mod main;
pub mod summary;

pub use main::MainActivity;
pub use main::{Msg, UserEvent};
pub use summary::SummaryActivity;
