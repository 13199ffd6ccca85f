//! Application model for the TUI.

use std::io::stdout;
use std::time::Instant;

use tuirealm::Update;

use crate::clipboard::{Clipboard, CopyJob, ExportStatus, NOTICE_DURATION, spawn_copy};
use crate::config::Selection;
use crate::preview::{Change, PreviewMsg, PreviewState};
use crate::summary;
use crate::validation::{ValidationResults, validate};

use super::activities::Msg;

/// Transient status line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub at: Instant,
}

/// Application model containing all state shared between activities.
pub struct Model {
    pub preview: PreviewState,
    pub validation: ValidationResults,
    pub export: ExportStatus,
    pub notice: Option<Notice>,
    pub show_help: bool,
    pub quit: bool,
    clipboard: Clipboard,
    copy_job: Option<CopyJob>,
}

impl Model {
    pub fn new(selection: Selection) -> Self {
        let preview = PreviewState::new(selection.seed, selection.style, selection.view);
        let validation = validate(preview.palette());
        Self {
            preview,
            validation,
            export: ExportStatus::Idle,
            notice: None,
            show_help: false,
            quit: false,
            clipboard: Clipboard::detect(),
            copy_job: None,
        }
    }

    /// Summary text for the current selection.
    pub fn summary(&self) -> String {
        summary::render(
            self.preview.palette(),
            self.preview.style(),
            self.preview.view(),
        )
    }

    /// Start a clipboard export unless one is still running.
    pub fn copy_summary(&mut self) {
        if self.copy_job.is_some() {
            return;
        }
        let text = self.summary();
        let mut out = stdout();
        self.copy_job = Some(spawn_copy(self.clipboard, text, &mut out));
        self.export = ExportStatus::Pending;
    }

    /// Per-frame housekeeping: collect copy results and expire notices.
    ///
    /// Returns whether anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if let Some(job) = self.copy_job.as_mut()
            && let Some(result) = job.poll()
        {
            self.export = ExportStatus::from_result(result, now);
            self.copy_job = None;
            changed = true;
        }
        changed |= self.export.tick(now);
        if self
            .notice
            .as_ref()
            .is_some_and(|n| now.saturating_duration_since(n.at) >= NOTICE_DURATION)
        {
            self.notice = None;
            changed = true;
        }
        changed
    }

    /// Status line text, most recent event first.
    pub fn status(&self) -> Option<String> {
        self.notice
            .as_ref()
            .map(|n| n.text.clone())
            .or_else(|| self.export.message())
    }

    fn apply(&mut self, msg: PreviewMsg) -> Option<Msg> {
        match self.preview.apply(msg) {
            Ok(Change::None) => None,
            Ok(change) => {
                if change == Change::Seed {
                    self.validation = validate(self.preview.palette());
                }
                Some(Msg::PreviewChanged)
            }
            Err(e) => {
                self.notice = Some(Notice {
                    text: format!("{e}; keeping {}", self.preview.seed()),
                    at: Instant::now(),
                });
                None
            }
        }
    }
}

impl Update<Msg> for Model {
    fn update(&mut self, msg: Option<Msg>) -> Option<Msg> {
        let msg = msg?;

        match msg {
            Msg::Quit => {
                self.quit = true;
                None
            }
            Msg::ShowHelp => {
                self.show_help = true;
                None
            }
            Msg::HideHelp => {
                self.show_help = false;
                None
            }

            // Root state changes
            Msg::SeedChanged(seed) => self.apply(PreviewMsg::SetSeed(seed)),
            Msg::CustomHex(input) => self.apply(PreviewMsg::SubmitHex(input)),
            Msg::StyleChanged(style) => self.apply(PreviewMsg::SetStyle(style)),
            Msg::NextStyle => self.apply(PreviewMsg::SetStyle(self.preview.style().next())),
            Msg::PrevStyle => self.apply(PreviewMsg::SetStyle(self.preview.style().prev())),
            Msg::ViewChanged(view) => self.apply(PreviewMsg::SetView(view)),
            Msg::ToggleView => self.apply(PreviewMsg::ToggleView),

            Msg::CopySummary => {
                self.copy_summary();
                None
            }

            // Handled by the activity
            Msg::FocusNext
            | Msg::FocusPrev
            | Msg::ShowcaseChanged(_)
            | Msg::ShowcaseScrolled(_)
            | Msg::SwitchToSummary
            | Msg::PreviewChanged => None,
        }
    }
}
