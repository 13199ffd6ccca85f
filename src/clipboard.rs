//! Best-effort clipboard export with a transient status notice.
//!
//! OSC 52 writes go straight to the terminal writer. External tools
//! (`pbcopy`, `wl-copy`, `xclip`/`xsel`, `clip`) run on a worker thread and
//! report back over a channel, so the event loop never waits on them.

use std::env;
use std::io::{IsTerminal, Write};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use thiserror::Error;

/// Environment variable overriding backend detection (`osc52`, `external`, `none`).
pub const ENV_CLIPBOARD: &str = "STYLEBOARD_CLIPBOARD";

/// How long a copied/failed notice stays visible.
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Common OSC 52 size limit (base64 payload bytes).
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard not available")]
    NotAvailable,
    #[error("OSC 52 payload too large ({0} > {max})", max = MAX_OSC52_PAYLOAD)]
    TooLarge(usize),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalTool {
    MacOS,
    Windows,
    Wayland,
    X11,
}

impl ExternalTool {
    fn available(self) -> bool {
        match self {
            ExternalTool::MacOS => cfg!(target_os = "macos") && command_exists("pbcopy"),
            ExternalTool::Windows => cfg!(target_os = "windows") && command_exists("clip"),
            ExternalTool::Wayland => {
                env::var_os("WAYLAND_DISPLAY").is_some() && command_exists("wl-copy")
            }
            ExternalTool::X11 => {
                env::var_os("DISPLAY").is_some()
                    && (command_exists("xclip") || command_exists("xsel"))
            }
        }
    }

    fn detect() -> Option<Self> {
        [
            ExternalTool::MacOS,
            ExternalTool::Windows,
            ExternalTool::Wayland,
            ExternalTool::X11,
        ]
        .into_iter()
        .find(|tool| tool.available())
    }

    fn copy(self, content: &str) -> Result<(), ClipboardError> {
        match self {
            ExternalTool::MacOS => run_with_input("pbcopy", &[], content),
            ExternalTool::Windows => run_with_input("clip", &[], content),
            ExternalTool::Wayland => run_with_input("wl-copy", &[], content),
            ExternalTool::X11 => run_with_input("xclip", &["-selection", "clipboard"], content)
                .or_else(|_| run_with_input("xsel", &["--clipboard", "--input"], content)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardBackend {
    Osc52,
    External(ExternalTool),
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clipboard {
    backend: ClipboardBackend,
}

impl Clipboard {
    pub const fn with_backend(backend: ClipboardBackend) -> Self {
        Self { backend }
    }

    /// Pick a backend: external tool, then OSC 52 when stdout is a terminal.
    pub fn detect() -> Self {
        let over = env::var(ENV_CLIPBOARD).ok();
        let clipboard = Self::detect_with(
            over.as_deref(),
            ExternalTool::detect(),
            std::io::stdout().is_terminal(),
        );
        tracing::debug!(backend = ?clipboard.backend, "Clipboard backend detected");
        clipboard
    }

    /// Detection with every environment input supplied by the caller.
    pub fn detect_with(
        over: Option<&str>,
        external: Option<ExternalTool>,
        is_terminal: bool,
    ) -> Self {
        let auto = match (external, is_terminal) {
            (Some(tool), _) => ClipboardBackend::External(tool),
            (None, true) => ClipboardBackend::Osc52,
            (None, false) => ClipboardBackend::Unavailable,
        };
        let backend = match over.map(str::to_ascii_lowercase).as_deref() {
            Some("osc52") => ClipboardBackend::Osc52,
            Some("external") => external
                .map(ClipboardBackend::External)
                .unwrap_or(ClipboardBackend::Unavailable),
            Some("none") => ClipboardBackend::Unavailable,
            Some(other) => {
                tracing::warn!(value = other, "Unknown {ENV_CLIPBOARD} value, auto-detecting");
                auto
            }
            None => auto,
        };
        Self { backend }
    }

    pub const fn backend(&self) -> ClipboardBackend {
        self.backend
    }

    pub const fn is_available(&self) -> bool {
        !matches!(self.backend, ClipboardBackend::Unavailable)
    }

    /// Set clipboard content, blocking on external tools.
    pub fn set(&self, content: &str, writer: &mut impl Write) -> Result<(), ClipboardError> {
        match self.backend {
            ClipboardBackend::Osc52 => write_osc52(content, writer),
            ClipboardBackend::External(tool) => tool.copy(content),
            ClipboardBackend::Unavailable => Err(ClipboardError::NotAvailable),
        }
    }
}

/// Encode `content` as an OSC 52 clipboard write.
pub fn osc52_sequence(content: &str) -> Result<String, ClipboardError> {
    let encoded = STANDARD.encode(content.as_bytes());
    if encoded.len() > MAX_OSC52_PAYLOAD {
        return Err(ClipboardError::TooLarge(encoded.len()));
    }
    Ok(format!("\x1b]52;c;{encoded}\x07"))
}

fn write_osc52(content: &str, writer: &mut impl Write) -> Result<(), ClipboardError> {
    let seq = osc52_sequence(content)?;
    writer
        .write_all(seq.as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| ClipboardError::Write(e.to_string()))
}

fn command_exists(command: &str) -> bool {
    if command.contains(std::path::MAIN_SEPARATOR) {
        return Path::new(command).is_file();
    }
    let Some(path_var) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&path_var).any(|dir| {
        dir.join(command).is_file()
            || (cfg!(target_os = "windows") && dir.join(format!("{command}.exe")).is_file())
    })
}

fn run_with_input(cmd: &str, args: &[&str], content: &str) -> Result<(), ClipboardError> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| ClipboardError::Write(format!("{cmd}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(content.as_bytes())
            .map_err(|e| ClipboardError::Write(format!("{cmd}: {e}")))?;
    }

    let status = child
        .wait()
        .map_err(|e| ClipboardError::Write(format!("{cmd}: {e}")))?;
    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::Write(format!("{cmd} exited with {status}")))
    }
}

/// An in-flight or finished copy.
#[derive(Debug)]
pub struct CopyJob {
    state: JobState,
}

#[derive(Debug)]
enum JobState {
    Done(Option<Result<(), ClipboardError>>),
    Running(Receiver<Result<(), ClipboardError>>),
}

impl CopyJob {
    fn done(result: Result<(), ClipboardError>) -> Self {
        Self {
            state: JobState::Done(Some(result)),
        }
    }

    /// Outcome if finished. Returns `Some` exactly once.
    pub fn poll(&mut self) -> Option<Result<(), ClipboardError>> {
        match &mut self.state {
            JobState::Done(result) => result.take(),
            JobState::Running(rx) => {
                let outcome = match rx.try_recv() {
                    Ok(result) => result,
                    Err(TryRecvError::Empty) => return None,
                    Err(TryRecvError::Disconnected) => Err(ClipboardError::Write(
                        "clipboard worker exited without reporting".to_string(),
                    )),
                };
                self.state = JobState::Done(None);
                Some(outcome)
            }
        }
    }
}

/// Start a copy without blocking the caller.
///
/// OSC 52 is written to `writer` immediately; external tools run on a
/// worker thread.
pub fn spawn_copy(clipboard: Clipboard, text: String, writer: &mut impl Write) -> CopyJob {
    match clipboard.backend {
        ClipboardBackend::External(tool) => {
            let (tx, rx) = mpsc::channel();
            let spawned = thread::Builder::new()
                .name("clipboard".into())
                .spawn(move || {
                    let result = tool.copy(&text);
                    // Receiver may be gone if the app quit first
                    let _ = tx.send(result);
                });
            match spawned {
                Ok(_) => CopyJob {
                    state: JobState::Running(rx),
                },
                Err(e) => CopyJob::done(Err(ClipboardError::Write(e.to_string()))),
            }
        }
        _ => CopyJob::done(clipboard.set(&text, writer)),
    }
}

/// Export feedback shown in the status line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExportStatus {
    #[default]
    Idle,
    Pending,
    Copied { at: Instant },
    Failed { reason: String, at: Instant },
}

impl ExportStatus {
    pub fn from_result(result: Result<(), ClipboardError>, now: Instant) -> Self {
        match result {
            Ok(()) => {
                tracing::info!("Summary copied to clipboard");
                ExportStatus::Copied { at: now }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard export failed");
                ExportStatus::Failed {
                    reason: e.to_string(),
                    at: now,
                }
            }
        }
    }

    /// Revert an expired notice to `Idle`. Returns whether anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let at = match self {
            ExportStatus::Copied { at } | ExportStatus::Failed { at, .. } => *at,
            ExportStatus::Idle | ExportStatus::Pending => return false,
        };
        if now.saturating_duration_since(at) >= NOTICE_DURATION {
            *self = ExportStatus::Idle;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            ExportStatus::Idle => None,
            ExportStatus::Pending => Some("Copying...".to_string()),
            ExportStatus::Copied { .. } => Some("Copied summary to clipboard".to_string()),
            ExportStatus::Failed { reason, .. } => Some(format!("Copy failed: {reason}")),
        }
    }
}
