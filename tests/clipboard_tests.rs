use std::time::{Duration, Instant};

use base64::{Engine as _, engine::general_purpose::STANDARD};
use styleboard::clipboard::{
    Clipboard, ClipboardBackend, ClipboardError, ExportStatus, ExternalTool, MAX_OSC52_PAYLOAD,
    NOTICE_DURATION, osc52_sequence, spawn_copy,
};

#[test]
fn test_detect_prefers_external_tool() {
    let clipboard = Clipboard::detect_with(None, Some(ExternalTool::Wayland), true);
    assert_eq!(
        clipboard.backend(),
        ClipboardBackend::External(ExternalTool::Wayland)
    );
}

#[test]
fn test_detect_falls_back_to_osc52_on_a_terminal() {
    assert_eq!(
        Clipboard::detect_with(None, None, true).backend(),
        ClipboardBackend::Osc52
    );
    let piped = Clipboard::detect_with(None, None, false);
    assert_eq!(piped.backend(), ClipboardBackend::Unavailable);
    assert!(!piped.is_available());
}

#[test]
fn test_env_override_wins() {
    let forced = Clipboard::detect_with(Some("osc52"), Some(ExternalTool::X11), false);
    assert_eq!(forced.backend(), ClipboardBackend::Osc52);

    let disabled = Clipboard::detect_with(Some("NONE"), Some(ExternalTool::X11), true);
    assert_eq!(disabled.backend(), ClipboardBackend::Unavailable);

    // External requested but nothing installed
    let missing = Clipboard::detect_with(Some("external"), None, true);
    assert_eq!(missing.backend(), ClipboardBackend::Unavailable);

    // Unknown values auto-detect
    let unknown = Clipboard::detect_with(Some("carrier-pigeon"), None, true);
    assert_eq!(unknown.backend(), ClipboardBackend::Osc52);
}

#[test]
fn test_osc52_sequence_encodes_content() {
    let seq = osc52_sequence("Style: Flat (flat)").unwrap();
    let payload = seq
        .strip_prefix("\x1b]52;c;")
        .and_then(|rest| rest.strip_suffix('\x07'))
        .unwrap();
    assert_eq!(STANDARD.decode(payload).unwrap(), b"Style: Flat (flat)");
}

#[test]
fn test_osc52_rejects_oversized_payload() {
    let content = "x".repeat(MAX_OSC52_PAYLOAD);
    assert!(matches!(
        osc52_sequence(&content),
        Err(ClipboardError::TooLarge(len)) if len > MAX_OSC52_PAYLOAD
    ));
}

#[test]
fn test_osc52_copy_writes_to_terminal() {
    let clipboard = Clipboard::with_backend(ClipboardBackend::Osc52);
    let mut out = Vec::new();
    let mut job = spawn_copy(clipboard, "summary".to_string(), &mut out);

    assert_eq!(job.poll(), Some(Ok(())));
    // Reported once only
    assert_eq!(job.poll(), None);
    assert_eq!(out, osc52_sequence("summary").unwrap().into_bytes());
}

#[test]
fn test_unavailable_backend_reports_error() {
    let clipboard = Clipboard::with_backend(ClipboardBackend::Unavailable);
    let mut out = Vec::new();
    assert_eq!(
        clipboard.set("summary", &mut out),
        Err(ClipboardError::NotAvailable)
    );

    let mut job = spawn_copy(clipboard, "summary".to_string(), &mut out);
    assert_eq!(job.poll(), Some(Err(ClipboardError::NotAvailable)));
    assert!(out.is_empty());
}

#[test]
fn test_notice_expires() {
    let start = Instant::now();
    let mut status = ExportStatus::from_result(Ok(()), start);
    assert_eq!(
        status.message().as_deref(),
        Some("Copied summary to clipboard")
    );

    assert!(!status.tick(start + Duration::from_millis(500)));
    assert!(matches!(status, ExportStatus::Copied { .. }));

    assert!(status.tick(start + NOTICE_DURATION));
    assert_eq!(status, ExportStatus::Idle);
    assert_eq!(status.message(), None);
}

#[test]
fn test_failure_notice_carries_reason() {
    let now = Instant::now();
    let status = ExportStatus::from_result(Err(ClipboardError::NotAvailable), now);
    assert_eq!(
        status.message().as_deref(),
        Some("Copy failed: clipboard not available")
    );
}

#[test]
fn test_pending_never_expires() {
    let mut status = ExportStatus::Pending;
    assert!(!status.tick(Instant::now() + Duration::from_secs(60)));
    assert_eq!(status.message().as_deref(), Some("Copying..."));
}
