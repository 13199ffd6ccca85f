use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("styleboard");
    cmd.env("STYLEBOARD_CLIPBOARD", "none");
    cmd.args(["--log-file", &log_path()]);
    cmd
}

fn log_path() -> String {
    std::env::temp_dir()
        .join(format!("styleboard-test-{}.log", std::process::id()))
        .display()
        .to_string()
}

#[test]
fn test_cli_prints_palette_yaml() {
    cmd()
        .args(["--print", "palette", "--color", "#3B82F6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("primary:"))
        .stdout(predicate::str::contains("#3B82F6"))
        .stdout(predicate::str::contains("onPrimary").not())
        .stdout(predicate::str::contains("on_primary:"));
}

#[test]
fn test_cli_prints_palette_json() {
    let output = cmd()
        .args(["--print", "palette", "--color", "#ec4899", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["primary"], "#EC4899");
    assert_eq!(json["surface"], "#F9FAFB");
}

#[test]
fn test_cli_accepts_css_color_formats() {
    cmd()
        .args(["--print", "palette", "--color", "rgb(59, 130, 246)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#3B82F6"));
}

#[test]
fn test_cli_prints_summary() {
    cmd()
        .args(["--print", "summary", "--style", "brutalist", "--view", "mobile"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("UI Style Preview Summary"))
        .stdout(predicate::str::contains("Style: Brutalist (brutalist)"))
        .stdout(predicate::str::contains("View: mobile"));
}

#[test]
fn test_cli_unknown_style_falls_back_to_flat() {
    cmd()
        .args(["--print", "summary", "--style", "skeuomorphic"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(flat)"));
}

#[test]
fn test_cli_prints_rules_json() {
    let output = cmd()
        .args(["--print", "rules", "--style", "material", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"component\""))
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["style"], "material");
    let rules = json["rules"].as_array().unwrap();
    assert!(
        rules
            .iter()
            .any(|r| r["component"] == "button" && r["variant"] == "outline")
    );
}

#[test]
fn test_cli_rejects_invalid_color() {
    cmd()
        .args(["--print", "palette", "--color", "not-a-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--color"));
}

#[test]
fn test_cli_rejects_unknown_view() {
    cmd()
        .args(["--print", "palette", "--view", "tablet"])
        .assert()
        .failure();
}

#[test]
fn test_cli_missing_config_file_fails() {
    cmd()
        .args(["--print", "palette", "--config", "/nonexistent/styleboard.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_invalid_config_color_falls_back() {
    let path =
        std::env::temp_dir().join(format!("styleboard-badcolor-{}.toml", std::process::id()));
    std::fs::write(&path, "[preview]\ncolor = \"not-a-color\"\n").unwrap();

    cmd()
        .args(["--config", &path.display().to_string(), "--print", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seed color: #3B82F6"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_cli_save_config_then_load() {
    let path = std::env::temp_dir().join(format!("styleboard-cli-{}.toml", std::process::id()));
    let path_str = path.display().to_string();

    cmd()
        .args(["--save-config", &path_str, "--color", "#10b981", "--style", "ios"])
        .assert()
        .success();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("#10B981"));
    assert!(saved.contains("ios"));

    cmd()
        .args(["--config", &path_str, "--print", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Seed color: #10B981"))
        .stdout(predicate::str::contains("(ios)"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_cli_copy_without_clipboard_fails() {
    cmd().arg("--copy").assert().failure();
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("styleboard"));
}
