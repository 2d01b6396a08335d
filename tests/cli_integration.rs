//! Integration tests that run the CLI binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bin() -> Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_typography", "-", "hacks"));
    let mut cmd = Command::new(bin);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    bin()
        .args(args)
        .output()
        .expect("binary not found - run cargo build first")
}

fn run_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = bin()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary not found - run cargo build first");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let out = stdout(&run(&["--help"]));
    assert!(out.contains("typography-hacks") || out.contains("Usage"));
    assert!(out.contains("--smart-quotes"));
}

#[test]
fn cli_version_succeeds() {
    let out = stdout(&run(&["--version"]));
    assert!(out.contains("typography-hacks"));
}

#[test]
fn cli_text_without_flags_is_unchanged() {
    let out = stdout(&run(&["--no-config", "-t", "It's (just) text & more"]));
    assert_eq!(out, "It's (just) text &amp; more");
}

#[test]
fn cli_smart_replacements_as_plain_text() {
    let out = stdout(&run(&[
        "--no-config",
        "--smart",
        "-f",
        "text",
        "-t",
        "\"Hi\"... it's--ok",
    ]));
    assert_eq!(out, "\u{201C}Hi\u{201D}\u{2026} it\u{2019}s\u{2013}ok");
}

#[test]
fn cli_reads_stdin_when_text_is_dash() {
    let out = stdout(&run_with_stdin(
        &["--no-config", "--wrap-ordinals", "-t", "-"],
        "21st Century",
    ));
    assert_eq!(out, "21<span class=\"ords\">st</span> Century");
}

#[test]
fn cli_reads_stdin_when_text_is_absent() {
    let out = stdout(&run_with_stdin(&["--no-config", "--wrap-ampersand"], "R&D"));
    assert_eq!(out, "R<span class=\"amp\">&amp;</span>D");
}

#[test]
fn cli_json_output_is_token_tree() {
    let out = stdout(&run(&["--no-config", "--wrap-caps", "-f", "json", "-t", "NASA"]));
    let json: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    assert_eq!(json[0]["type"], "markup");
    assert_eq!(json[0]["marker"]["class"], "caps");
    assert_eq!(json[0]["children"][0]["text"], "NASA");
}

#[test]
fn cli_uses_config_file_markers() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let path = tmp.path().join("config.json");
    std::fs::write(&path, r#"{"wrap_ampersand": {"tag": "mark"}}"#).expect("write config");

    let out = stdout(&run(&["-c", path.to_str().expect("utf-8 path"), "-t", "A & B"]));
    assert_eq!(out, "A <mark>&amp;</mark> B");
}

#[test]
fn cli_invalid_config_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let path = tmp.path().join("config.json");
    std::fs::write(&path, r#"{"wrap_ampersand": {"tag": "<b>"}}"#).expect("write config");

    let output = run(&["-c", path.to_str().expect("utf-8 path"), "-t", "A & B"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error:") && stderr.contains("wrap_ampersand"),
        "expected validation error, got: {}",
        stderr
    );
}

#[test]
fn cli_missing_config_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let path = tmp.path().join("missing.json");
    let output = run(&["-c", path.to_str().expect("utf-8 path"), "-t", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
}

#[test]
fn cli_config_subcommand_prints_effective_config() {
    let out = stdout(&run(&["--no-config", "config"]));
    assert!(out.contains("Config: (ignored)"));
    assert!(out.contains("\"smart_quotes\": false"));
}

#[test]
fn cli_completions_bash() {
    let out = stdout(&run(&["completions", "bash"]));
    assert!(out.contains("typography-hacks"));
}
