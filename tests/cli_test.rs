//! Drives the built binary. None of these reach the network: each run
//! fails before the completion request is sent.

use std::fs;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_file-update");

fn run(args: &[&str], api_key: Option<&str>) -> Output {
    let mut cmd = Command::new(BIN);
    cmd.args(args)
        .env_remove("OPENAI_API_KEY")
        .env_remove("OPENAI_MODEL")
        // Unroutable, in case anything slips through
        .env("OPENAI_BASE_URL", "http://127.0.0.1:9/v1")
        .env_remove("RUST_LOG");
    if let Some(key) = api_key {
        cmd.env("OPENAI_API_KEY", key);
    }
    cmd.output().unwrap()
}

#[test]
fn missing_file_flag_aborts() {
    let out = run(&["-i", "uppercase it"], Some("sk-test"));
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("--file"));
}

#[test]
fn missing_instruction_flag_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "hello").unwrap();

    let out = run(&["-f", path.to_str().unwrap()], Some("sk-test"));

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("--instruction"));
    assert!(!dir.path().join("a.txt.updated").exists());
}

#[test]
fn missing_credential_aborts_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "hello").unwrap();

    let out = run(&["-f", path.to_str().unwrap(), "-i", "uppercase it"], None);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("OpenAI API key is not set"));
    assert!(!dir.path().join("a.txt.updated").exists());
}

#[test]
fn missing_source_exits_non_zero_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let out = run(
        &["--file", path.to_str().unwrap(), "--instruction", "x"],
        Some("sk-test"),
    );

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to read file"));
    assert!(!dir.path().join("missing.txt.updated").exists());
    assert!(out.stdout.is_empty());
}

#[test]
fn blank_instruction_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "hello").unwrap();

    let out = run(&["-f", path.to_str().unwrap(), "-i", "   "], Some("sk-test"));

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("instruction is empty"));
}
