// tests/cli_tests.rs
#![cfg(feature = "cli")]

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use classic_ciphers::consts::{CONFIG_PATH_ENV, DEFAULT_KEY_ENV};
use tempfile::tempdir;

mod common;

const REQUEST: &str = r#"{"algorithm":"transposition","text":"HELLO"}"#;

/// Run `classic-ciphers --json` in `dir` with one request on stdin
fn run_json(dir: &Path, envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_classic-ciphers"));
    cmd.arg("--json")
        .current_dir(dir)
        .env_remove(CONFIG_PATH_ENV)
        .env_remove(DEFAULT_KEY_ENV)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    for (name, value) in envs {
        cmd.env(name, value);
    }

    let mut child = cmd.spawn().expect("spawn classic-ciphers");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(format!("{REQUEST}\n").as_bytes())
        .expect("write request");
    child.wait_with_output().expect("wait for classic-ciphers")
}

#[test]
fn test_missing_config_file_is_reported() {
    common::setup();
    let dir = tempdir().unwrap();

    let out = run_json(dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert!(out.status.success(), "stderr: {stderr}");
    assert_eq!(stdout.trim(), r#"{"result":"EOHLL"}"#);
    assert!(
        stderr.contains("classic-ciphers.toml not found"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_invalid_config_file_is_reported() {
    common::setup();
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("bad.toml"), "[transposition").unwrap();

    let out = run_json(
        dir.path(),
        &[(CONFIG_PATH_ENV, "bad.toml"), ("RUST_LOG", "warn")],
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert!(out.status.success(), "stderr: {stderr}");
    assert_eq!(stdout.trim(), r#"{"result":"EOHLL"}"#);
    assert!(stderr.contains("ignoring bad.toml"), "stderr: {stderr}");
}

#[test]
fn test_config_default_key_reaches_dispatch() {
    common::setup();
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("classic-ciphers.toml"),
        "[transposition]\ndefault_key = \"X\"\n\n[logging]\nlevel = \"error\"\n",
    )
    .unwrap();

    let out = run_json(dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert!(out.status.success(), "stderr: {stderr}");
    assert_eq!(stdout.trim(), r#"{"result":"HELLO"}"#);
    // level = "error" from the file silences the info summary
    assert!(!stderr.contains("processed"), "stderr: {stderr}");
}
