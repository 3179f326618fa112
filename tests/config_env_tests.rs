// tests/config_env_tests.rs
//! Config tests that touch process env — kept in their own binary and
//! serialized through `ENV_LOCK`.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use classic_ciphers::config::{load_from, source_path};
use classic_ciphers::consts::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, DEFAULT_KEY_ENV};
use tempfile::tempdir;

mod common;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_config(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("classic-ciphers.toml");
    fs::write(&path, "[transposition]\ndefault_key = \"ZEBRAS\"\n").unwrap();
    path
}

#[test]
fn test_env_default_key_overrides_file() {
    common::setup();
    let _guard = lock_env();
    let dir = tempdir().unwrap();
    let path = write_config(dir.path());

    std::env::set_var(DEFAULT_KEY_ENV, "AB");
    let conf = load_from(&path);
    std::env::remove_var(DEFAULT_KEY_ENV);

    assert_eq!(conf.unwrap().transposition.default_key, "AB");
}

#[test]
fn test_empty_env_default_key_keeps_file_value() {
    common::setup();
    let _guard = lock_env();
    let dir = tempdir().unwrap();
    let path = write_config(dir.path());

    std::env::set_var(DEFAULT_KEY_ENV, "");
    let conf = load_from(&path);
    std::env::remove_var(DEFAULT_KEY_ENV);

    assert_eq!(conf.unwrap().transposition.default_key, "ZEBRAS");
}

#[test]
fn test_unset_env_default_key_keeps_file_value() {
    common::setup();
    let _guard = lock_env();
    let dir = tempdir().unwrap();
    let path = write_config(dir.path());

    std::env::remove_var(DEFAULT_KEY_ENV);
    assert_eq!(
        load_from(&path).unwrap().transposition.default_key,
        "ZEBRAS"
    );
}

#[test]
fn test_source_path_honors_env() {
    common::setup();
    let _guard = lock_env();
    let dir = tempdir().unwrap();
    let custom = dir.path().join("elsewhere.toml");

    std::env::set_var(CONFIG_PATH_ENV, &custom);
    let from_env = source_path();
    std::env::remove_var(CONFIG_PATH_ENV);
    let fallback = source_path();

    assert_eq!(from_env, custom);
    assert_eq!(fallback, PathBuf::from(DEFAULT_CONFIG_PATH));
}
