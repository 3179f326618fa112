// src/consts.rs
//! Shared constants — alphabet parameters and defaults

/// Number of letters in the substitution alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Case base for uppercase letters
pub const UPPER_BASE: u8 = b'A';

/// Case base for lowercase letters
pub const LOWER_BASE: u8 = b'a';

/// Key used by transposition when the caller supplies none
pub const DEFAULT_TRANSPOSITION_KEY: &str = "KEY";

/// Default log filter when neither RUST_LOG nor the config file set one
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Config file read when CLASSIC_CIPHERS_CONFIG is unset
pub const DEFAULT_CONFIG_PATH: &str = "classic-ciphers.toml";

/// Env var naming the config file
pub const CONFIG_PATH_ENV: &str = "CLASSIC_CIPHERS_CONFIG";

/// Env var overriding `transposition.default_key`
pub const DEFAULT_KEY_ENV: &str = "CLASSIC_CIPHERS_DEFAULT_KEY";
