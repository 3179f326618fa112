// src/config/mod.rs
//! Configuration system for classic-ciphers
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, source_path, Config, Logging, Transposition};

mod app;
mod defaults;
