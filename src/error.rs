// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Invalid key: {reason}")]
    InvalidKey { reason: String },

    #[error("Unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error("Unknown operation: {0:?}")]
    UnknownOperation(String),

    #[error("Please enter text!")]
    MissingInput,

    #[error("Please select an algorithm!")]
    MissingAlgorithm,

    #[error("Please enter a key!")]
    MissingKey,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl CipherError {
    pub(crate) fn invalid_key(reason: impl Into<String>) -> Self {
        CipherError::InvalidKey {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
