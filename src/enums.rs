// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: which cipher family
//! and which direction to run it in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CipherError;

/// Supported cipher families
///
/// Requests carry the identifier as text; it becomes an `Algorithm` through
/// `FromStr` so unknown names surface as `UnknownAlgorithm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Transposition,
    Caesar,
    Vigenere,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Transposition,
        Algorithm::Caesar,
        Algorithm::Vigenere,
    ];

    /// Stable lowercase identifier
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Transposition => "transposition",
            Algorithm::Caesar => "caesar",
            Algorithm::Vigenere => "vigenere",
        }
    }

    /// Whether a missing key is an error for this family
    pub fn requires_key(self) -> bool {
        !matches!(self, Algorithm::Transposition)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = CipherError;

    /// Case-insensitive; also accepts the legacy spelling `ceaser`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() {
            return Err(CipherError::MissingAlgorithm);
        }
        match id.to_ascii_lowercase().as_str() {
            "transposition" => Ok(Algorithm::Transposition),
            "caesar" | "ceaser" => Ok(Algorithm::Caesar),
            "vigenere" => Ok(Algorithm::Vigenere),
            _ => Err(CipherError::UnknownAlgorithm(id.to_owned())),
        }
    }
}

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Encrypt,
    Decrypt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encrypt => f.write_str("encrypt"),
            Operation::Decrypt => f.write_str("decrypt"),
        }
    }
}

impl FromStr for Operation {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        match id.to_ascii_lowercase().as_str() {
            "e" | "enc" | "encrypt" => Ok(Operation::Encrypt),
            "d" | "dec" | "decrypt" => Ok(Operation::Decrypt),
            _ => Err(CipherError::UnknownOperation(id.to_owned())),
        }
    }
}
