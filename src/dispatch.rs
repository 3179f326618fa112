// src/dispatch.rs
//! Request/response boundary between a front end and the cipher transforms
//!
//! A front end (form, CLI, JSON pipe) builds a [`Request`], and gets back
//! either the transformed text or a [`CipherError`]. Validation mirrors what
//! the input form used to check before calling a cipher: text first, then
//! the algorithm, then the key.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::consts::DEFAULT_TRANSPOSITION_KEY;
use crate::core::{caesar, transposition, vigenere};
use crate::enums::{Algorithm, Operation};
use crate::error::{CipherError, Result};

/// One transform request, as collected from the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub operation: Operation,
    /// Algorithm identifier; kept as text so unknown names reach validation
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Request {
    pub fn new(
        operation: Operation,
        algorithm: impl Into<String>,
        text: impl Into<String>,
        key: Option<&str>,
    ) -> Self {
        Self {
            operation,
            algorithm: algorithm.into(),
            text: text.into(),
            key: key.map(str::to_owned),
        }
    }

    pub fn encrypt(algorithm: Algorithm, text: impl Into<String>, key: Option<&str>) -> Self {
        Self::new(Operation::Encrypt, algorithm.as_str(), text, key)
    }

    pub fn decrypt(algorithm: Algorithm, text: impl Into<String>, key: Option<&str>) -> Self {
        Self::new(Operation::Decrypt, algorithm.as_str(), text, key)
    }
}

/// Stable machine-readable error names for the JSON boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidKey,
    UnknownAlgorithm,
    UnknownOperation,
    MissingInput,
    MissingAlgorithm,
    MissingKey,
    BadRequest,
    Internal,
}

impl From<&CipherError> for ErrorKind {
    fn from(err: &CipherError) -> Self {
        match err {
            CipherError::InvalidKey { .. } => ErrorKind::InvalidKey,
            CipherError::UnknownAlgorithm(_) => ErrorKind::UnknownAlgorithm,
            CipherError::UnknownOperation(_) => ErrorKind::UnknownOperation,
            CipherError::MissingInput => ErrorKind::MissingInput,
            CipherError::MissingAlgorithm => ErrorKind::MissingAlgorithm,
            CipherError::MissingKey => ErrorKind::MissingKey,
            CipherError::Io(_) | CipherError::ConfigParse(_) => ErrorKind::Internal,
        }
    }
}

/// Outcome of [`handle`]: `{"result": ...}` or `{"error": ..., "kind": ...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Ok { result: String },
    Err { error: String, kind: ErrorKind },
}

impl Response {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Response::Err {
            error: message.into(),
            kind: ErrorKind::BadRequest,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Ok { .. })
    }
}

impl From<Result<String>> for Response {
    fn from(outcome: Result<String>) -> Self {
        match outcome {
            Ok(result) => Response::Ok { result },
            Err(err) => Response::Err {
                kind: ErrorKind::from(&err),
                error: err.to_string(),
            },
        }
    }
}

/// Knobs the dispatcher takes from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOptions {
    pub default_transposition_key: String,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        Self {
            default_transposition_key: DEFAULT_TRANSPOSITION_KEY.to_owned(),
        }
    }
}

impl From<&Config> for DispatchOptions {
    fn from(conf: &Config) -> Self {
        let key = &conf.transposition.default_key;
        Self {
            default_transposition_key: if key.is_empty() {
                DEFAULT_TRANSPOSITION_KEY.to_owned()
            } else {
                key.clone()
            },
        }
    }
}

/// Validate and run `req` with the built-in defaults
pub fn dispatch(req: &Request) -> Result<String> {
    dispatch_with(req, &DispatchOptions::default())
}

/// Validate and run `req`
pub fn dispatch_with(req: &Request, opts: &DispatchOptions) -> Result<String> {
    if req.text.is_empty() {
        return Err(CipherError::MissingInput);
    }
    let algorithm: Algorithm = req.algorithm.parse()?;

    let key = match req.key.as_deref().filter(|k| !k.is_empty()) {
        Some(key) => key,
        None if algorithm.requires_key() => return Err(CipherError::MissingKey),
        None => {
            debug!("no key given — using default transposition key");
            opts.default_transposition_key.as_str()
        }
    };

    debug!(%algorithm, operation = %req.operation, len = req.text.len(), "dispatch");
    run(algorithm, req.operation, &req.text, key)
}

/// Run one already-validated transform
pub fn run(algorithm: Algorithm, operation: Operation, text: &str, key: &str) -> Result<String> {
    match (algorithm, operation) {
        (Algorithm::Transposition, Operation::Encrypt) => transposition::encrypt(text, key),
        (Algorithm::Transposition, Operation::Decrypt) => transposition::decrypt(text, key),
        (Algorithm::Caesar, Operation::Encrypt) => caesar::encrypt_with_key(text, key),
        (Algorithm::Caesar, Operation::Decrypt) => caesar::decrypt_with_key(text, key),
        (Algorithm::Vigenere, Operation::Encrypt) => vigenere::encrypt(text, key),
        (Algorithm::Vigenere, Operation::Decrypt) => vigenere::decrypt(text, key),
    }
}

/// [`dispatch_with`] wrapped into a serializable [`Response`]
pub fn handle(req: &Request, opts: &DispatchOptions) -> Response {
    Response::from(dispatch_with(req, opts))
}
