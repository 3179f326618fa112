// src/lib.rs
//! classic-ciphers — classical text ciphers with exact round-trips
//!
//! Features:
//! - Columnar transposition (key-ordered columns, partial last row)
//! - Caesar shift (any integer shift, numeric-string keys)
//! - Vigenère (letter-only key cursor)
//! - Request/response dispatcher for front ends
//!
//! None of these ciphers offer any security; they are for teaching and play.

pub mod config;
pub mod consts;
pub mod core;
pub mod dispatch;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use crate::core::VigenereKey;
pub use dispatch::{
    dispatch, dispatch_with, handle, DispatchOptions, ErrorKind, Request, Response,
};
pub use enums::{Algorithm, Operation};
pub use error::{CipherError, Result};

use crate::core::{caesar, transposition, vigenere};

pub fn transposition_encrypt(text: &str, key: &str) -> Result<String> {
    transposition::encrypt(text, key)
}

pub fn transposition_decrypt(cipher: &str, key: &str) -> Result<String> {
    transposition::decrypt(cipher, key)
}

/// Shift is any integer; it is reduced mod 26.
/// Use [`crate::core::caesar::encrypt_with_key`] for numeric-string keys.
pub fn caesar_encrypt(text: &str, shift: i64) -> String {
    caesar::encrypt(text, shift)
}

pub fn caesar_decrypt(cipher: &str, shift: i64) -> String {
    caesar::decrypt(cipher, shift)
}

pub fn vigenere_encrypt(text: &str, key: &str) -> Result<String> {
    vigenere::encrypt(text, key)
}

pub fn vigenere_decrypt(cipher: &str, key: &str) -> Result<String> {
    vigenere::decrypt(cipher, key)
}
