// src/core/caesar.rs
//! Caesar shift cipher
//!
//! Uppercase letters rotate within `A–Z`, lowercase within `a–z`.
//! Digits, punctuation, whitespace and non-ASCII text pass through untouched.

use tracing::trace;

use super::util::{inverse_shift, normalize_shift, shift_letter};
use crate::error::{CipherError, Result};

/// Parse a numeric-string key into a shift.
///
/// Accepts surrounding whitespace and an optional sign. Anything that is not
/// a plain decimal integer in `i64` range is an `InvalidKey`.
pub fn parse_shift(key: &str) -> Result<i64> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(CipherError::invalid_key("Caesar shift is empty"));
    }
    trimmed.parse::<i64>().map_err(|e| {
        CipherError::invalid_key(format!("Caesar shift {trimmed:?} is not an integer: {e}"))
    })
}

/// Encrypt by shifting every letter forward by `shift` (any integer, taken mod 26)
pub fn encrypt(text: &str, shift: i64) -> String {
    let shift = normalize_shift(shift);
    trace!(shift, len = text.len(), "caesar encrypt");
    apply(text, shift)
}

/// Decrypt by encrypting with the complementary shift
pub fn decrypt(cipher: &str, shift: i64) -> String {
    let shift = inverse_shift(normalize_shift(shift));
    trace!(shift, len = cipher.len(), "caesar decrypt");
    apply(cipher, shift)
}

/// `encrypt` for a numeric-string key
pub fn encrypt_with_key(text: &str, key: &str) -> Result<String> {
    Ok(encrypt(text, parse_shift(key)?))
}

/// `decrypt` for a numeric-string key
pub fn decrypt_with_key(cipher: &str, key: &str) -> Result<String> {
    Ok(decrypt(cipher, parse_shift(key)?))
}

fn apply(text: &str, shift: u8) -> String {
    text.chars().map(|c| shift_letter(c, shift)).collect()
}
