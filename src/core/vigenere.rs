// src/core/vigenere.rs
//! Vigenère polyalphabetic cipher
//!
//! The key is cycled over the letters of the text only: non-letters are
//! copied through and do not advance the key cursor.

use tracing::trace;

use super::util::{case_base, inverse_shift, shift_letter};
use crate::consts::UPPER_BASE;
use crate::error::{CipherError, Result};

/// A normalized Vigenère key: uppercase ASCII letters, never empty.
///
/// Each letter is stored as its shift (`A` = 0 … `Z` = 25).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    shifts: Vec<u8>,
}

impl VigenereKey {
    /// Keep the ASCII letters of `key`, upper-cased; fail if none remain.
    pub fn new(key: &str) -> Result<Self> {
        let shifts: Vec<u8> = key
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase() as u8 - UPPER_BASE)
            .collect();

        if shifts.is_empty() {
            return Err(CipherError::invalid_key(
                "Vigenère key must contain at least one letter",
            ));
        }
        Ok(Self { shifts })
    }

    /// The normalized key as uppercase letters
    pub fn as_letters(&self) -> String {
        self.shifts
            .iter()
            .map(|&s| char::from(UPPER_BASE + s))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    pub fn encrypt(&self, text: &str) -> String {
        self.apply(text, |shift| shift)
    }

    pub fn decrypt(&self, cipher: &str) -> String {
        self.apply(cipher, inverse_shift)
    }

    fn apply(&self, text: &str, direction: impl Fn(u8) -> u8) -> String {
        let mut cursor = 0usize;
        text.chars()
            .map(|c| {
                if case_base(c).is_none() {
                    return c;
                }
                let shift = direction(self.shifts[cursor % self.shifts.len()]);
                cursor += 1;
                shift_letter(c, shift)
            })
            .collect()
    }
}

/// Encrypt `text` with a Vigenère key given as a string
pub fn encrypt(text: &str, key: &str) -> Result<String> {
    let key = VigenereKey::new(key)?;
    trace!(key_len = key.len(), len = text.len(), "vigenere encrypt");
    Ok(key.encrypt(text))
}

/// Decrypt `cipher` with a Vigenère key given as a string
pub fn decrypt(cipher: &str, key: &str) -> Result<String> {
    let key = VigenereKey::new(key)?;
    trace!(key_len = key.len(), len = cipher.len(), "vigenere decrypt");
    Ok(key.decrypt(cipher))
}
