//! Small letter-arithmetic helpers shared by the substitution ciphers
//!
//! Only ASCII letters take part; everything else is left to the caller.

use crate::consts::{ALPHABET_LEN, LOWER_BASE, UPPER_BASE};

/// Case base of an ASCII letter, or `None` for anything else
#[inline]
pub fn case_base(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(UPPER_BASE)
    } else if c.is_ascii_lowercase() {
        Some(LOWER_BASE)
    } else {
        None
    }
}

/// Shift an ASCII letter forward by `shift` (already in `0..26`), keeping its case.
/// Non-letters come back unchanged.
#[inline]
pub fn shift_letter(c: char, shift: u8) -> char {
    match case_base(c) {
        Some(base) => {
            let offset = c as u8 - base;
            char::from(base + (offset + shift) % ALPHABET_LEN)
        }
        None => c,
    }
}

/// Reduce any integer shift into `0..26`
#[inline]
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid of a positive divisor is never negative, so the cast is lossless
    shift.rem_euclid(i64::from(ALPHABET_LEN)) as u8
}

/// Shift that undoes `shift` (already in `0..26`)
#[inline]
pub fn inverse_shift(shift: u8) -> u8 {
    (ALPHABET_LEN - shift % ALPHABET_LEN) % ALPHABET_LEN
}
