// src/core/mod.rs
//! The cipher transforms — pure functions, no I/O, no shared state

pub mod caesar;
pub mod transposition;
pub mod util;
pub mod vigenere;

pub use vigenere::VigenereKey;
