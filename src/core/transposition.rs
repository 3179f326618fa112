// src/core/transposition.rs
//! Columnar transposition cipher
//!
//! Text is written row-major into a grid with one column per key character
//! and read back column by column, in the order given by sorting the key.
//! Every character is data here, including spaces and punctuation.
//!
//! The grid is never materialized: cell `(row, col)` holds text index
//! `row * cols + col`, and cells at or past the text length are empty.

use tracing::trace;

use crate::error::{CipherError, Result};

/// Shape of the transient grid for one call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub len: usize,
}

impl Grid {
    /// Panics if `cols` is zero; callers get `cols` from a validated key.
    pub fn new(len: usize, cols: usize) -> Self {
        debug_assert!(cols > 0);
        Self {
            rows: len.div_ceil(cols),
            cols,
            len,
        }
    }

    /// Text indices of the occupied cells of `col`, top to bottom
    pub fn column(&self, col: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.rows)
            .map(move |row| row * self.cols + col)
            .take_while(move |&idx| idx < self.len)
    }
}

/// Column read order: key positions stably sorted by character.
///
/// Ties keep their left-to-right order, so `"KEY"` gives `[1, 0, 2]`
/// and `"AA"` gives `[0, 1]`.
pub fn column_order(key: &str) -> Result<Vec<usize>> {
    let key: Vec<char> = key.chars().collect();
    if key.is_empty() {
        return Err(CipherError::invalid_key(
            "transposition key must have at least one character",
        ));
    }
    let mut order: Vec<usize> = (0..key.len()).collect();
    order.sort_by_key(|&i| key[i]);
    trace!(?order, "transposition column order");
    Ok(order)
}

pub fn encrypt(text: &str, key: &str) -> Result<String> {
    let order = column_order(key)?;
    let chars: Vec<char> = text.chars().collect();
    let grid = Grid::new(chars.len(), order.len());

    let mut cipher = String::with_capacity(text.len());
    for &col in &order {
        cipher.extend(grid.column(col).map(|idx| chars[idx]));
    }
    Ok(cipher)
}

/// Exact inverse of [`encrypt`] for every text length, partial last row included.
pub fn decrypt(cipher: &str, key: &str) -> Result<String> {
    let order = column_order(key)?;
    let chars: Vec<char> = cipher.chars().collect();
    let grid = Grid::new(chars.len(), order.len());

    let mut cells = vec!['\0'; chars.len()];
    let mut source = chars.iter();
    for &col in &order {
        for (idx, &c) in grid.column(col).zip(&mut source) {
            cells[idx] = c;
        }
    }
    Ok(cells.into_iter().collect())
}
