//! Playfair cipher.
//!
//! Letters are enciphered in pairs on a keyed 5×5 square:
//!
//! - same row: each letter moves one column right (wrapping);
//! - same column: each letter moves one row down (wrapping);
//! - otherwise: the letters swap columns, keeping their rows.
//!
//! Decoding shifts left / up instead; the rectangle swap is its own
//! inverse. Doubled letters in a pair are enciphered as they are.

use tracing::debug;

use super::KeyedSquare;
use crate::cipher::Cipher;
use crate::config::DEFAULT_FILLER;
use crate::digraph::{self, trim_filler};
use crate::error::Result;
use crate::polybius::{fold, PolybiusTable, GRID_SIDE};
use crate::utils::text::normalize;

/// Direction of the row / column shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shift {
    Forward,
    Backward,
}

impl Shift {
    fn step(self, i: usize) -> usize {
        match self {
            Shift::Forward => (i + 1) % GRID_SIDE,
            Shift::Backward => (i + GRID_SIDE - 1) % GRID_SIDE,
        }
    }
}

/// Digraph substitution on a keyed Polybius square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayfairCipher {
    square: KeyedSquare,
}

impl PlayfairCipher {
    /// Creates a Playfair cipher with the default filler `'x'`.
    ///
    /// # Errors
    /// - [`CipherError::EmptyKeyword`](crate::CipherError::EmptyKeyword) if the keyword is blank.
    /// - [`CipherError::InvalidKeyword`](crate::CipherError::InvalidKeyword) if it holds non-letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{Cipher, PlayfairCipher};
    ///
    /// let cipher = PlayfairCipher::new("SECRET").unwrap();
    /// assert_eq!(cipher.encode("ATTACK AT DAWN").unwrap(), "gssgdp gs fbvo");
    /// assert_eq!(cipher.decode("gssgdp gs fbvo").unwrap(), "attack at dawn");
    /// ```
    pub fn new(keyword: &str) -> Result<Self> {
        Self::with_filler(keyword, DEFAULT_FILLER)
    }

    /// Creates a Playfair cipher with a custom filler.
    ///
    /// # Errors
    /// As [`new`](Self::new), plus
    /// [`CipherError::InvalidFiller`](crate::CipherError::InvalidFiller).
    pub fn with_filler(keyword: &str, filler: char) -> Result<Self> {
        let square = KeyedSquare::from_keyword(keyword, filler)?;
        debug!(filler = %square.filler, "playfair cipher ready");
        Ok(PlayfairCipher { square })
    }

    /// Creates a Playfair cipher over a pre-built square.
    ///
    /// # Errors
    /// [`CipherError::InvalidFiller`](crate::CipherError::InvalidFiller) if
    /// `filler` is not a usable letter.
    pub fn with_table(table: PolybiusTable, filler: char) -> Result<Self> {
        let square = KeyedSquare::from_table(table, filler)?;
        debug!(filler = %square.filler, "playfair cipher ready from table");
        Ok(PlayfairCipher { square })
    }

    /// The Polybius square in use.
    pub fn table(&self) -> &PolybiusTable {
        &self.square.table
    }

    /// The filler letter.
    pub fn filler(&self) -> char {
        self.square.filler
    }

    fn transform(&self, text: &str, shift: Shift) -> Result<String> {
        let text: String = normalize(text, false).chars().map(fold).collect();
        let digraphs = digraph::split(&text, self.square.filler);
        let table = &self.square.table;

        let mut letters = Vec::with_capacity(digraphs.pairs().len() * 2);
        for &(a, b) in digraphs.pairs() {
            let (p, q) = (self.square.map.locate(a)?, self.square.map.locate(b)?);
            let pair = if p.row == q.row {
                [
                    table.at(p.row, shift.step(p.col)),
                    table.at(q.row, shift.step(q.col)),
                ]
            } else if p.col == q.col {
                [
                    table.at(shift.step(p.row), p.col),
                    table.at(shift.step(q.row), q.col),
                ]
            } else {
                [table.at(p.row, q.col), table.at(q.row, p.col)]
            };
            letters.extend(pair);
        }

        let out = digraphs.literals().reinsert(letters);
        Ok(trim_filler(out, digraphs.is_padded(), self.square.filler))
    }
}

impl Cipher for PlayfairCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        self.transform(plaintext, Shift::Forward)
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        self.transform(ciphertext, Shift::Backward)
    }
}
