//! Bifid cipher.
//!
//! Each letter pair contributes its two row coordinates to a row stream
//! and its two column coordinates to a column stream. The row stream
//! followed by the column stream is then read two coordinates at a time as
//! `(row, col)` cells of the square. Decoding splits the coordinates of the
//! ciphertext letters in half (rows, then columns) and pairs them back up
//! by position.

use tracing::debug;

use super::KeyedSquare;
use crate::cipher::Cipher;
use crate::config::DEFAULT_FILLER;
use crate::digraph::{self, separate, trim_filler};
use crate::error::Result;
use crate::polybius::{fold, PolybiusTable, Position};
use crate::utils::text::normalize;

/// Polybius-square fractionating cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BifidCipher {
    square: KeyedSquare,
}

impl BifidCipher {
    /// Creates a Bifid cipher with the default filler `'x'`.
    ///
    /// # Errors
    /// - [`CipherError::EmptyKeyword`](crate::CipherError::EmptyKeyword) if the keyword is blank.
    /// - [`CipherError::InvalidKeyword`](crate::CipherError::InvalidKeyword) if it holds non-letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{BifidCipher, Cipher};
    ///
    /// let cipher = BifidCipher::new("SECRET").unwrap();
    /// assert_eq!(cipher.encode("ATTACK AT DAWN").unwrap(), "aecaby tv ktha");
    /// assert_eq!(cipher.decode("aecaby tv ktha").unwrap(), "attack at dawn");
    /// ```
    pub fn new(keyword: &str) -> Result<Self> {
        Self::with_filler(keyword, DEFAULT_FILLER)
    }

    /// Creates a Bifid cipher with a custom filler.
    ///
    /// # Errors
    /// As [`new`](Self::new), plus
    /// [`CipherError::InvalidFiller`](crate::CipherError::InvalidFiller).
    pub fn with_filler(keyword: &str, filler: char) -> Result<Self> {
        let square = KeyedSquare::from_keyword(keyword, filler)?;
        debug!(filler = %square.filler, "bifid cipher ready");
        Ok(BifidCipher { square })
    }

    /// The Polybius square in use.
    pub fn table(&self) -> &PolybiusTable {
        &self.square.table
    }

    /// The filler letter.
    pub fn filler(&self) -> char {
        self.square.filler
    }

    fn cell(&self, row: usize, col: usize) -> char {
        self.square.table.at(row, col)
    }
}

impl Cipher for BifidCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        let text: String = normalize(plaintext, false).chars().map(fold).collect();
        let digraphs = digraph::split(&text, self.square.filler);

        let n = digraphs.pairs().len() * 2;
        let mut rows = Vec::with_capacity(n);
        let mut cols = Vec::with_capacity(n);
        for &(a, b) in digraphs.pairs() {
            let (p, q) = (self.square.map.locate(a)?, self.square.map.locate(b)?);
            rows.extend([p.row, q.row]);
            cols.extend([p.col, q.col]);
        }
        rows.extend(cols);

        let letters = rows.chunks_exact(2).map(|rc| self.cell(rc[0], rc[1]));
        let encoded = digraphs.literals().reinsert(letters);
        Ok(trim_filler(encoded, digraphs.is_padded(), self.square.filler))
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        let text = normalize(ciphertext, false);
        let (mut letters, literals) = separate(&text);
        // an odd letter count means encode dropped a trailing filler
        let padded = letters.len() % 2 == 1;
        if padded {
            letters.push(self.square.filler);
        }

        let coords = letters
            .iter()
            .map(|&c| self.square.map.locate(c))
            .collect::<Result<Vec<Position>>>()?;

        let half = coords.len() / 2;
        let (rows, cols) = coords.split_at(half);
        let decoded = rows.iter().zip(cols).flat_map(|(r, c)| {
            [self.cell(r.row, c.row), self.cell(r.col, c.col)]
        });

        let plaintext = literals.reinsert(decoded);
        Ok(trim_filler(plaintext, padded, self.square.filler))
    }
}
