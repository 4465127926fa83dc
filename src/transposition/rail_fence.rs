//! Rail Fence (zig-zag) transposition.
//!
//! Characters are written diagonally down and up across `rails` rows and
//! read off row by row. Case-sensitive, and the text is not trimmed:
//! every character, whitespace included, takes part.

use tracing::debug;

use crate::cipher::Cipher;
use crate::error::{CipherError, Result};

/// Smallest usable number of rails.
pub const MIN_RAILS: usize = 2;

/// Zig-zag transposition over a fixed number of rails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFenceCipher {
    rails: usize,
}

impl RailFenceCipher {
    /// Creates a rail fence cipher.
    ///
    /// # Errors
    /// [`CipherError::InvalidRailCount`] if `rails < 2`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{Cipher, RailFenceCipher};
    ///
    /// let cipher = RailFenceCipher::new(2).unwrap();
    /// assert_eq!(cipher.encode("Attack at Dawn").unwrap(), "Atc tDwtaka an");
    ///
    /// assert!(RailFenceCipher::new(1).is_err());
    /// ```
    pub fn new(rails: usize) -> Result<Self> {
        if rails < MIN_RAILS {
            return Err(CipherError::InvalidRailCount(rails));
        }
        debug!(rails, "rail fence cipher ready");
        Ok(RailFenceCipher { rails })
    }

    /// Number of rails.
    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Row visited at each of `len` positions along the zig-zag.
    ///
    /// The path starts on row 0 and turns at row 0 and row `rails - 1`.
    pub fn path(&self, len: usize) -> Vec<usize> {
        let mut path = Vec::with_capacity(len);
        let mut row = 0usize;
        let mut down = true;
        for _ in 0..len {
            path.push(row);
            if row == 0 {
                down = true;
            } else if row == self.rails - 1 {
                down = false;
            }
            row = if down { row + 1 } else { row - 1 };
        }
        path
    }
}

impl Cipher for RailFenceCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        let chars: Vec<char> = plaintext.chars().collect();
        let path = self.path(chars.len());
        let mut fence: Vec<String> = vec![String::new(); self.rails];
        for (c, &row) in chars.iter().zip(&path) {
            fence[row].push(*c);
        }
        Ok(fence.concat())
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        let chars: Vec<char> = ciphertext.chars().collect();
        let path = self.path(chars.len());

        let mut lengths = vec![0usize; self.rails];
        for &row in &path {
            lengths[row] += 1;
        }

        let mut rows: Vec<std::slice::Iter<'_, char>> = Vec::with_capacity(self.rails);
        let mut start = 0;
        for len in lengths {
            rows.push(chars[start..start + len].iter());
            start += len;
        }

        Ok(path
            .iter()
            .filter_map(|&row| rows[row].next().copied())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_vector() {
        let cipher = RailFenceCipher::new(2).unwrap();
        let encoded = cipher.encode("Attack at Dawn").unwrap();
        assert_eq!(encoded, "Atc tDwtaka an");
        assert_eq!(cipher.decode(&encoded).unwrap(), "Attack at Dawn");
    }

    #[test]
    fn test_three_rails() {
        let cipher = RailFenceCipher::new(3).unwrap();
        let encoded = cipher.encode("WE ARE DISCOVERED").unwrap();
        assert_eq!(encoded, "WRIVDEAEDSOEE  CR");
        assert_eq!(cipher.decode(&encoded).unwrap(), "WE ARE DISCOVERED");
    }

    #[test]
    fn test_path_shape() {
        let cipher = RailFenceCipher::new(3).unwrap();
        assert_eq!(cipher.path(8), vec![0, 1, 2, 1, 0, 1, 2, 1]);
    }

    #[test]
    fn test_more_rails_than_text() {
        let cipher = RailFenceCipher::new(10).unwrap();
        assert_eq!(cipher.encode("abc").unwrap(), "abc");
        assert_eq!(cipher.decode("abc").unwrap(), "abc");
    }

    #[test]
    fn test_whitespace_and_newlines_kept() {
        let cipher = RailFenceCipher::new(4).unwrap();
        let text = " line one\nline two ";
        let encoded = cipher.encode(text).unwrap();
        assert_eq!(cipher.decode(&encoded).unwrap(), text);
    }

    #[test]
    fn test_invalid_rail_counts() {
        assert_eq!(RailFenceCipher::new(0), Err(CipherError::InvalidRailCount(0)));
        assert_eq!(RailFenceCipher::new(1), Err(CipherError::InvalidRailCount(1)));
    }
}
