//! Columnar transposition.
//!
//! The text is written row by row into a grid as wide as the keyword, the
//! last row padded with spaces, and read out column by column. Columns are
//! read in the order of their keyword characters (a stable sort, so
//! repeated characters keep their left-to-right order). Case-sensitive;
//! the keyword may hold any characters.

use tracing::debug;

use crate::cipher::Cipher;
use crate::config::Keyword;
use crate::error::Result;

/// Keyword-ordered columnar transposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnarTranspositionCipher {
    keyword: Keyword,
    order: Vec<usize>,
}

impl ColumnarTranspositionCipher {
    /// Creates a columnar transposition cipher.
    ///
    /// # Errors
    /// [`CipherError::EmptyKeyword`](crate::CipherError::EmptyKeyword) if
    /// the keyword is blank.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{Cipher, ColumnarTranspositionCipher};
    ///
    /// let cipher = ColumnarTranspositionCipher::new("SECRET").unwrap();
    /// let encoded = cipher.encode("Attack at Dawn").unwrap();
    /// assert_eq!(encoded, "tt tancD a  A wka ");
    /// assert_eq!(cipher.decode(&encoded).unwrap(), "Attack at Dawn");
    /// ```
    pub fn new(keyword: &str) -> Result<Self> {
        let keyword = Keyword::verbatim(keyword)?;
        let chars: Vec<char> = keyword.as_str().chars().collect();
        let mut order: Vec<usize> = (0..chars.len()).collect();
        order.sort_by_key(|&i| chars[i]);
        debug!(columns = order.len(), "columnar transposition ready");
        Ok(ColumnarTranspositionCipher { keyword, order })
    }

    /// The trimmed keyword.
    pub fn keyword(&self) -> &str {
        self.keyword.as_str()
    }

    /// Column indices in reading order.
    pub fn column_order(&self) -> &[usize] {
        &self.order
    }

    fn columns(&self) -> usize {
        self.order.len()
    }
}

impl Cipher for ColumnarTranspositionCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        let mut grid: Vec<char> = plaintext.trim().chars().collect();
        let cols = self.columns();
        let rows = grid.len().div_ceil(cols);
        grid.resize(rows * cols, ' ');

        let mut out = String::with_capacity(grid.len());
        for &col in &self.order {
            for row in 0..rows {
                out.push(grid[row * cols + col]);
            }
        }
        Ok(out)
    }

    /// Rebuilds the grid from the ciphertext length and reads it row by
    /// row. Ciphertext shorter than a full grid is treated as an irregular
    /// grid whose leftmost columns are one cell longer.
    fn decode(&self, ciphertext: &str) -> Result<String> {
        let chars: Vec<char> = ciphertext.chars().collect();
        let cols = self.columns();
        let rows = chars.len().div_ceil(cols);
        let long_cols = match chars.len() % cols {
            0 => cols,
            n => n,
        };

        let mut grid: Vec<Option<char>> = vec![None; rows * cols];
        let mut source = chars.into_iter();
        for &col in &self.order {
            let height = if col < long_cols { rows } else { rows - 1 };
            for row in 0..height {
                grid[row * cols + col] = source.next();
            }
        }

        let text: String = grid.into_iter().flatten().collect();
        Ok(text.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CipherError;

    #[test]
    fn test_documented_vector() {
        let cipher = ColumnarTranspositionCipher::new("SECRET").unwrap();
        assert_eq!(cipher.column_order(), &[2, 1, 4, 3, 0, 5]);
        let encoded = cipher.encode("Attack at Dawn").unwrap();
        assert_eq!(encoded, "tt tancD a  A wka ");
        assert_eq!(cipher.decode(&encoded).unwrap(), "Attack at Dawn");
    }

    #[test]
    fn test_classic_zebras_vector() {
        let cipher = ColumnarTranspositionCipher::new("ZEBRAS").unwrap();
        let encoded = cipher.encode("WEAREDISCOVEREDFLEEATONCE").unwrap();
        assert_eq!(encoded, "EVLN ACDT ESEA ROFO DEEC WIREE");
        assert_eq!(
            cipher.decode(&encoded).unwrap(),
            "WEAREDISCOVEREDFLEEATONCE"
        );
    }

    #[test]
    fn test_decode_irregular_grid() {
        let cipher = ColumnarTranspositionCipher::new("ZEBRAS").unwrap();
        assert_eq!(
            cipher.decode("EVLNACDTESEAROFODEECWIREE").unwrap(),
            "WEAREDISCOVEREDFLEEATONCE"
        );
    }

    #[test]
    fn test_exact_fit_has_no_padding() {
        let cipher = ColumnarTranspositionCipher::new("ba").unwrap();
        assert_eq!(cipher.encode("abcd").unwrap(), "bdac");
        assert_eq!(cipher.decode("bdac").unwrap(), "abcd");
    }

    #[test]
    fn test_empty_text() {
        let cipher = ColumnarTranspositionCipher::new("key").unwrap();
        assert_eq!(cipher.encode("").unwrap(), "");
        assert_eq!(cipher.decode("").unwrap(), "");
    }

    #[test]
    fn test_blank_keyword_rejected() {
        assert_eq!(
            ColumnarTranspositionCipher::new("  "),
            Err(CipherError::EmptyKeyword)
        );
    }
}
