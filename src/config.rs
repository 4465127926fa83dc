//! Validated configuration values shared by the keyed ciphers.
//!
//! Every cipher validates its parameters once, at construction, through
//! these types. A value that exists has already passed validation.

use std::fmt;

use crate::error::{CipherError, Result};
use crate::utils::alphabet::is_letter;

/// Filler used to complete an odd final digraph when none is given.
pub const DEFAULT_FILLER: char = 'x';

/// A non-empty, trimmed keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Keyword(String);

impl Keyword {
    /// Parses a keyword made only of Latin letters, lowercased.
    ///
    /// # Errors
    /// - [`CipherError::EmptyKeyword`] if nothing is left after trimming.
    /// - [`CipherError::InvalidKeyword`] on the first non-letter character.
    pub fn letters(raw: &str) -> Result<Self> {
        let keyword = raw.trim().to_lowercase();
        if keyword.is_empty() {
            return Err(CipherError::EmptyKeyword);
        }
        if let Some(bad) = keyword.chars().find(|&c| !is_letter(c)) {
            return Err(CipherError::InvalidKeyword(bad));
        }
        Ok(Keyword(keyword))
    }

    /// Parses a keyword that keeps its case and may hold any character.
    ///
    /// # Errors
    /// [`CipherError::EmptyKeyword`] if nothing is left after trimming.
    pub fn verbatim(raw: &str) -> Result<Self> {
        let keyword = raw.trim();
        if keyword.is_empty() {
            return Err(CipherError::EmptyKeyword);
        }
        Ok(Keyword(keyword.to_string()))
    }

    /// The keyword text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the keyword.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// `true` if the keyword has no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Letter appended to complete an odd final digraph.
///
/// Must be a Latin letter other than `'j'`, since `'j'` has no cell of
/// its own in a Polybius table. Stored lowercased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Filler(char);

impl Filler {
    /// Validates `c` as a filler.
    ///
    /// # Errors
    /// [`CipherError::InvalidFiller`] if `c` is not a letter or is `'j'`.
    pub fn new(c: char) -> Result<Self> {
        let lower = c.to_ascii_lowercase();
        if !is_letter(lower) || lower == 'j' {
            return Err(CipherError::InvalidFiller(c));
        }
        Ok(Filler(lower))
    }

    /// The filler character.
    pub fn get(self) -> char {
        self.0
    }
}

impl Default for Filler {
    fn default() -> Self {
        Filler(DEFAULT_FILLER)
    }
}
