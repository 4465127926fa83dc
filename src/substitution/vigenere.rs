//! Vigenère cipher.
//!
//! The keyword is repeated (or truncated) to the length of the text and
//! each letter is shifted by the key letter at the same position. Key
//! positions advance on every character, so spaces and punctuation still
//! consume a key letter. Case-insensitive; output is lowercase.

use tracing::debug;

use super::{combine, key_positions, Combine};
use crate::cipher::Cipher;
use crate::config::Keyword;
use crate::error::Result;
use crate::utils::text::normalize;

/// Polyalphabetic substitution with a repeating keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereCipher {
    keyword: Keyword,
    key: Vec<u8>,
}

impl VigenereCipher {
    /// Creates a Vigenère cipher.
    ///
    /// # Errors
    /// - [`CipherError::EmptyKeyword`](crate::CipherError::EmptyKeyword) if the keyword is blank.
    /// - [`CipherError::InvalidKeyword`](crate::CipherError::InvalidKeyword) if it holds non-letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{Cipher, VigenereCipher};
    ///
    /// let cipher = VigenereCipher::new("SECRET").unwrap();
    /// assert_eq!(cipher.encode("ATTACK AT DAWN").unwrap(), "sxvrgd ev htor");
    /// assert_eq!(cipher.decode("sxvrgd ev htor").unwrap(), "attack at dawn");
    /// ```
    pub fn new(keyword: &str) -> Result<Self> {
        Ok(Self::from_keyword(Keyword::letters(keyword)?))
    }

    pub(crate) fn from_keyword(keyword: Keyword) -> Self {
        debug!(keyword_len = keyword.len(), "vigenere cipher ready");
        let key = key_positions(keyword.as_str());
        VigenereCipher { keyword, key }
    }

    /// The normalised keyword.
    pub fn keyword(&self) -> &str {
        self.keyword.as_str()
    }

    /// The keyword repeated or truncated to `len` characters.
    pub fn keystream(&self, len: usize) -> String {
        crate::utils::text::repeat_to_length(self.keyword.as_str(), len)
    }

    pub(crate) fn apply(&self, text: &str, op: Combine) -> String {
        combine(&normalize(text, false), &self.key, op)
    }
}

impl Cipher for VigenereCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        Ok(self.apply(plaintext, Combine::Add))
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        Ok(self.apply(ciphertext, Combine::Subtract))
    }
}
