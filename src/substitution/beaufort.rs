//! Variant Beaufort: Vigenère with the combine direction reversed.
//!
//! Encoding subtracts the key letter and decoding adds it back.

use super::vigenere::VigenereCipher;
use super::Combine;
use crate::cipher::Cipher;
use crate::error::Result;

/// Vigenère variant that subtracts on encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeaufortCipher(VigenereCipher);

impl BeaufortCipher {
    /// Creates a variant Beaufort cipher.
    ///
    /// # Errors
    /// Same as [`VigenereCipher::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{BeaufortCipher, Cipher};
    ///
    /// let cipher = BeaufortCipher::new("SECRET").unwrap();
    /// assert_eq!(cipher.encode("ATTACK AT DAWN").unwrap(), "iprjyr wr zhej");
    /// ```
    pub fn new(keyword: &str) -> Result<Self> {
        Ok(BeaufortCipher(VigenereCipher::new(keyword)?))
    }

    /// The normalised keyword.
    pub fn keyword(&self) -> &str {
        self.0.keyword()
    }
}

impl Cipher for BeaufortCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        Ok(self.0.apply(plaintext, Combine::Subtract))
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        Ok(self.0.apply(ciphertext, Combine::Add))
    }
}
