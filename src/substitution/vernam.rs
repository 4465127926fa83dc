//! Vernam cipher: Vigenère with a keystream as long as the text.
//!
//! The keystream is supplied per call and must have exactly as many
//! characters as the trimmed text. Case-insensitive; output is lowercase.

use rand::Rng;

use super::{combine, key_positions, Combine};
use crate::error::{CipherError, Result};
use crate::random::random_keystream;
use crate::utils::alphabet::is_letter;
use crate::utils::text::normalize;

/// One-time-pad style letter cipher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VernamCipher;

impl VernamCipher {
    /// Creates the Vernam cipher.
    pub fn new() -> Self {
        VernamCipher
    }

    /// Encodes `plaintext` with `keystream`.
    ///
    /// # Errors
    /// - [`CipherError::InvalidKeyword`] if the keystream holds non-letters.
    /// - [`CipherError::LengthMismatch`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::VernamCipher;
    ///
    /// let cipher = VernamCipher::new();
    /// let keystream = "nqfdetozrdxofi";
    /// let encoded = cipher.encode("ATTACK AT DAWN", keystream).unwrap();
    /// assert_eq!(encoded, "njydgd zk aobv");
    /// assert_eq!(cipher.decode(&encoded, keystream).unwrap(), "attack at dawn");
    /// ```
    pub fn encode(&self, plaintext: &str, keystream: &str) -> Result<String> {
        Self::apply(plaintext, keystream, Combine::Add)
    }

    /// Decodes `ciphertext` with `keystream`.
    ///
    /// # Errors
    /// Same as [`encode`](Self::encode).
    pub fn decode(&self, ciphertext: &str, keystream: &str) -> Result<String> {
        Self::apply(ciphertext, keystream, Combine::Subtract)
    }

    /// Encodes `plaintext` with a fresh random keystream from `rng`.
    ///
    /// Returns the ciphertext together with the keystream needed to decode
    /// it.
    pub fn encode_with_random_keystream<R: Rng + ?Sized>(
        &self,
        plaintext: &str,
        rng: &mut R,
    ) -> Result<(String, String)> {
        let len = normalize(plaintext, false).chars().count();
        let keystream = random_keystream(rng, len);
        let ciphertext = self.encode(plaintext, &keystream)?;
        Ok((ciphertext, keystream))
    }

    fn apply(text: &str, keystream: &str, op: Combine) -> Result<String> {
        let text = normalize(text, false);
        let keystream = keystream.to_lowercase();
        if let Some(bad) = keystream.chars().find(|&c| !is_letter(c)) {
            return Err(CipherError::InvalidKeyword(bad));
        }
        let text_len = text.chars().count();
        let key_len = keystream.chars().count();
        if text_len != key_len {
            return Err(CipherError::LengthMismatch {
                text: text_len,
                keystream: key_len,
            });
        }
        Ok(combine(&text, &key_positions(&keystream), op))
    }
}
