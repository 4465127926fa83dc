//! Atbash: maps each letter to its mirror, `a ↔ z`, `b ↔ y`, ...
//!
//! Case-insensitive; output is lowercase. The map is an involution, so
//! encoding and decoding are the same operation.

use crate::cipher::Cipher;
use crate::error::Result;
use crate::utils::alphabet::{self, ALPHABET_LEN};
use crate::utils::text::normalize;

/// Mirror-alphabet substitution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AtbashCipher;

impl AtbashCipher {
    /// Creates the (parameterless) Atbash cipher.
    pub fn new() -> Self {
        AtbashCipher
    }

    fn mirror(text: &str) -> String {
        normalize(text, false)
            .chars()
            .map(|c| match alphabet::index(c) {
                Ok(x) => alphabet::letter(ALPHABET_LEN - 1 - x, false),
                Err(_) => c,
            })
            .collect()
    }
}

impl Cipher for AtbashCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        Ok(Self::mirror(plaintext))
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        Ok(Self::mirror(ciphertext))
    }
}
