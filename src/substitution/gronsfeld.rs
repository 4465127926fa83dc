//! Gronsfeld: Vigenère keyed by numbers instead of letters.
//!
//! Each shift `n` in `1..=26` stands for the `n`-th letter of the alphabet
//! (`1 → a`, `2 → b`, ...). An integer key is read digit by digit, so the
//! digit `0` is rejected.

use super::vigenere::VigenereCipher;
use crate::cipher::Cipher;
use crate::config::Keyword;
use crate::error::{CipherError, Result};
use crate::utils::alphabet::{self, ALPHABET_LEN};

/// Vigenère cipher whose keyword is derived from numeric shifts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GronsfeldCipher(VigenereCipher);

impl GronsfeldCipher {
    /// Creates a Gronsfeld cipher from the decimal digits of `key`.
    ///
    /// # Errors
    /// [`CipherError::InvalidDigit`] if any digit is `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{Cipher, GronsfeldCipher};
    ///
    /// let cipher = GronsfeldCipher::new(69421).unwrap();
    /// assert_eq!(cipher.keyword(), "fidba");
    /// assert_eq!(cipher.encode("ATTACK AT DAWN").unwrap(), "fbwbcp du iizo");
    ///
    /// assert!(GronsfeldCipher::new(105).is_err());
    /// ```
    pub fn new(key: u64) -> Result<Self> {
        let digits: Vec<u32> = key
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .collect();
        Self::from_shifts(&digits)
    }

    /// Creates a Gronsfeld cipher from explicit shifts.
    ///
    /// # Errors
    /// - [`CipherError::EmptyKeyword`] if `shifts` is empty.
    /// - [`CipherError::InvalidDigit`] if a shift is outside `1..=26`.
    pub fn from_shifts(shifts: &[u32]) -> Result<Self> {
        let keyword = shifts
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                if (1..=ALPHABET_LEN as u32).contains(&value) {
                    Ok(alphabet::letter((value - 1) as u8, false))
                } else {
                    Err(CipherError::InvalidDigit { index, value })
                }
            })
            .collect::<Result<String>>()?;
        Ok(GronsfeldCipher(VigenereCipher::from_keyword(
            Keyword::letters(&keyword)?,
        )))
    }

    /// The letter keyword derived from the shifts.
    pub fn keyword(&self) -> &str {
        self.0.keyword()
    }
}

impl Cipher for GronsfeldCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        self.0.encode(plaintext)
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        self.0.decode(ciphertext)
    }
}
