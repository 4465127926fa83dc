//! Affine cipher and its Caesar / ROT13 specialisations.
//!
//! Encoding: `E(x) = (a·x + b) mod 26`
//! Decoding: `D(x) = a⁻¹·(x − b) mod 26`
//!
//! Caesar is the affine map with `a = 1`; ROT13 is Caesar with offset 13.
//! Both are thin wrappers that build an [`AffineCipher`] and delegate.

use tracing::debug;

use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::utils::alphabet::{self, ALPHABET_LEN};
use crate::utils::modular::{gcd, mod_inverse};
use crate::utils::text::normalize;

const MODULUS: i64 = ALPHABET_LEN as i64;

/// Offset applied by ROT13.
pub const ROT13_OFFSET: i64 = 13;

/// Monoalphabetic affine substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineCipher {
    a: i64,
    b: i64,
    inverse: i64,
    case_sensitive: bool,
}

impl AffineCipher {
    /// Creates an affine cipher with multiplier `a` and offset `b`.
    ///
    /// When `case_sensitive` is `false`, text is lowercased before
    /// processing; otherwise each letter keeps its case.
    ///
    /// # Errors
    /// [`CipherError::InvalidMultiplier`] if `a` is not coprime with 26.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{AffineCipher, Cipher};
    ///
    /// let cipher = AffineCipher::new(3, 5, true).unwrap();
    /// assert_eq!(cipher.encode("ATTACK AT DAWN").unwrap(), "FKKFLJ FK OFTS");
    ///
    /// assert!(AffineCipher::new(2, 5, true).is_err());
    /// ```
    pub fn new(a: i64, b: i64, case_sensitive: bool) -> Result<Self> {
        if gcd(a, MODULUS) != 1 {
            return Err(CipherError::InvalidMultiplier(a));
        }
        let inverse = mod_inverse(a, MODULUS).ok_or(CipherError::InvalidMultiplier(a))?;
        debug!(case_sensitive, "affine cipher ready");
        Ok(AffineCipher {
            a: a.rem_euclid(MODULUS),
            b: b.rem_euclid(MODULUS),
            inverse,
            case_sensitive,
        })
    }

    /// The multiplier, reduced modulo 26.
    pub fn multiplier(&self) -> i64 {
        self.a
    }

    /// The offset, reduced modulo 26.
    pub fn offset(&self) -> i64 {
        self.b
    }

    /// The precomputed inverse of the multiplier modulo 26.
    pub fn inverse_multiplier(&self) -> i64 {
        self.inverse
    }

    fn map_letters<F>(&self, text: &str, f: F) -> Result<String>
    where
        F: Fn(i64) -> i64,
    {
        normalize(text, self.case_sensitive)
            .chars()
            .map(|c| {
                if alphabet::is_letter(c) {
                    alphabet::shift_letter(c, &f)
                } else {
                    Ok(c)
                }
            })
            .collect()
    }
}

impl Cipher for AffineCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        self.map_letters(plaintext, |x| self.a * x + self.b)
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        self.map_letters(ciphertext, |x| self.inverse * (x - self.b))
    }
}

/// Shift cipher: the affine map with multiplier 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaesarCipher(AffineCipher);

impl CaesarCipher {
    /// Creates a Caesar cipher shifting letters by `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{CaesarCipher, Cipher};
    ///
    /// let cipher = CaesarCipher::new(4, true);
    /// assert_eq!(cipher.encode("ATTACK AT DAWN").unwrap(), "EXXEGO EX HEAR");
    /// ```
    pub fn new(offset: i64, case_sensitive: bool) -> Self {
        let b = offset.rem_euclid(MODULUS);
        debug!(case_sensitive, "caesar cipher ready");
        CaesarCipher(AffineCipher {
            a: 1,
            b,
            inverse: 1,
            case_sensitive,
        })
    }

    /// The shift, reduced modulo 26.
    pub fn offset(&self) -> i64 {
        self.0.offset()
    }
}

impl Cipher for CaesarCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        self.0.encode(plaintext)
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        self.0.decode(ciphertext)
    }
}

/// Caesar cipher with the fixed offset 13; encoding is its own inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rot13Cipher(CaesarCipher);

impl Rot13Cipher {
    /// Creates a ROT13 cipher.
    pub fn new(case_sensitive: bool) -> Self {
        Rot13Cipher(CaesarCipher::new(ROT13_OFFSET, case_sensitive))
    }
}

impl Default for Rot13Cipher {
    fn default() -> Self {
        Self::new(false)
    }
}

impl Cipher for Rot13Cipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        self.0.encode(plaintext)
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        self.0.decode(ciphertext)
    }
}
