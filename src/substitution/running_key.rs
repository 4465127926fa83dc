//! Running Key: Vigenère keyed by several keywords folded into one.
//!
//! All keywords are stretched to the least common multiple of their
//! lengths (optionally capped by a ceiling). Starting from the first
//! stretched keyword, each further keyword is added letter by letter to
//! the running accumulator. The final accumulator is the effective
//! Vigenère keyword.

use tracing::debug;

use super::vigenere::VigenereCipher;
use super::{combine, key_positions, Combine};
use crate::cipher::Cipher;
use crate::config::Keyword;
use crate::error::{CipherError, Result};
use crate::utils::modular::lcm;
use crate::utils::text::repeat_to_length;

/// Vigenère cipher with a keyword derived from several keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningKeyCipher {
    inner: VigenereCipher,
    span: usize,
}

impl RunningKeyCipher {
    /// Derives the running key from `keywords`.
    ///
    /// `max_lcm` caps the derived keyword length.
    ///
    /// # Errors
    /// - [`CipherError::InvalidCeiling`] if `max_lcm` is `Some(0)`.
    /// - [`CipherError::EmptyKeyword`] if `keywords` is empty or any is blank.
    /// - [`CipherError::InvalidKeyword`] if any keyword holds non-letters.
    /// - [`CipherError::KeystreamOverflow`] if the LCM overflows and no
    ///   ceiling was given.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{Cipher, RunningKeyCipher};
    ///
    /// let cipher = RunningKeyCipher::new(&["CATS", "ARE", "CUTER"], None).unwrap();
    /// assert_eq!(cipher.span(), 60);
    ///
    /// let encoded = cipher.encode("ATTACK AT DAWN").unwrap();
    /// assert_eq!(cipher.decode(&encoded).unwrap(), "attack at dawn");
    /// ```
    pub fn new<S: AsRef<str>>(keywords: &[S], max_lcm: Option<usize>) -> Result<Self> {
        if max_lcm == Some(0) {
            return Err(CipherError::InvalidCeiling(0));
        }
        let keywords = keywords
            .iter()
            .map(|k| Keyword::letters(k.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let (first, rest) = keywords.split_first().ok_or(CipherError::EmptyKeyword)?;

        let full = keywords
            .iter()
            .try_fold(1usize, |acc, k| lcm(acc, k.len()));
        let span = match (full, max_lcm) {
            (Some(l), Some(cap)) => l.min(cap),
            (Some(l), None) => l,
            (None, Some(cap)) => cap,
            (None, None) => return Err(CipherError::KeystreamOverflow),
        };

        let mut accumulator = repeat_to_length(first.as_str(), span);
        for keyword in rest {
            let stretched = repeat_to_length(keyword.as_str(), span);
            accumulator = combine(&accumulator, &key_positions(&stretched), Combine::Add);
        }

        debug!(keywords = keywords.len(), span, "running key derived");
        Ok(RunningKeyCipher {
            inner: VigenereCipher::from_keyword(Keyword::letters(&accumulator)?),
            span,
        })
    }

    /// The derived keyword.
    pub fn keyword(&self) -> &str {
        self.inner.keyword()
    }

    /// Length of the derived keyword (the possibly capped LCM).
    pub fn span(&self) -> usize {
        self.span
    }
}

impl Cipher for RunningKeyCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        self.inner.encode(plaintext)
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        self.inner.decode(ciphertext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYWORDS: [&str; 5] = ["CATS", "ARE", "CUTER", "THAN", "DOGS"];

    #[test]
    fn test_single_keyword_is_plain_vigenere() {
        let running = RunningKeyCipher::new(&["lemon"], None).unwrap();
        assert_eq!(running.keyword(), "lemon");
        assert_eq!(running.encode("attack at dawn").unwrap(), "lxfopv mh oeib");
    }

    #[test]
    fn test_keywords_accumulate() {
        let running = RunningKeyCipher::new(&KEYWORDS, None).unwrap();
        assert_eq!(running.span(), 60);
        assert_eq!(
            running.keyword(),
            "agwbgbthgmsvrquzjsdfepjfpoxqtqbivzhdsfhortsstxkucdfridqqwous"
        );
        assert_eq!(running.encode("ATTACK AT DAWN").unwrap(), "azpbil hz vvnd");
        assert_eq!(running.decode("azpbil hz vvnd").unwrap(), "attack at dawn");
    }

    #[test]
    fn test_ceiling_caps_keyword() {
        let running = RunningKeyCipher::new(&KEYWORDS, Some(7)).unwrap();
        assert_eq!(running.span(), 7);
        assert_eq!(running.keyword(), "agwbgbt");
        assert_eq!(running.encode("ATTACK AT DAWN").unwrap(), "azpbil az egxg");
    }

    #[test]
    fn test_ceiling_above_lcm_is_ignored() {
        let running = RunningKeyCipher::new(&["ab", "abc"], Some(100)).unwrap();
        assert_eq!(running.span(), 6);
    }

    #[test]
    fn test_zero_ceiling_rejected() {
        assert_eq!(
            RunningKeyCipher::new(&KEYWORDS, Some(0)),
            Err(CipherError::InvalidCeiling(0))
        );
    }

    #[test]
    fn test_empty_keyword_list_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(
            RunningKeyCipher::new(&none, None),
            Err(CipherError::EmptyKeyword)
        );
    }

    #[test]
    fn test_blank_keyword_rejected() {
        assert_eq!(
            RunningKeyCipher::new(&["abc", "  "], None),
            Err(CipherError::EmptyKeyword)
        );
    }
}
