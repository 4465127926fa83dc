//! Monoalphabetic and polyalphabetic substitution ciphers.
//!
//! Every member of this family maps each letter through
//! `(op(index(c), index(k))) mod 26` and passes any other character
//! through untouched. The variants differ only in the operator and in how
//! the key letters are derived:
//!
//! | Cipher | encode | decode | key |
//! |---|---|---|---|
//! | Affine / Caesar / ROT13 | `a·x + b` | `a⁻¹·(x − b)` | fixed `a`, `b` |
//! | Atbash | `25 − x` | `25 − x` | none |
//! | Vigenère | `x + k` | `x − k` | repeated keyword |
//! | Beaufort variant | `x − k` | `x + k` | repeated keyword |
//! | Gronsfeld | `x + k` | `x − k` | digits as letters |
//! | Running Key | `x + k` | `x − k` | LCM-combined keywords |
//! | Vernam | `x + k` | `x − k` | one-time keystream |

pub mod affine;
pub mod atbash;
pub mod beaufort;
pub mod gronsfeld;
pub mod running_key;
pub mod vernam;
pub mod vigenere;

use crate::utils::alphabet::{self, ALPHABET_LEN};

/// How a key letter is combined with a text letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combine {
    Add,
    Subtract,
}

impl Combine {
    fn apply(self, x: u8, k: u8) -> u8 {
        let n = ALPHABET_LEN;
        match self {
            Combine::Add => (x + k) % n,
            Combine::Subtract => (x + n - k) % n,
        }
    }
}

/// Combines `text` with `key` position by position.
///
/// `key` holds alphabet positions. The key advances on every character of
/// `text`, letters or not, cycling when shorter. Output letters are
/// lowercase; other characters pass through unchanged.
pub(crate) fn combine(text: &str, key: &[u8], op: Combine) -> String {
    if key.is_empty() {
        return text.to_string();
    }
    text.chars()
        .zip(key.iter().cycle())
        .map(|(c, &k)| match alphabet::index(c) {
            Ok(x) => alphabet::letter(op.apply(x, k), false),
            _ => c,
        })
        .collect()
}

/// Converts a validated letter keyword into alphabet positions.
pub(crate) fn key_positions(keyword: &str) -> Vec<u8> {
    keyword
        .chars()
        .filter_map(|c| alphabet::index(c).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_add_wraps() {
        assert_eq!(combine("xyz", &[3], Combine::Add), "abc");
    }

    #[test]
    fn test_combine_subtract_wraps() {
        assert_eq!(combine("abc", &[3], Combine::Subtract), "xyz");
    }

    #[test]
    fn test_combine_key_advances_on_literals() {
        // the space consumes key position 1
        assert_eq!(combine("a a", &[0, 25, 1], Combine::Add), "a b");
    }

    #[test]
    fn test_combine_empty_key_is_identity() {
        assert_eq!(combine("hello", &[], Combine::Add), "hello");
    }

    #[test]
    fn test_key_positions() {
        assert_eq!(key_positions("abz"), vec![0, 1, 25]);
    }
}
