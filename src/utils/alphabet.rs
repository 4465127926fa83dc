//! Alphabet position algebra.
//!
//! Maps a single Latin letter to its 0-based offset from `'a'` / `'A'`
//! and back. Only ASCII letters take part; every other character is
//! treated as a pass-through literal by the ciphers.

use crate::error::{CipherError, Result};

/// Number of letters in the Latin alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Returns `true` if `c` is a Latin letter that ciphers transform.
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Returns the position of `letter` in the alphabet, ignoring case.
///
/// # Errors
/// Returns [`CipherError::InvalidLetter`] if `letter` is not an ASCII letter.
pub fn index(letter: char) -> Result<u8> {
    if letter.is_ascii_lowercase() {
        Ok(letter as u8 - b'a')
    } else if letter.is_ascii_uppercase() {
        Ok(letter as u8 - b'A')
    } else {
        Err(CipherError::InvalidLetter(letter))
    }
}

/// Returns the letter at `position`, in upper or lower case.
///
/// Positions outside `0..26` wrap around.
pub fn letter(position: u8, uppercase: bool) -> char {
    let base = if uppercase { b'A' } else { b'a' };
    (base + position % ALPHABET_LEN) as char
}

/// Applies `shift` to a letter's position, keeping its case.
///
/// `shift` receives the position as `i64` and may return any integer;
/// the result is reduced modulo 26.
pub(crate) fn shift_letter<F>(c: char, shift: F) -> Result<char>
where
    F: FnOnce(i64) -> i64,
{
    let position = index(c)? as i64;
    let shifted = shift(position).rem_euclid(ALPHABET_LEN as i64) as u8;
    Ok(letter(shifted, c.is_ascii_uppercase()))
}
