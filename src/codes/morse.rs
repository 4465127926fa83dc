//! International Morse code.
//!
//! Letters inside a word are separated by one space, words by two.
//! Characters without a code are copied through unchanged, in both
//! directions. Case-insensitive; decoded text is lowercase.

use crate::cipher::Cipher;
use crate::error::Result;
use crate::utils::text::normalize;

/// Character → dot/dash code table.
const MORSE_TABLE: [(char, &str); 54] = [
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('0', "-----"),
    (',', "--..--"),
    ('?', "..--.."),
    (':', "---..."),
    ('-', "-....-"),
    ('"', ".-..-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('=', "-...-"),
    ('.', ".-.-.-"),
    (';', "-.-.-."),
    ('/', "-..-."),
    ('\'', ".----."),
    ('_', "..--.-"),
    ('+', ".-.-."),
    ('@', ".--.-."),
    ('!', "-.-.--"),
    ('&', ".-..."),
    ('$', "...-..-"),
];

fn code_of(c: char) -> Option<&'static str> {
    MORSE_TABLE
        .iter()
        .find(|&&(k, _)| k == c)
        .map(|&(_, code)| code)
}

fn char_of(code: &str) -> Option<char> {
    MORSE_TABLE
        .iter()
        .find(|&&(_, v)| v == code)
        .map(|&(k, _)| k)
}

/// Morse encoder / decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MorseCode;

impl MorseCode {
    /// Creates the Morse codec.
    pub fn new() -> Self {
        MorseCode
    }
}

impl Cipher for MorseCode {
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{Cipher, MorseCode};
    ///
    /// let encoded = MorseCode.encode("ATTACK AT DAWN").unwrap();
    /// assert_eq!(encoded, ".- - - .- -.-. -.-  .- -  -.. .- .-- -.");
    /// ```
    fn encode(&self, plaintext: &str) -> Result<String> {
        let text = normalize(plaintext, false);
        let mut out = String::with_capacity(text.len() * 4);
        for c in text.chars() {
            if c == ' ' {
                out.push_str("  ");
                continue;
            }
            if !out.is_empty() && !out.ends_with(' ') {
                out.push(' ');
            }
            match code_of(c) {
                Some(code) => out.push_str(code),
                None => out.push(c),
            }
        }
        Ok(out.trim().to_string())
    }

    fn decode(&self, ciphertext: &str) -> Result<String> {
        let text = normalize(ciphertext, false);
        let mut out = String::with_capacity(text.len() / 2 + 1);
        for token in text.split(' ') {
            if token.is_empty() {
                out.push(' ');
                continue;
            }
            match char_of(token) {
                Some(c) => out.push(c),
                None => out.push_str(token),
            }
        }
        Ok(out.trim().to_string())
    }
}
