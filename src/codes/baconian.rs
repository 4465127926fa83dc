//! Baconian cipher: every letter becomes a fixed five-letter code.
//!
//! The lookup table maps each of the 26 letters to a distinct code. With
//! the two-symbol pool (`a`/`b`) this is Bacon's classic biliteral
//! cipher; with the full alphabet the codes look like ordinary letters.
//! Case-insensitive; non-letters pass through.

use std::collections::HashMap;

use tracing::debug;

use crate::cipher::Cipher;
use crate::error::{CipherError, Result};
use crate::utils::alphabet::{self, is_letter, ALPHABET_LEN};
use crate::utils::text::normalize;

/// Length of every Baconian code.
pub const CODE_LEN: usize = 5;

/// Letter → code table and its exact inverse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    codes: [String; ALPHABET_LEN as usize],
    reverse: HashMap<String, char>,
}

impl LookupTable {
    /// The classic 26-letter table: letter `n` is `n` in five binary
    /// digits, with `a` for 0 and `b` for 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::codes::baconian::LookupTable;
    ///
    /// let table = LookupTable::classic();
    /// assert_eq!(table.code('a').unwrap(), "aaaaa");
    /// assert_eq!(table.code('z').unwrap(), "bbaab");
    /// ```
    pub fn classic() -> Self {
        let codes = (0..ALPHABET_LEN as usize).map(|n| {
            (0..CODE_LEN)
                .rev()
                .map(|bit| if (n >> bit) & 1 == 1 { 'b' } else { 'a' })
                .collect::<String>()
        });
        Self::from_distinct(codes.collect())
    }

    /// Builds a table from 26 codes, in letter order `a..=z`.
    ///
    /// Codes are lowercased.
    ///
    /// # Errors
    /// [`CipherError::InvalidLookupTable`] unless there are exactly 26
    /// distinct codes of five Latin letters each.
    pub fn from_codes<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes: Vec<String> = codes
            .into_iter()
            .map(|c| c.as_ref().to_lowercase())
            .collect();
        if codes.len() != ALPHABET_LEN as usize {
            return Err(CipherError::InvalidLookupTable(format!(
                "expected 26 codes, got {}",
                codes.len()
            )));
        }
        for code in &codes {
            if code.chars().count() != CODE_LEN || !code.chars().all(is_letter) {
                return Err(CipherError::InvalidLookupTable(format!(
                    "code {:?} is not five Latin letters",
                    code
                )));
            }
        }
        let table = Self::from_distinct(codes);
        if table.reverse.len() != ALPHABET_LEN as usize {
            return Err(CipherError::InvalidLookupTable(
                "codes are not distinct".to_string(),
            ));
        }
        Ok(table)
    }

    /// Builds a table from 26 codes known to be valid.
    pub(crate) fn from_distinct(codes: Vec<String>) -> Self {
        let reverse = codes
            .iter()
            .enumerate()
            .map(|(i, code)| (code.clone(), alphabet::letter(i as u8, false)))
            .collect();
        let mut iter = codes.into_iter();
        let codes = std::array::from_fn(|_| iter.next().unwrap_or_default());
        LookupTable { codes, reverse }
    }

    /// Code of `letter`, case-insensitive.
    ///
    /// # Errors
    /// [`CipherError::InvalidLetter`] if `letter` is not a Latin letter.
    pub fn code(&self, letter: char) -> Result<&str> {
        Ok(&self.codes[alphabet::index(letter)? as usize])
    }

    /// Letter whose code is `code`, if any.
    pub fn letter(&self, code: &str) -> Option<char> {
        self.reverse.get(code).copied()
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::classic()
    }
}

/// Steganographic letter-to-code substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaconianCipher {
    table: LookupTable,
}

impl BaconianCipher {
    /// Creates a Baconian cipher over `table`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::{BaconianCipher, Cipher};
    /// use classical_ciphers::codes::baconian::LookupTable;
    ///
    /// let cipher = BaconianCipher::new(LookupTable::classic());
    /// assert_eq!(cipher.encode("Hi!").unwrap(), "aabbbabaaa!");
    /// assert_eq!(cipher.decode("aabbbabaaa!").unwrap(), "hi!");
    /// ```
    pub fn new(table: LookupTable) -> Self {
        debug!("baconian cipher ready");
        BaconianCipher { table }
    }

    /// The lookup table in use.
    pub fn table(&self) -> &LookupTable {
        &self.table
    }
}

impl Cipher for BaconianCipher {
    fn encode(&self, plaintext: &str) -> Result<String> {
        let text = normalize(plaintext, false);
        let mut out = String::with_capacity(text.len() * CODE_LEN);
        for c in text.chars() {
            if is_letter(c) {
                out.push_str(self.table.code(c)?);
            } else {
                out.push(c);
            }
        }
        Ok(out)
    }

    /// Decodes five letters at a time; non-letters between codes are
    /// copied through.
    ///
    /// # Errors
    /// [`CipherError::UnknownSequence`] if a five-character window matches
    /// no code, including a truncated window at the end of the text.
    fn decode(&self, ciphertext: &str) -> Result<String> {
        let chars: Vec<char> = normalize(ciphertext, false).chars().collect();
        let mut out = String::with_capacity(chars.len() / CODE_LEN + 1);
        let mut i = 0;

        while i < chars.len() {
            if !is_letter(chars[i]) {
                out.push(chars[i]);
                i += 1;
                continue;
            }
            let end = (i + CODE_LEN).min(chars.len());
            let window: String = chars[i..end].iter().collect();
            let letter = self
                .table
                .letter(&window)
                .ok_or(CipherError::UnknownSequence {
                    sequence: window,
                    position: i,
                })?;
            out.push(letter);
            i = end;
        }
        Ok(out)
    }
}
