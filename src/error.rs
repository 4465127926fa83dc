//! Error types for the classical ciphers library.

use thiserror::Error;

/// Errors produced by cipher construction and by `encode` / `decode`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A character that should be a single Latin letter is not one.
    #[error("Expected a Latin letter, found {0:?}")]
    InvalidLetter(char),
    /// Keyword is empty after trimming.
    #[error("Please specify a proper keyword")]
    EmptyKeyword,
    /// Keyword contains something other than Latin letters.
    #[error("Keyword may only contain Latin letters, found {0:?}")]
    InvalidKeyword(char),
    /// Affine multiplier shares a factor with 26.
    #[error("Expected 'a' to be co-prime with 26, got {0}")]
    InvalidMultiplier(i64),
    /// Rail Fence needs at least two rails.
    #[error("Rail count must be at least 2, got {0}")]
    InvalidRailCount(usize),
    /// Gronsfeld shift outside `1..=26`.
    #[error("Shift at index {index} must be between 1 and 26, got {value}")]
    InvalidDigit { index: usize, value: u32 },
    /// Running Key LCM ceiling is not a natural number.
    #[error("LCM ceiling must be a natural number, got {0}")]
    InvalidCeiling(usize),
    /// Running Key LCM does not fit in memory and no ceiling was given.
    #[error("LCM of keyword lengths overflows; supply a ceiling")]
    KeystreamOverflow,
    /// Filler is not a usable table letter.
    #[error("Filler must be a Latin letter other than 'j', got {0:?}")]
    InvalidFiller(char),
    /// Baconian lookup table is not 26 distinct five-letter codes.
    #[error("Invalid lookup table: {0}")]
    InvalidLookupTable(String),
    /// Keystream and text lengths differ under strict pairing.
    #[error("The length of the text ({text}) should be equal to the length of the keystream ({keystream})")]
    LengthMismatch { text: usize, keystream: usize },
    /// Baconian decode hit a window that matches no table entry.
    #[error("Unable to decode invalid sequence {sequence:?} at position {position}")]
    UnknownSequence { sequence: String, position: usize },
    /// A character assumed present in a table is absent.
    #[error("Character {0:?} is not present in the table")]
    UnmappedCharacter(char),
    /// A Polybius table does not hold exactly 25 distinct letters.
    #[error("Polybius table must contain 25 distinct letters (all but 'j')")]
    MalformedTable,
}

/// Coarse classification of [`CipherError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected at construction time.
    Configuration,
    /// Keystream length differs from text length.
    LengthMismatch,
    /// Ciphertext is not well formed for the cipher.
    DecodeFormat,
    /// A table lookup failed.
    Lookup,
}

impl CipherError {
    /// Returns the taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CipherError::EmptyKeyword
            | CipherError::InvalidKeyword(_)
            | CipherError::InvalidMultiplier(_)
            | CipherError::InvalidRailCount(_)
            | CipherError::InvalidDigit { .. }
            | CipherError::InvalidCeiling(_)
            | CipherError::KeystreamOverflow
            | CipherError::InvalidFiller(_)
            | CipherError::InvalidLookupTable(_) => ErrorKind::Configuration,
            CipherError::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            CipherError::UnknownSequence { .. } => ErrorKind::DecodeFormat,
            CipherError::InvalidLetter(_)
            | CipherError::UnmappedCharacter(_)
            | CipherError::MalformedTable => ErrorKind::Lookup,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_keyword() {
        let err = CipherError::EmptyKeyword;
        assert_eq!(format!("{}", err), "Please specify a proper keyword");
    }

    #[test]
    fn test_display_invalid_multiplier() {
        let err = CipherError::InvalidMultiplier(2);
        assert_eq!(
            format!("{}", err),
            "Expected 'a' to be co-prime with 26, got 2"
        );
    }

    #[test]
    fn test_display_length_mismatch() {
        let err = CipherError::LengthMismatch {
            text: 14,
            keystream: 3,
        };
        assert_eq!(
            format!("{}", err),
            "The length of the text (14) should be equal to the length of the keystream (3)"
        );
    }

    #[test]
    fn test_display_unknown_sequence() {
        let err = CipherError::UnknownSequence {
            sequence: "zzzzz".to_string(),
            position: 5,
        };
        assert_eq!(
            format!("{}", err),
            "Unable to decode invalid sequence \"zzzzz\" at position 5"
        );
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(CipherError::EmptyKeyword.kind(), ErrorKind::Configuration);
        assert_eq!(
            CipherError::InvalidRailCount(1).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            CipherError::LengthMismatch {
                text: 1,
                keystream: 2
            }
            .kind(),
            ErrorKind::LengthMismatch
        );
        assert_eq!(
            CipherError::UnknownSequence {
                sequence: String::new(),
                position: 0
            }
            .kind(),
            ErrorKind::DecodeFormat
        );
        assert_eq!(CipherError::UnmappedCharacter('?').kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CipherError::EmptyKeyword, CipherError::EmptyKeyword);
        assert_ne!(CipherError::EmptyKeyword, CipherError::MalformedTable);
    }
}
