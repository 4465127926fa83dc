//! Classical text ciphers.
//!
//! A collection of pre-modern encoding schemes: substitution ciphers
//! (Affine, Atbash, Caesar, ROT13, Vigenère with its Beaufort, Gronsfeld
//! and Running Key variants, Vernam), transposition ciphers (Columnar,
//! Rail Fence), fractionating ciphers (Bifid, Playfair), the Baconian
//! cipher and Morse code.
//!
//! None of these offer any real security. They are here for teaching,
//! puzzles and historical interest.
//!
//! # Architecture
//!
//! ```text
//! utils::alphabet   (letter ↔ position, case-aware)
//!     ↓
//! polybius          (keyed 5×5 square + reverse map)
//! digraph           (letter pairs, literal positions, filler trim)
//!     ↓
//! substitution / transposition / fractionating / codes
//!     ↓
//! Cipher            (encode / decode on a validated, immutable instance)
//! ```
//!
//! Every cipher validates its configuration on construction and is
//! read-only afterwards; `encode` and `decode` return a
//! [`Result`](error::Result).
//!
//! # Examples
//!
//! ```
//! use classical_ciphers::{BifidCipher, Cipher, VigenereCipher};
//!
//! let bifid = BifidCipher::new("SECRET").unwrap();
//! let encoded = bifid.encode("ATTACK AT DAWN").unwrap();
//! assert_eq!(encoded, "aecaby tv ktha");
//! assert_eq!(bifid.decode(&encoded).unwrap(), "attack at dawn");
//!
//! let vigenere = VigenereCipher::new("SECRET").unwrap();
//! assert_eq!(vigenere.encode("ATTACK AT DAWN").unwrap(), "sxvrgd ev htor");
//! ```
//!
//! Ciphers share the [`Cipher`] trait, so they can be used interchangeably:
//!
//! ```
//! use classical_ciphers::{AtbashCipher, Cipher, MorseCode, Rot13Cipher};
//!
//! let ciphers: Vec<Box<dyn Cipher>> = vec![
//!     Box::new(AtbashCipher::new()),
//!     Box::new(Rot13Cipher::default()),
//!     Box::new(MorseCode::new()),
//! ];
//! for cipher in &ciphers {
//!     let encoded = cipher.encode("hello world").unwrap();
//!     assert_eq!(cipher.decode(&encoded).unwrap(), "hello world");
//! }
//! ```

#![deny(clippy::all)]

pub mod cipher;
pub mod codes;
pub mod config;
pub mod digraph;
pub mod error;
pub mod fractionating;
pub mod polybius;
pub mod random;
pub mod substitution;
pub mod transposition;
pub mod utils;

pub use cipher::Cipher;
pub use codes::baconian::BaconianCipher;
pub use codes::morse::MorseCode;
pub use error::{CipherError, ErrorKind};
pub use fractionating::bifid::BifidCipher;
pub use fractionating::playfair::PlayfairCipher;
pub use substitution::affine::{AffineCipher, CaesarCipher, Rot13Cipher};
pub use substitution::atbash::AtbashCipher;
pub use substitution::beaufort::BeaufortCipher;
pub use substitution::gronsfeld::GronsfeldCipher;
pub use substitution::running_key::RunningKeyCipher;
pub use substitution::vernam::VernamCipher;
pub use substitution::vigenere::VigenereCipher;
pub use transposition::columnar::ColumnarTranspositionCipher;
pub use transposition::rail_fence::RailFenceCipher;
