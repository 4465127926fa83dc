//! Table-driven codes: Baconian and Morse.
//!
//! Unlike the ciphers, these replace each letter by a multi-character
//! code from a fixed table.

pub mod baconian;
pub mod morse;
