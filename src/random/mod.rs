//! Randomised convenience generators.
//!
//! These sit outside the core transforms: every cipher is deterministic
//! given an explicit configuration, and randomness only enters through the
//! helpers here. Callers choose the generator, so tests can pass a seeded
//! `StdRng`.

pub mod keystream;
pub mod lookup;

pub use keystream::random_keystream;
pub use lookup::{random_lookup_table, SymbolPool};
