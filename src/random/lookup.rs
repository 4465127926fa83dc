//! Random Baconian lookup tables.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::codes::baconian::{LookupTable, CODE_LEN};
use crate::utils::alphabet::ALPHABET_LEN;

/// Symbols a generated Baconian code may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolPool {
    /// Only `'a'` and `'b'`: the classic two-symbol encoding.
    #[default]
    Binary,
    /// All 26 letters, disguising the code as ordinary text.
    Alphabet,
}

impl SymbolPool {
    fn symbols(self) -> &'static [u8] {
        match self {
            SymbolPool::Binary => b"ab",
            SymbolPool::Alphabet => b"abcdefghijklmnopqrstuvwxyz",
        }
    }
}

/// Generates a table of 26 distinct random five-symbol codes.
pub fn random_lookup_table<R: Rng + ?Sized>(rng: &mut R, pool: SymbolPool) -> LookupTable {
    let symbols = pool.symbols();
    let mut seen = HashSet::with_capacity(ALPHABET_LEN as usize);
    let mut codes = Vec::with_capacity(ALPHABET_LEN as usize);

    while codes.len() < ALPHABET_LEN as usize {
        let code: String = (0..CODE_LEN)
            .map(|_| symbols[rng.gen_range(0..symbols.len())] as char)
            .collect();
        if seen.insert(code.clone()) {
            codes.push(code);
        }
    }

    debug!(?pool, "generated random lookup table");
    LookupTable::from_distinct(codes)
}
