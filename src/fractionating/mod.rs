//! Fractionating ciphers built on a keyed Polybius square.
//!
//! Both ciphers lowercase their input, fold `'j'` onto `'i'`, work on the
//! letters in pairs, and put every non-letter back at its original index.
//! An odd final letter is paired with the filler; a trailing filler is
//! trimmed again only when it was padded in and the output length is odd
//! (see [`digraph::trim_filler`](crate::digraph::trim_filler)).

pub mod bifid;
pub mod playfair;

use crate::config::{Filler, Keyword};
use crate::error::Result;
use crate::polybius::{CharMap, PolybiusTable};

/// A Polybius square with its reverse map and filler, shared by Bifid and
/// Playfair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyedSquare {
    pub(crate) table: PolybiusTable,
    pub(crate) map: CharMap,
    pub(crate) filler: char,
}

impl KeyedSquare {
    pub(crate) fn from_keyword(keyword: &str, filler: char) -> Result<Self> {
        let keyword = Keyword::letters(keyword)?;
        Self::from_table(PolybiusTable::seeded(&keyword), filler)
    }

    pub(crate) fn from_table(table: PolybiusTable, filler: char) -> Result<Self> {
        let filler = Filler::new(filler)?.get();
        let map = CharMap::map_positions(&table)?;
        Ok(KeyedSquare { table, map, filler })
    }
}
