//! Polybius square construction and coordinate lookup.
//!
//! A [`PolybiusTable`] holds the 25 letters of the alphabet without `'j'`,
//! keyword first, in five rows of five. [`CharMap`] is its inverse, from a
//! letter to its `(row, col)` cell. `'j'` shares the cell of `'i'`.

use tracing::debug;

use crate::config::Keyword;
use crate::error::{CipherError, Result};
use crate::utils::alphabet::{self, ALPHABET_LEN};

/// Side length of the square.
pub const GRID_SIDE: usize = 5;

/// Number of cells in the square.
pub const GRID_CELLS: usize = GRID_SIDE * GRID_SIDE;

/// Alphabet with `'j'` removed, in order.
const TABLE_ALPHABET: &str = "abcdefghiklmnopqrstuvwxyz";

/// Folds `'j'` onto `'i'` and lowercases.
#[inline]
pub(crate) fn fold(c: char) -> char {
    match c.to_ascii_lowercase() {
        'j' => 'i',
        other => other,
    }
}

/// A cell coordinate in the square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A 5×5 grid of 25 distinct lowercase letters, `'j'` excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolybiusTable {
    cells: [char; GRID_CELLS],
}

impl PolybiusTable {
    /// Builds a square seeded with `keyword`.
    ///
    /// The keyword is trimmed, lowercased and folded (`'j'` → `'i'`), then
    /// followed by the alphabet; duplicates are dropped keeping the first
    /// occurrence, and the first 25 letters fill the square row by row.
    ///
    /// # Errors
    /// - [`CipherError::EmptyKeyword`] if the keyword is blank.
    /// - [`CipherError::InvalidKeyword`] if it holds anything but letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use classical_ciphers::polybius::PolybiusTable;
    ///
    /// let table = PolybiusTable::build("SECRET").unwrap();
    /// assert_eq!(table.row(0), &['s', 'e', 'c', 'r', 't']);
    /// ```
    pub fn build(keyword: &str) -> Result<Self> {
        let keyword = Keyword::letters(keyword)?;
        Ok(Self::seeded(&keyword))
    }

    /// Builds a square from an already validated keyword.
    pub(crate) fn seeded(keyword: &Keyword) -> Self {
        let mut seen = [false; ALPHABET_LEN as usize];
        let mut cells = ['a'; GRID_CELLS];
        let mut filled = 0;

        let candidates = keyword.as_str().chars().map(fold).chain(TABLE_ALPHABET.chars());
        for c in candidates {
            if filled == GRID_CELLS {
                break;
            }
            // Keyword letters are validated and folded, so index() cannot fail.
            let Ok(i) = alphabet::index(c) else { continue };
            if seen[i as usize] {
                continue;
            }
            seen[i as usize] = true;
            cells[filled] = c;
            filled += 1;
        }

        debug!(keyword_len = keyword.len(), "built polybius table");
        PolybiusTable { cells }
    }

    /// Builds a square from 25 explicit cells, row-major.
    ///
    /// Cells are lowercased. The result is checked through
    /// [`CharMap::map_positions`].
    ///
    /// # Errors
    /// [`CipherError::MalformedTable`] unless the cells are exactly the 25
    /// letters other than `'j'`.
    pub fn from_cells(cells: [char; GRID_CELLS]) -> Result<Self> {
        let table = PolybiusTable {
            cells: cells.map(|c| c.to_ascii_lowercase()),
        };
        CharMap::map_positions(&table)?;
        Ok(table)
    }

    /// Letter at `(row, col)`. Both coordinates must be below 5.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> char {
        self.cells[row * GRID_SIDE + col]
    }

    /// Letter at `position`.
    #[inline]
    pub fn get(&self, position: Position) -> char {
        self.at(position.row, position.col)
    }

    /// One row of the square.
    pub fn row(&self, row: usize) -> &[char] {
        &self.cells[row * GRID_SIDE..(row + 1) * GRID_SIDE]
    }

    /// All 25 cells, row-major.
    pub fn cells(&self) -> &[char; GRID_CELLS] {
        &self.cells
    }
}

/// Reverse lookup from letter to its cell in a [`PolybiusTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharMap {
    positions: [Option<Position>; ALPHABET_LEN as usize],
}

impl CharMap {
    /// Builds the letter → `(row, col)` map of `table`.
    ///
    /// # Errors
    /// [`CipherError::MalformedTable`] if the table holds a non-letter,
    /// a `'j'`, or a repeated letter.
    pub fn map_positions(table: &PolybiusTable) -> Result<Self> {
        let mut positions = [None; ALPHABET_LEN as usize];
        for (i, &c) in table.cells.iter().enumerate() {
            if c == 'j' {
                return Err(CipherError::MalformedTable);
            }
            let slot = alphabet::index(c).map_err(|_| CipherError::MalformedTable)? as usize;
            if positions[slot].is_some() {
                return Err(CipherError::MalformedTable);
            }
            positions[slot] = Some(Position {
                row: i / GRID_SIDE,
                col: i % GRID_SIDE,
            });
        }
        Ok(CharMap { positions })
    }

    /// Cell of `c`, folding case and `'j'` onto `'i'`.
    ///
    /// # Errors
    /// [`CipherError::UnmappedCharacter`] if `c` is not a Latin letter.
    pub fn locate(&self, c: char) -> Result<Position> {
        let slot = alphabet::index(fold(c)).map_err(|_| CipherError::UnmappedCharacter(c))?;
        self.positions[slot as usize].ok_or(CipherError::UnmappedCharacter(c))
    }
}
