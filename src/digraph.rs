//! Digraph splitting with literal-position bookkeeping.
//!
//! Bifid and Playfair work on the letters of a text only. Everything else
//! (spaces, punctuation, digits) is lifted out with its original index and
//! put back verbatim once the letters have been transformed.

use std::collections::BTreeMap;

use crate::utils::alphabet::is_letter;

/// An ordered pair of letters processed together.
pub type Digraph = (char, char);

/// Non-letter characters keyed by their character index in the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Literals(BTreeMap<usize, char>);

impl Literals {
    /// Number of recorded literals.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if the text had no literals.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Literal recorded at `position`, if any.
    pub fn get(&self, position: usize) -> Option<char> {
        self.0.get(&position).copied()
    }

    /// Interleaves `letters` with the recorded literals.
    ///
    /// Every literal lands at its recorded index. Letters fill the
    /// remaining positions in order. Literals whose index lies past the
    /// last letter are appended in order.
    pub fn reinsert<I>(&self, letters: I) -> String
    where
        I: IntoIterator<Item = char>,
    {
        let mut letters = letters.into_iter();
        let mut literals = self.0.iter().peekable();
        let mut out = String::new();
        let mut position = 0;

        loop {
            match literals.peek() {
                Some(&(&at, &c)) if at == position => {
                    out.push(c);
                    literals.next();
                }
                _ => match letters.next() {
                    Some(l) => out.push(l),
                    None => break,
                },
            }
            position += 1;
        }
        out.extend(literals.map(|(_, &c)| c));
        out
    }
}

/// Separates `text` into its letters and its positioned literals.
pub fn separate(text: &str) -> (Vec<char>, Literals) {
    let mut letters = Vec::with_capacity(text.len());
    let mut literals = BTreeMap::new();
    for (i, c) in text.chars().enumerate() {
        if is_letter(c) {
            letters.push(c);
        } else {
            literals.insert(i, c);
        }
    }
    (letters, Literals(literals))
}

/// Result of [`split`]: letter pairs plus the literals lifted out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digraphs {
    pairs: Vec<Digraph>,
    literals: Literals,
    padded: bool,
}

impl Digraphs {
    /// The letter pairs, in text order.
    pub fn pairs(&self) -> &[Digraph] {
        &self.pairs
    }

    /// The literals and their original positions.
    pub fn literals(&self) -> &Literals {
        &self.literals
    }

    /// `true` if the filler was appended to complete the last pair.
    pub fn is_padded(&self) -> bool {
        self.padded
    }
}

/// Splits `text` into consecutive letter pairs.
///
/// Literals between two letters do not break a pair; they are recorded at
/// their index and skipped. An unpaired final letter is paired with
/// `filler`.
///
/// # Examples
///
/// ```
/// use classical_ciphers::digraph::split;
///
/// let digraphs = split("ab c", 'x');
/// assert_eq!(digraphs.pairs(), &[('a', 'b'), ('c', 'x')]);
/// assert_eq!(digraphs.literals().get(2), Some(' '));
/// assert!(digraphs.is_padded());
/// ```
pub fn split(text: &str, filler: char) -> Digraphs {
    let (mut letters, literals) = separate(text);
    let padded = letters.len() % 2 == 1;
    if padded {
        letters.push(filler);
    }
    let pairs = letters.chunks_exact(2).map(|p| (p[0], p[1])).collect();
    Digraphs {
        pairs,
        literals,
        padded,
    }
}

/// Drops a trailing `filler` that was added synthetically.
///
/// The character is removed only when `padded` is set, the text has an odd
/// number of characters, and its last character is `filler`. Any other
/// text is returned unchanged.
pub fn trim_filler(mut text: String, padded: bool, filler: char) -> String {
    if padded && text.chars().count() % 2 == 1 && text.ends_with(filler) {
        text.pop();
    }
    text
}
