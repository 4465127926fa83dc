//! Random letter keystreams.

use rand::Rng;
use tracing::debug;

use crate::utils::alphabet::{self, ALPHABET_LEN};

/// Returns `len` uniformly random lowercase letters.
pub fn random_keystream<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    debug!(len, "generating random keystream");
    (0..len)
        .map(|_| alphabet::letter(rng.gen_range(0..ALPHABET_LEN), false))
        .collect()
}
