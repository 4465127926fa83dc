//! The common interface of every configured cipher.

use crate::error::Result;

/// A configured, immutable text cipher.
///
/// Implementations never mutate themselves, so one instance can serve any
/// number of independent `encode` / `decode` calls, from any thread.
pub trait Cipher {
    /// Encodes `plaintext`.
    fn encode(&self, plaintext: &str) -> Result<String>;

    /// Decodes `ciphertext`.
    fn decode(&self, ciphertext: &str) -> Result<String>;
}
