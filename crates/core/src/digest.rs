//! SHA-256 helpers
//!
//! Every digest in a header is lowercase hex. The final hash is taken over
//! the hex text of the initial hash followed by the suffix text.

use sha2::{Digest, Sha256};

use crate::params::DIGEST_SIZE;

/// Hex digest of arbitrary bytes
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Hex digest of `initial_hash ++ suffix`
pub fn pow_hash(initial_hash: &str, suffix: &str) -> String {
    PowHasher::new(initial_hash).hex_digest(suffix)
}

/// Candidate hasher with the initial hash already absorbed
///
/// Cloning a SHA-256 state is cheaper than re-hashing the 64-byte prefix
/// for every candidate, and gives the same digest.
#[derive(Clone)]
pub struct PowHasher {
    prefix: Sha256,
}

impl PowHasher {
    /// Absorb `initial_hash` as text
    pub fn new(initial_hash: &str) -> Self {
        let mut prefix = Sha256::new();
        prefix.update(initial_hash.as_bytes());
        Self { prefix }
    }

    /// Raw digest of `prefix ++ suffix`
    #[inline(always)]
    pub fn digest(&self, suffix: &str) -> [u8; DIGEST_SIZE] {
        let mut hasher = self.prefix.clone();
        hasher.update(suffix.as_bytes());
        hasher.finalize().into()
    }

    /// Hex digest of `prefix ++ suffix`
    pub fn hex_digest(&self, suffix: &str) -> String {
        hex::encode(self.digest(suffix))
    }
}
