//! Sequential proof-of-work search
//!
//! The search walks [`SuffixSequence`] in order and stops at the first suffix
//! whose final hash has enough leading zero bits, so the result is the
//! minimal suffix in enumeration order for that file and difficulty.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::digest::{PowHasher, sha256_hex};
use crate::error::{Error, Result};
use crate::header::Header;
use crate::params::DIGEST_BITS;
use crate::sequence::SuffixSequence;
use crate::zero_bits::{leading_zero_bits, meets_difficulty};

/// Outcome of a successful search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MiningResult {
    /// Hex digest of the input bytes
    pub initial_hash: String,
    /// First qualifying suffix
    pub suffix: String,
    /// Hex digest of `initial_hash ++ suffix`
    pub hash: String,
    /// Leading zero bits of `hash`, at least the requested difficulty
    pub zero_bits: u32,
    /// Candidates hashed, including the winning one
    pub iterations: u64,
    /// Wall time spent in the search loop
    pub elapsed: Duration,
}

impl MiningResult {
    /// Elapsed search time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Candidates per second
    pub fn hash_rate(&self) -> f64 {
        let secs = self.elapsed_secs();
        if secs > 0.0 {
            self.iterations as f64 / secs
        } else {
            0.0
        }
    }

    /// Header describing this proof
    pub fn header(&self) -> Header {
        Header {
            initial_hash: self.initial_hash.clone(),
            proof_of_work: self.suffix.clone(),
            leading_zero_bits: self.zero_bits,
            hash: self.hash.clone(),
        }
    }
}

/// Search configuration
///
/// Without an iteration limit [`Miner::mine`] runs until it succeeds, which
/// for a difficulty above [`DIGEST_BITS`] is never.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Miner {
    difficulty: u32,
    iteration_limit: Option<u64>,
}

impl Miner {
    /// Unbounded miner for `difficulty` leading zero bits
    pub fn new(difficulty: u32) -> Self {
        Self {
            difficulty,
            iteration_limit: None,
        }
    }

    /// Give up after `limit` candidates
    pub fn with_iteration_limit(mut self, limit: u64) -> Self {
        self.iteration_limit = Some(limit);
        self
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn iteration_limit(&self) -> Option<u64> {
        self.iteration_limit
    }

    /// Search for the first suffix meeting the difficulty.
    ///
    /// Only fails when an iteration limit is set and reached.
    pub fn mine(&self, data: &[u8]) -> Result<MiningResult> {
        search(self.difficulty, data, self.iteration_limit).ok_or(Error::IterationLimit {
            difficulty: self.difficulty,
            limit: self.iteration_limit.unwrap_or_default(),
        })
    }
}

/// Unbounded search for `difficulty` leading zero bits over `data`
///
/// Returns only once a qualifying suffix is found.
///
/// ```rust
/// use filepow_core::mine;
///
/// let result = mine(0, b"hello");
/// assert_eq!(result.suffix, "!");
/// assert_eq!(result.iterations, 1);
/// ```
pub fn mine(difficulty: u32, data: &[u8]) -> MiningResult {
    let Some(result) = search(difficulty, data, None) else {
        unreachable!("search without an iteration limit only returns on success");
    };
    result
}

/// Core loop. `None` means `limit` candidates were tried without success.
fn search(difficulty: u32, data: &[u8], limit: Option<u64>) -> Option<MiningResult> {
    let initial_hash = sha256_hex(data);
    debug!(difficulty, ?limit, %initial_hash, "starting search");
    if difficulty > DIGEST_BITS {
        warn!(
            difficulty,
            max = DIGEST_BITS,
            "difficulty exceeds digest width, search cannot succeed"
        );
    }

    let hasher = PowHasher::new(&initial_hash);
    let mut sequence = SuffixSequence::new();
    let mut suffix = String::new();
    let mut iterations = 0u64;

    let start = Instant::now();
    loop {
        if limit == Some(iterations) {
            debug!(
                iterations,
                elapsed_secs = start.elapsed().as_secs_f64(),
                "iteration limit reached"
            );
            return None;
        }

        sequence.render_into(&mut suffix);
        sequence.advance();
        let digest = hasher.digest(&suffix);
        iterations += 1;

        if meets_difficulty(&digest, difficulty) {
            let zero_bits = leading_zero_bits(&digest);
            let result = MiningResult {
                initial_hash,
                suffix,
                hash: hex::encode(digest),
                zero_bits,
                iterations,
                elapsed: start.elapsed(),
            };
            info!(
                suffix = %result.suffix,
                zero_bits,
                iterations,
                elapsed_secs = result.elapsed_secs(),
                "proof found"
            );
            return Some(result);
        }
    }
}
