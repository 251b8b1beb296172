//! # filepow Core
//!
//! Hashcash-style proof-of-work over files.
//!
//! A proof is a short suffix: SHA-256 of the file's hex digest followed by
//! the suffix must start with at least N zero bits. Suffixes are tried in a
//! fixed order, so the proof found for a file and difficulty is always the
//! same one.
//!
//! ## Header Format
//!
//! ```text
//! Initial-hash <sha256(file) as hex>
//! Proof-of-work <suffix>
//! Leading-zero-bits <zero bits of Hash>
//! Hash <sha256(Initial-hash ++ Proof-of-work) as hex>
//! ```
//!
//! Suffixes use the 91 printable ASCII characters other than `"`, `'` and
//! `` ` ``, ordered by code point, shortest first.
//!
//! ## Example
//!
//! ```rust
//! use filepow_core::{mine, parse_str, verify, Field};
//!
//! let data = b"file contents";
//! let result = mine(8, data);
//! assert!(result.zero_bits >= 8);
//!
//! let header = parse_str(&result.header().to_string());
//! let report = verify(&header, data);
//! assert!(report.passed);
//! assert!(report.check(Field::Hash).matched());
//! ```

mod digest;
mod error;
mod header;
mod miner;
mod params;
mod sequence;
mod verifier;
mod zero_bits;

pub use digest::{PowHasher, pow_hash, sha256_hex};
pub use error::{Error, Result};
pub use header::{Field, Header, PartialHeader, parse, parse_str, serialize};
pub use miner::{Miner, MiningResult, mine};
pub use params::*;
pub use sequence::SuffixSequence;
pub use verifier::{FieldCheck, FieldStatus, VerificationReport, verify};
pub use zero_bits::{count_leading_zero_bits, leading_zero_bits, meets_difficulty};
