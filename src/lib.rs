//! filepow Prover Library
//!
//! Proof-of-work stamps for files.
//!
//! # Overview
//!
//! Mining finds the first suffix, in a fixed enumeration order, whose
//! SHA-256 together with the file's digest has enough leading zero bits.
//! The result is written as a four-line header that anyone holding the
//! file can check.
//!
//! # Example
//!
//! ```rust
//! use filepow::algorithm::{mine, verify, PartialHeader};
//!
//! let data = b"contents of some file";
//! let result = mine(10, data);
//!
//! let header = PartialHeader::from(&result.header());
//! assert!(verify(&header, data).passed);
//! ```

// Re-export the core algorithm
pub use filepow_core as algorithm;

pub mod files;
pub mod report;

// Convenience re-exports
pub use algorithm::{mine, verify, Header, Miner, MiningResult, PartialHeader, VerificationReport};
