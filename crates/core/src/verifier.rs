//! Header verification
//!
//! Recomputes both digests and the zero bit count from the file, then checks
//! each header field on its own. A bad field never stops the remaining checks.

use serde::Serialize;
use tracing::debug;

use crate::digest::{pow_hash, sha256_hex};
use crate::header::{Field, PartialHeader};
use crate::zero_bits::count_leading_zero_bits;

/// Outcome of checking one field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// Key absent, or present without a value
    Missing,
    Matched,
    Mismatched,
    /// Present, but has no value of its own to compare against
    Unchecked,
}

/// Result for a single header field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldCheck {
    pub field: Field,
    pub status: FieldStatus,
    /// Value recomputed from the file, when the field has one
    pub expected: Option<String>,
    /// Value found in the header
    pub received: Option<String>,
}

impl FieldCheck {
    pub fn present(&self) -> bool {
        self.status != FieldStatus::Missing
    }

    pub fn matched(&self) -> bool {
        self.status == FieldStatus::Matched
    }
}

/// Per-field results plus the overall verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Digest of the file bytes
    pub initial_hash: String,
    /// Digest of `initial_hash ++ Proof-of-work`
    pub final_hash: String,
    /// One entry per field, in [`Field::ALL`] order
    pub checks: [FieldCheck; 4],
    pub passed: bool,
}

impl VerificationReport {
    pub fn check(&self, field: Field) -> &FieldCheck {
        &self.checks[field as usize]
    }
}

/// Verify `header` against the bytes of the file it claims to describe.
///
/// The verdict passes when `Initial-hash`, `Leading-zero-bits` and `Hash`
/// all match. `Proof-of-work` only feeds the final hash; when it is missing
/// the empty suffix is used.
pub fn verify(header: &PartialHeader, data: &[u8]) -> VerificationReport {
    let initial_hash = sha256_hex(data);
    let proof_of_work = header.value(Field::ProofOfWork).unwrap_or_default();
    let final_hash = pow_hash(&initial_hash, proof_of_work);
    let zero_bits = count_leading_zero_bits(&final_hash);

    let checks = Field::ALL.map(|field| {
        let Some(received) = header.value(field) else {
            debug!(%field, "field missing from header");
            return FieldCheck {
                field,
                status: FieldStatus::Missing,
                expected: None,
                received: None,
            };
        };

        let (status, expected) = match field {
            Field::InitialHash => (compare(received, &initial_hash), Some(initial_hash.clone())),
            Field::ProofOfWork => (FieldStatus::Unchecked, None),
            Field::LeadingZeroBits => (
                compare_zero_bits(received, zero_bits),
                Some(zero_bits.to_string()),
            ),
            Field::Hash => (compare(received, &final_hash), Some(final_hash.clone())),
        };

        if status == FieldStatus::Mismatched {
            debug!(%field, received, expected = ?expected, "field does not match");
        }

        FieldCheck {
            field,
            status,
            expected,
            received: Some(received.to_string()),
        }
    });

    let passed = [Field::InitialHash, Field::LeadingZeroBits, Field::Hash]
        .into_iter()
        .all(|field| checks[field as usize].matched());

    VerificationReport {
        initial_hash,
        final_hash,
        checks,
        passed,
    }
}

fn compare(received: &str, expected: &str) -> FieldStatus {
    if received == expected {
        FieldStatus::Matched
    } else {
        FieldStatus::Mismatched
    }
}

/// Integer comparison of a claimed bit count. Signed, so "-0" and "+3"
/// read as the integers they spell; anything unparsable is a mismatch.
fn compare_zero_bits(received: &str, zero_bits: u32) -> FieldStatus {
    match received.parse::<i64>() {
        Ok(claimed) if claimed == i64::from(zero_bits) => FieldStatus::Matched,
        _ => FieldStatus::Mismatched,
    }
}
