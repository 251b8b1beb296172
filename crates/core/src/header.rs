//! Header codec
//!
//! A header is four `"<Key> <value>"` lines. Parsing is deliberately loose:
//! a key counts wherever it appears in a line, so a mining report with
//! `Key: value` lines and extra diagnostic lines reads as a header too.

use std::fmt;

use serde::Serialize;

use crate::params::{HASH_KEY, INITIAL_HASH_KEY, LEADING_ZERO_BITS_KEY, PROOF_OF_WORK_KEY};

/// One of the four header fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Field {
    InitialHash,
    ProofOfWork,
    LeadingZeroBits,
    Hash,
}

impl Field {
    /// All fields in canonical order, which is also the key matching priority
    pub const ALL: [Field; 4] = [
        Field::InitialHash,
        Field::ProofOfWork,
        Field::LeadingZeroBits,
        Field::Hash,
    ];

    /// Literal key text used in header files
    pub const fn key(self) -> &'static str {
        match self {
            Field::InitialHash => INITIAL_HASH_KEY,
            Field::ProofOfWork => PROOF_OF_WORK_KEY,
            Field::LeadingZeroBits => LEADING_ZERO_BITS_KEY,
            Field::Hash => HASH_KEY,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// First field whose key occurs anywhere in `line`
    fn recognize(line: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| line.contains(field.key()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A fully populated header, as produced by the miner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub initial_hash: String,
    pub proof_of_work: String,
    pub leading_zero_bits: u32,
    pub hash: String,
}

impl Header {
    /// Render as header lines in canonical field order
    pub fn to_lines(&self) -> Vec<String> {
        serialize(self)
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A header as read from text
///
/// Each slot is `None` when the key never appeared, `Some(None)` when the key
/// appeared without a value, and `Some(Some(v))` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialHeader {
    slots: [Option<Option<String>>; 4],
}

impl PartialHeader {
    /// Empty header, no key seen
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw slot for `field`
    pub fn get(&self, field: Field) -> Option<Option<&str>> {
        self.slots[field.index()].as_ref().map(Option::as_deref)
    }

    /// Value for `field` if the key appeared with a value
    pub fn value(&self, field: Field) -> Option<&str> {
        self.get(field).flatten()
    }

    /// True when the key appeared at all, with or without a value
    pub fn contains(&self, field: Field) -> bool {
        self.slots[field.index()].is_some()
    }

    /// Record `field`, replacing any earlier occurrence
    pub fn set(&mut self, field: Field, value: Option<String>) {
        self.slots[field.index()] = Some(value);
    }

    /// Convert to a [`Header`] when every field has a value and
    /// `Leading-zero-bits` is an integer.
    pub fn to_header(&self) -> Option<Header> {
        Some(Header {
            initial_hash: self.value(Field::InitialHash)?.to_string(),
            proof_of_work: self.value(Field::ProofOfWork)?.to_string(),
            leading_zero_bits: self.value(Field::LeadingZeroBits)?.parse().ok()?,
            hash: self.value(Field::Hash)?.to_string(),
        })
    }
}

impl From<&Header> for PartialHeader {
    fn from(header: &Header) -> Self {
        let mut partial = PartialHeader::new();
        partial.set(Field::InitialHash, Some(header.initial_hash.clone()));
        partial.set(Field::ProofOfWork, Some(header.proof_of_work.clone()));
        partial.set(Field::LeadingZeroBits, Some(header.leading_zero_bits.to_string()));
        partial.set(Field::Hash, Some(header.hash.clone()));
        partial
    }
}

/// Parse header lines.
///
/// The value of a recognized line is its second whitespace-separated token.
/// Lines without a known key are skipped.
pub fn parse<I, S>(lines: I) -> PartialHeader
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut header = PartialHeader::new();

    for line in lines {
        let line = line.as_ref();
        if let Some(field) = Field::recognize(line) {
            let value = line.split_whitespace().nth(1).map(str::to_string);
            header.set(field, value);
        }
    }

    header
}

/// Parse a whole header text
///
/// `\n`, `\r\n` and a bare `\r` all end a line.
pub fn parse_str(text: &str) -> PartialHeader {
    parse(text.split(['\r', '\n']))
}

/// One `"<Key> <value>"` line per field
pub fn serialize(header: &Header) -> Vec<String> {
    vec![
        format!("{} {}", Field::InitialHash, header.initial_hash),
        format!("{} {}", Field::ProofOfWork, header.proof_of_work),
        format!("{} {}", Field::LeadingZeroBits, header.leading_zero_bits),
        format!("{} {}", Field::Hash, header.hash),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Header {
        Header {
            initial_hash: "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824".into(),
            proof_of_work: "#Q+".into(),
            leading_zero_bits: 12,
            hash: "000a4c0b2d8e1f0a9d07b5f0c7e27d1b3f9a6e5c4d3b2a1908f7e6d5c4b3a291".into(),
        }
    }

    #[test]
    fn test_round_trip() {
        let header = sample();
        let parsed = parse(serialize(&header));
        assert_eq!(parsed, PartialHeader::from(&header));
        assert_eq!(parsed.to_header(), Some(header));
    }

    #[test]
    fn test_serialize_layout() {
        let lines = serialize(&sample());
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "Proof-of-work #Q+");
        assert_eq!(lines[2], "Leading-zero-bits 12");
        assert!(lines[3].starts_with("Hash 000a"));
    }

    #[test]
    fn test_carriage_return_line_endings() {
        let header = sample();
        let expected = PartialHeader::from(&header);

        for ending in ["\r", "\r\n", "\n"] {
            let text = serialize(&header).join(ending) + ending;
            assert_eq!(parse_str(&text), expected, "line ending {ending:?}");
        }
    }

    #[test]
    fn test_key_without_value_is_explicit_null() {
        let parsed = parse_str("Initial-hash abc\nProof-of-work\n");
        assert_eq!(parsed.get(Field::ProofOfWork), Some(None));
        assert!(parsed.contains(Field::ProofOfWork));
        assert_eq!(parsed.value(Field::ProofOfWork), None);
        assert_eq!(parsed.get(Field::Hash), None);
        assert!(!parsed.contains(Field::Hash));
    }

    #[test]
    fn test_report_lines_with_colons_parse() {
        let report = "File: notes.txt\n\
                      Initial-hash: aa11\n\
                      Proof-of-work: !#\n\
                      Hash: 00ff\n\
                      Leading-zero-bits: 8\n\
                      Iterations: 3\n\
                      Compute-time: 0.001\n";
        let parsed = parse_str(report);
        assert_eq!(parsed.value(Field::InitialHash), Some("aa11"));
        assert_eq!(parsed.value(Field::ProofOfWork), Some("!#"));
        assert_eq!(parsed.value(Field::Hash), Some("00ff"));
        assert_eq!(parsed.value(Field::LeadingZeroBits), Some("8"));
    }

    #[test]
    fn test_priority_one_field_per_line() {
        // Both keys occur; the higher-priority one wins
        let parsed = parse_str("Hash Initial-hash-ish value");
        assert_eq!(parsed.value(Field::InitialHash), Some("Initial-hash-ish"));
        assert!(!parsed.contains(Field::Hash));
    }

    #[test]
    fn test_unanchored_match() {
        let parsed = parse_str("  # the Hash deadbeef trailing");
        assert_eq!(parsed.value(Field::Hash), Some("the"));
    }

    #[test]
    fn test_later_occurrence_overwrites() {
        let parsed = parse_str("Hash first\nHash second\nHash\n");
        assert_eq!(parsed.get(Field::Hash), Some(None));

        let parsed = parse_str("Hash\nHash second\n");
        assert_eq!(parsed.value(Field::Hash), Some("second"));
    }

    #[test]
    fn test_case_sensitive_keys() {
        // "Initial-hash" contains "hash", not "Hash"
        let parsed = parse_str("initial-hash abc\nhash def\n");
        assert_eq!(parsed, PartialHeader::new());
    }

    #[test]
    fn test_to_header_rejects_incomplete() {
        let mut partial = PartialHeader::from(&sample());
        partial.set(Field::LeadingZeroBits, Some("twelve".into()));
        assert_eq!(partial.to_header(), None);

        let mut partial = PartialHeader::from(&sample());
        partial.set(Field::Hash, None);
        assert_eq!(partial.to_header(), None);
    }
}
