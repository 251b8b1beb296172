//! filepow parameters
//!
//! Fixed constants shared by the miner, the header codec and the verifier.
//! Changing any of these changes which headers verify.

/// Number of symbols in the suffix alphabet
pub const ALPHABET_LEN: usize = 91;

/// Suffix alphabet: printable ASCII 33..=126 without `"`, `'` and `` ` ``.
///
/// The order of this table is the enumeration order of [`crate::SuffixSequence`].
pub const ALPHABET: [u8; ALPHABET_LEN] = build_alphabet();

/// SHA-256 output size in bytes
pub const DIGEST_SIZE: usize = 32;

/// SHA-256 output size in bits, the largest satisfiable difficulty
pub const DIGEST_BITS: u32 = (DIGEST_SIZE * 8) as u32;

/// Length of a hex-encoded digest
pub const HEX_DIGEST_LEN: usize = DIGEST_SIZE * 2;

/// Header key for the digest of the raw file bytes
pub const INITIAL_HASH_KEY: &str = "Initial-hash";

/// Header key for the found suffix
pub const PROOF_OF_WORK_KEY: &str = "Proof-of-work";

/// Header key for the leading zero bit count of the final hash
pub const LEADING_ZERO_BITS_KEY: &str = "Leading-zero-bits";

/// Header key for the digest of `Initial-hash ++ Proof-of-work`
pub const HASH_KEY: &str = "Hash";

const fn build_alphabet() -> [u8; ALPHABET_LEN] {
    let mut table = [0u8; ALPHABET_LEN];
    let mut code = b'!';
    let mut i = 0;
    while code <= b'~' {
        if code != b'"' && code != b'\'' && code != b'`' {
            table[i] = code;
            i += 1;
        }
        code += 1;
    }
    table
}
