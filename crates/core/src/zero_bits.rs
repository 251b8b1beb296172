//! Leading zero bit counting
//!
//! Two views of the same count: over hex text, which is what headers carry,
//! and over raw digest bytes, which is what the mining loop has in hand.

/// Count the leading zero bits of a hex digest.
///
/// Each character stands for four bits. An all-zero digest yields
/// `4 * hex.len()`, an empty string yields 0. Counting stops at the first
/// character that is not a hex digit, as if it had its top bit set.
///
/// ```rust
/// use filepow_core::count_leading_zero_bits;
///
/// assert_eq!(count_leading_zero_bits("00"), 8);
/// assert_eq!(count_leading_zero_bits("0f"), 4);
/// assert_eq!(count_leading_zero_bits("ff"), 0);
/// assert_eq!(count_leading_zero_bits(""), 0);
/// ```
pub fn count_leading_zero_bits(hex: &str) -> u32 {
    let mut zeros = 0u32;

    for c in hex.chars() {
        match c.to_digit(16) {
            Some(0) => zeros += 4,
            // Nibble sits in the low four bits of a u32
            Some(nibble) => return zeros + nibble.leading_zeros() - 28,
            None => return zeros,
        }
    }

    zeros
}

/// Count the leading zero bits of raw digest bytes.
#[inline(always)]
pub fn leading_zero_bits(bytes: &[u8]) -> u32 {
    let mut zero_bits = 0u32;

    for byte in bytes {
        if *byte == 0 {
            zero_bits += 8;
        } else {
            zero_bits += byte.leading_zeros();
            break;
        }
    }

    zero_bits
}

/// Check if a digest meets the required difficulty
///
/// Difficulty is measured as the number of leading zero bits required.
///
/// ```rust
/// use filepow_core::meets_difficulty;
///
/// let mut hash = [0xFFu8; 32];
/// hash[0] = 0x00;
/// hash[1] = 0x0F;
/// assert!(meets_difficulty(&hash, 12));
/// assert!(!meets_difficulty(&hash, 13));
/// ```
#[inline(always)]
pub fn meets_difficulty(hash: &[u8; 32], difficulty: u32) -> bool {
    leading_zero_bits(hash) >= difficulty
}
