//! Ordered suffix enumeration
//!
//! A mixed-radix odometer over [`ALPHABET`]. Digits are stored most-significant
//! first; when every digit overflows the counter grows by one digit, so all
//! suffixes of length `L` are produced before any suffix of length `L + 1`.

use crate::params::{ALPHABET, ALPHABET_LEN};

/// Radix of every digit
const RADIX: u8 = ALPHABET_LEN as u8;

/// Infinite generator of candidate suffixes
///
/// ```rust
/// use filepow_core::SuffixSequence;
///
/// let mut seq = SuffixSequence::new();
/// assert_eq!(seq.next_suffix(), "!");
/// assert_eq!(seq.next_suffix(), "#");
/// ```
#[derive(Debug, Clone)]
pub struct SuffixSequence {
    /// Alphabet indices, most-significant first. Never empty.
    digits: Vec<u8>,
}

impl SuffixSequence {
    /// Create a sequence positioned at the first suffix (`"!"`)
    pub fn new() -> Self {
        Self { digits: vec![0] }
    }

    /// Length of the suffix the next call will return
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false; the counter holds at least one digit
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Write the current suffix into `out`, replacing its contents.
    ///
    /// Does not advance. The mining loop reuses one buffer through this.
    #[inline(always)]
    pub fn render_into(&self, out: &mut String) {
        out.clear();
        out.extend(self.digits.iter().map(|&d| ALPHABET[d as usize] as char));
    }

    /// Step the odometer by one.
    #[inline(always)]
    pub fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < RADIX {
                return;
            }
            *digit = 0;
        }

        // Carry ran off the most-significant digit: every digit is 0 again,
        // so one more zero digit is the first suffix of the next length.
        self.digits.push(0);
    }

    /// Return the current suffix and advance.
    pub fn next_suffix(&mut self) -> String {
        let mut out = String::with_capacity(self.digits.len());
        self.render_into(&mut out);
        self.advance();
        out
    }
}

impl Default for SuffixSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SuffixSequence {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_suffix())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
