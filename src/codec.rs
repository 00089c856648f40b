//! Fixed-width packed encoding of range sequences.
//!
//! Each bound is stored as two 16-bit words (high word first), each range as
//! four words, and a range sequence as the plain concatenation of its ranges.
//! There are no delimiters or length prefixes: a packed sequence is valid iff
//! its length is a multiple of [`RANGE_WORDS`].
//!
//! ```text
//! [lo_hi, lo_lo, hi_hi, hi_lo] [lo_hi, lo_lo, hi_hi, hi_lo] ...
//! ```

use crate::error::DomainError;
use crate::range::{Range, RangeVec};

/// Number of words used by one encoded bound.
pub const VALUE_WORDS: usize = 2;

/// Number of words used by one encoded range.
pub const RANGE_WORDS: usize = 2 * VALUE_WORDS;

pub fn encode_value(value: u32) -> [u16; VALUE_WORDS] {
    [(value >> 16) as u16, value as u16]
}

pub fn decode_value(words: [u16; VALUE_WORDS]) -> u32 {
    ((words[0] as u32) << 16) | words[1] as u32
}

pub fn encode_range(range: Range) -> [u16; RANGE_WORDS] {
    let [a, b] = encode_value(range.lo);
    let [c, d] = encode_value(range.hi);
    [a, b, c, d]
}

/// Decodes one range.
///
/// The bounds are not validated here; see [`decode_ranges`].
pub fn decode_range(words: [u16; RANGE_WORDS]) -> (u32, u32) {
    let lo = decode_value([words[0], words[1]]);
    let hi = decode_value([words[2], words[3]]);
    (lo, hi)
}

/// Packs a range sequence into words.
pub fn encode_ranges(ranges: &[Range]) -> Vec<u16> {
    let mut words = Vec::with_capacity(ranges.len() * RANGE_WORDS);
    for &r in ranges {
        words.extend_from_slice(&encode_range(r));
    }
    words
}

/// Unpacks a word sequence into ranges, in stored order.
///
/// Fails if the length is not a multiple of [`RANGE_WORDS`] or a range is inverted.
pub fn decode_ranges(words: &[u16]) -> Result<RangeVec, DomainError> {
    if words.len() % RANGE_WORDS != 0 {
        return Err(DomainError::PackedLength(words.len()));
    }
    let mut ranges = RangeVec::with_capacity(words.len() / RANGE_WORDS);
    for chunk in words.chunks_exact(RANGE_WORDS) {
        let (lo, hi) = decode_range([chunk[0], chunk[1], chunk[2], chunk[3]]);
        if lo > hi {
            return Err(DomainError::InvertedRange { lo, hi });
        }
        ranges.push(Range { lo, hi });
    }
    Ok(ranges)
}
