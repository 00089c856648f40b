//! Word-level helpers for small (bitset) domains.
//!
//! A small domain is a `u32` where bit `i` is set iff value `i` is a member.
//! Only bits `0..=SMALL_MAX_NUM` are ever used, so bit 31 is always clear.

use crate::consts::SMALL_MAX_NUM;
use crate::range::{Range, RangeVec};

/// Mask with every legal bitset position set.
pub const FULL_MASK: u32 = (1 << (SMALL_MAX_NUM + 1)) - 1;

/// `GTE_KEEP[v]` keeps exactly the values `< v`, i.e. it removes every value `>= v`.
pub const GTE_KEEP: [u32; SMALL_MAX_NUM as usize + 1] = gte_keep_table();

/// `LTE_KEEP[v]` keeps exactly the values `> v`, i.e. it removes every value `<= v`.
pub const LTE_KEEP: [u32; SMALL_MAX_NUM as usize + 1] = lte_keep_table();

const fn gte_keep_table() -> [u32; SMALL_MAX_NUM as usize + 1] {
    let mut table = [0; SMALL_MAX_NUM as usize + 1];
    let mut v = 0;
    while v <= SMALL_MAX_NUM as usize {
        table[v] = (1 << v) - 1;
        v += 1;
    }
    table
}

const fn lte_keep_table() -> [u32; SMALL_MAX_NUM as usize + 1] {
    let mut table = [0; SMALL_MAX_NUM as usize + 1];
    let mut v = 0;
    while v <= SMALL_MAX_NUM as usize {
        table[v] = FULL_MASK & !((2 << v) - 1);
        v += 1;
    }
    table
}

/// Mask with the bits `lo..=hi` set.
#[inline]
pub fn range_mask(lo: u32, hi: u32) -> u32 {
    debug_assert!(lo <= hi, "range_mask: lo={} > hi={}", lo, hi);
    debug_assert!(hi <= SMALL_MAX_NUM, "range_mask: hi={} exceeds bitset capacity", hi);
    ((1 << (1 + hi - lo)) - 1) << lo
}

/// Lowest value in a non-empty bitset.
#[inline]
pub fn bit_min(bits: u32) -> u32 {
    debug_assert_ne!(bits, 0, "bit_min of an empty bitset");
    match bits {
        1 => 0,
        2 => 1,
        3 => 0,
        _ => bits.trailing_zeros(),
    }
}

/// Highest value in a non-empty bitset.
#[inline]
pub fn bit_max(bits: u32) -> u32 {
    debug_assert_ne!(bits, 0, "bit_max of an empty bitset");
    match bits {
        1 => 0,
        2 | 3 => 1,
        _ => 31 - bits.leading_zeros(),
    }
}

/// Number of values in a bitset.
#[inline]
pub fn bit_size(bits: u32) -> u32 {
    match bits {
        0 => 0,
        1 | 2 => 1,
        3 => 2,
        _ => bits.count_ones(),
    }
}

/// Returns the single value of a bitset with exactly one bit set.
#[inline]
pub fn bit_single(bits: u32) -> Option<u32> {
    if bits != 0 && bits & (bits - 1) == 0 {
        Some(bits.trailing_zeros())
    } else {
        None
    }
}

/// Sets every bit below the highest set bit.
///
/// The result denotes `[0, max(bits)]`.
#[inline]
pub fn fill_below_max(bits: u32) -> u32 {
    debug_assert_ne!(bits, 0, "fill_below_max of an empty bitset");
    let mut out = bits;
    out |= out >> 1;
    out |= out >> 2;
    out |= out >> 4;
    out |= out >> 8;
    out |= out >> 16;
    out
}

/// Value at zero-based position `index` in ascending order.
pub fn bit_nth(bits: u32, index: u32) -> Option<u32> {
    let mut word = bits;
    for _ in 0..index {
        if word == 0 {
            return None;
        }
        word &= word - 1; // Clear lowest set bit
    }
    if word == 0 {
        None
    } else {
        Some(word.trailing_zeros())
    }
}

/// Mask of every value `<= SMALL_MAX_NUM` covered by the given ranges.
///
/// Ranges are expected in ascending order; scanning stops at the first range
/// that starts beyond the bitset capacity.
pub fn ranges_mask(ranges: &[Range]) -> u32 {
    let mut mask = 0;
    for r in ranges {
        if r.lo > SMALL_MAX_NUM {
            break;
        }
        mask |= range_mask(r.lo, r.hi.min(SMALL_MAX_NUM));
    }
    mask
}

/// Iterator over the values of a bitset, in ascending order.
pub struct Bits {
    word: u32,
}

impl Bits {
    pub fn new(bits: u32) -> Self {
        Self { word: bits }
    }
}

impl Iterator for Bits {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.word == 0 {
            return None;
        }
        let value = self.word.trailing_zeros();
        self.word &= self.word - 1; // Clear lowest set bit
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.word.count_ones() as usize;
        (n, Some(n))
    }
}

/// Iterator over the maximal runs of consecutive set bits, as ranges.
pub struct BitRuns {
    word: u32,
}

impl BitRuns {
    pub fn new(bits: u32) -> Self {
        Self { word: bits }
    }
}

impl Iterator for BitRuns {
    type Item = Range;

    fn next(&mut self) -> Option<Self::Item> {
        if self.word == 0 {
            return None;
        }
        let lo = self.word.trailing_zeros();
        // Number of consecutive ones starting at `lo`:
        let len = (!(self.word >> lo)).trailing_zeros();
        let hi = lo + len - 1;
        self.word &= !range_mask(lo, hi);
        Some(Range { lo, hi })
    }
}

/// Converts a bitset into its CSIS range sequence.
pub fn bit_ranges(bits: u32) -> RangeVec {
    BitRuns::new(bits).collect()
}
