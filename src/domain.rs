//! The [`Domain`] value type, its constructors and the canonicalizer.
//!
//! A domain is a set of integers in `[SUB, SUP]`. It is stored in one of four
//! representations, ordered from smallest to largest:
//!
//! | Representation | Used for |
//! |---|---|
//! | [`Domain::Empty`] | the empty set |
//! | [`Domain::Solved`] | exactly one value |
//! | [`Domain::Bitset`] | two or more values, all `<= SMALL_MAX_NUM` |
//! | [`Domain::Ranges`] | everything else, as a CSIS range sequence |
//!
//! Every constructor and operator returns the *smallest* representation that
//! denotes its result. Because of that, two domains are equal as sets iff they
//! are equal as values, and the derived `PartialEq`/`Hash` can be used directly.
//!
//! Domains are immutable: all operations borrow their operands and return a new value.

use std::borrow::Cow;
use std::fmt;

use crate::bits::{bit_ranges, bit_single, fill_below_max, range_mask, ranges_mask, FULL_MASK};
use crate::codec;
use crate::consts::{SMALL_MAX_NUM, SUB, SUP};
use crate::error::DomainError;
use crate::range::{Range, RangeVec};
use crate::ranges;

/// A finite set of integers in `[SUB, SUP]`, always in its smallest representation.
///
/// Build domains with the constructors below rather than the variants, which
/// must uphold the invariants listed on each of them (see [`Domain::validate`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Domain {
    /// The empty set.
    #[default]
    Empty,
    /// Exactly one value.
    Solved(u32),
    /// Bit `i` is set iff `i` is a member. At least two bits are set, none above bit 30.
    Bitset(u32),
    /// CSIS range sequence with at least two values and a maximum above 30.
    Ranges(RangeVec),
}

// Constructors
impl Domain {
    /// The empty domain.
    pub const fn empty() -> Self {
        Domain::Empty
    }

    /// The domain containing only `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value > SUP`.
    pub fn value(value: u32) -> Self {
        assert!(value <= SUP, "{}", DomainError::OutOfBounds(value));
        Domain::Solved(value)
    }

    /// The domain containing every value in `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi` or `hi > SUP`.
    pub fn range(lo: u32, hi: u32) -> Self {
        assert!(lo <= hi, "{}", DomainError::InvertedRange { lo, hi });
        assert!(hi <= SUP, "{}", DomainError::OutOfBounds(hi));
        if lo == hi {
            Domain::Solved(lo)
        } else if hi <= SMALL_MAX_NUM {
            Domain::Bitset(range_mask(lo, hi))
        } else {
            Domain::Ranges(smallvec::smallvec![Range { lo, hi }])
        }
    }

    /// Like [`Domain::range`], but clamps the bounds to `[SUB, SUP]` instead of panicking.
    ///
    /// Returns the empty domain when the clamped range is empty.
    pub fn range_trimmed(lo: i64, hi: i64) -> Self {
        if hi < SUB as i64 || lo > SUP as i64 || lo > hi {
            return Domain::Empty;
        }
        let lo = lo.max(SUB as i64) as u32;
        let hi = hi.min(SUP as i64) as u32;
        Domain::range(lo, hi)
    }

    /// The domain `{0, value}`, or `{0}` when `value` is zero.
    pub fn booly_pair(value: u32) -> Self {
        match value {
            0 => Domain::value(0),
            1 => Domain::range(0, 1),
            _ => {
                assert!(value <= SUP, "{}", DomainError::OutOfBounds(value));
                Domain::from_csis(smallvec::smallvec![Range::single(0), Range::single(value)])
            }
        }
    }

    /// The domain containing exactly the listed values.
    ///
    /// The list may be unordered and contain duplicates.
    ///
    /// # Panics
    ///
    /// Panics if a value exceeds `SUP`.
    pub fn from_list(values: &[u32]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();

        let mut out = RangeVec::new();
        for value in sorted {
            assert!(value <= SUP, "{}", DomainError::OutOfBounds(value));
            match out.last_mut() {
                Some(last) if value <= last.hi + 1 => last.hi = last.hi.max(value),
                _ => out.push(Range::single(value)),
            }
        }
        Domain::from_csis(out)
    }

    /// The domain covering the given `(lo, hi)` pairs.
    ///
    /// Pairs may come in any order and may overlap.
    ///
    /// # Panics
    ///
    /// Panics if a pair is inverted or exceeds `SUP`. See [`Domain::try_from_ranges`].
    pub fn from_ranges<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        match Domain::try_from_ranges(pairs) {
            Ok(domain) => domain,
            Err(e) => panic!("from_ranges: {}", e),
        }
    }

    /// Checked version of [`Domain::from_ranges`].
    pub fn try_from_ranges<I>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut seq = RangeVec::new();
        for (lo, hi) in pairs {
            if lo > hi {
                return Err(DomainError::InvertedRange { lo, hi });
            }
            if hi > SUP {
                return Err(DomainError::OutOfBounds(hi));
            }
            seq.push(Range { lo, hi });
        }
        Ok(Domain::simplify(&seq))
    }

    /// Decodes a domain from its packed word form (see [`codec`]).
    pub fn from_packed(words: &[u16]) -> Result<Self, DomainError> {
        let seq = codec::decode_ranges(words)?;
        if let Some(r) = seq.iter().find(|r| r.hi > SUP) {
            return Err(DomainError::OutOfBounds(r.hi));
        }
        Ok(Domain::simplify(&seq))
    }

    /// The domain `[0, max(self)]`, or the empty domain if `self` is empty.
    pub fn zero_to_max(&self) -> Self {
        match *self {
            Domain::Empty => Domain::Empty,
            Domain::Bitset(bits) => Domain::from_bits(fill_below_max(bits)),
            _ => match self.max() {
                Some(max) => Domain::range(0, max),
                None => Domain::Empty,
            },
        }
    }
}

// Canonicalization
impl Domain {
    /// Smallest domain for a raw bitset.
    ///
    /// `0` becomes Empty and a single bit becomes Solved.
    #[inline]
    pub fn from_bits(bits: u32) -> Self {
        debug_assert_eq!(bits & !FULL_MASK, 0, "{}", DomainError::BitsetOverflow(bits));
        if bits == 0 {
            return Domain::Empty;
        }
        match bit_single(bits) {
            Some(value) => Domain::Solved(value),
            None => Domain::Bitset(bits),
        }
    }

    /// Smallest domain for a range sequence that is already in CSIS form.
    pub fn from_csis(seq: RangeVec) -> Self {
        debug_assert!(ranges::is_csis(&seq), "from_csis: ranges are not CSIS: {:?}", seq);
        let (first, last) = match (seq.first(), seq.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return Domain::Empty,
        };
        if seq.len() == 1 && first.is_single() {
            return Domain::Solved(first.lo);
        }
        if last.hi <= SMALL_MAX_NUM {
            return Domain::Bitset(ranges_mask(&seq));
        }
        Domain::Ranges(seq)
    }

    /// Sorts, merges and canonicalizes an arbitrary range sequence.
    pub fn simplify(seq: &[Range]) -> Self {
        if seq.is_empty() {
            return Domain::Empty;
        }
        Domain::from_csis(ranges::normalize(seq))
    }

    /// Returns the smallest representation of the same set.
    ///
    /// Domains built through this crate are already smallest, so this is the
    /// identity on them; it repairs hand-built values.
    pub fn to_smallest(&self) -> Self {
        match self {
            Domain::Empty => Domain::Empty,
            Domain::Solved(value) => Domain::Solved(*value),
            Domain::Bitset(bits) => Domain::from_bits(*bits),
            Domain::Ranges(seq) => Domain::simplify(seq),
        }
    }
}

// Conversions
impl Domain {
    /// The domain as a CSIS range sequence, borrowed when already stored as one.
    pub fn ranges(&self) -> Cow<'_, [Range]> {
        match self {
            Domain::Empty => Cow::Owned(Vec::new()),
            Domain::Solved(value) => Cow::Owned(vec![Range::single(*value)]),
            Domain::Bitset(bits) => Cow::Owned(bit_ranges(*bits).into_vec()),
            Domain::Ranges(seq) => Cow::Borrowed(seq.as_slice()),
        }
    }

    /// The domain as an owned CSIS range sequence.
    pub fn to_ranges(&self) -> RangeVec {
        match self {
            Domain::Empty => RangeVec::new(),
            Domain::Solved(value) => smallvec::smallvec![Range::single(*value)],
            Domain::Bitset(bits) => bit_ranges(*bits),
            Domain::Ranges(seq) => seq.clone(),
        }
    }

    /// The domain as `(lo, hi)` pairs, for callers outside the engine.
    pub fn to_pairs(&self) -> Vec<(u32, u32)> {
        self.ranges().iter().map(|&r| r.into()).collect()
    }

    /// The domain in packed word form (see [`codec`]).
    pub fn to_packed(&self) -> Vec<u16> {
        codec::encode_ranges(&self.ranges())
    }

    /// Name of the current representation.
    pub fn kind(&self) -> &'static str {
        match self {
            Domain::Empty => "empty",
            Domain::Solved(_) => "solved",
            Domain::Bitset(_) => "bitset",
            Domain::Ranges(_) => "ranges",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Empty => write!(f, "empty"),
            Domain::Solved(value) => write!(f, "solved({})", value),
            _ => {
                write!(f, "{}(", self.kind())?;
                for (i, r) in self.ranges().iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", r)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<u32> for Domain {
    fn from(value: u32) -> Self {
        Domain::value(value)
    }
}

impl From<Range> for Domain {
    fn from(range: Range) -> Self {
        Domain::range(range.lo, range.hi)
    }
}

impl FromIterator<u32> for Domain {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let values: Vec<u32> = iter.into_iter().collect();
        Domain::from_list(&values)
    }
}
