//! Inclusive integer ranges, the building block of multi-range domains.

use std::fmt;

use smallvec::SmallVec;

/// A sequence of ranges. Inside a [`Domain`][crate::domain::Domain] it is always in CSIS form.
pub type RangeVec = SmallVec<[Range; 4]>;

/// An inclusive range `[lo, hi]` of domain values.
///
/// # Invariants
///
/// - `lo <= hi`
///
/// The derived ordering compares `lo` first and `hi` second, which is the
/// order used when sorting range sequences.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Range {
    pub lo: u32,
    pub hi: u32,
}

impl Range {
    /// Creates a new range.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub const fn new(lo: u32, hi: u32) -> Self {
        assert!(lo <= hi, "Range bounds must satisfy lo <= hi");
        Self { lo, hi }
    }

    /// Creates a range holding a single value.
    pub const fn single(value: u32) -> Self {
        Self { lo: value, hi: value }
    }

    /// Number of values covered by this range.
    pub const fn size(self) -> u32 {
        1 + self.hi - self.lo
    }

    pub const fn is_single(self) -> bool {
        self.lo == self.hi
    }

    pub const fn contains(self, value: u32) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Returns true if the two ranges share at least one value.
    pub const fn overlaps(self, other: Range) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lo, self.hi)
    }
}

impl From<(u32, u32)> for Range {
    fn from((lo, hi): (u32, u32)) -> Self {
        Range::new(lo, hi)
    }
}

impl From<Range> for (u32, u32) {
    fn from(range: Range) -> Self {
        (range.lo, range.hi)
    }
}
