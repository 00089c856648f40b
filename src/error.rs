//! Errors describing malformed domains.

use thiserror::Error;

/// Reasons a value is not a well-formed domain.
///
/// Operators treat these as fatal caller bugs and panic with the message;
/// the checked constructors ([`Domain::try_from_ranges`], [`Domain::from_packed`])
/// and [`Domain::validate`] return them instead.
///
/// [`Domain::try_from_ranges`]: crate::domain::Domain::try_from_ranges
/// [`Domain::from_packed`]: crate::domain::Domain::from_packed
/// [`Domain::validate`]: crate::domain::Domain::validate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("value {0} is out of bounds (SUP = {sup})", sup = crate::consts::SUP)]
    OutOfBounds(u32),

    #[error("range [{lo},{hi}] has lo > hi")]
    InvertedRange { lo: u32, hi: u32 },

    #[error("range #{0} starts before its predecessor ends")]
    Unsorted(usize),

    #[error("range #{0} touches its predecessor and should have been merged")]
    Unmerged(usize),

    #[error("empty range sequence should be represented as Empty")]
    EmptyRanges,

    #[error("single value {0} should be represented as Solved")]
    ShouldBeSolved(u32),

    #[error("empty bitset should be represented as Empty")]
    EmptyBitset,

    #[error("ranges with max {0} should be represented as a Bitset")]
    ShouldBeBitset(u32),

    #[error("bitset {0:#x} uses bits beyond value 30")]
    BitsetOverflow(u32),

    #[error("packed length {0} is not a multiple of 4 words")]
    PackedLength(usize),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SUP;

    #[test]
    fn test_out_of_bounds_message() {
        let msg = DomainError::OutOfBounds(SUP + 1).to_string();
        assert_eq!(msg, format!("value {} is out of bounds (SUP = {})", SUP + 1, SUP));
    }
}
