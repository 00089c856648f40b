//! The canonical-form contract and its enforcement.
//!
//! [`Domain::validate`] checks a value against every representation invariant.
//! Operators call [`check_input`] on their operands and [`check_output`] on
//! their results; both are no-ops unless [`CHECKS`] is on.

use crate::bits::FULL_MASK;
use crate::consts::{SMALL_MAX_NUM, SUP};
use crate::domain::Domain;
use crate::error::DomainError;
use crate::range::Range;

/// Whether operators validate their inputs and outputs.
///
/// On in debug builds and with the `strict` feature.
pub(crate) const CHECKS: bool = cfg!(any(debug_assertions, feature = "strict"));

impl Domain {
    /// Checks that this value is a well-formed domain in its smallest representation.
    pub fn validate(&self) -> Result<(), DomainError> {
        match self {
            Domain::Empty => Ok(()),
            Domain::Solved(value) => {
                if *value > SUP {
                    return Err(DomainError::OutOfBounds(*value));
                }
                Ok(())
            }
            Domain::Bitset(bits) => {
                if bits & !FULL_MASK != 0 {
                    return Err(DomainError::BitsetOverflow(*bits));
                }
                if *bits == 0 {
                    return Err(DomainError::EmptyBitset);
                }
                if bits.count_ones() == 1 {
                    return Err(DomainError::ShouldBeSolved(bits.trailing_zeros()));
                }
                Ok(())
            }
            Domain::Ranges(seq) => validate_seq(seq),
        }
    }
}

fn validate_seq(seq: &[Range]) -> Result<(), DomainError> {
    let Some(last) = seq.last() else {
        return Err(DomainError::EmptyRanges);
    };

    for (i, r) in seq.iter().enumerate() {
        if r.lo > r.hi {
            return Err(DomainError::InvertedRange { lo: r.lo, hi: r.hi });
        }
        if r.hi > SUP {
            return Err(DomainError::OutOfBounds(r.hi));
        }
        if i > 0 {
            let prev = seq[i - 1];
            if r.lo <= prev.hi {
                return Err(DomainError::Unsorted(i));
            }
            if r.lo == prev.hi + 1 {
                return Err(DomainError::Unmerged(i));
            }
        }
    }

    if seq.len() == 1 && seq[0].is_single() {
        return Err(DomainError::ShouldBeSolved(seq[0].lo));
    }
    if last.hi <= SMALL_MAX_NUM {
        return Err(DomainError::ShouldBeBitset(last.hi));
    }
    Ok(())
}

/// Panics if an operator input is malformed.
#[inline]
pub(crate) fn check_input(domain: &Domain, op: &str) {
    if CHECKS {
        if let Err(e) = domain.validate() {
            panic!("{}: invalid input {:?}: {}", op, domain, e);
        }
    }
}

/// Panics if an operator result is malformed, otherwise passes it through.
#[inline]
pub(crate) fn check_output(domain: Domain, op: &str) -> Domain {
    if CHECKS {
        if let Err(e) = domain.validate() {
            panic!("{}: produced invalid result {:?}: {}", op, domain, e);
        }
    }
    domain
}
