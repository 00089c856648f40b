//! Interval-arithmetic operators.
//!
//! Every binary operator splits both operands into ranges, combines each pair
//! of ranges with a scalar interval rule, and canonicalizes the union of the
//! pieces. An empty operand always gives an empty result.
//!
//! - [`plus`]: `[lo1 + lo2, hi1 + hi2]`, clamped to `SUP`.
//! - [`minus`]: `[lo1 - hi2, hi1 - lo2]`, clamped to `0`.
//! - [`mul`]: `[lo1 * lo2, hi1 * hi2]`, clamped to `SUP`.
//! - [`div`]: division with a rounding policy, and the inverse of multiplication.
//!
//! The operators are also available as `std::ops` impls on `&Domain`:
//!
//! ```
//! use fd_domain::Domain;
//!
//! let a = Domain::range(1, 3);
//! let b = Domain::range(10, 20);
//! assert_eq!(&a + &b, Domain::range(11, 23));
//! assert_eq!(&b - &a, Domain::range(7, 19));
//! assert_eq!(&a & &b, Domain::empty());
//! ```

use std::ops::{Add, BitAnd, Div, Mul, Sub};

use crate::domain::Domain;
use crate::range::{Range, RangeVec};

pub mod div;
pub mod minus;
pub mod mul;
pub mod plus;

/// The bitset of a small operand, promoting a small solved value.
pub(crate) fn small_bits(domain: &Domain) -> Option<u32> {
    match *domain {
        Domain::Solved(v) if v <= crate::consts::SMALL_MAX_NUM => Some(1 << v),
        Domain::Bitset(bits) => Some(bits),
        _ => None,
    }
}

/// Combines every range of `a` with every range of `b` and canonicalizes the result.
///
/// `rule` receives one pair and returns the combined range, or `None` to drop it.
pub(crate) fn combine_pairs<F>(a: &[Range], b: &[Range], rule: F) -> Domain
where
    F: Fn(Range, Range) -> Option<Range>,
{
    let mut pieces = RangeVec::with_capacity(a.len() * b.len());
    for &ra in a {
        for &rb in b {
            if let Some(r) = rule(ra, rb) {
                pieces.push(r);
            }
        }
    }
    Domain::simplify(&pieces)
}

impl Add for &Domain {
    type Output = Domain;

    fn add(self, rhs: &Domain) -> Domain {
        self.plus(rhs)
    }
}

impl Sub for &Domain {
    type Output = Domain;

    fn sub(self, rhs: &Domain) -> Domain {
        self.minus(rhs)
    }
}

impl Mul for &Domain {
    type Output = Domain;

    fn mul(self, rhs: &Domain) -> Domain {
        self.mul(rhs)
    }
}

impl Div for &Domain {
    type Output = Domain;

    /// Division with fraction flooring, see [`Domain::divby`].
    fn div(self, rhs: &Domain) -> Domain {
        self.divby(rhs, true)
    }
}

impl BitAnd for &Domain {
    type Output = Domain;

    fn bitand(self, rhs: &Domain) -> Domain {
        self.intersection(rhs)
    }
}
