//! Division and inverse multiplication.
//!
//! Both work per divisor range `[dlo, dhi]`. A zero `dlo` makes the upper
//! quotient unbounded (`SUP`). They differ on `dhi == 0`: [`Domain::divby`]
//! skips such a divisor, [`Domain::inv_mul`] lets it contribute a lower
//! quotient of zero.

use log::{debug, trace};

use crate::consts::{SUB, SUP};
use crate::domain::Domain;
use crate::range::{Range, RangeVec};
use crate::validate::{check_input, check_output};

impl Domain {
    /// All integer quotients `x / y` with `x` in `self` and `y` in `divisor`.
    ///
    /// A quotient range that falls strictly between two integers (for example
    /// `[5,5] / [2,2]`) is empty; with `floor_fractions` its floored value is
    /// kept instead.
    pub fn divby(&self, divisor: &Domain, floor_fractions: bool) -> Domain {
        check_input(self, "divby");
        check_input(divisor, "divby");

        if self.is_empty() || divisor.is_empty() {
            return Domain::Empty;
        }

        debug!("divby(a = {}, b = {}, floor_fractions = {})", self, divisor, floor_fractions);
        let dividend = self.ranges();
        let mut pieces = RangeVec::new();
        for d in divisor.ranges().iter() {
            if d.hi == 0 {
                trace!("divby: skipping divisor {}", d);
                continue;
            }
            for r in dividend.iter() {
                let left = r.lo.div_ceil(d.hi);
                let right = if d.lo > 0 { r.hi / d.lo } else { SUP };
                if left <= right {
                    pieces.push(Range { lo: left, hi: right });
                } else if floor_fractions {
                    pieces.push(Range::single(right));
                }
            }
        }
        check_output(Domain::simplify(&pieces), "divby")
    }

    /// Divides every member by `value`, keeping exact quotients only.
    pub fn div_by_value(&self, value: u32) -> Domain {
        self.divby(&Domain::value(value), false)
    }

    /// Solves `x * y = p` for `y`, where `self` is `p` and `factor` is `x`.
    ///
    /// Zero bounds of `factor` give the sentinels `SUB` (low) and `SUP` (high)
    /// instead of being skipped.
    pub fn inv_mul(&self, factor: &Domain) -> Domain {
        check_input(self, "inv_mul");
        check_input(factor, "inv_mul");

        if self.is_empty() || factor.is_empty() {
            return Domain::Empty;
        }

        debug!("inv_mul(a = {}, b = {})", self, factor);
        let product = self.ranges();
        let mut pieces = RangeVec::new();
        for d in factor.ranges().iter() {
            for r in product.iter() {
                let lo = if d.hi > 0 { r.lo.div_ceil(d.hi) } else { SUB };
                let hi = if d.lo > 0 { r.hi / d.lo } else { SUP };
                if lo <= hi {
                    pieces.push(Range { lo, hi });
                }
            }
        }
        check_output(Domain::simplify(&pieces), "inv_mul")
    }

    /// Inverse multiplication by a single factor.
    pub fn inv_mul_value(&self, value: u32) -> Domain {
        self.inv_mul(&Domain::value(value))
    }
}
