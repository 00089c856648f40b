use log::debug;

use crate::arith::{combine_pairs, small_bits};
use crate::bits::{bit_max, Bits};
use crate::consts::{SMALL_MAX_NUM, SUP};
use crate::domain::Domain;
use crate::range::Range;
use crate::ranges::close_gaps;
use crate::validate::{check_input, check_output};

impl Domain {
    /// All sums `x + y` with `x` in `self` and `y` in `other`, capped at `SUP`.
    pub fn plus(&self, other: &Domain) -> Domain {
        check_input(self, "plus");
        check_input(other, "plus");

        if self.is_empty() || other.is_empty() {
            return Domain::Empty;
        }

        if let (Some(a), Some(b)) = (small_bits(self), small_bits(other)) {
            if bit_max(a) + bit_max(b) <= SMALL_MAX_NUM {
                debug!("plus: bitset fast path");
                return check_output(Domain::from_bits(plus_bits(a, b)), "plus");
            }
        }

        debug!("plus(a = {}, b = {})", self, other);
        let (a, b) = close_gaps(self.to_ranges(), other.to_ranges());
        let result = combine_pairs(&a, &b, |ra, rb| {
            let lo = ra.lo + rb.lo;
            if lo > SUP {
                return None;
            }
            Some(Range { lo, hi: (ra.hi + rb.hi).min(SUP) })
        });
        check_output(result, "plus")
    }

    /// Adds `value` to every member.
    pub fn plus_value(&self, value: u32) -> Domain {
        self.plus(&Domain::value(value))
    }
}

/// Sum of two bitsets whose maxima add up to at most `SMALL_MAX_NUM`.
fn plus_bits(a: u32, b: u32) -> u32 {
    let mut out = 0;
    for i in Bits::new(a) {
        out |= b << i;
    }
    out
}
