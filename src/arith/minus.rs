use log::debug;

use crate::arith::{combine_pairs, small_bits};
use crate::bits::Bits;
use crate::domain::Domain;
use crate::range::Range;
use crate::ranges::close_gaps;
use crate::validate::{check_input, check_output};

impl Domain {
    /// All non-negative differences `x - y` with `x` in `self` and `y` in `other`.
    ///
    /// When both operands contain zero the result is `[0, max(self)]`.
    pub fn minus(&self, other: &Domain) -> Domain {
        check_input(self, "minus");
        check_input(other, "minus");

        if other.is_empty() {
            return Domain::Empty;
        }
        let Some(max) = self.max() else {
            return Domain::Empty;
        };

        if self.has_zero() && other.has_zero() {
            debug!("minus: both operands contain zero");
            return check_output(Domain::range(0, max), "minus");
        }

        if let (Some(a), Some(b)) = (small_bits(self), small_bits(other)) {
            debug!("minus: bitset fast path");
            return check_output(Domain::from_bits(minus_bits(a, b)), "minus");
        }

        debug!("minus(a = {}, b = {})", self, other);
        let (a, b) = close_gaps(self.to_ranges(), other.to_ranges());
        let result = combine_pairs(&a, &b, |ra, rb| {
            if ra.hi < rb.lo {
                return None;
            }
            Some(Range { lo: ra.lo.saturating_sub(rb.hi), hi: ra.hi - rb.lo })
        });
        check_output(result, "minus")
    }

    /// Subtracts `value` from every member, dropping members below `value`.
    pub fn minus_value(&self, value: u32) -> Domain {
        self.minus(&Domain::value(value))
    }
}

/// Difference of two bitsets. Shifting right drops the negative results.
fn minus_bits(a: u32, b: u32) -> u32 {
    let mut out = 0;
    for j in Bits::new(b) {
        out |= a >> j;
    }
    out
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::consts::SUP;

    #[test]
    fn test_minus_bits() {
        // {5, 7} - {1, 2} = {3, 4, 5, 6}
        assert_eq!(minus_bits(0b1010_0000, 0b110), 0b111_1000);
        // {1} - {3} is empty
        assert_eq!(minus_bits(0b10, 0b1000), 0);
    }

    #[test]
    fn test_minus_zero_fast_path() {
        let d = Domain::from_ranges([(0, 0), (50, 100)]);
        assert_eq!(d.minus(&d), Domain::range(0, 100));
        let b = Domain::from_list(&[0, 3, 9]);
        assert_eq!(b.minus(&b), Domain::range(0, 9));
    }

    #[test]
    fn test_minus_bitset_fast_path() {
        assert_eq!(Domain::range(10, 20).minus(&Domain::range(1, 5)), Domain::range(5, 19));
        assert_eq!(Domain::value(3).minus(&Domain::value(5)), Domain::Empty);
        assert_eq!(Domain::value(5).minus(&Domain::value(5)), Domain::value(0));
    }

    #[test]
    fn test_minus_general() {
        let a = Domain::range(100, 200);
        let b = Domain::range(10, 20);
        assert_eq!(a.minus(&b), Domain::range(80, 190));
        assert_eq!(b.minus(&a), Domain::Empty);
    }

    #[test]
    fn test_minus_clamps_at_zero() {
        let a = Domain::range(5, 50);
        let b = Domain::range(10, 40);
        assert_eq!(a.minus(&b), Domain::range(0, 40));
    }

    #[test]
    fn test_minus_drops_negative_pairs() {
        let a = Domain::from_ranges([(10, 20), (1000, 1010)]);
        let b = Domain::range(500, 501);
        assert_eq!(a.minus(&b), Domain::range(499, 510));
    }

    #[test]
    fn test_minus_empty() {
        assert_eq!(Domain::Empty.minus(&Domain::range(0, 5)), Domain::Empty);
        assert_eq!(Domain::range(0, 5).minus(&Domain::Empty), Domain::Empty);
    }

    #[test]
    fn test_minus_value() {
        assert_eq!(Domain::range(10, SUP).minus_value(10), Domain::range(0, SUP - 10));
        assert_eq!(Domain::from_list(&[2, 40]).minus_value(5), Domain::value(35));
    }
}
