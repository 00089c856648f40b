use log::debug;

use crate::arith::combine_pairs;
use crate::consts::SUP;
use crate::domain::Domain;
use crate::range::Range;
use crate::validate::{check_input, check_output};

impl Domain {
    /// Range-wise product of two domains, capped at `SUP`.
    ///
    /// This is not domain consistent: every pair of ranges contributes the
    /// whole interval between its smallest and largest product, so the result
    /// may contain values that are no product of members.
    pub fn mul(&self, other: &Domain) -> Domain {
        check_input(self, "mul");
        check_input(other, "mul");

        if self.is_empty() || other.is_empty() {
            return Domain::Empty;
        }

        debug!("mul(a = {}, b = {})", self, other);
        let result = combine_pairs(&self.ranges(), &other.ranges(), |ra, rb| {
            Some(Range { lo: clamped_product(ra.lo, rb.lo), hi: clamped_product(ra.hi, rb.hi) })
        });
        check_output(result, "mul")
    }

    /// Multiplies every member by `value`.
    pub fn mul_by_value(&self, value: u32) -> Domain {
        self.mul(&Domain::value(value))
    }
}

fn clamped_product(a: u32, b: u32) -> u32 {
    (a as u64 * b as u64).min(SUP as u64) as u32
}
