//! Set operators: intersection, value removal and threshold removal.

use log::{debug, trace};
use smallvec::SmallVec;

use crate::bits::{ranges_mask, GTE_KEEP, LTE_KEEP};
use crate::consts::{SMALL_MAX_NUM, SUP};
use crate::domain::Domain;
use crate::range::{Range, RangeVec};
use crate::ranges;
use crate::validate::{check_input, check_output};

impl Domain {
    /// Values present in both domains.
    pub fn intersection(&self, other: &Domain) -> Domain {
        check_input(self, "intersection");
        check_input(other, "intersection");
        debug!("intersection(a = {}, b = {})", self, other);

        let result = match (self, other) {
            (Domain::Empty, _) | (_, Domain::Empty) => Domain::Empty,
            (Domain::Solved(v), d) | (d, Domain::Solved(v)) => d.intersection_value(*v),
            (Domain::Bitset(a), Domain::Bitset(b)) => Domain::from_bits(a & b),
            (Domain::Bitset(bits), Domain::Ranges(seq)) | (Domain::Ranges(seq), Domain::Bitset(bits)) => {
                Domain::from_bits(bits & ranges_mask(seq))
            }
            (Domain::Ranges(a), Domain::Ranges(b)) => Domain::from_csis(intersect_seqs(a, b)),
        };
        check_output(result, "intersection")
    }

    /// `{value}` if `value` is a member, otherwise the empty domain.
    pub fn intersection_value(&self, value: u32) -> Domain {
        check_input(self, "intersection_value");
        if self.contains(value) {
            Domain::Solved(value)
        } else {
            Domain::Empty
        }
    }

    /// Returns true if the two domains have no value in common.
    pub fn shares_no_elements(&self, other: &Domain) -> bool {
        check_input(self, "shares_no_elements");
        check_input(other, "shares_no_elements");
        match (self, other) {
            (Domain::Empty, _) | (_, Domain::Empty) => true,
            (Domain::Solved(v), d) | (d, Domain::Solved(v)) => !d.contains(*v),
            (Domain::Bitset(a), Domain::Bitset(b)) => a & b == 0,
            (Domain::Bitset(bits), Domain::Ranges(seq)) | (Domain::Ranges(seq), Domain::Bitset(bits)) => {
                bits & ranges_mask(seq) == 0
            }
            (Domain::Ranges(a), Domain::Ranges(b)) => !seqs_overlap(a, b),
        }
    }

    /// Removes a single value.
    pub fn remove_value(&self, value: u32) -> Domain {
        check_input(self, "remove_value");

        let result = match self {
            Domain::Empty => Domain::Empty,
            Domain::Solved(v) => {
                if *v == value {
                    Domain::Empty
                } else {
                    Domain::Solved(*v)
                }
            }
            Domain::Bitset(bits) => {
                if value > SMALL_MAX_NUM {
                    Domain::Bitset(*bits)
                } else {
                    Domain::from_bits(bits & !(1 << value))
                }
            }
            Domain::Ranges(seq) => match ranges::index_of(seq, value) {
                None => self.clone(),
                Some(index) => remove_from_seq(seq, index, value),
            },
        };
        check_output(result, "remove_value")
    }

    /// Removes every value `>= value`.
    ///
    /// # Panics
    ///
    /// Panics if `value > SUP + 1`.
    pub fn remove_gte(&self, value: u32) -> Domain {
        assert!(value <= SUP + 1, "remove_gte: threshold {} exceeds SUP + 1", value);
        check_input(self, "remove_gte");

        let result = match self {
            Domain::Empty => Domain::Empty,
            Domain::Solved(v) => {
                if *v >= value {
                    Domain::Empty
                } else {
                    Domain::Solved(*v)
                }
            }
            Domain::Bitset(bits) => {
                if value > SMALL_MAX_NUM {
                    Domain::Bitset(*bits)
                } else {
                    Domain::from_bits(bits & GTE_KEEP[value as usize])
                }
            }
            Domain::Ranges(seq) => {
                let mut kept = RangeVec::with_capacity(seq.len());
                for r in seq.iter() {
                    if r.lo >= value {
                        break;
                    }
                    if value <= r.hi {
                        kept.push(Range { lo: r.lo, hi: value - 1 });
                        break;
                    }
                    kept.push(*r);
                }
                Domain::from_csis(kept)
            }
        };
        check_output(result, "remove_gte")
    }

    /// Removes every value `<= value`.
    ///
    /// # Panics
    ///
    /// Panics if `value > SUP + 1`.
    pub fn remove_lte(&self, value: u32) -> Domain {
        assert!(value <= SUP + 1, "remove_lte: threshold {} exceeds SUP + 1", value);
        check_input(self, "remove_lte");

        let result = match self {
            Domain::Empty => Domain::Empty,
            Domain::Solved(v) => {
                if *v <= value {
                    Domain::Empty
                } else {
                    Domain::Solved(*v)
                }
            }
            Domain::Bitset(bits) => {
                if value > SMALL_MAX_NUM {
                    Domain::Empty
                } else {
                    Domain::from_bits(bits & LTE_KEEP[value as usize])
                }
            }
            Domain::Ranges(seq) => {
                let mut kept = RangeVec::new();
                for (i, r) in seq.iter().enumerate() {
                    if r.hi <= value {
                        continue;
                    }
                    if r.lo <= value {
                        kept.push(Range { lo: value + 1, hi: r.hi });
                        kept.extend_from_slice(&seq[i + 1..]);
                    } else {
                        kept.extend_from_slice(&seq[i..]);
                    }
                    break;
                }
                Domain::from_csis(kept)
            }
        };
        check_output(result, "remove_lte")
    }

    /// Removes every value `< value`, for any signed threshold.
    pub fn remove_lt_unsafe(&self, value: i64) -> Domain {
        if value <= 0 {
            self.clone()
        } else if value > SUP as i64 {
            Domain::Empty
        } else {
            self.remove_lte((value - 1) as u32)
        }
    }

    /// Removes every value `> value`, for any signed threshold.
    pub fn remove_gt_unsafe(&self, value: i64) -> Domain {
        if value >= SUP as i64 {
            self.clone()
        } else if value < 0 {
            Domain::Empty
        } else {
            self.remove_gte((value + 1) as u32)
        }
    }
}

/// Removes `value` from `seq[index]`, which is known to contain it.
fn remove_from_seq(seq: &[Range], index: usize, value: u32) -> Domain {
    let r = seq[index];

    if seq.len() == 1 {
        if r.is_single() {
            debug!("remove_value: last value");
            return Domain::Empty;
        }
        if r.hi - r.lo == 1 {
            debug!("remove_value: two values left");
            return Domain::Solved(if value == r.lo { r.hi } else { r.lo });
        }
    }
    if seq.len() == 2 && seq[0].is_single() && seq[1].is_single() {
        debug!("remove_value: two single values");
        return Domain::Solved(seq[1 - index].lo);
    }

    let mut out: RangeVec = SmallVec::with_capacity(seq.len() + 1);
    out.extend_from_slice(&seq[..index]);
    if r.lo < value {
        out.push(Range { lo: r.lo, hi: value - 1 });
    }
    if value < r.hi {
        out.push(Range { lo: value + 1, hi: r.hi });
    }
    out.extend_from_slice(&seq[index + 1..]);
    trace!("remove_value: {} ranges -> {} ranges", seq.len(), out.len());

    // Removing the top value may bring the max down into bitset range;
    // `from_csis` takes care of the demotion.
    Domain::from_csis(out)
}

/// Zipper over two CSIS sequences, collecting their common parts.
fn intersect_seqs(a: &[Range], b: &[Range]) -> RangeVec {
    let mut out = RangeVec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let (ra, rb) = (a[i], b[j]);
        let lo = ra.lo.max(rb.lo);
        let hi = ra.hi.min(rb.hi);
        if lo <= hi {
            out.push(Range { lo, hi });
        }
        if ra.hi < rb.hi {
            i += 1;
        } else if rb.hi < ra.hi {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    out
}

/// Zipper over two CSIS sequences, stopping at the first overlap.
fn seqs_overlap(a: &[Range], b: &[Range]) -> bool {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].overlaps(b[j]) {
            return true;
        }
        if a[i].hi < b[j].hi {
            i += 1;
        } else {
            j += 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn d(pairs: &[(u32, u32)]) -> Domain {
        Domain::from_ranges(pairs.iter().copied())
    }

    #[test]
    fn test_intersection_ranges() {
        let a = d(&[(0, 10), (20, 30), (40, 50)]);
        let b = d(&[(5, 45)]);
        assert_eq!(a.intersection(&b), d(&[(5, 10), (20, 30), (40, 45)]));
        assert_eq!(b.intersection(&a), a.intersection(&b));
    }

    #[test]
    fn test_intersection_ranges_disjoint() {
        let a = d(&[(100, 200)]);
        let b = d(&[(0, 99), (201, 300)]);
        assert_eq!(a.intersection(&b), Domain::Empty);
    }

    #[test]
    fn test_intersection_demotes() {
        let a = d(&[(0, 10), (100, 200)]);
        let b = d(&[(5, 50)]);
        assert_eq!(a.intersection(&b), Domain::range(5, 10));
        assert_eq!(a.intersection(&d(&[(10, 99)])), Domain::value(10));
    }

    #[test]
    fn test_intersection_bitset_ranges() {
        let a = Domain::from_list(&[1, 3, 5, 29]);
        let b = d(&[(3, 40)]);
        assert_eq!(a.intersection(&b), Domain::from_list(&[3, 5, 29]));
        assert_eq!(b.intersection(&a), Domain::from_list(&[3, 5, 29]));
        assert_eq!(a.intersection(&d(&[(31, 40)])), Domain::Empty);
    }

    #[test]
    fn test_intersection_solved() {
        let a = d(&[(0, 10), (100, 200)]);
        assert_eq!(a.intersection(&Domain::value(150)), Domain::value(150));
        assert_eq!(Domain::value(50).intersection(&a), Domain::Empty);
        assert_eq!(a.intersection_value(7), Domain::value(7));
        assert_eq!(a.intersection_value(70), Domain::Empty);
        assert_eq!(Domain::Empty.intersection(&a), Domain::Empty);
    }

    #[test]
    fn test_shares_no_elements() {
        let a = d(&[(0, 10), (100, 200)]);
        assert!(a.shares_no_elements(&d(&[(11, 99)])));
        assert!(!a.shares_no_elements(&d(&[(11, 100)])));
        assert!(a.shares_no_elements(&Domain::Empty));
        assert!(!a.shares_no_elements(&Domain::from_list(&[5, 20])));
        assert!(a.shares_no_elements(&Domain::from_list(&[15, 20])));
        assert!(Domain::from_list(&[1, 2]).shares_no_elements(&Domain::from_list(&[3, 4])));
        assert!(!Domain::value(150).shares_no_elements(&a));
    }

    #[test]
    #[should_panic(expected = "shares_no_elements: invalid input")]
    fn test_shares_no_elements_checks_input() {
        if !crate::validate::CHECKS {
            panic!("shares_no_elements: invalid input (checks disabled)");
        }
        Domain::range(0, 5).shares_no_elements(&Domain::Bitset(0));
    }

    #[test]
    #[should_panic(expected = "intersection_value: invalid input")]
    fn test_intersection_value_checks_input() {
        if !crate::validate::CHECKS {
            panic!("intersection_value: invalid input (checks disabled)");
        }
        Domain::Ranges(smallvec::smallvec![Range::new(3, 4)]).intersection_value(3);
    }

    #[test]
    fn test_remove_value_splits() {
        let a = d(&[(50, 60)]);
        assert_eq!(a.remove_value(55), d(&[(50, 54), (56, 60)]));
        assert_eq!(a.remove_value(50), d(&[(51, 60)]));
        assert_eq!(a.remove_value(70), a);
    }

    #[test]
    fn test_remove_value_transitions() {
        assert_eq!(d(&[(40, 41)]).remove_value(40), Domain::value(41));
        assert_eq!(d(&[(40, 41)]).remove_value(41), Domain::value(40));
        assert_eq!(d(&[(40, 40), (90, 90)]).remove_value(90), Domain::value(40));
        assert_eq!(d(&[(40, 40), (90, 90)]).remove_value(40), Domain::value(90));
        assert_eq!(Domain::value(7).remove_value(7), Domain::Empty);
        assert_eq!(Domain::range(0, 1).remove_value(0), Domain::value(1));
    }

    #[test]
    fn test_remove_value_max_demotes_to_bitset() {
        assert_eq!(d(&[(0, 5), (31, 31)]).remove_value(31), Domain::range(0, 5));
        assert_eq!(d(&[(20, 31)]).remove_value(31), Domain::range(20, 30));
        assert_eq!(d(&[(1, 1), (3, 3), (31, 31)]).remove_value(31), Domain::from_list(&[1, 3]));
    }

    #[test]
    fn test_remove_gte() {
        let a = d(&[(10, 20), (30, 40), (50, 60)]);
        assert_eq!(a.remove_gte(35), d(&[(10, 20), (30, 34)]));
        assert_eq!(a.remove_gte(30), Domain::range(10, 20));
        assert_eq!(a.remove_gte(10), Domain::Empty);
        assert_eq!(a.remove_gte(61), a);
        assert_eq!(a.remove_gte(SUP + 1), a);
        assert_eq!(Domain::from_list(&[1, 3, 5]).remove_gte(4), Domain::from_list(&[1, 3]));
        assert_eq!(Domain::from_list(&[1, 3, 5]).remove_gte(31), Domain::from_list(&[1, 3, 5]));
        assert_eq!(Domain::value(9).remove_gte(9), Domain::Empty);
    }

    #[test]
    fn test_remove_lte() {
        let a = d(&[(10, 20), (30, 40), (50, 60)]);
        assert_eq!(a.remove_lte(35), d(&[(36, 40), (50, 60)]));
        assert_eq!(a.remove_lte(40), d(&[(50, 60)]));
        assert_eq!(a.remove_lte(59), Domain::value(60));
        assert_eq!(a.remove_lte(60), Domain::Empty);
        assert_eq!(a.remove_lte(5), a);
        assert_eq!(Domain::from_list(&[1, 3, 5]).remove_lte(3), Domain::value(5));
        assert_eq!(Domain::from_list(&[1, 3, 5]).remove_lte(30), Domain::Empty);
        assert_eq!(Domain::from_list(&[1, 3, 5]).remove_lte(99), Domain::Empty);
    }

    #[test]
    #[should_panic(expected = "exceeds SUP + 1")]
    fn test_remove_gte_beyond_sup_panics() {
        Domain::range(0, 5).remove_gte(SUP + 2);
    }

    #[test]
    fn test_remove_unsafe_clamps() {
        let a = d(&[(10, 20), (50, 60)]);
        assert_eq!(a.remove_lt_unsafe(-5), a);
        assert_eq!(a.remove_lt_unsafe(0), a);
        assert_eq!(a.remove_lt_unsafe(15), d(&[(15, 20), (50, 60)]));
        assert_eq!(a.remove_lt_unsafe(SUP as i64 + 7), Domain::Empty);

        assert_eq!(a.remove_gt_unsafe(SUP as i64 + 7), a);
        assert_eq!(a.remove_gt_unsafe(-1), Domain::Empty);
        assert_eq!(a.remove_gt_unsafe(15), Domain::range(10, 15));
        assert_eq!(Domain::range(0, 9).remove_gt_unsafe(0), Domain::value(0));
    }
}
