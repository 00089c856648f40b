//! The range-sequence engine.
//!
//! These functions work on plain slices of [`Range`]s and never mutate their
//! input. Most of them expect CSIS input (sorted ascending, non-overlapping,
//! non-adjacent); [`quick_sort`] and [`merge_overlapping`] are the two steps
//! that establish it.

use std::cmp::Ordering;

use log::trace;

use crate::consts::SUP;
use crate::range::{Range, RangeVec};

/// Returns true if the ranges are sorted by `(lo, hi)`.
pub fn is_sorted(ranges: &[Range]) -> bool {
    ranges.windows(2).all(|w| w[0] <= w[1])
}

/// Returns true if the ranges are in CSIS form.
pub fn is_csis(ranges: &[Range]) -> bool {
    ranges.iter().all(|r| r.lo <= r.hi) && ranges.windows(2).all(|w| w[0].hi.saturating_add(1) < w[1].lo)
}

/// Pending work of [`quick_sort`].
enum Pending {
    Sort(RangeVec),
    Emit(RangeVec),
}

/// Sorts ranges by `(lo, hi)`.
///
/// Quicksort with the middle range of each segment as pivot and a three-way
/// partition into fresh sequences; the input is left untouched. Segments wait
/// on an explicit stack, so arithmetic results made of many sorted blocks
/// cannot exhaust the call stack.
pub fn quick_sort(ranges: &[Range]) -> RangeVec {
    if is_sorted(ranges) {
        return RangeVec::from_slice(ranges);
    }

    let mut sorted = RangeVec::with_capacity(ranges.len());
    let mut pending = vec![Pending::Sort(RangeVec::from_slice(ranges))];

    while let Some(work) = pending.pop() {
        let segment = match work {
            Pending::Emit(equal) => {
                sorted.extend(equal);
                continue;
            }
            Pending::Sort(segment) if segment.len() <= 1 => {
                sorted.extend(segment);
                continue;
            }
            Pending::Sort(segment) => segment,
        };

        let pivot = segment[segment.len() / 2];
        let mut left = RangeVec::new();
        let mut equal = RangeVec::new();
        let mut right = RangeVec::new();
        for r in segment {
            match r.cmp(&pivot) {
                Ordering::Less => left.push(r),
                Ordering::Equal => equal.push(r),
                Ordering::Greater => right.push(r),
            }
        }

        // Popped in reverse: left first, then the pivot run, then right.
        pending.push(Pending::Sort(right));
        pending.push(Pending::Emit(equal));
        pending.push(Pending::Sort(left));
    }

    sorted
}

/// Merges overlapping and adjacent ranges of a sorted sequence.
///
/// Two ranges merge when `next.lo <= last.hi + 1`.
pub fn merge_overlapping(sorted: &[Range]) -> RangeVec {
    debug_assert!(is_sorted(sorted), "merge_overlapping expects sorted ranges");

    let mut merged = RangeVec::with_capacity(sorted.len());
    let mut iter = sorted.iter().copied();
    let Some(mut last) = iter.next() else {
        return merged;
    };

    for r in iter {
        if r.lo <= last.hi + 1 {
            if r.hi > last.hi {
                last.hi = r.hi;
            }
        } else {
            merged.push(last);
            last = r;
        }
    }
    merged.push(last);
    merged
}

/// Sorts and merges an arbitrary range sequence into CSIS form.
pub fn normalize(ranges: &[Range]) -> RangeVec {
    let sorted = quick_sort(ranges);
    merge_overlapping(&sorted)
}

/// Total number of values covered by a CSIS sequence.
pub fn total_size(ranges: &[Range]) -> u32 {
    ranges.iter().map(|r| r.size()).sum()
}

/// Lowest value of a CSIS sequence.
pub fn seq_min(ranges: &[Range]) -> Option<u32> {
    ranges.first().map(|r| r.lo)
}

/// Highest value of a CSIS sequence.
pub fn seq_max(ranges: &[Range]) -> Option<u32> {
    ranges.last().map(|r| r.hi)
}

/// Width of the narrowest range, or `SUP` for an empty sequence.
pub fn smallest_range_size(ranges: &[Range]) -> u32 {
    ranges.iter().map(|r| r.size()).min().unwrap_or(SUP)
}

/// Index of the range covering `value`.
///
/// The scan stops at the first range starting beyond `value`.
pub fn index_of(ranges: &[Range], value: u32) -> Option<usize> {
    for (i, r) in ranges.iter().enumerate() {
        if r.lo > value {
            break;
        }
        if value <= r.hi {
            return Some(i);
        }
    }
    None
}

/// Merges every pair of neighbours whose distance `next.lo - last.hi` is at most `gap`.
pub fn close_gaps_by(ranges: &[Range], gap: u32) -> RangeVec {
    let mut closed = RangeVec::with_capacity(ranges.len());
    let mut iter = ranges.iter().copied();
    let Some(mut current) = iter.next() else {
        return closed;
    };

    for r in iter {
        if r.lo.saturating_sub(current.hi) > gap {
            closed.push(current);
            current = r;
        } else {
            current.hi = r.hi;
        }
    }
    closed.push(current);
    closed
}

/// Closes the gaps of two operands of an addition or subtraction.
///
/// Combining a range with any range of the other operand widens it by at
/// least the other operand's narrowest range, so every gap no wider than that
/// disappears from the result anyway. Closing those gaps up front reduces the
/// number of range pairs to combine. Since closing gaps can widen the
/// narrowest range, both sides are revisited until neither changes.
///
/// The result is not canonicalized.
pub fn close_gaps(mut a: RangeVec, mut b: RangeVec) -> (RangeVec, RangeVec) {
    if a.is_empty() || b.is_empty() {
        return (a, b);
    }

    loop {
        let mut change = 0;

        if a.len() > 1 {
            let closed = close_gaps_by(&a, smallest_range_size(&b));
            change += a.len() - closed.len();
            a = closed;
        }

        if b.len() > 1 {
            let closed = close_gaps_by(&b, smallest_range_size(&a));
            change += b.len() - closed.len();
            b = closed;
        }

        trace!("close_gaps: closed {} gaps, now {} x {} ranges", change, a.len(), b.len());
        if change == 0 {
            break;
        }
    }

    (a, b)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn seq(pairs: &[(u32, u32)]) -> RangeVec {
        pairs.iter().map(|&p| Range::from(p)).collect()
    }

    #[test]
    fn test_sort_already_sorted() {
        let ranges = seq(&[(0, 1), (5, 10), (20, 30)]);
        assert_eq!(quick_sort(&ranges), ranges);
    }

    #[test]
    fn test_sort_reversed() {
        let ranges = seq(&[(100, 110), (50, 60), (20, 30), (0, 1)]);
        assert_eq!(quick_sort(&ranges), seq(&[(0, 1), (20, 30), (50, 60), (100, 110)]));
    }

    #[test]
    fn test_sort_by_hi_when_lo_equal() {
        let ranges = seq(&[(5, 9), (5, 6), (1, 2), (5, 7)]);
        assert_eq!(quick_sort(&ranges), seq(&[(1, 2), (5, 6), (5, 7), (5, 9)]));
    }

    #[test]
    fn test_sort_leaves_input() {
        let ranges = seq(&[(9, 9), (1, 1)]);
        let copy = ranges.clone();
        let _ = quick_sort(&ranges);
        assert_eq!(ranges, copy);
    }

    #[test]
    fn test_sort_duplicates() {
        let ranges = seq(&[(7, 7), (3, 3), (7, 7), (7, 7), (1, 9), (3, 3)]);
        assert_eq!(quick_sort(&ranges), seq(&[(1, 9), (3, 3), (3, 3), (7, 7), (7, 7), (7, 7)]));
    }

    #[test]
    fn test_sort_many_sorted_blocks() {
        // Same shape as the pieces of a product: one ascending block per factor.
        let ranges: RangeVec = [1u32, 3, 40]
            .iter()
            .flat_map(|&f| (1..=16_667u32).map(move |k| Range::single(f * 3 * k)))
            .collect();
        assert_eq!(ranges.len(), 50_001);

        let sorted = quick_sort(&ranges);
        let mut expected = ranges.to_vec();
        expected.sort();
        assert_eq!(sorted.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_merge_overlapping() {
        let ranges = seq(&[(0, 5), (3, 8), (10, 12), (13, 20), (25, 30), (26, 27)]);
        assert_eq!(merge_overlapping(&ranges), seq(&[(0, 8), (10, 20), (25, 30)]));
    }

    #[test]
    fn test_merge_keeps_gaps() {
        let ranges = seq(&[(0, 5), (7, 8)]);
        assert_eq!(merge_overlapping(&ranges), ranges);
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge_overlapping(&[]).is_empty());
    }

    #[test]
    fn test_normalize_idempotent() {
        let ranges = seq(&[(40, 50), (0, 10), (11, 11), (45, 60), (100, 100)]);
        let once = normalize(&ranges);
        assert_eq!(once, seq(&[(0, 11), (40, 60), (100, 100)]));
        assert_eq!(normalize(&once), once);
        assert!(is_csis(&once));
    }

    #[test]
    fn test_is_csis() {
        assert!(is_csis(&seq(&[(0, 1), (3, 4)])));
        assert!(!is_csis(&seq(&[(0, 1), (2, 4)])));
        assert!(!is_csis(&seq(&[(3, 4), (0, 1)])));
        assert!(is_csis(&[]));
    }

    #[test]
    fn test_index_of() {
        let ranges = seq(&[(10, 20), (30, 40), (50, 50)]);
        assert_eq!(index_of(&ranges, 10), Some(0));
        assert_eq!(index_of(&ranges, 35), Some(1));
        assert_eq!(index_of(&ranges, 50), Some(2));
        assert_eq!(index_of(&ranges, 25), None);
        assert_eq!(index_of(&ranges, 5), None);
        assert_eq!(index_of(&ranges, 51), None);
    }

    #[test]
    fn test_sizes() {
        let ranges = seq(&[(10, 20), (30, 31), (50, 50)]);
        assert_eq!(total_size(&ranges), 14);
        assert_eq!(smallest_range_size(&ranges), 1);
        assert_eq!(smallest_range_size(&[]), SUP);
        assert_eq!(seq_min(&ranges), Some(10));
        assert_eq!(seq_max(&ranges), Some(50));
    }

    #[test]
    fn test_close_gaps_empty_side() {
        let a = seq(&[(10, 23), (29, 38), (49, 49), (54, 68), (77, 78), (84, 100)]);
        let (x, y) = close_gaps(RangeVec::new(), a.clone());
        assert!(x.is_empty());
        assert_eq!(y, a);
        let (x, y) = close_gaps(a.clone(), RangeVec::new());
        assert_eq!(x, a);
        assert!(y.is_empty());
    }

    #[test]
    fn test_close_gaps_by_width_of_other() {
        let a = seq(&[(10, 20)]);
        let b = seq(&[(100, 110), (120, 200), (300, 310), (321, 400)]);
        let (x, y) = close_gaps(a.clone(), b.clone());
        assert_eq!(x, a);
        assert_eq!(y, seq(&[(100, 200), (300, 400)]));

        let (x, y) = close_gaps(b, a.clone());
        assert_eq!(x, seq(&[(100, 200), (300, 400)]));
        assert_eq!(y, a);
    }

    #[test]
    fn test_close_gaps_keeps_bigger_gaps() {
        let a = seq(&[(10, 20)]);
        let b = seq(&[(300, 310), (322, 400)]);
        let (_, y) = close_gaps(a, b.clone());
        assert_eq!(y, b);
    }

    #[test]
    fn test_close_gaps_only_small_enough() {
        let a = seq(&[(100, 110), (120, 200), (300, 310), (321, 400)]);
        let b = seq(&[(10, 19)]);
        let (x, y) = close_gaps(a, b.clone());
        assert_eq!(x, seq(&[(100, 200), (300, 310), (321, 400)]));
        assert_eq!(y, b);
    }

    #[test]
    fn test_close_gaps_fixed_point() {
        // First pass closes only the narrow gap (min width is 2), which widens
        // the narrowest range to 5 and lets the second pass close the rest.
        let a = seq(&[(1, 2), (4, 5), (8, 900)]);
        let (x, y) = close_gaps(a.clone(), a);
        assert_eq!(x, seq(&[(1, 900)]));
        assert_eq!(y, seq(&[(1, 900)]));
    }
}
