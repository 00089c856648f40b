//! Predicates and accessors.
//!
//! None of these allocate, except [`Domain::to_list`].

use crate::bits::{bit_max, bit_min, bit_nth, bit_size, Bits};
use crate::domain::Domain;
use crate::ranges;

impl Domain {
    pub fn is_empty(&self) -> bool {
        matches!(self, Domain::Empty)
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Domain::Solved(_))
    }

    /// The value of a solved domain.
    pub fn value_of(&self) -> Option<u32> {
        match *self {
            Domain::Solved(value) => Some(value),
            _ => None,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        match self {
            Domain::Empty => false,
            Domain::Solved(v) => *v == value,
            Domain::Bitset(bits) => value < 32 && bits & (1 << value) != 0,
            Domain::Ranges(seq) => ranges::index_of(seq, value).is_some(),
        }
    }

    /// Lowest value, or `None` for the empty domain.
    pub fn min(&self) -> Option<u32> {
        match self {
            Domain::Empty => None,
            Domain::Solved(v) => Some(*v),
            Domain::Bitset(bits) => Some(bit_min(*bits)),
            Domain::Ranges(seq) => ranges::seq_min(seq),
        }
    }

    /// Highest value, or `None` for the empty domain.
    pub fn max(&self) -> Option<u32> {
        match self {
            Domain::Empty => None,
            Domain::Solved(v) => Some(*v),
            Domain::Bitset(bits) => Some(bit_max(*bits)),
            Domain::Ranges(seq) => ranges::seq_max(seq),
        }
    }

    /// Number of values.
    pub fn size(&self) -> u32 {
        match self {
            Domain::Empty => 0,
            Domain::Solved(_) => 1,
            Domain::Bitset(bits) => bit_size(*bits),
            Domain::Ranges(seq) => ranges::total_size(seq),
        }
    }

    /// Every value, ascending.
    pub fn to_list(&self) -> Vec<u32> {
        match self {
            Domain::Empty => Vec::new(),
            Domain::Solved(v) => vec![*v],
            Domain::Bitset(bits) => Bits::new(*bits).collect(),
            Domain::Ranges(seq) => seq.iter().flat_map(|r| r.lo..=r.hi).collect(),
        }
    }

    /// Iterator over every value, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges().into_owned().into_iter().flat_map(|r| r.lo..=r.hi)
    }

    /// The element at zero-based position `size / 2`.
    ///
    /// For an even size this is the first element above the midpoint.
    pub fn middle_element(&self) -> Option<u32> {
        match self {
            Domain::Empty => None,
            Domain::Solved(v) => Some(*v),
            Domain::Bitset(bits) => bit_nth(*bits, bit_size(*bits) / 2),
            Domain::Ranges(seq) => {
                let mut remaining = ranges::total_size(seq) / 2;
                for r in seq.iter() {
                    if remaining < r.size() {
                        return Some(r.lo + remaining);
                    }
                    remaining -= r.size();
                }
                None
            }
        }
    }

    /// Returns true if the domain is exactly `{0}`.
    pub fn is_zero(&self) -> bool {
        matches!(self, Domain::Solved(0))
    }

    pub fn has_zero(&self) -> bool {
        self.min() == Some(0)
    }

    /// Returns true if zero is not a member. Holds for the empty domain.
    pub fn has_no_zero(&self) -> bool {
        !self.has_zero()
    }

    /// Returns true if the domain is exactly `{0, 1}`.
    pub fn is_bool(&self) -> bool {
        matches!(self, Domain::Bitset(0b11))
    }

    /// Returns true if the domain holds zero and at least one nonzero value.
    pub fn is_booly(&self) -> bool {
        match self {
            Domain::Bitset(bits) => bits & 1 != 0,
            Domain::Ranges(seq) => seq.first().is_some_and(|r| r.lo == 0),
            _ => false,
        }
    }

    /// Returns true if the domain is `{0, v}` for some `v > 0`.
    pub fn is_booly_pair(&self) -> bool {
        self.is_booly() && self.size() == 2
    }

    /// The first value of `list`, in list order, that is a member.
    pub fn first_intersecting_value(&self, list: &[u32]) -> Option<u32> {
        list.iter().copied().find(|&v| self.contains(v))
    }

    /// Index of the range covering `value` in [`Domain::ranges`].
    pub fn range_index_of(&self, value: u32) -> Option<usize> {
        match self {
            Domain::Empty => None,
            Domain::Ranges(seq) => ranges::index_of(seq, value),
            _ => ranges::index_of(&self.ranges(), value),
        }
    }

    /// Narrows a booly domain to its truth value.
    ///
    /// `true` removes zero, `false` removes every nonzero value.
    pub fn resolve_as_booly(&self, result: bool) -> Domain {
        if result {
            self.remove_value(0)
        } else {
            self.remove_gt_unsafe(0)
        }
    }
}
