//! Numeric bounds shared by every domain operation.

/// Smallest value a domain may contain.
pub const SUB: u32 = 0;

/// Largest value a domain may contain (inclusive).
///
/// Products and sums are clamped to this bound. It must stay below `2^30`
/// so that any sum of two legal values fits comfortably in a `u32`.
pub const SUP: u32 = 100_000_000;

/// Largest value that fits into a [`Bitset`][crate::domain::Domain::Bitset] domain.
///
/// Bit `i` of the mask stands for value `i`, so the mask uses bits `0..=30`.
pub const SMALL_MAX_NUM: u32 = 30;

const _: () = assert!(SMALL_MAX_NUM <= 30, "SMALL_MAX_NUM cannot exceed 30");
const _: () = assert!(SUP < (1 << 30), "SUP must fit in 30 bits");
const _: () = assert!(SUB == 0, "domains are non-negative");
