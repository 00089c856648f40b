//! # fd-domain: Finite-Domain Sets for Constraint Propagation
//!
//! **`fd-domain`** is the value type at the heart of a finite-domain constraint solver.
//! A [`Domain`] is the set of integers a solver variable may still take, and this crate
//! provides every set and arithmetic operation the propagation loop needs.
//!
//! ## What is a Domain?
//!
//! A domain is a subset of `[SUB, SUP]` (`0..=100_000_000`). It is stored in the *smallest*
//! of four representations:
//!
//! - **Empty**: no values at all.
//! - **Solved**: exactly one value.
//! - **Bitset**: a 31-bit mask for sets whose values all fit in `0..=30`.
//! - **Ranges**: a sorted, non-overlapping, non-adjacent sequence of inclusive ranges.
//!
//! The representation is **canonical**: two domains are equal sets iff they are equal values.
//! Every constructor and operator maintains this, so domains can be compared and hashed directly.
//!
//! ## Key Features
//!
//! - **Value Semantics**: Domains are immutable. Operators borrow their operands and return a new [`Domain`].
//! - **Fast Paths**: Small domains are combined with word-level bit operations only.
//! - **Interval Arithmetic**: `plus`, `minus`, `mul`, `divby` and `inv_mul`, over whole domains or single values.
//! - **Fail-Fast Contract**: Malformed domains are caller bugs. Operators validate their inputs and outputs
//!   in debug builds (or with the `strict` feature) and panic with a [`DomainError`] message.
//!
//! ## Basic Usage
//!
//! ```rust
//! use fd_domain::Domain;
//!
//! // 1. Build some domains
//! let x = Domain::range(0, 10);
//! let y = Domain::from_ranges([(100, 102), (104, 106), (108, 109)]);
//!
//! // 2. Small domains use the bitset representation
//! assert_eq!(x.kind(), "bitset");
//! assert_eq!(y.kind(), "ranges");
//!
//! // 3. Set operations
//! let z = y.remove_value(105);
//! assert_eq!(z.to_string(), "ranges([100,102],[104,104],[106,106],[108,109])");
//! assert!(x.shares_no_elements(&y));
//!
//! // 4. Arithmetic
//! let sum = &x + &y;
//! assert_eq!(sum.min(), Some(100));
//! assert_eq!(sum.max(), Some(119));
//! assert_eq!(Domain::range(500, 600).divby(&Domain::range(5, 10), true), Domain::range(50, 120));
//! ```
//!
//! ## Core Components
//!
//! - **[`domain`]**: The [`Domain`] type, its constructors and the canonicalizer.
//! - **[`query`]**: Predicates and accessors (membership, bounds, size, booly checks).
//! - **[`setops`]**: Intersection and removal operators.
//! - **[`arith`]**: Interval arithmetic.
//! - **[`ranges`]**: The range-sequence engine (sort, merge, gap closing).
//! - **[`codec`]**: The packed word encoding of range sequences.

pub mod arith;
pub mod bits;
pub mod codec;
pub mod consts;
pub mod domain;
pub mod error;
pub mod query;
pub mod range;
pub mod ranges;
pub mod setops;
pub mod validate;

pub use crate::consts::{SMALL_MAX_NUM, SUB, SUP};
pub use crate::domain::Domain;
pub use crate::error::DomainError;
pub use crate::range::{Range, RangeVec};
