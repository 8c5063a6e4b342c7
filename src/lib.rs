//! # insertion-ordered-set
//!
//! A generic set that remembers insertion order and supports the usual set
//! algebra.
//!
//! ## Overview
//!
//! [`OrderedSet`](set::OrderedSet) stores unique elements in the order they
//! were first added. It provides:
//!
//! - **Membership**: `contains`, `position`, indexed access
//! - **Mutation**: chainable `add`, `insert`, `delete`, `remove`, `retain`, `clear`
//! - **Set Algebra**: `union`, `intersection`, `difference`, `symmetric_difference`
//! - **Relations**: `is_subset`, `is_superset`, `is_disjoint`
//! - **Equivalence Strategies**: value equality, pointer identity, closures, key projection
//!
//! Membership is a linear scan, so elements only need a notion of equality,
//! not `Hash` or `Ord`.
//!
//! ## Feature Flags
//!
//! - `ops`: `|`, `&`, `-`, `^` operators on borrowed sets
//! - `macros`: the [`ordered_set!`] literal macro
//!
//! Both are enabled by default.
//!
//! ## Example
//!
//! ```rust
//! use insertion_ordered_set::prelude::*;
//!
//! let mut seen = OrderedSet::new();
//! seen.add("b").add("a").add("b");
//! assert_eq!(seen.as_slice(), &["b", "a"]);
//!
//! let other = OrderedSet::from(["a", "c"]);
//! assert_eq!(seen.union(&other).as_slice(), &["b", "a", "c"]);
//! assert_eq!(seen.difference(&other).as_slice(), &["b"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the set type and its equivalence strategies.
///
/// # Usage
///
/// ```rust
/// use insertion_ordered_set::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;

    #[cfg(feature = "macros")]
    pub use crate::ordered_set;
}

pub mod set;
