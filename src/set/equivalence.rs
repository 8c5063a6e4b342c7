//! Equivalence strategies for [`OrderedSet`](super::OrderedSet).
//!
//! An [`Equivalence`] decides when two elements count as "the same" element.
//! The set never hashes or orders its elements; membership is answered by
//! asking the strategy about each stored element in turn.
//!
//! | Strategy            | Two elements are equal when                  |
//! |---------------------|----------------------------------------------|
//! | [`ValueEquality`]   | `left == right` (`PartialEq`)                |
//! | [`PointerIdentity`] | both handles point at the same allocation    |
//! | [`EquivalentBy`]    | the supplied closure returns `true`          |
//! | [`KeyEquality`]     | the projected keys compare equal             |
//!
//! # Examples
//!
//! ```rust
//! use insertion_ordered_set::set::{KeyEquality, OrderedSet};
//!
//! let mut set = OrderedSet::with_equivalence(KeyEquality::new(|name: &String| name.to_lowercase()));
//! set.add("Alice".to_string()).add("ALICE".to_string()).add("bob".to_string());
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.first().map(String::as_str), Some("Alice"));
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Decides whether a stored element and a query are the same element of a set.
///
/// `Q` is the type lookups are made with. It defaults to the element type;
/// [`ValueEquality`] also accepts any borrowed form of the element, so an
/// `OrderedSet<String>` can be queried with a `&str`.
///
/// Implementations are expected to be reflexive, symmetric and transitive.
/// This is not checked; an inconsistent relation leaves set contents
/// unspecified (but never unsafe).
pub trait Equivalence<T: ?Sized, Q: ?Sized = T> {
    /// Returns `true` if the stored element `left` matches the query `right`.
    fn equivalent(&self, left: &T, right: &Q) -> bool;
}

impl<T: ?Sized, Q: ?Sized, E: Equivalence<T, Q> + ?Sized> Equivalence<T, Q> for &E {
    #[inline]
    fn equivalent(&self, left: &T, right: &Q) -> bool {
        (**self).equivalent(left, right)
    }
}

// =============================================================================
// ValueEquality
// =============================================================================

/// Compares elements with `PartialEq`.
///
/// This is the default strategy of [`OrderedSet`](super::OrderedSet).
/// Queries may use any type the element borrows as, like `str` for `String`.
///
/// # Examples
///
/// ```rust
/// use insertion_ordered_set::set::{Equivalence, ValueEquality};
///
/// assert!(ValueEquality.equivalent(&1, &1));
/// assert!(!ValueEquality.equivalent("a", "b"));
/// assert!(ValueEquality.equivalent(&String::from("a"), "a"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ValueEquality;

impl<T, Q> Equivalence<T, Q> for ValueEquality
where
    T: Borrow<Q> + ?Sized,
    Q: PartialEq + ?Sized,
{
    #[inline]
    fn equivalent(&self, left: &T, right: &Q) -> bool {
        Borrow::<Q>::borrow(left) == right
    }
}

// =============================================================================
// PointerIdentity
// =============================================================================

/// Compares smart pointers and references by the address they point at.
///
/// Two `Rc`s holding equal but separately allocated values are different
/// elements under this strategy; two clones of the same `Rc` are the same.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use insertion_ordered_set::set::{OrderedSet, PointerIdentity};
///
/// let shared = Rc::new(String::from("token"));
/// let lookalike = Rc::new(String::from("token"));
///
/// let mut set = OrderedSet::with_equivalence(PointerIdentity);
/// set.add(Rc::clone(&shared))
///     .add(Rc::clone(&shared))
///     .add(Rc::clone(&lookalike));
///
/// assert_eq!(set.len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PointerIdentity;

impl<T: Deref + ?Sized> Equivalence<T> for PointerIdentity {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        std::ptr::eq(&**left, &**right)
    }
}

// =============================================================================
// EquivalentBy
// =============================================================================

/// Compares elements with a caller-supplied predicate.
///
/// # Examples
///
/// ```rust
/// use insertion_ordered_set::set::{EquivalentBy, OrderedSet};
///
/// let close_enough = EquivalentBy::new(|left: &f64, right: &f64| (left - right).abs() < 0.01);
/// let set = OrderedSet::from_iter_with([1.0, 1.001, 2.0], close_enough);
///
/// assert_eq!(set.as_slice(), &[1.0, 2.0]);
/// ```
#[derive(Clone, Copy)]
pub struct EquivalentBy<F> {
    predicate: F,
}

impl<F> EquivalentBy<F> {
    /// Wraps `predicate` as an equivalence strategy.
    #[inline]
    pub const fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Equivalence<T> for EquivalentBy<F> {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (self.predicate)(left, right)
    }
}

impl<F> fmt::Debug for EquivalentBy<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("EquivalentBy").finish_non_exhaustive()
    }
}

// =============================================================================
// KeyEquality
// =============================================================================

/// Compares elements by a key projected out of each element.
///
/// The key is recomputed on every comparison, so the projection should be
/// cheap.
#[derive(Clone, Copy)]
pub struct KeyEquality<F> {
    key: F,
}

impl<F> KeyEquality<F> {
    /// Wraps `key` as an equivalence strategy.
    #[inline]
    pub const fn new(key: F) -> Self {
        Self { key }
    }
}

impl<T: ?Sized, K: PartialEq, F: Fn(&T) -> K> Equivalence<T> for KeyEquality<F> {
    #[inline]
    fn equivalent(&self, left: &T, right: &T) -> bool {
        (self.key)(left) == (self.key)(right)
    }
}

impl<F> fmt::Debug for KeyEquality<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("KeyEquality").finish_non_exhaustive()
    }
}
