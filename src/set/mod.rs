//! Insertion-ordered set with set algebra.
//!
//! This module provides [`OrderedSet`], a mutable collection of unique
//! elements that remembers the order in which elements were first added.
//!
//! # Overview
//!
//! `OrderedSet` keeps its elements in a single sequence:
//! - Up to 8 elements are stored inline (`SmallVec`), larger sets spill to the heap
//! - Re-adding an element that is already present is a no-op and does not move it
//! - Uniqueness is decided by an [`Equivalence`] strategy, [`ValueEquality`] by default
//!
//! Membership is a linear scan. No `Hash` or `Ord` bound is placed on the
//! element type, so any type with a notion of equality can be stored.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity |
//! |------------------------|------------|
//! | `contains`             | O(n)       |
//! | `add` / `insert`       | O(n)       |
//! | `delete` / `remove`    | O(n)       |
//! | `len` / `is_empty`     | O(1)       |
//! | `iter`                 | O(1) + O(n)|
//! | `union`                | O(n * m)   |
//! | `intersection`         | O(n * m)   |
//! | `difference`           | O(n * m)   |
//! | `symmetric_difference` | O(m * (n + m)) |
//! | `is_subset`            | O(n * m)   |
//! | `is_superset`          | O(n * m)   |
//!
//! # Examples
//!
//! ```rust
//! use insertion_ordered_set::set::OrderedSet;
//!
//! let letters = OrderedSet::from("string");
//! let others = OrderedSet::from("strmk");
//!
//! let union = letters.union(&others);
//! assert_eq!(union.as_slice(), &['s', 't', 'r', 'i', 'n', 'g', 'm', 'k']);
//!
//! let shared = letters.intersection(&others);
//! assert_eq!(shared.as_slice(), &['s', 't', 'r']);
//!
//! let symmetric = letters.symmetric_difference(&others);
//! assert_eq!(symmetric.as_slice(), &['i', 'n', 'g', 'm', 'k']);
//! ```

mod equivalence;
mod iterator;
#[cfg(feature = "ops")]
mod operators;
#[cfg(feature = "macros")]
mod set_macro;

pub use equivalence::{Equivalence, EquivalentBy, KeyEquality, PointerIdentity, ValueEquality};
pub use iterator::{IntoIter, Iter};

use smallvec::SmallVec;
use std::fmt;

/// Number of elements stored inline before the set spills to the heap.
pub(crate) const INLINE_CAPACITY: usize = 8;

type Elements<T> = SmallVec<[T; INLINE_CAPACITY]>;

// =============================================================================
// OrderedSet Definition
// =============================================================================

/// A mutable set that preserves first-insertion order.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `E` - The [`Equivalence`] strategy deciding when two elements are the
///   same. Defaults to [`ValueEquality`], which uses `T: PartialEq`.
///
/// # Examples
///
/// ```rust
/// use insertion_ordered_set::set::OrderedSet;
///
/// let mut set = OrderedSet::new();
/// set.add(3).add(1).add(3).add(2);
///
/// assert_eq!(set.len(), 3);
/// let elements: Vec<i32> = set.iter().copied().collect();
/// assert_eq!(elements, vec![3, 1, 2]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<T, E = ValueEquality> {
    elements: Elements<T>,
    equivalence: E,
}

// Send/Sync follow the element and strategy types
static_assertions::assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(OrderedSet<String, PointerIdentity>: Send, Sync);
static_assertions::assert_not_impl_any!(OrderedSet<std::rc::Rc<i32>, PointerIdentity>: Send, Sync);

impl<T> OrderedSet<T> {
    /// Creates a new empty set compared by value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_equivalence(ValueEquality)
    }

    /// Builds a set from a fallible source, stopping at the first error.
    ///
    /// Elements are added in iteration order, so duplicates collapse onto
    /// their first occurrence. The first `Err` produced by `source` is
    /// returned unchanged and the partially built set is discarded.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let parsed = OrderedSet::try_from_iter("3 1 3 2".split(' ').map(str::parse::<i32>));
    /// assert_eq!(parsed.unwrap().as_slice(), &[3, 1, 2]);
    ///
    /// let failed = OrderedSet::try_from_iter("3 x 2".split(' ').map(str::parse::<i32>));
    /// assert!(failed.is_err());
    /// ```
    pub fn try_from_iter<I, Error>(source: I) -> Result<Self, Error>
    where
        T: PartialEq,
        I: IntoIterator<Item = Result<T, Error>>,
    {
        Self::try_from_iter_with(source, ValueEquality)
    }
}

impl<T, E> OrderedSet<T, E> {
    /// Creates a new empty set that compares elements with `equivalence`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::{EquivalentBy, OrderedSet};
    ///
    /// let mut set = OrderedSet::with_equivalence(EquivalentBy::new(|left: &i32, right: &i32| {
    ///     left.abs() == right.abs()
    /// }));
    /// set.add(-2).add(2).add(3);
    /// assert_eq!(set.as_slice(), &[-2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_equivalence(equivalence: E) -> Self {
        Self {
            elements: SmallVec::new(),
            equivalence,
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the elements as a slice, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let set = OrderedSet::from("hello");
    /// assert_eq!(set.as_slice(), &['h', 'e', 'l', 'o']);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the element at `index` in insertion order.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the earliest inserted element still in the set.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the latest inserted element still in the set.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the equivalence strategy used by this set.
    #[inline]
    #[must_use]
    pub const fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Returns an iterator over the elements in insertion order.
    ///
    /// Every call starts a new traversal from the first element; the set
    /// cannot be modified while an iterator borrows it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [2, 1, 2, 3].into_iter().collect();
    ///
    /// let first_pass: Vec<&i32> = set.iter().collect();
    /// let second_pass: Vec<&i32> = set.iter().collect();
    /// assert_eq!(first_pass, vec![&2, &1, &3]);
    /// assert_eq!(first_pass, second_pass);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.elements)
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Retained elements keep their relative order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = (1..=6).collect();
    /// set.retain(|value| value % 2 == 0);
    /// assert_eq!(set.as_slice(), &[2, 4, 6]);
    /// ```
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.retain(|element| predicate(element));
    }
}

impl<T, E: Equivalence<T>> OrderedSet<T, E> {
    /// Builds a set from `source` using `equivalence`.
    ///
    /// Elements are added in iteration order; later duplicates are dropped.
    #[must_use]
    pub fn from_iter_with<I>(source: I, equivalence: E) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_equivalence(equivalence);
        set.extend(source);
        set
    }

    /// Builds a set from a fallible source using `equivalence`.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `source`.
    pub fn try_from_iter_with<I, Error>(source: I, equivalence: E) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Result<T, Error>>,
    {
        let mut set = Self::with_equivalence(equivalence);
        set.try_extend(source)?;
        Ok(set)
    }

    /// Adds every element of a fallible source, stopping at the first error.
    ///
    /// Elements added before the error stay in the set.
    ///
    /// # Errors
    ///
    /// Returns the first error yielded by `source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// let result = set.try_extend([Ok(1), Ok(2), Err("bad input"), Ok(3)]);
    ///
    /// assert_eq!(result, Err("bad input"));
    /// assert_eq!(set.as_slice(), &[1, 2]);
    /// ```
    pub fn try_extend<I, Error>(&mut self, source: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = Result<T, Error>>,
    {
        for element in source {
            self.add(element?);
        }
        Ok(())
    }

    /// Returns `true` if the set contains an element equivalent to `value`.
    ///
    /// With the default strategy the query may be any borrowed form of the
    /// element type, e.g. `&str` for a set of `String`s.
    ///
    /// # Complexity
    ///
    /// O(n) linear scan.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let set = OrderedSet::from([1, 2]);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&3));
    ///
    /// let names: OrderedSet<String> = ["ada".to_string()].into_iter().collect();
    /// assert!(names.contains("ada"));
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        E: Equivalence<T, Q>,
    {
        self.position(value).is_some()
    }

    /// Returns the insertion index of the element equivalent to `value`.
    #[must_use]
    pub fn position<Q: ?Sized>(&self, value: &Q) -> Option<usize>
    where
        E: Equivalence<T, Q>,
    {
        self.elements
            .iter()
            .position(|element| self.equivalence.equivalent(element, value))
    }

    /// Adds `value` at the end of the set unless an equivalent element is
    /// already present, and returns the set for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// set.add("b").add("a").add("b");
    /// assert_eq!(set.as_slice(), &["b", "a"]);
    /// ```
    pub fn add(&mut self, value: T) -> &mut Self {
        self.insert(value);
        self
    }

    /// Adds `value` unless an equivalent element is already present.
    ///
    /// Returns `true` if the value was stored. An existing element is never
    /// replaced or moved.
    pub fn insert(&mut self, value: T) -> bool {
        if self.contains(&value) {
            false
        } else {
            self.elements.push(value);
            true
        }
    }

    /// Removes every element equivalent to `value`.
    ///
    /// Returns `true` if no element equivalent to `value` remains afterwards,
    /// which always holds for a well-behaved equivalence. Use
    /// [`remove`](Self::remove) to learn whether something was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([1, 2, 3]);
    /// assert!(set.delete(&2));
    /// assert!(set.delete(&42));
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    pub fn delete<Q: ?Sized>(&mut self, value: &Q) -> bool
    where
        E: Equivalence<T, Q>,
    {
        let equivalence = &self.equivalence;
        self.elements
            .retain(|element| !equivalence.equivalent(element, value));
        !self.contains(value)
    }

    /// Removes the element equivalent to `value`, keeping the order of the
    /// remaining elements.
    ///
    /// Returns `true` if an element was removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let mut set = OrderedSet::from([1, 2, 3]);
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    ///
    /// let mut names: OrderedSet<String> = ["ada".to_string()].into_iter().collect();
    /// assert!(names.remove("ada"));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
    where
        E: Equivalence<T, Q>,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the element equivalent to `value`.
    ///
    /// The stored element is returned, which may differ from `value` under
    /// a non-value equivalence.
    pub fn take<Q: ?Sized>(&mut self, value: &Q) -> Option<T>
    where
        E: Equivalence<T, Q>,
    {
        self.position(value)
            .map(|index| self.elements.remove(index))
    }

    /// Returns `true` if every element of `self` is contained in `other`.
    ///
    /// Stops at the first element of `self` missing from `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let small = OrderedSet::from([1, 2]);
    /// let large = OrderedSet::from([3, 2, 1]);
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is contained in `self`.
    ///
    /// Stops at the first element of `other` missing from `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.iter().all(|element| self.contains(element))
    }

    /// Returns `true` if `self` and `other` have no element in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let vowels = OrderedSet::from("aeiou");
    /// assert!(vowels.is_disjoint(&OrderedSet::from("xyz")));
    /// assert!(!vowels.is_disjoint(&OrderedSet::from("cat")));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.iter().any(|element| other.contains(element))
    }
}

// =============================================================================
// Set Algebra
// =============================================================================

impl<T: Clone, E: Equivalence<T> + Clone> OrderedSet<T, E> {
    /// Returns the elements of `self` that are also in `other`, in the order
    /// of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let left = OrderedSet::from([4, 1, 3, 2]);
    /// let right = OrderedSet::from([2, 3, 5]);
    /// assert_eq!(left.intersection(&right).as_slice(), &[3, 2]);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            elements: self
                .iter()
                .filter(|element| other.contains(*element))
                .cloned()
                .collect(),
            equivalence: self.equivalence.clone(),
        }
    }

    /// Returns every element of `self` followed by the elements of `other`
    /// that `self` lacks.
    ///
    /// Elements present in both sets keep their position from `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let left = OrderedSet::from([1, 2]);
    /// let right = OrderedSet::from([3, 2, 4]);
    /// assert_eq!(left.union(&right).as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.extend(other.iter().cloned());
        result
    }

    /// Returns the elements of `self` that are not in `other`, in the order
    /// of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let left = OrderedSet::from([1, 2, 3, 4]);
    /// let right = OrderedSet::from([4, 2, 9]);
    /// assert_eq!(left.difference(&right).as_slice(), &[1, 3]);
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for element in other {
            result.delete(element);
        }
        result
    }

    /// Returns the elements that are in exactly one of `self` and `other`.
    ///
    /// The elements kept from `self` come first in their original order,
    /// followed by the elements only in `other`, in the order of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use insertion_ordered_set::set::OrderedSet;
    ///
    /// let left = OrderedSet::from([1, 2, 3]);
    /// let right = OrderedSet::from([5, 2, 4]);
    /// assert_eq!(left.symmetric_difference(&right).as_slice(), &[1, 3, 5, 4]);
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for element in other {
            if result.contains(element) {
                result.delete(element);
            } else {
                result.add(element.clone());
            }
        }
        result
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, E: Default> Default for OrderedSet<T, E> {
    #[inline]
    fn default() -> Self {
        Self::with_equivalence(E::default())
    }
}

impl<T, E: Equivalence<T> + Default> FromIterator<T> for OrderedSet<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, E::default())
    }
}

impl<T, E: Equivalence<T>> Extend<T> for OrderedSet<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T: Copy + 'a, E: Equivalence<T>> Extend<&'a T> for OrderedSet<T, E> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: PartialEq, const N: usize> From<[T; N]> for OrderedSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: PartialEq> From<Vec<T>> for OrderedSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

/// Decomposes text into its distinct characters, in order of first appearance.
impl From<&str> for OrderedSet<char> {
    fn from(text: &str) -> Self {
        text.chars().collect()
    }
}

impl<T, E> IntoIterator for OrderedSet<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.elements.into_iter())
    }
}

impl<'a, T, E> IntoIterator for &'a OrderedSet<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E: Equivalence<T>> PartialEq for OrderedSet<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T, E: Equivalence<T>> Eq for OrderedSet<T, E> {}

impl<T: fmt::Debug, E> fmt::Debug for OrderedSet<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, E> fmt::Display for OrderedSet<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::rc::Rc;

    #[rstest]
    fn test_new_creates_empty() {
        let set: OrderedSet<i32> = OrderedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.first(), None);
    }

    #[rstest]
    fn test_inline_capacity_constant() {
        assert_eq!(INLINE_CAPACITY, 8);
    }

    #[rstest]
    fn test_spilled_set_keeps_order_and_uniqueness() {
        let mut set = OrderedSet::new();
        for value in (0..20).chain(0..20) {
            set.add(value);
        }
        assert!(set.elements.spilled());
        assert_eq!(set.len(), 20);
        assert_eq!(set.as_slice(), (0..20).collect::<Vec<_>>().as_slice());
    }

    #[rstest]
    fn test_small_set_stays_inline() {
        let set: OrderedSet<i32> = (1..=8).collect();
        assert!(!set.elements.spilled());
    }

    #[rstest]
    #[case::absent(5, true, &[1, 2, 3, 5])]
    #[case::present(2, false, &[1, 2, 3])]
    fn test_insert_reports_new_elements(
        #[case] value: i32,
        #[case] expected: bool,
        #[case] elements: &[i32],
    ) {
        let mut set = OrderedSet::from([1, 2, 3]);
        assert_eq!(set.insert(value), expected);
        assert_eq!(set.as_slice(), elements);
    }

    #[rstest]
    fn test_delete_reports_absence_not_removal() {
        let mut set = OrderedSet::from([1, 2, 3]);
        assert!(set.delete(&2));
        assert!(set.delete(&2));
        assert_eq!(set.as_slice(), &[1, 3]);
    }

    #[rstest]
    fn test_delete_then_readd_appends_at_end() {
        let mut set = OrderedSet::from([1, 2, 3]);
        set.delete(&1);
        set.add(1);
        assert_eq!(set.as_slice(), &[2, 3, 1]);
    }

    #[rstest]
    fn test_retain_keeps_relative_order() {
        let mut set = OrderedSet::from([5, 4, 3, 2, 1]);
        set.retain(|value| value % 2 == 1);
        assert_eq!(set.as_slice(), &[5, 3, 1]);
    }

    #[rstest]
    fn test_take_returns_stored_element() {
        let mut set = OrderedSet::with_equivalence(KeyEquality::new(|pair: &(i32, char)| pair.0));
        set.add((1, 'a')).add((1, 'b')).add((2, 'c'));
        assert_eq!(set.len(), 2);
        assert_eq!(set.take(&(1, 'z')), Some((1, 'a')));
        assert_eq!(set.as_slice(), &[(2, 'c')]);
        assert_eq!(set.take(&(1, 'z')), None);
    }

    #[rstest]
    fn test_borrowed_lookups_on_string_set() {
        let mut set: OrderedSet<String> = ["apple", "banana", "cherry"]
            .into_iter()
            .map(String::from)
            .collect();

        assert!(set.contains("apple"));
        assert!(!set.contains("grape"));
        assert_eq!(set.position("cherry"), Some(2));
        assert!(set.remove("apple"));
        assert!(!set.remove("apple"));
        assert_eq!(set.take("banana"), Some(String::from("banana")));
        assert!(set.delete("cherry"));
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_borrowed_lookups_on_boxed_slices() {
        let set: OrderedSet<Box<[u8]>> = [vec![1, 2].into_boxed_slice(), vec![3].into_boxed_slice()]
            .into_iter()
            .collect();

        assert!(set.contains(&[1, 2][..]));
        assert!(!set.contains(&[2, 1][..]));
    }

    #[rstest]
    fn test_position_and_get() {
        let set = OrderedSet::from("abc");
        assert_eq!(set.position(&'b'), Some(1));
        assert_eq!(set.position(&'z'), None);
        assert_eq!(set.get(2), Some(&'c'));
        assert_eq!(set.get(3), None);
        assert_eq!(set.last(), Some(&'c'));
    }

    #[rstest]
    fn test_pointer_identity_set_algebra() {
        let first = Rc::new(1);
        let second = Rc::new(1);
        let left = OrderedSet::from_iter_with([Rc::clone(&first)], PointerIdentity);
        let right = OrderedSet::from_iter_with([Rc::clone(&second)], PointerIdentity);

        assert_eq!(left.union(&right).len(), 2);
        assert!(left.intersection(&right).is_empty());
        assert!(left.is_disjoint(&right));
    }

    #[rstest]
    fn test_result_inherits_equivalence_of_self() {
        let case_insensitive = KeyEquality::new(|text: &&str| text.to_lowercase());
        let left = OrderedSet::from_iter_with(["Apple"], case_insensitive);
        let right = OrderedSet::from_iter_with(["APPLE", "pear"], case_insensitive);

        let union = left.union(&right);
        assert_eq!(union.as_slice(), &["Apple", "pear"]);
        assert!(union.contains(&"PEAR"));
    }

    #[rstest]
    fn test_equality_ignores_order() {
        let left = OrderedSet::from([1, 2, 3]);
        let right = OrderedSet::from([3, 1, 2]);
        assert_eq!(left, right);
        assert_ne!(left.as_slice(), right.as_slice());
    }

    #[rstest]
    #[case::different_elements(&[1, 2], &[1, 3])]
    #[case::different_lengths(&[1, 2], &[1])]
    fn test_inequality(#[case] left: &[i32], #[case] right: &[i32]) {
        let left: OrderedSet<i32> = left.iter().copied().collect();
        let right: OrderedSet<i32> = right.iter().copied().collect();
        assert_ne!(left, right);
    }

    #[rstest]
    fn test_debug_and_display_follow_insertion_order() {
        let set = OrderedSet::from([3, 1, 2]);
        assert_eq!(format!("{set:?}"), "{3, 1, 2}");
        assert_eq!(format!("{set}"), "{3, 1, 2}");
        assert_eq!(format!("{}", OrderedSet::<i32>::new()), "{}");
    }

    #[rstest]
    fn test_extend_by_reference() {
        let mut set = OrderedSet::from([1]);
        set.extend(&[1, 2, 2, 3]);
        assert_eq!(set.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_default_uses_default_strategy() {
        let set: OrderedSet<i32, ValueEquality> = OrderedSet::default();
        assert!(set.is_empty());
        assert_eq!(set.equivalence(), &ValueEquality);
    }
}
