//! The `ordered_set!` macro for set literals.

/// Creates an [`OrderedSet`](crate::set::OrderedSet) containing the given
/// elements, compared by value.
///
/// Elements are added left to right, so a repeated element keeps the position
/// of its first occurrence.
///
/// # Syntax
///
/// - `ordered_set![]` - An empty set
/// - `ordered_set![a, b, c]` - A set of the distinct elements in order
///
/// # Examples
///
/// ```
/// use insertion_ordered_set::ordered_set;
///
/// let set = ordered_set!['b', 'a', 'b', 'c'];
/// assert_eq!(set.as_slice(), &['b', 'a', 'c']);
///
/// let empty: insertion_ordered_set::set::OrderedSet<i32> = ordered_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! ordered_set {
    () => {
        $crate::set::OrderedSet::new()
    };

    ($($element:expr),+ $(,)?) => {{
        let mut set = $crate::set::OrderedSet::new();
        $(
            set.add($element);
        )+
        set
    }};
}
