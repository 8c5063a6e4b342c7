//! Operator forms of the set algebra on borrowed sets.
//!
//! | Expression | Method                                                          |
//! |------------|-----------------------------------------------------------------|
//! | `&a \| &b` | [`union`](super::OrderedSet::union)                             |
//! | `&a & &b`  | [`intersection`](super::OrderedSet::intersection)               |
//! | `&a - &b`  | [`difference`](super::OrderedSet::difference)                   |
//! | `&a ^ &b`  | [`symmetric_difference`](super::OrderedSet::symmetric_difference) |

use std::ops::{BitAnd, BitOr, BitXor, Sub};

use super::{Equivalence, OrderedSet};

macro_rules! impl_set_operator {
    ($trait_name:ident, $method:ident, $set_method:ident) => {
        impl<T: Clone, E: Equivalence<T> + Clone> $trait_name<&OrderedSet<T, E>> for &OrderedSet<T, E> {
            type Output = OrderedSet<T, E>;

            #[inline]
            fn $method(self, other: &OrderedSet<T, E>) -> Self::Output {
                self.$set_method(other)
            }
        }
    };
}

impl_set_operator!(BitOr, bitor, union);
impl_set_operator!(BitAnd, bitand, intersection);
impl_set_operator!(Sub, sub, difference);
impl_set_operator!(BitXor, bitxor, symmetric_difference);

#[cfg(test)]
mod tests {
    use super::super::OrderedSet;
    use rstest::rstest;

    #[rstest]
    fn operators_match_named_methods() {
        let left = OrderedSet::from([1, 2, 3]);
        let right = OrderedSet::from([4, 3, 2]);

        assert_eq!((&left | &right).as_slice(), left.union(&right).as_slice());
        assert_eq!((&left & &right).as_slice(), &[2, 3]);
        assert_eq!((&left - &right).as_slice(), &[1]);
        assert_eq!((&left ^ &right).as_slice(), &[1, 4]);
    }

    #[rstest]
    fn operators_leave_operands_untouched() {
        let left = OrderedSet::from("abc");
        let right = OrderedSet::from("bcd");
        let _ = &left ^ &right;

        assert_eq!(left.as_slice(), &['a', 'b', 'c']);
        assert_eq!(right.as_slice(), &['b', 'c', 'd']);
    }
}
