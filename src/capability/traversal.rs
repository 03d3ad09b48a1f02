//! Traversal categories and the sort dispatch built on them.

use std::cmp::Ordering;

use crate::sequence::Sequence;

/// A traversal category marker.
pub trait Traversal {
    /// `true` when positional access takes constant time.
    const RANDOM_ACCESS: bool;
}

/// Constant-time positional access over contiguous storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RandomAccess;

/// Step-by-step forward traversal only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sequential;

impl Traversal for RandomAccess {
    const RANDOM_ACCESS: bool = true;
}

impl Traversal for Sequential {
    const RANDOM_ACCESS: bool = false;
}

/// Containers that can expose their elements as one mutable slice.
///
/// Required by [`RandomAccess`] containers so they can be sorted by
/// positional swapping.
pub trait Contiguous: Sequence {
    /// Returns every element as a single mutable slice, in order.
    fn as_mut_slice(&mut self) -> &mut [Self::Element];
}

/// Containers that provide their own reordering operation.
///
/// Required by [`Sequential`] containers. Link-based containers cannot be
/// sorted by swapping positions and relink their nodes instead.
pub trait NativeSort: Sequence {
    /// Stably sorts the container with `compare`.
    fn native_sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Self::Element, &Self::Element) -> Ordering;
}

/// Selects how a container of type `S` is sorted.
///
/// Implemented by the traversal markers: [`RandomAccess`] sorts the slice view
/// of a [`Contiguous`] container and [`Sequential`] defers to
/// [`NativeSort`].
pub trait SortStrategy<S: Sequence> {
    /// Stably sorts `sequence` with `compare`.
    fn sort_by<F>(sequence: &mut S, compare: F)
    where
        F: FnMut(&S::Element, &S::Element) -> Ordering;
}

impl<S: Contiguous> SortStrategy<S> for RandomAccess {
    #[inline]
    fn sort_by<F>(sequence: &mut S, compare: F)
    where
        F: FnMut(&S::Element, &S::Element) -> Ordering,
    {
        sequence.as_mut_slice().sort_by(compare);
    }
}

impl<S: NativeSort> SortStrategy<S> for Sequential {
    #[inline]
    fn sort_by<F>(sequence: &mut S, compare: F)
    where
        F: FnMut(&S::Element, &S::Element) -> Ordering,
    {
        sequence.native_sort_by(compare);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::{LinkedList, VecDeque};

    fn sort_with_strategy<S: Sequence>(sequence: &mut S)
    where
        S::Element: Ord,
    {
        <S::Traversal as SortStrategy<S>>::sort_by(sequence, Ord::cmp);
    }

    #[rstest]
    fn test_random_access_sorts_vec() {
        let mut numbers = vec![3, 2, 1, 15, 2, 15];
        sort_with_strategy(&mut numbers);
        assert_eq!(numbers, vec![1, 2, 2, 3, 15, 15]);
    }

    #[rstest]
    fn test_random_access_sorts_wrapped_vec_deque() {
        let mut numbers: VecDeque<i32> = VecDeque::new();
        numbers.push_back(2);
        numbers.push_back(3);
        numbers.push_front(9);
        numbers.push_front(1);
        sort_with_strategy(&mut numbers);
        assert_eq!(numbers, VecDeque::from(vec![1, 2, 3, 9]));
    }

    #[rstest]
    fn test_sequential_sorts_linked_list() {
        let mut letters: LinkedList<char> = "zebra".chars().collect();
        sort_with_strategy(&mut letters);
        assert_eq!(letters.into_iter().collect::<String>(), "aberz");
    }

    #[rstest]
    fn test_sequential_sort_is_stable() {
        let mut pairs: LinkedList<(i32, char)> =
            [(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')].into_iter().collect();
        <Sequential as SortStrategy<LinkedList<(i32, char)>>>::sort_by(&mut pairs, |left, right| {
            left.0.cmp(&right.0)
        });
        assert_eq!(
            pairs.into_iter().collect::<Vec<_>>(),
            vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[rstest]
    fn test_sequential_sorts_string_characters() {
        let mut text = String::from("dcba");
        sort_with_strategy(&mut text);
        assert_eq!(text, "abcd");
    }
}
