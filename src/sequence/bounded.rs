//! `ArrayVec` with a fixed capacity.
//!
//! Appending beyond the capacity panics inside `ArrayVec`; that failure is
//! passed through unchanged.

use arrayvec::ArrayVec;

use super::Sequence;
use crate::capability::{Constant, ConstantLength, Contiguous, RandomAccess};

impl<T, const CAP: usize> Sequence for ArrayVec<T, CAP> {
    type Element = T;
    type Traversal = RandomAccess;
    type Size = Constant;
    type Cursor<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type IntoCursor = arrayvec::IntoIter<T, CAP>;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.as_slice().iter()
    }

    #[inline]
    fn into_cursor(self) -> Self::IntoCursor {
        IntoIterator::into_iter(self)
    }

    #[inline]
    fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        elements.into_iter().collect()
    }

    #[inline]
    fn extend_elements<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        Extend::extend(self, elements);
    }

    #[inline]
    fn retain_elements<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.retain(|element| predicate(element));
    }

    #[inline]
    fn truncate_elements(&mut self, length: usize) {
        self.truncate(length);
    }
}

impl<T, const CAP: usize> ConstantLength for ArrayVec<T, CAP> {
    #[inline]
    fn constant_length(&self) -> usize {
        self.len()
    }
}

impl<T, const CAP: usize> Contiguous for ArrayVec<T, CAP> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Self::as_mut_slice(self)
    }
}
