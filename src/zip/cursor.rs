//! Lock-step cursors.

use std::borrow::Borrow;
use std::iter::FusedIterator;

use crate::sequence::Sequence;

/// A forward cursor over one zip input.
pub struct Cursor<'a, S>
where
    S: Sequence + 'a,
{
    inner: S::Cursor<'a>,
}

impl<'a, S> Cursor<'a, S>
where
    S: Sequence + 'a,
{
    /// Positions a cursor at the first element of `sequence`.
    #[inline]
    #[must_use]
    pub fn new(sequence: &'a S) -> Self {
        Self {
            inner: sequence.cursor(),
        }
    }

    /// Moves past the current element, returning a copy of it.
    #[inline]
    pub fn step(&mut self) -> Option<S::Element>
    where
        S::Element: Clone,
    {
        self.inner
            .next()
            .map(|item| Borrow::<S::Element>::borrow(&item).clone())
    }
}

/// A tuple of cursors that can be advanced together.
pub trait Advance {
    /// One value from each cursor, as a flat tuple.
    type Values;

    /// Advances every cursor once.
    ///
    /// Returns `None` if any cursor was already at its end.
    fn advance(&mut self) -> Option<Self::Values>;
}

/// A set of cursors advanced in lock step a fixed number of times.
///
/// The step count is the length of the shortest input, so no cursor is ever
/// advanced past its end. Once exhausted, the set yields `None` forever.
///
/// A cursor set is not `Clone`: each cursor is consumed exactly once.
pub struct CursorSet<T> {
    cursors: T,
    remaining: usize,
}

impl<T: Advance> CursorSet<T> {
    /// Creates a set that advances `cursors` `steps` times.
    ///
    /// `steps` must not exceed the length of any input.
    #[inline]
    #[must_use]
    pub const fn new(cursors: T, steps: usize) -> Self {
        Self {
            cursors,
            remaining: steps,
        }
    }
}

impl<T: Advance> Iterator for CursorSet<T> {
    type Item = T::Values;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let values = self.cursors.advance();
        if values.is_none() {
            self.remaining = 0;
        }
        values
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Advance> FusedIterator for CursorSet<T> {}

impl<T: Advance> ExactSizeIterator for CursorSet<T> {}

static_assertions::assert_not_impl_any!(CursorSet<(Cursor<'static, Vec<u8>>, Cursor<'static, String>)>: Clone);
