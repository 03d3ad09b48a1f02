//! The sequence container contract.
//!
//! [`Sequence`] is the minimal surface the functional layer needs from a
//! container: a traversal category, a size strategy, a borrowing cursor, a
//! draining cursor and a handful of storage operations. Everything else
//! (growth, allocation, node management) stays inside the wrapped container.
//!
//! Implementations are provided for `Vec`, `VecDeque`, `LinkedList` and
//! `String` (whose elements are `char`s), for `SmallVec` and `ArrayVec` behind
//! the `inline` and `bounded` features, and for the crate's own
//! [`SinglyLinkedList`](crate::containers::SinglyLinkedList).
//!
//! # Examples
//!
//! ```rust
//! use std::borrow::Borrow;
//! use rebound::sequence::Sequence;
//!
//! fn first_two<S: Sequence>(sequence: &S) -> Vec<S::Element>
//! where
//!     S::Element: Clone,
//! {
//!     sequence
//!         .cursor()
//!         .take(2)
//!         .map(|item| {
//!             let element: &S::Element = item.borrow();
//!             element.clone()
//!         })
//!         .collect()
//! }
//!
//! assert_eq!(first_two(&vec![1, 2, 3]), vec![1, 2]);
//! assert_eq!(first_two(&String::from("xyz")), vec!['x', 'y']);
//! ```

#[cfg(feature = "bounded")]
mod bounded;
#[cfg(feature = "inline")]
mod inline;
mod standard;

use std::borrow::Borrow;

use crate::capability::{Measure, SizeStrategy, SortStrategy, Traversal};

/// An ordered container supporting forward traversal and insertion at the end.
///
/// The associated marker types are the container's capability facts; see
/// [`capability`](crate::capability).
///
/// # Cursors
///
/// [`cursor`](Sequence::cursor) yields items that borrow as `&Self::Element`.
/// Most containers yield `&Self::Element` directly; `String` yields `char`
/// values because its characters are not stored as separate values.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a sequence container",
    label = "`{Self}` declares no traversal category or element cursor",
    note = "implement `rebound::sequence::Sequence` to describe how `{Self}` is traversed, measured and sorted"
)]
pub trait Sequence: Default {
    /// The element type.
    type Element;

    /// The traversal category, which also selects the sort algorithm.
    type Traversal: Traversal + SortStrategy<Self>;

    /// The size strategy.
    type Size: SizeStrategy + Measure<Self>;

    /// Borrowing cursor over the elements in order.
    type Cursor<'a>: Iterator<Item: Borrow<Self::Element>>
    where
        Self: 'a;

    /// Draining cursor over the elements in order.
    type IntoCursor: Iterator<Item = Self::Element>;

    /// Returns a cursor positioned at the first element.
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Consumes the container, yielding its elements in order.
    fn into_cursor(self) -> Self::IntoCursor;

    /// Builds a container holding the given elements in order.
    fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self::Element>;

    /// Appends the given elements at the end.
    fn extend_elements<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = Self::Element>;

    /// Keeps only the elements for which `predicate` returns `true`,
    /// preserving their order.
    fn retain_elements<P>(&mut self, predicate: P)
    where
        P: FnMut(&Self::Element) -> bool;

    /// Shortens the container to at most `length` elements.
    ///
    /// Has no effect when the container already holds `length` elements or
    /// fewer.
    fn truncate_elements(&mut self, length: usize);

    /// Replaces every element with the result of `function` applied to it.
    ///
    /// The default implementation drains the container and rebuilds it.
    fn transform_elements<F>(&mut self, function: F)
    where
        F: FnMut(Self::Element) -> Self::Element,
    {
        let elements = std::mem::take(self);
        *self = Self::from_elements(elements.into_cursor().map(function));
    }
}
