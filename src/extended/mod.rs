//! The functional extension facade.
//!
//! [`Extended<C>`] wraps any [`Sequence`] and adds a functional surface on top
//! of it, while still dereferencing to the wrapped container so that all of
//! its own methods remain available.
//!
//! # Shape Preservation
//!
//! Operations that change the element type ([`map`](Extended::map),
//! [`flatten`](Extended::flatten), [`unzip`](Extended::unzip),
//! [`zip`](Extended::zip), [`zip_n`](Extended::zip_n)) return
//! `Extended<Rebound<C, _>>`: a sibling container of the same shape, derived by
//! the [`rebind`](crate::rebind) resolver. All other operations keep `C`.
//!
//! # Ownership
//!
//! Operations come in two forms. The consuming form (`filter`, `take`, `map`,
//! ...) takes `self`, works on the receiver's own storage and returns it. The
//! `_ref` form (`filter_ref`, `take_ref`, `map_ref`, ...) borrows `self`,
//! leaves it untouched and builds a copy. Both forms always produce equal
//! results.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::LinkedList;
//! use rebound::Extended;
//!
//! let words: Extended<LinkedList<&str>> = ["pear", "fig", "apple"].into_iter().collect();
//!
//! let lengths = words.map_ref(|word| word.len());
//! assert_eq!(lengths.to::<Vec<_>>(), vec![4, 3, 5]);
//!
//! let sorted = words.sorted();
//! assert_eq!(sorted.to::<Vec<_>>(), vec!["apple", "fig", "pear"]);
//! ```

mod error;
mod operations;
mod rebinding;

pub use error::EmptySequenceError;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::capability::{Delegated, Measure, SortStrategy};
use crate::sequence::Sequence;

/// A sequence container with a functional extension surface.
///
/// `Extended<C>` dereferences to `C`, compares, orders and hashes like `C`, and
/// formats with `Debug` exactly as `C` does.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Extended<C> {
    inner: C,
}

impl<C> Extended<C> {
    /// Wraps a container, converting `source` into `C` first.
    ///
    /// Any value the wrapped container can be built from is accepted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::Extended;
    ///
    /// let numbers = Extended::<Vec<u8>>::new([1, 2, 3]);
    /// assert_eq!(numbers.len(), 3);
    ///
    /// let text = Extended::<String>::new("hello");
    /// assert_eq!(text.as_str(), "hello");
    /// ```
    #[inline]
    pub fn new(source: impl Into<C>) -> Self {
        Self {
            inner: source.into(),
        }
    }

    /// Unwraps the container.
    #[inline]
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Returns a reference to the wrapped container.
    #[inline]
    pub const fn as_inner(&self) -> &C {
        &self.inner
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<C> From<C> for Extended<C> {
    #[inline]
    fn from(inner: C) -> Self {
        Self { inner }
    }
}

impl<C> Deref for Extended<C> {
    type Target = C;

    #[inline]
    fn deref(&self) -> &C {
        &self.inner
    }
}

impl<C> DerefMut for Extended<C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut C {
        &mut self.inner
    }
}

impl<C: fmt::Debug> fmt::Debug for Extended<C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, formatter)
    }
}

impl<C: Sequence> FromIterator<C::Element> for Extended<C> {
    fn from_iter<I: IntoIterator<Item = C::Element>>(iter: I) -> Self {
        Self {
            inner: C::from_elements(iter),
        }
    }
}

impl<C: Sequence> Extend<C::Element> for Extended<C> {
    fn extend<I: IntoIterator<Item = C::Element>>(&mut self, iter: I) {
        self.inner.extend_elements(iter);
    }
}

impl<C: Sequence> IntoIterator for Extended<C> {
    type Item = C::Element;
    type IntoIter = C::IntoCursor;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_cursor()
    }
}

impl<'a, C: Sequence> IntoIterator for &'a Extended<C> {
    type Item = <C::Cursor<'a> as Iterator>::Item;
    type IntoIter = C::Cursor<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.cursor()
    }
}

// =============================================================================
// Sequence Implementation
// =============================================================================

impl<C: Sequence> Sequence for Extended<C> {
    type Element = C::Element;
    type Traversal = Delegated<C::Traversal>;
    type Size = Delegated<C::Size>;
    type Cursor<'a>
        = C::Cursor<'a>
    where
        Self: 'a;
    type IntoCursor = C::IntoCursor;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.inner.cursor()
    }

    #[inline]
    fn into_cursor(self) -> Self::IntoCursor {
        self.inner.into_cursor()
    }

    #[inline]
    fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = Self::Element>,
    {
        Self {
            inner: C::from_elements(elements),
        }
    }

    #[inline]
    fn extend_elements<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = Self::Element>,
    {
        self.inner.extend_elements(elements);
    }

    #[inline]
    fn retain_elements<P>(&mut self, predicate: P)
    where
        P: FnMut(&Self::Element) -> bool,
    {
        self.inner.retain_elements(predicate);
    }

    #[inline]
    fn truncate_elements(&mut self, length: usize) {
        self.inner.truncate_elements(length);
    }

    #[inline]
    fn transform_elements<F>(&mut self, function: F)
    where
        F: FnMut(Self::Element) -> Self::Element,
    {
        self.inner.transform_elements(function);
    }
}

impl<C, T> SortStrategy<Extended<C>> for Delegated<T>
where
    C: Sequence,
    T: SortStrategy<C>,
{
    #[inline]
    fn sort_by<F>(sequence: &mut Extended<C>, compare: F)
    where
        F: FnMut(&C::Element, &C::Element) -> Ordering,
    {
        T::sort_by(&mut sequence.inner, compare);
    }
}

impl<C, T> Measure<Extended<C>> for Delegated<T>
where
    C: Sequence,
    T: Measure<C>,
{
    #[inline]
    fn measure(sequence: &Extended<C>) -> usize {
        T::measure(&sequence.inner)
    }
}
