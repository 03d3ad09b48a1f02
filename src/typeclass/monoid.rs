//! Monoid: a semigroup with an identity element.
//!
//! The identity of an extended container is the empty container.
//!
//! # Laws
//!
//! For all `a`:
//!
//! ```text
//! Self::empty().combine(a) == a
//! a.combine(Self::empty()) == a
//! ```

use super::semigroup::Semigroup;
use crate::extended::Extended;
use crate::sequence::Sequence;

/// A [`Semigroup`] with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element.
    fn empty() -> Self;

    /// Combines every value in `iterator`, starting from [`empty`](Self::empty).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::containers::Vector;
    /// use rebound::typeclass::Monoid;
    ///
    /// let chunks = vec![Vector::new([1]), Vector::new([2, 3])];
    /// assert_eq!(Vector::combine_all(chunks).into_inner(), vec![1, 2, 3]);
    /// assert!(Vector::<i32>::combine_all(Vec::new()).is_empty());
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator.into_iter().fold(Self::empty(), Self::combine)
    }
}

impl<C: Sequence> Monoid for Extended<C> {
    #[inline]
    fn empty() -> Self {
        Self::default()
    }
}
