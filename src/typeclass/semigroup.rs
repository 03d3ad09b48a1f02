//! Semigroup: an associative way of combining two values.
//!
//! Extended containers form a semigroup under concatenation.
//!
//! # Laws
//!
//! For all `a`, `b`, `c`:
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use rebound::containers::Vector;
//! use rebound::typeclass::Semigroup;
//!
//! let left = Vector::new([1, 2]);
//! let right = Vector::new([3]);
//! assert_eq!(left.combine(right).into_inner(), vec![1, 2, 3]);
//! ```

use crate::extended::Extended;
use crate::sequence::Sequence;

/// A type with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two borrowed values into a new one.
    ///
    /// The default implementation clones both values and calls `combine`.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }
}

/// Concatenation.
impl<C: Sequence> Semigroup for Extended<C> {
    #[inline]
    fn combine(self, other: Self) -> Self {
        self.concat(other)
    }
}
