//! Size strategies: reading a stored length or counting elements.

use crate::sequence::Sequence;

/// A size strategy marker.
pub trait SizeStrategy {
    /// `true` when the length is available without traversal.
    const CONSTANT: bool;
}

/// The container stores its length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constant;

/// The length is found by walking the container end to end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Counted;

impl SizeStrategy for Constant {
    const CONSTANT: bool = true;
}

impl SizeStrategy for Counted {
    const CONSTANT: bool = false;
}

/// Containers whose length is stored and read in constant time.
pub trait ConstantLength {
    /// Returns the number of elements.
    fn constant_length(&self) -> usize;
}

/// Computes the number of elements of a container of type `S`.
pub trait Measure<S: Sequence> {
    /// Returns the number of elements in `sequence`.
    fn measure(sequence: &S) -> usize;
}

impl<S: Sequence + ConstantLength> Measure<S> for Constant {
    #[inline]
    fn measure(sequence: &S) -> usize {
        sequence.constant_length()
    }
}

impl<S: Sequence> Measure<S> for Counted {
    #[inline]
    fn measure(sequence: &S) -> usize {
        sequence.cursor().count()
    }
}

/// Returns the number of elements in `sequence`, using its size strategy.
///
/// # Examples
///
/// ```rust
/// use rebound::capability::measure;
///
/// assert_eq!(measure(&vec![1, 2, 3]), 3);
/// assert_eq!(measure(&String::from("naïve")), 5);
/// ```
#[inline]
pub fn measure<S: Sequence>(sequence: &S) -> usize {
    <S::Size as Measure<S>>::measure(sequence)
}
