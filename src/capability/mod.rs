//! Capability inspection for sequence containers.
//!
//! Every [`Sequence`](crate::sequence::Sequence) reports two independent,
//! compile-time facts about itself:
//!
//! - its **traversal category** ([`RandomAccess`] or [`Sequential`]), which
//!   selects the sorting algorithm, and
//! - its **size strategy** ([`Constant`] or [`Counted`]), which decides whether
//!   the number of elements is read directly or counted by walking the
//!   container from end to end.
//!
//! Both facts are expressed as marker types, so the algorithm chosen for a
//! container is fixed when the program is compiled and carries no runtime tag.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::LinkedList;
//! use rebound::capability::{capabilities, CapabilityFlags};
//!
//! assert_eq!(
//!     capabilities::<Vec<i32>>(),
//!     CapabilityFlags { random_access: true, constant_size: true }
//! );
//! assert_eq!(
//!     capabilities::<LinkedList<i32>>(),
//!     CapabilityFlags { random_access: false, constant_size: true }
//! );
//! assert_eq!(
//!     capabilities::<String>(),
//!     CapabilityFlags { random_access: false, constant_size: false }
//! );
//! ```

mod size;
mod traversal;

pub use size::{Constant, ConstantLength, Counted, Measure, SizeStrategy, measure};
pub use traversal::{Contiguous, NativeSort, RandomAccess, Sequential, SortStrategy, Traversal};

use crate::sequence::Sequence;

/// The capabilities of a wrapper, taken from the container it wraps.
///
/// Used as both the traversal category and the size strategy of
/// [`Extended`](crate::extended::Extended): sorting and measuring are
/// forwarded to the wrapped container's own strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Delegated<T>(std::marker::PhantomData<T>);

impl<T: Traversal> Traversal for Delegated<T> {
    const RANDOM_ACCESS: bool = T::RANDOM_ACCESS;
}

impl<T: SizeStrategy> SizeStrategy for Delegated<T> {
    const CONSTANT: bool = T::CONSTANT;
}

/// The capability facts of a container type.
///
/// Values of this type are computed from the container's associated marker
/// types and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilityFlags {
    /// Whether the container supports constant-time positional access.
    pub random_access: bool,
    /// Whether the container knows its length without counting.
    pub constant_size: bool,
}

/// Exposes [`CapabilityFlags`] as an associated constant.
///
/// Implemented for every [`Sequence`].
pub trait Capabilities {
    /// The capability flags of this container type.
    const FLAGS: CapabilityFlags;
}

impl<S: Sequence> Capabilities for S {
    const FLAGS: CapabilityFlags = CapabilityFlags {
        random_access: <S::Traversal as Traversal>::RANDOM_ACCESS,
        constant_size: <S::Size as SizeStrategy>::CONSTANT,
    };
}

/// Returns the capability flags of `S`.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use rebound::capability::capabilities;
///
/// assert!(capabilities::<VecDeque<u8>>().random_access);
/// ```
#[inline]
#[must_use]
pub const fn capabilities<S: Sequence>() -> CapabilityFlags {
    <S as Capabilities>::FLAGS
}
