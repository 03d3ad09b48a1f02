//! # rebound
//!
//! Functional extensions for sequence containers, with shape-preserving
//! rebinding of element types.
//!
//! ## Overview
//!
//! Wrapping a container in [`Extended`] adds a functional surface (`map`,
//! `filter`, `flatten`, `reduce`, `sort`, `take`, `zip`, ...) on top of it.
//! Operations that change the element type produce a *sibling* container of
//! the same shape: mapping a `VecDeque<i32>` yields a `VecDeque<String>`,
//! zipping a `LinkedList<i32>` with anything yields a `LinkedList` of tuples.
//!
//! - **Sequence contract**: the minimal container surface ([`sequence`])
//! - **Capability Inspector**: compile-time traversal and size facts that
//!   select the sort and measuring algorithms ([`capability`])
//! - **Type Rebinding Resolver**: sibling container derivation ([`rebind`])
//! - **Variadic Tuple Zip**: lock-step zipping of up to eight containers
//!   ([`zip`])
//! - **Functional Extension Facade**: [`Extended`] ([`extended`])
//! - **Containers**: ready-made aliases and a singly linked list
//!   ([`containers`])
//!
//! ## Feature Flags
//!
//! - `inline`: `SmallVec` support and the `InlineVector` alias
//! - `bounded`: `ArrayVec` support and the `BoundedVector` alias
//! - `text`: the string family ([`Text`](text::Text))
//! - `typeclass`: `Semigroup` and `Monoid` for extended containers
//! - `serde`: serialization of extended containers and the singly linked list
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use rebound::prelude::*;
//! use std::collections::LinkedList;
//!
//! let numbers: Extended<LinkedList<i32>> = [3, 1, 2].into_iter().collect();
//! let labels = numbers.sorted().map(|number| format!("item {number}"));
//! assert_eq!(labels.front().map(String::as_str), Some("item 1"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use rebound::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::{CapabilityFlags, capabilities, measure};
    pub use crate::containers::{Deque, ForwardList, List, SinglyLinkedList, Vector};
    #[cfg(feature = "bounded")]
    pub use crate::containers::BoundedVector;
    #[cfg(feature = "inline")]
    pub use crate::containers::InlineVector;
    pub use crate::extended::{EmptySequenceError, Extended};
    pub use crate::rebind::{Family, Rebind, Rebound};
    pub use crate::sequence::Sequence;

    #[cfg(feature = "text")]
    pub use crate::text::Text;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod capability;
pub mod containers;
pub mod extended;
pub mod rebind;
pub mod sequence;
pub mod zip;

#[cfg(feature = "text")]
pub mod text;

#[cfg(feature = "typeclass")]
pub mod typeclass;

pub use extended::{EmptySequenceError, Extended};
