//! Ready-made extended containers.
//!
//! Each alias wraps one supported container in [`Extended`], so the full
//! functional surface is available without spelling out the wrapper.
//!
//! # Examples
//!
//! ```rust
//! use rebound::containers::{ForwardList, Vector};
//!
//! let numbers: Vector<i32> = (1..=4).collect();
//! let doubled = numbers.map(|number| number * 2);
//! assert_eq!(doubled.into_inner(), vec![2, 4, 6, 8]);
//!
//! let list: ForwardList<i32> = [3, 1, 2].into_iter().collect();
//! assert_eq!(list.sorted().to::<Vec<_>>(), vec![1, 2, 3]);
//! ```

mod singly_linked_list;

pub use singly_linked_list::{IntoIter, Iter, IterMut, SinglyLinkedList};

use std::collections::{LinkedList, VecDeque};

use crate::extended::Extended;

/// A growable array.
pub type Vector<T> = Extended<Vec<T>>;

/// A double-ended queue.
pub type Deque<T> = Extended<VecDeque<T>>;

/// A doubly linked list.
pub type List<T> = Extended<LinkedList<T>>;

/// A singly linked list.
pub type ForwardList<T> = Extended<SinglyLinkedList<T>>;

/// A vector storing up to `N` elements inline before spilling to the heap.
#[cfg(feature = "inline")]
pub type InlineVector<T, const N: usize> = Extended<smallvec::SmallVec<[T; N]>>;

/// A vector with a fixed capacity of `CAP` elements.
///
/// Exceeding the capacity panics.
#[cfg(feature = "bounded")]
pub type BoundedVector<T, const CAP: usize> = Extended<arrayvec::ArrayVec<T, CAP>>;
