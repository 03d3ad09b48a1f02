//! Singly linked list without a stored length.
//!
//! [`SinglyLinkedList`] only knows its first node. Its length is found by
//! walking it, so it reports the [`Counted`] size strategy, and it can only be
//! traversed forwards, so it reports [`Sequential`] traversal and sorts by
//! relinking nodes rather than swapping elements.
//!
//! # Examples
//!
//! ```rust
//! use rebound::containers::SinglyLinkedList;
//!
//! let mut list: SinglyLinkedList<i32> = [3, 1, 2].into_iter().collect();
//! list.push_front(4);
//! list.sort_by(Ord::cmp);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
//! assert_eq!(list.pop_front(), Some(1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::capability::{Counted, NativeSort, Sequential};
use crate::rebind::{ByStructure, Family, NoAuxiliary, Parametrized};
use crate::sequence::Sequence;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

/// A singly linked list.
///
/// # Time Complexity
///
/// | Operation    | Complexity   |
/// |--------------|--------------|
/// | `push_front` | O(1)         |
/// | `pop_front`  | O(1)         |
/// | `front`      | O(1)         |
/// | `len`        | O(n)         |
/// | `extend`     | O(n + m)     |
/// | `reverse`    | O(n)         |
/// | `sort_by`    | O(n log n)   |
pub struct SinglyLinkedList<T> {
    head: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None }
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts the elements by walking the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Inserts `element` before the first element.
    pub fn push_front(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { element, next }));
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { element, next } = *node;
            self.head = next;
            element
        })
    }

    /// Returns a reference to the first element.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Returns a mutable reference to the first element.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.element)
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }

    /// Returns an iterator over mutable references to the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            next: self.head.as_deref_mut(),
        }
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        let mut remaining = self.head.take();
        while let Some(mut node) = remaining {
            remaining = node.next.take();
            node.next = self.head.take();
            self.head = Some(node);
        }
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Kept nodes are relinked in their original order; no element is moved.
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        let mut remaining = self.head.take();
        let mut slot = &mut self.head;
        while let Some(mut node) = remaining {
            remaining = node.next.take();
            if predicate(&node.element) {
                slot = &mut slot.insert(node).next;
            }
        }
    }

    /// Shortens the list to its first `length` elements.
    pub fn truncate(&mut self, length: usize) {
        let rest = split_link(&mut self.head, length);
        drop(Self { head: rest });
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        drop(Self {
            head: self.head.take(),
        });
    }

    /// Stably sorts the list with `compare` by relinking its nodes.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let length = self.len();
        let head = self.head.take();
        self.head = sort_link(head, length, &mut compare);
    }

    /// Stably sorts the list in ascending order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    fn tail_slot(&mut self) -> &mut Link<T> {
        let mut slot = &mut self.head;
        while let Some(node) = slot {
            slot = &mut node.next;
        }
        slot
    }
}

/// Detaches and returns everything after the first `at` nodes of `head`.
fn split_link<T>(head: &mut Link<T>, at: usize) -> Link<T> {
    let mut slot = head;
    for _ in 0..at {
        match slot {
            Some(node) => slot = &mut node.next,
            None => return None,
        }
    }
    slot.take()
}

fn sort_link<T, F>(mut head: Link<T>, length: usize, compare: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if length < 2 {
        return head;
    }

    let middle = length / 2;
    let right = split_link(&mut head, middle);
    let left = sort_link(head, middle, compare);
    let right = sort_link(right, length - middle, compare);
    merge_links(left, right, compare)
}

fn merge_links<T, F>(mut left: Link<T>, mut right: Link<T>, compare: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = None;
    let mut slot = &mut merged;

    loop {
        // Ties take from the left run.
        let take_right = match (left.as_deref(), right.as_deref()) {
            (Some(left_node), Some(right_node)) => {
                compare(&right_node.element, &left_node.element) == Ordering::Less
            }
            _ => break,
        };
        let source = if take_right { &mut right } else { &mut left };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            slot = &mut slot.insert(node).next;
        }
    }

    *slot = if left.is_some() { left } else { right };
    merged
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut remaining = self.head.take();
        while let Some(mut node) = remaining {
            remaining = node.next.take();
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`SinglyLinkedList`].
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.element
        })
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

/// An iterator over mutable references to the elements of a
/// [`SinglyLinkedList`].
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.element
        })
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`SinglyLinkedList`].
pub struct IntoIter<T> {
    list: SinglyLinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for SinglyLinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut slot = self.tail_slot();
        for element in iter {
            slot = &mut slot.insert(Box::new(Node { element, next: None })).next;
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SinglyLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

/// Hashes every element in order, followed by the number of elements.
impl<T: Hash> Hash for SinglyLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut length = 0_usize;
        for element in self {
            element.hash(state);
            length += 1;
        }
        length.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

// =============================================================================
// Sequence Implementation
// =============================================================================

impl<T> Sequence for SinglyLinkedList<T> {
    type Element = T;
    type Traversal = Sequential;
    type Size = Counted;
    type Cursor<'a>
        = Iter<'a, T>
    where
        Self: 'a;
    type IntoCursor = IntoIter<T>;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.iter()
    }

    #[inline]
    fn into_cursor(self) -> Self::IntoCursor {
        self.into_iter()
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
    fn retain_elements<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.retain(predicate);
    }

    #[inline]
    fn truncate_elements(&mut self, length: usize) {
        self.truncate(length);
    }
}

impl<T> NativeSort for SinglyLinkedList<T> {
    #[inline]
    fn native_sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_by(compare);
    }
}

impl<T> Family for SinglyLinkedList<T> {
    type Resolution = ByStructure;
}

impl<T> Parametrized for SinglyLinkedList<T> {
    type Auxiliary = NoAuxiliary<T>;
    type Apply<B> = SinglyLinkedList<B>;
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SinglyLinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SinglyLinkedListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SinglyLinkedListVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = SinglyLinkedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut list = SinglyLinkedList::new();
        let mut slot = &mut list.head;
        while let Some(element) = seq.next_element()? {
            slot = &mut slot.insert(Box::new(Node { element, next: None })).next;
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SinglyLinkedList<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SinglyLinkedListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
