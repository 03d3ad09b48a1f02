//! Standard library containers.

use std::cmp::Ordering;
use std::collections::{LinkedList, VecDeque, linked_list, vec_deque};

use super::Sequence;
use crate::capability::{
    Constant, ConstantLength, Contiguous, Counted, NativeSort, RandomAccess, Sequential,
};

// =============================================================================
// Vec
// =============================================================================

impl<T> Sequence for Vec<T> {
    type Element = T;
    type Traversal = RandomAccess;
    type Size = Constant;
    type Cursor<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type IntoCursor = std::vec::IntoIter<T>;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.as_slice().iter()
    }

    #[inline]
    fn into_cursor(self) -> Self::IntoCursor {
        IntoIterator::into_iter(self)
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
        Self::retain(self, predicate);
    }

    #[inline]
    fn truncate_elements(&mut self, length: usize) {
        Self::truncate(self, length);
    }
}

impl<T> ConstantLength for Vec<T> {
    #[inline]
    fn constant_length(&self) -> usize {
        self.len()
    }
}

impl<T> Contiguous for Vec<T> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        Self::as_mut_slice(self)
    }
}

// =============================================================================
// VecDeque
// =============================================================================

impl<T> Sequence for VecDeque<T> {
    type Element = T;
    type Traversal = RandomAccess;
    type Size = Constant;
    type Cursor<'a>
        = vec_deque::Iter<'a, T>
    where
        Self: 'a;
    type IntoCursor = vec_deque::IntoIter<T>;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        Self::iter(self)
    }

    #[inline]
    fn into_cursor(self) -> Self::IntoCursor {
        IntoIterator::into_iter(self)
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
        Self::retain(self, predicate);
    }

    #[inline]
    fn truncate_elements(&mut self, length: usize) {
        Self::truncate(self, length);
    }
}

impl<T> ConstantLength for VecDeque<T> {
    #[inline]
    fn constant_length(&self) -> usize {
        self.len()
    }
}

impl<T> Contiguous for VecDeque<T> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.make_contiguous()
    }
}

// =============================================================================
// LinkedList
// =============================================================================

impl<T> Sequence for LinkedList<T> {
    type Element = T;
    type Traversal = Sequential;
    type Size = Constant;
    type Cursor<'a>
        = linked_list::Iter<'a, T>
    where
        Self: 'a;
    type IntoCursor = linked_list::IntoIter<T>;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        Self::iter(self)
    }

    #[inline]
    fn into_cursor(self) -> Self::IntoCursor {
        IntoIterator::into_iter(self)
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

    fn retain_elements<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        let mut remaining = std::mem::take(self);
        while !remaining.is_empty() {
            let rest = remaining.split_off(1);
            if remaining.front().is_some_and(&mut predicate) {
                self.append(&mut remaining);
            }
            remaining = rest;
        }
    }

    fn truncate_elements(&mut self, length: usize) {
        if length < self.len() {
            drop(self.split_off(length));
        }
    }
}

impl<T> ConstantLength for LinkedList<T> {
    #[inline]
    fn constant_length(&self) -> usize {
        self.len()
    }
}

impl<T> NativeSort for LinkedList<T> {
    fn native_sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort_linked(self, &mut compare);
    }
}

/// Merge sort that only splits and appends nodes.
fn merge_sort_linked<T, F>(list: &mut LinkedList<T>, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if list.len() < 2 {
        return;
    }

    let mut right = list.split_off(list.len() / 2);
    let mut left = std::mem::take(list);
    merge_sort_linked(&mut left, compare);
    merge_sort_linked(&mut right, compare);

    loop {
        let take_right = match (left.front(), right.front()) {
            (Some(left_head), Some(right_head)) => {
                compare(right_head, left_head) == Ordering::Less
            }
            _ => break,
        };
        let source = if take_right { &mut right } else { &mut left };
        let rest = source.split_off(1);
        list.append(source);
        *source = rest;
    }

    list.append(&mut left);
    list.append(&mut right);
}

// =============================================================================
// String
// =============================================================================

impl Sequence for String {
    type Element = char;
    type Traversal = Sequential;
    type Size = Counted;
    type Cursor<'a> = std::str::Chars<'a>;
    type IntoCursor = std::vec::IntoIter<char>;

    #[inline]
    fn cursor(&self) -> Self::Cursor<'_> {
        self.chars()
    }

    fn into_cursor(self) -> Self::IntoCursor {
        self.chars().collect::<Vec<_>>().into_iter()
    }

    #[inline]
    fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        elements.into_iter().collect()
    }

    #[inline]
    fn extend_elements<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = char>,
    {
        Extend::extend(self, elements);
    }

    #[inline]
    fn retain_elements<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&char) -> bool,
    {
        self.retain(|character| predicate(&character));
    }

    fn truncate_elements(&mut self, length: usize) {
        let boundary = self.char_indices().nth(length).map(|(index, _)| index);
        if let Some(index) = boundary {
            self.truncate(index);
        }
    }
}

impl NativeSort for String {
    fn native_sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&char, &char) -> Ordering,
    {
        let mut characters: Vec<char> = self.chars().collect();
        characters.sort_by(compare);
        self.clear();
        self.extend(characters);
    }
}
