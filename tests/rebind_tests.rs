//! Integration tests for container rebinding.
//!
//! Covers the provided families as well as user-defined containers declaring
//! either a structural family or a family mapping.

use std::collections::{LinkedList, VecDeque};
use std::marker::PhantomData;

use rebound::capability::{Constant, ConstantLength, Contiguous, RandomAccess};
use rebound::prelude::*;
use rebound::rebind::{Auxiliary, ByFamilyMapping, ByStructure, FamilyMapping, Parametrized};
use rstest::rstest;
use static_assertions::{assert_impl_all, assert_not_impl_any, assert_type_eq_all};

// =============================================================================
// A structural family with an element-configured auxiliary parameter
// =============================================================================

/// Recycling policy configured for one element type.
#[derive(Debug)]
struct Recycler<T>(PhantomData<T>);

impl<T> Auxiliary for Recycler<T> {
    type Element = T;
    type Rebind<B> = Recycler<B>;
}

/// Tag parameter copied unchanged by rebinding.
#[derive(Debug)]
struct Archived;

/// A pool of items with a recycling policy and a tag.
#[derive(Debug)]
struct Pool<T, R, Tag> {
    items: Vec<T>,
    marker: PhantomData<fn() -> (R, Tag)>,
}

impl<T, R, Tag> Default for Pool<T, R, Tag> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            marker: PhantomData,
        }
    }
}

impl<T, R: Auxiliary<Element = T>, Tag> Sequence for Pool<T, R, Tag> {
    type Element = T;
    type Traversal = RandomAccess;
    type Size = Constant;
    type Cursor<'a>
        = std::slice::Iter<'a, T>
    where
        Self: 'a;
    type IntoCursor = std::vec::IntoIter<T>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.items.iter()
    }

    fn into_cursor(self) -> Self::IntoCursor {
        self.items.into_iter()
    }

    fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            items: elements.into_iter().collect(),
            marker: PhantomData,
        }
    }

    fn extend_elements<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(elements);
    }

    fn retain_elements<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.items.retain(predicate);
    }

    fn truncate_elements(&mut self, length: usize) {
        self.items.truncate(length);
    }
}

impl<T, R: Auxiliary<Element = T>, Tag> ConstantLength for Pool<T, R, Tag> {
    fn constant_length(&self) -> usize {
        self.items.len()
    }
}

impl<T, R: Auxiliary<Element = T>, Tag> Contiguous for Pool<T, R, Tag> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T, R: Auxiliary<Element = T>, Tag> Family for Pool<T, R, Tag> {
    type Resolution = ByStructure;
}

impl<T, R: Auxiliary<Element = T>, Tag> Parametrized for Pool<T, R, Tag> {
    type Auxiliary = R;
    type Apply<B> = Pool<B, R::Rebind<B>, Tag>;
}

type ArchivedPool<T> = Pool<T, Recycler<T>, Archived>;

assert_type_eq_all!(Rebound<ArchivedPool<i32>, String>, ArchivedPool<String>);
assert_type_eq_all!(Rebound<ArchivedPool<u8>, u8>, ArchivedPool<u8>);
assert_type_eq_all!(
    Rebound<Rebound<ArchivedPool<u8>, (u8, char)>, u8>,
    ArchivedPool<u8>
);

// =============================================================================
// A family mapping for a non-generic container
// =============================================================================

/// A fixed-purpose container of flags, mapped to `VecDeque` when rebound.
#[derive(Debug, Default)]
struct Flags(Vec<bool>);

impl Sequence for Flags {
    type Element = bool;
    type Traversal = RandomAccess;
    type Size = Constant;
    type Cursor<'a> = std::slice::Iter<'a, bool>;
    type IntoCursor = std::vec::IntoIter<bool>;

    fn cursor(&self) -> Self::Cursor<'_> {
        self.0.iter()
    }

    fn into_cursor(self) -> Self::IntoCursor {
        self.0.into_iter()
    }

    fn from_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        Self(elements.into_iter().collect())
    }

    fn extend_elements<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = bool>,
    {
        self.0.extend(elements);
    }

    fn retain_elements<P>(&mut self, predicate: P)
    where
        P: FnMut(&bool) -> bool,
    {
        self.0.retain(predicate);
    }

    fn truncate_elements(&mut self, length: usize) {
        self.0.truncate(length);
    }
}

impl ConstantLength for Flags {
    fn constant_length(&self) -> usize {
        self.0.len()
    }
}

impl Contiguous for Flags {
    fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.0
    }
}

impl Family for Flags {
    type Resolution = ByFamilyMapping;
}

impl FamilyMapping for Flags {
    type Sibling<B> = VecDeque<B>;
}

assert_type_eq_all!(Rebound<Flags, u8>, VecDeque<u8>);
assert_impl_all!(Flags: Rebind<String>, Rebind<bool>);

// =============================================================================
// Provided families
// =============================================================================

assert_type_eq_all!(Rebound<Vec<i32>, i32>, Vec<i32>);
assert_type_eq_all!(Rebound<Vec<i32>, String>, Vec<String>);
assert_type_eq_all!(Rebound<VecDeque<i32>, char>, VecDeque<char>);
assert_type_eq_all!(Rebound<LinkedList<i32>, (i32, i32)>, LinkedList<(i32, i32)>);
assert_type_eq_all!(Rebound<SinglyLinkedList<i32>, bool>, SinglyLinkedList<bool>);
assert_type_eq_all!(Rebound<String, u32>, Vec<u32>);

#[cfg(feature = "inline")]
assert_type_eq_all!(
    Rebound<smallvec::SmallVec<[u8; 4]>, String>,
    smallvec::SmallVec<[String; 4]>
);

#[cfg(feature = "bounded")]
assert_type_eq_all!(
    Rebound<arrayvec::ArrayVec<u8, 16>, char>,
    arrayvec::ArrayVec<char, 16>
);

assert_not_impl_any!(std::collections::BTreeSet<i32>: Rebind<i32>);
assert_not_impl_any!(std::collections::HashSet<i32>: Sequence);

// =============================================================================
// Runtime behaviour through Extended
// =============================================================================

#[rstest]
fn test_map_over_structural_family_keeps_tag_and_policy() {
    let pool = Extended::<ArchivedPool<i32>>::from_iter([3, 1, 2]);
    let labels: Extended<ArchivedPool<String>> = pool.map_ref(|number| format!("#{number}"));
    assert_eq!(labels.to::<Vec<_>>(), vec!["#3", "#1", "#2"]);
    assert_eq!(pool.sorted().to::<Vec<_>>(), vec![1, 2, 3]);
}

#[rstest]
fn test_zip_over_structural_family() {
    let pool = Extended::<ArchivedPool<u8>>::from_iter([1, 2, 3]);
    let letters = vec!['a', 'b'];
    let pairs: Extended<ArchivedPool<(u8, char)>> = pool.zip(&letters);
    assert_eq!(pairs.size(), 2);
}

#[rstest]
fn test_map_over_family_mapping_builds_sibling() {
    let flags = Extended::<Flags>::from_iter([true, false, true]);
    let bits: Extended<VecDeque<u8>> = flags.map(u8::from);
    assert_eq!(bits.into_inner(), VecDeque::from([1, 0, 1]));
}

#[rstest]
fn test_sort_on_family_mapping_container() {
    let flags = Extended::<Flags>::from_iter([true, false, true]).sorted();
    assert_eq!(flags.to::<Vec<_>>(), vec![false, true, true]);
}

#[cfg(feature = "inline")]
#[rstest]
fn test_map_over_inline_vector_keeps_inline_capacity() {
    let numbers: InlineVector<i32, 4> = (1..=3).collect();
    let doubled: InlineVector<i64, 4> = numbers.map(|number| i64::from(number) * 2);
    assert!(!doubled.spilled());
    assert_eq!(doubled.to::<Vec<_>>(), vec![2, 4, 6]);
}

#[cfg(feature = "bounded")]
#[rstest]
fn test_map_over_bounded_vector_keeps_capacity() {
    let numbers: BoundedVector<u8, 8> = (1..=3).collect();
    let chars: BoundedVector<char, 8> = numbers.map(|number| char::from(b'a' + number));
    assert_eq!(chars.capacity(), 8);
    assert_eq!(chars.to::<String>(), "bcd");
}
