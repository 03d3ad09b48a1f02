//! Element-type preserving operations.

use std::borrow::Borrow;
use std::cmp::Ordering;

use super::{EmptySequenceError, Extended};
use crate::capability::{SortStrategy, measure};
use crate::sequence::Sequence;

impl<C: Sequence> Extended<C> {
    // =========================================================================
    // Inspection
    // =========================================================================

    /// Returns the number of elements, using the container's size strategy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::Extended;
    ///
    /// assert_eq!(Extended::<String>::new("héllo").size(), 5);
    /// ```
    #[inline]
    pub fn size(&self) -> usize {
        measure(&self.inner)
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &C::Element) -> bool
    where
        C::Element: PartialEq,
    {
        self.inner
            .cursor()
            .any(|item| Borrow::<C::Element>::borrow(&item) == value)
    }

    /// Counts the elements equal to `value`.
    pub fn count(&self, value: &C::Element) -> usize
    where
        C::Element: PartialEq,
    {
        self.count_if(|element| element == value)
    }

    /// Counts the elements satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::containers::Vector;
    ///
    /// let numbers: Vector<i32> = (1..=10).collect();
    /// assert_eq!(numbers.count_if(|number| number % 3 == 0), 3);
    /// ```
    pub fn count_if<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&C::Element) -> bool,
    {
        self.inner
            .cursor()
            .filter(|item| predicate(Borrow::<C::Element>::borrow(item)))
            .count()
    }

    // =========================================================================
    // In-place Mutation
    // =========================================================================

    /// Removes every element equal to `value`.
    pub fn erase_all(&mut self, value: &C::Element) -> &mut Self
    where
        C::Element: PartialEq,
    {
        self.inner.retain_elements(|element| element != value);
        self
    }

    /// Removes every element satisfying `predicate`.
    ///
    /// This is the complement of [`filter`](Self::filter), which keeps the
    /// elements satisfying its predicate.
    pub fn erase_if<P>(&mut self, mut predicate: P) -> &mut Self
    where
        P: FnMut(&C::Element) -> bool,
    {
        self.inner.retain_elements(|element| !predicate(element));
        self
    }

    /// Appends `elements` at the end.
    pub fn extend_from<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = C::Element>,
    {
        self.inner.extend_elements(elements);
        self
    }

    /// Replaces every element with `function` applied to it.
    ///
    /// See [`map`](Self::map) for a transformation that may change the element
    /// type.
    pub fn transform<F>(&mut self, function: F) -> &mut Self
    where
        F: FnMut(C::Element) -> C::Element,
    {
        self.inner.transform_elements(function);
        self
    }

    // =========================================================================
    // Concatenation and Selection
    // =========================================================================

    /// Appends `other` to the receiver and returns it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::containers::Vector;
    ///
    /// let numbers = Vector::new([1, 2]).concat([3]).concat(vec![4, 5]);
    /// assert_eq!(numbers.into_inner(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn concat<I>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = C::Element>,
    {
        self.inner.extend_elements(other);
        self
    }

    /// Returns a copy of the receiver with `other` appended.
    #[must_use]
    pub fn concat_ref<I>(&self, other: I) -> Self
    where
        C: Clone,
        I: IntoIterator<Item = C::Element>,
    {
        self.clone().concat(other)
    }

    /// Keeps only the elements satisfying `predicate`.
    #[must_use]
    pub fn filter<P>(mut self, predicate: P) -> Self
    where
        P: FnMut(&C::Element) -> bool,
    {
        self.inner.retain_elements(predicate);
        self
    }

    /// Returns a copy of the elements satisfying `predicate`.
    #[must_use]
    pub fn filter_ref<P>(&self, mut predicate: P) -> Self
    where
        C::Element: Clone,
        P: FnMut(&C::Element) -> bool,
    {
        self.inner
            .cursor()
            .filter_map(|item| {
                let element: &C::Element = Borrow::borrow(&item);
                predicate(element).then(|| element.clone())
            })
            .collect()
    }

    /// Keeps the first `count` elements.
    ///
    /// When `count` exceeds the number of elements, every element is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::containers::List;
    ///
    /// let numbers: List<i32> = (1..=3).collect();
    /// assert_eq!(numbers.clone().take(2).to::<Vec<_>>(), vec![1, 2]);
    /// assert_eq!(numbers.take(10).to::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn take(mut self, count: usize) -> Self {
        self.inner.truncate_elements(count);
        self
    }

    /// Returns a copy of the first `count` elements.
    ///
    /// When `count` exceeds the number of elements, every element is copied.
    #[must_use]
    pub fn take_ref(&self, count: usize) -> Self
    where
        C::Element: Clone,
    {
        self.cloned_elements().take(count).collect()
    }

    /// Keeps the longest prefix whose elements all satisfy `predicate`.
    ///
    /// `predicate` is not called past the first element that fails it.
    #[must_use]
    pub fn take_while<P>(mut self, mut predicate: P) -> Self
    where
        P: FnMut(&C::Element) -> bool,
    {
        let boundary = self
            .inner
            .cursor()
            .take_while(|item| predicate(Borrow::<C::Element>::borrow(item)))
            .count();
        self.inner.truncate_elements(boundary);
        self
    }

    /// Returns a copy of the longest prefix whose elements all satisfy
    /// `predicate`.
    #[must_use]
    pub fn take_while_ref<P>(&self, mut predicate: P) -> Self
    where
        C::Element: Clone,
        P: FnMut(&C::Element) -> bool,
    {
        self.cloned_elements()
            .take_while(|element| predicate(element))
            .collect()
    }

    // =========================================================================
    // Sorting
    // =========================================================================

    /// Sorts the elements in ascending order.
    ///
    /// The sort is stable. Random-access containers are sorted through their
    /// slice view; other containers use their own reordering operation.
    pub fn sort(&mut self) -> &mut Self
    where
        C::Element: Ord,
    {
        self.sort_by(Ord::cmp)
    }

    /// Stably sorts the elements with `compare`.
    pub fn sort_by<F>(&mut self, compare: F) -> &mut Self
    where
        F: FnMut(&C::Element, &C::Element) -> Ordering,
    {
        <C::Traversal as SortStrategy<C>>::sort_by(&mut self.inner, compare);
        self
    }

    /// Stably sorts the elements by the key `function` extracts.
    pub fn sort_by_key<K, F>(&mut self, mut function: F) -> &mut Self
    where
        K: Ord,
        F: FnMut(&C::Element) -> K,
    {
        self.sort_by(|left, right| {
            let left_key = function(left);
            let right_key = function(right);
            left_key.cmp(&right_key)
        })
    }

    /// Returns the receiver sorted in ascending order.
    #[must_use]
    pub fn sorted(mut self) -> Self
    where
        C::Element: Ord,
    {
        self.sort();
        self
    }

    /// Returns the receiver sorted with `compare`.
    #[must_use]
    pub fn sorted_by<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&C::Element, &C::Element) -> Ordering,
    {
        self.sort_by(compare);
        self
    }

    /// Returns a sorted copy of the receiver.
    #[must_use]
    pub fn sorted_ref(&self) -> Self
    where
        C: Clone,
        C::Element: Ord,
    {
        self.clone().sorted()
    }

    // =========================================================================
    // Reduction
    // =========================================================================

    /// Folds the elements with `function`, using the first element as the
    /// seed.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the container is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::containers::Vector;
    ///
    /// let parts = Vector::new(["Hel", "lo", ", wo", "rld"].map(String::from));
    /// let message = parts.reduce(|message, part| message + &part);
    /// assert_eq!(message.as_deref(), Ok("Hello, world"));
    ///
    /// let empty: Vector<String> = Vector::default();
    /// assert!(empty.reduce(|message, part| message + &part).is_err());
    /// ```
    pub fn reduce<F>(self, function: F) -> Result<C::Element, EmptySequenceError>
    where
        F: FnMut(C::Element, C::Element) -> C::Element,
    {
        let mut elements = self.inner.into_cursor();
        let seed = elements
            .next()
            .ok_or(EmptySequenceError { operation: "reduce" })?;
        Ok(elements.fold(seed, function))
    }

    /// Folds borrowed elements with `function`, using a copy of the first
    /// element as the seed.
    ///
    /// # Errors
    ///
    /// Returns [`EmptySequenceError`] if the container is empty.
    pub fn reduce_ref<F>(&self, mut function: F) -> Result<C::Element, EmptySequenceError>
    where
        C::Element: Clone,
        F: FnMut(C::Element, &C::Element) -> C::Element,
    {
        let mut cursor = self.inner.cursor();
        let seed = cursor
            .next()
            .map(|item| Borrow::<C::Element>::borrow(&item).clone())
            .ok_or(EmptySequenceError {
                operation: "reduce_ref",
            })?;
        Ok(cursor.fold(seed, |accumulator, item| {
            function(accumulator, Borrow::<C::Element>::borrow(&item))
        }))
    }

    /// Folds the elements into `seed` with `function`.
    ///
    /// An empty container returns `seed` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::containers::ForwardList;
    ///
    /// let numbers: ForwardList<i32> = (1..=4).collect();
    /// assert_eq!(numbers.reduce_with(0, |sum, number| sum + number), 10);
    /// ```
    pub fn reduce_with<A, F>(self, seed: A, function: F) -> A
    where
        F: FnMut(A, C::Element) -> A,
    {
        self.inner.into_cursor().fold(seed, function)
    }

    /// Folds borrowed elements into `seed` with `function`.
    pub fn reduce_with_ref<A, F>(&self, seed: A, mut function: F) -> A
    where
        F: FnMut(A, &C::Element) -> A,
    {
        self.inner
            .cursor()
            .fold(seed, |accumulator, item| {
                function(accumulator, Borrow::<C::Element>::borrow(&item))
            })
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Copies the elements into any container that can be collected into.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::BTreeSet;
    /// use rebound::containers::Vector;
    ///
    /// let numbers = Vector::new([3, 1, 3, 2]);
    /// assert_eq!(numbers.to::<BTreeSet<_>>().len(), 3);
    /// ```
    pub fn to<D>(&self) -> D
    where
        C::Element: Clone,
        D: FromIterator<C::Element>,
    {
        self.cloned_elements().collect()
    }

    /// Moves the elements into any container that can be collected into.
    pub fn into_container<D>(self) -> D
    where
        D: FromIterator<C::Element>,
    {
        self.inner.into_cursor().collect()
    }

    pub(super) fn cloned_elements(&self) -> impl Iterator<Item = C::Element> + '_
    where
        C::Element: Clone,
    {
        self.inner
            .cursor()
            .map(|item| Borrow::<C::Element>::borrow(&item).clone())
    }
}
