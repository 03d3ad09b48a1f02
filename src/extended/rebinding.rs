//! Operations whose result holds a different element type.

use std::borrow::Borrow;

use super::Extended;
use crate::rebind::{Rebind, Rebound};
use crate::sequence::Sequence;
use crate::zip::{ZipWith, zip_cursors};

/// The element type of the containers held by `C`.
type InnerElement<C> = <<C as Sequence>::Element as Sequence>::Element;

impl<C: Sequence> Extended<C> {
    // =========================================================================
    // Map
    // =========================================================================

    /// Applies `function` to every element, collecting the results into the
    /// sibling container holding `B`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::VecDeque;
    /// use rebound::Extended;
    ///
    /// let numbers = Extended::<VecDeque<i32>>::new(vec![1, 2, 3]);
    /// let labels: Extended<VecDeque<String>> = numbers.map(|number| format!("#{number}"));
    /// assert_eq!(labels.front().map(String::as_str), Some("#1"));
    /// ```
    pub fn map<B, F>(self, function: F) -> Extended<Rebound<C, B>>
    where
        C: Rebind<B>,
        F: FnMut(C::Element) -> B,
    {
        self.inner.into_cursor().map(function).collect()
    }

    /// Applies `function` to every borrowed element, collecting the results
    /// into the sibling container holding `B`.
    pub fn map_ref<B, F>(&self, mut function: F) -> Extended<Rebound<C, B>>
    where
        C: Rebind<B>,
        F: FnMut(&C::Element) -> B,
    {
        self.inner
            .cursor()
            .map(|item| function(Borrow::<C::Element>::borrow(&item)))
            .collect()
    }

    // =========================================================================
    // Flatten
    // =========================================================================

    /// Concatenates the inner containers, in outer-then-inner order, draining
    /// each one into the sibling container holding their elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::containers::Vector;
    ///
    /// let nested = Vector::new(vec![vec![1, 2], vec![3], vec![4, 5, 6]]);
    /// assert_eq!(nested.flatten().into_inner(), vec![1, 2, 3, 4, 5, 6]);
    /// ```
    pub fn flatten(self) -> Extended<Rebound<C, InnerElement<C>>>
    where
        C::Element: Sequence,
        C: Rebind<InnerElement<C>>,
    {
        self.flatten_into()
    }

    /// Concatenates copies of the inner containers' elements into the sibling
    /// container holding them.
    pub fn flatten_ref(&self) -> Extended<Rebound<C, InnerElement<C>>>
    where
        C::Element: Sequence,
        InnerElement<C>: Clone,
        C: Rebind<InnerElement<C>>,
    {
        let mut elements = Vec::new();
        for item in self.inner.cursor() {
            let inner: &C::Element = Borrow::borrow(&item);
            elements.extend(
                inner
                    .cursor()
                    .map(|element| Borrow::<InnerElement<C>>::borrow(&element).clone()),
            );
        }
        elements.into_iter().collect()
    }

    /// Concatenates the inner containers into a target container of any type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::LinkedList;
    /// use rebound::containers::Vector;
    ///
    /// let nested = Vector::new(vec![LinkedList::from([1, 2]), LinkedList::from([3])]);
    /// let flat: Vec<i32> = nested.flatten_into();
    /// assert_eq!(flat, vec![1, 2, 3]);
    /// ```
    pub fn flatten_into<D>(self) -> D
    where
        C::Element: Sequence,
        D: FromIterator<InnerElement<C>>,
    {
        self.inner
            .into_cursor()
            .flat_map(Sequence::into_cursor)
            .collect()
    }

    // =========================================================================
    // Unzip
    // =========================================================================

    /// Splits a container of pairs into a pair of sibling containers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::containers::Vector;
    ///
    /// let pairs = Vector::new([(1, 'a'), (2, 'b')]);
    /// let (numbers, letters) = pairs.unzip();
    /// assert_eq!(numbers.into_inner(), vec![1, 2]);
    /// assert_eq!(letters.into_inner(), vec!['a', 'b']);
    /// ```
    pub fn unzip<A, B>(self) -> (Extended<Rebound<C, A>>, Extended<Rebound<C, B>>)
    where
        C: Sequence<Element = (A, B)> + Rebind<A> + Rebind<B>,
    {
        let (firsts, seconds): (Vec<A>, Vec<B>) = self.inner.into_cursor().unzip();
        (firsts.into_iter().collect(), seconds.into_iter().collect())
    }

    /// Splits copies of a container of pairs into a pair of sibling
    /// containers.
    pub fn unzip_ref<A, B>(&self) -> (Extended<Rebound<C, A>>, Extended<Rebound<C, B>>)
    where
        C: Sequence<Element = (A, B)> + Rebind<A> + Rebind<B>,
        A: Clone,
        B: Clone,
    {
        let (firsts, seconds): (Vec<A>, Vec<B>) = self
            .inner
            .cursor()
            .map(|item| {
                let (first, second) = Borrow::<(A, B)>::borrow(&item);
                (first.clone(), second.clone())
            })
            .unzip();
        (firsts.into_iter().collect(), seconds.into_iter().collect())
    }

    // =========================================================================
    // Zip
    // =========================================================================

    /// Pairs each element with the element at the same position in `other`.
    ///
    /// The result is as long as the shorter input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rebound::containers::Vector;
    ///
    /// let numbers = Vector::new([1, 2, 3]);
    /// let letters = Vector::new(['a', 'b', 'c', 'd', 'e']);
    /// let pairs = numbers.zip(&letters);
    /// assert_eq!(pairs.into_inner(), vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    /// ```
    pub fn zip<'a, S>(
        &'a self,
        other: &'a S,
    ) -> Extended<Rebound<C, (<C as Sequence>::Element, S::Element)>>
    where
        S: Sequence + 'a,
        S::Element: Clone,
        C: Rebind<(<C as Sequence>::Element, S::Element)> + 'a,
        C::Element: Clone,
    {
        zip_cursors(&self.inner, (other,)).collect()
    }

    /// Zips the receiver with up to seven other containers into flat tuples.
    ///
    /// The result is as long as the shortest input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::LinkedList;
    /// use rebound::containers::Vector;
    ///
    /// let numbers = Vector::new([1, 2, 3]);
    /// let letters: LinkedList<char> = "ab".chars().collect();
    /// let text = String::from("xyz");
    /// let rows = numbers.zip_n((&letters, &text));
    /// assert_eq!(rows.into_inner(), vec![(1, 'a', 'x'), (2, 'b', 'y')]);
    /// ```
    pub fn zip_n<'a, Z>(&'a self, sources: Z) -> Extended<Rebound<C, Z::Values>>
    where
        Z: ZipWith<'a, C>,
        C: Rebind<Z::Values> + 'a,
    {
        zip_cursors(&self.inner, sources).collect()
    }
}
