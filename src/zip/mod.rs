//! Variadic tuple zip.
//!
//! Zipping a primary container `C` with the sources `(&S1, ..., &Sk)` yields
//! the flat tuples `(c_i, s1_i, ..., sk_i)` for every position `i` below the
//! length of the shortest input. Each input is measured once with its size
//! strategy, and one [`CursorSet`] then advances all cursors together for
//! exactly that many steps.
//!
//! Up to seven sources are supported. Sources must yield `Clone` elements:
//!
//! ```rust,compile_fail
//! use rebound::zip::zip_cursors;
//!
//! struct Opaque;
//!
//! let numbers = vec![1, 2];
//! let values = vec![Opaque, Opaque];
//! let _ = zip_cursors(&numbers, (&values,)).count();
//! ```
//!
//! # Examples
//!
//! ```rust
//! use std::collections::LinkedList;
//! use rebound::zip::zip_cursors;
//!
//! let numbers = vec![1, 2, 3, 4];
//! let letters: LinkedList<char> = "abc".chars().collect();
//! let flags = vec![true, false];
//!
//! let rows: Vec<_> = zip_cursors(&numbers, (&letters, &flags)).collect();
//! assert_eq!(rows, vec![(1, 'a', true), (2, 'b', false)]);
//! ```

mod cursor;

pub use cursor::{Advance, Cursor, CursorSet};

use crate::capability::measure;
use crate::sequence::Sequence;

/// A tuple of borrowed sources that can be zipped with a primary container
/// of type `C`.
///
/// Implemented for `(&S1,)` through `(&S1, &S2, &S3, &S4, &S5, &S6, &S7)`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be zipped with `{C}`",
    note = "zip sources are a tuple of one to seven references to sequences with `Clone` elements"
)]
pub trait ZipWith<'a, C: Sequence + 'a> {
    /// The flat tuple `(C::Element, S1::Element, ...)`.
    type Values;

    /// The tuple of cursors advanced together.
    type Cursors: Advance<Values = Self::Values>;

    /// Builds the cursor set over `primary` and these sources.
    fn cursor_set(self, primary: &'a C) -> CursorSet<Self::Cursors>;
}

/// Zips `primary` with `sources`, truncating to the shortest input.
#[inline]
pub fn zip_cursors<'a, C, Z>(primary: &'a C, sources: Z) -> CursorSet<Z::Cursors>
where
    C: Sequence + 'a,
    Z: ZipWith<'a, C>,
{
    sources.cursor_set(primary)
}

macro_rules! zip_with {
    ($($source:ident),+) => {
        paste::paste! {
            impl<'a, C, $($source),+> Advance for (Cursor<'a, C>, $(Cursor<'a, $source>,)+)
            where
                C: Sequence + 'a,
                C::Element: Clone,
                $(
                    $source: Sequence + 'a,
                    $source::Element: Clone,
                )+
            {
                type Values = (C::Element, $($source::Element,)+);

                #[inline]
                fn advance(&mut self) -> Option<Self::Values> {
                    let (primary, $([<$source:lower>],)+) = self;
                    Some((primary.step()?, $([<$source:lower>].step()?,)+))
                }
            }

            impl<'a, C, $($source),+> ZipWith<'a, C> for ($(&'a $source,)+)
            where
                C: Sequence + 'a,
                C::Element: Clone,
                $(
                    $source: Sequence + 'a,
                    $source::Element: Clone,
                )+
            {
                type Values = (C::Element, $($source::Element,)+);
                type Cursors = (Cursor<'a, C>, $(Cursor<'a, $source>,)+);

                fn cursor_set(self, primary: &'a C) -> CursorSet<Self::Cursors> {
                    let ($([<$source:lower>],)+) = self;
                    let steps = measure(primary)$(.min(measure([<$source:lower>])))+;
                    CursorSet::new(
                        (Cursor::new(primary), $(Cursor::new([<$source:lower>]),)+),
                        steps,
                    )
                }
            }
        }
    };
}

zip_with!(S1);
zip_with!(S1, S2);
zip_with!(S1, S2, S3);
zip_with!(S1, S2, S3, S4);
zip_with!(S1, S2, S3, S4, S5);
zip_with!(S1, S2, S3, S4, S5, S6);
zip_with!(S1, S2, S3, S4, S5, S6, S7);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::SinglyLinkedList;
    use rstest::rstest;
    use static_assertions::assert_type_eq_all;
    use std::collections::VecDeque;

    assert_type_eq_all!(
        <(&'static Vec<char>,) as ZipWith<'static, Vec<i32>>>::Values,
        (i32, char)
    );
    assert_type_eq_all!(
        <(&'static String, &'static VecDeque<u8>) as ZipWith<'static, Vec<i32>>>::Values,
        (i32, char, u8)
    );

    #[rstest]
    fn test_pairwise_zip_truncates_to_shorter_input() {
        let numbers = vec![1, 2, 3];
        let words = vec!["one", "two"];
        let pairs: Vec<_> = zip_cursors(&numbers, (&words,)).collect();
        assert_eq!(pairs, vec![(1, "one"), (2, "two")]);
    }

    #[rstest]
    fn test_zip_with_empty_source_is_empty() {
        let numbers = vec![1, 2, 3];
        let empty: Vec<u8> = Vec::new();
        assert_eq!(zip_cursors(&numbers, (&empty,)).count(), 0);
    }

    #[rstest]
    fn test_zip_mixes_counted_and_constant_sizes() {
        let numbers: VecDeque<i32> = (1..=5).collect();
        let list: SinglyLinkedList<i32> = (10..13).collect();
        let text = String::from("xyzw");
        let rows: Vec<_> = zip_cursors(&numbers, (&list, &text)).collect();
        assert_eq!(rows, vec![(1, 10, 'x'), (2, 11, 'y'), (3, 12, 'z')]);
    }

    #[rstest]
    fn test_zip_seven_sources() {
        let a = vec![0];
        let rows: Vec<_> = zip_cursors(&a, (&a, &a, &a, &a, &a, &a, &a)).collect();
        assert_eq!(rows, vec![(0, 0, 0, 0, 0, 0, 0, 0)]);
    }

    #[rstest]
    fn test_cursor_set_stays_exhausted() {
        let numbers = vec![1];
        let mut rows = zip_cursors(&numbers, (&numbers,));
        assert_eq!(rows.size_hint(), (1, Some(1)));
        assert_eq!(rows.next(), Some((1, 1)));
        assert_eq!(rows.next(), None);
        assert_eq!(rows.next(), None);
    }
}
