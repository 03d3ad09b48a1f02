//! Compile-time rebinding of container families.
//!
//! Several operations change the element type of a container (`map`,
//! `flatten`, `unzip`, `zip`). Their result must be a *sibling* container: the
//! same shape, holding the new element type. This module derives that sibling
//! type at compile time.
//!
//! # Resolution Policy
//!
//! Every rebindable container implements [`Family`] and selects one of two
//! resolution tiers through [`Family::Resolution`]:
//!
//! 1. [`ByFamilyMapping`]: the container declares its sibling explicitly with
//!    [`FamilyMapping::Sibling`], and that declaration is used verbatim. This
//!    is the only option for shapes that are not generic over their element
//!    (such as `String`), and it takes precedence for generic shapes that want
//!    a different sibling than structural substitution would produce.
//! 2. [`ByStructure`]: the container is a parametrised family. Its
//!    [`Parametrized::Apply`] shape substitutes the target element for the
//!    element parameter and rebinds the declared auxiliary parameter through
//!    [`Auxiliary::Rebind`], leaving every other parameter untouched.
//!
//! A type with neither declaration cannot be rebound, and any attempt to do so
//! is rejected at compile time:
//!
//! ```rust,compile_fail
//! use std::collections::BTreeSet;
//! use rebound::rebind::Rebound;
//!
//! fn sibling() -> Rebound<BTreeSet<i32>, String> {
//!     unimplemented!()
//! }
//! ```
//!
//! # Laws
//!
//! For every structural family `C` with element `A`:
//!
//! - **Identity**: `Rebound<C, A>` is `C`.
//! - **Round trip**: `Rebound<Rebound<C, B>, A>` is `C`.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::VecDeque;
//! use rebound::rebind::Rebound;
//! use static_assertions::assert_type_eq_all;
//!
//! assert_type_eq_all!(Rebound<Vec<i32>, String>, Vec<String>);
//! assert_type_eq_all!(Rebound<VecDeque<u8>, (u8, char)>, VecDeque<(u8, char)>);
//!
//! // `String` declares `Vec` as its sibling family.
//! assert_type_eq_all!(Rebound<String, usize>, Vec<usize>);
//! ```

mod auxiliary;
mod standard;

pub use auxiliary::{Auxiliary, NoAuxiliary, RebindAuxiliary};

use crate::sequence::Sequence;

/// Declares how a container type is rebound to another element type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not declare a container family",
    label = "`{Self}` cannot be rebound to a different element type",
    note = "implement `rebound::rebind::Family` and select `ByFamilyMapping` or `ByStructure`"
)]
pub trait Family: Sequence {
    /// The resolution tier: [`ByFamilyMapping`] or [`ByStructure`].
    type Resolution;
}

/// Resolution tier using the container's declared [`FamilyMapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByFamilyMapping;

/// Resolution tier using structural substitution through [`Parametrized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByStructure;

/// An explicit "sibling holding `B`" mapping.
///
/// # Examples
///
/// ```rust
/// use rebound::capability::{Constant, ConstantLength, Contiguous, RandomAccess};
/// use rebound::rebind::{ByFamilyMapping, Family, FamilyMapping, Rebound};
/// use rebound::sequence::Sequence;
/// use static_assertions::assert_type_eq_all;
///
/// /// A list of scores that is not generic over its element.
/// #[derive(Default)]
/// struct Scores(Vec<u32>);
///
/// impl Sequence for Scores {
///     type Element = u32;
///     type Traversal = RandomAccess;
///     type Size = Constant;
///     type Cursor<'a> = std::slice::Iter<'a, u32>;
///     type IntoCursor = std::vec::IntoIter<u32>;
///
///     fn cursor(&self) -> Self::Cursor<'_> { self.0.iter() }
///     fn into_cursor(self) -> Self::IntoCursor { self.0.into_iter() }
///     fn from_elements<I: IntoIterator<Item = u32>>(elements: I) -> Self {
///         Self(elements.into_iter().collect())
///     }
///     fn extend_elements<I: IntoIterator<Item = u32>>(&mut self, elements: I) {
///         self.0.extend(elements);
///     }
///     fn retain_elements<P: FnMut(&u32) -> bool>(&mut self, predicate: P) {
///         self.0.retain(predicate);
///     }
///     fn truncate_elements(&mut self, length: usize) { self.0.truncate(length); }
/// }
///
/// impl ConstantLength for Scores {
///     fn constant_length(&self) -> usize { self.0.len() }
/// }
///
/// impl Contiguous for Scores {
///     fn as_mut_slice(&mut self) -> &mut [u32] { &mut self.0 }
/// }
///
/// impl Family for Scores {
///     type Resolution = ByFamilyMapping;
/// }
///
/// impl FamilyMapping for Scores {
///     type Sibling<B> = Vec<B>;
/// }
///
/// assert_type_eq_all!(Rebound<Scores, f64>, Vec<f64>);
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` selects `ByFamilyMapping` but declares no sibling mapping",
    label = "missing `FamilyMapping` for `{Self}`",
    note = "implement `rebound::rebind::FamilyMapping` or select `ByStructure`"
)]
pub trait FamilyMapping: Family {
    /// The sibling container holding `B`.
    type Sibling<B>: Family<Element = B>;
}

/// A container family that is generic over its element type.
///
/// [`Apply<B>`](Parametrized::Apply) is the same shape with `B` in the element
/// position and [`RebindAuxiliary<Self, B>`] in the auxiliary position; all
/// other parameters are copied as they are.
#[diagnostic::on_unimplemented(
    message = "`{Self}` selects `ByStructure` but is not a parametrised family",
    label = "missing `Parametrized` for `{Self}`",
    note = "implement `rebound::rebind::Parametrized`, or declare a sibling with `FamilyMapping`"
)]
pub trait Parametrized: Family {
    /// The auxiliary parameter whose configuration depends on the element,
    /// or [`NoAuxiliary`].
    type Auxiliary: Auxiliary<Element = Self::Element>;

    /// The same family applied to `B`.
    type Apply<B>: Family<Element = B>;
}

/// Resolves the sibling of `C` holding `B` for one resolution tier.
pub trait Resolve<C, B> {
    /// The resolved sibling container.
    type Output: Family<Element = B>;
}

impl<C: FamilyMapping, B> Resolve<C, B> for ByFamilyMapping {
    type Output = C::Sibling<B>;
}

impl<C: Parametrized, B> Resolve<C, B> for ByStructure {
    type Output = C::Apply<B>;
}

/// A rebind request: the sibling of `Self` holding `B`.
///
/// Implemented for every [`Family`] whose resolution tier applies.
#[diagnostic::on_unimplemented(
    message = "cannot rebind `{Self}` to hold `{B}`",
    label = "no sibling container of `{Self}` holding `{B}`",
    note = "the container must implement `Family` and either `FamilyMapping` or `Parametrized`"
)]
pub trait Rebind<B>: Sequence {
    /// The sibling container holding `B`.
    type Output: Family<Element = B>;
}

impl<C, B> Rebind<B> for C
where
    C: Family,
    C::Resolution: Resolve<C, B>,
{
    type Output = <C::Resolution as Resolve<C, B>>::Output;
}

/// The sibling of `C` holding `B`.
pub type Rebound<C, B> = <C as Rebind<B>>::Output;
