//! Auxiliary parameters that are configured by the element type.

use std::marker::PhantomData;

/// A container parameter whose configuration depends on the element type,
/// such as the inline buffer of a small-vector.
///
/// Rebinding a family rebinds its auxiliary parameter with
/// [`Rebind`](Auxiliary::Rebind), so that the configuration follows the new
/// element. Parameters that do not depend on the element (capacities, tags,
/// policies) are not auxiliary and pass through rebinding unchanged.
///
/// # Examples
///
/// ```rust
/// use rebound::rebind::{Auxiliary, RebindAuxiliary};
/// use static_assertions::assert_type_eq_all;
///
/// assert_type_eq_all!(<[u8; 16] as Auxiliary>::Rebind<u64>, [u64; 16]);
/// assert_type_eq_all!(
///     RebindAuxiliary<smallvec::SmallVec<[char; 4]>, String>,
///     [String; 4]
/// );
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an element-configured auxiliary parameter",
    note = "implement `rebound::rebind::Auxiliary`, or declare `NoAuxiliary<_>` for families without one"
)]
pub trait Auxiliary {
    /// The element this auxiliary is configured for.
    type Element;

    /// The same auxiliary configured for `B`.
    type Rebind<B>: Auxiliary<Element = B>;
}

/// The auxiliary of a family that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NoAuxiliary<T>(PhantomData<T>);

impl<T> Auxiliary for NoAuxiliary<T> {
    type Element = T;
    type Rebind<B> = NoAuxiliary<B>;
}

/// Inline buffers: `[T; N]` rebinds to `[B; N]`, keeping the inline length.
impl<T, const N: usize> Auxiliary for [T; N] {
    type Element = T;
    type Rebind<B> = [B; N];
}

/// The auxiliary of family `C`, configured for `B`.
pub type RebindAuxiliary<C, B> =
    <<C as super::Parametrized>::Auxiliary as Auxiliary>::Rebind<B>;
