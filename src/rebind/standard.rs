//! Family declarations for the supported containers.

use std::collections::{LinkedList, VecDeque};

use super::{ByFamilyMapping, ByStructure, Family, FamilyMapping, NoAuxiliary, Parametrized};

/// Declares a structural family without an auxiliary parameter.
macro_rules! structural_family {
    ($($family:ident),* $(,)?) => {
        $(
            impl<T> Family for $family<T> {
                type Resolution = ByStructure;
            }

            impl<T> Parametrized for $family<T> {
                type Auxiliary = NoAuxiliary<T>;
                type Apply<B> = $family<B>;
            }
        )*
    };
}

structural_family!(Vec, VecDeque, LinkedList);

static_assertions::assert_type_eq_all!(
    <<Vec<u8> as Parametrized>::Apply<char> as Parametrized>::Apply<u8>,
    Vec<u8>
);

impl Family for String {
    type Resolution = ByFamilyMapping;
}

impl FamilyMapping for String {
    type Sibling<B> = Vec<B>;
}

#[cfg(feature = "inline")]
mod inline {
    use smallvec::SmallVec;

    use super::{ByStructure, Family, Parametrized};
    use crate::rebind::Auxiliary;

    impl<T, const N: usize> Family for SmallVec<[T; N]> {
        type Resolution = ByStructure;
    }

    impl<T, const N: usize> Parametrized for SmallVec<[T; N]> {
        type Auxiliary = [T; N];
        type Apply<B> = SmallVec<<[T; N] as Auxiliary>::Rebind<B>>;
    }
}

#[cfg(feature = "bounded")]
mod bounded {
    use arrayvec::ArrayVec;

    use super::{ByStructure, Family, NoAuxiliary, Parametrized};

    /// `CAP` is a capacity, not an element configuration, and passes through.
    impl<T, const CAP: usize> Family for ArrayVec<T, CAP> {
        type Resolution = ByStructure;
    }

    impl<T, const CAP: usize> Parametrized for ArrayVec<T, CAP> {
        type Auxiliary = NoAuxiliary<T>;
        type Apply<B> = ArrayVec<B, CAP>;
    }
}
