//! Algebraic structures over extended containers.
//!
//! - [`Semigroup`]: combining two containers by concatenation (`combine`)
//! - [`Monoid`]: the empty container as identity (`empty`)
//!
//! # Examples
//!
//! ```rust
//! use rebound::containers::List;
//! use rebound::typeclass::{Monoid, Semigroup};
//!
//! let numbers: List<i32> = (1..=3).collect();
//! let more = numbers.clone().combine((4..=5).collect());
//! assert_eq!(more.size(), 5);
//! assert_eq!(List::empty().combine(numbers.clone()), numbers);
//! ```

mod monoid;
mod semigroup;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
