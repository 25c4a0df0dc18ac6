//! Type class traits and the value wrappers that give them instances.
//!
//! - [`Functor`]: Mapping over container values
//! - [`Applicative`]: Applying wrapped functions to wrapped values
//! - [`Monad`]: Sequencing dependent computations
//! - [`Semigroup`]: Associative binary operations (`concat`)
//! - [`Monoid`]: Semigroup with identity element (`empty`)
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) so that
//! `Functor` and friends can name "the same container, different content".
//!
//! ## Value Wrappers
//!
//! - [`Sum`], [`Product`]: Numeric wrappers for addition and multiplication
//! - [`All`], [`Any`]: Boolean conjunction and disjunction
//! - [`Max`], [`Min`]: Ordered wrappers with [`Bounded`] identities
//! - [`First`], [`Last`]: Keep one side; Semigroup only
//! - [`Pair`]: Element-wise product of two semigroups
//! - [`Pointwise`]: A function into a semigroup, combined pointwise
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{fold, fold_map, All, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(1).concat(Sum::new(2)).concat(Sum::new(3)), Sum::new(6));
//!
//! let total = fold_map([3, 5], Sum::new, Sum::empty());
//! assert_eq!(total, Sum::new(8));
//!
//! let nothing: Vec<All> = Vec::new();
//! assert_eq!(fold(nothing, All::empty()), All::new(true));
//! ```

mod applicative;
mod foldable;
mod functor;
mod higher;
mod monad;
mod monoid;
mod semigroup;
mod wrappers;

pub use applicative::{Applicative, lift_a2, lift_a3};
pub use foldable::{fold, fold_map};
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
pub use monoid::{Monoid, One};
pub use semigroup::Semigroup;
pub use wrappers::{All, Any, Bounded, First, Last, Max, Min, Pair, Pointwise, Product, Sum};
