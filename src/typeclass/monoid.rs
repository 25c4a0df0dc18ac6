//! Monoid type class - semigroups with an identity element.
//!
//! A monoid adds `empty` to a semigroup so that combining an empty
//! sequence has a well-defined result.
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! T::empty().concat(a) == a
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! a.concat(T::empty()) == a
//! ```
//!
//! ## Associativity (inherited from Semigroup)
//!
//! ```text
//! (a.concat(b)).concat(c) == a.concat(b.concat(c))
//! ```
//!
//! # Types without an identity
//!
//! [`First`](super::First) and [`Last`](super::Last) only implement
//! `Semigroup`. Whatever value one picks as their `empty`, combining it on
//! the absorbing side returns the placeholder instead of the other operand.
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{All, Monoid, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(1).concat(Sum::new(2)).concat(Sum::empty()), Sum::new(3));
//! assert_eq!(All::empty().concat(All::new(true).concat(All::new(true))), All::new(true));
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::ops::{Add, Mul};

use super::semigroup::Semigroup;
use super::wrappers::{All, Any, Bounded, Max, Min, Pair, Pointwise, Product, Sum};

/// A type class for semigroups with an identity element.
///
/// # Laws
///
/// For all `a`:
/// ```text
/// Self::empty().concat(a) == a
/// a.concat(Self::empty()) == a
/// ```
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements of a sequence, starting from the identity.
    ///
    /// Unlike [`Semigroup::reduce_all`], an empty sequence yields
    /// `Self::empty()`.
    ///
    /// ```rust
    /// use algebox::typeclass::{Monoid, Product};
    ///
    /// assert_eq!(Product::concat_all([Product::new(2), Product::new(5)]), Product::new(10));
    /// assert_eq!(Product::<i32>::concat_all([]), Product::new(1));
    /// ```
    fn concat_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.concat(element)
            })
    }

    /// Returns whether this value is the identity element.
    fn is_empty_value(&self) -> bool
    where
        Self: PartialEq + Sized,
    {
        *self == Self::empty()
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Clone> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

/// `None` is the identity for any inner semigroup, including `First`.
impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

impl Monoid for () {
    fn empty() -> Self {}
}

impl<K, V, H> Monoid for HashMap<K, V, H>
where
    K: Eq + Hash,
    V: Semigroup,
    H: BuildHasher + Default,
{
    fn empty() -> Self {
        Self::default()
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

/// `Sum(0)`, where `0` is the `Default` of the numeric type.
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

/// Types with a multiplicative identity.
pub trait One {
    /// The value `1`.
    const ONE: Self;
}

macro_rules! one_for_numeric {
    ($one:expr => $($numeric:ty),* $(,)?) => {
        $(
            impl One for $numeric {
                const ONE: Self = $one;
            }
        )*
    };
}

one_for_numeric!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
one_for_numeric!(1.0 => f32, f64);

/// `Product(1)`.
impl<A: Mul<Output = A> + One> Monoid for Product<A> {
    fn empty() -> Self {
        Self(A::ONE)
    }
}

impl Monoid for All {
    fn empty() -> Self {
        Self(true)
    }
}

impl Monoid for Any {
    fn empty() -> Self {
        Self(false)
    }
}

/// `Max(A::MIN_VALUE)`; `-infinity` for floats.
impl<A: PartialOrd + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

/// `Min(A::MAX_VALUE)`; `+infinity` for floats.
impl<A: PartialOrd + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}

impl<A: Monoid, B: Monoid> Monoid for Pair<A, B> {
    fn empty() -> Self {
        Self(A::empty(), B::empty())
    }
}

/// The function that ignores its argument and returns `S::empty()`.
impl<A, S> Monoid for Pointwise<A, S>
where
    A: Clone + 'static,
    S: Monoid + 'static,
{
    fn empty() -> Self {
        Self::new(|_| S::empty())
    }
}
