//! Applicative type class - applying functions within contexts.
//!
//! `Applicative` extends `Functor` with:
//!
//! - Lifting a plain value into the context (`pure`)
//! - Applying a wrapped function to a wrapped value (`apply`)
//! - Combining independent wrapped values with a plain function (`map2`,
//!   `map3`, and the free functions [`lift_a2`] / [`lift_a3`])
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Map Consistency
//!
//! ```text
//! fa.fmap(f) == pure(f).apply(fa)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{Applicative, lift_a2};
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = lift_a2(|a: i32, b: i32| a + b, Some(1), Some(2));
//! assert_eq!(sum, Some(3));
//! ```

use super::functor::Functor;

/// A type class for functors that can combine independent computations.
pub trait Applicative: Functor {
    /// Lifts a plain value into the context.
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Combines two wrapped values with a plain binary function.
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C;

    /// Combines three wrapped values with a plain ternary function.
    fn map3<B, C, D, F>(
        self,
        second: Self::WithType<B>,
        third: Self::WithType<C>,
        function: F,
    ) -> Self::WithType<D>
    where
        F: FnOnce(Self::Inner, B, C) -> D;

    /// Pairs two wrapped values.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the wrapped function held by `self` to the wrapped `other`.
    ///
    /// When both sides can fail, the failure of `self` takes precedence.
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output;
}

/// Lifts a binary function over two independently computed contexts.
///
/// Equivalent to `first.fmap(curried function).apply(second)`.
///
/// ```rust
/// use algebox::typeclass::lift_a2;
///
/// assert_eq!(lift_a2(|a: i32, b: i32| a * b, Some(6), Some(7)), Some(42));
/// assert_eq!(lift_a2(|a: i32, b: i32| a * b, Some(6), None), None);
/// ```
#[inline]
pub fn lift_a2<FA, B, C, F>(function: F, first: FA, second: FA::WithType<B>) -> FA::WithType<C>
where
    FA: Applicative,
    F: FnOnce(FA::Inner, B) -> C,
{
    first.map2(second, function)
}

/// Lifts a ternary function over three independently computed contexts.
#[inline]
pub fn lift_a3<FA, B, C, D, F>(
    function: F,
    first: FA,
    second: FA::WithType<B>,
    third: FA::WithType<C>,
) -> FA::WithType<D>
where
    FA: Applicative,
    F: FnOnce(FA::Inner, B, C) -> D,
{
    first.map3(second, third, function)
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B> {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Option<B>, third: Option<C>, function: F) -> Option<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        match (self, second, third) {
            (Some(a), Some(b), Some(c)) => Some(function(a, b, c)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.map2(other, |function, value| function(value))
    }
}
