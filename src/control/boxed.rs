//! The eager identity container.
//!
//! `Boxed<A>` holds exactly one value. `map` applies a function at once and
//! returns a new `Boxed`; `fold` applies a final function and hands back a
//! plain value. There is no failure state: a panic inside a mapped
//! function propagates to the caller.
//!
//! # Examples
//!
//! ```rust
//! use algebox::control::Boxed;
//!
//! fn money_to_float(text: &str) -> Boxed<f64> {
//!     Boxed::new(text.replace('$', "")).map(|cleaned| cleaned.parse().unwrap_or(0.0))
//! }
//!
//! fn percent_to_float(text: &str) -> Boxed<f64> {
//!     Boxed::new(text.replace('%', ""))
//!         .map(|cleaned| cleaned.parse::<f64>().unwrap_or(0.0))
//!         .map(|number| number * 0.01)
//! }
//!
//! let price = money_to_float("$5.00")
//!     .fold(|cost| percent_to_float("20%").fold(|savings| cost - cost * savings));
//! assert!((price - 4.0).abs() < f64::EPSILON);
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// A container for exactly one immutable value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Boxed<A>(A);

impl<A> Boxed<A> {
    /// Wraps a value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Alias for [`new`](Boxed::new), the applicative `pure`.
    #[inline]
    pub const fn of(value: A) -> Self {
        Self(value)
    }

    /// Applies `function` to the value and wraps the result.
    #[inline]
    pub fn map<B, F>(self, function: F) -> Boxed<B>
    where
        F: FnOnce(A) -> B,
    {
        Boxed(function(self.0))
    }

    /// Applies a function that already returns a `Boxed`, without nesting.
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Boxed<B>
    where
        F: FnOnce(A) -> Boxed<B>,
    {
        function(self.0)
    }

    /// Applies `function` to the value and returns the plain result.
    #[inline]
    pub fn fold<R, F>(self, function: F) -> R
    where
        F: FnOnce(A) -> R,
    {
        function(self.0)
    }

    /// Consumes the container and returns the value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<F> Boxed<F> {
    /// Applies the wrapped function to a wrapped argument.
    ///
    /// `Boxed::new(f).ap(Boxed::new(x)) == Boxed::new(x).map(f)`.
    ///
    /// ```rust
    /// use algebox::control::Boxed;
    ///
    /// let add = |x: i32| move |y: i32| x + y;
    /// assert_eq!(Boxed::new(add).ap(Boxed::new(2)).ap(Boxed::new(3)), Boxed::new(5));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, argument: Boxed<A>) -> Boxed<B>
    where
        F: FnOnce(A) -> B,
    {
        argument.map(self.0)
    }
}

impl<A> Boxed<Boxed<A>> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Boxed<A> {
        self.0
    }
}

impl<A: fmt::Debug> fmt::Debug for Boxed<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Boxed").field(&self.0).finish()
    }
}

impl<A> From<A> for Boxed<A> {
    fn from(value: A) -> Self {
        Self(value)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Boxed<A> {
    type Inner = A;
    type WithType<B> = Boxed<B>;
}

impl<A> Functor for Boxed<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Boxed<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Boxed<B>
    where
        F: FnOnce(&A) -> B,
    {
        Boxed(function(&self.0))
    }
}

impl<A> Applicative for Boxed<A> {
    #[inline]
    fn pure<B>(value: B) -> Boxed<B> {
        Boxed(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Boxed<B>, function: F) -> Boxed<C>
    where
        F: FnOnce(A, B) -> C,
    {
        Boxed(function(self.0, other.0))
    }

    #[inline]
    fn map3<B, C, D, F>(self, second: Boxed<B>, third: Boxed<C>, function: F) -> Boxed<D>
    where
        F: FnOnce(A, B, C) -> D,
    {
        Boxed(function(self.0, second.0, third.0))
    }

    #[inline]
    fn apply<B, Output>(self, other: Boxed<B>) -> Boxed<Output>
    where
        A: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<A> Monad for Boxed<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Boxed<B>
    where
        F: FnOnce(A) -> Boxed<B>,
    {
        self.chain(function)
    }
}

impl<A: Semigroup> Semigroup for Boxed<A> {
    fn concat(self, other: Self) -> Self {
        Self(self.0.concat(other.0))
    }
}

impl<A: Monoid> Monoid for Boxed<A> {
    fn empty() -> Self {
        Self(A::empty())
    }
}
