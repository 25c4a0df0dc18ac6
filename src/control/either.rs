//! Either type - success or failure as an ordinary value.
//!
//! `Either<L, R>` is `Right(R)` on success and `Left(L)` on failure. It is
//! right-biased: `map`, `chain`, and `ap` transform a `Right` and pass a
//! `Left` through untouched, so the first failure short-circuits the rest of
//! a pipeline. `fold` is the exhaustive way out: exactly one of its two
//! functions runs, exactly once.
//!
//! Two bridges lead into this world:
//!
//! - [`from_nullable`] turns an `Option` into an `Either<(), A>`
//! - [`try_catch`] runs a closure and turns a panic into a `Left`
//!   ([`try_result`] does the same for `Result`-returning code)
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use algebox::control::{Either, from_nullable};
//!
//! let colors = HashMap::from([("red", "#ff0000"), ("blue", "#0000ff")]);
//! let find_color = |name: &str| from_nullable(colors.get(name).copied());
//!
//! let hex = |name: &str| {
//!     find_color(name)
//!         .map(|found| &found[1..])
//!         .fold(|()| String::from("color not found"), str::to_uppercase)
//! };
//! assert_eq!(hex("blue"), "0000FF");
//! assert_eq!(hex("yellow"), "color not found");
//! ```

use std::fmt;
use std::ops::ControlFlow;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::error::CaughtPanic;
use crate::typeclass::{Applicative, Functor, Monad, Monoid, Semigroup, TypeConstructor};

/// A value that is either a failure `Left(L)` or a success `Right(R)`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a success value. The applicative `pure`.
    #[inline]
    pub const fn of(value: R) -> Self {
        Self::Right(value)
    }

    /// Takes the `Some` value as a success, or `left` on `None`.
    #[inline]
    pub fn from_option_or(value: Option<R>, left: L) -> Self {
        value.map_or(Self::Left(left), Self::Right)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows both sides.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Returns the right value or computes one from the left.
    #[inline]
    pub fn unwrap_or_else<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        self.fold(function, |value| value)
    }

    // =========================================================================
    // Right-biased Composition
    // =========================================================================

    /// Transforms the success value; a `Left` passes through.
    ///
    /// ```rust
    /// use algebox::control::Either;
    ///
    /// let right: Either<&str, i32> = Either::Right(2);
    /// assert_eq!(right.map(|x| x + 1).map(|x| x * 2), Either::Right(6));
    ///
    /// let left: Either<i32, i32> = Either::Left(2);
    /// assert_eq!(left.map(|x| x + 1), Either::Left(2));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Sequences a step that can itself fail; a `Left` passes through.
    ///
    /// `Right(a).chain(f) == f(a)`. Use this instead of `map` whenever the
    /// function returns an `Either`, otherwise the result nests.
    ///
    /// ```rust
    /// use algebox::control::{Either, try_result};
    ///
    /// fn port(config: &str) -> Either<String, u16> {
    ///     Either::of(config)
    ///         .chain(|text| try_result(|| text.trim().parse::<u16>()).map_left(|e| e.to_string()))
    /// }
    /// assert_eq!(port(" 8888 "), Either::Right(8888));
    /// assert!(port("not a port").is_left());
    /// ```
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Eliminates the `Either`, running exactly one of the two functions.
    ///
    /// ```rust
    /// use algebox::control::Either;
    ///
    /// let left: Either<i32, i32> = Either::Left(2);
    /// assert_eq!(left.fold(|_| "error", |_| "ok"), "error");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Left and Both-sided Operations
    // =========================================================================

    /// Transforms the failure value; a `Right` passes through.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms whichever side is present.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    /// Swaps the two variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L, F> Either<L, F> {
    /// Applies a wrapped function to a wrapped argument.
    ///
    /// The first `Left` wins: if `self` is a `Left` it is returned, otherwise
    /// a `Left` argument is returned. This lifts multi-argument functions
    /// across independently computed values.
    ///
    /// ```rust
    /// use algebox::control::Either;
    ///
    /// let screen = |head: i32| move |foot: i32| 800 - (head + foot);
    /// let size: Either<(), i32> = Either::of(screen).ap(Either::of(10)).ap(Either::of(10));
    /// assert_eq!(size, Either::Right(780));
    /// ```
    #[inline]
    pub fn ap<A, B>(self, argument: Either<L, A>) -> Either<L, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(function) => argument.map(function),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting, keeping the outer `Left` first.
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Bridges
// =============================================================================

/// Turns an optional value into an `Either`: `None` becomes `Left(())`.
///
/// ```rust
/// use algebox::control::{Either, from_nullable};
///
/// assert_eq!(from_nullable(Some(5)), Either::Right(5));
/// assert!(from_nullable(None::<i32>).is_left());
/// ```
#[inline]
pub fn from_nullable<A>(value: Option<A>) -> Either<(), A> {
    Either::from_option_or(value, ())
}

/// Runs `thunk`, capturing a panic as `Left`.
///
/// A normal return becomes `Right`. A panic is caught, logged at `debug`
/// level, and returned as `Left(CaughtPanic)` carrying the panic message;
/// from there on the failure composes like any other `Left`. The process
/// panic hook still runs, so the message is also printed to stderr unless
/// the caller has installed a quieter hook.
///
/// ```rust
/// use algebox::control::try_catch;
///
/// assert_eq!(try_catch(|| 42).fold(|error| error.to_string(), |v| v.to_string()), "42");
/// ```
pub fn try_catch<A, F>(thunk: F) -> Either<CaughtPanic, A>
where
    F: FnOnce() -> A,
{
    match catch_unwind(AssertUnwindSafe(thunk)) {
        Ok(value) => Either::Right(value),
        Err(payload) => {
            let caught = CaughtPanic::from_payload(payload.as_ref());
            tracing::debug!(message = caught.message(), "try_catch captured a panic");
            Either::Left(caught)
        }
    }
}

/// Runs a `Result`-returning `thunk`, turning `Err` into `Left`.
#[inline]
pub fn try_result<A, E, F>(thunk: F) -> Either<E, A>
where
    F: FnOnce() -> Result<A, E>,
{
    Either::from(thunk())
}

/// Maps each item into an `Either` of a semigroup and folds, stopping at
/// the first `Left`.
///
/// The result equals folding with [`Either`]'s own `concat` seeded with
/// `identity`, but `into` is not called for items after the first `Left`.
///
/// ```rust
/// use algebox::control::{Either, fold_map_either, from_nullable};
/// use algebox::typeclass::{Monoid, Sum};
///
/// let views = [Some(40), Some(10), Some(4)];
/// let total = fold_map_either(views, |v| from_nullable(v).map(Sum::new), Either::of(Sum::empty()));
/// assert_eq!(total, Either::Right(Sum::new(54)));
///
/// let views = [Some(40), Some(10), None];
/// let total = fold_map_either(views, |v| from_nullable(v).map(Sum::new), Either::of(Sum::empty()));
/// assert_eq!(total, Either::Left(()));
/// ```
pub fn fold_map_either<D, E, K, I, F>(items: I, mut into: F, identity: Either<E, K>) -> Either<E, K>
where
    K: Semigroup,
    I: IntoIterator<Item = D>,
    F: FnMut(D) -> Either<E, K>,
{
    let Either::Right(seed) = identity else {
        return identity;
    };
    let folded = items.into_iter().try_fold(seed, |accumulator, item| match into(item) {
        Either::Right(value) => ControlFlow::Continue(accumulator.concat(value)),
        Either::Left(error) => ControlFlow::Break(error),
    });
    match folded {
        ControlFlow::Continue(value) => Either::Right(value),
        ControlFlow::Break(error) => Either::Left(error),
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, `Err(e)` becomes `Left(e)`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right(r)` becomes `Ok(r)`, `Left(l)` becomes `Err(l)`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        either.fold(Err, Ok)
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L: Clone, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<L, B>
    where
        F: FnOnce(&R) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L: Clone, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B> {
        Either::Right(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
    where
        F: FnOnce(R, B) -> C,
    {
        match (self, other) {
            (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn map3<B, C, D, F>(
        self,
        second: Either<L, B>,
        third: Either<L, C>,
        function: F,
    ) -> Either<L, D>
    where
        F: FnOnce(R, B, C) -> D,
    {
        match (self, second, third) {
            (Self::Right(a), Either::Right(b), Either::Right(c)) => {
                Either::Right(function(a, b, c))
            }
            (Self::Left(error), _, _)
            | (_, Either::Left(error), _)
            | (_, _, Either::Left(error)) => Either::Left(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: FnOnce(B) -> Output,
    {
        self.ap(other)
    }
}

impl<L: Clone, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: FnOnce(R) -> Either<L, B>,
    {
        self.chain(function)
    }
}

/// `Right(a).concat(Right(b)) == Right(a.concat(b))`; otherwise the first
/// `Left` wins.
impl<L, R: Semigroup> Semigroup for Either<L, R> {
    fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Self::Right(left), Self::Right(right)) => Self::Right(left.concat(right)),
            (Self::Left(error), _) | (_, Self::Left(error)) => Self::Left(error),
        }
    }
}

/// `Right(R::empty())`.
impl<L, R: Monoid> Monoid for Either<L, R> {
    fn empty() -> Self {
        Self::Right(R::empty())
    }
}
