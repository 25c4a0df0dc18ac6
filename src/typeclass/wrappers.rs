//! Value wrappers that select one algebraic operation for a plain value.
//!
//! The same `i32` can be combined by addition ([`Sum`]) or multiplication
//! ([`Product`]); the same `bool` by conjunction ([`All`]) or disjunction
//! ([`Any`]). The wrapper type picks the `Semigroup` / `Monoid` instance.
//!
//! # Available Wrappers
//!
//! | Wrapper        | `concat`              | `empty`                 |
//! |----------------|-----------------------|-------------------------|
//! | [`Sum`]        | `a + b`               | `0`                     |
//! | [`Product`]    | `a * b`               | `1`                     |
//! | [`All`]        | `a && b`              | `true`                  |
//! | [`Any`]        | `a \|\| b`            | `false`                 |
//! | [`Max`]        | larger of the two     | `Bounded::MIN_VALUE`    |
//! | [`Min`]        | smaller of the two    | `Bounded::MAX_VALUE`    |
//! | [`First`]      | keeps the left        | none (Semigroup only)   |
//! | [`Last`]       | keeps the right       | none (Semigroup only)   |
//! | [`Pair`]       | element-wise          | both identities         |
//! | [`Pointwise`]  | combines results      | constant identity       |

use std::fmt;
use std::rc::Rc;

macro_rules! newtype_accessors {
    ($wrapper:ident) => {
        impl<A> $wrapper<A> {
            #[doc = concat!("Creates a new `", stringify!($wrapper), "` wrapping the given value.")]
            #[inline]
            pub const fn new(value: A) -> Self {
                Self(value)
            }

            #[doc = concat!("Consumes the `", stringify!($wrapper), "` and returns the inner value.")]
            #[inline]
            pub fn into_inner(self) -> A {
                self.0
            }

            /// Returns a reference to the inner value.
            #[inline]
            pub const fn as_inner(&self) -> &A {
                &self.0
            }
        }

        impl<A> From<A> for $wrapper<A> {
            fn from(value: A) -> Self {
                Self::new(value)
            }
        }
    };
}

// =============================================================================
// Numeric Wrappers
// =============================================================================

/// The additive semigroup/monoid.
///
/// ```rust
/// use algebox::typeclass::{Monoid, Semigroup, Sum};
///
/// assert_eq!(Sum::new(1).concat(Sum::new(2)), Sum::new(3));
/// assert_eq!(Sum::<i32>::empty(), Sum::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Sum<A>(pub A);

newtype_accessors!(Sum);

/// The multiplicative semigroup/monoid.
///
/// No `Default`: the default of a number is `0`,
/// while the identity of multiplication is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Product<A>(pub A);

newtype_accessors!(Product);

/// Keeps the larger of two values.
///
/// Works over `PartialOrd`, so `Max<f64>` is available with `-infinity` as
/// its identity. An incomparable pair (a `NaN`) keeps the left operand.
///
/// ```rust
/// use algebox::typeclass::{Max, Monoid, Semigroup};
///
/// assert_eq!(Max::new(3).concat(Max::new(5)), Max::new(5));
/// assert_eq!(Max::<f64>::empty(), Max::new(f64::NEG_INFINITY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Max<A>(pub A);

newtype_accessors!(Max);

/// Keeps the smaller of two values.
///
/// Works over `PartialOrd`; `Min<f64>` has `+infinity` as its identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Min<A>(pub A);

newtype_accessors!(Min);

// =============================================================================
// Boolean Wrappers
// =============================================================================

/// Boolean conjunction. Identity: `All(true)`.
///
/// ```rust
/// use algebox::typeclass::{All, Semigroup};
///
/// assert_eq!(All::new(true).concat(All::new(false)), All::new(false));
/// assert_eq!(All::new(true).concat(All::new(true)), All::new(true));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct All(pub bool);

/// Boolean disjunction. Identity: `Any(false)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Any(pub bool);

impl All {
    /// Creates a new `All`.
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Returns the wrapped boolean.
    #[inline]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

impl Any {
    /// Creates a new `Any`.
    #[inline]
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    /// Returns the wrapped boolean.
    #[inline]
    pub const fn into_inner(self) -> bool {
        self.0
    }
}

impl From<bool> for All {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

impl From<bool> for Any {
    fn from(value: bool) -> Self {
        Self(value)
    }
}

// =============================================================================
// Selection Wrappers
// =============================================================================

/// Keeps the left operand and discards the right one.
///
/// `First` is a lawful semigroup but has no two-sided identity: no value `e`
/// satisfies `e.concat(x) == x` for every `x`, because `concat` always
/// returns `e`. It therefore does not implement [`Monoid`](super::Monoid).
/// Fold a sequence of `First` with
/// [`Semigroup::reduce_all`](super::Semigroup::reduce_all), which reports an
/// empty sequence as `None`, or use
/// [`FirstRight`](crate::control::FirstRight) when a monoid is required.
///
/// ```rust
/// use algebox::typeclass::{First, Semigroup};
///
/// let name = First::new("blah").concat(First::new("rest")).concat(First::new("in peace"));
/// assert_eq!(name, First::new("blah"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct First<A>(pub A);

newtype_accessors!(First);

/// Keeps the right operand. Semigroup only, for the same reason as [`First`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Last<A>(pub A);

newtype_accessors!(Last);

// =============================================================================
// Product Construction
// =============================================================================

/// Two semigroups combined element-wise.
///
/// ```rust
/// use algebox::typeclass::{All, Pair, Semigroup, Sum};
///
/// let left = Pair::new(Sum::new(10), All::new(true));
/// let right = Pair::new(Sum::new(20), All::new(false));
/// assert_eq!(left.concat(right), Pair::new(Sum::new(30), All::new(false)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pair<A, B>(pub A, pub B);

impl<A, B> Pair<A, B> {
    /// Creates a pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self(first, second)
    }

    /// Returns the first component.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.0
    }

    /// Returns the second component.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.1
    }

    /// Splits the pair into a tuple.
    #[inline]
    pub fn into_inner(self) -> (A, B) {
        (self.0, self.1)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self(first, second)
    }
}

// =============================================================================
// Function Wrapper
// =============================================================================

/// A function into a semigroup, itself a semigroup by combining results.
///
/// `f.concat(g)` is the function `x -> f(x).concat(g(x))`.
///
/// ```rust
/// use algebox::typeclass::{All, Pointwise, Semigroup};
///
/// let has_vowels =
///     Pointwise::new(|word: &'static str| All::new(word.contains(['a', 'e', 'i', 'o', 'u'])));
/// let long_word = Pointwise::new(|word: &'static str| All::new(word.len() >= 5));
/// let both = has_vowels.concat(long_word);
///
/// let words: Vec<_> = ["gym", "bird", "lilac"]
///     .into_iter()
///     .filter(|word| both.run(*word).into_inner())
///     .collect();
/// assert_eq!(words, vec!["lilac"]);
/// ```
pub struct Pointwise<A, S> {
    function: Rc<dyn Fn(A) -> S>,
}

impl<A, S> Pointwise<A, S> {
    /// Wraps a function.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(A) -> S + 'static,
    {
        Self {
            function: Rc::new(function),
        }
    }

    /// Applies the wrapped function.
    pub fn run(&self, argument: A) -> S {
        (self.function)(argument)
    }
}

impl<A, S> Clone for Pointwise<A, S> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
        }
    }
}

impl<A, S> fmt::Debug for Pointwise<A, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Pointwise").field(&"<function>").finish()
    }
}

// =============================================================================
// Bounded Trait
// =============================================================================

/// A trait for types that have minimum and maximum bounds.
///
/// Provides the identity elements of `Max` (`MIN_VALUE`) and `Min`
/// (`MAX_VALUE`). Floats use the infinities.
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! bounded_by_constants {
    ($($numeric:ty),* $(,)?) => {
        $(
            impl Bounded for $numeric {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

bounded_by_constants!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Bounded for f32 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}

impl Bounded for bool {
    const MIN_VALUE: Self = false;
    const MAX_VALUE: Self = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn sum_accessors() {
        let sum = Sum::new(42);
        assert_eq!(sum.as_inner(), &42);
        assert_eq!(sum.into_inner(), 42);
    }

    #[rstest]
    fn sum_default_is_zero() {
        assert_eq!(Sum::<i32>::default(), Sum::new(0));
    }

    #[rstest]
    fn wrappers_convert_from_inner() {
        let product: Product<i32> = 3.into();
        let max: Max<u8> = 7.into();
        let all: All = true.into();
        let any: Any = false.into();
        assert_eq!(product, Product::new(3));
        assert_eq!(max, Max::new(7));
        assert_eq!(all, All::new(true));
        assert_eq!(any, Any::new(false));
    }

    #[rstest]
    fn pair_components() {
        let pair = Pair::new(Sum::new(1), First::new("a"));
        assert_eq!(pair.first(), &Sum::new(1));
        assert_eq!(pair.second(), &First::new("a"));
        assert_eq!(pair.into_inner(), (Sum::new(1), First::new("a")));
        assert_eq!(Pair::from((1, 2)), Pair::new(1, 2));
    }

    #[rstest]
    fn pointwise_runs_wrapped_function() {
        let length = Pointwise::new(|text: &str| Sum::new(text.len()));
        assert_eq!(length.run("four"), Sum::new(4));
        assert_eq!(length.clone().run("five!"), Sum::new(5));
        assert_eq!(format!("{length:?}"), "Pointwise(\"<function>\")");
    }

    #[rstest]
    #[case(i32::MIN_VALUE, i32::MIN)]
    #[case(i32::MAX_VALUE, i32::MAX)]
    fn bounded_integers(#[case] bound: i32, #[case] expected: i32) {
        assert_eq!(bound, expected);
    }

    #[rstest]
    fn bounded_floats_are_infinite() {
        assert!(f64::MIN_VALUE.is_infinite() && f64::MIN_VALUE.is_sign_negative());
        assert!(f64::MAX_VALUE.is_infinite() && f64::MAX_VALUE.is_sign_positive());
    }
}
