//! Semigroup type class - types with an associative binary operation.
//!
//! A type `T` is a semigroup if there is a function
//! `concat: (T, T) -> T` that is associative.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.concat(b)).concat(c) == a.concat(b.concat(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use algebox::typeclass::{All, First, Semigroup, Sum};
//!
//! assert_eq!(Sum::new(1).concat(Sum::new(2)), Sum::new(3));
//! assert_eq!(All::new(true).concat(All::new(false)), All::new(false));
//! assert_eq!(First::new("blah").concat(First::new("rest")), First::new("blah"));
//! ```

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::ops::{Add, Mul};

use super::wrappers::{All, Any, First, Last, Max, Min, Pair, Pointwise, Product, Sum};

/// A type class for types with an associative binary operation.
///
/// # Laws
///
/// For all `a`, `b`, `c`:
/// ```text
/// (a.concat(b)).concat(c) == a.concat(b.concat(c))
/// ```
pub trait Semigroup {
    /// Combines two values into one. Must be associative.
    #[must_use]
    fn concat(self, other: Self) -> Self;

    /// Combines two values by reference, returning a new value.
    ///
    /// The default implementation clones both operands.
    #[must_use]
    fn concat_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().concat(other.clone())
    }

    /// Combines a value with itself `count` times.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0: a semigroup has no value to return for an
    /// empty combination.
    ///
    /// ```rust
    /// use algebox::typeclass::{Semigroup, Sum};
    ///
    /// assert_eq!(Sum::new(4).concat_n(3), Sum::new(12));
    /// ```
    #[must_use]
    fn concat_n(self, count: usize) -> Self
    where
        Self: Clone,
    {
        assert!(count > 0, "concat_n requires count > 0");

        (1..count).fold(self.clone(), |accumulator, _| {
            accumulator.concat(self.clone())
        })
    }

    /// Reduces a sequence with `concat`, without an identity element.
    ///
    /// Returns `None` for an empty sequence. For a version that returns the
    /// identity instead, see [`Monoid::concat_all`](super::Monoid::concat_all).
    ///
    /// ```rust
    /// use algebox::typeclass::{First, Semigroup};
    ///
    /// assert_eq!(First::reduce_all([First::new(1), First::new(2)]), Some(First::new(1)));
    /// assert_eq!(First::<i32>::reduce_all([]), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.concat(element))
    }
}

// =============================================================================
// Standard Library Implementations
// =============================================================================

impl Semigroup for String {
    fn concat(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn concat_ref(&self, other: &Self) -> Self {
        let mut result = Self::with_capacity(self.len() + other.len());
        result.push_str(self);
        result.push_str(other);
        result
    }
}

impl<T: Clone> Semigroup for Vec<T> {
    fn concat(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `None` is absorbed: `Some(a).concat(None) == Some(a)`.
impl<T: Semigroup> Semigroup for Option<T> {
    fn concat(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.concat(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl Semigroup for () {
    fn concat(self, _other: Self) -> Self {}
}

/// Key-wise union; values under a shared key are concatenated, left first.
///
/// ```rust
/// use std::collections::HashMap;
/// use algebox::typeclass::{Semigroup, Sum};
///
/// let first = HashMap::from([("points", Sum::new(10)), ("bonus", Sum::new(1))]);
/// let second = HashMap::from([("points", Sum::new(20))]);
/// let merged = first.concat(second);
/// assert_eq!(merged["points"], Sum::new(30));
/// assert_eq!(merged["bonus"], Sum::new(1));
/// ```
impl<K, V, H> Semigroup for HashMap<K, V, H>
where
    K: Eq + Hash,
    V: Semigroup,
    H: BuildHasher,
{
    fn concat(mut self, other: Self) -> Self {
        for (key, value) in other {
            let merged = match self.remove(&key) {
                Some(existing) => existing.concat(value),
                None => value,
            };
            self.insert(key, merged);
        }
        self
    }
}

// =============================================================================
// Wrapper Implementations
// =============================================================================

/// Sum forms a semigroup under addition.
impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn concat(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Product forms a semigroup under multiplication.
impl<A: Mul<Output = A>> Semigroup for Product<A> {
    fn concat(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl Semigroup for All {
    fn concat(self, other: Self) -> Self {
        Self(self.0 && other.0)
    }
}

impl Semigroup for Any {
    fn concat(self, other: Self) -> Self {
        Self(self.0 || other.0)
    }
}

/// Max keeps the left operand on ties and on incomparable pairs.
impl<A: PartialOrd> Semigroup for Max<A> {
    fn concat(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

/// Min keeps the left operand on ties and on incomparable pairs.
impl<A: PartialOrd> Semigroup for Min<A> {
    fn concat(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}

impl<A> Semigroup for First<A> {
    fn concat(self, _other: Self) -> Self {
        self
    }
}

impl<A> Semigroup for Last<A> {
    fn concat(self, other: Self) -> Self {
        other
    }
}

impl<A: Semigroup, B: Semigroup> Semigroup for Pair<A, B> {
    fn concat(self, other: Self) -> Self {
        Self(self.0.concat(other.0), self.1.concat(other.1))
    }
}

impl<A, S> Semigroup for Pointwise<A, S>
where
    A: Clone + 'static,
    S: Semigroup + 'static,
{
    fn concat(self, other: Self) -> Self {
        Self::new(move |argument: A| self.run(argument.clone()).concat(other.run(argument)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Standard Library Tests
    // =========================================================================

    #[rstest]
    fn string_concat_appends() {
        assert_eq!(
            String::from("Hello, ").concat(String::from("World!")),
            "Hello, World!"
        );
    }

    #[rstest]
    fn string_concat_ref_preserves_originals() {
        let left = String::from("Hello, ");
        let right = String::from("World!");
        assert_eq!(left.concat_ref(&right), "Hello, World!");
        assert_eq!(left, "Hello, ");
        assert_eq!(right, "World!");
    }

    #[rstest]
    fn vec_concat_appends() {
        assert_eq!(vec![1, 2].concat(vec![3]), vec![1, 2, 3]);
    }

    #[rstest]
    #[case(Some(Sum::new(1)), Some(Sum::new(2)), Some(Sum::new(3)))]
    #[case(Some(Sum::new(1)), None, Some(Sum::new(1)))]
    #[case(None, Some(Sum::new(2)), Some(Sum::new(2)))]
    #[case(None, None, None)]
    fn option_concat(
        #[case] left: Option<Sum<i32>>,
        #[case] right: Option<Sum<i32>>,
        #[case] expected: Option<Sum<i32>>,
    ) {
        assert_eq!(left.concat(right), expected);
    }

    #[rstest]
    fn hashmap_concat_merges_accounts() {
        let first = HashMap::from([
            ("name", Pair::new(First::new("Pinakin N Mistry"), All::new(true))),
        ]);
        let second = HashMap::from([
            ("name", Pair::new(First::new("Pinakin Mistry"), All::new(false))),
        ]);
        let merged = first.concat(second);
        assert_eq!(
            merged["name"],
            Pair::new(First::new("Pinakin N Mistry"), All::new(false))
        );
    }

    // =========================================================================
    // Wrapper Tests
    // =========================================================================

    #[rstest]
    fn sum_chain_yields_six() {
        let total = Sum::new(1).concat(Sum::new(2)).concat(Sum::new(3));
        assert_eq!(total.into_inner(), 6);
    }

    #[rstest]
    #[case(3, 5, 15)]
    #[case(42, 1, 42)]
    #[case(42, 0, 0)]
    fn product_concat_multiplies(#[case] left: i32, #[case] right: i32, #[case] expected: i32) {
        assert_eq!(Product::new(left).concat(Product::new(right)), Product::new(expected));
    }

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, false)]
    #[case(false, true, false)]
    #[case(false, false, false)]
    fn all_is_conjunction(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        assert_eq!(All::new(left).concat(All::new(right)), All::new(expected));
    }

    #[rstest]
    #[case(true, true, true)]
    #[case(true, false, true)]
    #[case(false, true, true)]
    #[case(false, false, false)]
    fn any_is_disjunction(#[case] left: bool, #[case] right: bool, #[case] expected: bool) {
        assert_eq!(Any::new(left).concat(Any::new(right)), Any::new(expected));
    }

    #[rstest]
    #[case(3, 5, 5)]
    #[case(5, 3, 5)]
    #[case(-10, -3, -3)]
    fn max_takes_larger(#[case] left: i32, #[case] right: i32, #[case] expected: i32) {
        assert_eq!(Max::new(left).concat(Max::new(right)), Max::new(expected));
    }

    #[rstest]
    #[case(3, 5, 3)]
    #[case(5, 3, 3)]
    #[case(-10, -3, -10)]
    fn min_takes_smaller(#[case] left: i32, #[case] right: i32, #[case] expected: i32) {
        assert_eq!(Min::new(left).concat(Min::new(right)), Min::new(expected));
    }

    #[rstest]
    fn max_over_floats() {
        assert_eq!(Max::new(1.5).concat(Max::new(2.5)), Max::new(2.5));
    }

    #[rstest]
    fn first_keeps_left_last_keeps_right() {
        assert_eq!(First::new("blah").concat(First::new("rest")), First::new("blah"));
        assert_eq!(Last::new("blah").concat(Last::new("rest")), Last::new("rest"));
    }

    #[rstest]
    fn pair_concats_element_wise() {
        let left = Pair::new(Sum::new(10), Max::new(1));
        let right = Pair::new(Sum::new(20), Max::new(7));
        assert_eq!(left.concat(right), Pair::new(Sum::new(30), Max::new(7)));
    }

    #[rstest]
    fn pointwise_concat_combines_results() {
        let has_vowels =
            Pointwise::new(|word: &'static str| Any::new(word.contains(['a', 'e', 'i', 'o', 'u'])));
        let long_word = Pointwise::new(|word: &'static str| Any::new(word.len() >= 5));
        let either = has_vowels.concat(long_word);

        let kept: Vec<_> = ["gym", "bird", "lilac"]
            .into_iter()
            .filter(|word| either.run(*word).into_inner())
            .collect();
        assert_eq!(kept, vec!["bird", "lilac"]);
    }

    // =========================================================================
    // Provided Method Tests
    // =========================================================================

    #[rstest]
    fn concat_n_repeats() {
        assert_eq!(String::from("ab").concat_n(3), "ababab");
        assert_eq!(Sum::new(7).concat_n(1), Sum::new(7));
    }

    #[rstest]
    #[should_panic(expected = "concat_n requires count > 0")]
    fn concat_n_zero_panics() {
        let _ = Sum::new(1).concat_n(0);
    }

    #[rstest]
    fn reduce_all_empty_is_none() {
        let empty: Vec<Sum<i32>> = Vec::new();
        assert_eq!(Sum::reduce_all(empty), None);
    }

    #[rstest]
    fn reduce_all_combines_left_to_right() {
        assert_eq!(
            Last::reduce_all([Last::new(1), Last::new(2), Last::new(3)]),
            Some(Last::new(3))
        );
    }
}
