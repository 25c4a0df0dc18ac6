//! The monoid of the first successful value.

use super::either::{Either, from_nullable};
use crate::typeclass::{Monoid, Semigroup, fold_map};

/// Wraps an `Either<(), A>` so that `concat` keeps the first `Right`.
///
/// Unlike [`First`](crate::typeclass::First) this has an identity element,
/// `Left(())`, standing for "nothing found yet".
///
/// # Examples
///
/// ```rust
/// use algebox::control::{Either, FirstRight};
/// use algebox::typeclass::{Monoid, Semigroup};
///
/// let found = FirstRight::empty()
///     .concat(FirstRight::none())
///     .concat(FirstRight::some(5))
///     .concat(FirstRight::some(6));
/// assert_eq!(found.into_inner(), Either::Right(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FirstRight<A>(Either<(), A>);

impl<A> FirstRight<A> {
    /// Wraps an existing `Either`.
    #[inline]
    pub const fn new(value: Either<(), A>) -> Self {
        Self(value)
    }

    /// A found value.
    #[inline]
    pub const fn some(value: A) -> Self {
        Self(Either::Right(value))
    }

    /// Nothing found.
    #[inline]
    pub const fn none() -> Self {
        Self(Either::Left(()))
    }

    /// Unwraps the inner `Either`.
    #[inline]
    pub fn into_inner(self) -> Either<(), A> {
        self.0
    }
}

impl<A> From<Option<A>> for FirstRight<A> {
    fn from(value: Option<A>) -> Self {
        Self(from_nullable(value))
    }
}

impl<A> Semigroup for FirstRight<A> {
    fn concat(self, other: Self) -> Self {
        if self.0.is_right() { self } else { other }
    }
}

impl<A> Monoid for FirstRight<A> {
    fn empty() -> Self {
        Self::none()
    }
}

/// Returns the first item satisfying `predicate` as `Right`, or `Left(())`.
///
/// ```rust
/// use algebox::control::{Either, find};
///
/// assert_eq!(find([3, 4, 5, 6, 7], |x| *x > 4), Either::Right(5));
/// assert_eq!(find([1, 2], |x| *x > 4), Either::Left(()));
/// ```
pub fn find<A, I, P>(items: I, mut predicate: P) -> Either<(), A>
where
    I: IntoIterator<Item = A>,
    P: FnMut(&A) -> bool,
{
    fold_map(
        items,
        |item| {
            if predicate(&item) {
                FirstRight::some(item)
            } else {
                FirstRight::none()
            }
        },
        FirstRight::empty(),
    )
    .into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FirstRight::some(1), FirstRight::some(2), FirstRight::some(1))]
    #[case(FirstRight::none(), FirstRight::some(2), FirstRight::some(2))]
    #[case(FirstRight::some(1), FirstRight::none(), FirstRight::some(1))]
    #[case(FirstRight::none(), FirstRight::none(), FirstRight::none())]
    fn concat_keeps_first_right(
        #[case] left: FirstRight<i32>,
        #[case] right: FirstRight<i32>,
        #[case] expected: FirstRight<i32>,
    ) {
        assert_eq!(left.concat(right), expected);
    }

    #[rstest]
    fn empty_is_identity() {
        assert_eq!(FirstRight::empty().concat(FirstRight::some(3)), FirstRight::some(3));
        assert_eq!(FirstRight::some(3).concat(FirstRight::empty()), FirstRight::some(3));
    }

    #[rstest]
    fn find_returns_first_match() {
        assert_eq!(find([3, 4, 5, 6, 7], |x| *x > 4), Either::Right(5));
    }

    #[rstest]
    fn find_without_match_is_left() {
        assert_eq!(find(Vec::<i32>::new(), |_| true), Either::Left(()));
        assert_eq!(find(["a", "b"], |word| word.len() > 1), Either::Left(()));
    }

    #[rstest]
    fn from_option_maps_to_either() {
        assert_eq!(FirstRight::from(Some('x')), FirstRight::some('x'));
        assert_eq!(FirstRight::<char>::from(None), FirstRight::none());
    }
}
