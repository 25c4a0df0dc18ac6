//! Folding sequences of semigroup values into one.
//!
//! [`fold`] reduces values that are already wrapped; [`fold_map`] wraps
//! plain items on the way. Both take the identity element explicitly, so a
//! caller may seed them with any starting value (the identity of a
//! `Monoid` being the usual choice), and both return it unchanged for an
//! empty sequence.
//!
//! Any `IntoIterator` is a sequence: arrays, `Vec`s, or the values of a
//! `HashMap`.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use algebox::typeclass::{fold, fold_map, Monoid, Sum};
//!
//! let scores = HashMap::from([("brian", 3), ("sarah", 5)]);
//! assert_eq!(fold_map(scores.into_values(), Sum::new, Sum::empty()), Sum::new(8));
//!
//! let wrapped = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(fold(wrapped, Sum::empty()), Sum::new(6));
//! ```

use super::semigroup::Semigroup;

/// Reduces `items` left to right with `concat`, seeded with `identity`.
///
/// `fold([a, b, c], e) == e.concat(a).concat(b).concat(c)`.
#[inline]
pub fn fold<K, I>(items: I, identity: K) -> K
where
    K: Semigroup,
    I: IntoIterator<Item = K>,
{
    items
        .into_iter()
        .fold(identity, |accumulator, element| accumulator.concat(element))
}

/// Maps each item into `K` and reduces left to right, in a single pass.
///
/// Equivalent to `fold(items.map(into), identity)`.
#[inline]
pub fn fold_map<D, K, I, F>(items: I, mut into: F, identity: K) -> K
where
    K: Semigroup,
    I: IntoIterator<Item = D>,
    F: FnMut(D) -> K,
{
    items
        .into_iter()
        .fold(identity, |accumulator, element| accumulator.concat(into(element)))
}
