//! Property-based tests for Applicative and Monad laws.
//!
//! - **Left Identity**: `pure(a).flat_map(f) == f(a)`
//! - **Right Identity**: `m.flat_map(pure) == m`
//! - **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//! - **Applicative Homomorphism**: `pure(f).ap(pure(x)) == pure(f(x))`

use algebox::control::{Boxed, Either};
use algebox::typeclass::{Applicative, Monad, lift_a2};
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn halve(n: i32) -> Either<String, i32> {
    if n % 2 == 0 {
        Either::Right(n / 2)
    } else {
        Either::Left(format!("{n} is odd"))
    }
}

fn positive(n: i32) -> Either<String, i32> {
    if n > 0 {
        Either::Right(n)
    } else {
        Either::Left(String::from("not positive"))
    }
}

// =============================================================================
// Boxed<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_boxed_left_identity(value in any::<i32>()) {
        let function = |n: i32| Boxed::new(n.wrapping_mul(3));
        prop_assert_eq!(Boxed::of(value).chain(function), function(value));
    }

    #[test]
    fn prop_boxed_right_identity(value in any::<i32>()) {
        prop_assert_eq!(Boxed::new(value).flat_map(Boxed::new), Boxed::new(value));
    }

    #[test]
    fn prop_boxed_associativity(value in any::<i32>()) {
        let function1 = |n: i32| Boxed::new(n.wrapping_add(1));
        let function2 = |n: i32| Boxed::new(n.wrapping_mul(2));

        let left = Boxed::new(value).chain(function1).chain(function2);
        let right = Boxed::new(value).chain(|x| function1(x).chain(function2));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_boxed_homomorphism(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_sub(7);
        prop_assert_eq!(Boxed::of(function).ap(Boxed::of(value)), Boxed::of(function(value)));
    }
}

// =============================================================================
// Either<L, R>
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value in any::<i32>()) {
        prop_assert_eq!(Either::of(value).chain(halve), halve(value));
    }

    #[test]
    fn prop_either_right_identity(value in either_strategy()) {
        prop_assert_eq!(value.clone().flat_map(Either::Right), value);
    }

    #[test]
    fn prop_either_associativity(value in either_strategy()) {
        let left = value.clone().chain(halve).chain(positive);
        let right = value.chain(|x| halve(x).chain(positive));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_left_chain_short_circuits(error in any::<String>()) {
        let left: Either<String, i32> = Either::Left(error.clone());
        prop_assert_eq!(left.chain(halve), Either::Left(error));
    }

    #[test]
    fn prop_either_homomorphism(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_sub(7);
        let lifted: Either<String, _> = Either::of(function).ap(Either::of(value));
        prop_assert_eq!(lifted, Either::of(function(value)));
    }

    #[test]
    fn prop_lift_a2_matches_nested_chain(first in either_strategy(), second in either_strategy()) {
        let add = |a: i32, b: i32| a.wrapping_add(b);
        let lifted = lift_a2(add, first.clone(), second.clone());
        let chained = first.chain(|a| second.map(|b| add(a, b)));
        prop_assert_eq!(lifted, chained);
    }

    #[test]
    fn prop_ap_matches_map2(first in either_strategy(), second in either_strategy()) {
        let curried = first.clone().map(|a: i32| move |b: i32| a.wrapping_mul(b));
        prop_assert_eq!(curried.ap(second.clone()), first.map2(second, i32::wrapping_mul));
    }
}
