//! The deferred identity container.
//!
//! `LazyBoxed<A, F>` stores a producer `F: Fn() -> A` rather than a value.
//! `map` composes a new producer and runs nothing; `fold` is the single
//! forcing point. Nothing is cached: every `fold` runs the whole producer
//! chain again. Callers that need the result twice keep it themselves.
//!
//! # Examples
//!
//! ```rust
//! use algebox::control::LazyBoxed;
//!
//! let next = LazyBoxed::new(|| " 64 ")
//!     .map(str::trim)
//!     .map(|trimmed| trimmed.parse::<u32>().unwrap_or_default())
//!     .map(|number| number + 1)
//!     .map(|code| char::from_u32(code).unwrap_or_default())
//!     .fold(|character| character.to_ascii_lowercase());
//! assert_eq!(next, 'a');
//! ```

use std::fmt;
use std::marker::PhantomData;

/// A value described by a producer, computed each time it is folded.
pub struct LazyBoxed<A, F = fn() -> A> {
    producer: F,
    output: PhantomData<fn() -> A>,
}

impl<A, F: Fn() -> A> LazyBoxed<A, F> {
    /// Wraps a producer without running it.
    #[inline]
    pub const fn new(producer: F) -> Self {
        Self {
            producer,
            output: PhantomData,
        }
    }

    /// Defers `function` until the next `fold`.
    ///
    /// The returned container runs this container's producer and then
    /// `function`, on every fold.
    pub fn map<B, G>(self, function: G) -> LazyBoxed<B, impl Fn() -> B>
    where
        G: Fn(A) -> B,
    {
        let producer = self.producer;
        LazyBoxed::new(move || function(producer()))
    }

    /// Defers a function that returns another `LazyBoxed`, forcing the inner
    /// one as part of the same fold.
    pub fn chain<B, P, G>(self, function: G) -> LazyBoxed<B, impl Fn() -> B>
    where
        G: Fn(A) -> LazyBoxed<B, P>,
        P: Fn() -> B,
    {
        let producer = self.producer;
        LazyBoxed::new(move || function(producer()).evaluate())
    }

    /// Runs the producer chain and applies `function` to the result.
    pub fn fold<R, G>(&self, function: G) -> R
    where
        G: FnOnce(A) -> R,
    {
        function((self.producer)())
    }

    /// Runs the producer chain and returns the result.
    pub fn evaluate(&self) -> A {
        (self.producer)()
    }
}

impl<A: Clone> LazyBoxed<A, fn() -> A> {
    /// Lifts an existing value; every fold yields a clone of it.
    pub fn of(value: A) -> LazyBoxed<A, impl Fn() -> A> {
        LazyBoxed::new(move || value.clone())
    }
}

impl<A, F: Clone> Clone for LazyBoxed<A, F> {
    fn clone(&self) -> Self {
        Self {
            producer: self.producer.clone(),
            output: PhantomData,
        }
    }
}

impl<A, F> fmt::Debug for LazyBoxed<A, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("LazyBoxed").field(&"<deferred>").finish()
    }
}
