//! # algebox
//!
//! Small algebraic containers with law-preserving composition.
//!
//! ## Overview
//!
//! - **Type Classes**: Functor, Applicative, Monad, Semigroup, Monoid
//! - **Value Wrappers**: `Sum`, `Product`, `All`, `Any`, `Max`, `Min`,
//!   `First`, `Last`, `Pair`, `Pointwise`
//! - **Folds**: `fold`, `fold_map`, and the `Either`-layered `fold_map_either`
//! - **Containers**: `Boxed` (eager), `LazyBoxed` (deferred), `Either`
//! - **Async**: `Task`, an eagerly started computation forked with two callbacks
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits and value wrappers
//! - `control`: `Boxed`, `LazyBoxed`, `Either`, `FirstRight`
//! - `async`: `Task` on top of tokio
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use algebox::prelude::*;
//!
//! let next = Boxed::new(" 64 ")
//!     .map(str::trim)
//!     .map(|trimmed| trimmed.parse::<u32>().unwrap_or_default())
//!     .map(|number| number + 1)
//!     .map(|code| char::from_u32(code).unwrap_or_default())
//!     .fold(|character| character.to_lowercase().to_string());
//! assert_eq!(next, "a");
//!
//! let total = fold([Sum::new(1), Sum::new(2), Sum::new(3)], Sum::empty());
//! assert_eq!(total, Sum::new(6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use algebox::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    pub use crate::error::*;
}

pub mod error;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;
