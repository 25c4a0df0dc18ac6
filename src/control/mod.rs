//! Containers that compose with `map`, `chain`, `ap`, and `fold`.
//!
//! - [`Boxed`]: Wraps one value; every `map` runs immediately
//! - [`LazyBoxed`]: Wraps a producer; nothing runs until `fold`
//! - [`Either`]: `Right` success or `Left` failure without unwinding
//! - [`FirstRight`]: The monoid that keeps the first `Right`
//! - [`Task`]: An eagerly started asynchronous computation (feature `async`)
//!
//! # Examples
//!
//! ## Eager and deferred pipelines
//!
//! ```rust
//! use algebox::control::{Boxed, LazyBoxed};
//!
//! let eager = Boxed::new(2).map(|n| n + 1).fold(|n| n * 10);
//! assert_eq!(eager, 30);
//!
//! let deferred = LazyBoxed::new(|| 2).map(|n| n + 1);
//! // nothing has run yet
//! assert_eq!(deferred.fold(|n| n * 10), 30);
//! ```
//!
//! ## Failure as a value
//!
//! ```rust
//! use algebox::control::{Either, try_catch};
//!
//! let port = try_catch(|| "8888".parse::<u16>())
//!     .map_left(|error| error.to_string())
//!     .chain(|parsed| Either::from(parsed.map_err(|error| error.to_string())))
//!     .fold(|_| 3000, |port| port);
//! assert_eq!(port, 8888);
//! ```

mod boxed;
mod either;
mod first_right;
mod lazy;
#[cfg(feature = "async")]
mod task;

pub use boxed::Boxed;
pub use either::{Either, fold_map_either, from_nullable, try_catch, try_result};
pub use first_right::{FirstRight, find};
pub use lazy::LazyBoxed;
#[cfg(feature = "async")]
pub use task::Task;
