//! Error values produced by the library itself.
//!
//! Failures of user code travel as `Either::Left`; the types here describe
//! what the bridges between the two worlds can report.

use std::any::Any;

use thiserror::Error;

/// A panic captured by [`try_catch`](crate::control::try_catch).
///
/// The `Display` output is the panic message, so
/// `try_catch(|| panic!("boom")).fold(|error| error.to_string(), ..)` yields
/// `"boom"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct CaughtPanic {
    message: String,
}

impl CaughtPanic {
    /// Creates a captured panic with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Extracts the message from a panic payload.
    ///
    /// `panic!("literal")` carries a `&'static str`, `panic!("{x}")` a
    /// `String`; any other payload type is reported as opaque.
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        let message = payload
            .downcast_ref::<&str>()
            .map(|message| (*message).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("<non-string panic payload>"));
        Self { message }
    }

    /// Returns the panic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors reported by [`Task::fork`](crate::control::Task::fork).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The runtime dropped the work before it finished; neither callback ran.
    #[error("task was cancelled before it completed")]
    Cancelled,
}
