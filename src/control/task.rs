//! Task - an asynchronous computation that either resolves or rejects.
//!
//! A `Task<E, A>` starts running as soon as it is constructed: the future is
//! spawned onto the ambient tokio runtime, so construction must happen
//! inside one. `map`, `chain`, and `ap` describe what happens once the work
//! settles, and [`fork`](Task::fork) waits for the outcome and runs exactly
//! one of its two callbacks.
//!
//! Because every task is already running, `ap` over two tasks waits for both
//! concurrently instead of one after the other.
//!
//! # Examples
//!
//! ```rust
//! use algebox::control::{Either, Task};
//!
//! #[tokio::main]
//! async fn main() {
//!     let launched = Task::<String, _>::new(async { Either::Right("missile") })
//!         .map(|payload| format!("{payload}!"));
//!     let report = launched.fork(|error| error, |done| done).await;
//!     assert_eq!(report, Ok(String::from("missile!")));
//! }
//! ```

use std::fmt;
use std::future::Future;
use std::panic::resume_unwind;

use tokio::task::JoinHandle;

use super::Either;
use crate::error::TaskError;

type Settled<E, A> = Result<Either<E, A>, TaskError>;

/// An eagerly started asynchronous computation resolving to `Right(A)` or
/// rejecting with `Left(E)`.
pub struct Task<E, A> {
    handle: JoinHandle<Settled<E, A>>,
}

impl<E, A> Task<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Spawns `future` immediately.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Either<E, A>> + Send + 'static,
    {
        Self::spawn_settled(async move { Ok(future.await) })
    }

    /// A task that resolves to `value`.
    pub fn of(value: A) -> Self {
        Self::new(async move { Either::Right(value) })
    }

    /// A task that rejects with `error`.
    pub fn rejected(error: E) -> Self {
        Self::new(async move { Either::Left(error) })
    }

    fn spawn_settled<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Settled<E, A>> + Send + 'static,
    {
        Self {
            handle: tokio::spawn(future),
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Transforms the resolved value; a rejection passes through.
    pub fn map<B, F>(self, function: F) -> Task<E, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> B + Send + 'static,
    {
        Task::spawn_settled(async move {
            self.settle()
                .await
                .map(|outcome| outcome.map(function))
        })
    }

    /// Continues with another task once this one resolves.
    ///
    /// The next task is only created, and therefore only started, after
    /// this one resolves.
    pub fn chain<B, F>(self, function: F) -> Task<E, B>
    where
        B: Send + 'static,
        F: FnOnce(A) -> Task<E, B> + Send + 'static,
    {
        Task::spawn_settled(async move {
            match self.settle().await {
                Ok(Either::Right(value)) => function(value).settle().await,
                Ok(Either::Left(error)) => Ok(Either::Left(error)),
                Err(cancelled) => Err(cancelled),
            }
        })
    }

    /// Waits for every task and collects the values in input order.
    ///
    /// Rejects with the first rejection in input order.
    pub fn all<I>(tasks: I) -> Task<E, Vec<A>>
    where
        I: IntoIterator<Item = Self>,
    {
        let tasks: Vec<Self> = tasks.into_iter().collect();
        Task::spawn_settled(collect_all(tasks))
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Waits for the outcome and runs exactly one callback.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::Cancelled`] if the work was aborted or its
    /// runtime shut down first; neither callback runs in that case.
    ///
    /// # Panics
    ///
    /// A panic inside the spawned work is resumed here.
    pub async fn fork<R, F, G>(self, on_rejected: F, on_resolved: G) -> Result<R, TaskError>
    where
        F: FnOnce(E) -> R,
        G: FnOnce(A) -> R,
    {
        match self.settle().await {
            Ok(outcome) => Ok(outcome.fold(on_rejected, on_resolved)),
            Err(error) => {
                tracing::warn!(%error, "task settled without an outcome");
                Err(error)
            }
        }
    }

    /// Cancels the work if it has not finished yet.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Returns `true` once the spawned work has finished.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    async fn settle(self) -> Settled<E, A> {
        match self.handle.await {
            Ok(settled) => settled,
            Err(join_error) => match join_error.try_into_panic() {
                Ok(payload) => resume_unwind(payload),
                Err(_) => Err(TaskError::Cancelled),
            },
        }
    }
}

impl<E, F> Task<E, F>
where
    E: Send + 'static,
    F: Send + 'static,
{
    /// Applies the resolved function to the resolved argument.
    ///
    /// Both tasks are already running, so their waits overlap. If both
    /// reject, the rejection of `self` wins.
    pub fn ap<A, B>(self, argument: Task<E, A>) -> Task<E, B>
    where
        A: Send + 'static,
        B: Send + 'static,
        F: FnOnce(A) -> B,
    {
        Task::spawn_settled(async move {
            let (function, argument) = tokio::join!(self.settle(), argument.settle());
            function.and_then(|function| argument.map(|argument| function.ap(argument)))
        })
    }
}

async fn collect_all<E, A>(tasks: Vec<Task<E, A>>) -> Settled<E, Vec<A>>
where
    E: Send + 'static,
    A: Send + 'static,
{
    let settled = futures::future::join_all(tasks.into_iter().map(Task::settle)).await;
    let mut values = Vec::with_capacity(settled.len());
    for outcome in settled {
        match outcome? {
            Either::Right(value) => values.push(value),
            Either::Left(error) => return Ok(Either::Left(error)),
        }
    }
    Ok(Either::Right(values))
}

impl<E, A> fmt::Debug for Task<E, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Task")
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}
