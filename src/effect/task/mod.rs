//! `Task` - a single-value asynchronous computation that may fail.
//!
//! A `Task<A, E>` resolves exactly once, to a success holding an `A` or to a
//! failure holding an `E`. It implements `Future<Output = Result<A, E>>`, so
//! it can be awaited directly and driven by any executor.
//!
//! # States
//!
//! A task is either *settled* (its outcome was known at construction, as for
//! [`Task::of`] and [`Task::rejected`]) or *pending* (backed by a future or a
//! deferred thunk). Pending tasks are lazy: nothing runs until the task is
//! awaited. Combinators applied to a settled task apply their function right
//! away and return another settled task.
//!
//! # Failure propagation
//!
//! A failure short-circuits [`map`](Task::map), [`chain`](Task::chain),
//! [`bind`](Task::bind), [`ap_s`](Task::ap_s) and [`ap`](Task::ap): the
//! remaining steps are skipped and the failure flows to the end of the
//! pipeline. Nothing here recovers a failure.
//!
//! # Curried combinators
//!
//! Every combinator also exists as a free function in this module returning
//! `impl FnOnce(Task<..>) -> Task<..>`, for use with [`pipe!`](crate::pipe):
//!
//! ```rust
//! use thenable::effect::task;
//! use thenable::pipe;
//!
//! # futures::executor::block_on(async {
//! let outcome: Result<i32, String> = pipe!(
//!     task::of(20),
//!     task::map(|n: i32| n + 1),
//!     task::chain(|n: i32| task::of(n * 2)),
//! )
//! .await;
//! assert_eq!(outcome, Ok(42));
//! # });
//! ```
//!
//! # Do-notation
//!
//! Starting from [`Task::do_`], each [`bind`](Task::bind) or
//! [`ap_s`](Task::ap_s) adds one named field to an accumulated
//! [`Record`](crate::effect::record::Record):
//!
//! ```rust
//! use thenable::effect::Task;
//!
//! thenable::field_names!(X, Y);
//!
//! # futures::executor::block_on(async {
//! let record = Task::<_, String>::do_()
//!     .bind(X, |_| Task::of(1))
//!     .bind(Y, |record| Task::of(record.get(X) + 1))
//!     .await
//!     .unwrap();
//! assert_eq!((*record.get(X), *record.get(Y)), (1, 2));
//! # });
//! ```

mod pipeable;

pub use pipeable::{ap_s, bind, chain, do_, fail, map, of, reject, rejected};

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::BoxFuture;
use pin_project_lite::pin_project;

use super::record::{FieldName, Has, Record, RecordCons, RecordNil};
use crate::control::Either;

/// A deferred computation producing the task's future on first poll.
type Thunk<A, E> = Box<dyn FnOnce() -> BoxFuture<'static, Result<A, E>> + Send>;

// =============================================================================
// Task Struct Definition
// =============================================================================

pin_project! {
    /// A single-value asynchronous computation that resolves to `Ok(A)` or
    /// fails with `Err(E)`.
    ///
    /// # Monad Laws
    ///
    /// 1. **Left Identity**: `Task::of(a).chain(f) == f(a)`
    /// 2. **Right Identity**: `m.chain(Task::of) == m`
    /// 3. **Associativity**: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::effect::Task;
    ///
    /// # futures::executor::block_on(async {
    /// let task: Task<i32, String> = Task::of(21).map(|n| n * 2);
    /// assert_eq!(task.await, Ok(42));
    /// # });
    /// ```
    pub struct Task<A, E> {
        #[pin]
        state: TaskState<A, E>,
    }
}

pin_project! {
    /// Internal state machine for `Task`.
    ///
    /// - `Settled` -> `Completed` (the outcome is handed out on first poll)
    /// - `Deferred` -> `Running` (the thunk creates the future on first poll)
    /// - `Running` -> `Completed` (when the inner future resolves)
    #[project = TaskStateProj]
    enum TaskState<A, E> {
        Settled {
            outcome: Option<Result<A, E>>,
        },
        Deferred {
            thunk: Option<Thunk<A, E>>,
        },
        Running {
            #[pin]
            future: BoxFuture<'static, Result<A, E>>,
        },
        Completed,
    }
}

// =============================================================================
// Future Implementation
// =============================================================================

impl<A, E> Future for Task<A, E> {
    type Output = Result<A, E>;

    fn poll(self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        loop {
            match this.state.as_mut().project() {
                TaskStateProj::Settled { outcome } => {
                    let outcome = outcome.take().expect(
                        "Task internal error: settled outcome was already consumed. \
                         This indicates the Task was polled after completion.",
                    );
                    this.state.set(TaskState::Completed);
                    return Poll::Ready(outcome);
                }
                TaskStateProj::Deferred { thunk } => {
                    let thunk = thunk.take().expect(
                        "Task internal error: deferred thunk was already consumed. \
                         This indicates a state machine invariant violation.",
                    );
                    let future = thunk();
                    this.state.set(TaskState::Running { future });
                }
                TaskStateProj::Running { future } => match future.poll(context) {
                    Poll::Ready(outcome) => {
                        this.state.set(TaskState::Completed);
                        return Poll::Ready(outcome);
                    }
                    Poll::Pending => return Poll::Pending,
                },
                TaskStateProj::Completed => {
                    panic!("Task polled after completion");
                }
            }
        }
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<A, E> Task<A, E> {
    /// Creates a task that has already succeeded with `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::effect::Task;
    ///
    /// let task: Task<i32, ()> = Task::of(42);
    /// assert!(task.is_settled());
    /// ```
    pub const fn of(value: A) -> Self {
        Self::from_result(Ok(value))
    }

    /// Creates a task that has already failed with `error`.
    pub const fn rejected(error: E) -> Self {
        Self::from_result(Err(error))
    }

    /// Creates a settled task from an outcome.
    pub const fn from_result(outcome: Result<A, E>) -> Self {
        Self {
            state: TaskState::Settled {
                outcome: Some(outcome),
            },
        }
    }

    /// Returns `true` while the outcome is known without polling.
    pub const fn is_settled(&self) -> bool {
        matches!(
            self.state,
            TaskState::Settled {
                outcome: Some(_)
            }
        )
    }
}

impl<A: 'static, E: 'static> Task<A, E> {
    /// Creates a task from a closure producing a fallible future.
    ///
    /// The closure runs on the first poll, not before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::effect::Task;
    ///
    /// # futures::executor::block_on(async {
    /// let task: Task<u16, String> = Task::new(|| async { "8080".parse().map_err(|_| "bad port".to_string()) });
    /// assert_eq!(task.await, Ok(8080));
    /// # });
    /// ```
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        let thunk: Thunk<A, E> =
            Box::new(move || -> BoxFuture<'static, Result<A, E>> { Box::pin(action()) });
        Self {
            state: TaskState::Deferred { thunk: Some(thunk) },
        }
    }

    /// Creates a task from a fallible future that has not been polled yet.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<A, E>> + Send + 'static,
    {
        Self {
            state: TaskState::Running {
                future: Box::pin(future),
            },
        }
    }
}

impl<E> Task<RecordNil, E> {
    /// The empty record, already resolved: the starting point of a
    /// do-notation pipeline.
    #[must_use]
    pub const fn do_() -> Self {
        Self::of(RecordNil)
    }
}

// =============================================================================
// Functor / Monad Operations
// =============================================================================

impl<A: Send + 'static, E: Send + 'static> Task<A, E> {
    /// Transforms the success value. A failure propagates unchanged and
    /// `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::effect::Task;
    ///
    /// # futures::executor::block_on(async {
    /// let failed: Task<i32, &str> = Task::rejected("offline");
    /// assert_eq!(failed.map(|n| n + 1).await, Err("offline"));
    /// # });
    /// ```
    pub fn map<B, F>(self, function: F) -> Task<B, E>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        match self {
            Self {
                state: TaskState::Settled {
                    outcome: Some(outcome),
                },
            } => Task::from_result(outcome.map(function)),
            pending => Task::from_future(async move { pending.await.map(function) }),
        }
    }

    /// Sequences a dependent task: once `self` succeeds with `a`, runs
    /// `function(a)` and adopts its outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::effect::Task;
    ///
    /// # futures::executor::block_on(async {
    /// let task: Task<i32, String> = Task::of(10).chain(|n| Task::of(n * 2));
    /// assert_eq!(task.await, Ok(20));
    /// # });
    /// ```
    pub fn chain<B, F>(self, function: F) -> Task<B, E>
    where
        F: FnOnce(A) -> Task<B, E> + Send + 'static,
        B: Send + 'static,
    {
        match self {
            Self {
                state: TaskState::Settled {
                    outcome: Some(outcome),
                },
            } => match outcome {
                Ok(value) => function(value),
                Err(error) => Task::rejected(error),
            },
            pending => Task::from_future(async move {
                match pending.await {
                    Ok(value) => function(value).await,
                    Err(error) => Err(error),
                }
            }),
        }
    }

    /// Discards this task and returns one that has already failed with
    /// `error`.
    ///
    /// The input is dropped without being awaited, whether it is pending,
    /// successful or failed. The success type `B` is free because the result
    /// never succeeds.
    pub fn reject<B>(self, error: E) -> Task<B, E> {
        tracing::trace!(settled = self.is_settled(), "reject discards its input task");
        drop(self);
        Task::rejected(error)
    }

    /// Turns a success into a failure-shaped success: once `self` succeeds,
    /// its value is discarded and the task resolves to `Either::Left(error)`.
    ///
    /// A failure of `self` still propagates as a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::control::Either;
    /// use thenable::effect::Task;
    ///
    /// # futures::executor::block_on(async {
    /// let task: Task<i32, ()> = Task::of(7);
    /// assert_eq!(task.fail("quota exceeded").await, Ok(Either::Left("quota exceeded")));
    /// # });
    /// ```
    pub fn fail<L>(self, error: L) -> Task<Either<L, A>, E>
    where
        L: Send + 'static,
    {
        self.map(move |_discarded| {
            tracing::trace!("fail discards a success value");
            Either::Left(error)
        })
    }
}

// =============================================================================
// Applicative Operations
// =============================================================================

impl<A: Send + 'static, E: Send + 'static> Task<A, E> {
    /// Applies the function this task resolves to to the value `other`
    /// resolves to.
    ///
    /// `self` is awaited first, then `other`; the result succeeds only if
    /// both do.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::effect::Task;
    ///
    /// # futures::executor::block_on(async {
    /// let function: Task<fn(i32) -> i32, ()> = Task::of(|n| n + 1);
    /// assert_eq!(function.ap(Task::of(41)).await, Ok(42));
    /// # });
    /// ```
    pub fn ap<B, C>(self, other: Task<B, E>) -> Task<C, E>
    where
        A: FnOnce(B) -> C,
        B: Send + 'static,
        C: Send + 'static,
    {
        self.chain(move |function| other.map(function))
    }
}

// =============================================================================
// Do-notation Operations
// =============================================================================

impl<R: Record + Send + 'static, E: Send + 'static> Task<R, E> {
    /// Awaits the record, runs `function` on it, and adds the result under
    /// `name`.
    ///
    /// A failure of either step propagates. `name` must not already be a
    /// field of the record; reusing one fails to compile because the field
    /// index becomes ambiguous:
    ///
    /// ```rust,compile_fail,E0283
    /// use thenable::effect::Task;
    ///
    /// thenable::field_names!(X);
    ///
    /// let task = Task::<_, ()>::do_()
    ///     .bind(X, |_| Task::of(1))
    ///     .bind(X, |_| Task::of(2));
    /// ```
    pub fn bind<N, B, I, F>(self, _name: N, function: F) -> Task<RecordCons<N, B, R>, E>
    where
        N: FieldName + 'static,
        B: Send + 'static,
        F: FnOnce(&R) -> Task<B, E> + Send + 'static,
        RecordCons<N, B, R>: Has<N, I>,
    {
        self.chain(move |record| function(&record).map(move |value| RecordCons::new(value, record)))
    }

    /// Awaits the record, then awaits the independent task `other`, and
    /// adds its result under `name`.
    ///
    /// The two tasks run one after the other, not concurrently. As with
    /// [`bind`](Task::bind), a name already in the record is rejected:
    ///
    /// ```rust,compile_fail,E0283
    /// use thenable::effect::Task;
    ///
    /// thenable::field_names!(X);
    ///
    /// let task = Task::<_, ()>::do_()
    ///     .ap_s(X, Task::of(1))
    ///     .ap_s(X, Task::of(2));
    /// ```
    pub fn ap_s<N, B, I>(self, _name: N, other: Task<B, E>) -> Task<RecordCons<N, B, R>, E>
    where
        N: FieldName + 'static,
        B: Send + 'static,
        RecordCons<N, B, R>: Has<N, I>,
    {
        self.chain(move |record| other.map(move |value| RecordCons::new(value, record)))
    }
}

// =============================================================================
// Display / Debug
// =============================================================================

impl<A, E> fmt::Display for Task<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Task>")
    }
}

impl<A, E> fmt::Debug for Task<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Task")
            .field("settled", &self.is_settled())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Type class instances
// =============================================================================

impl<A, E> crate::typeclass::TypeConstructor for Task<A, E> {
    type Inner = A;
    type WithType<B> = Task<B, E>;
}

impl<A: Send + 'static, E: Send + 'static> crate::typeclass::Functor for Task<A, E> {
    fn fmap<B, F>(self, function: F) -> Task<B, E>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

impl<A: Send + 'static, E: Send + 'static> crate::typeclass::Applicative for Task<A, E> {
    fn pure<B>(value: B) -> Task<B, E>
    where
        B: Send + 'static,
    {
        Task::of(value)
    }

    fn map2<B, C, F>(self, other: Task<B, E>, function: F) -> Task<C, E>
    where
        F: FnOnce(A, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        self.chain(move |a| other.map(move |b| function(a, b)))
    }

    fn apply<B, Output>(self, other: Task<B, E>) -> Task<Output, E>
    where
        A: FnOnce(B) -> Output,
        B: Send + 'static,
        Output: Send + 'static,
    {
        self.ap(other)
    }
}

impl<A: Send + 'static, E: Send + 'static> crate::typeclass::Monad for Task<A, E> {
    fn flat_map<B, F>(self, function: F) -> Task<B, E>
    where
        F: FnOnce(A) -> Task<B, E> + Send + 'static,
        B: Send + 'static,
    {
        self.chain(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    crate::field_names!(Host, Port);

    #[rstest]
    fn task_is_send_when_payloads_are() {
        fn assert_send<T: Send>() {}
        assert_send::<Task<i32, String>>();
        assert_send::<Task<RecordCons<Host, &'static str, RecordNil>, ()>>();
    }

    #[rstest]
    fn of_is_settled_and_ready_on_first_poll() {
        let task: Task<i32, ()> = Task::of(5);
        assert!(task.is_settled());
        assert_eq!(task.now_or_never(), Some(Ok(5)));
    }

    #[rstest]
    fn from_future_is_pending() {
        let task: Task<i32, ()> = Task::from_future(async { Ok(1) });
        assert!(!task.is_settled());
    }

    #[rstest]
    fn new_defers_the_thunk_until_polled() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let task: Task<i32, ()> = Task::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok(3) }
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert_eq!(task.now_or_never(), Some(Ok(3)));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn map_on_settled_task_stays_settled() {
        let task: Task<i32, ()> = Task::of(2).map(|n| n * 10);
        assert!(task.is_settled());
        assert_eq!(task.now_or_never(), Some(Ok(20)));
    }

    #[rstest]
    fn chain_on_failure_skips_function() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let task: Task<i32, &str> = Task::rejected("down").chain(move |n: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            Task::of(n)
        });
        assert_eq!(task.now_or_never(), Some(Err("down")));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn reject_ignores_a_pending_input() {
        let never: Task<i32, &str> = Task::from_future(futures::future::pending());
        let task: Task<(), &str> = never.reject("forced");
        assert!(task.is_settled());
        assert_eq!(task.now_or_never(), Some(Err("forced")));
    }

    #[rstest]
    fn fail_propagates_input_failure() {
        let task: Task<i32, &str> = Task::rejected("input");
        assert_eq!(task.fail("unused").now_or_never(), Some(Err("input")));
    }

    #[rstest]
    fn ap_fails_when_the_function_fails() {
        let function: Task<fn(i32) -> i32, &str> = Task::rejected("no function");
        assert_eq!(function.ap(Task::of(1)).now_or_never(), Some(Err("no function")));
    }

    #[rstest]
    fn bind_builds_a_record() {
        let task: Task<_, ()> = Task::do_()
            .bind(Host, |_| Task::of("localhost"))
            .bind(Port, |record| Task::of(record.get(Host).len() * 1000));
        let record = task.now_or_never().unwrap().unwrap();
        assert_eq!(*record.get(Host), "localhost");
        assert_eq!(*record.get(Port), 9000);
    }

    #[rstest]
    fn display_and_debug() {
        let task: Task<i32, ()> = Task::of(1);
        assert_eq!(format!("{task}"), "<Task>");
        assert_eq!(format!("{task:?}"), "Task { settled: true, .. }");
    }

    #[rstest]
    #[should_panic(expected = "polled after completion")]
    fn polling_a_completed_task_panics() {
        let mut task: Task<i32, ()> = Task::of(1);
        let waker = futures::task::noop_waker();
        let mut context = Context::from_waker(&waker);
        assert_eq!(Pin::new(&mut task).poll(&mut context), Poll::Ready(Ok(1)));
        let _ = Pin::new(&mut task).poll(&mut context);
    }
}
