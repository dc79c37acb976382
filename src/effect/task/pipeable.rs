//! Curried task combinators.
//!
//! Each function takes the combinator's arguments and returns a function
//! from the input task to the output task, so pipelines can be written with
//! [`pipe!`](crate::pipe). They delegate to the methods on [`Task`].

use super::Task;
use crate::control::Either;
use crate::effect::record::{FieldName, Has, Record, RecordCons, RecordNil};

/// Lifts `value` into an already-successful task.
pub const fn of<A, E>(value: A) -> Task<A, E> {
    Task::of(value)
}

/// An already-failed task.
pub const fn rejected<A, E>(error: E) -> Task<A, E> {
    Task::rejected(error)
}

/// The empty record, already resolved.
#[must_use]
pub const fn do_<E>() -> Task<RecordNil, E> {
    Task::do_()
}

/// Curried [`Task::map`].
///
/// # Examples
///
/// ```rust
/// use thenable::effect::task;
/// use thenable::pipe;
///
/// # futures::executor::block_on(async {
/// let length = pipe!(task::of::<_, ()>("four"), task::map(|s: &str| s.len()));
/// assert_eq!(length.await, Ok(4));
/// # });
/// ```
pub fn map<A, B, E, F>(function: F) -> impl FnOnce(Task<A, E>) -> Task<B, E>
where
    A: Send + 'static,
    B: Send + 'static,
    E: Send + 'static,
    F: FnOnce(A) -> B + Send + 'static,
{
    move |task| task.map(function)
}

/// Curried [`Task::chain`].
pub fn chain<A, B, E, F>(function: F) -> impl FnOnce(Task<A, E>) -> Task<B, E>
where
    A: Send + 'static,
    B: Send + 'static,
    E: Send + 'static,
    F: FnOnce(A) -> Task<B, E> + Send + 'static,
{
    move |task| task.chain(function)
}

/// Curried [`Task::reject`].
///
/// # Examples
///
/// ```rust
/// use thenable::effect::{task, Task};
/// use thenable::pipe;
///
/// # futures::executor::block_on(async {
/// let forced: Task<(), &str> = pipe!(task::of(1), task::reject("maintenance"));
/// assert_eq!(forced.await, Err("maintenance"));
/// # });
/// ```
pub fn reject<A, B, E>(error: E) -> impl FnOnce(Task<A, E>) -> Task<B, E>
where
    A: Send + 'static,
    E: Send + 'static,
{
    move |task| task.reject(error)
}

/// Curried [`Task::fail`].
pub fn fail<A, E, L>(error: L) -> impl FnOnce(Task<A, E>) -> Task<Either<L, A>, E>
where
    A: Send + 'static,
    E: Send + 'static,
    L: Send + 'static,
{
    move |task| task.fail(error)
}

/// Curried [`Task::bind`].
///
/// The closure's parameter type usually needs an annotation, since it is
/// only known once the input task is supplied.
///
/// # Examples
///
/// ```rust
/// use thenable::effect::record::{RecordCons, RecordNil};
/// use thenable::effect::task;
/// use thenable::pipe;
///
/// thenable::field_names!(Base, Doubled);
///
/// # futures::executor::block_on(async {
/// let record = pipe!(
///     task::do_::<()>(),
///     task::bind(Base, |_: &RecordNil| task::of(4)),
///     task::bind(Doubled, |record: &RecordCons<Base, i32, RecordNil>| {
///         task::of(record.get(Base) * 2)
///     }),
/// )
/// .await
/// .unwrap();
/// assert_eq!(*record.get(Doubled), 8);
/// # });
/// ```
pub fn bind<R, N, B, E, I, F>(
    name: N,
    function: F,
) -> impl FnOnce(Task<R, E>) -> Task<RecordCons<N, B, R>, E>
where
    R: Record + Send + 'static,
    N: FieldName + 'static,
    B: Send + 'static,
    E: Send + 'static,
    F: FnOnce(&R) -> Task<B, E> + Send + 'static,
    RecordCons<N, B, R>: Has<N, I>,
{
    move |task| task.bind(name, function)
}

/// Curried [`Task::ap_s`].
pub fn ap_s<R, N, B, E, I>(
    name: N,
    other: Task<B, E>,
) -> impl FnOnce(Task<R, E>) -> Task<RecordCons<N, B, R>, E>
where
    R: Record + Send + 'static,
    N: FieldName + 'static,
    B: Send + 'static,
    E: Send + 'static,
    RecordCons<N, B, R>: Has<N, I>,
{
    move |task| task.ap_s(name, other)
}
