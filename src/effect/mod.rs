//! Fallible asynchronous computations.
//!
//! - [`Task`]: A single-value async computation resolving to `Ok(A)` or
//!   `Err(E)`, with `Functor`, `Applicative` and `Monad` instances
//! - [`task`]: Curried combinators over `Task` for use with
//!   [`pipe!`](crate::pipe)
//! - [`record`]: Named-field records accumulated by `bind` and `ap_s`
//!
//! # Examples
//!
//! ```rust
//! use thenable::effect::Task;
//! use thenable::typeclass::{Functor, Monad};
//!
//! # futures::executor::block_on(async {
//! let task: Task<i32, String> = Task::of(4)
//!     .fmap(|n| n * 10)
//!     .flat_map(|n| if n > 0 { Task::of(n) } else { Task::rejected("negative".into()) });
//! assert_eq!(task.await, Ok(40));
//! # });
//! ```

pub mod record;
pub mod task;

pub use record::{FieldName, Has, Here, Record, RecordCons, RecordNil, There};
pub use task::Task;
