//! # thenable
//!
//! Small functional-programming utilities for optional values and fallible
//! asynchronous computations.
//!
//! ## Overview
//!
//! - **Nullable**: [`nullable::map`] maps a possibly-absent value, leaving
//!   absence untouched.
//! - **Type Classes**: [`Functor`](typeclass::Functor),
//!   [`Applicative`](typeclass::Applicative) and [`Monad`](typeclass::Monad),
//!   implemented for `Option`, `Result` and [`Task`](effect::Task).
//! - **Control Structures**: [`Either`](control::Either).
//! - **Composition**: the [`pipe!`] macro for left-to-right application.
//! - **Tasks**: [`Task`](effect::Task), a single-value async computation that
//!   resolves to success or failure, with curried combinators and
//!   do-notation style record accumulation.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `compose`: The `pipe!` macro
//! - `control`: `Either`
//! - `effect`: `Task` and its combinators
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use thenable::nullable;
//!
//! assert_eq!(nullable::map(Some(20), |n| n + 1), Some(21));
//! assert_eq!(nullable::map(None::<i32>, |n| n + 1), None);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use thenable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::nullable::Nullable;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

pub mod nullable;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
