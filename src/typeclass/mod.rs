//! Type class traits for functional programming abstractions.
//!
//! This module provides the type classes that let generic code operate over
//! different computational contexts through one shared interface:
//!
//! - [`Functor`]: Mapping over the value in a context
//! - [`Applicative`]: Lifting values and applying functions within a context
//! - [`Monad`]: Sequencing computations where later steps depend on earlier results
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! so each context (`Option<_>`, `Result<_, E>`, `Task<_, E>`) implements
//! the traits once and generic algorithms select the instance through their
//! type parameter.
//!
//! The trait methods require `Send + 'static` for mapped functions and
//! produced values. Synchronous contexts never need those bounds, but they
//! let asynchronous contexts such as [`Task`](crate::effect::Task) implement
//! exactly the same traits.
//!
//! # Examples
//!
//! ```rust
//! use thenable::typeclass::Applicative;
//!
//! fn add_both<M>(first: M, second: M::WithType<i32>) -> M::WithType<i32>
//! where
//!     M: Applicative<Inner = i32>,
//! {
//!     first.map2(second, |a, b| a + b)
//! }
//!
//! assert_eq!(add_both(Some(1), Some(2)), Some(3));
//! assert_eq!(add_both::<Result<i32, &str>>(Ok(1), Err("nope")), Err("nope"));
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
