//! Control structures for functional programming.
//!
//! - [`Either`]: A value that can be one of two types
//!
//! # Examples
//!
//! ```rust
//! use thenable::control::Either;
//!
//! let parsed: Either<String, i32> = "12".parse::<i32>().map_err(|e| e.to_string()).into();
//! assert_eq!(parsed, Either::Right(12));
//! ```

mod either;

pub use either::Either;
