//! Function composition utilities.
//!
//! The combinators in [`effect::task`](crate::effect::task) are curried: each
//! takes its configuration and returns a function from task to task. The
//! [`pipe!`] macro threads a value through such functions left to right,
//! which reads like a do-block:
//!
//! ```text
//! x |> f |> g |> h = h(g(f(x)))
//! ```
//!
//! - [`pipe!`]: Apply functions left-to-right (data flow style)
//! - [`identity`]: The identity function
//!
//! # Examples
//!
//! ```
//! use thenable::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! let result = pipe!(5, double, add_one);
//! assert_eq!(result, 11);
//! ```

mod pipe_macro;

/// The identity function, returning its argument unchanged.
///
/// Handy as the function argument of the functor identity law:
///
/// ```
/// use thenable::compose::identity;
/// use thenable::typeclass::Functor;
///
/// assert_eq!(Some(3).fmap(identity), Some(3));
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}
