//! Monad type class - sequencing computations within a context.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use thenable::typeclass::Monad;
//!
//! fn parse_positive(s: &str) -> Option<i32> {
//!     s.parse::<i32>().ok().filter(|&n| n > 0)
//! }
//!
//! let result = Some("42")
//!     .flat_map(parse_positive)
//!     .flat_map(|n| Some(n * 2));
//! assert_eq!(result, Some(84));
//! ```

use super::applicative::Applicative;

/// A type class for types that support sequencing of computations.
///
/// `Monad` extends `Applicative` with `flat_map`: the value produced by one
/// step chooses the next step. A failed or absent step short-circuits the
/// rest of the chain.
pub trait Monad: Applicative {
    /// Applies a function to the value inside the monad and flattens the result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).flat_map(|n| Some(n * 2)), Some(10));
    /// assert_eq!(Some(5).flat_map(|n| if n > 10 { Some(n) } else { None }), None);
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B> + Send + 'static,
        B: Send + 'static;

    /// Alias for `flat_map` matching `Option::and_then` and `Result::and_then`.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two monadic computations, discarding the first result.
    ///
    /// If `self` fails, the failure propagates and `next` is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::typeclass::Monad;
    ///
    /// assert_eq!(Some(5).then(Some("hello")), Some("hello"));
    /// assert_eq!(None::<i32>.then(Some("hello")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }
}

impl<A> Monad for Option<A> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> Option<B> + Send + 'static,
        B: Send + 'static,
    {
        Self::and_then(self, function)
    }
}

impl<T, E> Monad for Result<T, E> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> Result<B, E> + Send + 'static,
        B: Send + 'static,
    {
        Self::and_then(self, function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typeclass::Applicative;
    use rstest::rstest;

    #[rstest]
    fn option_flat_map_some_to_none() {
        let x = Some(-5);
        let y = x.flat_map(|n| if n > 0 { Some(n * 2) } else { None });
        assert_eq!(y, None);
    }

    #[rstest]
    fn option_flat_map_none() {
        let x: Option<i32> = None;
        assert_eq!(x.flat_map(|n| Some(n * 2)), None);
    }

    #[rstest]
    fn result_flat_map_err_short_circuits() {
        let x: Result<i32, &str> = Err("broken");
        assert_eq!(x.flat_map(|n| Ok::<i32, &str>(n + 1)), Err("broken"));
    }

    #[rstest]
    fn result_then_ok() {
        let x: Result<i32, &str> = Ok(1);
        assert_eq!(x.then(Ok::<&str, &str>("next")), Ok("next"));
    }

    #[rstest]
    fn option_left_identity_law() {
        let function = |n: i32| Some(n + 1);
        assert_eq!(<Option<()>>::pure(5).flat_map(function), function(5));
    }

    #[rstest]
    fn result_right_identity_law() {
        let m: Result<i32, String> = Ok(9);
        assert_eq!(m.clone().flat_map(<Result<(), String>>::pure), m);
    }
}
