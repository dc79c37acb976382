//! Applicative type class - lifting values and applying functions within a context.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! pure(compose).apply(u).apply(v).apply(w) == u.apply(v.apply(w))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use thenable::typeclass::Applicative;
//!
//! let x: Option<i32> = <Option<()>>::pure(42);
//! assert_eq!(x, Some(42));
//!
//! let sum = Some(3).map2(Some(4), |x, y| x + y);
//! assert_eq!(sum, Some(7));
//! ```

use super::functor::Functor;

/// A type class for types that support lifting values and combining contexts.
///
/// `Applicative` extends `Functor` with:
///
/// - `pure`: lift a plain value into the context
/// - `apply`: apply a function held in the context to a value held in the context
/// - `map2`: combine two values in the context with a binary function
///
/// Both operands are evaluated left to right; the combination succeeds only
/// if both succeed.
pub trait Applicative: Functor {
    /// Lifts a pure value into the applicative context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::typeclass::Applicative;
    ///
    /// let x: Option<i32> = <Option<()>>::pure(42);
    /// assert_eq!(x, Some(42));
    ///
    /// let y: Result<String, ()> = <Result<(), ()>>::pure("hello".to_string());
    /// assert_eq!(y, Ok("hello".to_string()));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Send + 'static;

    /// Combines two applicative values using a binary function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::typeclass::Applicative;
    ///
    /// assert_eq!(Some(1).map2(Some(2), |x, y| x + y), Some(3));
    /// assert_eq!(Some(1).map2(None::<i32>, |x, y| x + y), None);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        F: FnOnce(Self::Inner, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static;

    /// Applies the function inside `self` to the value inside `other`.
    ///
    /// The function side is resolved first, then the value side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::typeclass::Applicative;
    ///
    /// let function: Option<fn(i32) -> i32> = Some(|x| x + 1);
    /// assert_eq!(function.apply(Some(5)), Some(6));
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: FnOnce(B) -> Output,
        B: Send + 'static,
        Output: Send + 'static;

    /// Combines two applicative values into a tuple.
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self: Sized,
        Self::Inner: Send + 'static,
        B: Send + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two applicative values, keeping only the first result.
    #[inline]
    fn product_left<B>(self, other: Self::WithType<B>) -> Self::WithType<Self::Inner>
    where
        Self: Sized,
        Self::Inner: Send + 'static,
        B: Send + 'static,
    {
        self.map2(other, |a, _| a)
    }

    /// Combines two applicative values, keeping only the second result.
    #[inline]
    fn product_right<B>(self, other: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        B: Send + 'static,
    {
        self.map2(other, |_, b| b)
    }
}

impl<A> Applicative for Option<A> {
    #[inline]
    fn pure<B>(value: B) -> Option<B>
    where
        B: Send + 'static,
    {
        Some(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Option<B>, function: F) -> Option<C>
    where
        F: FnOnce(A, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        match (self, other) {
            (Some(a), Some(b)) => Some(function(a, b)),
            _ => None,
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Option<B>) -> Option<Output>
    where
        A: FnOnce(B) -> Output,
        B: Send + 'static,
        Output: Send + 'static,
    {
        match (self, other) {
            (Some(function), Some(b)) => Some(function(b)),
            _ => None,
        }
    }
}

impl<T, E> Applicative for Result<T, E> {
    #[inline]
    fn pure<B>(value: B) -> Result<B, E>
    where
        B: Send + 'static,
    {
        Ok(value)
    }

    #[inline]
    fn map2<B, C, F>(self, other: Result<B, E>, function: F) -> Result<C, E>
    where
        F: FnOnce(T, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        match (self, other) {
            (Ok(a), Ok(b)) => Ok(function(a, b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }

    #[inline]
    fn apply<B, Output>(self, other: Result<B, E>) -> Result<Output, E>
    where
        T: FnOnce(B) -> Output,
        B: Send + 'static,
        Output: Send + 'static,
    {
        match (self, other) {
            (Ok(function), Ok(b)) => Ok(function(b)),
            (Err(error), _) | (_, Err(error)) => Err(error),
        }
    }
}
