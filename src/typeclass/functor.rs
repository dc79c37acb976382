//! Functor type class - mapping over the value in a context.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use thenable::typeclass::Functor;
//!
//! let some_value: Option<i32> = Some(5);
//! let transformed: Option<String> = some_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! let none_value: Option<i32> = None;
//! let transformed: Option<String> = none_value.fmap(|n| n.to_string());
//! assert_eq!(transformed, None);
//! ```

use super::higher::TypeConstructor;

/// A type class for types that can have a function mapped over their contents.
///
/// `Functor` applies a function to the value inside a context while keeping
/// the context itself: an absent `Option` stays absent, an `Err` stays the
/// same `Err`, a failing task keeps its failure.
///
/// # Examples
///
/// ```rust
/// use thenable::typeclass::Functor;
///
/// let x: Result<i32, String> = Ok(5);
/// assert_eq!(x.fmap(|n| n * 2), Ok(10));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new functor with the transformed value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// let y: Option<i32> = x.fmap(|n| n * 2);
    /// assert_eq!(y, Some(10));
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B + Send + 'static,
        B: Send + 'static;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// This is equivalent to `fmap(|_| value)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::typeclass::Functor;
    ///
    /// let x: Option<i32> = Some(5);
    /// assert_eq!(x.replace("replaced"), Some("replaced"));
    ///
    /// let y: Option<i32> = None;
    /// assert_eq!(y.replace("replaced"), None);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Send + 'static,
    {
        self.fmap(move |_| value)
    }

    /// Discards the value inside the functor, replacing it with `()`.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

impl<A> Functor for Option<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

impl<T, E> Functor for Result<T, E> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Result<B, E>
    where
        F: FnOnce(T) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_fmap_some() {
        assert_eq!(Some(5).fmap(|n| n + 1), Some(6));
    }

    #[rstest]
    fn option_fmap_none() {
        let value: Option<i32> = None;
        assert_eq!(value.fmap(|n| n + 1), None);
    }

    #[rstest]
    fn option_void_some() {
        assert_eq!(Some(5).void(), Some(()));
    }

    #[rstest]
    fn result_fmap_ok() {
        let value: Result<i32, String> = Ok(5);
        assert_eq!(value.fmap(|n| n.to_string()), Ok("5".to_string()));
    }

    #[rstest]
    fn result_fmap_err_keeps_error() {
        let value: Result<i32, String> = Err("failed".to_string());
        assert_eq!(value.fmap(|n| n * 2), Err("failed".to_string()));
    }

    #[rstest]
    fn result_replace_ok() {
        let value: Result<i32, ()> = Ok(1);
        assert_eq!(value.replace("done"), Ok("done"));
    }

    #[rstest]
    #[case(Some(3))]
    #[case(None)]
    fn option_composition_law(#[case] value: Option<i32>) {
        let function1 = |n: i32| n + 1;
        let function2 = |n: i32| n * 2;

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(move |x| function2(function1(x)));
        assert_eq!(left, right);
    }
}
