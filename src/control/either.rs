//! Either type - a tagged union of two alternatives.
//!
//! `Either<L, R>` holds a `Left(L)` or a `Right(R)`. By convention `Left`
//! carries a failure-shaped value and `Right` a success. Tasks use it to
//! report a failure as an ordinary resolved value instead of rejecting
//! (see [`Task::fail`](crate::effect::Task::fail)).
//!
//! # Examples
//!
//! ```rust
//! use thenable::control::Either;
//!
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//! let described = right.fold(
//!     |n| format!("Number: {n}"),
//!     |s| format!("String: {s}"),
//! );
//! assert_eq!(described, "String: hello");
//! ```

/// A value that is either `Left(L)` or `Right(R)`.
///
/// # Examples
///
/// ```rust
/// use thenable::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// assert_eq!(success.map_right(|x| x * 2), Either::Right(84));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally the failure-shaped alternative.
    Left(L),
    /// The right variant, conventionally the success alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Transforms the left value, leaving a right value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use thenable::control::Either;
    ///
    /// let failed: Either<&str, i32> = Either::Left("timeout");
    /// assert_eq!(failed.map_left(str::len), Either::Left(7));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right value, leaving a left value untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both alternatives into one value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the two alternatives.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Type class instances (right-biased)
// =============================================================================

#[cfg(feature = "typeclass")]
mod instances {
    use super::Either;
    use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

    impl<L, R> TypeConstructor for Either<L, R> {
        type Inner = R;
        type WithType<B> = Either<L, B>;
    }

    impl<L, R> Functor for Either<L, R> {
        #[inline]
        fn fmap<B, F>(self, function: F) -> Either<L, B>
        where
            F: FnOnce(R) -> B + Send + 'static,
            B: Send + 'static,
        {
            self.map_right(function)
        }
    }

    impl<L, R> Applicative for Either<L, R> {
        #[inline]
        fn pure<B>(value: B) -> Either<L, B>
        where
            B: Send + 'static,
        {
            Either::Right(value)
        }

        #[inline]
        fn map2<B, C, F>(self, other: Either<L, B>, function: F) -> Either<L, C>
        where
            F: FnOnce(R, B) -> C + Send + 'static,
            B: Send + 'static,
            C: Send + 'static,
        {
            match (self, other) {
                (Self::Right(a), Either::Right(b)) => Either::Right(function(a, b)),
                (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
            }
        }

        #[inline]
        fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
        where
            R: FnOnce(B) -> Output,
            B: Send + 'static,
            Output: Send + 'static,
        {
            match (self, other) {
                (Self::Right(function), Either::Right(b)) => Either::Right(function(b)),
                (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
            }
        }
    }

    impl<L, R> Monad for Either<L, R> {
        #[inline]
        fn flat_map<B, F>(self, function: F) -> Either<L, B>
        where
            F: FnOnce(R) -> Either<L, B> + Send + 'static,
            B: Send + 'static,
        {
            match self {
                Self::Left(error) => Either::Left(error),
                Self::Right(value) => function(value),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn left_accessors() {
        let value: Either<&str, i32> = Either::Left("error");
        assert!(value.is_left());
        assert!(!value.is_right());
        assert_eq!(value.left(), Some("error"));
        assert_eq!(value.right(), None);
    }

    #[rstest]
    fn right_accessors() {
        let value: Either<&str, i32> = Either::Right(3);
        assert!(value.is_right());
        assert_eq!(value.right(), Some(3));
        assert_eq!(value.left(), None);
    }

    #[rstest]
    fn map_left_leaves_right_untouched() {
        let value: Either<i32, &str> = Either::Right("kept");
        assert_eq!(value.map_left(|n| n + 1), Either::Right("kept"));
    }

    #[rstest]
    #[case(Either::Left(2), 4)]
    #[case(Either::Right(10), 11)]
    fn fold_handles_both_sides(#[case] value: Either<i32, i32>, #[case] expected: i32) {
        assert_eq!(value.fold(|l| l * 2, |r| r + 1), expected);
    }

    #[rstest]
    fn swap_exchanges_sides() {
        let value: Either<i32, &str> = Either::Left(1);
        assert_eq!(value.swap(), Either::Right(1));
    }

    #[rstest]
    fn result_round_trip_keeps_sides() {
        let either: Either<String, i32> = Err("bad".to_string()).into();
        assert_eq!(either, Either::Left("bad".to_string()));

        let result: Result<i32, String> = Either::Right(5).into();
        assert_eq!(result, Ok(5));
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn flat_map_short_circuits_on_left() {
        use crate::typeclass::Monad;

        let value: Either<&str, i32> = Either::Left("stop");
        assert_eq!(value.flat_map(|n| Either::Right(n + 1)), Either::Left("stop"));
    }

    #[cfg(feature = "typeclass")]
    #[rstest]
    fn map2_combines_rights() {
        use crate::typeclass::Applicative;

        let first: Either<&str, i32> = Either::Right(2);
        assert_eq!(first.map2(Either::Right(3), |a, b| a * b), Either::Right(6));
    }
}
