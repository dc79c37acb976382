//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Option<_>` directly.
//! [`TypeConstructor`] exposes the applied type (`Inner`) and a way to
//! re-apply the same constructor to another type (`WithType<B>`), which is
//! enough to state `Functor`, `Applicative` and `Monad` generically.
//!
//! # Example
//!
//! ```rust
//! use thenable::typeclass::TypeConstructor;
//!
//! fn transform_type<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = transform_type(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A trait representing a type constructor applied to some type.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `<F as TypeConstructor>::WithType<F::Inner>`
/// is `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For example, for `Option<i32>`, this would be `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// For `Result<i32, E>`, `WithType<String>` is `Result<String, E>`: every
    /// other parameter of the constructor is kept.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[rstest]
    fn result_with_type_preserves_error_type() {
        fn assert_result_with_type<T, E, B>()
        where
            Result<T, E>: TypeConstructor<Inner = T, WithType<B> = Result<B, E>>,
        {
        }

        assert_result_with_type::<i32, String, bool>();
        assert_result_with_type::<String, (), i32>();
    }

    #[rstest]
    fn chained_with_type_transformations() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_option_bool<T: TypeConstructor<Inner = bool>>() {}
        assert_is_option_bool::<Step2>();
    }

    #[rstest]
    #[case(Some(42))]
    #[case(None)]
    fn option_with_type_inner_roundtrip(#[case] original: Option<i32>) {
        fn roundtrip<T>(value: T) -> T::WithType<T::Inner>
        where
            T: TypeConstructor + Into<T::WithType<T::Inner>>,
        {
            value.into()
        }

        let result: Option<i32> = roundtrip(original);
        assert_eq!(result, original);
    }
}
