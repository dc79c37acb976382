//! Mapping over possibly-absent values.
//!
//! A [`Nullable<A>`] is either a present `A` or absent. Absence is terminal
//! under [`map`]: once a value is absent it stays absent and the mapping
//! function is never called.
//!
//! # Examples
//!
//! ```rust
//! use thenable::nullable::{self, Nullable};
//!
//! let port: Nullable<&str> = Some("8080");
//! assert_eq!(nullable::map(port, str::len), Some(4));
//!
//! let missing: Nullable<&str> = None;
//! assert_eq!(nullable::map(missing, str::len), None);
//! ```

/// A value of type `A` that may be absent.
pub type Nullable<A> = Option<A>;

/// Transforms a possibly-absent value.
///
/// Returns `function(value)` when `value` is present and `None` otherwise.
/// The function is never invoked for an absent value. Panics raised by
/// `function` propagate to the caller.
///
/// # Examples
///
/// ```rust
/// use thenable::nullable;
///
/// assert_eq!(nullable::map(Some(3), |n| n * 2), Some(6));
/// assert_eq!(nullable::map(None::<i32>, |n| n * 2), None);
/// ```
#[inline]
pub fn map<A, B, F>(value: Nullable<A>, function: F) -> Nullable<B>
where
    F: FnOnce(A) -> B,
{
    value.map(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(Some(1), Some(2))]
    #[case(Some(-4), Some(-3))]
    #[case(None, None)]
    fn map_increments_present_values(#[case] input: Nullable<i32>, #[case] expected: Nullable<i32>) {
        assert_eq!(map(input, |n| n + 1), expected);
    }

    #[rstest]
    fn map_changes_the_value_type() {
        let length = map(Some("hello".to_string()), |s| s.len());
        assert_eq!(length, Some(5));
    }

    #[rstest]
    fn map_never_calls_function_on_absent() {
        let calls = Cell::new(0);
        let result = map(None::<i32>, |n| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(result, None);
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn map_calls_function_exactly_once_on_present() {
        let calls = Cell::new(0);
        let _ = map(Some(7), |n| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn map_can_produce_nested_absence() {
        let result: Nullable<Nullable<i32>> = map(Some(0), |n| if n > 0 { Some(n) } else { None });
        assert_eq!(result, Some(None));
    }

    #[rstest]
    #[should_panic(expected = "boom")]
    fn map_propagates_panics_from_function() {
        let _ = map(Some(1), |_: i32| -> i32 { panic!("boom") });
    }
}
