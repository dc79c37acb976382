//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// Each function is called exactly once, so any [`FnOnce`] works, including
/// the closures returned by the curried task combinators.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// ```
/// use thenable::pipe;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// assert_eq!(pipe!(12345, to_string, get_length), 5);
/// ```
///
/// With consuming closures:
///
/// ```
/// use thenable::pipe;
///
/// let suffix = String::from("!");
/// let shout = move |s: String| s.to_uppercase() + &suffix;
/// assert_eq!(pipe!(String::from("hey"), shout), "HEY!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
