//! Property-based tests for `nullable::map`.
//!
//! - **Identity**: `map(v, |x| x) == v`
//! - **Composition**: `map(map(v, f), g) == map(v, |x| g(f(x)))`
//! - **Absence is terminal**: `map(None, f) == None` and `f` is not called

use proptest::prelude::*;
use std::cell::Cell;
use thenable::nullable;

proptest! {
    #[test]
    fn prop_nullable_identity(value in any::<Option<String>>()) {
        prop_assert_eq!(nullable::map(value.clone(), |x| x), value);
    }

    #[test]
    fn prop_nullable_composition(value in any::<Option<i64>>()) {
        let function1 = |n: i64| n.wrapping_mul(3);
        let function2 = |n: i64| n.to_string();

        let left = nullable::map(nullable::map(value, function1), function2);
        let right = nullable::map(value, |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_nullable_present_applies_once(value: u32) {
        let calls = Cell::new(0);
        let result = nullable::map(Some(value), |n| {
            calls.set(calls.get() + 1);
            u64::from(n) + 1
        });
        prop_assert_eq!(result, Some(u64::from(value) + 1));
        prop_assert_eq!(calls.get(), 1);
    }
}

#[test]
fn absent_value_never_calls_function() {
    let called = Cell::new(false);
    let result = nullable::map(None::<u8>, |n| {
        called.set(true);
        n
    });
    assert_eq!(result, None);
    assert!(!called.get());
}
