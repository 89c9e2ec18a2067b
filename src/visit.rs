//! Dispatch helpers for the optional and alternative results the algebra
//! emits.
//!
//! Tagged-union dispatch is [`Either::visit`](crate::core::Either::visit).
//! The functions here cover the optional side: apply a handler to a present
//! value, and otherwise fall back to, in order of preference, a provided
//! alternative value ([`some_or`]), a zero-argument fallback handler
//! ([`some_or_else`]), or a default-constructed result
//! ([`some_or_default`]).
//!
//! Wire a dispatcher onto a tree with [`Act::map`](crate::core::Act::map):
//!
//! ```rust
//! use arbor::core::{Act, Action, Decide, Decision};
//! use arbor::visit;
//!
//! let even = Decision::new(|i: &i32| i % 2 == 0);
//! let mut tree = even
//!     .when(Action::new(|i: &i32| i / 2))
//!     .map(|half| visit::some_or(half, |h| h.to_string(), -1));
//!
//! assert_eq!(tree.run(&8), "4");
//! assert_eq!(tree.run(&7), "-1");
//! ```

/// Apply `handler` to the present value, or to `alternative` when absent.
pub fn some_or<T, R>(value: Option<T>, handler: impl FnOnce(T) -> R, alternative: T) -> R {
    handler(value.unwrap_or(alternative))
}

/// Apply `handler` to the present value, or produce the result from
/// `fallback` when absent.
pub fn some_or_else<T, R>(
    value: Option<T>,
    handler: impl FnOnce(T) -> R,
    fallback: impl FnOnce() -> R,
) -> R {
    match value {
        Some(v) => handler(v),
        None => fallback(),
    }
}

/// Apply `handler` to the present value, or default-construct the result
/// when absent.
pub fn some_or_default<T, R>(value: Option<T>, handler: impl FnOnce(T) -> R) -> R
where
    R: Default,
{
    match value {
        Some(v) => handler(v),
        None => R::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn some_or_feeds_the_alternative_through_the_handler() {
        assert_eq!(some_or(Some(4), |n: i32| n * 10, 9), 40);
        assert_eq!(some_or(None, |n: i32| n * 10, 9), 90);
    }

    #[test]
    fn some_or_else_uses_the_fallback_only_when_absent() {
        assert_eq!(some_or_else(Some(4), |n: i32| n * 10, || -1), 40);
        assert_eq!(some_or_else(None, |n: i32| n * 10, || -1), -1);
    }

    #[test]
    fn some_or_default_falls_back_to_default() {
        assert_eq!(some_or_default(Some("x"), |s| s.len()), 1);
        assert_eq!(some_or_default(None::<&str>, |s| s.len()), 0);
    }
}
