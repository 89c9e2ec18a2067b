//! The two-case alternative produced by heterogeneous branch resolution.

use serde::{Deserialize, Serialize};

/// A value that is exactly one of two types, tagged by which side
/// produced it.
///
/// Branch resolution puts the arm's result in `Left` and the fallback's in
/// `Right`; folded heterogeneous stacks nest further `Either`s on the
/// `Right` side, one level per arm.
///
/// # Example
///
/// ```rust
/// use arbor::core::Either;
///
/// let hit: Either<i32, &str> = Either::Left(7);
/// let miss: Either<i32, &str> = Either::Right("fallback");
///
/// assert_eq!(hit.left(), Some(7));
/// assert_eq!(miss.left(), None);
/// assert_eq!(miss.visit(|n| n.to_string(), |s| s.to_string()), "fallback");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Either<L, R> {
    /// The first case; branch resolution uses it for the arm's result.
    Left(L),
    /// The second case; branch resolution uses it for the fallback's result.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// True when this is the `Left` case.
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// True when this is the `Right` case.
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// The `Left` value, if that side is active.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// The `Right` value, if that side is active.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Borrow both cases in place.
    pub fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Apply `f` to the `Left` case, leaving `Right` untouched.
    pub fn map_left<T>(self, f: impl FnOnce(L) -> T) -> Either<T, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Apply `f` to the `Right` case, leaving `Left` untouched.
    pub fn map_right<T>(self, f: impl FnOnce(R) -> T) -> Either<L, T> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }

    /// Dispatch over the active case: apply the handler matching the side
    /// that holds the value. Both handlers must agree on a result type.
    pub fn visit<T>(self, on_left: impl FnOnce(L) -> T, on_right: impl FnOnce(R) -> T) -> T {
        match self {
            Either::Left(l) => on_left(l),
            Either::Right(r) => on_right(r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_queries_report_the_active_side() {
        let left: Either<i32, &str> = Either::Left(1);
        let right: Either<i32, &str> = Either::Right("r");

        assert!(left.is_left() && !left.is_right());
        assert!(right.is_right() && !right.is_left());
        assert_eq!(left.left(), Some(1));
        assert_eq!(left.right(), None);
        assert_eq!(right.right(), Some("r"));
    }

    #[test]
    fn maps_touch_only_their_side() {
        let left: Either<i32, &str> = Either::Left(2);

        assert_eq!(left.map_left(|n| n * 10), Either::Left(20));
        assert_eq!(left.map_right(|s: &str| s.len()), Either::Left(2));
    }

    #[test]
    fn visit_selects_the_matching_handler() {
        let left: Either<i32, &str> = Either::Left(2);
        let right: Either<i32, &str> = Either::Right("seven");

        assert_eq!(left.visit(|n| n as usize, |s| s.len()), 2);
        assert_eq!(right.visit(|n| n as usize, |s| s.len()), 5);
    }

    #[test]
    fn either_round_trips_through_serde() {
        let value: Either<i32, String> = Either::Right("fallback".to_string());

        let json = serde_json::to_string(&value).unwrap();
        let back: Either<i32, String> = serde_json::from_str(&json).unwrap();

        assert_eq!(back, value);
    }
}
