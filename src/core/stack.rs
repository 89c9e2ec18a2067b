//! Stacks: open if/else-if chains and their terminal fold.
//!
//! A [`Stack`] is an ordered sequence of branch arms with no fallback yet.
//! It is built by [`Branch::chain`], extended with further arms by
//! [`Stack::chain`], and stays non-invocable until a terminal fallback
//! action arrives. Supplying one folds the arms right to left: the last arm
//! resolves against the fallback first, and the resulting action becomes the
//! fallback for the arm before it, out to the first arm.
//!
//! Invoking the folded action therefore tests decisions strictly in chain
//! order, first to last, and runs only the action of the first decision
//! that holds, or the terminal fallback when none does.
//!
//! Two folds cover the two chain shapes:
//!
//! - [`Terminate::finish`]: every arm and the fallback share one output
//!   type; the result is that type, unwrapped.
//! - [`TerminateSum::finish_sum`]: heterogeneous outputs; every fold step
//!   nests one more [`Either`](super::Either) level, with the last
//!   arm/fallback pair innermost.
//!
//! Chains mixing void and valued arms are written by nesting the
//! [`Branch`] resolution methods directly; the fold is right-associative,
//! so `b1.or_either(b2.or_value(f))` spells the same reduction explicitly.

use super::action::Act;
use super::branch::{Branch, OrEither, OrElse};
use super::decision::Decide;

/// An open chain of branch arms, in evaluation order.
///
/// The chain nests to the left: `b1.chain(b2).chain(b3)` is
/// `Stack<Stack<Branch, Branch>, Branch>`, keeping the most recent arm
/// outermost so the fold peels arms off the tail first.
///
/// # Example
///
/// ```rust
/// use arbor::core::{Act, Action, Decide, Decision, Terminate};
///
/// let select = |n: i32| Decision::new(move |i: &i32| *i == n);
/// let name = |s: &'static str| Action::new(move |_: &i32| s);
///
/// let mut what = select(0)
///     .branch(name("a"))
///     .chain(select(1).branch(name("b")))
///     .finish(name("c"));
///
/// assert_eq!(what.run(&0), "a");
/// assert_eq!(what.run(&1), "b");
/// assert_eq!(what.run(&2), "c");
/// ```
pub struct Stack<S, B> {
    inner: S,
    last: B,
}

impl<S, B> Stack<S, B> {
    pub(crate) fn open(inner: S, last: B) -> Self {
        Stack { inner, last }
    }

    /// Append one more arm; the chain stays open.
    pub fn chain<D, A>(self, next: Branch<D, A>) -> Stack<Self, Branch<D, A>> {
        Stack {
            inner: self,
            last: next,
        }
    }
}

/// Right-to-left fold of a homogeneous chain: all arms and the terminal
/// fallback produce one output type, and so does the folded action.
pub trait Terminate<In, F>: Sized {
    /// The folded, invocable decision tree.
    type Resolved: Act<In>;

    /// Close the chain with its terminal fallback.
    fn finish(self, fallback: F) -> Self::Resolved;
}

impl<In, D, A, F> Terminate<In, F> for Branch<D, A>
where
    D: Decide<In>,
    A: Act<In>,
    F: Act<In, Out = A::Out>,
{
    type Resolved = OrElse<D, A, F>;

    fn finish(self, fallback: F) -> Self::Resolved {
        self.or_else(fallback)
    }
}

impl<In, S, D, A, F> Terminate<In, F> for Stack<S, Branch<D, A>>
where
    D: Decide<In>,
    A: Act<In>,
    F: Act<In, Out = A::Out>,
    S: Terminate<In, OrElse<D, A, F>>,
{
    type Resolved = S::Resolved;

    fn finish(self, fallback: F) -> Self::Resolved {
        // Last arm + fallback first; the result is the new fallback.
        self.inner.finish(self.last.or_else(fallback))
    }
}

/// Right-to-left fold of a heterogeneous chain: each step wraps one more
/// [`Either`](super::Either) level around the tail.
///
/// For arms producing `A1`, `A2` and a fallback producing `F`, the folded
/// output is `Either<A1, Either<A2, F>>`: `Left` at each level means "this
/// arm fired", the innermost `Right` means "the fallback ran".
///
/// # Example
///
/// ```rust
/// use arbor::core::{Act, Action, Decide, Decision, Either, TerminateSum};
///
/// let select = |n: i32| Decision::new(move |i: &i32| *i == n);
///
/// let mut tree = select(0)
///     .branch(Action::new(|i: &i32| i + 100))
///     .chain(select(1).branch(Action::new(|i: &i32| *i as f64)))
///     .finish_sum(Action::new(|_: &i32| "fallback"));
///
/// assert_eq!(tree.run(&0), Either::Left(100));
/// assert_eq!(tree.run(&1), Either::Right(Either::Left(1.0)));
/// assert_eq!(tree.run(&2), Either::Right(Either::Right("fallback")));
/// ```
pub trait TerminateSum<In, F>: Sized {
    /// The folded, invocable decision tree.
    type Resolved: Act<In>;

    /// Close the chain with its terminal fallback.
    fn finish_sum(self, fallback: F) -> Self::Resolved;
}

impl<In, D, A, F> TerminateSum<In, F> for Branch<D, A>
where
    D: Decide<In>,
    A: Act<In>,
    F: Act<In>,
{
    type Resolved = OrEither<D, A, F>;

    fn finish_sum(self, fallback: F) -> Self::Resolved {
        self.or_either(fallback)
    }
}

impl<In, S, D, A, F> TerminateSum<In, F> for Stack<S, Branch<D, A>>
where
    D: Decide<In>,
    A: Act<In>,
    F: Act<In>,
    S: TerminateSum<In, OrEither<D, A, F>>,
{
    type Resolved = S::Resolved;

    fn finish_sum(self, fallback: F) -> Self::Resolved {
        self.inner.finish_sum(self.last.or_either(fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Action, Decision, Either};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn select(n: i32) -> Decision<impl FnMut(&i32) -> bool> {
        Decision::new(move |i: &i32| *i == n)
    }

    #[test]
    fn homogeneous_chain_resolves_to_the_shared_type() {
        let name = |s: &'static str| Action::new(move |_: &i32| s);

        let mut what = select(0)
            .branch(name("a"))
            .chain(select(1).branch(name("b")))
            .finish(name("c"));

        assert_eq!(what.run(&0), "a");
        assert_eq!(what.run(&1), "b");
        assert_eq!(what.run(&2), "c");
    }

    #[test]
    fn three_arm_chain_keeps_evaluation_order() {
        let name = |s: &'static str| Action::new(move |_: &i32| s);

        let mut what = select(0)
            .branch(name("a"))
            .chain(select(1).branch(name("b")))
            .chain(select(2).branch(name("c")))
            .finish(name("d"));

        assert_eq!(what.run(&0), "a");
        assert_eq!(what.run(&1), "b");
        assert_eq!(what.run(&2), "c");
        assert_eq!(what.run(&3), "d");
    }

    #[test]
    fn heterogeneous_chain_nests_one_either_per_arm() {
        let mut tree = select(0)
            .branch(Action::new(|i: &i32| i + 100))
            .chain(select(1).branch(Action::new(|i: &i32| *i as f64)))
            .finish_sum(Action::new(|_: &i32| "fallback"));

        assert_eq!(tree.run(&0), Either::Left(100));
        assert_eq!(tree.run(&1), Either::Right(Either::Left(1.0)));
        assert_eq!(tree.run(&2), Either::Right(Either::Right("fallback")));
    }

    #[test]
    fn fold_stops_at_the_first_true_decision() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let probe = |name: &'static str, n: i32, log: &Rc<RefCell<Vec<&'static str>>>| {
            let log = Rc::clone(log);
            Decision::new(move |i: &i32| {
                log.borrow_mut().push(name);
                *i == n
            })
        };
        let arm = |name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>| {
            let log = Rc::clone(log);
            Action::new(move |_: &i32| {
                log.borrow_mut().push(name);
                0
            })
        };

        let mut tree = probe("d1", 0, &log)
            .branch(arm("a1", &log))
            .chain(probe("d2", 1, &log).branch(arm("a2", &log)))
            .finish(arm("f", &log));

        tree.run(&0);
        assert_eq!(*log.borrow(), vec!["d1", "a1"]);

        log.borrow_mut().clear();
        tree.run(&9);
        assert_eq!(*log.borrow(), vec!["d1", "d2", "f"]);
    }
}
