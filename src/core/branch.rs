//! Branches: one if-arm, awaiting its else.
//!
//! A [`Branch`] pairs a decision with an action and is deliberately not
//! invocable. It becomes an action by resolving against a fallback, or it
//! chains with further branches into a [`Stack`](super::Stack). Resolution
//! evaluates the decision once per call and runs exactly one side, which
//! is the defining difference from action sequencing: sequencing always
//! runs both.
//!
//! Like action sequencing, the shape of the resolved result is a
//! compile-time choice. Pick the method for the first rule that applies:
//!
//! 1. arm and fallback share one output type: [`Branch::or_else`] yields
//!    that type, unwrapped;
//! 2. the arm's output is `()`: [`Branch::or_value`] yields `Option` of
//!    the fallback's output, `None` when the arm fired;
//! 3. the fallback's output is `()`: [`Branch::or_effect`] yields `Option`
//!    of the arm's output;
//! 4. two distinct types: [`Branch::or_either`] yields an [`Either`]
//!    tagged with the side that fired.

use super::action::Act;
use super::decision::Decide;
use super::either::Either;
use super::stack::Stack;

/// One (decision, action) arm of an if/else-if chain.
///
/// Built by [`Decide::branch`]; owns both halves by value.
pub struct Branch<D, A> {
    pub(crate) decision: D,
    pub(crate) action: A,
}

impl<D, A> Branch<D, A> {
    /// Resolve with a fallback of the same output type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor::core::{Act, Action, Decide, Decision};
    ///
    /// let nonzero = Decision::new(|i: &i32| *i != 0);
    /// let mut tree = nonzero
    ///     .branch(Action::new(|i: &i32| *i))
    ///     .or_else(Action::new(|i: &i32| i * 3));
    ///
    /// assert_eq!(tree.run(&5), 5);
    /// assert_eq!(tree.run(&0), 0);
    /// ```
    pub fn or_else<In, F>(self, fallback: F) -> OrElse<D, A, F>
    where
        D: Decide<In>,
        A: Act<In>,
        F: Act<In, Out = A::Out>,
    {
        OrElse {
            branch: self,
            fallback,
        }
    }

    /// Resolve a void arm with a value-producing fallback.
    ///
    /// The result is `Some(fallback result)` when the decision fails and
    /// `None` after running the arm for effect when it holds.
    pub fn or_value<In, F>(self, fallback: F) -> OrValue<D, A, F>
    where
        D: Decide<In>,
        A: Act<In, Out = ()>,
        F: Act<In>,
    {
        OrValue {
            branch: self,
            fallback,
        }
    }

    /// Resolve a value-producing arm with a void fallback.
    ///
    /// Mirror image of [`or_value`](Branch::or_value): `Some(arm result)`
    /// when the decision holds, `None` after running the fallback for
    /// effect when it fails.
    pub fn or_effect<In, F>(self, fallback: F) -> OrEffect<D, A, F>
    where
        D: Decide<In>,
        A: Act<In>,
        F: Act<In, Out = ()>,
    {
        OrEffect {
            branch: self,
            fallback,
        }
    }

    /// Resolve with a fallback of a different output type.
    ///
    /// The result is an [`Either`]: `Left` carries the arm's result,
    /// `Right` the fallback's, so which side fired is always recoverable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor::core::{Act, Action, Decide, Decision, Either};
    ///
    /// let nonzero = Decision::new(|i: &i32| *i != 0);
    /// let mut tree = nonzero
    ///     .branch(Action::new(|i: &i32| 100 / i))
    ///     .or_either(Action::new(|_: &i32| "division by zero"));
    ///
    /// assert_eq!(tree.run(&4), Either::Left(25));
    /// assert_eq!(tree.run(&0), Either::Right("division by zero"));
    /// ```
    pub fn or_either<In, F>(self, fallback: F) -> OrEither<D, A, F>
    where
        D: Decide<In>,
        A: Act<In>,
        F: Act<In>,
    {
        OrEither {
            branch: self,
            fallback,
        }
    }

    /// Open an else-if chain with a second arm. Nothing is invoked; the
    /// resulting [`Stack`] stays open until a terminal fallback arrives.
    pub fn chain<D2, A2>(self, next: Branch<D2, A2>) -> Stack<Branch<D, A>, Branch<D2, A2>> {
        Stack::open(self, next)
    }
}

/// See [`Branch::or_else`].
pub struct OrElse<D, A, F> {
    branch: Branch<D, A>,
    fallback: F,
}

impl<In, D, A, F> Act<In> for OrElse<D, A, F>
where
    D: Decide<In>,
    A: Act<In>,
    F: Act<In, Out = A::Out>,
{
    type Out = A::Out;

    fn run(&mut self, input: &In) -> A::Out {
        if self.branch.decision.test(input) {
            self.branch.action.run(input)
        } else {
            self.fallback.run(input)
        }
    }
}

/// See [`Branch::or_value`].
pub struct OrValue<D, A, F> {
    branch: Branch<D, A>,
    fallback: F,
}

impl<In, D, A, F> Act<In> for OrValue<D, A, F>
where
    D: Decide<In>,
    A: Act<In, Out = ()>,
    F: Act<In>,
{
    type Out = Option<F::Out>;

    fn run(&mut self, input: &In) -> Option<F::Out> {
        if self.branch.decision.test(input) {
            self.branch.action.run(input);
            None
        } else {
            Some(self.fallback.run(input))
        }
    }
}

/// See [`Branch::or_effect`].
pub struct OrEffect<D, A, F> {
    branch: Branch<D, A>,
    fallback: F,
}

impl<In, D, A, F> Act<In> for OrEffect<D, A, F>
where
    D: Decide<In>,
    A: Act<In>,
    F: Act<In, Out = ()>,
{
    type Out = Option<A::Out>;

    fn run(&mut self, input: &In) -> Option<A::Out> {
        if self.branch.decision.test(input) {
            Some(self.branch.action.run(input))
        } else {
            self.fallback.run(input);
            None
        }
    }
}

/// See [`Branch::or_either`].
pub struct OrEither<D, A, F> {
    branch: Branch<D, A>,
    fallback: F,
}

impl<In, D, A, F> Act<In> for OrEither<D, A, F>
where
    D: Decide<In>,
    A: Act<In>,
    F: Act<In>,
{
    type Out = Either<A::Out, F::Out>;

    fn run(&mut self, input: &In) -> Self::Out {
        // The decision runs once, whichever side it selects.
        if self.branch.decision.test(input) {
            Either::Left(self.branch.action.run(input))
        } else {
            Either::Right(self.fallback.run(input))
        }
    }
}
