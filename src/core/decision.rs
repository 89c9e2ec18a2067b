//! Decisions: composable boolean predicates.
//!
//! A decision is the boolean-valued half of the algebra. Decisions combine
//! with each other through the usual logical connectives and with actions
//! three ways: conditionally ([`Decide::when`]), on signal edges
//! ([`Decide::on_rise`], [`Decide::on_fall`]), or into an if-arm
//! ([`Decide::branch`]) that later resolves against a fallback.

use super::action::Act;
use super::branch::Branch;

/// A composable boolean predicate over `&In`.
///
/// # Example
///
/// ```rust
/// use arbor::core::{Decide, Decision};
///
/// let even = Decision::new(|i: &i32| i % 2 == 0);
/// let big = Decision::new(|i: &i32| *i >= 100);
///
/// let mut small_and_even = big.not().and(even);
/// assert!(small_and_even.test(&4));
/// assert!(!small_and_even.test(&104));
/// assert!(!small_and_even.test(&3));
/// ```
pub trait Decide<In> {
    /// Evaluate the predicate on `input`.
    fn test(&mut self, input: &In) -> bool;

    /// Logical complement.
    fn not(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not { inner: self }
    }

    /// Short-circuit disjunction: `other` is not evaluated when `self`
    /// already holds.
    fn or<E>(self, other: E) -> Or<Self, E>
    where
        Self: Sized,
        E: Decide<In>,
    {
        Or {
            left: self,
            right: other,
        }
    }

    /// Short-circuit conjunction: `other` is not evaluated when `self`
    /// already fails.
    fn and<E>(self, other: E) -> And<Self, E>
    where
        Self: Sized,
        E: Decide<In>,
    {
        And {
            left: self,
            right: other,
        }
    }

    /// Fire `action` on the rising edge of this decision.
    ///
    /// The composite remembers the previous result (initially `false`).
    /// Each call evaluates the decision; when the remembered state was off
    /// and the new result is on, the action runs once for its side effect
    /// and its value is discarded. The call returns the fresh result.
    ///
    /// This is the one stateful composite in the algebra: the same instance
    /// carries memory across calls and must not be invoked concurrently
    /// without external synchronization.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor::core::{Action, Decide, Decision};
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let fired = Rc::new(Cell::new(0));
    /// let count = Rc::clone(&fired);
    ///
    /// let signal = Decision::new(|level: &bool| *level);
    /// let mut monitor = signal.on_rise(Action::new(move |_: &bool| {
    ///     count.set(count.get() + 1);
    /// }));
    ///
    /// for level in [false, false, true, true, false] {
    ///     monitor.test(&level);
    /// }
    /// assert_eq!(fired.get(), 1); // only the false -> true transition
    /// ```
    fn on_rise<A>(self, action: A) -> OnRise<Self, A>
    where
        Self: Sized,
        A: Act<In>,
    {
        OnRise {
            decision: self,
            action,
            last: false,
        }
    }

    /// Fire `action` on the falling edge of this decision.
    ///
    /// Counterpart of [`on_rise`](Decide::on_rise) with the remembered
    /// state starting `true`: the action runs when the state was on and the
    /// new result is off. Stateful, same caveats.
    fn on_fall<A>(self, action: A) -> OnFall<Self, A>
    where
        Self: Sized,
        A: Act<In>,
    {
        OnFall {
            decision: self,
            action,
            last: true,
        }
    }

    /// Guard an action: the result is `Some(action result)` when the
    /// decision holds, `None` otherwise, with the action untouched in the
    /// `None` case. No constraint on the action's result type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor::core::{Act, Action, Decide, Decision};
    ///
    /// let even = Decision::new(|i: &i32| i % 2 == 0);
    /// let mut halved = even.when(Action::new(|i: &i32| i / 2));
    ///
    /// assert_eq!(halved.run(&2), Some(1));
    /// assert_eq!(halved.run(&1), None);
    /// ```
    fn when<A>(self, action: A) -> When<Self, A>
    where
        Self: Sized,
        A: Act<In>,
    {
        When {
            decision: self,
            action,
        }
    }

    /// Guard a void action: it runs only when the decision holds, and the
    /// composite returns nothing either way. Requires `A::Out = ()`.
    fn when_do<A>(self, action: A) -> WhenDo<Self, A>
    where
        Self: Sized,
        A: Act<In, Out = ()>,
    {
        WhenDo {
            decision: self,
            action,
        }
    }

    /// Pair this decision with an action as one if-arm. Nothing is invoked;
    /// the [`Branch`] resolves later against a fallback action or extends
    /// into a stack of arms.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor::core::{Act, Action, Decide, Decision};
    ///
    /// let nonzero = Decision::new(|i: &i32| *i != 0);
    /// let mut tree = nonzero
    ///     .branch(Action::new(|i: &i32| 100 / i))
    ///     .or_else(Action::new(|_: &i32| 0));
    ///
    /// assert_eq!(tree.run(&4), 25);
    /// assert_eq!(tree.run(&0), 0);
    /// ```
    fn branch<A>(self, action: A) -> Branch<Self, A>
    where
        Self: Sized,
        A: Act<In>,
    {
        Branch {
            decision: self,
            action,
        }
    }
}

/// Lifts a raw boolean-valued closure into the algebra.
pub struct Decision<F> {
    f: F,
}

impl<F> Decision<F> {
    /// Wrap a closure as a decision.
    pub fn new<In>(f: F) -> Self
    where
        F: FnMut(&In) -> bool,
    {
        Decision { f }
    }
}

impl<In, F> Decide<In> for Decision<F>
where
    F: FnMut(&In) -> bool,
{
    fn test(&mut self, input: &In) -> bool {
        (self.f)(input)
    }
}

/// See [`Decide::not`].
pub struct Not<D> {
    inner: D,
}

impl<In, D> Decide<In> for Not<D>
where
    D: Decide<In>,
{
    fn test(&mut self, input: &In) -> bool {
        !self.inner.test(input)
    }
}

/// See [`Decide::or`].
pub struct Or<D, E> {
    left: D,
    right: E,
}

impl<In, D, E> Decide<In> for Or<D, E>
where
    D: Decide<In>,
    E: Decide<In>,
{
    fn test(&mut self, input: &In) -> bool {
        self.left.test(input) || self.right.test(input)
    }
}

/// See [`Decide::and`].
pub struct And<D, E> {
    left: D,
    right: E,
}

impl<In, D, E> Decide<In> for And<D, E>
where
    D: Decide<In>,
    E: Decide<In>,
{
    fn test(&mut self, input: &In) -> bool {
        self.left.test(input) && self.right.test(input)
    }
}

/// See [`Decide::on_rise`]. Stateful.
pub struct OnRise<D, A> {
    decision: D,
    action: A,
    last: bool,
}

impl<In, D, A> Decide<In> for OnRise<D, A>
where
    D: Decide<In>,
    A: Act<In>,
{
    fn test(&mut self, input: &In) -> bool {
        let now = self.decision.test(input);
        if !self.last && now {
            let _ = self.action.run(input);
        }
        self.last = now;
        now
    }
}

/// See [`Decide::on_fall`]. Stateful.
pub struct OnFall<D, A> {
    decision: D,
    action: A,
    last: bool,
}

impl<In, D, A> Decide<In> for OnFall<D, A>
where
    D: Decide<In>,
    A: Act<In>,
{
    fn test(&mut self, input: &In) -> bool {
        let now = self.decision.test(input);
        if self.last && !now {
            let _ = self.action.run(input);
        }
        self.last = now;
        now
    }
}

/// See [`Decide::when`].
pub struct When<D, A> {
    decision: D,
    action: A,
}

impl<In, D, A> Act<In> for When<D, A>
where
    D: Decide<In>,
    A: Act<In>,
{
    type Out = Option<A::Out>;

    fn run(&mut self, input: &In) -> Option<A::Out> {
        if self.decision.test(input) {
            Some(self.action.run(input))
        } else {
            None
        }
    }
}

/// See [`Decide::when_do`].
pub struct WhenDo<D, A> {
    decision: D,
    action: A,
}

impl<In, D, A> Act<In> for WhenDo<D, A>
where
    D: Decide<In>,
    A: Act<In, Out = ()>,
{
    type Out = ();

    fn run(&mut self, input: &In) {
        if self.decision.test(input) {
            self.action.run(input);
        }
    }
}
