//! Actions and action composition.
//!
//! An action is a composable computation with no boolean meaning: it takes a
//! reference to an input and may or may not produce a value. Raw closures are
//! lifted into the algebra with [`Action::new`]; everything built from them
//! (sequences, branches, folded stacks) implements [`Act`] and therefore
//! remains a plain invocable that can be composed further, the same way every
//! iterator adapter is itself an iterator.
//!
//! Composition never inspects values at runtime. Each combinator fixes the
//! shape of the combined result at the call site through its trait bounds;
//! see [`Act`] for the resolution table.

use std::ops::Add;

/// A composable computation over `&In`.
///
/// `run` takes `&mut self` because one composite in the algebra (the
/// edge-triggered decision, see [`on_rise`](super::Decide::on_rise)) carries
/// memory between calls; everything else is pure and merely threads the
/// receiver through.
///
/// # Sequencing two actions
///
/// Running two actions on the same input always invokes both, left to right,
/// exactly once. What the combined action returns depends on the operand
/// result types, and the choice is made entirely at compile time. Pick the
/// combinator for the first rule that applies:
///
/// 1. left output is `()`: [`then`](Act::then) yields the right output;
/// 2. right output is `()`: [`tap`](Act::tap) yields the left output, the
///    right action runs for effect;
/// 3. the outputs add: [`plus`](Act::plus) yields the sum;
/// 4. otherwise: [`zip`](Act::zip) yields the pair.
///
/// A combinator whose rule does not apply to the operand types fails to
/// compile with the violated bound in the diagnostic.
///
/// # Example
///
/// ```rust
/// use arbor::core::{Act, Action};
///
/// let double = Action::new(|i: &i32| i * 2);
/// let triple = Action::new(|i: &i32| i * 3);
///
/// // i32 adds, so rule 3 applies.
/// let mut sum = double.plus(triple);
/// assert_eq!(sum.run(&4), 20);
/// ```
pub trait Act<In> {
    /// The statically inferred result type of one invocation.
    type Out;

    /// Invoke the computation on `input`.
    fn run(&mut self, input: &In) -> Self::Out;

    /// Sequence rule 1: run `self` for effect, then `second`; yield the
    /// second result. Requires `Self::Out = ()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor::core::{Act, Action};
    ///
    /// let log = Action::new(|_: &i32| ());
    /// let mut tree = log.then(Action::new(|i: &i32| i + 1));
    /// assert_eq!(tree.run(&4), 5);
    /// ```
    fn then<B>(self, second: B) -> Then<Self, B>
    where
        Self: Sized + Act<In, Out = ()>,
        B: Act<In>,
    {
        Then {
            first: self,
            second,
        }
    }

    /// Sequence rule 2: run `self`, capture its result, run `second` for
    /// effect, yield the captured result. Requires `B::Out = ()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor::core::{Act, Action};
    ///
    /// let value = Action::new(|i: &i32| i + 1);
    /// let mut tree = value.tap(Action::new(|_: &i32| ()));
    /// assert_eq!(tree.run(&4), 5);
    /// ```
    fn tap<B>(self, second: B) -> Tap<Self, B>
    where
        Self: Sized,
        B: Act<In, Out = ()>,
    {
        Tap {
            first: self,
            second,
        }
    }

    /// Sequence rule 3: run both and yield `left + right`. Requires
    /// `Self::Out: Add<B::Out>`.
    fn plus<B>(self, second: B) -> Plus<Self, B>
    where
        Self: Sized,
        B: Act<In>,
        Self::Out: Add<B::Out>,
    {
        Plus {
            first: self,
            second,
        }
    }

    /// Sequence rule 4: run both and yield the pair of results.
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor::core::{Act, Action};
    ///
    /// let name = Action::new(|i: &i32| format!("#{i}"));
    /// let even = Action::new(|i: &i32| i % 2 == 0);
    /// let mut tree = name.zip(even);
    /// assert_eq!(tree.run(&4), ("#4".to_string(), true));
    /// ```
    fn zip<B>(self, second: B) -> Zip<Self, B>
    where
        Self: Sized,
        B: Act<In>,
    {
        Zip {
            first: self,
            second,
        }
    }

    /// Feed each result to `f`, the sequencing step that hands a
    /// composite's output (plain, optional, or [`Either`]) to a downstream
    /// consumer such as the dispatch helpers in [`crate::visit`].
    ///
    /// [`Either`]: super::Either
    ///
    /// # Example
    ///
    /// ```rust
    /// use arbor::core::{Act, Action, Decide, Decision};
    ///
    /// let nonzero = Decision::new(|i: &i32| *i != 0);
    /// let mut label = nonzero
    ///     .when(Action::new(|i: &i32| 100 / i))
    ///     .map(|quotient| match quotient {
    ///         Some(q) => format!("100/i = {q}"),
    ///         None => "undefined".to_string(),
    ///     });
    /// assert_eq!(label.run(&4), "100/i = 25");
    /// assert_eq!(label.run(&0), "undefined");
    /// ```
    fn map<F, R>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Out) -> R,
    {
        Map { inner: self, f }
    }
}

/// Lifts a raw closure into the algebra.
///
/// The wrapped callable must be `FnMut(&In) -> Out` for exactly one input
/// type; the result type is inferred from the closure, never stated.
///
/// # Example
///
/// ```rust
/// use arbor::core::{Act, Action};
///
/// let mut halve = Action::new(|i: &i32| *i as f32 / 2.0);
/// assert_eq!(halve.run(&3), 1.5);
/// ```
pub struct Action<F> {
    f: F,
}

impl<F> Action<F> {
    /// Wrap a closure as an action.
    pub fn new<In, Out>(f: F) -> Self
    where
        F: FnMut(&In) -> Out,
    {
        Action { f }
    }
}

impl<In, Out, F> Act<In> for Action<F>
where
    F: FnMut(&In) -> Out,
{
    type Out = Out;

    fn run(&mut self, input: &In) -> Out {
        (self.f)(input)
    }
}

/// See [`Act::then`].
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<In, A, B> Act<In> for Then<A, B>
where
    A: Act<In, Out = ()>,
    B: Act<In>,
{
    type Out = B::Out;

    fn run(&mut self, input: &In) -> B::Out {
        self.first.run(input);
        self.second.run(input)
    }
}

/// See [`Act::tap`].
pub struct Tap<A, B> {
    first: A,
    second: B,
}

impl<In, A, B> Act<In> for Tap<A, B>
where
    A: Act<In>,
    B: Act<In, Out = ()>,
{
    type Out = A::Out;

    fn run(&mut self, input: &In) -> A::Out {
        let out = self.first.run(input);
        self.second.run(input);
        out
    }
}

/// See [`Act::plus`].
pub struct Plus<A, B> {
    first: A,
    second: B,
}

impl<In, A, B> Act<In> for Plus<A, B>
where
    A: Act<In>,
    B: Act<In>,
    A::Out: Add<B::Out>,
{
    type Out = <A::Out as Add<B::Out>>::Output;

    fn run(&mut self, input: &In) -> Self::Out {
        // Operands run left to right.
        let left = self.first.run(input);
        let right = self.second.run(input);
        left + right
    }
}

/// See [`Act::zip`].
pub struct Zip<A, B> {
    first: A,
    second: B,
}

impl<In, A, B> Act<In> for Zip<A, B>
where
    A: Act<In>,
    B: Act<In>,
{
    type Out = (A::Out, B::Out);

    fn run(&mut self, input: &In) -> Self::Out {
        let left = self.first.run(input);
        let right = self.second.run(input);
        (left, right)
    }
}

/// See [`Act::map`].
pub struct Map<A, F> {
    inner: A,
    f: F,
}

impl<In, A, F, R> Act<In> for Map<A, F>
where
    A: Act<In>,
    F: FnMut(A::Out) -> R,
{
    type Out = R;

    fn run(&mut self, input: &In) -> R {
        (self.f)(self.inner.run(input))
    }
}
