//! A reassignable action box with a fixed call signature.
//!
//! Composites built from closures all have distinct, unnameable types, so a
//! field or variable cannot hold "some tree over `&In` producing `Out`"
//! without erasure. [`DynAction`] pins the signature as two type parameters
//! and boxes any composite matching it; the composite behind the box can be
//! swapped at any time, but only for one with the same inferred output type.
//! A mismatched assignment is rejected by the `Out` bound at compile time,
//! never at run time.

use crate::core::Act;

/// An invocable box over `&In -> Out`, reassignable to any action whose
/// inferred output is exactly `Out`.
///
/// The box itself implements [`Act`], so it composes like any other action.
///
/// # Example
///
/// ```rust
/// use arbor::core::{Act, Action};
/// use arbor::dynamic::DynAction;
///
/// // Fixed signature: f32 from &i32.
/// let mut slot = DynAction::<i32, f32>::new(Action::new(|i: &i32| *i as f32 / 2.0));
/// assert_eq!(slot.run(&3), 1.5);
///
/// slot.assign(Action::new(|i: &i32| (i * i) as f32));
/// assert_eq!(slot.run(&3), 9.0);
/// ```
pub struct DynAction<In, Out> {
    inner: Box<dyn Act<In, Out = Out> + Send>,
}

impl<In, Out> DynAction<In, Out> {
    /// Box an action. The action's inferred output must equal the declared
    /// `Out`; anything else fails to compile.
    pub fn new<A>(action: A) -> Self
    where
        A: Act<In, Out = Out> + Send + 'static,
    {
        DynAction {
            inner: Box::new(action),
        }
    }

    /// Replace the boxed action, under the same output constraint as
    /// [`new`](DynAction::new).
    pub fn assign<A>(&mut self, action: A)
    where
        A: Act<In, Out = Out> + Send + 'static,
    {
        self.inner = Box::new(action);
    }
}

impl<In, Out> Act<In> for DynAction<In, Out> {
    type Out = Out;

    fn run(&mut self, input: &In) -> Out {
        self.inner.run(input)
    }
}
