//! The combinator algebra: actions, decisions, branches, stacks.
//!
//! Everything here composes by value: each combinator consumes its
//! operands and returns a new composite, so a finished tree has a single
//! owner and no aliasing. Composition happens once, at construction time;
//! invocation just walks the captured structure. The only composite with
//! run-time state is the edge-triggered decision
//! ([`Decide::on_rise`]/[`Decide::on_fall`]).

mod action;
mod branch;
mod decision;
mod either;
mod stack;

pub use action::{Act, Action, Map, Plus, Tap, Then, Zip};
pub use branch::{Branch, OrEffect, OrEither, OrElse, OrValue};
pub use decision::{And, Decide, Decision, Not, OnFall, OnRise, Or, When, WhenDo};
pub use either::Either;
pub use stack::{Stack, Terminate, TerminateSum};
