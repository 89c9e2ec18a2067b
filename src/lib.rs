//! Arbor: decision/action trees from plain functions.
//!
//! Arbor replaces hand-written branching logic with a small combinator
//! algebra. Plain closures become composable [`Action`]s (computations that
//! may produce a value) and [`Decision`]s (boolean predicates); combinators
//! assemble them into branches, else-if chains, and guarded effects. The
//! finished tree is itself a plain invocable that composes further.
//!
//! Every composition decides the shape of its combined result at compile
//! time from its operands' result types (nothing, a shared type, a sum, a
//! pair, an [`Either`], or an `Option`); a combinator whose operands cannot
//! satisfy its shape fails to compile. At run time there is nothing left to
//! check: invocation walks the captured structure.
//!
//! # Core Concepts
//!
//! - **Action** ([`Act`]): a composable computation, sequenced with `then`,
//!   `tap`, `plus`, `zip`, `map`
//! - **Decision** ([`Decide`]): a composable predicate, with `not`, `or`,
//!   `and`, edge triggers, and conditional actions
//! - **Branch** and **Stack**: if-arms and open else-if chains, folded into
//!   a single action by a terminal fallback
//! - **DynAction**: a reassignable box holding any tree behind a fixed
//!   signature
//!
//! # Example
//!
//! ```rust
//! use arbor::core::{Act, Action, Decide, Decision};
//!
//! let nonzero = Decision::new(|i: &i32| *i != 0);
//! let invert = Action::new(|i: &i32| 1.0 / *i as f64);
//! let zero = Action::new(|_: &i32| 0.0);
//!
//! // if nonzero { invert } else { zero }, as one invocable value.
//! let mut tree = nonzero.branch(invert).or_else(zero);
//!
//! assert_eq!(tree.run(&4), 0.25);
//! assert_eq!(tree.run(&0), 0.0);
//! ```

pub mod core;
pub mod dynamic;
pub mod visit;

// Re-export commonly used types
pub use crate::core::{
    Act, Action, Branch, Decide, Decision, Either, Stack, Terminate, TerminateSum,
};
pub use crate::dynamic::DynAction;
