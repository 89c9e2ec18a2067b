//! End-to-end scenarios for complete decision trees.
//!
//! Builds the trees a user of the library would write: combined actions
//! over domain values, conditional and edge-triggered decisions, branch
//! resolution in all four shapes, folded chains, and the reassignable box.

use arbor::core::{Act, Action, Decide, Decision, Either, Terminate, TerminateSum};
use arbor::dynamic::DynAction;
use arbor::visit;
use std::ops::Add;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Value(i32);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Addable(i32);

impl Add for Addable {
    type Output = Addable;

    fn add(self, other: Addable) -> Addable {
        Addable(self.0 + other.0)
    }
}

/// Deliberately not `Default`: conditional actions and branch resolution
/// must not require default construction of result types.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct NoDefault(i32);

fn make_value() -> Action<impl FnMut(&i32) -> Value> {
    Action::new(|i: &i32| Value(*i))
}

fn make_value_alt() -> Action<impl FnMut(&i32) -> Value> {
    Action::new(|i: &i32| Value(i * 3))
}

fn make_addable() -> Action<impl FnMut(&i32) -> Addable> {
    Action::new(|i: &i32| Addable(i * 2))
}

fn make_addable_alt() -> Action<impl FnMut(&i32) -> Addable> {
    Action::new(|i: &i32| Addable(i * 5))
}

fn make_no_default() -> Action<impl FnMut(&i32) -> NoDefault> {
    Action::new(|i: &i32| NoDefault(i * 7))
}

fn make_nothing() -> Action<impl FnMut(&i32)> {
    Action::new(|_: &i32| ())
}

fn is_not_zero() -> Decision<impl FnMut(&i32) -> bool> {
    Decision::new(|i: &i32| *i != 0)
}

fn is_even() -> Decision<impl FnMut(&i32) -> bool> {
    Decision::new(|i: &i32| (i & 1) == 0)
}

#[test]
fn combined_action_with_one_value_keeps_it() {
    let mut only_a = make_value().tap(make_nothing());
    let mut only_b = make_nothing().then(make_value());

    assert_eq!(only_a.run(&7), Value(7));
    assert_eq!(only_b.run(&7), Value(7));
}

#[test]
fn combined_action_pairs_or_adds_two_values() {
    let mut values = make_value().zip(make_value_alt());
    let mut added = make_addable().plus(make_addable_alt());

    let (v1, v2) = values.run(&7);
    assert_eq!(v1, Value(7));
    assert_eq!(v2, Value(7 * 3));
    assert_eq!(added.run(&7), Addable(7 * 2 + 7 * 5));
}

#[test]
fn conditional_action_needs_no_default_result() {
    let mut guarded = is_even().when(make_no_default());

    assert_eq!(guarded.run(&2), Some(NoDefault(14)));
    assert_eq!(guarded.run(&1), None);
}

#[test]
fn branch_shapes_cover_all_four_resolutions() {
    let mut same_type = is_not_zero().branch(make_value()).or_else(make_value_alt());
    let mut two_types = is_not_zero().branch(make_value()).or_either(make_addable());
    let mut valued_arm = is_not_zero().branch(make_value()).or_effect(make_nothing());
    let mut void_arm = is_not_zero().branch(make_nothing()).or_value(make_addable());

    assert_eq!(same_type.run(&5), Value(5));
    assert_eq!(same_type.run(&0), Value(0));

    assert_eq!(two_types.run(&5), Either::Left(Value(5)));
    assert_eq!(two_types.run(&0), Either::Right(Addable(0)));

    assert_eq!(valued_arm.run(&5), Some(Value(5)));
    assert_eq!(valued_arm.run(&0), None);

    assert_eq!(void_arm.run(&5), None);
    assert_eq!(void_arm.run(&0), Some(Addable(0)));
}

#[test]
fn concrete_branch_scenario_picks_by_input() {
    let mut tree = is_not_zero().branch(make_value()).or_else(make_value_alt());

    assert_eq!(tree.run(&0), Value(0 * 3)); // make_value_alt(0)
    assert_eq!(tree.run(&5), Value(5)); // make_value(5)
}

#[test]
fn homogeneous_stack_is_an_if_else_if_chain() {
    let select = |n: i32| Decision::new(move |j: &i32| *j == n);
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
fn heterogeneous_stack_nests_alternatives() {
    let select = |n: i32| Decision::new(move |j: &i32| *j == n);

    let mut tree = select(0)
        .branch(make_value())
        .chain(select(1).branch(make_addable()))
        .finish_sum(make_no_default());

    assert_eq!(tree.run(&0), Either::Left(Value(0)));
    assert_eq!(
        tree.run(&1),
        Either::Right(Either::Left(Addable(2)))
    );
    assert_eq!(
        tree.run(&2),
        Either::Right(Either::Right(NoDefault(14)))
    );
}

#[test]
fn reassignable_box_swaps_trees_behind_a_fixed_signature() {
    let mut slot = DynAction::<i32, f32>::new(Action::new(|i: &i32| *i as f32 / 2.0));
    assert_eq!(slot.run(&3), 1.5);

    slot.assign(Action::new(|i: &i32| (i * i) as f32));
    assert_eq!(slot.run(&3), 9.0);
}

#[test]
fn dispatcher_consumes_the_tree_result() {
    let mut labelled = is_not_zero()
        .branch(make_value())
        .or_either(make_addable())
        .map(|out| out.visit(|Value(v)| format!("value {v}"), |Addable(a)| format!("addable {a}")));

    assert_eq!(labelled.run(&5), "value 5");
    assert_eq!(labelled.run(&0), "addable 0");
}

#[test]
fn optional_dispatch_prefers_value_then_fallback_then_default() {
    let mut guarded = is_even().when(make_value());

    let present = guarded.run(&4);
    let absent = guarded.run(&3);

    assert_eq!(visit::some_or(present, |Value(v)| v, Value(-1)), 4);
    assert_eq!(visit::some_or(absent, |Value(v)| v, Value(-1)), -1);
    assert_eq!(visit::some_or_else(absent, |Value(v)| v, || -9), -9);
    assert_eq!(visit::some_or_default(absent, |Value(v)| v), 0);
}
