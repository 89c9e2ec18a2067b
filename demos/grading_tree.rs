//! Grading Tree
//!
//! This example demonstrates heterogeneous branch resolution, the
//! dispatcher over the resulting alternative, and the reassignable
//! action box.
//!
//! Key concepts:
//! - `or_either` tags which side of a branch produced the result
//! - `map` feeds the result to a dispatcher (`Either::visit`)
//! - `DynAction` swaps whole trees behind a fixed signature
//!
//! Run with: cargo run --example grading_tree

use arbor::core::{Act, Action, Decide, Decision};
use arbor::dynamic::DynAction;

fn main() {
    println!("=== Grading Tree ===\n");

    // Passing scores become a percentage, failing ones a reason string.
    let passing = Decision::new(|score: &u32| *score >= 60);
    let percent = Action::new(|score: &u32| *score as f64 / 100.0);
    let reason = Action::new(|score: &u32| format!("failed at {score} points"));

    let mut grade = passing.branch(percent).or_either(reason).map(|outcome| {
        outcome.visit(
            |p| format!("passed with {:.0}%", p * 100.0),
            |r| format!("not passed: {r}"),
        )
    });

    for score in [85, 60, 42] {
        println!("score {score:3} -> {}", grade.run(&score));
    }

    // A fixed u32 -> String slot; lenient policy first.
    println!("\nSwapping policies behind a fixed signature:");
    let lenient = Decision::new(|score: &u32| *score >= 50)
        .branch(Action::new(|_: &u32| "pass".to_string()))
        .or_else(Action::new(|_: &u32| "fail".to_string()));
    let strict = Decision::new(|score: &u32| *score >= 75)
        .branch(Action::new(|_: &u32| "pass".to_string()))
        .or_else(Action::new(|_: &u32| "fail".to_string()));

    let mut policy = DynAction::<u32, String>::new(lenient);
    println!("lenient, score 60 -> {}", policy.run(&60));

    policy.assign(strict);
    println!("strict,  score 60 -> {}", policy.run(&60));

    println!("\n=== Example Complete ===");
}
