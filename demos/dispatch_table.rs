//! Dispatch Table
//!
//! This example demonstrates replacing a match/if-else chain with a
//! folded decision tree.
//!
//! Key concepts:
//! - Building arms with `branch` and chaining them with `chain`
//! - Folding an open chain with a terminal fallback (`finish`)
//! - First-true-wins evaluation order
//!
//! Run with: cargo run --example dispatch_table

use arbor::core::{Act, Action, Decide, Decision, Terminate};

fn main() {
    println!("=== Dispatch Table ===\n");

    let code = |n: i32| Decision::new(move |i: &i32| *i == n);
    let reply = |s: &'static str| Action::new(move |_: &i32| s);

    // if i == 200 { "ok" } else if i == 404 { "not found" }
    // else if i == 500 { "server error" } else { "unknown" }
    let mut describe = code(200)
        .branch(reply("ok"))
        .chain(code(404).branch(reply("not found")))
        .chain(code(500).branch(reply("server error")))
        .finish(reply("unknown"));

    for status in [200, 404, 500, 418] {
        println!("{status} -> {}", describe.run(&status));
    }

    println!("\nArms are tested in chain order and only the first match");
    println!("runs its action; the fallback covers everything else.");

    println!("\n=== Example Complete ===");
}
