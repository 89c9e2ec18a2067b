//! Edge Monitor
//!
//! This example demonstrates the stateful edge-triggered decisions:
//! actions bound to the rising and falling edges of a boolean signal.
//!
//! Key concepts:
//! - `on_rise` fires its action on the off -> on transition
//! - `on_fall` fires its action on the on -> off transition
//! - The composite remembers the previous result between calls
//!
//! Run with: cargo run --example edge_monitor

use arbor::core::{Action, Decide, Decision};

fn main() {
    println!("=== Edge Monitor ===\n");

    let threshold = Decision::new(|temp: &f64| *temp > 80.0);
    let alarm_on = Action::new(|temp: &f64| println!("  ALARM: {temp:.1} over limit"));
    let alarm_off = Action::new(|temp: &f64| println!("  clear: {temp:.1} back in range"));

    // One monitor instance carries the edge state across readings.
    let mut monitor = threshold.on_rise(alarm_on).on_fall(alarm_off);

    let readings = [75.0, 79.5, 83.2, 85.0, 78.0, 76.1, 82.4];
    for temp in readings {
        let hot = monitor.test(&temp);
        println!("reading {temp:.1} -> over limit: {hot}");
    }

    println!("\nThe alarm actions ran only at the two transitions, not on");
    println!("every hot reading. One instance per signal: the remembered");
    println!("state makes this composite unsafe to share across threads.");

    println!("\n=== Example Complete ===");
}
