//! Key Session
//!
//! This example drives the calculator engine from terminal key names.
//!
//! Key concepts:
//! - Parsing a line of keys into `Event`s
//! - Dispatching events and inspecting each `Outcome`
//! - Reading the memory register and bounded history
//! - Rendering a serializable snapshot
//!
//! Run with: cargo run --example key_session

use scicalc::engine::{Calculator, Event, Outcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Key Session Example ===\n");

    let mut calc = Calculator::new();

    // Chained operators resolve left to right: (2 + 3) * 4
    for event in Event::parse_line("2 + 3 * 4 Enter")? {
        if let Outcome::Recorded(entry) = calc.dispatch(event) {
            println!("  {} = {}", entry.expression, entry.result);
        }
    }
    println!("Display: {}", calc.display());

    // Scientific keys apply immediately to the display
    for event in Event::parse_line("Escape 90 sin")? {
        calc.dispatch(event);
    }
    println!("sin(90) in {}: {}", calc.angle_mode(), calc.display());

    // Memory accumulates the displayed value
    for event in Event::parse_line("Escape 7 M+ M+ MR")? {
        calc.dispatch(event);
    }
    println!("Memory recall: {}", calc.display());

    // A second Enter with nothing pending is a no-op
    let outcome = calc.dispatch(Event::Calculate);
    println!("Extra Enter: {:?}", outcome);

    println!("\nHistory (most recent first):");
    for entry in calc.history().entries() {
        println!("  [{}] {} = {}", entry.time_of_day(), entry.expression, entry.result);
    }

    println!("\nSnapshot:");
    println!("{}", serde_json::to_string_pretty(&calc.snapshot())?);

    println!("\n=== Example Complete ===");
    Ok(())
}
