//! Scicalc: a scientific calculator engine
//!
//! The engine is a small state machine that turns discrete key events
//! (digits, operators, scientific functions, memory operations, clear)
//! into a running display value, with a memory register and a bounded
//! history of completed calculations. Rendering is left to the caller.
//!
//! # Core Concepts
//!
//! - **Display**: text of the current number, or `Error`
//! - **Pending operator**: a binary operator awaiting its second operand
//! - **Memory**: accumulator register, also the left operand of a pending operation
//! - **History**: the ten most recent calculations, newest first
//!
//! # Example
//!
//! ```rust
//! use scicalc::engine::{Calculator, Event};
//!
//! let mut calc = Calculator::new();
//! for event in Event::parse_line("3 + 5 Enter").unwrap() {
//!     calc.dispatch(event);
//! }
//!
//! assert_eq!(calc.display(), "8");
//!
//! let entry = calc.history().latest().unwrap();
//! assert_eq!(entry.expression, "3 + 5");
//! assert_eq!(entry.result, "8");
//! ```

pub mod config;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use config::CalculatorConfig;
pub use core::{AngleMode, BinaryOperator, HistoryBuffer, HistoryEntry, ScientificFn};
pub use engine::{Calculator, Event, Outcome};
