//! Core calculator components.
//!
//! This module contains the leaf pieces the engine is built from:
//! - The scientific function table and angle mode
//! - Binary operators
//! - The memory register
//! - The bounded history buffer
//! - Display text formatting and parsing
//!
//! Nothing in this module knows about key events or entry state.

mod angle;
mod display;
mod history;
mod memory;
mod operator;
mod scientific;

pub use angle::AngleMode;
pub use display::{format_number, parse_leading_number, DisplayValue, ERROR_SENTINEL};
pub use history::{HistoryBuffer, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use memory::MemoryRegister;
pub use operator::{BinaryOperator, UnknownOperator};
pub use scientific::{ScientificFn, UnknownFunction};
