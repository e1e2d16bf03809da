//! Calculator state machine.
//!
//! The engine turns a stream of key events into display state. It is
//! synchronous: each event is handled to completion before the next.

pub mod calculator;
pub mod error;
pub mod event;
pub mod snapshot;
pub mod state;

pub use calculator::{Calculator, Outcome};
pub use error::EventError;
pub use event::{Digit, Event};
pub use snapshot::{HistoryLine, Snapshot};
pub use state::{EngineState, EntryMode};
