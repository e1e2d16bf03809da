//! Explicit engine state.

use crate::core::{AngleMode, BinaryOperator, DisplayValue, MemoryRegister};
use serde::{Deserialize, Serialize};

/// Whether the next digit starts a new number or extends the current one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryMode {
    /// The next digit replaces the display
    #[default]
    Fresh,
    /// Digits append to the display
    Continuing,
}

/// All mutable state owned by a calculator.
///
/// The machine's implicit states are the pairs of `pending` and `entry`;
/// the initial state is no pending operator, fresh entry, display `"0"`.
///
/// # Example
///
/// ```rust
/// use scicalc::core::AngleMode;
/// use scicalc::engine::{EngineState, EntryMode};
///
/// let state = EngineState::new(AngleMode::Deg);
/// assert_eq!(state.display.as_str(), "0");
/// assert_eq!(state.entry, EntryMode::Fresh);
/// assert!(state.pending.is_none());
/// assert!(!state.is_error());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub display: DisplayValue,
    pub pending: Option<BinaryOperator>,
    pub entry: EntryMode,
    /// Memory register, also the left operand of `pending`
    pub memory: MemoryRegister,
    pub angle_mode: AngleMode,
    pub shift: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self::new(AngleMode::default())
    }
}

impl EngineState {
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            display: DisplayValue::zero(),
            pending: None,
            entry: EntryMode::Fresh,
            memory: MemoryRegister::default(),
            angle_mode,
            shift: false,
        }
    }

    pub fn is_fresh(&self) -> bool {
        self.entry == EntryMode::Fresh
    }

    /// Whether the error sentinel is showing.
    pub fn is_error(&self) -> bool {
        self.display.is_error()
    }

    /// Return display, memory, pending operator and entry mode to their
    /// initial values. Angle mode and shift are preserved.
    pub fn reset(&mut self) {
        self.display = DisplayValue::zero();
        self.memory.clear();
        self.pending = None;
        self.entry = EntryMode::Fresh;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_restores_initial_values() {
        let mut state = EngineState::new(AngleMode::Rad);
        state.display = DisplayValue::error();
        state.pending = Some(BinaryOperator::Divide);
        state.entry = EntryMode::Continuing;
        state.memory.store(9.0);
        state.shift = true;

        state.reset();

        assert_eq!(state.display, DisplayValue::zero());
        assert!(state.pending.is_none());
        assert!(state.is_fresh());
        assert!(state.memory.is_empty());
        assert_eq!(state.angle_mode, AngleMode::Rad);
        assert!(state.shift);
    }

    #[test]
    fn default_state_uses_degrees() {
        assert_eq!(EngineState::default().angle_mode, AngleMode::Deg);
    }
}
