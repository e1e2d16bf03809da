//! Memory register.

use super::display::format_number;
use serde::{Deserialize, Serialize};

/// A single stored number with accumulate, recall and clear operations.
///
/// The register also serves as the left operand of a pending binary
/// operation: pressing an operator key overwrites it.
///
/// # Example
///
/// ```rust
/// use scicalc::core::MemoryRegister;
///
/// let mut memory = MemoryRegister::default();
/// assert!(memory.indicator().is_none());
///
/// memory.add(5.0);
/// memory.subtract(2.0);
/// assert_eq!(memory.recall(), 3.0);
/// assert_eq!(memory.indicator().as_deref(), Some("M: 3"));
///
/// memory.clear();
/// assert!(memory.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Reset to zero.
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// Current value.
    pub fn recall(&self) -> f64 {
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the stored value.
    pub fn store(&mut self, value: f64) {
        self.value = value;
    }

    /// Add a signed delta.
    pub fn accumulate(&mut self, delta: f64) {
        self.value += delta;
    }

    pub fn add(&mut self, delta: f64) {
        self.accumulate(delta);
    }

    pub fn subtract(&mut self, delta: f64) {
        self.accumulate(-delta);
    }

    pub fn is_empty(&self) -> bool {
        self.value == 0.0
    }

    /// `M: <value>` while non-zero, for the presentation layer.
    pub fn indicator(&self) -> Option<String> {
        (!self.is_empty()).then(|| format!("M: {}", format_number(self.value)))
    }
}
