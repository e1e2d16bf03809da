//! Calculator state machine driven by key events.

use super::event::{Digit, Event};
use super::snapshot::{trig_labels, HistoryLine, Snapshot};
use super::state::{EngineState, EntryMode};
use crate::config::{CalculatorConfig, DecimalPolicy};
use crate::core::{
    format_number, AngleMode, BinaryOperator, DisplayValue, HistoryBuffer, HistoryEntry,
    MemoryRegister, ScientificFn,
};
use tracing::{debug, trace, warn};

/// Result of handling a single event
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// State changed without completing a calculation
    Updated,

    /// A calculation completed and was recorded to history
    Recorded(HistoryEntry),

    /// The event had no effect
    Ignored,
}

/// Scientific calculator engine.
///
/// Owns the display, pending operator, entry mode, memory register, angle
/// mode, shift flag and history. Every operation runs to completion and
/// never fails: numeric problems show as `Error`.
///
/// # Example
///
/// ```rust
/// use scicalc::core::BinaryOperator;
/// use scicalc::engine::{Calculator, Digit};
///
/// let mut calc = Calculator::new();
/// calc.input_digit(Digit::try_from('3').unwrap());
/// calc.apply_binary_operator(BinaryOperator::Add);
/// calc.input_digit(Digit::try_from('5').unwrap());
/// calc.calculate();
///
/// assert_eq!(calc.display(), "8");
/// assert_eq!(calc.history().latest().unwrap().expression, "3 + 5");
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    state: EngineState,
    history: HistoryBuffer,
    config: CalculatorConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: EngineState::new(config.angle_mode),
            history: HistoryBuffer::with_capacity(config.history_capacity),
            config,
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn display(&self) -> &str {
        self.state.display.as_str()
    }

    pub fn memory(&self) -> &MemoryRegister {
        &self.state.memory
    }

    pub fn angle_mode(&self) -> AngleMode {
        self.state.angle_mode
    }

    pub fn pending_operator(&self) -> Option<BinaryOperator> {
        self.state.pending
    }

    pub fn entry_mode(&self) -> EntryMode {
        self.state.entry
    }

    pub fn is_shifted(&self) -> bool {
        self.state.shift
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Handle one event.
    pub fn dispatch(&mut self, event: Event) -> Outcome {
        trace!(?event, "dispatch");
        match event {
            Event::Digit(digit) => self.input_digit(digit),
            Event::Operator(op) => self.apply_binary_operator(op),
            Event::Calculate => self.calculate(),
            Event::Scientific(function) => self.press_scientific(function),
            Event::ClearAll => self.clear_all(),
            Event::ToggleAngleMode => self.toggle_angle_mode(),
            Event::ToggleShift => self.toggle_shift(),
            Event::MemoryClear => self.memory_clear(),
            Event::MemoryRecall => self.memory_recall(),
            Event::MemoryAdd => self.memory_add(),
            Event::MemorySubtract => self.memory_subtract(),
            Event::ClearHistory => self.clear_history(),
        }
    }

    /// Type a digit or decimal point.
    ///
    /// In fresh mode the digit replaces the display (a lone `.` becomes
    /// `0.`). Otherwise it is appended, except that a digit typed over a
    /// bare `0` replaces it.
    pub fn input_digit(&mut self, digit: Digit) -> Outcome {
        let c = digit.as_char();
        let state = &mut self.state;

        if state.is_fresh() {
            state.display = if digit.is_point() {
                DisplayValue::from_text("0.")
            } else {
                DisplayValue::from_text(c)
            };
            state.entry = EntryMode::Continuing;
            trace!(display = %state.display, "started new number");
            return Outcome::Updated;
        }

        if digit.is_point() {
            if self.config.decimal_point == DecimalPolicy::SingleDot
                && state.display.contains_decimal_point()
            {
                trace!("ignored second decimal point");
                return Outcome::Ignored;
            }
            state.display.push(c);
        } else if state.display.as_str() == "0" {
            state.display = DisplayValue::from_text(c);
        } else {
            state.display.push(c);
        }

        trace!(display = %state.display, "appended digit");
        Outcome::Updated
    }

    /// Press a binary operator key.
    ///
    /// Resolves any pending operation first, then stores the display as
    /// the left operand of `op`.
    pub fn apply_binary_operator(&mut self, op: BinaryOperator) -> Outcome {
        let resolved = self.calculate();

        let operand = self.state.display.to_number();
        self.state.memory.store(operand);
        self.state.pending = Some(op);
        self.state.entry = EntryMode::Fresh;
        debug!(operator = %op, operand, "operator pending");

        match resolved {
            Outcome::Recorded(_) => resolved,
            _ => Outcome::Updated,
        }
    }

    /// Resolve the pending operation against the display.
    ///
    /// No-op without a pending operator. Non-finite results show as
    /// `Error`, and history records the displayed text.
    pub fn calculate(&mut self) -> Outcome {
        let Some(op) = self.state.pending else {
            return Outcome::Ignored;
        };

        let prev = self.state.memory.value();
        let current = self.state.display.to_number();
        let result = op.apply(prev, current);

        let expression = format!(
            "{} {} {}",
            format_number(prev),
            op.symbol(),
            format_number(current)
        );
        let shown = DisplayValue::from_number(result);
        if shown.is_error() {
            warn!(%expression, result, "calculation produced an invalid result");
        } else {
            debug!(%expression, %shown, "calculated");
        }

        let entry = self.record(expression, &shown);
        self.state.display = shown;
        self.state.entry = EntryMode::Fresh;
        self.state.pending = None;
        Outcome::Recorded(entry)
    }

    /// Press a scientific key, honouring shift.
    ///
    /// With sticky shift disabled, pressing a key that has a shifted
    /// alternate turns shift off.
    pub fn press_scientific(&mut self, function: ScientificFn) -> Outcome {
        let function = if self.state.shift && function.has_shift_alternate() {
            if !self.config.sticky_shift {
                self.state.shift = false;
            }
            function.shifted()
        } else {
            function
        };
        self.apply_scientific(function)
    }

    /// Apply `function` to the display.
    ///
    /// Always records `<tag>(<previous display>)` with the displayed
    /// result, including when that result is `Error`.
    pub fn apply_scientific(&mut self, function: ScientificFn) -> Outcome {
        let previous = self.state.display.clone();
        let input = previous.to_number();
        let result = function.evaluate(input, self.state.angle_mode);

        let expression = format!("{}({})", function.tag(), previous);
        let shown = DisplayValue::from_number(result);
        if shown.is_error() {
            warn!(%expression, result, "scientific function produced an invalid result");
        } else {
            debug!(%expression, %shown, angle_mode = %self.state.angle_mode, "applied");
        }

        let entry = self.record(expression, &shown);
        self.state.display = shown;
        self.state.entry = EntryMode::Fresh;
        Outcome::Recorded(entry)
    }

    /// Return to the initial state. History is kept.
    pub fn clear_all(&mut self) -> Outcome {
        self.state.reset();
        debug!("cleared");
        Outcome::Updated
    }

    pub fn toggle_angle_mode(&mut self) -> Outcome {
        self.state.angle_mode = self.state.angle_mode.toggle();
        trace!(angle_mode = %self.state.angle_mode, "toggled angle mode");
        Outcome::Updated
    }

    pub fn toggle_shift(&mut self) -> Outcome {
        self.state.shift = !self.state.shift;
        trace!(shift = self.state.shift, "toggled shift");
        Outcome::Updated
    }

    pub fn memory_clear(&mut self) -> Outcome {
        self.state.memory.clear();
        Outcome::Updated
    }

    /// Show the memory value and start a fresh number.
    pub fn memory_recall(&mut self) -> Outcome {
        self.state.display = DisplayValue::from_number(self.state.memory.recall());
        self.state.entry = EntryMode::Fresh;
        Outcome::Updated
    }

    /// Add the display value to memory.
    pub fn memory_add(&mut self) -> Outcome {
        self.accumulate_display(1.0)
    }

    /// Subtract the display value from memory.
    pub fn memory_subtract(&mut self) -> Outcome {
        self.accumulate_display(-1.0)
    }

    pub fn clear_history(&mut self) -> Outcome {
        self.history.clear();
        debug!("history cleared");
        Outcome::Updated
    }

    /// Build the render view.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            display: self.state.display.to_string(),
            memory: self.state.memory.indicator(),
            angle_mode: self.state.angle_mode,
            shift: self.state.shift,
            pending_operator: self.state.pending,
            trig_labels: trig_labels(self.state.shift),
            history: self.history.entries().iter().map(HistoryLine::from).collect(),
        }
    }

    fn accumulate_display(&mut self, sign: f64) -> Outcome {
        let delta = self.state.display.to_number();
        if !delta.is_finite() {
            warn!(display = %self.state.display, "memory updated from a non-numeric display");
        }
        self.state.memory.accumulate(sign * delta);
        trace!(memory = self.state.memory.value(), "memory updated");
        Outcome::Updated
    }

    fn record(&mut self, expression: String, display: &DisplayValue) -> HistoryEntry {
        self.history.record(expression, display.as_str()).clone()
    }
}
