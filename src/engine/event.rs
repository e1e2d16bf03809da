//! Key events accepted by the calculator.
//!
//! [`Event::from_key`] implements the interactive-terminal mapping: digit
//! keys and `.`, operator keys `+ - * / ^`, `Enter` to calculate and
//! `Escape` to clear. Word keys cover the scientific and memory buttons.

use super::error::EventError;
use crate::core::{BinaryOperator, ScientificFn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A digit key: `0`-`9` or the decimal point.
///
/// # Example
///
/// ```rust
/// use scicalc::engine::Digit;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::try_from('x').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    pub const POINT: Digit = Digit('.');

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = EventError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Digit(c))
        } else {
            Err(EventError::InvalidDigit(c))
        }
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One caller-initiated input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum Event {
    Digit(Digit),
    Operator(BinaryOperator),
    Calculate,
    /// A scientific key press; shift selects the alternate function
    Scientific(ScientificFn),
    ClearAll,
    ToggleAngleMode,
    ToggleShift,
    MemoryClear,
    MemoryRecall,
    MemoryAdd,
    MemorySubtract,
    ClearHistory,
}

impl Event {
    /// Translate a single key name into an event.
    ///
    /// ```rust
    /// use scicalc::core::{BinaryOperator, ScientificFn};
    /// use scicalc::engine::Event;
    ///
    /// assert_eq!(Event::from_key("Enter"), Ok(Event::Calculate));
    /// assert_eq!(Event::from_key("Escape"), Ok(Event::ClearAll));
    /// assert_eq!(Event::from_key("*"), Ok(Event::Operator(BinaryOperator::Multiply)));
    /// assert_eq!(Event::from_key("sqrt"), Ok(Event::Scientific(ScientificFn::Sqrt)));
    /// ```
    pub fn from_key(key: &str) -> Result<Self, EventError> {
        let key = key.trim();

        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Ok(digit) = Digit::try_from(c) {
                return Ok(Self::Digit(digit));
            }
        }

        if let Ok(op) = key.parse::<BinaryOperator>() {
            return Ok(Self::Operator(op));
        }

        match key.to_ascii_lowercase().as_str() {
            "" | "enter" | "=" => return Ok(Self::Calculate),
            "escape" | "esc" | "ac" => return Ok(Self::ClearAll),
            "mc" => return Ok(Self::MemoryClear),
            "mr" => return Ok(Self::MemoryRecall),
            "m+" => return Ok(Self::MemoryAdd),
            "m-" => return Ok(Self::MemorySubtract),
            "shift" => return Ok(Self::ToggleShift),
            "deg" | "rad" | "drg" | "angle" => return Ok(Self::ToggleAngleMode),
            "ch" | "clear-history" => return Ok(Self::ClearHistory),
            _ => {}
        }

        key.parse::<ScientificFn>()
            .map(Self::Scientific)
            .map_err(|_| EventError::UnknownKey(key.to_string()))
    }

    /// Translate a line of whitespace-separated keys into events.
    ///
    /// Runs of digits are split into one event per character, so `12.5`
    /// types four keys. An empty line is a lone `Enter`.
    ///
    /// ```rust
    /// use scicalc::engine::Event;
    ///
    /// let events = Event::parse_line("12 + 3 =").unwrap();
    /// assert_eq!(events.len(), 5);
    /// assert_eq!(Event::parse_line("").unwrap(), vec![Event::Calculate]);
    /// ```
    pub fn parse_line(line: &str) -> Result<Vec<Self>, EventError> {
        let mut events = Vec::new();
        for token in line.split_whitespace() {
            if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
                for c in token.chars() {
                    events.push(Self::Digit(Digit::try_from(c)?));
                }
            } else {
                events.push(Self::from_key(token)?);
            }
        }

        if events.is_empty() {
            events.push(Self::Calculate);
        }
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_accepts_only_digits_and_point() {
        for c in "0123456789.".chars() {
            assert!(Digit::try_from(c).is_ok());
        }
        assert_eq!(Digit::try_from('a'), Err(EventError::InvalidDigit('a')));
        assert_eq!(Digit::try_from('-'), Err(EventError::InvalidDigit('-')));
        assert!(Digit::POINT.is_point());
    }

    #[test]
    fn terminal_keys_map_to_events() {
        assert_eq!(
            Event::from_key("5"),
            Ok(Event::Digit(Digit::try_from('5').unwrap()))
        );
        assert_eq!(Event::from_key("."), Ok(Event::Digit(Digit::POINT)));
        assert_eq!(
            Event::from_key("+"),
            Ok(Event::Operator(BinaryOperator::Add))
        );
        assert_eq!(
            Event::from_key("-"),
            Ok(Event::Operator(BinaryOperator::Subtract))
        );
        assert_eq!(
            Event::from_key("/"),
            Ok(Event::Operator(BinaryOperator::Divide))
        );
        assert_eq!(
            Event::from_key("^"),
            Ok(Event::Operator(BinaryOperator::Power))
        );
        assert_eq!(Event::from_key("Enter"), Ok(Event::Calculate));
        assert_eq!(Event::from_key("="), Ok(Event::Calculate));
        assert_eq!(Event::from_key("Escape"), Ok(Event::ClearAll));
    }

    #[test]
    fn word_keys_map_to_events() {
        assert_eq!(Event::from_key("MC"), Ok(Event::MemoryClear));
        assert_eq!(Event::from_key("mr"), Ok(Event::MemoryRecall));
        assert_eq!(Event::from_key("M+"), Ok(Event::MemoryAdd));
        assert_eq!(Event::from_key("m-"), Ok(Event::MemorySubtract));
        assert_eq!(Event::from_key("shift"), Ok(Event::ToggleShift));
        assert_eq!(Event::from_key("rad"), Ok(Event::ToggleAngleMode));
        assert_eq!(Event::from_key("ch"), Ok(Event::ClearHistory));
        assert_eq!(
            Event::from_key("x²"),
            Ok(Event::Scientific(ScientificFn::Square))
        );
        assert_eq!(
            Event::from_key("e"),
            Ok(Event::Scientific(ScientificFn::E))
        );
        assert_eq!(
            Event::from_key("E"),
            Ok(Event::Scientific(ScientificFn::E))
        );
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert_eq!(
            Event::from_key("sinh"),
            Err(EventError::UnknownKey("sinh".to_string()))
        );
    }

    #[test]
    fn parse_line_splits_digit_runs() {
        let events = Event::parse_line("3.5 * 2 Enter").unwrap();
        assert_eq!(
            events,
            vec![
                Event::Digit(Digit::try_from('3').unwrap()),
                Event::Digit(Digit::POINT),
                Event::Digit(Digit::try_from('5').unwrap()),
                Event::Operator(BinaryOperator::Multiply),
                Event::Digit(Digit::try_from('2').unwrap()),
                Event::Calculate,
            ]
        );
    }

    #[test]
    fn parse_line_fails_on_first_unknown_key() {
        assert!(Event::parse_line("1 + foo").is_err());
    }

    #[test]
    fn digit_deserialization_validates() {
        let digit: Digit = serde_json::from_str("\"4\"").unwrap();
        assert_eq!(digit.as_char(), '4');
        assert!(serde_json::from_str::<Digit>("\"z\"").is_err());
    }
}
