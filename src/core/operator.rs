//! Binary operators awaiting a second operand.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A binary operator held as the pending operation.
///
/// # Example
///
/// ```rust
/// use scicalc::core::BinaryOperator;
///
/// let op: BinaryOperator = "^".parse().unwrap();
/// assert_eq!(op, BinaryOperator::Power);
/// assert_eq!(op.apply(2.0, 10.0), 1024.0);
/// assert_eq!(op.symbol(), "pow");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOperator {
    /// Operators reachable from dedicated operator keys.
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
    ];

    /// Apply with IEEE-754 semantics. Division by zero is not special-cased.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Power => lhs.powf(rhs),
        }
    }

    /// Symbol used in history expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "pow",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown operator: {0}")]
pub struct UnknownOperator(pub String);

impl FromStr for BinaryOperator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            "^" | "pow" => Ok(Self::Power),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}
