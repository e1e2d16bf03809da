//! Scientific function table.
//!
//! Every function is pure. Results may be NaN or infinite; the caller is
//! responsible for substituting the error display.

use super::angle::AngleMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A single-argument scientific function, or a zero-argument constant.
///
/// # Example
///
/// ```rust
/// use scicalc::core::{AngleMode, ScientificFn};
///
/// assert_eq!(ScientificFn::Sin.evaluate(90.0, AngleMode::Deg), 1.0);
/// assert_eq!(ScientificFn::Factorial.evaluate(5.0, AngleMode::Deg), 120.0);
/// assert!(ScientificFn::Sqrt.evaluate(-1.0, AngleMode::Deg).is_nan());
/// assert_eq!(ScientificFn::Sin.shifted(), ScientificFn::Asin);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScientificFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Base-10 logarithm
    Log,
    /// Natural logarithm
    Ln,
    Exp,
    Sqrt,
    Cbrt,
    Square,
    Cube,
    Reciprocal,
    Abs,
    /// Factorial, defined for non-negative integers
    Factorial,
    Pi,
    E,
}

impl ScientificFn {
    pub const ALL: [Self; 18] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Log,
        Self::Ln,
        Self::Exp,
        Self::Sqrt,
        Self::Cbrt,
        Self::Square,
        Self::Cube,
        Self::Reciprocal,
        Self::Abs,
        Self::Factorial,
        Self::Pi,
        Self::E,
    ];

    /// Evaluate at `input`. Constants ignore the input.
    pub fn evaluate(self, input: f64, mode: AngleMode) -> f64 {
        match self {
            Self::Sin => mode.to_radians(input).sin(),
            Self::Cos => mode.to_radians(input).cos(),
            Self::Tan => mode.to_radians(input).tan(),
            Self::Asin => mode.from_radians(input.asin()),
            Self::Acos => mode.from_radians(input.acos()),
            Self::Atan => mode.from_radians(input.atan()),
            Self::Log => input.log10(),
            Self::Ln => input.ln(),
            Self::Exp => input.exp(),
            Self::Sqrt => input.sqrt(),
            Self::Cbrt => input.cbrt(),
            Self::Square => input.powi(2),
            Self::Cube => input.powi(3),
            Self::Reciprocal => 1.0 / input,
            Self::Abs => input.abs(),
            Self::Factorial => factorial(input),
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }

    /// Whether this is a zero-argument constant.
    pub fn is_constant(self) -> bool {
        matches!(self, Self::Pi | Self::E)
    }

    /// The alternate function selected while shift is active.
    pub fn shifted(self) -> Self {
        match self {
            Self::Sin => Self::Asin,
            Self::Cos => Self::Acos,
            Self::Tan => Self::Atan,
            other => other,
        }
    }

    /// Whether shift selects a different function for this key.
    pub fn has_shift_alternate(self) -> bool {
        self.shifted() != self
    }

    /// Tag used in history expressions, e.g. `sqrt(9)` or `x²(3)`.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Exp => "exp",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Square => "x²",
            Self::Cube => "x³",
            Self::Reciprocal => "1/x",
            Self::Abs => "abs",
            Self::Factorial => "fact",
            Self::Pi => "π",
            Self::E => "e",
        }
    }

    /// Button label for the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sqrt => "√",
            Self::Cbrt => "∛",
            Self::Abs => "|x|",
            Self::Factorial => "n!",
            other => other.tag(),
        }
    }
}

impl fmt::Display for ScientificFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown scientific function: {0}")]
pub struct UnknownFunction(pub String);

impl FromStr for ScientificFn {
    type Err = UnknownFunction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(found) = Self::ALL
            .iter()
            .find(|f| f.tag() == s || f.label() == s)
        {
            return Ok(*found);
        }

        match s.to_ascii_lowercase().as_str() {
            "sin" => Ok(Self::Sin),
            "cos" => Ok(Self::Cos),
            "tan" => Ok(Self::Tan),
            "asin" => Ok(Self::Asin),
            "acos" => Ok(Self::Acos),
            "atan" => Ok(Self::Atan),
            "log" => Ok(Self::Log),
            "ln" => Ok(Self::Ln),
            "exp" => Ok(Self::Exp),
            "sqrt" => Ok(Self::Sqrt),
            "cbrt" => Ok(Self::Cbrt),
            "x2" | "x^2" | "sq" => Ok(Self::Square),
            "x3" | "x^3" | "cube" => Ok(Self::Cube),
            "inv" | "recip" => Ok(Self::Reciprocal),
            "abs" => Ok(Self::Abs),
            "fact" | "!" => Ok(Self::Factorial),
            "pi" => Ok(Self::Pi),
            "e" => Ok(Self::E),
            _ => Err(UnknownFunction(s.to_string())),
        }
    }
}

/// Iterative factorial: the product `2·3·…·n` for non-negative `n`.
///
/// Negative input yields NaN. Fractional input multiplies every integer up
/// to `floor(n)`. The loop stops once the product overflows, so very large
/// inputs return infinity promptly.
fn factorial(n: f64) -> f64 {
    if n.is_nan() || n < 0.0 {
        return f64::NAN;
    }

    let mut result: f64 = 1.0;
    let mut i: f64 = 2.0;
    while i <= n && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    result
}
