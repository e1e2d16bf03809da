//! Angle unit convention for trigonometric evaluation.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// Unit used for trigonometric input and inverse-trigonometric output.
///
/// Only the trig families read this; every other function ignores it.
///
/// # Example
///
/// ```rust
/// use scicalc::core::AngleMode;
///
/// let mode = AngleMode::default();
/// assert_eq!(mode, AngleMode::Deg);
/// assert_eq!(mode.toggle(), AngleMode::Rad);
/// assert_eq!(mode.toggle().label(), "RAD");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AngleMode {
    /// Degrees
    #[default]
    Deg,
    /// Radians
    Rad,
}

impl AngleMode {
    /// Return the other mode.
    pub fn toggle(self) -> Self {
        match self {
            Self::Deg => Self::Rad,
            Self::Rad => Self::Deg,
        }
    }

    /// Label shown by the presentation layer.
    pub fn label(self) -> &'static str {
        match self {
            Self::Deg => "DEG",
            Self::Rad => "RAD",
        }
    }

    /// Convert a trig input expressed in this unit to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Deg => value * PI / 180.0,
            Self::Rad => value,
        }
    }

    /// Convert a radian result to this unit.
    pub fn from_radians(self, value: f64) -> f64 {
        match self {
            Self::Deg => value * 180.0 / PI,
            Self::Rad => value,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(AngleMode::Deg.toggle(), AngleMode::Rad);
        assert_eq!(AngleMode::Rad.toggle(), AngleMode::Deg);
        assert_eq!(AngleMode::Deg.toggle().toggle(), AngleMode::Deg);
    }

    #[test]
    fn conversions_respect_mode() {
        assert!((AngleMode::Deg.to_radians(180.0) - PI).abs() < 1e-12);
        assert_eq!(AngleMode::Rad.to_radians(2.0), 2.0);
        assert!((AngleMode::Deg.from_radians(std::f64::consts::FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert_eq!(AngleMode::Rad.from_radians(1.5), 1.5);
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&AngleMode::Deg).unwrap(), "\"DEG\"");
        let mode: AngleMode = serde_json::from_str("\"RAD\"").unwrap();
        assert_eq!(mode, AngleMode::Rad);
    }
}
