//! Calculator configuration.
//!
//! Configuration is plain data deserialized from TOML. Every field has a
//! default, so an empty document yields the standard calculator.
//!
//! ```rust
//! use scicalc::config::{CalculatorConfig, DecimalPolicy};
//! use scicalc::core::AngleMode;
//!
//! let config = CalculatorConfig::from_toml_str(
//!     r#"
//!     angle_mode = "RAD"
//!     decimal_point = "single-dot"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.angle_mode, AngleMode::Rad);
//! assert_eq!(config.decimal_point, DecimalPolicy::SingleDot);
//! assert_eq!(config.history_capacity, 10);
//! ```

pub mod error;

pub use error::ConfigError;

use crate::core::{AngleMode, DEFAULT_HISTORY_CAPACITY};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How a second decimal point within one number is handled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecimalPolicy {
    /// Append every `.` typed; the operand parses up to the second point.
    #[default]
    Permissive,
    /// Ignore `.` when the number already has one.
    SingleDot,
}

/// Settings applied when a calculator is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Angle mode at start-up
    pub angle_mode: AngleMode,

    /// Maximum number of history entries kept
    pub history_capacity: usize,

    /// Handling of repeated decimal points
    pub decimal_point: DecimalPolicy,

    /// Whether shift stays active until toggled off, or is consumed by the
    /// next shifted function
    pub sticky_shift: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            angle_mode: AngleMode::Deg,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            decimal_point: DecimalPolicy::Permissive,
            sticky_shift: true,
        }
    }
}

impl CalculatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::InvalidHistoryCapacity(self.history_capacity));
        }
        Ok(())
    }
}
