//! Render view of a calculator.

use crate::core::{AngleMode, BinaryOperator, HistoryEntry, ScientificFn};
use serde::{Deserialize, Serialize};

/// A history entry prepared for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryLine {
    pub expression: String,
    pub result: String,
    /// Local time of day, `HH:MM:SS`
    pub time: String,
}

impl From<&HistoryEntry> for HistoryLine {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            expression: entry.expression.clone(),
            result: entry.result.clone(),
            time: entry.time_of_day(),
        }
    }
}

/// Everything a presentation layer needs to draw the calculator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub display: String,
    /// `M: <value>`, present only while memory is non-zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    pub angle_mode: AngleMode,
    pub shift: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_operator: Option<BinaryOperator>,
    /// Labels of the sin, cos and tan keys under the current shift state
    pub trig_labels: [String; 3],
    pub history: Vec<HistoryLine>,
}

pub(crate) fn trig_labels(shift: bool) -> [String; 3] {
    [ScientificFn::Sin, ScientificFn::Cos, ScientificFn::Tan].map(|f| {
        let f = if shift { f.shifted() } else { f };
        f.label().to_string()
    })
}
