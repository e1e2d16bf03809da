//! Calculation history tracking.
//!
//! Keeps a bounded, most-recent-first log of completed calculations.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Number of entries kept unless configured otherwise.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// Record of a single completed calculation.
///
/// Entries are immutable once recorded.
///
/// # Example
///
/// ```rust
/// use scicalc::core::HistoryEntry;
/// use chrono::Utc;
///
/// let entry = HistoryEntry {
///     expression: "3 + 5".to_string(),
///     result: "8".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(entry.time_of_day().len(), 8); // HH:MM:SS
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression evaluated, e.g. `3 + 5` or `sqrt(9)`
    pub expression: String,
    /// The result as it was displayed
    pub result: String,
    /// When the calculation completed
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Timestamp as local time of day.
    pub fn time_of_day(&self) -> String {
        self.timestamp
            .with_timezone(&Local)
            .format("%H:%M:%S")
            .to_string()
    }
}

/// Bounded history of calculations, most recent first.
///
/// Recording beyond capacity discards the oldest entries, so
/// `len() <= capacity()` holds after every `record`.
///
/// # Example
///
/// ```rust
/// use scicalc::core::HistoryBuffer;
///
/// let mut history = HistoryBuffer::new();
/// for i in 0..11 {
///     history.record(format!("{} + 0", i), i.to_string());
/// }
///
/// assert_eq!(history.len(), 10);
/// assert_eq!(history.latest().unwrap().result, "10");
/// assert!(history.entries().iter().all(|e| e.result != "0"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "StoredHistory")]
pub struct HistoryBuffer {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

/// Serialized form of [`HistoryBuffer`], re-validated on load.
#[derive(Deserialize)]
struct StoredHistory {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl From<StoredHistory> for HistoryBuffer {
    fn from(stored: StoredHistory) -> Self {
        let mut history = Self::with_capacity(stored.capacity);
        history.entries = stored.entries;
        history.entries.truncate(history.capacity);
        history
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    /// Create an empty history with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history keeping at most `capacity` entries.
    ///
    /// A capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a calculation completed now, returning the new entry.
    pub fn record(
        &mut self,
        expression: impl Into<String>,
        result: impl Into<String>,
    ) -> &HistoryEntry {
        self.record_at(expression, result, Utc::now())
    }

    /// Record a calculation with an explicit timestamp.
    pub fn record_at(
        &mut self,
        expression: impl Into<String>,
        result: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> &HistoryEntry {
        self.entries.insert(
            0,
            HistoryEntry {
                expression: expression.into(),
                result: result.into(),
                timestamp,
            },
        );
        self.entries.truncate(self.capacity);
        &self.entries[0]
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// The most recently recorded entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
