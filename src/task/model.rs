//! Task data model

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Numeric task identifier, unique among live tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl TaskId {
    /// Get the numeric part
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TaskId {
    fn from(n: u32) -> Self {
        Self(n)
    }
}

/// A task
///
/// Older task files used capitalised keys and full timestamps for the due
/// date, so both spellings are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID
    #[serde(alias = "ID")]
    pub id: TaskId,

    /// Free-form description, may be empty
    #[serde(alias = "Text", default)]
    pub text: String,

    /// Whether the task has been completed
    #[serde(alias = "Completed", default)]
    pub completed: bool,

    /// Priority, no enforced range
    #[serde(alias = "Priority", default)]
    pub priority: i64,

    /// Due date
    #[serde(alias = "DueDate", deserialize_with = "deserialize_due_date")]
    pub due_date: NaiveDate,
}

impl Task {
    /// Create a new, not yet completed task
    pub fn new(id: TaskId, text: impl Into<String>, priority: i64, due_date: NaiveDate) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            priority,
            due_date,
        }
    }

    /// Mark task as done. Completing twice is a no-op.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Get the status label shown to the user
    pub fn status_label(&self) -> &'static str {
        if self.completed {
            "completed"
        } else {
            "not completed"
        }
    }

    /// Case-insensitive substring test against the task text.
    pub fn text_contains(&self, needle_lower: &str) -> bool {
        self.text.to_lowercase().contains(needle_lower)
    }
}

fn deserialize_due_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|ts| ts.date_naive())
        .map_err(|_| serde::de::Error::custom(format!("invalid due date '{}'", raw)))
}
