//! Core data types for the task manager.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One to-do item, as persisted in the `tasks` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Row id assigned by SQLite on insert; never reused, even after deletes
    pub id: i64,

    /// What needs doing. Non-empty at creation; edit may overwrite it
    pub description: String,

    /// Starts false; the exposed API only ever flips it to true
    pub completed: bool,

    /// Free-form due date, stored exactly as the user typed it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,

    /// Free-form priority, stored exactly as the user typed it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

/// Completion-state filter for listing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    Pending,
    Completed,
}

impl FromStr for StatusFilter {
    type Err = String;

    /// Accepts exactly "pending" or "completed", case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(StatusFilter::Pending),
            "completed" => Ok(StatusFilter::Completed),
            _ => Err(format!("invalid status '{s}': use 'pending' or 'completed'")),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::Pending => write!(f, "pending"),
            StatusFilter::Completed => write!(f, "completed"),
        }
    }
}
