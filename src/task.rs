//! Task records and completion-state normalization
//!
//! The backend serves two generations of records: current ones carry a numeric
//! `status` (0 pending, 1 completed), legacy ones a boolean `completed`. Exactly
//! one is present per record; `is_completed` resolves either shape.

use serde::{Deserialize, Serialize};

/// A task record as served by the backend.
///
/// Decoding is deliberately lenient: every field is optional or defaulted so a
/// fetch never fails on a sparse record. The server owns the canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier, absent on drafts.
    #[serde(
        rename = "_id",
        alias = "id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Due date as the backend sent it; parsed only for display.
    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    /// Ordinal priority, 1=low .. 3=high.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,

    /// Current representation: 0 pending, 1 completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,

    /// Legacy representation, only consulted when `status` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl Task {
    /// A minimal record with only a title, pending by default.
    pub fn with_title(title: impl Into<String>) -> Self {
        Task {
            id: None,
            title: title.into(),
            description: None,
            due_date: None,
            priority: None,
            status: None,
            completed: None,
        }
    }
}

/// Resolve a task's completion state from either representation.
///
/// `status` wins when present; legacy `completed` is the fallback; a record
/// with neither is treated as pending. Total over any record, never panics.
pub fn is_completed(task: &Task) -> bool {
    match task.status {
        Some(status) => status == 1,
        None => task.completed.unwrap_or(false),
    }
}

/// Payload for creating a task. No identifier: the server assigns one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
}

/// Partial update payload. Absent fields are omitted from the request body so
/// the server keeps their current values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "dueDate", default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
}

impl TaskPatch {
    /// A patch that only changes the completion status.
    pub fn status_only(status: i64) -> Self {
        TaskPatch {
            status: Some(status),
            ..TaskPatch::default()
        }
    }
}
