//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record and its lifecycle status.
//! - Validate user-entered fields before they reach persistence.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `owner_id`/`owner_display_name` are fixed at creation time;
//!   `owner_display_name` is a snapshot and is never re-synced when the
//!   owning identity later renames itself.
//! - `title` and `description` are non-empty after whitespace trimming.

use crate::model::identity::IdentityId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// Task lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed successfully.
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::Todo
    }
}

/// Canonical task record.
///
/// Owner fields are denormalized on purpose: the display name shown next to
/// a task is the one captured when the task was created or assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable global ID.
    pub id: TaskId,
    /// Short user-entered summary. Non-empty after trimming.
    pub title: String,
    /// Free-form body. Non-empty after trimming.
    pub description: String,
    /// Lifecycle status, defaults to `todo` at creation.
    pub status: TaskStatus,
    /// Identity that owns this task. Immutable after creation.
    pub owner_id: IdentityId,
    /// Owner display name snapshot taken at creation/assignment time.
    pub owner_display_name: String,
    /// Unix epoch milliseconds, set by the store at insert time.
    pub created_at: i64,
}

/// Validation failure for user-entered task fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    /// `title` is empty or whitespace-only.
    EmptyTitle,
    /// `description` is empty or whitespace-only.
    EmptyDescription,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::EmptyDescription => write!(f, "task description must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// Checks user-entered task text fields.
///
/// Called before any store mutation so that empty input never produces a
/// network/storage call.
pub fn validate_task_fields(title: &str, description: &str) -> Result<(), TaskValidationError> {
    if title.trim().is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    if description.trim().is_empty() {
        return Err(TaskValidationError::EmptyDescription);
    }
    Ok(())
}
