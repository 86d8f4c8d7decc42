//! Client-side edit-mode state machine.
//!
//! # Responsibility
//! - Track which task (if any) a form is currently editing.
//! - Hold the scratch buffer of in-progress field values.
//!
//! # Invariants
//! - At most one task is in `Editing` at a time; starting a new edit
//!   silently replaces the prior scratch buffer.
//! - Cancel and successful save both reset the buffer to defaults
//!   (`title=""`, `description=""`, `status=todo`) and return to `Idle`.
//! - Purely in-memory; nothing here touches persistence.

use crate::model::task::{Task, TaskId, TaskStatus};

/// Form field values being edited or composed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScratchBuffer {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Edit-mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    /// Form is composing a new task.
    Idle,
    /// Form is editing the named task.
    Editing(TaskId),
}

/// Edit-mode session for one task form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    state: EditState,
    buffer: ScratchBuffer,
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditSession {
    /// Starts in `Idle` with default field values.
    pub fn new() -> Self {
        Self {
            state: EditState::Idle,
            buffer: ScratchBuffer::default(),
        }
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// Task currently being edited, if any.
    pub fn editing_task(&self) -> Option<TaskId> {
        match self.state {
            EditState::Idle => None,
            EditState::Editing(id) => Some(id),
        }
    }

    pub fn buffer(&self) -> &ScratchBuffer {
        &self.buffer
    }

    /// Mutable access for form typing.
    pub fn buffer_mut(&mut self) -> &mut ScratchBuffer {
        &mut self.buffer
    }

    /// Enters `Editing` with the task's current values loaded.
    ///
    /// Replaces any prior scratch buffer without warning.
    pub fn begin_edit(&mut self, task: &Task) {
        self.state = EditState::Editing(task.id);
        self.buffer = ScratchBuffer {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
        };
    }

    /// Discards the scratch buffer and returns to `Idle`.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Called after a successful save; discards the buffer and returns to
    /// `Idle` so the caller can refresh its list.
    pub fn complete_save(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.state = EditState::Idle;
        self.buffer = ScratchBuffer::default();
    }
}
