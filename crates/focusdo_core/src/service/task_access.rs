//! Task access controller.
//!
//! # Responsibility
//! - Decide task visibility per session identity (owner vs admin).
//! - Validate and enrich task mutations with ownership metadata.
//!
//! # Invariants
//! - Every operation requires an authenticated session (`AccessError::Auth`
//!   otherwise).
//! - Admin status is resolved through the identity provider on every call
//!   that needs it; it is never cached here or on tasks.
//! - Empty title/description is rejected before any store call.
//! - The edit payload never carries owner fields; ownership is immutable
//!   after creation.
//! - A failed operation mutates nothing; callers keep their prior state and
//!   retry explicitly.

use crate::model::identity::{Identity, IdentityId, IdentitySummary};
use crate::model::task::{validate_task_fields, Task, TaskId, TaskStatus, TaskValidationError};
use crate::repo::identity_repo::IdentityProvider;
use crate::repo::task_repo::{NewTask, TaskListQuery, TaskPatch, TaskRepository};
use crate::repo::RepoError;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Explicit per-call session context.
///
/// Passed into every controller operation instead of living in ambient
/// module state, so tests can run arbitrary identities side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub identity: Option<Identity>,
}

impl SessionContext {
    /// Session with a logged-in identity.
    pub fn authenticated(identity: Identity) -> Self {
        Self {
            identity: Some(identity),
        }
    }

    /// Session without authentication. Every controller call fails with
    /// `AccessError::Auth`.
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    /// Builds the session from the provider's current identity.
    ///
    /// An unauthenticated provider yields an anonymous session; the auth
    /// failure then surfaces on the first controller call, not here.
    pub fn from_provider(provider: &impl IdentityProvider) -> Result<Self, RepoError> {
        Ok(Self {
            identity: provider.current_identity()?,
        })
    }
}

/// Create payload accepted from UI forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// Defaults to `todo` when the form leaves it unset.
    pub status: Option<TaskStatus>,
    /// Admin-only assignment target. Ignored for non-admin callers.
    pub assign_to: Option<IdentityId>,
}

/// Access-layer error taxonomy surfaced to UI callers as display strings.
#[derive(Debug)]
pub enum AccessError {
    /// No identity bound to the session.
    Auth,
    /// Referenced task id missing at write time (store-reported).
    NotFound(TaskId),
    /// The persistence layer rejected the call or was unreachable.
    Store(RepoError),
    /// Empty required field, caught before any store call.
    Validation(TaskValidationError),
    /// Admin assignment names an identity the provider does not know.
    UnknownAssignee(IdentityId),
}

impl Display for AccessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auth => write!(f, "not authenticated: please log in"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Store(err) => write!(f, "task store error: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownAssignee(id) => write!(f, "unknown assignment target: {id}"),
        }
    }
}

impl Error for AccessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TaskValidationError> for AccessError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for AccessError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Controller facade over the task store and identity provider.
pub struct TaskAccessController<R: TaskRepository, P: IdentityProvider> {
    tasks: R,
    identities: P,
}

impl<R: TaskRepository, P: IdentityProvider> TaskAccessController<R, P> {
    /// Creates a controller using the provided store and provider.
    pub fn new(tasks: R, identities: P) -> Self {
        Self { tasks, identities }
    }

    /// Lists tasks visible to the session identity, newest first.
    ///
    /// # Contract
    /// - Admin sessions see every task.
    /// - Non-admin sessions see only tasks they own.
    /// - Visibility is recomputed on every call.
    pub fn list_tasks(&self, session: &SessionContext) -> Result<Vec<Task>, AccessError> {
        let identity = require_identity(session)?;
        let admin = self.identities.is_admin(identity.id)?;

        let query = TaskListQuery {
            owner: if admin { None } else { Some(identity.id) },
        };
        let tasks = self.tasks.list_tasks(&query)?;

        info!(
            "event=task_list module=task_access status=ok admin={admin} count={}",
            tasks.len()
        );
        Ok(tasks)
    }

    /// Creates one task from form input.
    ///
    /// # Contract
    /// - Rejects empty title/description with no store call.
    /// - Admin callers may assign ownership to another identity; the owner
    ///   display name is snapshotted from the target at this moment.
    /// - `status` defaults to `todo`.
    pub fn create_task(
        &self,
        session: &SessionContext,
        draft: &TaskDraft,
    ) -> Result<Task, AccessError> {
        let identity = require_identity(session)?;
        validate_task_fields(&draft.title, &draft.description)?;

        let (owner_id, owner_display_name) = self.resolve_owner(identity, draft.assign_to)?;

        let task = self.tasks.insert_task(&NewTask {
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: draft.status.unwrap_or_default(),
            owner_id,
            owner_display_name,
        })?;

        info!(
            "event=task_create module=task_access status=ok task_id={} assigned={}",
            task.id,
            owner_id != identity.id
        );
        Ok(task)
    }

    /// Updates title/description/status of an existing task.
    ///
    /// Ownership is not re-validated here; the store's access policy is the
    /// write authority. This layer only shapes the update payload, which by
    /// construction cannot touch owner fields.
    pub fn edit_task(
        &self,
        session: &SessionContext,
        id: TaskId,
        patch: &TaskPatch,
    ) -> Result<Task, AccessError> {
        require_identity(session)?;
        validate_task_fields(&patch.title, &patch.description)?;

        let task = self.tasks.update_task(id, patch)?;

        info!("event=task_edit module=task_access status=ok task_id={id}");
        Ok(task)
    }

    /// Deletes a task by id.
    ///
    /// Idempotent from the caller's perspective: a stale reference to an
    /// already-deleted task is treated as success so it cannot block the
    /// rest of the session.
    pub fn delete_task(&self, session: &SessionContext, id: TaskId) -> Result<(), AccessError> {
        require_identity(session)?;

        match self.tasks.delete_task(id) {
            Ok(()) => {
                info!("event=task_delete module=task_access status=ok task_id={id}");
                Ok(())
            }
            Err(RepoError::NotFound(_)) => {
                debug!(
                    "event=task_delete module=task_access status=ok task_id={id} note=already_absent"
                );
                Ok(())
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Identities offered in the admin assignment selector.
    ///
    /// Non-admin callers get an empty list; the selector is an admin-only
    /// surface and there is nothing for other sessions to choose from.
    pub fn assignable_identities(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<IdentitySummary>, AccessError> {
        let identity = require_identity(session)?;
        if !self.identities.is_admin(identity.id)? {
            return Ok(Vec::new());
        }
        Ok(self.identities.list_identities()?)
    }

    fn resolve_owner(
        &self,
        caller: &Identity,
        assign_to: Option<IdentityId>,
    ) -> Result<(IdentityId, String), AccessError> {
        if let Some(target) = assign_to {
            if target != caller.id && self.identities.is_admin(caller.id)? {
                let assignee = self
                    .identities
                    .get_identity(target)?
                    .ok_or(AccessError::UnknownAssignee(target))?;
                return Ok((assignee.id, assignee.display_name));
            }
            if target != caller.id {
                // Non-admin callers cannot assign; fall through to self.
                warn!(
                    "event=task_assign module=task_access status=ignored caller={} target={target}",
                    caller.id
                );
            }
        }
        Ok((caller.id, caller.display_name.clone()))
    }
}

fn require_identity(session: &SessionContext) -> Result<&Identity, AccessError> {
    session.identity.as_ref().ok_or(AccessError::Auth)
}
