//! Task store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `tasks` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `insert_task` assigns the task ID; callers never pick IDs.
//! - `update_task` touches only title/description/status. Owner fields and
//!   `created_at` are immutable after insert.
//! - `delete_task` is a hard delete; a missing row reports `NotFound` and
//!   the caller decides whether that matters.
//! - List order is `created_at DESC, id ASC` (stable under equal
//!   timestamps).

use crate::model::identity::IdentityId;
use crate::model::task::{Task, TaskId, TaskStatus};
use crate::repo::{ensure_schema, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    status,
    owner_id,
    owner_display_name,
    created_at
FROM tasks";

const TASK_COLUMNS: &[&str] = &[
    "id",
    "title",
    "description",
    "status",
    "owner_id",
    "owner_display_name",
    "created_at",
];

/// Insert payload; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub owner_id: IdentityId,
    pub owner_display_name: String,
}

/// Update payload. Deliberately has no owner fields: the update set is
/// exactly these three columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

/// Filter options for listing tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskListQuery {
    /// Restrict to one owner. `None` returns every task (admin view).
    pub owner: Option<IdentityId>,
}

/// Store interface for task CRUD operations.
pub trait TaskRepository {
    fn insert_task(&self, draft: &NewTask) -> RepoResult<Task>;
    fn update_task(&self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task>;
    fn delete_task(&self, id: TaskId) -> RepoResult<()>;
    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>>;
    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed task store.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    /// Wraps a migrated connection.
    ///
    /// # Errors
    /// - `UninitializedConnection` when the schema version does not match.
    /// - `MissingRequiredTable`/`MissingRequiredColumn` when the `tasks`
    ///   shape is not the one this binary was built against.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_schema(conn, "tasks", TASK_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert_task(&self, draft: &NewTask) -> RepoResult<Task> {
        let id: TaskId = Uuid::new_v4();

        self.conn.execute(
            "INSERT INTO tasks (
                id,
                title,
                description,
                status,
                owner_id,
                owner_display_name
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                id.to_string(),
                draft.title.as_str(),
                draft.description.as_str(),
                task_status_to_db(draft.status),
                draft.owner_id.to_string(),
                draft.owner_display_name.as_str(),
            ],
        )?;

        // Read back so created_at comes from the store, not the client clock.
        self.get_task(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("inserted task {id} not found in read-back"))
        })
    }

    fn update_task(&self, id: TaskId, patch: &TaskPatch) -> RepoResult<Task> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?1,
                description = ?2,
                status = ?3
             WHERE id = ?4;",
            params![
                patch.title.as_str(),
                patch.description.as_str(),
                task_status_to_db(patch.status),
                id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        self.get_task(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("updated task {id} not found in read-back"))
        })
    }

    fn delete_task(&self, id: TaskId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_task(&self, id: TaskId) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_tasks(&self, query: &TaskListQuery) -> RepoResult<Vec<Task>> {
        let mut tasks = Vec::new();

        if let Some(owner) = query.owner {
            let mut stmt = self.conn.prepare(&format!(
                "{TASK_SELECT_SQL}
                 WHERE owner_id = ?1
                 ORDER BY created_at DESC, id ASC;"
            ))?;
            let mut rows = stmt.query([owner.to_string()])?;
            while let Some(row) = rows.next()? {
                tasks.push(parse_task_row(row)?);
            }
        } else {
            let mut stmt = self
                .conn
                .prepare(&format!("{TASK_SELECT_SQL} ORDER BY created_at DESC, id ASC;"))?;
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                tasks.push(parse_task_row(row)?);
            }
        }

        Ok(tasks)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{id_text}` in tasks.id")))?;

    let owner_text: String = row.get("owner_id")?;
    let owner_id = Uuid::parse_str(&owner_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{owner_text}` in tasks.owner_id"))
    })?;

    let status_text: String = row.get("status")?;
    let status = parse_task_status(&status_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid task status `{status_text}` in tasks.status"))
    })?;

    Ok(Task {
        id,
        title: row.get("title")?,
        description: row.get("description")?,
        status,
        owner_id,
        owner_display_name: row.get("owner_display_name")?,
        created_at: row.get("created_at")?,
    })
}

fn task_status_to_db(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "todo",
        TaskStatus::InProgress => "in_progress",
        TaskStatus::Done => "done",
    }
}

fn parse_task_status(value: &str) -> Option<TaskStatus> {
    match value {
        "todo" => Some(TaskStatus::Todo),
        "in_progress" => Some(TaskStatus::InProgress),
        "done" => Some(TaskStatus::Done),
        _ => None,
    }
}
