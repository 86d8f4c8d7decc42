//! Identity provider contract and SQLite implementation.
//!
//! # Responsibility
//! - Expose the authenticated session identity to the task access layer.
//! - Answer admin-roster membership tests.
//! - List identities for the admin assignment selector.
//!
//! # Invariants
//! - Identities are read-only through this interface.
//! - `is_admin` queries the roster on every call; the result is never
//!   cached by this layer.

use crate::model::identity::{Identity, IdentityId, IdentitySummary};
use crate::repo::{ensure_schema, RepoResult};
use rusqlite::{Connection, OptionalExtension, Row};
use uuid::Uuid;

const IDENTITY_SELECT_SQL: &str = "SELECT id, email, display_name FROM identities";

const IDENTITY_COLUMNS: &[&str] = &["id", "email", "display_name"];

/// Read-only identity lookup contract consumed by the task access layer.
pub trait IdentityProvider {
    /// Identity bound to the current session, if any.
    fn current_identity(&self) -> RepoResult<Option<Identity>>;
    /// Admin-roster membership test. Executed per call, never cached.
    fn is_admin(&self, id: IdentityId) -> RepoResult<bool>;
    /// Resolves one identity by ID (assignment target lookup).
    fn get_identity(&self, id: IdentityId) -> RepoResult<Option<Identity>>;
    /// All identities, reduced to `{id, display_name}` for selectors.
    fn list_identities(&self) -> RepoResult<Vec<IdentitySummary>>;
}

/// SQLite-backed identity provider bound to one session.
///
/// The session identity is fixed at construction so controller calls carry
/// no ambient mutable state; tests construct providers with arbitrary
/// session bindings.
pub struct SqliteIdentityProvider<'conn> {
    conn: &'conn Connection,
    session_identity: Option<IdentityId>,
}

impl<'conn> SqliteIdentityProvider<'conn> {
    /// Wraps a migrated connection with a session identity binding.
    ///
    /// `session_identity = None` models an unauthenticated session.
    pub fn try_new(
        conn: &'conn Connection,
        session_identity: Option<IdentityId>,
    ) -> RepoResult<Self> {
        ensure_schema(conn, "identities", IDENTITY_COLUMNS)?;
        ensure_schema(conn, "admins", &["identity_id"])?;
        Ok(Self {
            conn,
            session_identity,
        })
    }
}

impl IdentityProvider for SqliteIdentityProvider<'_> {
    fn current_identity(&self) -> RepoResult<Option<Identity>> {
        match self.session_identity {
            Some(id) => self.get_identity(id),
            None => Ok(None),
        }
    }

    fn is_admin(&self, id: IdentityId) -> RepoResult<bool> {
        let member: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM admins WHERE identity_id = ?1;",
                [id.to_string()],
                |row| row.get(0),
            )
            .optional()?;
        Ok(member.is_some())
    }

    fn get_identity(&self, id: IdentityId) -> RepoResult<Option<Identity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{IDENTITY_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_identity_row(row)?));
        }

        Ok(None)
    }

    fn list_identities(&self) -> RepoResult<Vec<IdentitySummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, display_name FROM identities ORDER BY display_name ASC, id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut identities = Vec::new();
        while let Some(row) = rows.next()? {
            let id_text: String = row.get("id")?;
            let id = Uuid::parse_str(&id_text).map_err(|_| {
                crate::repo::RepoError::InvalidData(format!(
                    "invalid uuid value `{id_text}` in identities.id"
                ))
            })?;
            identities.push(IdentitySummary {
                id,
                display_name: row.get("display_name")?,
            });
        }

        Ok(identities)
    }
}

fn parse_identity_row(row: &Row<'_>) -> RepoResult<Identity> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        crate::repo::RepoError::InvalidData(format!(
            "invalid uuid value `{id_text}` in identities.id"
        ))
    })?;

    Ok(Identity {
        id,
        email: row.get("email")?,
        display_name: row.get("display_name")?,
    })
}
