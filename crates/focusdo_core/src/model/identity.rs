//! Identity domain model.
//!
//! # Responsibility
//! - Define the read-only identity shape consumed by the task access layer.
//!
//! # Invariants
//! - Identities are created by the signup flow, outside this core; this
//!   crate never mutates them.
//! - Admin status is not a field here. It is a roster membership resolved
//!   through `IdentityProvider::is_admin` on every call, so it cannot go
//!   stale inside a long-lived session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an authenticated identity.
pub type IdentityId = Uuid;

/// Authenticated account as seen by the task access layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable global ID.
    pub id: IdentityId,
    /// Login email.
    pub email: String,
    /// Human-facing name used for task ownership snapshots.
    pub display_name: String,
}

/// Reduced identity projection for the admin assignment selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySummary {
    pub id: IdentityId,
    pub display_name: String,
}
