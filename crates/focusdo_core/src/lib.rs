//! Core domain logic for focusdo.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod sentiment;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::identity::{Identity, IdentityId, IdentitySummary};
pub use model::sentiment::{SentimentLabel, SentimentResult};
pub use model::task::{Task, TaskId, TaskStatus, TaskValidationError};
pub use repo::identity_repo::{IdentityProvider, SqliteIdentityProvider};
pub use repo::task_repo::{
    NewTask, SqliteTaskRepository, TaskListQuery, TaskPatch, TaskRepository,
};
pub use repo::{RepoError, RepoResult};
pub use sentiment::{
    respond, spawn_model_load, ModelSlot, SentimentClassifier, SentimentLexicon, ToxicityModel,
    ToxicityModelError,
};
pub use service::edit_session::{EditSession, EditState, ScratchBuffer};
pub use service::task_access::{
    AccessError, SessionContext, TaskAccessController, TaskDraft,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
