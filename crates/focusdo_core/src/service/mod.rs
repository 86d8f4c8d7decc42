//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate identity and task store calls into use-case level APIs.
//! - Keep UI layers decoupled from storage details.

pub mod edit_session;
pub mod task_access;
