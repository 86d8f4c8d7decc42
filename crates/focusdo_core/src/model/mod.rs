//! Domain model for identities, tasks and sentiment results.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Keep ownership denormalization and status semantics in one place.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` and has exactly one owner.
//! - Deletion is permanent; there is no tombstone state in the model.

pub mod identity;
pub mod sentiment;
pub mod task;
