//! Domain model for the quest log.
//!
//! # Responsibility
//! - Define the quest entity and its lifecycle.
//! - Keep all business invariants inside the entity itself.
//!
//! # Invariants
//! - Every quest is identified by a stable `QuestId`.
//! - Deletion is a hard delete handled by the repository.

pub mod quest;
