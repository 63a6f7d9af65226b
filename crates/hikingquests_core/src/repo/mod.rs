//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the storage port the quest services depend on.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod quest_repo;
