//! Quest use-case services.
//!
//! # Responsibility
//! - Orchestrate load/mutate/persist sequences over the repository port.
//! - Keep callers decoupled from storage details.
//!
//! # Invariants
//! - Services take their repository by constructor injection.
//! - Services never commit; the caller owns the unit of work.

pub mod error;
pub mod management_service;
pub mod query_service;
pub mod seed;
pub mod workflow_service;
