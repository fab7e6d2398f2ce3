//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define data access contracts for dog records.
//! - Isolate SQLite statements from service orchestration.
//!
//! # Invariants
//! - Repositories borrow a caller-owned connection and never close it.
//! - Missing rows are `None`/empty results, never errors.

pub mod dog_repo;
