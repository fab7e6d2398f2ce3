//! Domain model for dog records.
//!
//! # Responsibility
//! - Define the in-memory shape persisted by the repository layer.
//!
//! # Invariants
//! - A record without an id has never been persisted.

pub mod dog;
