//! Use-case services over repository contracts.
//!
//! # Responsibility
//! - Expose caller-facing entry points without leaking storage details.
//!
//! # Invariants
//! - Services only reach storage through repository traits.

pub mod dog_service;
