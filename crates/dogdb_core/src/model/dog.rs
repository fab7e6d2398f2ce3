//! Dog domain model.
//!
//! # Responsibility
//! - Define the canonical record mapped onto one `dogs` table row.
//! - Make the persisted/unpersisted distinction explicit in the type.
//!
//! # Invariants
//! - `id` is `None` until the first successful insert.
//! - `id` is sourced from the store's generated row id and assigned once.
//! - `name` and `breed` are free text and never validated.

use serde::{Deserialize, Serialize};

/// Store-assigned row identifier of a persisted dog.
pub type DogId = i64;

/// Canonical domain record for one dog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// `None` for a record that has not been saved yet.
    pub id: Option<DogId>,
    pub name: String,
    pub breed: String,
}

impl Dog {
    /// Creates an unpersisted dog.
    pub fn new(name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            breed: breed.into(),
        }
    }

    /// Creates a dog that already carries a store-assigned id.
    ///
    /// Used by row decoding; callers building new records should use
    /// [`Dog::new`] and let the repository assign the id.
    pub fn with_id(id: DogId, name: impl Into<String>, breed: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
            breed: breed.into(),
        }
    }

    /// Returns whether this dog has been written to the store.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
