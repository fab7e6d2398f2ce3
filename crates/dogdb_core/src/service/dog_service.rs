//! Dog use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for hosts (CLI, embedding apps).
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::db::DbResult;
use crate::model::dog::{Dog, DogId};
use crate::repo::dog_repo::DogRepository;

/// Use-case service wrapper for dog operations.
pub struct DogService<R: DogRepository> {
    repo: R,
}

impl<R: DogRepository> DogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Makes sure the backing table exists. Safe to call on every startup.
    pub fn ensure_schema(&self) -> DbResult<()> {
        self.repo.create_table()
    }

    /// Drops and recreates the backing table, discarding all rows.
    pub fn reset_schema(&self) -> DbResult<()> {
        self.repo.drop_table()?;
        self.repo.create_table()
    }

    /// Persists a new dog and returns it with its assigned id.
    pub fn register(&self, name: &str, breed: &str) -> DbResult<Dog> {
        self.repo.create(name, breed)
    }

    /// Returns the existing dog for `(name, breed)` or registers a new one.
    pub fn adopt(&self, name: &str, breed: &str) -> DbResult<Dog> {
        self.repo.find_or_create_by(name, breed)
    }

    /// Renames a persisted dog.
    ///
    /// # Contract
    /// - Returns `Ok(None)` when no dog has `id`.
    /// - Returns the updated record otherwise.
    pub fn rename(&self, id: DogId, name: impl Into<String>) -> DbResult<Option<Dog>> {
        let name = name.into();
        self.modify(id, |dog| dog.name = name)
    }

    /// Changes the breed of a persisted dog.
    ///
    /// Same contract as [`DogService::rename`].
    pub fn change_breed(&self, id: DogId, breed: impl Into<String>) -> DbResult<Option<Dog>> {
        let breed = breed.into();
        self.modify(id, |dog| dog.breed = breed)
    }

    /// Gets one dog by id.
    pub fn get(&self, id: DogId) -> DbResult<Option<Dog>> {
        self.repo.find(id)
    }

    /// Gets one dog by exact name.
    pub fn lookup_by_name(&self, name: &str) -> DbResult<Option<Dog>> {
        self.repo.find_by_name(name)
    }

    /// Lists every dog in store order.
    pub fn list(&self) -> DbResult<Vec<Dog>> {
        self.repo.all()
    }

    fn modify(&self, id: DogId, apply: impl FnOnce(&mut Dog)) -> DbResult<Option<Dog>> {
        let Some(mut dog) = self.repo.find(id)? else {
            return Ok(None);
        };
        apply(&mut dog);
        self.repo.save(&mut dog)?;
        Ok(Some(dog))
    }
}
