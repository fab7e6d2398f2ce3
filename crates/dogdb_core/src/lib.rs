//! Data-access layer for dog records stored in SQLite.
//!
//! Hosts open a connection with [`db::open_db`], hand it to
//! [`SqliteDogRepository::new`], and drive it directly or through
//! [`DogService`].

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::dog::{Dog, DogId};
pub use repo::dog_repo::{new_from_row, DogRepository, SqliteDogRepository};
pub use service::dog_service::DogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
