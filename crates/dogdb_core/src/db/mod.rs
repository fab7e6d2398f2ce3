//! SQLite connection bootstrap for host applications.
//!
//! # Responsibility
//! - Open and configure SQLite connections that repositories borrow.
//! - Define the single storage error surfaced by core.
//!
//! # Invariants
//! - Opening a connection never creates application tables; schema
//!   presence is owned by `DogRepository::create_table`.
//! - Store errors are carried unchanged, never translated.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage operation failure reported by SQLite.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
