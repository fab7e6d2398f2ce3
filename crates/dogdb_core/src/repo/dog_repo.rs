//! Dog repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Map `Dog` values onto rows of the `dogs` table.
//! - Own every SQL statement issued against that table.
//!
//! # Invariants
//! - Values are always bound as parameters, never interpolated.
//! - Rows are decoded by column name.
//! - Store errors propagate unchanged; no retries.
//! - `save` leaves `dog.id` set on success.

use crate::db::DbResult;
use crate::model::dog::{Dog, DogId};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row, Transaction, TransactionBehavior};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS dogs (
    id INTEGER PRIMARY KEY,
    name TEXT,
    breed TEXT
);";

const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS dogs;";

const INSERT_SQL: &str = "INSERT INTO dogs (name, breed) VALUES (?1, ?2);";

const UPDATE_SQL: &str = "UPDATE dogs
 SET
    name = ?1,
    breed = ?2
 WHERE id = ?3;";

const SELECT_ALL_SQL: &str = "SELECT * FROM dogs;";

const FIND_BY_NAME_SQL: &str = "SELECT * FROM dogs WHERE name = ?1 LIMIT 1;";

const FIND_BY_ID_SQL: &str = "SELECT * FROM dogs WHERE id = ?1 LIMIT 1;";

const FIND_BY_NAME_AND_BREED_SQL: &str = "SELECT *
FROM dogs
WHERE name = ?1
  AND breed = ?2
LIMIT 1;";

/// Repository interface for dog persistence.
pub trait DogRepository {
    /// Creates the `dogs` table if it does not exist yet.
    fn create_table(&self) -> DbResult<()>;
    /// Drops the `dogs` table if it exists.
    fn drop_table(&self) -> DbResult<()>;
    /// Inserts an unpersisted dog or updates a persisted one.
    ///
    /// Assigns `dog.id` on insert and hands the same record back, now
    /// carrying its id.
    fn save<'d>(&self, dog: &'d mut Dog) -> DbResult<&'d mut Dog>;
    /// Builds a new dog from its fields and saves it.
    fn create(&self, name: &str, breed: &str) -> DbResult<Dog>;
    /// Returns every row in store order.
    fn all(&self) -> DbResult<Vec<Dog>>;
    /// Returns one dog whose name matches exactly.
    fn find_by_name(&self, name: &str) -> DbResult<Option<Dog>>;
    /// Returns the dog with the given id.
    fn find(&self, id: DogId) -> DbResult<Option<Dog>>;
    /// Returns a dog matching both fields, creating one when none exists.
    fn find_or_create_by(&self, name: &str, breed: &str) -> DbResult<Dog>;
    /// Writes `name` and `breed` to the row matching `dog.id`.
    ///
    /// Returns the number of rows changed. An unset id or an id without a
    /// row changes nothing and is not an error.
    fn update(&self, dog: &Dog) -> DbResult<usize>;
}

/// SQLite-backed dog repository.
pub struct SqliteDogRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDogRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn find_or_create_in(&self, conn: &Connection, name: &str, breed: &str) -> DbResult<Dog> {
        let existing = conn
            .query_row(
                FIND_BY_NAME_AND_BREED_SQL,
                params![name, breed],
                new_from_row,
            )
            .optional()?;

        match existing {
            Some(dog) => {
                debug!(
                    "event=dog_find_or_create module=repo status=ok outcome=found id={}",
                    dog.id.unwrap_or_default()
                );
                Ok(dog)
            }
            None => {
                let dog = self.create(name, breed)?;
                debug!(
                    "event=dog_find_or_create module=repo status=ok outcome=created id={}",
                    dog.id.unwrap_or_default()
                );
                Ok(dog)
            }
        }
    }
}

impl DogRepository for SqliteDogRepository<'_> {
    fn create_table(&self) -> DbResult<()> {
        self.conn.execute_batch(CREATE_TABLE_SQL)?;
        debug!("event=schema_create module=repo status=ok table=dogs");
        Ok(())
    }

    fn drop_table(&self) -> DbResult<()> {
        self.conn.execute_batch(DROP_TABLE_SQL)?;
        debug!("event=schema_drop module=repo status=ok table=dogs");
        Ok(())
    }

    fn save<'d>(&self, dog: &'d mut Dog) -> DbResult<&'d mut Dog> {
        if dog.is_persisted() {
            self.update(dog)?;
            return Ok(dog);
        }

        self.conn
            .execute(INSERT_SQL, params![dog.name.as_str(), dog.breed.as_str()])?;
        // `Connection` is !Sync, so no other statement can run on this
        // connection between the insert and the rowid read.
        let id = self.conn.last_insert_rowid();
        dog.id = Some(id);

        debug!("event=dog_insert module=repo status=ok id={id}");
        Ok(dog)
    }

    fn create(&self, name: &str, breed: &str) -> DbResult<Dog> {
        let mut dog = Dog::new(name, breed);
        self.save(&mut dog)?;
        Ok(dog)
    }

    fn all(&self) -> DbResult<Vec<Dog>> {
        let mut stmt = self.conn.prepare(SELECT_ALL_SQL)?;
        let dogs = stmt
            .query_map([], new_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(dogs)
    }

    fn find_by_name(&self, name: &str) -> DbResult<Option<Dog>> {
        let dog = self
            .conn
            .query_row(FIND_BY_NAME_SQL, [name], new_from_row)
            .optional()?;
        Ok(dog)
    }

    fn find(&self, id: DogId) -> DbResult<Option<Dog>> {
        let dog = self
            .conn
            .query_row(FIND_BY_ID_SQL, [id], new_from_row)
            .optional()?;
        Ok(dog)
    }

    fn find_or_create_by(&self, name: &str, breed: &str) -> DbResult<Dog> {
        // A caller-owned transaction already isolates the check and the
        // insert; SQLite rejects nested BEGIN.
        if !self.conn.is_autocommit() {
            return self.find_or_create_in(self.conn, name, breed);
        }

        // IMMEDIATE takes the write lock before the lookup, so no other
        // connection can insert the same pair in between.
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let dog = self.find_or_create_in(&tx, name, breed)?;
        tx.commit()?;
        Ok(dog)
    }

    fn update(&self, dog: &Dog) -> DbResult<usize> {
        let changed = self.conn.execute(
            UPDATE_SQL,
            params![dog.name.as_str(), dog.breed.as_str(), dog.id],
        )?;

        debug!(
            "event=dog_update module=repo status=ok id={} changed={changed}",
            dog.id.map_or_else(|| "none".to_string(), |id| id.to_string())
        );
        Ok(changed)
    }
}

/// Decodes one `dogs` row into a persisted `Dog`.
///
/// Columns are read by name, so the decoder is insensitive to column order.
/// Value conversion is left to SQLite's native decoding.
pub fn new_from_row(row: &Row<'_>) -> rusqlite::Result<Dog> {
    Ok(Dog {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        breed: row.get("breed")?,
    })
}
