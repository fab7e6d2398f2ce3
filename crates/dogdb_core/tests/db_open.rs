use dogdb_core::{open_db, open_db_in_memory, DbError, DogRepository, SqliteDogRepository};
use rusqlite::Connection;
use std::thread;

#[test]
fn open_db_in_memory_configures_connection_without_tables() {
    let conn = open_db_in_memory().unwrap();

    let foreign_keys: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(foreign_keys, 1);
    assert!(!table_exists(&conn, "dogs"));
}

#[test]
fn create_and_drop_table_toggle_schema() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDogRepository::new(&conn);

    repo.create_table().unwrap();
    assert!(table_exists(&conn, "dogs"));

    repo.drop_table().unwrap();
    assert!(!table_exists(&conn, "dogs"));
}

#[test]
fn rows_survive_reopening_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dogs.db");

    let id = {
        let conn = open_db(&path).unwrap();
        let repo = SqliteDogRepository::new(&conn);
        repo.create_table().unwrap();
        repo.create("Rex", "Husky").unwrap().id.unwrap()
    };

    let conn = open_db(&path).unwrap();
    let repo = SqliteDogRepository::new(&conn);
    repo.create_table().unwrap();

    let loaded = repo.find(id).unwrap().unwrap();
    assert_eq!(loaded.name, "Rex");
    assert_eq!(loaded.breed, "Husky");
}

#[test]
fn opening_missing_directory_returns_store_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("dogs.db");

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Sqlite(_)));
}

#[test]
fn find_or_create_by_from_many_connections_creates_one_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dogs.db");
    {
        let conn = open_db(&path).unwrap();
        SqliteDogRepository::new(&conn).create_table().unwrap();
    }

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let path = path.clone();
            thread::spawn(move || {
                let conn = open_db(&path).unwrap();
                let repo = SqliteDogRepository::new(&conn);
                (0..10)
                    .map(|_| repo.find_or_create_by("Fido", "Lab").unwrap().id.unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.extend(handle.join().unwrap());
    }

    let conn = open_db(&path).unwrap();
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM dogs;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
    assert!(ids.iter().all(|id| *id == ids[0]));
}

fn table_exists(conn: &Connection, table_name: &str) -> bool {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    exists == 1
}
