#![allow(dead_code)]

use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer, Text};
use duty_roster::db::{connection, migrate};
use std::path::PathBuf;
use tempfile::TempDir;

#[derive(QueryableByName)]
struct JournalMode {
    #[diesel(sql_type = Text)]
    journal_mode: String,
}
#[derive(QueryableByName)]
struct ForeignKeys {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}
#[derive(QueryableByName)]
struct BusyTimeout {
    #[diesel(sql_type = Integer, column_name = "timeout")]
    busy_timeout: i32,
}
#[derive(QueryableByName)]
struct RowCount {
    #[diesel(sql_type = BigInt)]
    cnt: i64,
}
#[derive(QueryableByName)]
struct FkViolation {
    #[diesel(sql_type = Text, column_name = "table")]
    table_name: String,
}

pub struct TestDb {
    _dir: TempDir,    // keep alive for the life of the test
    pub path: String, // <tmpdir>/test.db
}

pub fn setup_db() -> (TestDb, SqliteConnection) {
    let dir = TempDir::new().expect("tempdir");
    let mut p = PathBuf::from(dir.path());
    p.push("test.db");
    let path = p.to_string_lossy().to_string();

    // run migrations via the public API
    migrate::run_sqlite(&path).expect("migrations");

    // open a connection with PRAGMAs applied
    let conn = connection::connect_sqlite(&path).expect("connect");
    (TestDb { _dir: dir, path }, conn)
}

pub fn assert_sqlite_pragmas(conn: &mut SqliteConnection) {
    use diesel::sql_query;

    let jm: JournalMode = sql_query("PRAGMA journal_mode;").get_result(conn).unwrap();
    assert_eq!(jm.journal_mode.to_lowercase(), "wal"); // WAL is persistent per DB file

    let fk: ForeignKeys = sql_query("PRAGMA foreign_keys;").get_result(conn).unwrap();
    assert_eq!(fk.foreign_keys, 1);

    let bt: BusyTimeout = sql_query("PRAGMA busy_timeout;").get_result(conn).unwrap();
    assert_eq!(bt.busy_timeout, 5000);
}

pub fn count(conn: &mut SqliteConnection, table: &str) -> i64 {
    diesel::sql_query(format!("SELECT COUNT(*) AS cnt FROM {table};"))
        .get_result::<RowCount>(conn)
        .unwrap()
        .cnt
}

pub fn fk_check_empty(conn: &mut SqliteConnection) {
    let rows: Vec<FkViolation> = diesel::sql_query("PRAGMA foreign_key_check;")
        .load(conn)
        .unwrap();
    let offending: Vec<&str> = rows.iter().map(|r| r.table_name.as_str()).collect();
    assert!(offending.is_empty(), "foreign key violations: {offending:?}");
}

/// Three people, one per active rotation group plus the day-shift group.
pub fn seed_small_roster(conn: &mut SqliteConnection) {
    use duty_roster::roster::repo::upsert_person;

    upsert_person(conn, "RE-0001", "Silva", "alfa").expect("seed Silva");
    upsert_person(conn, "RE-0002", "Souza", "bravo").expect("seed Souza");
    upsert_person(conn, "RE-0003", "Costa", "expediente").expect("seed Costa");
}
