#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rex() -> Command {
    cargo_bin_cmd!("rexpense")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rexpense.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    rex()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add one expense through the CLI
pub fn add(db_path: &str, name: &str, amount: &str, date: &str) {
    rex()
        .args(["--db", db_path, "add", name, amount, "--date", date])
        .assert()
        .success();
}

/// Count rows of a table directly through SQLite
pub fn count_rows(db_path: &str, table: &str) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .expect("count rows")
}
