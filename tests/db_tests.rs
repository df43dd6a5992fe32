use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add, init_db, rex, setup_test_db};

#[test]
fn test_db_info() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);
    add(&db_path, "Rent", "500", "2024-03-01");
    add(&db_path, "Books", "20", "2024-05-10");

    rex()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total expenses:"))
        .stdout(contains("2024-03-01"))
        .stdout(contains("2024-05-10"));
}

#[test]
fn test_db_check_reports_malformed_dates() {
    let db_path = setup_test_db("db_check");
    init_db(&db_path);
    add(&db_path, "Rent", "500", "2024-03-01");

    rex()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"))
        .stdout(contains("All expense dates are YYYY-MM-DD"));

    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute(
            "INSERT INTO expenses (name, amount, date) VALUES ('Legacy', 1.0, '2024-3-7')",
            [],
        )
        .unwrap();
    }

    rex()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("malformed date"))
        .stdout(contains("'2024-3-7'"));

    // reading all rows refuses to sort the corrupt one
    rex()
        .args(["--db", &db_path, "list"])
        .assert()
        .failure()
        .stderr(contains("Corrupt expense #2"));
}

#[test]
fn test_db_migrate_and_vacuum() {
    let db_path = setup_test_db("db_migrate");
    init_db(&db_path);

    rex()
        .args(["--db", &db_path, "db", "--migrate", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("0 pending"))
        .stdout(contains("Vacuum completed"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db(&db_path);
    add(&db_path, "Rent", "500", "2024-03-01");

    rex()
        .args(["--db", &db_path, "limit", "--set", "400"])
        .assert()
        .success();

    rex()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("Rent"))
        .stdout(contains("Monthly limit set to 400.00"))
        .stdout(contains("migration_applied").and(contains("init")));
}

#[test]
fn test_legacy_database_is_adopted() {
    let db_path = setup_test_db("db_legacy");
    {
        let conn = rusqlite::Connection::open(&db_path).unwrap();
        conn.execute_batch(
            "CREATE TABLE expenses (id INTEGER PRIMARY KEY AUTOINCREMENT,
                                    name TEXT, amount REAL, date TEXT);
             CREATE TABLE settings (id INTEGER PRIMARY KEY AUTOINCREMENT,
                                    expense_limit REAL);
             INSERT INTO expenses (name, amount, date) VALUES ('Tea', 2.5, '2023-11-02');
             INSERT INTO settings (expense_limit) VALUES (100.0);
             INSERT INTO settings (expense_limit) VALUES (300.0);",
        )
        .unwrap();
    }

    rex()
        .args(["--db", &db_path, "limit", "--check", "--month", "2023-11"])
        .assert()
        .success()
        .stdout(contains("Migration applied"))
        .stdout(contains("Limit: ₹300.00"));

    rex()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Tea"));
}
