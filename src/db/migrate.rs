use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// One schema step. `sql` must be safe to run on a database that already
/// has the objects it creates (legacy files made by older tools).
struct Migration {
    id: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        id: "20250301_0001_create_expenses",
        description: "Created expenses table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS expenses (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL,
            amount  REAL NOT NULL,
            date    TEXT NOT NULL
        );
        "#,
    },
    Migration {
        id: "20250301_0002_create_settings",
        description: "Created settings table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS settings (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            expense_limit  REAL NOT NULL
        );
        "#,
    },
    Migration {
        id: "20250301_0003_index_expense_date",
        description: "Added date index to expenses",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
        "#,
    },
    Migration {
        id: "20250301_0004_single_limit_row",
        description: "Kept only the most recent limit in settings",
        sql: r#"
        DELETE FROM settings
        WHERE id <> (SELECT IFNULL(MAX(id), 0) FROM settings);
        "#,
    },
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
pub fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn is_applied(conn: &Connection, id: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([id], |_| Ok(())).optional()?.is_some())
}

/// Run a single migration and mark it as applied, atomically.
fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.id, m.description],
    )?;
    tx.commit()
}

/// IDs of migrations not yet recorded in the `log` table.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    if !table_exists(conn, "log")? {
        return Ok(MIGRATIONS.iter().map(|m| m.id).collect());
    }

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.id)? {
            out.push(m.id);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Files created before the log table existed already hold data
    let fresh = !table_exists(conn, "expenses")?;
    if !fresh && pending_migrations(conn)?.len() == MIGRATIONS.len() {
        warning("Existing expenses database detected: adopting it into the migration history...");
    }

    // 3) Apply in order
    for m in MIGRATIONS {
        if is_applied(conn, m.id)? {
            continue;
        }
        apply(conn, m)?;
        if !fresh {
            success(format!("Migration applied: {} → {}", m.id, m.description));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_database_gets_every_migration_once() {
        let conn = Connection::open_in_memory().unwrap();
        assert_eq!(pending_migrations(&conn).unwrap().len(), MIGRATIONS.len());

        run_pending_migrations(&conn).unwrap();
        run_pending_migrations(&conn).unwrap();

        assert!(pending_migrations(&conn).unwrap().is_empty());
        let applied: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(applied as usize, MIGRATIONS.len());
    }

    #[test]
    fn legacy_file_keeps_rows_and_only_latest_limit() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE expenses (id INTEGER PRIMARY KEY AUTOINCREMENT,
                                   name TEXT, amount REAL, date TEXT);
            CREATE TABLE settings (id INTEGER PRIMARY KEY AUTOINCREMENT,
                                   expense_limit REAL);
            INSERT INTO expenses (name, amount, date) VALUES ('Tea', 2.5, '2023-11-02');
            INSERT INTO settings (expense_limit) VALUES (100.0);
            INSERT INTO settings (expense_limit) VALUES (250.0);
            "#,
        )
        .unwrap();

        run_pending_migrations(&conn).unwrap();

        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
            .unwrap();
        assert_eq!(n, 1);

        let limits: Vec<f64> = conn
            .prepare("SELECT expense_limit FROM settings")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(limits, vec![250.0]);
    }
}
