use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn).map_err(|e| AppError::StorageInit(e.to_string()))
}

/// Open the database at `path` and make sure the schema is in place.
///
/// Every command goes through here; a store that cannot be initialized is
/// never handed out.
pub fn open_store(path: &str) -> AppResult<DbPool> {
    let pool =
        DbPool::new(path).map_err(|e| AppError::StorageInit(format!("cannot open {path}: {e}")))?;
    init_db(&pool.conn)?;
    Ok(pool)
}
