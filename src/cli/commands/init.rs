use crate::config::Config;
use crate::db::initialize::open_store;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info("Initializing rExpense…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    //
    // 2️⃣ DATABASE (tables + migrations)
    //
    let pool = open_store(&db_path)?;

    //
    // 3️⃣ INTERNAL LOG (non-blocking)
    //
    log::ttlog_quiet(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {}", &db_path),
    );
    pool.close()?;

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
