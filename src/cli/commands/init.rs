use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::roster::load_records;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::store::migrate::run_pending_migrations;
use crate::ui::messages::{info, success};
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with its `kv` table
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing sitterpay…");
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    run_pending_migrations(&conn)?;
    let store = SqliteStore::from_connection(conn)?;

    let existing = load_records(&store, &cfg.roster_key).len();
    if existing > 0 {
        info(format!("Existing roster kept ({} caregivers).", existing));
    }

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
