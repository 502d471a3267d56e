pub mod add;
pub mod calc;
pub mod call;
pub mod config;
pub mod del;
pub mod edit;
pub mod init;
pub mod list;

use crate::config::Config;
use crate::core::roster::Roster;
use crate::errors::AppResult;
use crate::store::SqliteStore;

/// Open the configured database and load the roster from it.
pub(crate) fn open_roster(cfg: &Config) -> AppResult<Roster<SqliteStore>> {
    let store = SqliteStore::open(&cfg.database)?;
    Ok(Roster::load(store, &cfg.roster_key))
}
