use crate::cli::commands::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut roster = open_roster(cfg)?;

        // Deleting an unknown id is not an error, there is just nothing to do
        let Some(request) = roster.request_delete(id) else {
            info(format!("No caregiver with id {}, nothing deleted.", id));
            return Ok(());
        };

        if !*yes && !confirm(request.prompt(), io::stdin().lock()) {
            info("Operation cancelled.");
            return Ok(());
        }

        if let Some(removed) = roster.confirm_delete(request)? {
            success(format!("{} has been deleted.", removed.full_name()));
        }
    }

    Ok(())
}
