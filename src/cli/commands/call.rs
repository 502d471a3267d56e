use crate::cli::commands::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dial::dial;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Call { id, print_only } = cmd {
        let roster = open_roster(cfg)?;

        let record = roster
            .get(id)
            .ok_or_else(|| AppError::UnknownCaregiver(id.clone()))?;
        let uri = record
            .tel_uri()
            .ok_or_else(|| AppError::NoMobile(record.full_name()))?;

        if *print_only {
            println!("{}", uri);
            return Ok(());
        }

        info(format!("Calling {} 📞 {}", record.full_name(), record.mobile));
        dial(&uri, cfg.dialer.as_deref())?;
    }

    Ok(())
}
