use crate::cli::commands::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::caregiver::CaregiverUpdate;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        first_name,
        last_name,
        mobile,
        rate,
    } = cmd
    {
        let mut roster = open_roster(cfg)?;

        let update = CaregiverUpdate {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            mobile: mobile.clone(),
            rate: rate.clone(),
        };

        match roster.edit(id, &update)? {
            Some(record) => success(format!(
                "Saved {} ({}, ${}/hr)",
                record.full_name(),
                if record.mobile.is_empty() {
                    "no mobile"
                } else {
                    record.mobile.as_str()
                },
                record.rate
            )),
            None => warning(format!("No caregiver with id {}.", id)),
        }
    }

    Ok(())
}
