use crate::cli::commands::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::caregiver::CaregiverDraft;
use crate::ui::messages::{success, warning};

/// Add a caregiver to the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        first_name,
        last_name,
        rate,
        mobile,
    } = cmd
    {
        let mut roster = open_roster(cfg)?;
        let draft = CaregiverDraft::new(first_name, last_name, mobile, rate);

        match roster.add(draft) {
            Ok(record) => success(format!(
                "Added {} (id {}) at ${}/hr",
                record.full_name(),
                record.id,
                record.rate
            )),
            // Rejected: nothing was stored, the user can retry with the field filled in
            Err(AppError::MissingField(field)) => {
                warning(format!("Caregiver not added: '{}' is required.", field));
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
