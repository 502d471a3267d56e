use crate::cli::commands::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{or_placeholder, rate_per_hour};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let roster = open_roster(cfg)?;

        if roster.is_empty() {
            info("No caregivers saved yet. Add one with `sitterpay add`.");
            return Ok(());
        }

        header(format!("Roster ({})", roster.len()));

        let mut table = Table::new(vec![
            Column::left("ID"),
            Column::left("NAME"),
            Column::left("MOBILE"),
            Column::right("RATE"),
        ]);
        for r in roster.records() {
            table.add_row(vec![
                r.id.clone(),
                r.full_name(),
                or_placeholder(&r.mobile),
                rate_per_hour(&r.rate),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
