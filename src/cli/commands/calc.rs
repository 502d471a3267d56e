use crate::cli::commands::open_roster;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::PaySession;
use crate::errors::{AppError, AppResult};
use crate::models::session_row::TimeField;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_row};
use crate::utils::formatting::{hours, money, or_placeholder};
use crate::utils::table::{Column, Table};

/// One `--row` value split into its parts.
#[derive(Debug, PartialEq, Eq)]
pub struct RowSpec {
    pub start: String,
    pub stop: String,
    pub rate: Option<String>,
}

/// Split "START,STOP[,RATE]". Times are kept as typed; they are only
/// interpreted when totals are computed.
pub fn parse_row_spec(spec: &str) -> AppResult<RowSpec> {
    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [start, stop] => Ok(RowSpec {
            start: start.to_string(),
            stop: stop.to_string(),
            rate: None,
        }),
        [start, stop, rate] => Ok(RowSpec {
            start: start.to_string(),
            stop: stop.to_string(),
            rate: Some(rate.to_string()).filter(|r| !r.is_empty()),
        }),
        _ => Err(AppError::InvalidRow(spec.to_string())),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        rows,
        sitter,
        gas_tip,
    } = cmd
    {
        let specs = rows
            .iter()
            .map(|r| parse_row_spec(r))
            .collect::<AppResult<Vec<_>>>()?;

        let caregiver = match sitter {
            Some(id) => {
                let roster = open_roster(cfg)?;
                let record = roster
                    .get(id)
                    .cloned()
                    .ok_or_else(|| AppError::UnknownCaregiver(id.clone()))?;
                Some(record)
            }
            None => None,
        };

        let mut session = PaySession::new(cfg.range_check());
        session.set_gas_tip(gas_tip);

        for (i, spec) in specs.iter().enumerate() {
            // The session always starts with row "1"
            let row_id = if i == 0 {
                "1".to_string()
            } else {
                session.add_row()
            };

            if let Some(c) = &caregiver {
                session.select_caregiver(&row_id, c)?;
            }
            if let Some(rate) = &spec.rate {
                session.set_rate(&row_id, rate)?;
            }
            session.set_time(&row_id, TimeField::Start, &spec.start)?;
            session.set_time(&row_id, TimeField::Stop, &spec.stop)?;
        }

        if specs.is_empty()
            && let Some(c) = &caregiver
        {
            session.select_caregiver("1", c)?;
        }

        print_session(&session, caregiver.as_ref().map(|c| c.full_name()));
    }

    Ok(())
}

fn print_session(session: &PaySession, who: Option<String>) {
    match who {
        Some(name) => header(format!("Pay for {}", name)),
        None => header("Pay calculation"),
    }

    let summary = session.summary();

    let mut table = Table::new(vec![
        Column::left("#"),
        Column::left("START"),
        Column::left("STOP"),
        Column::right("RATE"),
        Column::right("HOURS"),
        Column::right("TOTAL"),
    ]);
    for row in session.rows() {
        let s = summary.rows.iter().find(|s| s.id == row.id);
        table.add_row(vec![
            row.id.clone(),
            or_placeholder(&row.start),
            or_placeholder(&row.stop),
            or_placeholder(&row.rate),
            hours(s.and_then(|s| s.hours)),
            money(s.map(|s| s.total).unwrap_or(0.0)),
        ]);
    }

    let lines = table.render_lines();
    println!("{}", lines[0]);
    for (line, s) in lines.iter().skip(1).zip(&summary.rows) {
        println!("{}{}{}", color_for_row(s.total, s.out_of_order), line, RESET);
    }

    for s in summary.rows.iter().filter(|s| s.out_of_order) {
        warning(format!("Row {}: stop time must be after start time.", s.id));
    }

    println!();
    println!("Gas/Tip: {}", money(summary.gas_tip));
    println!("Total:   {}", money(summary.total));
}
