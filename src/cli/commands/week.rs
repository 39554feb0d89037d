use crate::cli::commands::clock_for;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::attendance::AttendanceService;
use crate::core::clock::Clock;
use crate::core::location::NoLocation;
use crate::db::store::{MemoryStore, RecordStore, SqliteStore};
use crate::errors::{AppError, AppResult};
use crate::models::AttendanceRecord;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::{or_dash, short_date};
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::NaiveDate;
use tracing::warn;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let date_arg = match &cli.command {
        Commands::Week { date } => date.clone(),
        _ => return Ok(()),
    };

    let reference = match date_arg {
        Some(d) => Some(
            date::parse_date(&d)
                .filter(|day| date::week_dates(*day).is_some())
                .ok_or(AppError::InvalidDate(d))?,
        ),
        None => None,
    };

    let clock = clock_for(cli)?;

    match SqliteStore::open(&cfg.database) {
        Ok(store) => render(&AttendanceService::new(store, NoLocation, clock), reference),
        Err(e) => {
            warn!(error = %e, "cannot open database, showing an empty week");
            render(
                &AttendanceService::new(MemoryStore::new(), NoLocation, clock),
                reference,
            )
        }
    }
}

fn badge(record: &AttendanceRecord) -> String {
    let text = record.badge();
    if record.is_complete() {
        Colour::Green.paint(text).to_string()
    } else if record.has_clock_in() {
        Colour::Yellow.paint(text).to_string()
    } else {
        Colour::Fixed(8).paint(text).to_string()
    }
}

fn render<S: RecordStore, C: Clock>(
    service: &AttendanceService<S, NoLocation, C>,
    reference: Option<NaiveDate>,
) -> AppResult<()> {
    let reference = reference.unwrap_or_else(|| service.today());
    let week = service.week_records(reference)?;

    header("Weekly Timesheet");

    if let (Some(first), Some(last)) = (week.first(), week.last()) {
        println!("This Week's Clock Records ({} → {})\n", first.date, last.date);
    }

    let mut table = Table::new(vec![
        Column::new("Date", 11),
        Column::new("Status", 11),
        Column::new("In", 11),
        Column::new("Out", 11),
        Column::new("Hours", 7),
    ]);

    for record in &week {
        table.add_row(vec![
            short_date(record.date),
            badge(record),
            or_dash(record.clock_in_time.as_deref()).to_string(),
            or_dash(record.clock_out_time.as_deref()).to_string(),
            service.calculate_hours(record),
        ]);
    }

    print!("{}", table.render());

    let summary = service.weekly_summary(&week);
    println!();
    println!("Days worked       : {}", summary.total_days_worked);
    println!("Days with records : {}", summary.days_with_records);

    Ok(())
}
