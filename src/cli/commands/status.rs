use crate::cli::commands::clock_for;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::attendance::AttendanceService;
use crate::core::clock::{Clock, IntervalTicker, Ticker};
use crate::core::location::NoLocation;
use crate::db::store::{MemoryStore, RecordStore, SqliteStore};
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, DayStatus};
use crate::utils::formatting::{clock_display, describe_location, long_date, or_dash};
use ansi_term::Colour;
use std::io::{self, Write};
use tracing::warn;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let watch = match &cli.command {
        Commands::Status { watch } => *watch,
        _ => return Ok(()),
    };

    let clock = clock_for(cli)?;
    let mut ticker = watch.map(IntervalTicker::every_second);

    match SqliteStore::open(&cfg.database) {
        Ok(store) => render(AttendanceService::new(store, NoLocation, clock), ticker.as_mut()),
        Err(e) => {
            warn!(error = %e, "cannot open database, showing empty status");
            render(
                AttendanceService::new(MemoryStore::new(), NoLocation, clock),
                ticker.as_mut(),
            )
        }
    }
}

fn render<S: RecordStore, C: Clock>(
    service: AttendanceService<S, NoLocation, C>,
    ticker: Option<&mut IntervalTicker>,
) -> AppResult<()> {
    let now = service.now();
    let record = service.today_record();
    let status = service.today_status();

    println!("📅 {}", long_date(now.date()));
    println!("🕒 {}", clock_display(now));
    println!();

    print_status(status, record.as_ref());

    // live clock: redraw the time line on each tick until the ticker stops
    if let Some(ticker) = ticker {
        let mut out = io::stdout();
        while ticker.tick() {
            write!(out, "\r🕒 {}", clock_display(service.now()))?;
            out.flush()?;
        }
        writeln!(out)?;
    }

    Ok(())
}

fn print_status(status: DayStatus, record: Option<&AttendanceRecord>) {
    let dot = match status {
        DayStatus::ClockedIn => Colour::Green.paint("●"),
        DayStatus::ClockedOut => Colour::Yellow.paint("●"),
        DayStatus::NotClockedIn => Colour::Fixed(8).paint("●"),
    };
    println!("{} {}", dot, status.label());

    if let Some(r) = record {
        println!(
            "   In : {:<12} 📍 {}",
            or_dash(r.clock_in_time.as_deref()),
            describe_location(r.clock_in_location.as_ref())
        );
        println!(
            "   Out: {:<12} 📍 {}",
            or_dash(r.clock_out_time.as_deref()),
            describe_location(r.clock_out_location.as_ref())
        );
    }
}
