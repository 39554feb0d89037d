use crate::cli::commands::clock_for;
use crate::cli::parser::{Cli, Commands, LocationArgs};
use crate::config::Config;
use crate::core::attendance::{AttendanceService, ClockAction};
use crate::core::location::{CommandLocation, FixedLocation, LocationProvider, NoLocation};
use crate::db::log;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::models::LocationReading;
use crate::ui::messages::{success, warning};

/// Pick the location provider for one clock event.
///
/// Explicit flags win; otherwise the configured command is used when
/// location is enabled.
pub fn location_provider(args: &LocationArgs, cfg: &Config) -> Box<dyn LocationProvider> {
    if args.no_location {
        return Box::new(NoLocation);
    }

    if let (Some(lat), Some(lon)) = (args.lat, args.lon) {
        return Box::new(FixedLocation(LocationReading::new(lat, lon, args.accuracy)));
    }

    match (&cfg.location_command, cfg.location_enabled) {
        (Some(command), true) => Box::new(CommandLocation::new(command.clone())),
        _ => Box::new(NoLocation),
    }
}

/// Handle `in` and `out`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (action, args) = match &cli.command {
        Commands::In { location } => (ClockAction::In, location),
        Commands::Out { location } => (ClockAction::Out, location),
        _ => return Ok(()),
    };

    let store = SqliteStore::open(&cfg.database)?;
    let mut service = AttendanceService::new(store, location_provider(args, cfg), clock_for(cli)?);

    let outcome = match action {
        ClockAction::In => service.clock_in()?,
        ClockAction::Out => service.clock_out()?,
    };

    if let Err(e) = log::ttlog(
        service.store().conn(),
        action.operation(),
        &outcome.record.date_str(),
        &outcome.message(),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    success(outcome.message());
    Ok(())
}
