pub mod clock;
pub mod config;
pub mod init;
pub mod log;
pub mod profile;
pub mod status;
pub mod week;

use crate::cli::parser::Cli;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use crate::errors::AppResult;
use crate::utils::time::parse_instant;

/// Clock for this invocation: the hidden `--at` instant, or the system clock.
pub(crate) fn clock_for(cli: &Cli) -> AppResult<Box<dyn Clock>> {
    match &cli.at {
        Some(at) => Ok(Box::new(FixedClock::new(parse_instant(at)?))),
        None => Ok(Box::new(SystemClock)),
    }
}
