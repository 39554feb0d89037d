use clap::{ArgAction, Args, Parser, Subcommand};

/// Command-line interface definition for timeclock
#[derive(Parser)]
#[command(
    name = "timeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time clock: clock in/out with optional location and review your weekly timesheet",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Use this instant as "now" (YYYY-MM-DDTHH:MM[:SS])
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the location of a clock event comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct LocationArgs {
    #[arg(
        long = "lat",
        requires = "lon",
        allow_negative_numbers = true,
        help = "Latitude of the clock event"
    )]
    pub lat: Option<f64>,

    #[arg(
        long = "lon",
        requires = "lat",
        allow_negative_numbers = true,
        help = "Longitude of the clock event"
    )]
    pub lon: Option<f64>,

    #[arg(long = "accuracy", requires = "lat", help = "Accuracy of the fix in metres")]
    pub accuracy: Option<f64>,

    #[arg(
        long = "no-location",
        conflicts_with_all = ["lat", "lon", "accuracy"],
        help = "Do not record a location for this event"
    )]
    pub no_location: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Clock in for today
    In {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Clock out for today
    Out {
        #[command(flatten)]
        location: LocationArgs,
    },

    /// Show today's date, time and clock status
    Status {
        #[arg(
            long = "watch",
            value_name = "TICKS",
            help = "Refresh the clock every second, TICKS times"
        )]
        watch: Option<u32>,
    },

    /// Show the weekly timesheet (Sunday to Saturday)
    Week {
        #[arg(
            long = "date",
            value_name = "YYYY-MM-DD",
            help = "Any day of the week to show (default: today)"
        )]
        date: Option<String>,
    },

    /// Show the profile stored in the configuration
    Profile,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
