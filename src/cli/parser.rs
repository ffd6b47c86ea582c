use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for eventscout
/// CLI application to discover and manage local events with SQLite
#[derive(Parser)]
#[command(
    name = "eventscout",
    version = env!("CARGO_PKG_VERSION"),
    about = "A local event-discovery CLI: browse popular and upcoming events, add your own, all backed by SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ListTarget {
    Events,
    Cities,
    Locations,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration, database and demonstration data
    Init,

    /// Show popular, today and tomorrow events at a glance
    Browse,

    /// List stored rows
    List {
        /// What to list
        #[arg(value_enum)]
        target: ListTarget,

        /// Filter events by calendar day (YYYY-MM-DD)
        #[arg(long, value_name = "DAY")]
        date: Option<String>,

        /// Print rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show full details of one event
    Show {
        /// Event id
        id: i64,
    },

    /// Add a city, location or event
    Add {
        #[command(subcommand)]
        entity: AddEntity,
    },

    /// Set the interested-people counter of an event
    Interest {
        /// Event id
        id: i64,

        /// New counter value
        count: i64,
    },

    /// Delete an event (and its stored thumbnail)
    Del {
        /// Event id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Drop all data and reload the demonstration dataset
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Manage the database (integrity checks, maintenance)
    Db {
        #[arg(long = "check", help = "Check database and foreign-key integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration and referenced paths")]
        check: bool,
    },
}

#[derive(Subcommand)]
pub enum AddEntity {
    /// Add a new event at an existing location
    Event {
        /// Event name
        #[arg(long)]
        name: String,

        /// Event date (YYYY-MM-DD or "YYYY-MM-DD HH:MM")
        #[arg(long)]
        date: String,

        /// Location id the event takes place at
        #[arg(long = "location", value_name = "ID")]
        location_id: i64,

        /// Image file copied into the local images directory
        #[arg(long, value_name = "PATH")]
        image: Option<String>,

        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },

    /// Add a new city
    City {
        /// City name
        name: String,
    },

    /// Add a new location inside an existing city
    Location {
        /// Location name
        #[arg(long)]
        name: String,

        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,

        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,

        /// City id the location belongs to
        #[arg(long = "city", value_name = "ID")]
        city_id: i64,
    },
}
