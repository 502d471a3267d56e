use clap::{Parser, Subcommand};

/// Command-line interface definition for sitterpay
/// CLI application to keep a babysitter roster and work out what a visit costs
#[derive(Parser)]
#[command(
    name = "sitterpay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Babysitter roster and pay calculator: sum hours across time blocks plus gas/tip",
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

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check, migrate or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

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

    /// Add a caregiver to the roster
    Add {
        /// First name
        first_name: String,

        /// Last name
        last_name: String,

        /// Hourly rate (e.g. 15 or 17.50)
        #[arg(long = "rate", help = "Hourly rate")]
        rate: String,

        /// Mobile number (optional)
        #[arg(long = "mobile", default_value = "")]
        mobile: String,
    },

    /// Edit a caregiver; omitted or blank fields keep their value
    Edit {
        /// Caregiver id (see `list`)
        id: String,

        #[arg(long = "first")]
        first_name: Option<String>,

        #[arg(long = "last")]
        last_name: Option<String>,

        #[arg(long = "mobile")]
        mobile: Option<String>,

        #[arg(long = "rate")]
        rate: Option<String>,
    },

    /// Delete a caregiver (asks for confirmation)
    Del {
        /// Caregiver id (see `list`)
        id: String,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// List the roster
    List,

    /// Call a caregiver through the system dialer
    Call {
        /// Caregiver id (see `list`)
        id: String,

        #[arg(long = "print", help = "Only print the tel: link")]
        print_only: bool,
    },

    /// Calculate the pay for one visit
    Calc {
        /// Time block as START,STOP[,RATE] (e.g. "6:00 pm,10:30 pm,15")
        #[arg(long = "row", value_name = "START,STOP[,RATE]")]
        rows: Vec<String>,

        /// Seed the rate of rows without one from this caregiver
        #[arg(long = "sitter", value_name = "ID")]
        sitter: Option<String>,

        /// Flat gas/tip amount added once to the total
        #[arg(
            long = "gas-tip",
            value_name = "AMOUNT",
            default_value = "",
            allow_negative_numbers = true
        )]
        gas_tip: String,
    },
}
