use crate::render::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for eldview
/// CLI tool to inspect ELD duty-status logs and certify daily records
#[derive(Parser)]
#[command(
    name = "eldview",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect ELD duty-status logs: 24-hour grids, HOS compliance grading, daily log certification",
    long_about = None
)]
pub struct Cli {
    /// Override the backend log document path (useful for tests)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List the daily logs of the loaded document
    List {
        #[arg(long, help = "Show only the log for this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "details", help = "Show the individual duty entries")]
        details: bool,
    },

    /// Render the 24-hour duty grid for one day
    Grid {
        /// Date of the daily log (YYYY-MM-DD)
        date: String,

        #[arg(
            long = "points",
            help = "Render from the backend's pre-binned grid points instead of the duty entries"
        )]
        points: bool,
    },

    /// Duty-hour totals and day percentages for one day
    Summary {
        /// Date of the daily log (YYYY-MM-DD)
        date: String,
    },

    /// Show the HOS compliance report
    Compliance,

    /// Certify a daily log
    Certify {
        /// Date of the daily log (YYYY-MM-DD)
        date: String,

        #[arg(
            long = "acknowledge",
            help = "Acknowledge that the record is true and accurate (required to certify)"
        )]
        acknowledge: bool,

        #[arg(long = "signature", help = "Driver signature to record")]
        signature: Option<String>,

        #[arg(long = "notes", help = "Optional certification notes")]
        notes: Option<String>,
    },

    /// Export duty entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long, help = "Export only the entries of this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
