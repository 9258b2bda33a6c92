use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimegrid
/// Calendar matrix of time logged by teams, people, projects and tasks
#[derive(Parser)]
#[command(
    name = "rtimegrid",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calendar matrix of time spent by teams, people, projects and tasks",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Override dataset path (JSON or YAML)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Show the days of a period grouped by month
    Calendar {
        /// Period: YYYY, YYYY-MM, YYYY-MM-DD or a start:end range of those
        #[arg(long, short)]
        period: Option<String>,

        /// Print every day as JSON instead of the month summary
        #[arg(long)]
        json: bool,
    },

    /// Render the time matrix
    Report {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2024")
        /// - YYYY-MM              → entire month (e.g. "2024-06")
        /// - YYYY-MM-DD           → specific day (e.g. "2024-06-18")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range  (e.g. "2024-06:2024-08")
        /// - YYYY-MM-DD:YYYY-MM-DD→ day range    (e.g. "2024-06-01:2024-06-10")
        ///
        /// If omitted, the current month is shown.
        #[arg(long, short)]
        period: Option<String>,

        /// Expand the rows of this person id (shows its projects)
        #[arg(long)]
        expand: Option<String>,

        /// Expand this project under the expanded person (shows its tasks)
        #[arg(long, requires = "expand")]
        project: Option<String>,

        /// Show the tooltip of a person cell: PERSON_ID@YYYY-MM-DD
        #[arg(long, value_name = "PERSON@DATE")]
        hover: Option<String>,

        /// Plain output without ANSI colors
        #[arg(long = "no-color")]
        no_color: bool,
    },

    /// Export the aggregated matrix
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Period to export (same formats as `report --period`)
        #[arg(long, short)]
        period: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate a deterministic demo dataset
    Generate {
        /// Output file (.json, .yaml or .yml)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Period covered by the records (defaults to the current year)
        #[arg(long, short)]
        period: Option<String>,

        /// Random seed
        #[arg(long, default_value_t = crate::source::generator::DEFAULT_SEED)]
        seed: u64,

        /// People per team
        #[arg(long, default_value_t = 8)]
        people: usize,

        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
