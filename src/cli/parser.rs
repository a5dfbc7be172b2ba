use crate::export::ExportFormat;
use crate::models::event_type::EventType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCalendar
#[derive(Parser)]
#[command(
    name = "rcalendar",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal calendar: month grid, day timeline with side-by-side overlaps, quick rescheduling",
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

    /// Add an event to a day
    Add {
        /// Day of the event (YYYY-MM-DD)
        date: String,

        #[arg(long, short, default_value = "", help = "Event name")]
        name: String,

        #[arg(long = "start", help = "Start time (HH:MM), default from config")]
        start: Option<String>,

        #[arg(long = "end", help = "End time (HH:MM), default from config")]
        end: Option<String>,

        #[arg(long = "desc", help = "Optional description")]
        description: Option<String>,

        #[arg(long = "type", value_enum, help = "Event type, default from config")]
        kind: Option<EventType>,
    },

    /// Change fields of an existing event
    Edit {
        /// Event id
        id: String,

        #[arg(long, short)]
        name: Option<String>,

        #[arg(long = "start", help = "New start (YYYY-MM-DD HH:MM)")]
        start: Option<String>,

        #[arg(long = "end", help = "New end (YYYY-MM-DD HH:MM)")]
        end: Option<String>,

        #[arg(long = "desc", help = "New description (empty string clears it)")]
        description: Option<String>,

        #[arg(long = "type", value_enum)]
        kind: Option<EventType>,
    },

    /// Delete an event by id
    Del {
        /// Event id
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Move an event to another day, keeping or replacing its clock times
    Move {
        /// Event id
        id: String,

        /// Target day (YYYY-MM-DD)
        target: String,

        #[arg(long = "start", help = "Confirmed start time (HH:MM), default: unchanged")]
        start: Option<String>,

        #[arg(long = "end", help = "Confirmed end time (HH:MM), default: unchanged")]
        end: Option<String>,

        #[arg(long = "column", help = "Timeline column the event was dropped on")]
        column: Option<usize>,
    },

    /// List events
    List {
        #[arg(long, short, help = "Only events starting on this day (YYYY-MM-DD)")]
        day: Option<String>,

        #[arg(long, short, help = "Only events whose name or description contains this text")]
        search: Option<String>,
    },

    /// Show every field of an event
    Show {
        /// Event id
        id: String,
    },

    /// Day timeline with overlap-aware layout
    Day {
        /// Day to show (YYYY-MM-DD), default today
        date: Option<String>,

        #[arg(long, short, help = "Only lay out events matching this keyword")]
        filter: Option<String>,
    },

    /// Month grid
    Month {
        /// Month to show (YYYY-MM), default current month
        month: Option<String>,
    },

    /// Export all events
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
