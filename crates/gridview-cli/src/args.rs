use crate::types::{DensityArg, ExportFormat, OutputFormat, ViewModeArg};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gridview")]
#[command(about = "Browse, filter, and export record list files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Data directory (default: ~/.gridview)")]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a record list with search, filters, sorting, and pagination
    List {
        /// JSON file holding an array of records
        file: PathBuf,

        #[arg(long)]
        entity: String,

        #[arg(long)]
        search: Option<String>,

        #[arg(long = "filter", value_name = "FIELD=VALUE")]
        filters: Vec<String>,

        #[arg(long)]
        sort: Option<String>,

        #[arg(long, help = "Sort descending (with --sort)")]
        desc: bool,

        #[arg(long, help = "Override the persisted view mode for this run")]
        view: Option<ViewModeArg>,

        #[arg(long, default_value = "0")]
        page: usize,

        #[arg(long)]
        page_size: Option<usize>,

        #[arg(long, help = "Viewport width in logical px (default: detected)")]
        width: Option<u32>,
    },

    /// Show the derived filter options for one field
    Options {
        file: PathBuf,

        #[arg(long)]
        entity: String,

        #[arg(long)]
        field: String,
    },

    /// Write the filtered, sorted record set to CSV or JSON
    Export {
        file: PathBuf,

        #[arg(long)]
        entity: String,

        #[arg(long, default_value = "csv")]
        output: ExportFormat,

        #[arg(long, help = "Write to this file instead of stdout")]
        out: Option<PathBuf>,

        #[arg(long)]
        search: Option<String>,

        #[arg(long = "filter", value_name = "FIELD=VALUE")]
        filters: Vec<String>,

        #[arg(long)]
        sort: Option<String>,

        #[arg(long)]
        desc: bool,
    },

    /// Inspect or change persisted display preferences
    Prefs {
        #[command(subcommand)]
        command: PrefsCommand,
    },

    /// List the built-in entity configurations
    Entities,
}

#[derive(Subcommand)]
pub enum PrefsCommand {
    Show {
        #[arg(long)]
        entity: String,
    },

    SetView {
        #[arg(long)]
        entity: String,

        mode: ViewModeArg,
    },

    SetDensity {
        #[arg(long)]
        entity: String,

        density: DensityArg,
    },

    /// Restore the documented defaults (table, compact)
    Reset {
        #[arg(long)]
        entity: String,
    },
}
