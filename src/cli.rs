use std::path::PathBuf;

use clap::{Parser, Subcommand};

use treelens::domain::services::ExportFormat;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Treelens - terminal explorer for schema-annotated hierarchical data
#[derive(Parser, Debug)]
#[command(name = "treelens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of human output
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (skips the project and user config lookup)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Inputs shared by every command
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    /// Envelope or payload file (JSON, or YAML by extension; '-' for stdin)
    pub file: PathBuf,

    /// Schema file overriding the envelope schema
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Label override map (JSON object of key -> label)
    #[arg(long)]
    pub labels: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Explore a document interactively
    View {
        #[command(flatten)]
        source: SourceArgs,

        /// Reload when the file changes
        #[arg(short, long)]
        watch: bool,

        /// Start in table view (tabular payloads only)
        #[arg(long)]
        table: bool,

        /// Initial search text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Render the explorer once to stdout
    Print {
        #[command(flatten)]
        source: SourceArgs,

        /// Search text
        #[arg(short, long)]
        search: Option<String>,

        /// Render as a table (tabular payloads only)
        #[arg(long)]
        table: bool,

        /// Viewport height in terminal rows (sizes the window chunk)
        #[arg(long)]
        height: Option<u16>,

        /// Depth budget (defaults to explorer.max_depth)
        #[arg(long)]
        depth: Option<usize>,

        /// Open every container
        #[arg(long)]
        expand_all: bool,
    },

    /// Write the payload as data.json or data.csv
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Artifact format
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Output file (defaults to data.<format> in export.directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite without asking
        #[arg(short = 'F', long)]
        force: bool,
    },
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::View { .. } => "view",
            Commands::Print { .. } => "print",
            Commands::Export { .. } => "export",
        }
    }

    pub fn source(&self) -> &SourceArgs {
        match self {
            Commands::View { source, .. }
            | Commands::Print { source, .. }
            | Commands::Export { source, .. } => source,
        }
    }
}
