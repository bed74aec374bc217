//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use coltype_domain::Label;
use std::path::PathBuf;

/// coltype - Detect what a table column holds and parse it.
#[derive(Debug, Parser)]
#[command(name = "coltype")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (label or path only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Classify one column of a CSV file
    Predict(PredictArgs),

    /// Parse the phone or company column of a CSV file
    Parse(ParseArgs),

    /// List CSV files in the data directory
    Files(FilesArgs),

    /// Show or initialize the configuration
    Config(ConfigArgs),
}

/// Arguments for the predict command.
#[derive(Debug, Parser)]
pub struct PredictArgs {
    /// Input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Column header or zero-based index
    #[arg(short, long)]
    pub column: String,
}

/// Arguments for the parse command.
#[derive(Debug, Parser)]
pub struct ParseArgs {
    /// Input CSV file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Column header or zero-based index
    #[arg(short, long)]
    pub column: Option<String>,

    /// Label the column must have
    #[arg(short, long, value_enum)]
    pub label: Option<LabelArg>,

    /// Output CSV file
    #[arg(short, long, default_value = "output.csv")]
    pub output: PathBuf,
}

/// Arguments for the files command.
#[derive(Debug, Parser)]
pub struct FilesArgs {
    /// Directory to list (defaults to the configured data directory)
    #[arg(short, long, env = "COLTYPE_DATA_DIR")]
    pub dir: Option<PathBuf>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Parseable label argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LabelArg {
    /// Phone numbers
    Phone,
    /// Company names
    Company,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<LabelArg> for Label {
    fn from(label: LabelArg) -> Self {
        match label {
            LabelArg::Phone => Label::PhoneNumber,
            LabelArg::Company => Label::CompanyName,
        }
    }
}
