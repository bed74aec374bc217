//! coltype CLI - Detect column types in CSV files and parse them.

use clap::Parser;
use coltype_cli::commands;
use coltype_cli::{Cli, CliError, Command, Config, Formatter};
use coltype_engine::Engine;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Log to stderr; stdout carries the command output
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    tracing::debug!("Using configuration at {}", config_path.display());

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Predict(args) => {
            let engine = Engine::new(config.engine)?;
            commands::execute_predict(args, &engine, &formatter)
        }
        Command::Parse(args) => {
            let engine = Engine::new(config.engine)?;
            commands::execute_parse(args, &engine, &formatter)
        }
        Command::Files(args) => commands::execute_files(args, &config, &formatter),
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, format, &formatter)
        }
    }
}
