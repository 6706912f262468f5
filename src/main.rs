//! Treelens CLI - terminal explorer for schema-annotated hierarchical data
//!
//! Usage: treelens <COMMAND>
//!
//! Commands:
//!   view    Explore a document interactively
//!   print   Render the explorer once to stdout
//!   export  Write the payload as data.json or data.csv

mod cli;
mod commands;
mod logging;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::export::{cmd_export, ExportOptions};
use commands::print::{cmd_print, PrintOptions};
use commands::view::cmd_view;
use treelens::config::load_layered;
use treelens::Config;

fn load_config(cli: &Cli) -> Result<Config> {
    let (config, warnings, path) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings, Some(path.clone()))
        }
        None => {
            let cwd = std::env::current_dir()?;
            load_layered(Some(&cwd))?
        }
    };

    if let Some(path) = path.filter(|_| !cli.json) {
        let terminal = ui::context::Terminal::detect();
        ui::output::print_config_warnings(&path, &warnings, terminal.color, terminal.unicode);
    }
    Ok(config)
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;

    let interactive = matches!(cli.command, Commands::View { .. });
    logging::init(
        logging::level_for(cli.verbose, config.output.verbosity),
        interactive,
    );
    log::debug!(
        "{} {}",
        cli.command.name(),
        cli.command.source().file.display()
    );

    match &cli.command {
        Commands::View {
            source,
            watch,
            table,
            search,
        } => cmd_view(
            source,
            *watch,
            *table,
            search.as_deref(),
            &config,
            cli.verbose,
            cli.color,
        ),
        Commands::Print {
            source,
            search,
            table,
            height,
            depth,
            expand_all,
        } => cmd_print(
            source,
            &PrintOptions {
                search: search.clone(),
                table: *table,
                height: *height,
                depth: *depth,
                expand_all: *expand_all,
            },
            &config,
            cli.json,
            cli.verbose,
            cli.color,
        ),
        Commands::Export {
            source,
            format,
            output,
            force,
        } => cmd_export(
            source,
            &ExportOptions {
                format: *format,
                output: output.clone(),
                force: *force,
            },
            &config,
            cli.json,
            cli.verbose,
            cli.color,
        ),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        ui::error::print_error(&err, cli.command.name(), cli.json);
        std::process::exit(1);
    }
}
