//! catfact CLI.

use clap::{ColorChoice, Parser};
use catfact_cli::logging::{LogConfig, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command};
use crate::commands::{run_collapse, run_levels, run_lump, run_recode, run_reorder};
use crate::summary::print_report;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let (result, format) = match &cli.command {
        Command::Levels(args) => (run_levels(args), args.input.format),
        Command::Reorder(args) => (run_reorder(args), args.input.format),
        Command::Collapse(args) => (run_collapse(args), args.input.format),
        Command::Recode(args) => (run_recode(args), args.input.format),
        Command::Lump(args) => (run_lump(args), args.input.format),
    };
    let exit_code = match result.and_then(|report| print_report(&report, format)) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Logging options from global flags; an explicit level or `-v`/`-q` turns
/// off `RUST_LOG`.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let explicit = cli.log_level.is_some() || cli.verbosity.is_present();
    let level_filter = cli
        .log_level
        .map_or_else(|| cli.verbosity.tracing_level_filter(), LevelFilter::from);
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig {
        use_env_filter: !explicit,
        with_ansi,
        ..LogConfig::default()
    }
    .with_level_filter(level_filter)
    .with_format(cli.log_format.into())
    .with_log_file(cli.log_file.clone())
}
