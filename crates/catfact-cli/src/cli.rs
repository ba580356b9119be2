//! CLI argument definitions for catfact.

use std::path::PathBuf;

use catfact_cli::logging::LogFormat;
use catfact_model::{Aggregation, DEFAULT_FALLBACK, DEFAULT_LUMP_N, LevelOrder};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "catfact",
    version,
    about = "Categorical factor tools - inspect, reorder, collapse and lump CSV columns",
    long_about = "Treat a CSV column as a categorical factor and print its levels.\n\n\
                  Levels can be ordered by appearance, frequency or value, reordered by a\n\
                  statistic of another column, collapsed or renamed through a TOML group\n\
                  file, or lumped down to the most common few."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the levels of a column.
    Levels(LevelsArgs),

    /// Order levels by a statistic of another column.
    Reorder(ReorderArgs),

    /// Collapse levels into the groups of a mapping file.
    Collapse(CollapseArgs),

    /// Rename levels through the groups of a mapping file.
    Recode(RecodeArgs),

    /// Keep the most common levels and lump the rest together.
    Lump(LumpArgs),
}

/// Arguments shared by every command.
#[derive(Args)]
pub struct InputArgs {
    /// CSV file with a header row.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Column to treat as a factor.
    #[arg(long = "column", short = 'c', value_name = "NAME")]
    pub column: String,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct LevelsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Level ordering policy.
    #[arg(long = "order", value_enum, default_value = "appearance")]
    pub order: LevelOrderArg,
}

#[derive(Parser)]
pub struct ReorderArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Numeric column summarised per level.
    #[arg(long = "by", value_name = "COLUMN")]
    pub by: String,

    /// Statistic computed for each level.
    #[arg(long = "agg", value_enum, default_value = "median")]
    pub aggregation: AggregationArg,

    /// Largest statistic first.
    #[arg(long = "desc")]
    pub descending: bool,
}

#[derive(Parser)]
pub struct CollapseArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// TOML mapping file with `[[groups]]` tables.
    #[arg(long = "groups", value_name = "FILE")]
    pub groups: PathBuf,

    /// Level for values outside every group (overrides the file's `fallback`).
    #[arg(long = "fallback", value_name = "NAME")]
    pub fallback: Option<String>,
}

#[derive(Parser)]
pub struct RecodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// TOML mapping file with `[[groups]]` tables.
    #[arg(long = "groups", value_name = "FILE")]
    pub groups: PathBuf,
}

#[derive(Parser)]
pub struct LumpArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Number of levels to keep.
    #[arg(short = 'n', value_name = "N", default_value_t = DEFAULT_LUMP_N)]
    pub n: usize,

    /// Level that receives the lumped values.
    #[arg(long = "fallback", value_name = "NAME", default_value = DEFAULT_FALLBACK)]
    pub fallback: String,

    /// Numeric column whose sums rank the levels instead of row counts.
    #[arg(long = "weights", value_name = "COLUMN")]
    pub weights: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LevelOrderArg {
    Appearance,
    Frequency,
    Lexical,
}

impl From<LevelOrderArg> for LevelOrder {
    fn from(value: LevelOrderArg) -> Self {
        match value {
            LevelOrderArg::Appearance => LevelOrder::Appearance,
            LevelOrderArg::Frequency => LevelOrder::Frequency,
            LevelOrderArg::Lexical => LevelOrder::Lexical,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AggregationArg {
    Median,
    Mean,
    Min,
    Max,
    Sum,
    Count,
    First,
    Last,
}

impl From<AggregationArg> for Aggregation {
    fn from(value: AggregationArg) -> Self {
        match value {
            AggregationArg::Median => Aggregation::Median,
            AggregationArg::Mean => Aggregation::Mean,
            AggregationArg::Min => Aggregation::Min,
            AggregationArg::Max => Aggregation::Max,
            AggregationArg::Sum => Aggregation::Sum,
            AggregationArg::Count => Aggregation::Count,
            AggregationArg::First => Aggregation::First,
            AggregationArg::Last => Aggregation::Last,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogLevelArg> for LevelFilter {
    fn from(value: LogLevelArg) -> Self {
        match value {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_flags_map_onto_log_config_types() {
        let cli = Cli::try_parse_from([
            "catfact",
            "--log-level",
            "debug",
            "--log-format",
            "json",
            "levels",
            "data.csv",
            "-c",
            "x",
        ])
        .unwrap();
        assert_eq!(cli.log_level.map(LevelFilter::from), Some(LevelFilter::DEBUG));
        assert_eq!(LogFormat::from(cli.log_format), LogFormat::Json);
    }

    #[test]
    fn lump_defaults() {
        let cli = Cli::try_parse_from(["catfact", "lump", "data.csv", "--column", "x"]).unwrap();
        let Command::Lump(args) = cli.command else {
            panic!("expected lump");
        };
        assert_eq!(args.n, DEFAULT_LUMP_N);
        assert_eq!(args.fallback, DEFAULT_FALLBACK);
        assert!(args.weights.is_none());
    }

    #[test]
    fn reorder_parses_aggregation() {
        let cli = Cli::try_parse_from([
            "catfact", "reorder", "data.csv", "-c", "x", "--by", "y", "--agg", "max", "--desc",
        ])
        .unwrap();
        let Command::Reorder(args) = cli.command else {
            panic!("expected reorder");
        };
        assert_eq!(Aggregation::from(args.aggregation), Aggregation::Max);
        assert!(args.descending);
        assert_eq!(args.by, "y");
    }
}
