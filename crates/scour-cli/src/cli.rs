//! Command-line argument parsing with clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Scour CLI - natural-language log search.
#[derive(Parser, Debug, Clone)]
#[command(name = "scour")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Search engine URL to execute queries against.
    #[arg(short, long, env = "SCOUR_ENGINE", default_value = "http://127.0.0.1:9200")]
    pub engine: String,

    /// JSON collection registry file. Uses the built-in stock registry
    /// (apache, hdfs, thunderbird) when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub collections: Option<PathBuf>,

    /// Keep stopwords in extracted keywords.
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Human-readable output.
    #[default]
    Table,
    /// JSON output for scripting.
    Json,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert raw log lines into bulk-index NDJSON records.
    Convert(ConvertArgs),

    /// Translate a free-text query and print the compiled search request.
    Translate(QueryArgs),

    /// Translate a free-text query and execute it against the engine.
    Search(QueryArgs),

    /// Interactive query loop.
    Repl,
}

/// Supported log-line formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Apache error log.
    Apache,
    /// HDFS datanode log.
    Hdfs,
    /// Thunderbird syslog dump.
    Thunderbird,
}

/// Arguments for the convert command.
#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Log format of the input file.
    #[arg(value_enum)]
    pub log_format: LogFormat,

    /// Input log file.
    pub input: PathBuf,

    /// Output NDJSON file. Records go to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// A free-text query argument.
#[derive(Parser, Debug, Clone)]
pub struct QueryArgs {
    /// The free-text query, e.g. "failed logins from apache last 24 hours".
    pub query: String,
}
