//! CLI argument definitions for the question browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pyq",
    version,
    about = "Browse past-year exam questions by year, subject and topic",
    long_about = "Browse past-year exam questions by year, subject and topic.\n\n\
                  Every screen is addressed by a navigation token; pass one to\n\
                  `pyq open` or type `!<token>` inside `pyq shell`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Configuration file (default: ./pyq.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// CSV file or directory of CSV partitions (overrides corpus.path).
    #[arg(long = "corpus", value_name = "PATH", global = true)]
    pub corpus: Option<PathBuf>,

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

    /// Prefix each log line with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the module path in each log line.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Omit span open/close events from log output.
    #[arg(long = "no-log-spans", global = true)]
    pub no_log_spans: bool,

    /// Allow revealed answers to appear in log output.
    #[arg(long = "log-answers", global = true)]
    pub log_answers: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the view behind a navigation token.
    Open(OpenArgs),

    /// Search question text and topics.
    Search(SearchArgs),

    /// List the topic registry.
    Topics,

    /// Show corpus statistics and fingerprint.
    Info,

    /// Start an interactive session.
    Shell,
}

#[derive(Parser)]
pub struct OpenArgs {
    /// Navigation token, e.g. `start_year` or `f_yr_2020_3_0`.
    #[arg(value_name = "TOKEN", default_value = "home")]
    pub token: String,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Keyword to look for (matched case-insensitively).
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,
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
