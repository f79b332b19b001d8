//! CLI argument definitions for the MAC address formatter.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use macfmt_cli::settings::OutputStyle;
use macfmt_model::MacFormat;

#[derive(Parser)]
#[command(
    name = "macfmt",
    version,
    about = "Re-render MAC addresses in every common notation",
    long_about = "Re-render MAC addresses in every common notation.\n\n\
                  Accepts any separator convention (or none), strips everything that is not\n\
                  a hex digit, and prints colon, hyphen, Windows, dot, and plain forms."
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

    /// Allow raw input text to appear in logs.
    #[arg(long = "log-input", global = true)]
    pub log_input: bool,

    /// Settings file (default: platform config directory).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize addresses given as arguments, or one per stdin line.
    Normalize(NormalizeArgs),

    /// List all supported formats.
    Formats,

    /// Interactive prompt: each line replaces the current input.
    Interactive,

    /// Show the effective settings and where they are read from.
    Config,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Addresses in any notation. Reads stdin when omitted.
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Print only this format's value.
    #[arg(long = "only", value_name = "FORMAT", value_parser = parse_format)]
    pub only: Option<MacFormat>,

    /// Output style (default from settings).
    #[arg(long = "output", value_enum)]
    pub output: Option<OutputStyleArg>,
}

fn parse_format(value: &str) -> Result<MacFormat, String> {
    value.parse().map_err(|error| format!("{error}"))
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputStyleArg {
    Table,
    Plain,
    Json,
}

impl From<OutputStyleArg> for OutputStyle {
    fn from(value: OutputStyleArg) -> Self {
        match value {
            OutputStyleArg::Table => OutputStyle::Table,
            OutputStyleArg::Plain => OutputStyle::Plain,
            OutputStyleArg::Json => OutputStyle::Json,
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
