//! MAC address formatter CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use macfmt_cli::clipboard::clipboard_from_settings;
use macfmt_cli::commands::{NormalizeOptions, read_inputs, run_config, run_formats, run_normalize};
use macfmt_cli::interactive::run_interactive;
use macfmt_cli::logging::{LogConfig, LogFormat, init_logging};
use macfmt_cli::settings::Settings;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let settings = Settings::load(cli.config.as_deref()).context("load settings")?;
    match &cli.command {
        Command::Normalize(args) => {
            let inputs = if args.inputs.is_empty() {
                read_inputs(io::stdin().lock())?
            } else {
                args.inputs.clone()
            };
            let options = NormalizeOptions {
                only: args.only,
                style: args.output.map_or(settings.output.style, Into::into),
            };
            let summary = run_normalize(
                &inputs,
                options,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )?;
            Ok(if summary.has_errors() { 1 } else { 0 })
        }
        Command::Formats => {
            run_formats(&mut io::stdout().lock())?;
            Ok(0)
        }
        Command::Interactive => {
            let mut clipboard = clipboard_from_settings(&settings.clipboard.command);
            run_interactive(
                io::stdin().lock(),
                &mut io::stdout().lock(),
                clipboard.as_mut(),
                settings.clipboard.flash(),
            )?;
            Ok(0)
        }
        Command::Config => {
            let source = cli.config.clone().unwrap_or_else(Settings::config_path);
            run_config(&settings, &source, &mut io::stdout().lock())?;
            Ok(0)
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_input = cli.log_input;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
