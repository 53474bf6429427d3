//! BJCP style explorer CLI.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use bjcp_cli::logging::{LogConfig, LogFormat, init_logging};
use bjcp_ingest::DatasetSource;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_chart, run_page, run_search, run_styles, run_tags};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let source = cli
        .source
        .as_deref()
        .map(DatasetSource::from)
        .unwrap_or_default();
    let log_config = log_config_from_cli(&cli, &source);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Tags => run_tags(source),
        Command::Styles(args) => run_styles(source, args),
        Command::Search(args) => run_search(source, args),
        Command::Chart(args) => run_chart(source, args).map(drop),
        Command::Page(args) => run_page(source, args).map(drop),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
///
/// A local source raises the default level to `info`.
fn log_config_from_cli(cli: &Cli, source: &DatasetSource) -> LogConfig {
    let explicit = cli.verbosity.is_present() || cli.log_level.is_some();
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !explicit,
        ..LogConfig::default()
    };
    if !explicit && source.is_debug() {
        config.level_filter = LevelFilter::INFO;
    }
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
