// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{error, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use ttmlconv::app_config::{self, Config};
use ttmlconv::{Converter, OutputFormat};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for ttmlconv
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ttmlconv - convert broadcaster .ttml closed captions
#[derive(Parser, Debug)]
#[command(name = "ttmlconv")]
#[command(version)]
#[command(about = "Convert (NHK?) .ttml closed caption file to another format.")]
#[command(long_about = "ttmlconv converts NHK-style .ttml closed caption files to .srt or .ass subtitles.

EXAMPLES:
    ttmlconv show.ttml                      # Writes show.ttml.srt
    ttmlconv show.ttml -o show.ass          # Styled, positioned output
    ttmlconv -l debug show.ttml -o show.srt # Verbose logging
    ttmlconv completions bash > ttmlconv.bash

CONFIGURATION:
    An optional JSON config (conf.json by default) may override the scaling
    applied to .ass positions (default 1600x900 source to 640x360 target):
    {\"scaling\": {\"source_width\": 1600, \"source_height\": 900,
                 \"target_width\": 640, \"target_height\": 360}}")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input NHK .ttml source file
    #[arg(value_name = "INFILE")]
    input_path: Option<PathBuf>,

    /// Output filename with extension (.ass or .srt). Defaults to INFILE.srt
    #[arg(short, long, value_name = "OUTFILE")]
    outfile: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger, accepting records up to `level`; the active
    // level is `initial` until the config is loaded
    fn init(level: LevelFilter, initial: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(initial);
        Ok(())
    }

    // @returns: ANSI color and tag for level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<ExitCode> {
    CustomLogger::init(LevelFilter::Trace, LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "ttmlconv", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(input_path) = cli.input_path else {
        let _ = CommandLineOptions::command().print_help();
        return Ok(ExitCode::FAILURE);
    };

    // Refuse unknown output extensions before any other work
    if let Some(outfile) = &cli.outfile {
        if OutputFormat::from_path(outfile).is_err() {
            eprintln!("Sorry, unsupported file extension in output file.");
            return Ok(ExitCode::FAILURE);
        }
    }

    let config = Config::load_or_default(&cli.config_path)?;
    let level = config.effective_log_level(cli.log_level.map(Into::into));
    log::set_max_level(level.to_level_filter());

    let converter = Converter::with_config(config)?;
    if let Err(e) = converter.run(&input_path, cli.outfile.as_deref()) {
        error!("{:#}", e);
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
