// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use log::{info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use subcue::app_config::{self, Config, OutputFormat};
use subcue::app_controller::{Controller, RunOptions};
use subcue::file_utils::FileManager;

/// CLI Wrapper for OutputFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Summary,
    Srt,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(cli_format: CliOutputFormat) -> Self {
        match cli_format {
            CliOutputFormat::Summary => OutputFormat::Summary,
            CliOutputFormat::Srt => OutputFormat::Srt,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

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
    /// Parse subtitle files (default command)
    Parse(ParseArgs),

    /// Generate shell completions for subcue
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ParseArgs {
    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Encoding label of the input (e.g., 'utf-8', 'windows-1252')
    #[arg(short, long)]
    encoding: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "subcue.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subcue - SubRip subtitle cue parser
///
/// Parses SubRip subtitle files into timed, styled cues.
#[derive(Parser, Debug)]
#[command(name = "subcue")]
#[command(version)]
#[command(about = "SubRip subtitle cue parser")]
#[command(long_about = "subcue parses SubRip (.srt) subtitle files into timed, styled cues.

EXAMPLES:
    subcue movie.srt                          # Print a summary of the cues
    subcue -e windows-1252 movie.srt          # Parse a legacy encoded file
    subcue -f json movie.srt                  # Print the cues as JSON
    subcue -f srt -o clean.srt movie.srt      # Write the parsed cues back as SRT
    subcue --log-level debug /subtitles/      # Parse every .srt file of a directory
    subcue completions bash > subcue.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in subcue.json by default. If the config file
    doesn't exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Encoding label of the input (e.g., 'utf-8', 'windows-1252')
    #[arg(short, long)]
    encoding: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "subcue.json")]
    config_path: String,

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

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything, the effective level is set through max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subcue", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Parse(args)) => run_parse(args),
        None => {
            // Default behavior - use top-level args
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            run_parse(ParseArgs {
                input_path,
                encoding: cli.encoding,
                format: cli.format,
                output: cli.output,
                config_path: cli.config_path,
                log_level: cli.log_level,
            })
        }
    }
}

fn run_parse(options: ParseArgs) -> Result<()> {
    // If log level is set via command line, apply it before loading the config
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(LevelFilter::from(&level));
    }

    let mut config = Config::load_or_create(&options.config_path)?;

    match &options.log_level {
        Some(log_level) => config.log_level = log_level.clone().into(),
        None => log::set_max_level(LevelFilter::from(&config.log_level)),
    }

    let controller = Controller::with_config(config)?;
    let run_options = RunOptions {
        encoding: options.encoding,
        output_format: options.format.map(Into::into),
    };

    let mut buffer = Vec::new();
    let summary = controller.run(&options.input_path, &run_options, &mut buffer)?;

    match &options.output {
        Some(path) => {
            FileManager::write_to_file(path, &String::from_utf8_lossy(&buffer))?;
            info!("Success: {:?}", path);
        }
        None => std::io::stdout().write_all(&buffer)?,
    }

    if summary.failed > 0 {
        return Err(anyhow!("{} of {} subtitle files failed to parse", summary.failed, summary.processed + summary.failed));
    }

    Ok(())
}
