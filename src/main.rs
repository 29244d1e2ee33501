//! dormant - find rarely-used, duplicate and oversized files.
//!
//! Usage:
//!   dormant rarely-used [DIR] [DAYS] [MIN_SIZE_KB]   Files not accessed for DAYS
//!   dormant stats [DIR]                              Totals and access-age histogram
//!   dormant duplicates [DIR] [MIN_SIZE_KB]           Same name and size in several places
//!   dormant large [DIR] [MIN_SIZE_MB] [MAX_RESULTS]  Largest files
//!   dormant extensions [DIR] [TOP_N]                 Count and size per extension
//!   dormant cleanup [DIR] [DAYS] [MIN_SIZE_MB]       Old and large files worth reviewing
//!
//! Every command prints a JSON report on stdout.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use dormant_analyze::{
    CleanupParams, DuplicatesParams, ExtensionsParams, LargeParams, RarelyUsedParams,
    ReportParams, ScanConfig, scan_with_config,
};

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "DORMANT_LOG";

#[derive(Parser)]
#[command(
    name = "dormant",
    version,
    about = "Find rarely-used, duplicate and oversized files",
    long_about = "dormant walks a directory tree once per command and prints a JSON report.\n\n\
                  Hidden files and directories (leading '.') are always skipped, and \
                  nothing on disk is ever modified."
)]
struct Cli {
    /// Threads used for reading directories (1 = serial, 0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "1")]
    threads: usize,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find files not accessed for a number of days
    RarelyUsed {
        /// Directory to scan
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Minimum days since last access
        #[arg(default_value = "90")]
        days: u64,

        /// Minimum size in KB (0 or omitted = no minimum)
        min_size_kb: Option<u64>,

        /// Maximum number of files to list
        #[arg(long, default_value = "100")]
        max_results: usize,
    },

    /// Show totals and an access-age histogram
    Stats {
        /// Directory to scan
        #[arg(default_value = ".")]
        directory: PathBuf,
    },

    /// Find files sharing a name and exact size
    Duplicates {
        /// Directory to scan
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Minimum size in KB
        #[arg(default_value = "0")]
        min_size_kb: u64,
    },

    /// Find the largest files
    Large {
        /// Directory to scan
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Minimum size in MB
        #[arg(default_value = "10")]
        min_size_mb: u64,

        /// Maximum number of files to list
        #[arg(default_value = "50")]
        max_results: usize,
    },

    /// Break down file count and size by extension
    Extensions {
        /// Directory to scan
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Number of extensions to list
        #[arg(default_value = "20")]
        top_n: usize,
    },

    /// Suggest old, large files for cleanup
    Cleanup {
        /// Directory to scan
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Minimum days since last access
        #[arg(default_value = "180")]
        days: u64,

        /// Minimum size in MB
        #[arg(default_value = "1")]
        min_size_mb: u64,
    },
}

impl Command {
    /// Split into the directory to scan and the report parameters.
    fn into_request(self) -> (PathBuf, ReportParams) {
        match self {
            Command::RarelyUsed {
                directory,
                days,
                min_size_kb,
                max_results,
            } => (
                directory,
                ReportParams::RarelyUsed(RarelyUsedParams {
                    days_threshold: days,
                    min_size_kb,
                    max_results,
                }),
            ),
            Command::Stats { directory } => (directory, ReportParams::Stats),
            Command::Duplicates {
                directory,
                min_size_kb,
            } => (
                directory,
                ReportParams::Duplicates(DuplicatesParams { min_size_kb }),
            ),
            Command::Large {
                directory,
                min_size_mb,
                max_results,
            } => (
                directory,
                ReportParams::Large(LargeParams {
                    min_size_mb,
                    max_results,
                }),
            ),
            Command::Extensions { directory, top_n } => (
                directory,
                ReportParams::Extensions(ExtensionsParams { top_n }),
            ),
            Command::Cleanup {
                directory,
                days,
                min_size_mb,
            } => (
                directory,
                ReportParams::Cleanup(CleanupParams {
                    days_threshold: days,
                    min_size_mb,
                }),
            ),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Build and print the requested report.
fn run(cli: Cli) -> Result<()> {
    color_eyre::install()?;

    let (directory, params) = cli.command.into_request();
    let config = ScanConfig::builder()
        .root(directory)
        .threads(cli.threads)
        .build()
        .context("Invalid scan configuration")?;

    let report = scan_with_config(&config, &params);
    if let Some(message) = report.error_message() {
        bail!("{message}");
    }

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("Failed to write report")?;

    Ok(())
}

/// Log to stderr so stdout carries only the report.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
