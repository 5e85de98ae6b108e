//! CLI module for latcheck
//!
//! ## Usage
//!
//! - `latcheck` - judge the built-in suite (`./mrjp-tests/good/basic` with `./latc_llvm` and `lli`)
//! - `latcheck --config suites.toml` - judge the suites listed in a manifest
//! - `latcheck --good DIR --bad DIR` - judge ad-hoc directories (positive suites first, then negative)
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.
//!
//! The exit status is 0 whatever the verdicts unless `--fail-on-error` is given (1 on any `Error`). Fatal harness
//! faults exit with 2.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;

use crate::errors::HarnessError;
use crate::version::LATCHECK_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    /// At least one fixture was judged `Error` and `--fail-on-error` was given.
    pub const FAILURE: ExitCode = ExitCode(1);
    /// The harness itself could not complete the run.
    pub const FATAL: ExitCode = ExitCode(2);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl From<HarnessError> for CliError {
    /// Render a fatal harness fault with its diagnostic code, cause chain and help.
    fn from(err: HarnessError) -> Self {
        let report = miette::Report::new(err);
        Self::new(format!("{report:?}"), ExitCode::FATAL)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Differential fixture harness for the Latte compiler
#[derive(Parser, Debug)]
#[command(name = "latcheck")]
#[command(version = LATCHECK_VERSION)]
#[command(
    about = "Compile Latte fixtures, run them with the bitcode interpreter and compare against expected output",
    long_about = None
)]
pub struct Cli {
    /// Suite manifest (TOML) listing compiler, interpreter and fixture directories
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Compiler command, invoked as `<CMD> <source.lat>`
    #[arg(long, value_name = "CMD")]
    pub compiler: Option<String>,

    /// Interpreter command, invoked as `<CMD> <artifact.bc>`
    #[arg(long, value_name = "CMD")]
    pub interpreter: Option<String>,

    /// Directory of fixtures that must compile and match their expected output (repeatable)
    #[arg(long = "good", value_name = "DIR")]
    pub good: Vec<PathBuf>,

    /// Directory of fixtures the compiler must reject (repeatable)
    #[arg(long = "bad", value_name = "DIR")]
    pub bad: Vec<PathBuf>,

    /// Exit with status 1 when any fixture is judged ERROR
    #[arg(long)]
    pub fail_on_error: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let config = commands::resolve_config(&cli)?;
    commands::check_suites(&config)
}

// ============================================================================
// Tests
// ============================================================================
