//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::io;

use crate::config::{HarnessConfig, SuiteEntry, ToolCommand};
use crate::driver::Driver;
use crate::locator::FsProbe;
use crate::process::SystemRunner;
use crate::report::ConsoleReporter;
use crate::toolchain::Toolchain;

use super::{Cli, CliError, CliResult, ExitCode};

/// Build the run configuration: built-in defaults, then the manifest, then CLI overrides.
///
/// `--good`/`--bad` replace the suite list entirely; positive suites come first, then negative ones, each in the
/// order given.
pub fn resolve_config(cli: &Cli) -> CliResult<HarnessConfig> {
    let mut config = match &cli.config {
        Some(path) => HarnessConfig::load(path)?,
        None => HarnessConfig::default(),
    };

    if let Some(compiler) = &cli.compiler {
        config = config.with_compiler(ToolCommand::parse(compiler)?);
    }
    if let Some(interpreter) = &cli.interpreter {
        config = config.with_interpreter(ToolCommand::parse(interpreter)?);
    }

    if !cli.good.is_empty() || !cli.bad.is_empty() {
        let suites = cli
            .good
            .iter()
            .map(SuiteEntry::positive)
            .chain(cli.bad.iter().map(SuiteEntry::negative))
            .collect();
        config = config.with_suites(suites);
    }

    if cli.fail_on_error {
        config = config.with_fail_on_error(true);
    }

    tracing::debug!(?config, "resolved harness configuration");
    Ok(config)
}

/// Judge every configured suite with the real toolchain and print verdicts to stdout.
pub fn check_suites(config: &HarnessConfig) -> CliResult<ExitCode> {
    let toolchain = Toolchain::new(config.compiler.clone(), config.interpreter.clone(), SystemRunner);
    let driver = Driver::new(toolchain, FsProbe);

    let mut reporter = ConsoleReporter::new(io::stdout().lock());
    let summary = driver.run(&config.suites, &mut reporter)?;

    if config.fail_on_error && summary.has_failures() {
        return Err(CliError::failure(format!(
            "{} of {} fixture(s) judged ERROR",
            summary.failed, summary.total
        )));
    }
    Ok(ExitCode::SUCCESS)
}
