//! Run driver: judges every fixture of every configured suite, in order.
//!
//! An `Error` verdict never stops the run. Only fatal harness faults (an unlistable directory, a tool that cannot be
//! started, an unreadable fixture) abort it.

use std::time::Instant;

use crate::config::SuiteEntry;
use crate::errors::HarnessResult;
use crate::locator::{self, FileProbe};
use crate::process::ProcessRunner;
use crate::report::{RunSummary, VerdictReporter};
use crate::toolchain::Toolchain;
use crate::validate::Validator;

pub struct Driver<R, P> {
    toolchain: Toolchain<R>,
    probe: P,
}

impl<R: ProcessRunner, P: FileProbe> Driver<R, P> {
    pub fn new(toolchain: Toolchain<R>, probe: P) -> Self {
        Self { toolchain, probe }
    }

    /// Judge `suites` in listed order, fixtures in locator order.
    pub fn run(&self, suites: &[SuiteEntry], reporter: &mut impl VerdictReporter) -> HarnessResult<RunSummary> {
        let start = Instant::now();
        let validator = Validator::new(&self.toolchain, &self.probe);
        let mut summary = RunSummary::default();

        for suite in suites {
            let span = tracing::info_span!("suite", dir = %suite.dir.display(), regime = %suite.regime);
            let _enter = span.enter();

            let fixtures = locator::locate(&suite.dir)?;
            if fixtures.is_empty() {
                tracing::warn!("suite has no .lat fixtures");
            }
            reporter.on_suite_start(suite, fixtures.len())?;

            for fixture in &fixtures {
                let judgement = validator.judge(fixture, suite.regime)?;
                summary.record(judgement.verdict);
                reporter.on_verdict(&judgement)?;
            }
        }

        summary.duration = start.elapsed();
        tracing::info!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            "run complete in {:.2}s",
            summary.duration.as_secs_f64()
        );
        reporter.on_run_complete(&summary)?;
        Ok(summary)
    }
}
