//! Verdict reporting.
//!
//! ## VerdictReporter Trait
//!
//! The driver hands every judgement to a `VerdictReporter`, keeping output formatting apart from judging. The
//! console reporter prints the classic one-line-per-fixture log:
//!
//! ```text
//! mrjp-tests/good/basic/core001.lat OK
//! mrjp-tests/bad/bad001.lat => OK
//! <full source of the failing fixture>
//! mrjp-tests/good/basic/core002.lat ERROR ===== output mismatch =====
//! ```
//!
//! No aggregate summary is printed; the run summary is only logged.

use std::fs;
use std::io::Write;
use std::time::Duration;

use latcheck_core::{Regime, Verdict};

use crate::config::SuiteEntry;
use crate::errors::{HarnessError, HarnessResult};
use crate::validate::Judgement;

/// Counts for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl RunSummary {
    pub fn record(&mut self, verdict: Verdict) {
        self.total += 1;
        if verdict.is_ok() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

/// Receives the events of a run.
///
/// Implement this trait to customize how verdicts are presented.
pub trait VerdictReporter {
    /// Called before the fixtures of a suite are judged
    fn on_suite_start(&mut self, _suite: &SuiteEntry, _fixture_count: usize) -> HarnessResult<()> {
        Ok(())
    }

    /// Called once per judged fixture, in judging order
    fn on_verdict(&mut self, judgement: &Judgement) -> HarnessResult<()>;

    /// Called when every suite has been judged
    fn on_run_complete(&mut self, _summary: &RunSummary) -> HarnessResult<()> {
        Ok(())
    }
}

/// Plain-text reporter writing to any sink (stdout in the CLI).
pub struct ConsoleReporter<W> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_all(&mut self, bytes: &[u8]) -> HarnessResult<()> {
        self.out
            .write_all(bytes)
            .map_err(|source| HarnessError::Report { source })
    }
}

impl<W: Write> VerdictReporter for ConsoleReporter<W> {
    fn on_verdict(&mut self, judgement: &Judgement) -> HarnessResult<()> {
        let path = judgement.fixture.source().display().to_string();
        let line = match judgement.verdict.failure() {
            None if judgement.regime == Regime::Positive => format!("{path} OK\n"),
            None => format!("{path} => OK\n"),
            Some(failure) => {
                let source = fs::read(judgement.fixture.source())
                    .map_err(|e| HarnessError::io(judgement.fixture.source(), e))?;
                self.write_all(&source)?;
                if !source.is_empty() && !source.ends_with(b"\n") {
                    self.write_all(b"\n")?;
                }
                format!("{path} ERROR {}\n", failure.banner())
            }
        };
        self.write_all(line.as_bytes())?;
        self.out.flush().map_err(|source| HarnessError::Report { source })
    }
}
