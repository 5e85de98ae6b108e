//! Regime validators.
//!
//! ## Positive regime
//!
//! 1. Compile with diagnostics shown. A non-zero exit is `Error(CompileFailed)`; nothing is executed.
//! 2. Run the artifact (fed from the `.input` fixture when present) and compare its stdout with the `.output`
//!    fixture when present. A mismatch is `Error(OutputMismatch)`, otherwise `Ok`.
//!
//! ## Negative regime
//!
//! Compile with diagnostics discarded. A non-zero exit is the desired outcome (`Ok`); acceptance is
//! `Error(UnexpectedCompileSuccess)`. The interpreter is never run.
//!
//! In both regimes the byproducts are cleaned after judging, including when judging aborted with a fatal error.
//! The interpreter's exit status never decides a verdict on its own.

use latcheck_core::{Failure, Regime, Verdict};

use crate::errors::HarnessResult;
use crate::janitor;
use crate::locator::{FileProbe, Fixture};
use crate::process::ProcessRunner;
use crate::toolchain::{Execution, Toolchain};
use crate::verifier;

/// The judged state of one fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Judgement {
    pub fixture: Fixture,
    pub regime: Regime,
    pub verdict: Verdict,
    /// Present only when the interpreter ran.
    pub execution: Option<Execution>,
}

/// Judges fixtures against one toolchain.
pub struct Validator<'a, R, P> {
    toolchain: &'a Toolchain<R>,
    probe: &'a P,
}

impl<'a, R: ProcessRunner, P: FileProbe> Validator<'a, R, P> {
    pub fn new(toolchain: &'a Toolchain<R>, probe: &'a P) -> Self {
        Self { toolchain, probe }
    }

    /// Judge one fixture under `regime` and clean its byproducts.
    #[tracing::instrument(skip_all, fields(source = %fixture.source().display(), regime = %regime))]
    pub fn judge(&self, fixture: &Fixture, regime: Regime) -> HarnessResult<Judgement> {
        let judged = self.run_protocol(fixture, regime);
        let cleaned = janitor::clean(&fixture.paths);
        tracing::debug!(
            removed = cleaned.removed.len(),
            failed = cleaned.failed.len(),
            "cleaned byproducts"
        );

        let (verdict, execution) = judged?;
        tracing::debug!(ok = verdict.is_ok(), "judged");
        Ok(Judgement {
            fixture: fixture.clone(),
            regime,
            verdict,
            execution,
        })
    }

    fn run_protocol(&self, fixture: &Fixture, regime: Regime) -> HarnessResult<(Verdict, Option<Execution>)> {
        let must_compile = regime.expects_compile_success();
        let compiled = self.toolchain.compile(fixture.source(), must_compile)?;
        match (must_compile, compiled) {
            (true, true) => self.run_and_verify(fixture),
            (true, false) => Ok((Verdict::Error(Failure::CompileFailed), None)),
            (false, true) => Ok((Verdict::Error(Failure::UnexpectedCompileSuccess), None)),
            (false, false) => Ok((Verdict::Ok, None)),
        }
    }

    fn run_and_verify(&self, fixture: &Fixture) -> HarnessResult<(Verdict, Option<Execution>)> {
        let execution = self
            .toolchain
            .execute(&fixture.paths.artifact, fixture.input_if_present(self.probe))?;
        let expected = fixture.expected_if_present(self.probe);

        let verdict = if verifier::verify(&execution.stdout, expected.as_deref())?.passed() {
            Verdict::Ok
        } else {
            Verdict::Error(Failure::OutputMismatch)
        };
        Ok((verdict, Some(execution)))
    }
}
