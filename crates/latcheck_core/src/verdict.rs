//! Per-fixture judgments.
//!
//! Verdicts are produced once per fixture per run and are only ever printed, never persisted.

use std::fmt;

/// Why a fixture was judged `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    /// Positive regime: the compiler exited non-zero.
    CompileFailed,
    /// Positive regime: the interpreter output differs from the expected-output fixture.
    OutputMismatch,
    /// Negative regime: the compiler accepted a program it should have rejected.
    UnexpectedCompileSuccess,
}

impl Failure {
    /// Short human-readable description, used inside the error banner.
    pub fn describe(self) -> &'static str {
        match self {
            Failure::CompileFailed => "compilation failed",
            Failure::OutputMismatch => "output mismatch",
            Failure::UnexpectedCompileSuccess => "compiled but should have been rejected",
        }
    }

    /// The banner printed after `<path> ERROR`.
    pub fn banner(self) -> String {
        format!("===== {} =====", self.describe())
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// The pass/fail judgment of one fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Ok,
    Error(Failure),
}

impl Verdict {
    pub fn is_ok(self) -> bool {
        matches!(self, Verdict::Ok)
    }

    pub fn failure(self) -> Option<Failure> {
        match self {
            Verdict::Ok => None,
            Verdict::Error(failure) => Some(failure),
        }
    }
}
