//! The compiler under test and the interpreter for its artifacts.

use std::path::{Path, PathBuf};

use crate::config::ToolCommand;
use crate::errors::HarnessResult;
use crate::process::{Invocation, ProcessRunner, StderrMode, StdoutMode};

/// Output of one interpreter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub stdout: Vec<u8>,
    /// Interpreter exit status. Recorded for diagnostics only; it never decides a verdict.
    pub success: bool,
    pub code: Option<i32>,
}

/// Compiler + interpreter pair, sharing one process runner.
#[derive(Debug, Clone)]
pub struct Toolchain<R> {
    compiler: ToolCommand,
    interpreter: ToolCommand,
    runner: R,
}

impl<R: ProcessRunner> Toolchain<R> {
    pub fn new(compiler: ToolCommand, interpreter: ToolCommand, runner: R) -> Self {
        Self {
            compiler,
            interpreter,
            runner,
        }
    }

    /// Compile one source; `true` iff the compiler exits with status zero.
    ///
    /// A rejected program is a normal outcome, not an error. Only failing to start the compiler is.
    ///
    /// With `show_diagnostics` both of the compiler's output streams pass through; otherwise both are dropped.
    pub fn compile(&self, source: &Path, show_diagnostics: bool) -> HarnessResult<bool> {
        let (stdout, stderr) = if show_diagnostics {
            (StdoutMode::Inherit, StderrMode::Inherit)
        } else {
            (StdoutMode::Discard, StderrMode::Discard)
        };
        let invocation = Invocation::new(&self.compiler, source)
            .with_stdout(stdout)
            .with_stderr(stderr);
        let outcome = self.runner.run(&invocation)?;
        tracing::debug!(source = %source.display(), code = ?outcome.code, "compiler finished");
        Ok(outcome.success)
    }

    /// Run a compiled artifact, optionally feeding `input` as its standard input, and capture what it prints.
    pub fn execute(&self, artifact: &Path, input: Option<PathBuf>) -> HarnessResult<Execution> {
        let invocation = Invocation::new(&self.interpreter, artifact).with_stdin(input);
        let outcome = self.runner.run(&invocation)?;
        if !outcome.success {
            tracing::warn!(
                artifact = %artifact.display(),
                code = ?outcome.code,
                "interpreter exited unsuccessfully; judging by output only"
            );
        }
        Ok(Execution {
            stdout: outcome.stdout,
            success: outcome.success,
            code: outcome.code,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::errors::HarnessError;
    use crate::process::ProcessOutcome;

    /// Replays canned outcomes and records invocations.
    #[derive(Default)]
    struct Replay {
        outcomes: RefCell<Vec<HarnessResult<ProcessOutcome>>>,
        seen: RefCell<Vec<Invocation>>,
    }

    impl Replay {
        fn with(outcome: HarnessResult<ProcessOutcome>) -> Self {
            let replay = Self::default();
            replay.outcomes.borrow_mut().push(outcome);
            replay
        }
    }

    impl ProcessRunner for Replay {
        fn run(&self, invocation: &Invocation) -> HarnessResult<ProcessOutcome> {
            self.seen.borrow_mut().push(invocation.clone());
            self.outcomes.borrow_mut().remove(0)
        }
    }

    fn toolchain(replay: &Replay) -> Toolchain<&Replay> {
        Toolchain::new(ToolCommand::new("latc"), ToolCommand::new("lli"), replay)
    }

    fn exited(code: i32, stdout: &[u8]) -> HarnessResult<ProcessOutcome> {
        Ok(ProcessOutcome {
            success: code == 0,
            code: Some(code),
            stdout: stdout.to_vec(),
        })
    }

    #[test]
    fn compile_reports_exit_status_without_erroring() {
        let replay = Replay::with(exited(1, b""));
        assert!(!toolchain(&replay).compile(Path::new("bad.lat"), true).unwrap());

        let replay = Replay::with(exited(0, b""));
        assert!(toolchain(&replay).compile(Path::new("good.lat"), true).unwrap());
    }

    #[test]
    fn compile_passes_source_as_sole_argument() {
        let replay = Replay::with(exited(0, b""));
        toolchain(&replay).compile(Path::new("dir/add.lat"), false).unwrap();

        let seen = replay.seen.borrow();
        assert_eq!(seen[0].command.program, "latc");
        assert_eq!(seen[0].arg, PathBuf::from("dir/add.lat"));
        assert_eq!(seen[0].stdin, None);
        assert_eq!(seen[0].stdout, StdoutMode::Discard);
        assert_eq!(seen[0].stderr, StderrMode::Discard);
    }

    #[test]
    fn shown_diagnostics_pass_both_compiler_streams_through() {
        let replay = Replay::with(exited(1, b""));
        toolchain(&replay).compile(Path::new("typo.lat"), true).unwrap();

        let seen = replay.seen.borrow();
        assert_eq!(seen[0].stdout, StdoutMode::Inherit);
        assert_eq!(seen[0].stderr, StderrMode::Inherit);
    }

    #[test]
    fn compile_spawn_fault_propagates() {
        let replay = Replay::with(Err(HarnessError::Spawn {
            program: "latc".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }));
        assert!(toolchain(&replay).compile(Path::new("x.lat"), true).is_err());
    }

    #[test]
    fn execute_captures_output_even_on_failure() {
        let replay = Replay::with(exited(7, b"partial\n"));
        let run = toolchain(&replay)
            .execute(Path::new("echo.bc"), Some(PathBuf::from("echo.input")))
            .unwrap();

        assert_eq!(run.stdout, b"partial\n");
        assert!(!run.success);
        assert_eq!(run.code, Some(7));

        let seen = replay.seen.borrow();
        assert_eq!(seen[0].command.program, "lli");
        assert_eq!(seen[0].arg, PathBuf::from("echo.bc"));
        assert_eq!(seen[0].stdin, Some(PathBuf::from("echo.input")));
        assert_eq!(seen[0].stdout, StdoutMode::Capture);
        assert_eq!(seen[0].stderr, StderrMode::Inherit);
    }
}
