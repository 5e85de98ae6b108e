//! External process boundary.
//!
//! Every tool invocation goes through the [`ProcessRunner`] capability so the validators can be exercised against a
//! scripted fake. A runner reports *how* a process ended; it never treats a non-zero exit as a fault. Callers decide
//! whether non-zero is the expected outcome.

use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::config::ToolCommand;
use crate::errors::{HarnessError, HarnessResult};

/// What to do with a child's standard output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdoutMode {
    /// Collect into [`ProcessOutcome::stdout`].
    Capture,
    /// Pass through to the harness's own stdout.
    Inherit,
    Discard,
}

/// What to do with a child's diagnostic stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StderrMode {
    /// Pass through to the harness's own stderr so a human can read it.
    Inherit,
    /// Drop it.
    Discard,
}

/// A single tool run: `<command> <arg>`, optionally fed from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: ToolCommand,
    /// The fixture-specific positional argument (source or artifact path).
    pub arg: PathBuf,
    /// File streamed as standard input; the child gets an empty stdin when absent.
    pub stdin: Option<PathBuf>,
    pub stdout: StdoutMode,
    pub stderr: StderrMode,
}

impl Invocation {
    pub fn new(command: &ToolCommand, arg: impl Into<PathBuf>) -> Self {
        Self {
            command: command.clone(),
            arg: arg.into(),
            stdin: None,
            stdout: StdoutMode::Capture,
            stderr: StderrMode::Inherit,
        }
    }

    pub fn with_stdin(mut self, stdin: Option<PathBuf>) -> Self {
        self.stdin = stdin;
        self
    }

    pub fn with_stdout(mut self, stdout: StdoutMode) -> Self {
        self.stdout = stdout;
        self
    }

    pub fn with_stderr(mut self, stderr: StderrMode) -> Self {
        self.stderr = stderr;
        self
    }
}

/// How a finished process ended.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutcome {
    /// Exit status was zero.
    pub success: bool,
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    /// Captured standard output; empty unless the invocation asked for [`StdoutMode::Capture`].
    pub stdout: Vec<u8>,
}

/// Runs external tools to completion.
///
/// ## Errors
///
/// Implementations return `Err` only when the process cannot be started or its input cannot be opened.
pub trait ProcessRunner {
    fn run(&self, invocation: &Invocation) -> HarnessResult<ProcessOutcome>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation) -> HarnessResult<ProcessOutcome> {
        (**self).run(invocation)
    }
}

/// Runs tools with `std::process::Command`, blocking until they exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> HarnessResult<ProcessOutcome> {
        let stdin = match &invocation.stdin {
            Some(path) => Stdio::from(File::open(path).map_err(|e| HarnessError::io(path, e))?),
            None => Stdio::null(),
        };
        let stdout = match invocation.stdout {
            StdoutMode::Capture => Stdio::piped(),
            StdoutMode::Inherit => Stdio::inherit(),
            StdoutMode::Discard => Stdio::null(),
        };
        let stderr = match invocation.stderr {
            StderrMode::Inherit => Stdio::inherit(),
            StderrMode::Discard => Stdio::null(),
        };

        tracing::debug!(
            command = %invocation.command,
            arg = %invocation.arg.display(),
            stdin = ?invocation.stdin,
            "spawning tool"
        );

        let output = Command::new(&invocation.command.program)
            .args(&invocation.command.args)
            .arg(&invocation.arg)
            .stdin(stdin)
            .stdout(stdout)
            .stderr(stderr)
            .output()
            .map_err(|e| HarnessError::Spawn {
                program: invocation.command.program.clone(),
                source: e,
            })?;

        Ok(ProcessOutcome {
            success: output.status.success(),
            code: output.status.code(),
            stdout: output.stdout,
        })
    }
}

#[cfg(all(test, unix))]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use super::*;

    fn sh(script: &str) -> ToolCommand {
        ToolCommand::new("sh").arg("-c").arg(script).arg("sh")
    }

    #[test]
    fn captures_stdout_and_exit_code() {
        let outcome = SystemRunner
            .run(&Invocation::new(&sh("printf 'got %s' \"$1\"; exit 3"), "arg.bc"))
            .unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.code, Some(3));
        assert_eq!(outcome.stdout, b"got arg.bc");
    }

    #[test]
    fn streams_stdin_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("echo.input");
        fs::write(&input, "hello\n").unwrap();

        let invocation = Invocation::new(&sh("cat"), "ignored").with_stdin(Some(input));
        let outcome = SystemRunner.run(&invocation).unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.stdout, b"hello\n");
    }

    #[test]
    fn missing_stdin_means_empty_input() {
        let outcome = SystemRunner.run(&Invocation::new(&sh("cat"), "ignored")).unwrap();
        assert!(outcome.success);
        assert!(outcome.stdout.is_empty());
    }

    #[test]
    fn discarded_stderr_is_not_captured_into_stdout() {
        let invocation = Invocation::new(&sh("echo oops >&2; exit 1"), "x.lat").with_stderr(StderrMode::Discard);
        let outcome = SystemRunner.run(&invocation).unwrap();
        assert!(!outcome.success);
        assert!(outcome.stdout.is_empty());
    }

    #[test]
    fn missing_executable_is_a_spawn_fault() {
        let err = SystemRunner
            .run(&Invocation::new(&ToolCommand::new("./definitely-not-a-latte-compiler"), "x.lat"))
            .unwrap_err();
        assert!(matches!(err, HarnessError::Spawn { .. }));
    }

    #[test]
    fn unreadable_stdin_is_an_io_fault() {
        let invocation = Invocation::new(&sh("cat"), "x.bc").with_stdin(Some(PathBuf::from("/nonexistent/x.input")));
        let err = SystemRunner.run(&invocation).unwrap_err();
        assert!(matches!(err, HarnessError::Io { .. }));
    }

    #[test]
    fn uncaptured_stdout_is_not_collected() {
        let invocation = Invocation::new(&sh("echo compiler says hi"), "x.lat").with_stdout(StdoutMode::Discard);
        let outcome = SystemRunner.run(&invocation).unwrap();
        assert!(outcome.success);
        assert!(outcome.stdout.is_empty());
    }
}
