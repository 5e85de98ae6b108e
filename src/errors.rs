//! Fatal harness faults.
//!
//! Expected-outcome mismatches (a positive fixture that does not compile, a negative fixture that does, an output
//! mismatch) are *not* errors: they are recorded as [`latcheck_core::Verdict::Error`] and the run continues. The
//! variants here are the conditions the harness cannot recover from and which abort the run.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("cannot list fixture directory '{}'", dir.display())]
    #[diagnostic(
        code(latcheck::read_dir),
        help("check the suite directory path; it is resolved relative to the working directory or the manifest")
    )]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to start '{program}'")]
    #[diagnostic(
        code(latcheck::spawn),
        help("make sure the executable exists and is runnable, or pass --compiler/--interpreter")
    )]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot read '{}'", path.display())]
    #[diagnostic(code(latcheck::io))]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write verdict report")]
    #[diagnostic(code(latcheck::report))]
    Report {
        #[source]
        source: io::Error,
    },

    #[error("invalid suite manifest '{}': {message}", path.display())]
    #[diagnostic(code(latcheck::config))]
    Config { path: PathBuf, message: String },

    #[error("tool command is empty")]
    #[diagnostic(code(latcheck::command), help("give at least the executable, e.g. \"lli\""))]
    EmptyCommand,

    #[error("cannot parse tool command '{command}': {message}")]
    #[diagnostic(code(latcheck::command))]
    CommandSyntax { command: String, message: String },
}

pub type HarnessResult<T> = Result<T, HarnessError>;

impl HarnessError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        HarnessError::Io {
            path: path.into(),
            source,
        }
    }
}
