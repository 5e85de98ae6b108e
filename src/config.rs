//! Harness configuration: which tools to run and which fixture directories to judge.
//!
//! The suite list is always supplied by the caller. [`HarnessConfig::default`] reproduces the hand-curated list the
//! harness historically shipped with; a TOML suite manifest or CLI flags replace it.
//!
//! ## Manifest format
//!
//! ```toml
//! compiler = "./latc_llvm"
//! interpreter = "lli"
//! fail_on_error = false
//!
//! [[suite]]
//! dir = "mrjp-tests/good/basic"
//! regime = "positive"
//!
//! [[suite]]
//! dir = "mrjp-tests/bad"
//! regime = "negative"
//! ```
//!
//! Relative suite directories are resolved against the manifest's directory. Tool commands are used verbatim.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use latcheck_core::Regime;
use serde::Deserialize;

use crate::errors::{HarnessError, HarnessResult};

/// Compiler used when neither the manifest nor the CLI names one.
pub const DEFAULT_COMPILER: &str = "./latc_llvm";
/// Bitcode interpreter used when neither the manifest nor the CLI names one.
pub const DEFAULT_INTERPRETER: &str = "lli";
/// The single positive suite of the built-in configuration.
pub const DEFAULT_SUITE_DIR: &str = "./mrjp-tests/good/basic";

// ============================================================================
// Tool commands
// ============================================================================

/// An external executable plus the leading arguments passed before the fixture path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a leading argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Parse a shell-like command line such as `"lli -O0"` or `"sh 'my compiler.sh'"`.
    pub fn parse(command: &str) -> HarnessResult<Self> {
        let words = shell_words::split(command).map_err(|e| HarnessError::CommandSyntax {
            command: command.to_string(),
            message: e.to_string(),
        })?;

        let mut words = words.into_iter();
        let program = words.next().ok_or(HarnessError::EmptyCommand)?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = std::iter::once(&self.program).chain(self.args.iter());
        f.write_str(&shell_words::join(words))
    }
}

// ============================================================================
// Suites
// ============================================================================

/// One fixture directory and the regime all of its fixtures are judged by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteEntry {
    pub dir: PathBuf,
    pub regime: Regime,
}

impl SuiteEntry {
    pub fn new(dir: impl Into<PathBuf>, regime: Regime) -> Self {
        Self {
            dir: dir.into(),
            regime,
        }
    }

    pub fn positive(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, Regime::Positive)
    }

    pub fn negative(dir: impl Into<PathBuf>) -> Self {
        Self::new(dir, Regime::Negative)
    }
}

// ============================================================================
// Harness configuration
// ============================================================================

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub compiler: ToolCommand,
    pub interpreter: ToolCommand,
    /// Judged in listed order.
    pub suites: Vec<SuiteEntry>,
    /// Exit non-zero when any fixture is judged `Error`.
    pub fail_on_error: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            compiler: ToolCommand::new(DEFAULT_COMPILER),
            interpreter: ToolCommand::new(DEFAULT_INTERPRETER),
            suites: vec![SuiteEntry::positive(DEFAULT_SUITE_DIR)],
            fail_on_error: false,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    compiler: Option<String>,
    interpreter: Option<String>,
    #[serde(default)]
    fail_on_error: bool,
    #[serde(default, rename = "suite")]
    suites: Vec<ManifestSuite>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ManifestSuite {
    dir: PathBuf,
    regime: String,
}

impl HarnessConfig {
    /// Load a suite manifest from disk.
    pub fn load(path: &Path) -> HarnessResult<Self> {
        let text = fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
        let base_dir = path.parent().unwrap_or(Path::new(""));
        Self::from_toml_str(&text, base_dir, path)
    }

    /// Parse a suite manifest.
    ///
    /// ## Parameters
    /// - `base_dir`: directory relative suite paths are resolved against.
    /// - `origin`: manifest path, used only in error messages.
    pub fn from_toml_str(text: &str, base_dir: &Path, origin: &Path) -> HarnessResult<Self> {
        let config_error = |message: String| HarnessError::Config {
            path: origin.to_path_buf(),
            message,
        };

        let manifest: Manifest = toml::from_str(text).map_err(|e| config_error(e.to_string()))?;
        if manifest.suites.is_empty() {
            return Err(config_error("no [[suite]] entries declared".to_string()));
        }

        let mut suites = Vec::with_capacity(manifest.suites.len());
        for suite in manifest.suites {
            let regime: Regime = suite.regime.parse().map_err(|e| config_error(format!("{e}")))?;
            let dir = if suite.dir.is_relative() {
                base_dir.join(&suite.dir)
            } else {
                suite.dir
            };
            suites.push(SuiteEntry { dir, regime });
        }

        let compiler = match manifest.compiler {
            Some(cmd) => ToolCommand::parse(&cmd)?,
            None => ToolCommand::new(DEFAULT_COMPILER),
        };
        let interpreter = match manifest.interpreter {
            Some(cmd) => ToolCommand::parse(&cmd)?,
            None => ToolCommand::new(DEFAULT_INTERPRETER),
        };

        Ok(Self {
            compiler,
            interpreter,
            suites,
            fail_on_error: manifest.fail_on_error,
        })
    }

    /// Set the compiler command
    pub fn with_compiler(mut self, compiler: ToolCommand) -> Self {
        self.compiler = compiler;
        self
    }

    /// Set the interpreter command
    pub fn with_interpreter(mut self, interpreter: ToolCommand) -> Self {
        self.interpreter = interpreter;
        self
    }

    /// Replace the suite list
    pub fn with_suites(mut self, suites: Vec<SuiteEntry>) -> Self {
        self.suites = suites;
        self
    }

    pub fn with_fail_on_error(mut self, fail_on_error: bool) -> Self {
        self.fail_on_error = fail_on_error;
        self
    }
}
