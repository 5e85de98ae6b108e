#![forbid(unsafe_code)]
//! latcheck: differential fixture harness for the Latte compiler
//!
//! Given directories of `.lat` fixtures, latcheck runs the compiler on each source, runs the resulting bitcode with
//! the interpreter (feeding a sibling `.input` file when present), and compares the captured output with a sibling
//! `.output` file byte for byte. Directories are judged under one of two regimes: fixtures that must compile (and
//! match), and fixtures the compiler must reject. Compiler byproducts (`.ll`, `.bc`) are removed after every fixture.
//!
//! ## Pipeline
//!
//! `driver` → `locator` → `validate` → {`toolchain`, `verifier`} → `janitor`, with `report` receiving verdicts.
//! Fixture vocabulary (suffixes, regimes, verdicts) lives in the IO-free `latcheck_core` crate.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod config;
pub mod driver;
pub mod errors;
pub mod janitor;
pub mod locator;
pub mod process;
pub mod report;
pub mod toolchain;
pub mod validate;
pub mod verifier;
pub mod version;

pub use config::{HarnessConfig, SuiteEntry, ToolCommand};
pub use driver::Driver;
pub use errors::{HarnessError, HarnessResult};
pub use latcheck_core::{Failure, FixturePaths, Regime, Verdict};
pub use locator::{FileProbe, Fixture, FsProbe};
pub use process::{ProcessRunner, SystemRunner};
pub use report::{ConsoleReporter, RunSummary, VerdictReporter};
pub use toolchain::Toolchain;
