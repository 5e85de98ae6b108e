//! Provide the shared, pure fixture vocabulary for the latcheck harness.
//!
//! This crate is intentionally small and dependency-free. It describes *what* a fixture is and *how* a run is judged,
//! without ever touching the file system or spawning a process:
//! - companion suffixes and stem pairing (`paths`),
//! - the validation protocols bound to fixture directories (`regime`),
//! - per-fixture judgments and their failure banners (`verdict`).
//!
//! ## Notes
//!
//! - **No IO**: existence checks, reads and deletions live in the `latcheck` crate behind capabilities, so everything
//!   here is testable with plain values.

pub mod paths;
pub mod regime;
pub mod verdict;

pub use paths::{BITCODE_EXT, FixturePaths, INPUT_EXT, IR_EXT, OUTPUT_EXT, SOURCE_EXT};
pub use regime::{Regime, UnknownRegime};
pub use verdict::{Failure, Verdict};
