//! Stem-based pairing of a source fixture with its companion files.
//!
//! A fixture is identified by its stem (the source path without suffix). Every companion path is derived by suffix
//! substitution only; whether the optional companions exist is decided later by whoever holds a file-system handle.

use std::path::{Path, PathBuf};

/// Suffix of Latte source fixtures.
pub const SOURCE_EXT: &str = "lat";
/// Suffix of the optional standard-input fixture.
pub const INPUT_EXT: &str = "input";
/// Suffix of the optional expected-output fixture.
pub const OUTPUT_EXT: &str = "output";
/// Suffix of the textual LLVM IR the compiler writes beside the source.
pub const IR_EXT: &str = "ll";
/// Suffix of the compiled bitcode artifact the compiler writes beside the source.
pub const BITCODE_EXT: &str = "bc";

/// The complete set of paths belonging to one fixture.
///
/// ## Invariants
///
/// - All five paths share the stem of `source`.
/// - `source`, `input` and `expected_output` are fixtures and are never mutated by the harness; `intermediate` and
///   `artifact` are compiler byproducts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixturePaths {
    pub source: PathBuf,
    pub input: PathBuf,
    pub expected_output: PathBuf,
    pub intermediate: PathBuf,
    pub artifact: PathBuf,
}

impl FixturePaths {
    /// Derive the companion paths of a `.lat` source.
    ///
    /// ## Returns
    /// - `Some(paths)` when `source` carries the `.lat` suffix.
    /// - `None` otherwise (including suffix-less dotfiles such as `.lat`).
    pub fn from_source(source: impl AsRef<Path>) -> Option<Self> {
        let source = source.as_ref();
        if source.extension().and_then(|e| e.to_str()) != Some(SOURCE_EXT) {
            return None;
        }

        Some(Self {
            source: source.to_path_buf(),
            input: source.with_extension(INPUT_EXT),
            expected_output: source.with_extension(OUTPUT_EXT),
            intermediate: source.with_extension(IR_EXT),
            artifact: source.with_extension(BITCODE_EXT),
        })
    }

    /// Compiler byproducts, in the order they are removed after judging.
    pub fn byproducts(&self) -> [&Path; 2] {
        [self.intermediate.as_path(), self.artifact.as_path()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_all_companions_from_stem() {
        let paths = FixturePaths::from_source("tests/good/core001.lat").unwrap();
        assert_eq!(paths.input, PathBuf::from("tests/good/core001.input"));
        assert_eq!(paths.expected_output, PathBuf::from("tests/good/core001.output"));
        assert_eq!(paths.intermediate, PathBuf::from("tests/good/core001.ll"));
        assert_eq!(paths.artifact, PathBuf::from("tests/good/core001.bc"));
    }

    #[test]
    fn only_last_suffix_is_substituted() {
        let paths = FixturePaths::from_source("dir/arrays.v2.lat").unwrap();
        assert_eq!(paths.artifact, PathBuf::from("dir/arrays.v2.bc"));
    }

    #[test]
    fn rejects_other_suffixes() {
        assert!(FixturePaths::from_source("core001.output").is_none());
        assert!(FixturePaths::from_source("core001.lat.bak").is_none());
        assert!(FixturePaths::from_source("core001").is_none());
    }

    #[test]
    fn rejects_bare_dotfile() {
        assert!(FixturePaths::from_source("dir/.lat").is_none());
    }

    #[test]
    fn byproducts_are_ir_then_bitcode() {
        let paths = FixturePaths::from_source("x.lat").unwrap();
        let [first, second] = paths.byproducts();
        assert_eq!(first, Path::new("x.ll"));
        assert_eq!(second, Path::new("x.bc"));
    }
}
