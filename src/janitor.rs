//! Removal of compiler byproducts.
//!
//! After a fixture is judged its `.ll` and `.bc` files are deleted so the directory holds fixtures only, whatever the
//! verdict. Source, input and expected-output files are never touched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use latcheck_core::FixturePaths;

/// What a cleanup pass did.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: Vec<PathBuf>,
    /// Byproducts that exist but could not be removed. Logged, never fatal.
    pub failed: Vec<PathBuf>,
}

/// Delete the intermediate representation and the compiled artifact of one fixture.
pub fn clean(paths: &FixturePaths) -> CleanReport {
    let mut report = CleanReport::default();
    for path in paths.byproducts() {
        match remove(path) {
            Ok(true) => report.removed.push(path.to_path_buf()),
            Ok(false) => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not remove compiler byproduct");
                report.failed.push(path.to_path_buf());
            }
        }
    }
    report
}

/// `Ok(false)` when there was nothing to remove.
fn remove(path: &Path) -> io::Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fixture_in(dir: &Path) -> FixturePaths {
        FixturePaths::from_source(dir.join("core001.lat")).unwrap()
    }

    #[test]
    fn removes_both_byproducts() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixture_in(dir.path());
        fs::write(&paths.intermediate, "; ModuleID").unwrap();
        fs::write(&paths.artifact, [0x42, 0x43]).unwrap();

        let report = clean(&paths);
        assert_eq!(report.removed, vec![paths.intermediate.clone(), paths.artifact.clone()]);
        assert!(report.failed.is_empty());
        assert!(!paths.intermediate.exists());
        assert!(!paths.artifact.exists());
    }

    #[test]
    fn absent_byproducts_are_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let report = clean(&fixture_in(dir.path()));
        assert_eq!(report, CleanReport::default());
    }

    #[test]
    fn fixtures_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixture_in(dir.path());
        for fixture in [&paths.source, &paths.input, &paths.expected_output] {
            fs::write(fixture, "keep").unwrap();
        }
        fs::write(&paths.artifact, "bc").unwrap();

        let report = clean(&paths);
        assert_eq!(report.removed, vec![paths.artifact.clone()]);
        assert!(paths.source.exists());
        assert!(paths.input.exists());
        assert!(paths.expected_output.exists());
    }

    #[test]
    fn unremovable_byproduct_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let paths = fixture_in(dir.path());
        // A non-empty directory where the artifact should be cannot be removed with remove_file.
        fs::create_dir(&paths.artifact).unwrap();
        fs::write(paths.artifact.join("inner"), "x").unwrap();

        let report = clean(&paths);
        assert!(report.removed.is_empty());
        assert_eq!(report.failed, vec![paths.artifact.clone()]);
    }
}
