//! Fixture discovery.
//!
//! Lists one directory (non-recursively), keeps the `.lat` sources and pairs each with its companions. Whether the
//! optional `.input`/`.output` companions exist is not decided here; downstream code asks through a [`FileProbe`].

use std::fs;
use std::path::{Path, PathBuf};

use latcheck_core::FixturePaths;

use crate::errors::{HarnessError, HarnessResult};

/// File-existence capability.
pub trait FileProbe {
    fn exists(&self, path: &Path) -> bool;
}

/// Asks the real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<P: FileProbe + ?Sized> FileProbe for &P {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

/// A discovered test case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fixture {
    pub paths: FixturePaths,
}

impl Fixture {
    pub fn new(paths: FixturePaths) -> Self {
        Self { paths }
    }

    pub fn source(&self) -> &Path {
        &self.paths.source
    }

    /// The input fixture, if one exists beside the source.
    pub fn input_if_present(&self, probe: &impl FileProbe) -> Option<PathBuf> {
        probe.exists(&self.paths.input).then(|| self.paths.input.clone())
    }

    /// The expected-output fixture, if one exists beside the source.
    pub fn expected_if_present(&self, probe: &impl FileProbe) -> Option<PathBuf> {
        probe
            .exists(&self.paths.expected_output)
            .then(|| self.paths.expected_output.clone())
    }
}

/// Find every `.lat` fixture directly inside `dir`, sorted by path.
///
/// ## Errors
///
/// A directory that cannot be listed (including one that does not exist) is fatal.
#[tracing::instrument(skip_all, fields(dir = %dir.display()))]
pub fn locate(dir: &Path) -> HarnessResult<Vec<Fixture>> {
    let read_dir_error = |source| HarnessError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    };

    let mut fixtures = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let path = entry.map_err(read_dir_error)?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(paths) = FixturePaths::from_source(&path) {
            fixtures.push(Fixture::new(paths));
        }
    }

    fixtures.sort();
    tracing::debug!(count = fixtures.len(), "located fixtures");
    Ok(fixtures)
}
