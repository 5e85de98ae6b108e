//! Exact output comparison.
//!
//! The check is byte-for-byte: no trimming, no line-ending normalization. A single missing trailing newline is a
//! mismatch.

use std::fs;
use std::path::Path;

use crate::errors::{HarnessError, HarnessResult};

/// Result of comparing captured output against an expected-output fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputCheck {
    /// The fixture makes no output claim.
    Unchecked,
    Matched,
    Mismatched { expected: Vec<u8>, actual: Vec<u8> },
}

impl OutputCheck {
    pub fn passed(&self) -> bool {
        !matches!(self, OutputCheck::Mismatched { .. })
    }
}

/// Compare `actual` with the contents of `expected`, if an expected-output fixture exists.
///
/// ## Errors
///
/// An expected-output file that exists but cannot be read is fatal.
pub fn verify(actual: &[u8], expected: Option<&Path>) -> HarnessResult<OutputCheck> {
    let Some(path) = expected else {
        return Ok(OutputCheck::Unchecked);
    };

    let wanted = fs::read(path).map_err(|e| HarnessError::io(path, e))?;
    if wanted == actual {
        Ok(OutputCheck::Matched)
    } else {
        tracing::debug!(
            expected_len = wanted.len(),
            actual_len = actual.len(),
            expected = %String::from_utf8_lossy(&wanted),
            actual = %String::from_utf8_lossy(actual),
            "output mismatch"
        );
        Ok(OutputCheck::Mismatched {
            expected: wanted,
            actual: actual.to_vec(),
        })
    }
}
