//! Validation protocols applied to a directory of fixtures.

use std::fmt;
use std::str::FromStr;

/// The protocol every fixture in a directory is judged by.
///
/// A regime is bound to a directory, never to an individual fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Regime {
    /// The source must compile; if it does, its run output must match the expected-output fixture (when present).
    Positive,
    /// The source must be rejected by the compiler.
    Negative,
}

impl Regime {
    pub fn as_str(self) -> &'static str {
        match self {
            Regime::Positive => "positive",
            Regime::Negative => "negative",
        }
    }

    /// Whether a successful compile is the desired outcome.
    pub fn expects_compile_success(self) -> bool {
        matches!(self, Regime::Positive)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for regime names that are neither positive nor negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRegime(pub String);

impl fmt::Display for UnknownRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown regime '{}' (expected one of: positive, good, negative, bad)",
            self.0
        )
    }
}

impl std::error::Error for UnknownRegime {}

impl FromStr for Regime {
    type Err = UnknownRegime;

    /// Accepts `positive`/`good` and `negative`/`bad`, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" | "good" => Ok(Regime::Positive),
            "negative" | "bad" => Ok(Regime::Negative),
            _ => Err(UnknownRegime(s.to_string())),
        }
    }
}
