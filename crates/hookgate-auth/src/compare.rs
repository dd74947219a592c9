//! Proof comparison.

use std::fmt;

use subtle::ConstantTimeEq;

/// How a supplied proof is compared with the expected one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ComparisonMode {
    /// Compare bytes in constant time.
    #[default]
    ConstantTime,
    /// Plain `==` on the strings.
    Legacy,
}

impl ComparisonMode {
    /// Parse a mode from its configuration name (`constant-time` or `legacy`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "constant-time" | "constant_time" | "constanttime" => Some(Self::ConstantTime),
            "legacy" => Some(Self::Legacy),
            _ => None,
        }
    }

    /// The configuration name of this mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConstantTime => "constant-time",
            Self::Legacy => "legacy",
        }
    }

    /// Whether `provided` equals `expected` under this mode.
    #[must_use]
    pub fn matches(self, provided: &str, expected: &str) -> bool {
        match self {
            Self::ConstantTime => provided.as_bytes().ct_eq(expected.as_bytes()).into(),
            Self::Legacy => provided == expected,
        }
    }
}

impl fmt::Display for ComparisonMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
