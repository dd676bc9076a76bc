//! Axis identifiers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Which axis we're resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    /// Independent axis, conventionally `x`.
    X,
    /// Dependent axis, conventionally `y`.
    Y,
}

impl AxisId {
    /// Both axes, independent first.
    pub const ALL: [AxisId; 2] = [AxisId::X, AxisId::Y];

    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an axis name is neither `x`/`independent` nor `y`/`dependent`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown axis `{0}` (expected `x` or `y`)")]
pub struct ParseAxisError(pub String);

impl FromStr for AxisId {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "independent" => Ok(Self::X),
            "y" | "dependent" => Ok(Self::Y),
            _ => Err(ParseAxisError(s.to_owned())),
        }
    }
}
