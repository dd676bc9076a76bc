//! Centralised error types used across the crate.

use thiserror::Error;

use crate::core::{
    axis::AxisId,
    data::CsvError,
    value::{Value, ValueKind},
};

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("zero inclusion is only defined for numeric domains")]
    ZeroOnChronological,
    #[error("domain bounds mix {low} and {high} values")]
    MixedBounds { low: ValueKind, high: ValueKind },
    #[error("data point {index} is {found} but earlier points are {expected}")]
    MixedData {
        index: usize,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("domain minimum {min} is greater than maximum {max}")]
    InvertedRange { min: Value, max: Value },
    #[error("domain bound {0} is not finite")]
    NonFinite(Value),
}

/// Everything [`resolve`](crate::resolve) can report back to its caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// The configuration for `axis` is internally inconsistent.
    #[error("invalid {axis} domain: {source}")]
    Configuration {
        axis: AxisId,
        #[source]
        source: ConfigError,
    },
    /// Nothing to derive a domain from; the caller picks the fallback.
    #[error("no domain, min/max pair, or usable data for the {axis} axis")]
    Unresolvable { axis: AxisId },
}

impl DomainError {
    #[inline]
    #[must_use]
    pub fn axis(&self) -> AxisId {
        match self {
            Self::Configuration { axis, .. } | Self::Unresolvable { axis } => *axis,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_unresolvable(&self) -> bool {
        matches!(self, Self::Unresolvable { .. })
    }
}

/// Attach the axis being resolved to a bare [`ConfigError`].
pub(crate) trait OnAxis<T> {
    fn on_axis(self, axis: AxisId) -> Result<T, DomainError>;
}

impl<T> OnAxis<T> for Result<T, ConfigError> {
    fn on_axis(self, axis: AxisId) -> Result<T, DomainError> {
        self.map_err(|source| DomainError::Configuration { axis, source })
    }
}

/// Top-level error type bubbled up by the loaders and the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Csv(#[from] CsvError),
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
}
