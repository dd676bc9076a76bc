//! The resolved `(min, max)` range of an axis.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{
    error::ConfigError,
    value::{Value, ValueKind},
};

/// Inclusive value range an axis must cover.
///
/// Every `Domain` holds two finite values of one kind with `min <= max`;
/// the constructors refuse anything else. Equal bounds are allowed.
///
/// Serialized as a two-element array, matching the `[min, max]` shape charts
/// are usually configured with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(Value, Value)", into = "(Value, Value)")]
pub struct Domain {
    min: Value,
    max: Value,
}

impl Domain {
    /// Checked constructor.
    ///
    /// ```
    /// use chart_domain::Domain;
    ///
    /// let d = Domain::new(0, 10).unwrap();
    /// assert_eq!(d.as_numeric(), Some((0.0, 10.0)));
    /// assert!(Domain::new(10, 0).is_err());
    /// ```
    pub fn new(min: impl Into<Value>, max: impl Into<Value>) -> Result<Self, ConfigError> {
        let (min, max) = (min.into(), max.into());
        if min.kind() != max.kind() {
            return Err(ConfigError::MixedBounds {
                low: min.kind(),
                high: max.kind(),
            });
        }
        for v in [min, max] {
            if !v.is_finite() {
                return Err(ConfigError::NonFinite(v));
            }
        }
        if min > max {
            return Err(ConfigError::InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn numeric(min: f64, max: f64) -> Result<Self, ConfigError> {
        Self::new(min, max)
    }

    #[inline]
    pub fn chronological(min: DateTime<Utc>, max: DateTime<Utc>) -> Result<Self, ConfigError> {
        Self::new(min, max)
    }

    /// Caller guarantees same kind, finite, and `min <= max`.
    #[inline]
    pub(crate) fn from_ordered(min: Value, max: Value) -> Self {
        debug_assert!(min.kind() == max.kind() && min <= max);
        Self { min, max }
    }

    #[inline]
    #[must_use]
    pub fn min(&self) -> Value {
        self.min
    }

    #[inline]
    #[must_use]
    pub fn max(&self) -> Value {
        self.max
    }

    #[inline]
    #[must_use]
    pub fn bounds(&self) -> (Value, Value) {
        (self.min, self.max)
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        self.min.kind()
    }

    /// `false` for values of the other kind.
    #[must_use]
    pub fn contains(&self, v: impl Into<Value>) -> bool {
        let v = v.into();
        self.min <= v && v <= self.max
    }

    #[must_use]
    pub fn as_numeric(&self) -> Option<(f64, f64)> {
        Some((self.min.as_number()?, self.max.as_number()?))
    }

    #[must_use]
    pub fn as_chronological(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.min.as_date()?, self.max.as_date()?))
    }

    /// Stretch the range so it contains zero. A minimum already below zero
    /// (or a maximum above it) is left alone.
    pub fn including_zero(self) -> Result<Self, ConfigError> {
        match self.as_numeric() {
            Some((lo, hi)) => Ok(Self::from_ordered(
                Value::Number(lo.min(0.0)),
                Value::Number(hi.max(0.0)),
            )),
            None => Err(ConfigError::ZeroOnChronological),
        }
    }
}

impl TryFrom<(Value, Value)> for Domain {
    type Error = ConfigError;

    fn try_from((min, max): (Value, Value)) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<Domain> for (Value, Value) {
    fn from(d: Domain) -> Self {
        d.bounds()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} .. {}", self.min, self.max)
    }
}
