//! Axis values: plain numbers or points in time.

use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize, Serializer};

/// The two kinds of value an axis can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Numeric,
    Chronological,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric => f.write_str("numeric"),
            Self::Chronological => f.write_str("chronological"),
        }
    }
}

/// A single coordinate on an axis.
///
/// Dates are held in UTC so two instants compare by the moment they denote,
/// whatever offset they were written with.
///
/// Serialized untagged: numbers as JSON numbers, dates as RFC 3339 strings.
/// Strings deserialize through [`Value::from_str`], so `"2022-01-10"` is a date.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "RawValue")]
pub enum Value {
    Number(f64),
    Date(DateTime<Utc>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl TryFrom<RawValue> for Value {
    type Error = ParseValueError;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        match raw {
            RawValue::Number(n) => Ok(Self::Number(n)),
            RawValue::Text(s) => s.parse(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_f64(*n),
            Self::Date(d) => d.serialize(serializer),
        }
    }
}

impl Value {
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Number(_) => ValueKind::Numeric,
            Self::Date(_) => ValueKind::Chronological,
        }
    }

    /// Dates are always usable; numbers only when finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Number(n) => n.is_finite(),
            Self::Date(_) => true,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Date(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Number(_) => None,
        }
    }

    /// The smaller of two same-kind values; `self` wins ties.
    #[must_use]
    pub(crate) fn lesser(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// The larger of two same-kind values; `self` wins ties.
    #[must_use]
    pub(crate) fn greater(self, other: Self) -> Self {
        if other > self { other } else { self }
    }
}

/// Values of different kinds are unordered.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Date(d) => f.write_str(&d.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}
impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}
impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}
impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}
impl From<i64> for Value {
    #[allow(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}
impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(d: DateTime<Tz>) -> Self {
        Self::Date(d.with_timezone(&Utc))
    }
}
impl From<NaiveDateTime> for Value {
    fn from(d: NaiveDateTime) -> Self {
        Self::Date(d.and_utc())
    }
}
impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Self::Date(d.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

/// Text that is neither a number nor a recognised timestamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is neither a number nor a date")]
pub struct ParseValueError(pub String);

impl Value {
    /// Parse a raw byte cell: numbers first, then RFC 3339, then naive
    /// `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD` (both read as UTC).
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, ParseValueError> {
        if let Ok(n) = lexical_core::parse::<f64>(bytes) {
            return Ok(Self::Number(n));
        }
        let text = std::str::from_utf8(bytes)
            .map_err(|_| ParseValueError(String::from_utf8_lossy(bytes).into_owned()))?;
        if let Ok(d) = DateTime::parse_from_rfc3339(text) {
            return Ok(d.into());
        }
        if let Ok(d) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
            return Ok(d.into());
        }
        if let Ok(d) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(d.into());
        }
        Err(ParseValueError(text.to_owned()))
    }
}

impl FromStr for Value {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_bytes(s.trim().as_bytes())
    }
}
