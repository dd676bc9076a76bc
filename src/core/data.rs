//! Data points + a forgiving CSV loader.

use std::{
    collections::BTreeMap,
    io::{self, BufRead, BufReader, Read},
};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::core::{axis::AxisId, value::Value};

/// One observation. Either coordinate may be missing; anything else the
/// point carries (`y0`, labels, styling) rides along in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub x: Option<Value>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub y: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DataPoint {
    pub fn new(x: impl Into<Value>, y: impl Into<Value>) -> Self {
        Self {
            x: Some(x.into()),
            y: Some(y.into()),
            extra: BTreeMap::new(),
        }
    }

    pub fn x_only(x: impl Into<Value>) -> Self {
        Self {
            x: Some(x.into()),
            ..Self::default()
        }
    }

    pub fn y_only(y: impl Into<Value>) -> Self {
        Self {
            y: Some(y.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, v: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), v.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn get(&self, axis: AxisId) -> Option<Value> {
        match axis {
            AxisId::X => self.x,
            AxisId::Y => self.y,
        }
    }
}

/// A coordinate that doesn't parse is treated as absent so one bad point
/// can't sink the whole data set.
fn lenient<'de, D>(de: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(de)?;
    if raw.is_null() {
        return Ok(None);
    }
    match Value::deserialize(&raw) {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            log::trace!("dropping unreadable coordinate {raw}: {e}");
            Ok(None)
        }
    }
}

/// Same idea one level up: a point that isn't a readable object is dropped.
pub(crate) fn lenient_points<'de, D>(de: D) -> Result<Vec<DataPoint>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<serde_json::Value>::deserialize(de)?;
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, v)| match DataPoint::deserialize(&v) {
            Ok(p) => Some(p),
            Err(e) => {
                log::trace!("dropping unreadable data point {index} ({v}): {e}");
                None
            }
        })
        .collect())
}

// --- CSV ingest ---

#[derive(Debug, Error)]
#[error("I/O error on line {line}: {source}")]
pub struct CsvError {
    pub line: usize,
    #[source]
    pub source: io::Error,
}

#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while !b.is_empty() && b[0].is_ascii_whitespace() {
        b = &b[1..];
    }
    while !b.is_empty() && b[b.len() - 1].is_ascii_whitespace() {
        b = &b[..b.len() - 1];
    }
    b
}

/// Rewrite U+2212 MINUS SIGN to ASCII `-` in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn cell(bytes: Option<&[u8]>, line: usize, axis: AxisId) -> Option<Value> {
    let bytes = bytes.filter(|b| !b.is_empty())?;
    match Value::parse_bytes(bytes) {
        Ok(v) => Some(v),
        Err(e) => {
            log::trace!("line {line}: skipping {axis} cell: {e}");
            None
        }
    }
}

const BUF_CAP: usize = 1 << 16;

/// Read `x,y[,…]` rows. Blank lines and `#` comments are skipped, as is a
/// leading header (neither of its first two fields is a value). Columns past the second are
/// ignored; unreadable cells become missing coordinates.
pub fn read_csv<R: Read>(src: R) -> Result<Vec<DataPoint>, CsvError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut data = Vec::<DataPoint>::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr
            .read_until(b'\n', &mut buf)
            .map_err(|source| CsvError {
                line: line_no,
                source,
            })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        let line = trim(&buf);
        if line.is_empty() || line[0] == b'#' {
            continue;
        }

        let mut cols = buf.split(|&b| b == b',').map(trim);
        let first = cols.next();
        let second = cols.next();

        if !saw_first {
            saw_first = true;
            let parses = |c: Option<&[u8]>| c.is_some_and(|c| Value::parse_bytes(c).is_ok());
            if !parses(first) && !parses(second) {
                log::debug!("line {line_no}: treating as header");
                continue;
            }
        }

        data.push(DataPoint {
            x: cell(first, line_no, AxisId::X),
            y: cell(second, line_no, AxisId::Y),
            extra: BTreeMap::new(),
        });
    }
    log::debug!("read {} rows from {line_no} lines", data.len());
    Ok(data)
}

pub fn read_csv_from_path(path: &str) -> Result<Vec<DataPoint>, CsvError> {
    if path == "-" {
        read_csv(io::stdin())
    } else {
        use std::fs::File;
        read_csv(File::open(path).map_err(|source| CsvError { line: 0, source })?)
    }
}
