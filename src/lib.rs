//! Public-facing crate root – re-exports + one-shot helper.
//!
//! Works out the `(min, max)` range a chart axis should span. An explicit
//! `domain` wins, then a complete `minDomain`/`maxDomain` pair, then the
//! extent of the data (optionally stretched to include zero).
//!
//! ```
//! use chart_domain::{AxisId, DataPoint, Domain, DomainConfig};
//!
//! let cfg = DomainConfig::builder()
//!     .domain_for(AxisId::Y, Domain::new(1, 2).unwrap())
//!     .data([DataPoint::new(1, 3), DataPoint::new(3, 5)])
//!     .build();
//!
//! assert_eq!(cfg.resolve(AxisId::X, false).unwrap().as_numeric(), Some((1.0, 3.0)));
//! assert_eq!(cfg.resolve(AxisId::Y, false).unwrap().as_numeric(), Some((1.0, 2.0)));
//! ```

pub mod cli;
pub mod core;

pub use crate::core::{
    axis::{AxisId, ParseAxisError},
    config::{Bound, ConfigBuilder, DomainConfig, PerAxis},
    data::{CsvError, DataPoint, read_csv, read_csv_from_path},
    domain::Domain,
    error::{AppError, ConfigError, DomainError},
    resolver::{resolve, resolve_all},
    value::{ParseValueError, Value, ValueKind},
};

/// Convenience for callers holding loose JSON: parse the configuration and
/// resolve one axis.
pub fn resolve_json(
    json: &str,
    axis: AxisId,
    include_zero: bool,
) -> Result<Domain, AppError> {
    let cfg = DomainConfig::from_json(json)?;
    Ok(resolve(&cfg, axis, include_zero)?)
}
