//! Aggregates the domain-resolution layer.

pub mod axis;
pub mod bounds;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod resolver;
pub mod value;

// re-export frequently-used items for convenience
pub use axis::{AxisId, ParseAxisError};
pub use config::{Bound, ConfigBuilder, DomainConfig, PerAxis};
pub use data::{CsvError, DataPoint};
pub use domain::Domain;
pub use error::{AppError, ConfigError, DomainError};
pub use resolver::{resolve, resolve_all};
pub use value::{ParseValueError, Value, ValueKind};
