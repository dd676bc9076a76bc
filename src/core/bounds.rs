//! Data-derived axis extents.

use crate::core::{
    axis::AxisId, data::DataPoint, domain::Domain, error::ConfigError, value::Value,
};

impl AxisId {
    /// Inclusive extent of this axis over `points`, without any padding.
    ///
    /// * Points missing the axis and non-finite numbers are skipped.
    /// * `Ok(None)` when nothing usable is left.
    /// * A single usable value gives `min == max`.
    /// * Mixing numbers and dates on one axis is an error.
    pub fn extent(self, points: &[DataPoint]) -> Result<Option<Domain>, ConfigError> {
        let mut span: Option<(Value, Value)> = None;

        for (index, p) in points.iter().enumerate() {
            let Some(v) = p.get(self) else { continue };
            if !v.is_finite() {
                log::trace!("{self} extent: skipping non-finite point {index}");
                continue;
            }
            span = Some(match span {
                None => (v, v),
                Some((low, high)) => {
                    if v.kind() != low.kind() {
                        return Err(ConfigError::MixedData {
                            index,
                            expected: low.kind(),
                            found: v.kind(),
                        });
                    }
                    (low.lesser(v), high.greater(v))
                }
            });
        }

        Ok(span.map(|(low, high)| Domain::from_ordered(low, high)))
    }
}
