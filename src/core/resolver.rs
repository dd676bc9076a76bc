//! Domain resolution: explicit domain, then explicit min/max, then data.

use crate::core::{
    axis::AxisId,
    config::DomainConfig,
    domain::Domain,
    error::{DomainError, OnAxis},
};

/// Resolve the domain one axis should span.
///
/// The first applicable source wins:
///
/// 1. `config.domain` for `axis`, returned untouched.
/// 2. A complete `min_domain`/`max_domain` pair for `axis`, returned as given.
///    Half a pair is ignored.
/// 3. The extent of `config.data` on `axis`, widened to contain zero when
///    `include_zero` is set.
///
/// `include_zero` only affects the data-derived case. Nothing is cached.
///
/// # Errors
///
/// [`DomainError::Unresolvable`] when none of the three sources has anything
/// for `axis`; [`DomainError::Configuration`] for mixed value kinds, an
/// inverted or non-finite min/max pair, or zero inclusion on dates.
///
/// ```
/// use chart_domain::{AxisId, DataPoint, DomainConfig, resolve};
///
/// let cfg = DomainConfig::builder()
///     .data([DataPoint::new(1, 3), DataPoint::new(3, 5)])
///     .build();
/// let y = resolve(&cfg, AxisId::Y, true).unwrap();
/// assert_eq!(y.as_numeric(), Some((0.0, 5.0)));
/// ```
pub fn resolve(
    config: &DomainConfig,
    axis: AxisId,
    include_zero: bool,
) -> Result<Domain, DomainError> {
    if let Some(d) = config.domain_for(axis) {
        log::debug!("{axis}: explicit domain {d}");
        return Ok(d);
    }

    match (config.min_for(axis), config.max_for(axis)) {
        (Some(min), Some(max)) => {
            let d = Domain::new(min, max).on_axis(axis)?;
            log::debug!("{axis}: explicit min/max {d}");
            return Ok(d);
        }
        (Some(_), None) | (None, Some(_)) => {
            log::warn!("{axis}: ignoring min/max bound without its partner");
        }
        (None, None) => {}
    }

    let Some(d) = axis.extent(&config.data).on_axis(axis)? else {
        log::debug!("{axis}: nothing to resolve from");
        return Err(DomainError::Unresolvable { axis });
    };
    let d = if include_zero {
        d.including_zero().on_axis(axis)?
    } else {
        d
    };
    log::debug!("{axis}: from {} data points {d}", config.data.len());
    Ok(d)
}

/// Resolve both axes, independent first.
///
/// Zero inclusion is requested per axis through `include_zero`.
pub fn resolve_all(
    config: &DomainConfig,
    include_zero: impl Fn(AxisId) -> bool,
) -> [(AxisId, Result<Domain, DomainError>); 2] {
    AxisId::ALL.map(|axis| (axis, resolve(config, axis, include_zero(axis))))
}

impl DomainConfig {
    /// Method form of [`resolve`].
    #[inline]
    pub fn resolve(&self, axis: AxisId, include_zero: bool) -> Result<Domain, DomainError> {
        resolve(self, axis, include_zero)
    }
}
