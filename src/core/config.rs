//! Domain configuration object + fluent builder.

use std::{fmt, marker::PhantomData};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{DeserializeOwned, Error as _, MapAccess, Visitor},
};

use crate::core::{
    axis::AxisId,
    data::{DataPoint, lenient_points},
    domain::Domain,
    value::Value,
};

/// A setting given either once for both axes or separately per axis.
///
/// In JSON the flat form is the bare value (`[0, 1]`, `5`) and the per-axis
/// form is an object (`{"x": [0, 1]}`). Only an object selects the per-axis
/// form; anything else must parse as the flat value itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Bound<T> {
    Scalar(T),
    PerAxis(PerAxis<T>),
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Bound<T> {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(de)?;
        if raw.is_object() {
            PerAxis::deserialize(raw)
                .map(Self::PerAxis)
                .map_err(D::Error::custom)
        } else {
            T::deserialize(raw)
                .map(Self::Scalar)
                .map_err(D::Error::custom)
        }
    }
}

/// Per-axis values, read only from a map keyed by `x` and/or `y`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerAxis<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PerAxis<T> {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        struct PerAxisVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for PerAxisVisitor<T> {
            type Value = PerAxis<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map keyed by `x` and/or `y`")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut out = PerAxis::default();
                while let Some(axis) = map.next_key::<AxisId>()? {
                    let slot = match axis {
                        AxisId::X => &mut out.x,
                        AxisId::Y => &mut out.y,
                    };
                    if slot.is_some() {
                        return Err(A::Error::custom(format_args!("duplicate `{axis}` entry")));
                    }
                    *slot = map.next_value::<Option<T>>()?;
                }
                Ok(out)
            }
        }

        de.deserialize_map(PerAxisVisitor(PhantomData))
    }
}

impl<T> Default for PerAxis<T> {
    fn default() -> Self {
        Self { x: None, y: None }
    }
}

impl<T: Clone> PerAxis<T> {
    #[inline]
    #[must_use]
    pub fn get(&self, axis: AxisId) -> Option<T> {
        match axis {
            AxisId::X => self.x.clone(),
            AxisId::Y => self.y.clone(),
        }
    }

    #[inline]
    fn set(&mut self, axis: AxisId, v: T) {
        match axis {
            AxisId::X => self.x = Some(v),
            AxisId::Y => self.y = Some(v),
        }
    }
}

impl<T: Clone> Bound<T> {
    /// Normalise either form to the value for one axis.
    #[inline]
    #[must_use]
    pub fn for_axis(&self, axis: AxisId) -> Option<T> {
        match self {
            Self::Scalar(v) => Some(v.clone()),
            Self::PerAxis(m) => m.get(axis),
        }
    }

    /// Override one axis. A flat value is first copied to both axes.
    #[must_use]
    pub fn with_axis(self, axis: AxisId, v: T) -> Self {
        let mut m = match self {
            Self::Scalar(s) => PerAxis {
                x: Some(s.clone()),
                y: Some(s),
            },
            Self::PerAxis(m) => m,
        };
        m.set(axis, v);
        Self::PerAxis(m)
    }

    fn set_axis(slot: Option<Self>, axis: AxisId, v: T) -> Self {
        match slot {
            Some(b) => b.with_axis(axis, v),
            None => {
                let mut m = PerAxis::default();
                m.set(axis, v);
                Self::PerAxis(m)
            }
        }
    }
}

/// Everything the resolver looks at. Built fresh per render pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Bound<Domain>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_domain: Option<Bound<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_domain: Option<Bound<Value>>,
    #[serde(
        default,
        deserialize_with = "lenient_points",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub data: Vec<DataPoint>,
}

impl DomainConfig {
    #[inline]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Parse the JSON shape charts are usually configured with.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[inline]
    #[must_use]
    pub fn domain_for(&self, axis: AxisId) -> Option<Domain> {
        self.domain.as_ref()?.for_axis(axis)
    }

    #[inline]
    #[must_use]
    pub fn min_for(&self, axis: AxisId) -> Option<Value> {
        self.min_domain.as_ref()?.for_axis(axis)
    }

    #[inline]
    #[must_use]
    pub fn max_for(&self, axis: AxisId) -> Option<Value> {
        self.max_domain.as_ref()?.for_axis(axis)
    }
}

/// Fluent builder for [`DomainConfig`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    cfg: DomainConfig,
}

impl ConfigBuilder {
    /// One domain for both axes.
    #[inline]
    #[must_use]
    pub fn domain(mut self, d: Domain) -> Self {
        self.cfg.domain = Some(Bound::Scalar(d));
        self
    }
    #[inline]
    #[must_use]
    pub fn domain_for(mut self, axis: AxisId, d: Domain) -> Self {
        self.cfg.domain = Some(Bound::set_axis(self.cfg.domain.take(), axis, d));
        self
    }
    #[inline]
    #[must_use]
    pub fn min_domain(mut self, v: impl Into<Value>) -> Self {
        self.cfg.min_domain = Some(Bound::Scalar(v.into()));
        self
    }
    #[inline]
    #[must_use]
    pub fn min_domain_for(mut self, axis: AxisId, v: impl Into<Value>) -> Self {
        self.cfg.min_domain = Some(Bound::set_axis(self.cfg.min_domain.take(), axis, v.into()));
        self
    }
    #[inline]
    #[must_use]
    pub fn max_domain(mut self, v: impl Into<Value>) -> Self {
        self.cfg.max_domain = Some(Bound::Scalar(v.into()));
        self
    }
    #[inline]
    #[must_use]
    pub fn max_domain_for(mut self, axis: AxisId, v: impl Into<Value>) -> Self {
        self.cfg.max_domain = Some(Bound::set_axis(self.cfg.max_domain.take(), axis, v.into()));
        self
    }
    #[inline]
    #[must_use]
    pub fn point(mut self, p: DataPoint) -> Self {
        self.cfg.data.push(p);
        self
    }
    #[inline]
    #[must_use]
    pub fn data(mut self, points: impl IntoIterator<Item = DataPoint>) -> Self {
        self.cfg.data.extend(points);
        self
    }

    #[must_use]
    pub fn build(self) -> DomainConfig {
        self.cfg
    }
}

impl From<ConfigBuilder> for DomainConfig {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_and_per_axis_normalise_alike() {
        let d = Domain::new(0, 1).unwrap();
        let flat = Bound::Scalar(d);
        let per_axis = Bound::PerAxis(PerAxis {
            x: Some(d),
            y: None,
        });
        assert_eq!(flat.for_axis(AxisId::X), per_axis.for_axis(AxisId::X));
        assert_eq!(per_axis.for_axis(AxisId::Y), None);
    }

    #[test]
    fn per_axis_override_expands_flat_value() {
        let cfg = DomainConfig::builder()
            .min_domain(1)
            .min_domain_for(AxisId::Y, 2)
            .build();
        assert_eq!(cfg.min_for(AxisId::X), Some(Value::from(1)));
        assert_eq!(cfg.min_for(AxisId::Y), Some(Value::from(2)));
    }

    #[test]
    fn parses_loose_json_shapes() {
        let cfg = DomainConfig::from_json(
            r#"{"domain": {"y": [1, 2]}, "minDomain": 1, "maxDomain": {"x": 10}}"#,
        )
        .unwrap();
        assert_eq!(cfg.domain_for(AxisId::X), None);
        assert_eq!(cfg.domain_for(AxisId::Y), Some(Domain::new(1, 2).unwrap()));
        assert_eq!(cfg.min_for(AxisId::Y), Some(Value::from(1)));
        assert_eq!(cfg.max_for(AxisId::Y), None);
        assert!(cfg.data.is_empty());
    }

    #[test]
    fn rejects_unknown_axis_keys() {
        assert!(DomainConfig::from_json(r#"{"domain": {"z": [0, 1]}}"#).is_err());
    }

    #[test]
    fn per_axis_reads_only_from_maps() {
        let nested = DomainConfig::from_json(r#"{"domain": [[0, 1], [5, 9]]}"#);
        assert!(nested.is_err());
        let arrays = DomainConfig::from_json(r#"{"minDomain": [1, 2], "maxDomain": [10, 20]}"#);
        assert!(arrays.is_err());
    }

    #[test]
    fn per_axis_null_entry_is_absent() {
        let cfg = DomainConfig::from_json(r#"{"minDomain": {"x": 1, "y": null}}"#).unwrap();
        assert_eq!(cfg.min_for(AxisId::X), Some(Value::from(1)));
        assert_eq!(cfg.min_for(AxisId::Y), None);
    }

    #[test]
    fn flat_bound_keeps_its_own_error() {
        let err = DomainConfig::from_json(r#"{"domain": [5, 1]}"#).unwrap_err();
        assert!(err.to_string().contains("greater than maximum"), "{err}");
    }
}
