//! Geo distance facet - document counts per distance band around a pin

use crate::error::{DslError, Result};
use crate::schema::FieldName;
use crate::types::{non_empty, FacetRange, GeoDistanceType, GeoPin, GeoUnit, Params};

/// What a geo distance facet aggregates within each band
#[derive(Clone, Debug, PartialEq)]
pub enum ValueSource {
    Field(String),
    Script(String),
}

impl ValueSource {
    /// The rendered key
    pub fn key(&self) -> &'static str {
        match self {
            ValueSource::Field(_) => "value_field",
            ValueSource::Script(_) => "value_script",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            ValueSource::Field(v) | ValueSource::Script(v) => v,
        }
    }
}

/// Facet bucketing documents by their distance from a pin
///
/// `value_field` and `value_script` are exclusive. The plain setters keep
/// whichever was set last; the `try_` setters refuse to replace the other.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoDistanceFacet {
    pub(crate) pin_field: Option<String>,
    pub(crate) pin: GeoPin,
    pub(crate) value: Option<ValueSource>,
    pub(crate) ranges: Vec<FacetRange>,
    pub(crate) unit: Option<GeoUnit>,
    pub(crate) distance_type: Option<GeoDistanceType>,
    pub(crate) params: Option<Params>,
}

impl GeoDistanceFacet {
    const NODE: &'static str = "geo_distance facet";

    /// Create a facet around `pin`
    pub fn new(pin: GeoPin) -> Self {
        Self {
            pin_field: None,
            pin,
            value: None,
            ranges: Vec::new(),
            unit: None,
            distance_type: None,
            params: None,
        }
    }

    /// Geo point field the pin is matched against; defaults to the renderer setting
    pub fn with_pin_field(mut self, field: impl FieldName) -> Result<Self> {
        self.pin_field = Some(field.into_field_name(Self::NODE)?);
        Ok(self)
    }

    pub fn with_pin(mut self, pin: GeoPin) -> Self {
        self.pin = pin;
        self
    }

    /// Aggregate a field; replaces any value script
    pub fn with_value_field(mut self, field: impl FieldName) -> Result<Self> {
        self.value = Some(ValueSource::Field(field.into_field_name(Self::NODE)?));
        Ok(self)
    }

    /// Aggregate a script; replaces any value field
    pub fn with_value_script(mut self, script: impl Into<String>) -> Result<Self> {
        self.value = Some(ValueSource::Script(non_empty(Self::NODE, "value_script", script)?));
        Ok(self)
    }

    /// Like [`with_value_field`](Self::with_value_field), but fails if a value script is set
    pub fn try_with_value_field(self, field: impl FieldName) -> Result<Self> {
        if let Some(ValueSource::Script(_)) = self.value {
            return Err(DslError::AmbiguousNodeConfiguration {
                node: Self::NODE,
                option: "value_field",
                conflicts_with: "value_script",
            });
        }
        self.with_value_field(field)
    }

    /// Like [`with_value_script`](Self::with_value_script), but fails if a value field is set
    pub fn try_with_value_script(self, script: impl Into<String>) -> Result<Self> {
        if let Some(ValueSource::Field(_)) = self.value {
            return Err(DslError::AmbiguousNodeConfiguration {
                node: Self::NODE,
                option: "value_script",
                conflicts_with: "value_field",
            });
        }
        self.with_value_script(script)
    }

    /// Append a distance band after the existing ones
    pub fn with_range(mut self, range: FacetRange) -> Self {
        self.ranges.push(range);
        self
    }

    /// Append several distance bands, in order
    pub fn with_ranges(mut self, ranges: impl IntoIterator<Item = FacetRange>) -> Self {
        self.ranges.extend(ranges);
        self
    }

    pub fn with_unit(mut self, unit: GeoUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_distance_type(mut self, distance_type: GeoDistanceType) -> Self {
        self.distance_type = Some(distance_type);
        self
    }

    /// Script parameters; replaces earlier params
    pub fn with_params(mut self, params: Params) -> Result<Self> {
        params.validate(Self::NODE)?;
        self.params = Some(params);
        Ok(self)
    }

    pub fn pin(&self) -> &GeoPin {
        &self.pin
    }

    pub fn value_source(&self) -> Option<&ValueSource> {
        self.value.as_ref()
    }

    pub fn ranges(&self) -> &[FacetRange] {
        &self.ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin() -> GeoPin {
        GeoPin::coordinates(40.0, -70.0).unwrap()
    }

    #[test]
    fn test_last_value_source_wins() {
        let facet = GeoDistanceFacet::new(pin())
            .with_value_field("origin")
            .unwrap()
            .with_value_script("doc['num1'].value * factor")
            .unwrap();
        assert_eq!(
            facet.value_source(),
            Some(&ValueSource::Script("doc['num1'].value * factor".to_string()))
        );

        let facet = facet.with_value_field("origin").unwrap();
        assert_eq!(facet.value_source().map(ValueSource::key), Some("value_field"));
    }

    #[test]
    fn test_strict_setters_surface_conflicts() {
        let facet = GeoDistanceFacet::new(pin()).with_value_field("origin").unwrap();
        match facet.clone().try_with_value_script("doc['num1'].value") {
            Err(DslError::AmbiguousNodeConfiguration { node, option, conflicts_with }) => {
                assert_eq!(node, "geo_distance facet");
                assert_eq!(option, "value_script");
                assert_eq!(conflicts_with, "value_field");
            }
            other => panic!("expected AmbiguousNodeConfiguration, got {other:?}"),
        }

        // replacing the same source is not a conflict
        assert!(facet.try_with_value_field("destination").is_ok());
    }

    #[test]
    fn test_ranges_append_in_order() {
        let facet = GeoDistanceFacet::new(pin())
            .with_range(FacetRange::up_to(10).unwrap())
            .with_ranges([
                FacetRange::between(10, 20).unwrap(),
                FacetRange::starting_from(20).unwrap(),
            ]);
        let lowers: Vec<_> = facet.ranges().iter().map(|r| r.lower().cloned()).collect();
        assert_eq!(lowers, vec![None, Some(10.into()), Some(20.into())]);
    }

    #[test]
    fn test_invalid_options() {
        assert!(GeoDistanceFacet::new(pin()).with_value_script("").is_err());
        assert!(GeoDistanceFacet::new(pin()).with_pin_field("").is_err());
        assert!(GeoDistanceFacet::new(pin())
            .with_params(Params::new().add("factor", f64::NAN))
            .is_err());
    }
}
