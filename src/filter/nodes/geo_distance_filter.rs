//! Geo distance filter - documents within a distance of a pin

use crate::error::{DslError, Result};
use crate::schema::FieldName;
use crate::types::{finite, GeoDistanceType, GeoPin, GeoUnit};

/// Filter matching documents whose geo point lies within `distance` of `pin`
#[derive(Clone, Debug, PartialEq)]
pub struct GeoDistanceFilter {
    pub(crate) field: String,
    pub(crate) pin: GeoPin,
    pub(crate) distance: f64,
    pub(crate) unit: Option<GeoUnit>,
    pub(crate) distance_type: Option<GeoDistanceType>,
}

impl GeoDistanceFilter {
    const NODE: &'static str = "geo_distance filter";

    pub fn new(field: impl FieldName, pin: GeoPin, distance: f64) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            pin,
            distance: Self::checked_distance(distance)?,
            unit: None,
            distance_type: None,
        })
    }

    pub fn with_distance(mut self, distance: f64) -> Result<Self> {
        self.distance = Self::checked_distance(distance)?;
        Ok(self)
    }

    pub fn with_unit(mut self, unit: GeoUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_distance_type(mut self, distance_type: GeoDistanceType) -> Self {
        self.distance_type = Some(distance_type);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn pin(&self) -> &GeoPin {
        &self.pin
    }

    fn checked_distance(distance: f64) -> Result<f64> {
        let distance = finite(Self::NODE, "distance", distance)?;
        if distance < 0.0 {
            return Err(DslError::invalid(Self::NODE, "distance", "must not be negative"));
        }
        Ok(distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_distance_filter_creation() {
        let pin = GeoPin::coordinates(40.0, -70.0).unwrap();
        let filter = GeoDistanceFilter::new("pin.location", pin.clone(), 12.0)
            .unwrap()
            .with_unit(GeoUnit::Km)
            .with_distance_type(GeoDistanceType::Arc);

        assert_eq!(filter.field(), "pin.location");
        assert_eq!(filter.pin(), &pin);
        assert_eq!(filter.unit, Some(GeoUnit::Km));
    }

    #[test]
    fn test_geo_distance_filter_rejects_bad_distance() {
        let pin = GeoPin::hash("drm3btev3e86").unwrap();
        assert!(GeoDistanceFilter::new("loc", pin.clone(), -1.0).is_err());
        assert!(GeoDistanceFilter::new("loc", pin.clone(), f64::INFINITY).is_err());

        let filter = GeoDistanceFilter::new("loc", pin, 1.0).unwrap();
        assert!(filter.with_distance(f64::NAN).is_err());
    }
}
