//! Core option value types shared by queries, filters and facets

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{DslError, Result};

/// Operator for combining terms in a text query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// All terms must match
    And,
    /// At least one term must match
    Or,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
        }
    }
}

/// Scalar value for term matching and script params
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    /// 64-bit integer
    Long(i64),
    /// 64-bit floating point, always rendered with a decimal component
    Double(f64),
    String(String),
}

impl Scalar {
    /// Convert to the JSON representation
    pub fn to_json(&self) -> Value {
        match self {
            Scalar::Bool(b) => Value::Bool(*b),
            Scalar::Long(v) => Value::from(*v),
            Scalar::Double(v) => Value::from(*v),
            Scalar::String(s) => Value::String(s.clone()),
        }
    }

    pub(crate) fn checked(self, node: &'static str, option: &'static str) -> Result<Self> {
        if let Scalar::Double(v) = self {
            finite(node, option, v)?;
        }
        Ok(self)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Long(v.into())
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Long(v)
    }
}

impl From<u32> for Scalar {
    fn from(v: u32) -> Self {
        Scalar::Long(v.into())
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Double(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::String(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::String(v)
    }
}

/// Bound value for ranges
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeValue {
    /// 64-bit integer
    Long(i64),
    /// 64-bit floating point
    Double(f64),
    /// String (for dates, keywords)
    String(String),
}

impl RangeValue {
    /// Convert to the JSON representation
    pub fn to_json(&self) -> Value {
        match self {
            RangeValue::Long(v) => Value::from(*v),
            RangeValue::Double(v) => Value::from(*v),
            RangeValue::String(s) => Value::String(s.clone()),
        }
    }

    pub(crate) fn checked(self, node: &'static str, option: &'static str) -> Result<Self> {
        match &self {
            RangeValue::Double(v) => {
                finite(node, option, *v)?;
            }
            RangeValue::String(s) if s.trim().is_empty() => {
                return Err(DslError::invalid(node, option, "bound must not be empty"));
            }
            _ => {}
        }
        Ok(self)
    }
}

impl From<i32> for RangeValue {
    fn from(v: i32) -> Self {
        RangeValue::Long(v.into())
    }
}

impl From<i64> for RangeValue {
    fn from(v: i64) -> Self {
        RangeValue::Long(v)
    }
}

impl From<u32> for RangeValue {
    fn from(v: u32) -> Self {
        RangeValue::Long(v.into())
    }
}

impl From<f64> for RangeValue {
    fn from(v: f64) -> Self {
        RangeValue::Double(v)
    }
}

impl From<&str> for RangeValue {
    fn from(v: &str) -> Self {
        RangeValue::String(v.to_string())
    }
}

impl From<String> for RangeValue {
    fn from(v: String) -> Self {
        RangeValue::String(v)
    }
}

/// Bounds of a range query or range filter; at least one bound is present
#[derive(Clone, Debug, PartialEq)]
pub struct RangeBounds {
    pub(crate) from: Option<RangeValue>,
    pub(crate) to: Option<RangeValue>,
    pub(crate) include_lower: Option<bool>,
    pub(crate) include_upper: Option<bool>,
}

impl RangeBounds {
    const NODE: &'static str = "range bounds";

    /// Bounds from optional parts; fails when both are absent
    pub fn new(from: Option<RangeValue>, to: Option<RangeValue>) -> Result<Self> {
        if from.is_none() && to.is_none() {
            return Err(DslError::invalid(Self::NODE, "from", "a range needs at least one bound"));
        }
        Ok(Self {
            from: from.map(|v| v.checked(Self::NODE, "from")).transpose()?,
            to: to.map(|v| v.checked(Self::NODE, "to")).transpose()?,
            include_lower: None,
            include_upper: None,
        })
    }

    /// Lower bound only
    pub fn starting_from(from: impl Into<RangeValue>) -> Result<Self> {
        Self::new(Some(from.into()), None)
    }

    /// Upper bound only
    pub fn up_to(to: impl Into<RangeValue>) -> Result<Self> {
        Self::new(None, Some(to.into()))
    }

    /// Both bounds
    pub fn between(from: impl Into<RangeValue>, to: impl Into<RangeValue>) -> Result<Self> {
        Self::new(Some(from.into()), Some(to.into()))
    }

    pub fn include_lower(mut self, include: bool) -> Self {
        self.include_lower = Some(include);
        self
    }

    pub fn include_upper(mut self, include: bool) -> Self {
        self.include_upper = Some(include);
        self
    }

    pub fn lower(&self) -> Option<&RangeValue> {
        self.from.as_ref()
    }

    pub fn upper(&self) -> Option<&RangeValue> {
        self.to.as_ref()
    }
}

/// One bucket of a range or geo distance facet; at least one bound is present
#[derive(Clone, Debug, PartialEq)]
pub struct FacetRange {
    pub(crate) from: Option<RangeValue>,
    pub(crate) to: Option<RangeValue>,
}

impl FacetRange {
    const NODE: &'static str = "facet range";

    /// Bucket from optional bounds; fails when both are absent
    pub fn new(from: Option<RangeValue>, to: Option<RangeValue>) -> Result<Self> {
        if from.is_none() && to.is_none() {
            return Err(DslError::invalid(Self::NODE, "from", "a range needs at least one bound"));
        }
        Ok(Self {
            from: from.map(|v| v.checked(Self::NODE, "from")).transpose()?,
            to: to.map(|v| v.checked(Self::NODE, "to")).transpose()?,
        })
    }

    pub fn starting_from(from: impl Into<RangeValue>) -> Result<Self> {
        Self::new(Some(from.into()), None)
    }

    pub fn up_to(to: impl Into<RangeValue>) -> Result<Self> {
        Self::new(None, Some(to.into()))
    }

    pub fn between(from: impl Into<RangeValue>, to: impl Into<RangeValue>) -> Result<Self> {
        Self::new(Some(from.into()), Some(to.into()))
    }

    pub fn lower(&self) -> Option<&RangeValue> {
        self.from.as_ref()
    }

    pub fn upper(&self) -> Option<&RangeValue> {
        self.to.as_ref()
    }
}

/// Named script parameters; keys are unique, rendered in key order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Params(BTreeMap<String, Scalar>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter; a repeated key replaces the earlier value
    pub fn add(mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Scalar)> {
        self.0.iter()
    }

    pub(crate) fn validate(&self, node: &'static str) -> Result<()> {
        for (key, value) in &self.0 {
            if key.is_empty() {
                return Err(DslError::invalid(node, "params", "parameter name must not be empty"));
            }
            value.clone().checked(node, "params")?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> Value {
        Value::Object(self.0.iter().map(|(k, v)| (k.clone(), v.to_json())).collect())
    }
}

/// Distance unit for geo nodes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoUnit {
    /// Miles
    Mi,
    /// Kilometers
    Km,
}

impl GeoUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoUnit::Mi => "mi",
            GeoUnit::Km => "km",
        }
    }
}

/// Distance computation algorithm
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeoDistanceType {
    /// Great-circle distance (most accurate)
    Arc,
    /// Flat-plane approximation (faster, less accurate over long distances)
    Plane,
    /// Cosine factor approximation
    Factor,
}

impl GeoDistanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoDistanceType::Arc => "arc",
            GeoDistanceType::Plane => "plane",
            GeoDistanceType::Factor => "factor",
        }
    }
}

const GEOHASH_ALPHABET: &str = "0123456789bcdefghjkmnpqrstuvwxyz";
const GEOHASH_MAX_LEN: usize = 12;

/// Geographic origin point
///
/// Both representations render under the same key: coordinates as
/// `"<lat>, <lon>"`, a geohash verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoPin(PinRepr);

#[derive(Clone, Debug, PartialEq)]
enum PinRepr {
    Coordinates { lat: f64, lon: f64 },
    Hash(String),
}

impl GeoPin {
    /// Pin from a latitude/longitude pair
    pub fn coordinates(lat: f64, lon: f64) -> Result<Self> {
        let lat = finite("geo pin", "lat", lat)?;
        let lon = finite("geo pin", "lon", lon)?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(DslError::invalid("geo pin", "lat", format!("{lat} is outside [-90, 90]")));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(DslError::invalid("geo pin", "lon", format!("{lon} is outside [-180, 180]")));
        }
        Ok(GeoPin(PinRepr::Coordinates { lat, lon }))
    }

    /// Pin from a geohash
    pub fn hash(hash: impl Into<String>) -> Result<Self> {
        let hash = hash.into();
        if hash.is_empty() || hash.len() > GEOHASH_MAX_LEN {
            return Err(DslError::invalid(
                "geo pin",
                "geohash",
                format!("geohash must be 1 to {GEOHASH_MAX_LEN} characters"),
            ));
        }
        if let Some(bad) = hash.chars().find(|c| !GEOHASH_ALPHABET.contains(*c)) {
            return Err(DslError::invalid(
                "geo pin",
                "geohash",
                format!("'{bad}' is not a geohash character"),
            ));
        }
        Ok(GeoPin(PinRepr::Hash(hash)))
    }

    /// Latitude and longitude, for a coordinate pin
    pub fn lat_lon(&self) -> Option<(f64, f64)> {
        match self.0 {
            PinRepr::Coordinates { lat, lon } => Some((lat, lon)),
            PinRepr::Hash(_) => None,
        }
    }

    pub fn geohash(&self) -> Option<&str> {
        match &self.0 {
            PinRepr::Hash(hash) => Some(hash),
            PinRepr::Coordinates { .. } => None,
        }
    }

    /// The string rendered under the pin key
    pub fn to_location_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GeoPin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            PinRepr::Coordinates { lat, lon } => write!(f, "{lat}, {lon}"),
            PinRepr::Hash(hash) => f.write_str(hash),
        }
    }
}

impl FromStr for GeoPin {
    type Err = DslError;

    /// Parse `"lat, lon"` or a geohash
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        match s.split_once(',') {
            Some((lat, lon)) => {
                let parse = |part: &str, option: &'static str| {
                    part.trim().parse::<f64>().map_err(|_| {
                        DslError::invalid("geo pin", option, format!("'{}' is not a number", part.trim()))
                    })
                };
                GeoPin::coordinates(parse(lat, "lat")?, parse(lon, "lon")?)
            }
            None => GeoPin::hash(s),
        }
    }
}

pub(crate) fn finite(node: &'static str, option: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DslError::invalid(node, option, "must be a finite number"))
    }
}

pub(crate) fn non_empty(node: &'static str, option: &'static str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.trim().is_empty() {
        Err(DslError::invalid(node, option, "must not be empty"))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_scalars_keep_decimal_component() {
        assert_eq!(Scalar::from(200.0).to_json().to_string(), "200.0");
        assert_eq!(Scalar::from(200).to_json().to_string(), "200");
        assert_eq!(RangeValue::from(10).to_json().to_string(), "10");
        assert_eq!(RangeValue::from(0.5).to_json().to_string(), "0.5");
    }

    #[test]
    fn test_non_finite_values_rejected() {
        assert!(Scalar::from(f64::NAN).checked("term query", "value").is_err());
        assert!(RangeValue::from(f64::INFINITY).checked("range query", "from").is_err());
        assert!(RangeValue::from("").checked("range query", "from").is_err());
        assert!(RangeValue::from("2024-01-01").checked("range query", "from").is_ok());
    }

    #[test]
    fn test_range_bounds_require_a_bound() {
        assert!(RangeBounds::new(None, None).is_err());
        assert!(FacetRange::new(None, None).is_err());

        let bounds = RangeBounds::up_to(10).unwrap().include_upper(false);
        assert!(bounds.lower().is_none());
        assert_eq!(bounds.upper(), Some(&RangeValue::Long(10)));
        assert_eq!(bounds.include_upper, Some(false));
        assert_eq!(bounds.include_lower, None);

        let bucket = FacetRange::between(10, 20).unwrap();
        assert_eq!(bucket.lower(), Some(&RangeValue::Long(10)));
        assert!(FacetRange::starting_from(f64::NAN).is_err());
    }

    #[test]
    fn test_params_last_write_wins() {
        let params = Params::new().add("factor", 5).add("factor", 7).add("base", 1.5);
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("factor"), Some(&Scalar::Long(7)));
        assert_eq!(params.to_json().to_string(), r#"{"base":1.5,"factor":7}"#);
    }

    #[test]
    fn test_params_validation() {
        assert!(Params::new().add("f", f64::NAN).validate("geo_distance facet").is_err());
        assert!(Params::new().add("", 1).validate("geo_distance facet").is_err());
        assert!(Params::new().add("f", 1).validate("geo_distance facet").is_ok());
    }

    #[test]
    fn test_geo_pin_coordinates() {
        let pin = GeoPin::coordinates(40.0, -70.0).unwrap();
        assert_eq!(pin.to_location_string(), "40, -70");

        let pin = GeoPin::coordinates(40.5, -70.25).unwrap();
        assert_eq!(pin.to_location_string(), "40.5, -70.25");
        assert_eq!(pin.lat_lon(), Some((40.5, -70.25)));
        assert_eq!(pin.geohash(), None);

        assert!(GeoPin::coordinates(91.0, 0.0).is_err());
        assert!(GeoPin::coordinates(0.0, -181.0).is_err());
        assert!(GeoPin::coordinates(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_geo_pin_parse() {
        let parsed: GeoPin = "40,-70".parse().unwrap();
        assert_eq!(parsed, GeoPin::coordinates(40.0, -70.0).unwrap());
        assert_eq!(parsed.to_location_string(), "40, -70");

        let hash: GeoPin = "drm3btev3e86".parse().unwrap();
        assert_eq!(hash.geohash(), Some("drm3btev3e86"));
        assert_eq!(hash.lat_lon(), None);
        assert_eq!(hash.to_location_string(), "drm3btev3e86");

        assert!("40, north".parse::<GeoPin>().is_err());
        assert!("".parse::<GeoPin>().is_err());
        assert!("drm3btev3e86a".parse::<GeoPin>().is_err());
        assert!("abc".parse::<GeoPin>().is_err()); // 'a' is not in the alphabet
    }

    #[test]
    fn test_enum_tokens() {
        assert_eq!(GeoUnit::Mi.as_str(), "mi");
        assert_eq!(GeoDistanceType::Arc.as_str(), "arc");
        assert_eq!(Operator::And.as_str(), "and");
        assert_eq!(serde_json::to_value(GeoDistanceType::Plane).unwrap(), "plane");
    }

    #[test]
    fn test_string_helpers() {
        assert!(non_empty("text query", "analyzer", " ").is_err());
        assert_eq!(non_empty("text query", "analyzer", "standard").unwrap(), "standard");
        assert!(finite("fuzzy query", "boost", f64::NEG_INFINITY).is_err());
    }
}
