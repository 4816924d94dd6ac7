//! Fuzzy numeric query - matches numbers within a similarity of a value

use crate::error::Result;
use crate::schema::FieldName;
use crate::types::finite;

/// Query that matches numeric field values close to a target value
///
/// All options are floating point and render with a decimal component,
/// so a value of `200` is emitted as `200.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyNumericQuery {
    pub(crate) field: String,
    pub(crate) value: f64,
    pub(crate) min_similarity: Option<f64>,
    pub(crate) boost: Option<f64>,
}

impl FuzzyNumericQuery {
    const NODE: &'static str = "fuzzy_numeric query";

    /// Create a new fuzzy numeric query
    pub fn new(field: impl FieldName, value: impl Into<f64>) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            value: finite(Self::NODE, "value", value.into())?,
            min_similarity: None,
            boost: None,
        })
    }

    /// Replace the target value
    pub fn with_value(mut self, value: impl Into<f64>) -> Result<Self> {
        self.value = finite(Self::NODE, "value", value.into())?;
        Ok(self)
    }

    /// Set the maximum distance from the value that still matches
    pub fn with_min_similarity(mut self, min_similarity: impl Into<f64>) -> Result<Self> {
        self.min_similarity = Some(finite(Self::NODE, "min_similarity", min_similarity.into())?);
        Ok(self)
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Result<Self> {
        self.boost = Some(finite(Self::NODE, "boost", boost)?);
        Ok(self)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> f64 {
        self.value
    }
}
