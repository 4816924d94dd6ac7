//! Term query - exact match on a field

use crate::error::Result;
use crate::schema::FieldName;
use crate::types::{finite, Scalar};

/// Query that matches documents containing an exact term in a field
#[derive(Clone, Debug, PartialEq)]
pub struct TermQuery {
    pub(crate) field: String,
    pub(crate) value: Scalar,
    pub(crate) boost: Option<f64>,
}

impl TermQuery {
    const NODE: &'static str = "term query";

    /// Create a new term query
    pub fn new(field: impl FieldName, value: impl Into<Scalar>) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            value: value.into().checked(Self::NODE, "value")?,
            boost: None,
        })
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Result<Self> {
        self.boost = Some(finite(Self::NODE, "boost", boost)?);
        Ok(self)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }
}
