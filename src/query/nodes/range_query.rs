//! Range query - matches documents with field values in a range

use crate::error::Result;
use crate::schema::FieldName;
use crate::types::{finite, RangeBounds};

/// Query that matches documents with field values within a range
///
/// Works with numeric, date and string fields.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeQuery {
    pub(crate) field: String,
    pub(crate) bounds: RangeBounds,
    pub(crate) boost: Option<f64>,
}

impl RangeQuery {
    const NODE: &'static str = "range query";

    /// Create a new range query
    pub fn new(field: impl FieldName, bounds: RangeBounds) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            bounds,
            boost: None,
        })
    }

    /// Replace the bounds
    pub fn with_bounds(mut self, bounds: RangeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Result<Self> {
        self.boost = Some(finite(Self::NODE, "boost", boost)?);
        Ok(self)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn bounds(&self) -> &RangeBounds {
        &self.bounds
    }

    /// Check if this range is unbounded on the lower end
    pub fn is_unbounded_lower(&self) -> bool {
        self.bounds.from.is_none()
    }

    /// Check if this range is unbounded on the upper end
    pub fn is_unbounded_upper(&self) -> bool {
        self.bounds.to.is_none()
    }
}
