//! Range filter - non-scoring range check on a field

use crate::error::Result;
use crate::schema::FieldName;
use crate::types::RangeBounds;

#[derive(Clone, Debug, PartialEq)]
pub struct RangeFilter {
    pub(crate) field: String,
    pub(crate) bounds: RangeBounds,
}

impl RangeFilter {
    const NODE: &'static str = "range filter";

    pub fn new(field: impl FieldName, bounds: RangeBounds) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            bounds,
        })
    }

    pub fn with_bounds(mut self, bounds: RangeBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn bounds(&self) -> &RangeBounds {
        &self.bounds
    }
}
