//! Range facet - document counts per value range

use crate::error::{DslError, Result};
use crate::schema::FieldName;
use crate::types::FacetRange;

/// Which fields a range facet reads
#[derive(Clone, Debug, PartialEq)]
pub enum RangeFacetField {
    /// Bucket and aggregate the same field
    Field(String),
    /// Bucket on `key_field`, aggregate `value_field`
    KeyValue { key_field: String, value_field: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RangeFacet {
    pub(crate) field: RangeFacetField,
    pub(crate) ranges: Vec<FacetRange>,
}

impl RangeFacet {
    const NODE: &'static str = "range facet";

    /// Create a range facet over one field; at least one range is required
    pub fn new(field: impl FieldName, ranges: impl IntoIterator<Item = FacetRange>) -> Result<Self> {
        let field = RangeFacetField::Field(field.into_field_name(Self::NODE)?);
        Self::with_field(field, ranges)
    }

    /// Create a range facet bucketing on one field and aggregating another
    pub fn key_value(
        key_field: impl FieldName,
        value_field: impl FieldName,
        ranges: impl IntoIterator<Item = FacetRange>,
    ) -> Result<Self> {
        let field = RangeFacetField::KeyValue {
            key_field: key_field.into_field_name(Self::NODE)?,
            value_field: value_field.into_field_name(Self::NODE)?,
        };
        Self::with_field(field, ranges)
    }

    fn with_field(field: RangeFacetField, ranges: impl IntoIterator<Item = FacetRange>) -> Result<Self> {
        let ranges: Vec<FacetRange> = ranges.into_iter().collect();
        if ranges.is_empty() {
            return Err(DslError::invalid(Self::NODE, "ranges", "at least one range is required"));
        }
        Ok(Self { field, ranges })
    }

    /// Append a range after the existing ones
    pub fn with_range(mut self, range: FacetRange) -> Self {
        self.ranges.push(range);
        self
    }

    pub fn ranges(&self) -> &[FacetRange] {
        &self.ranges
    }
}
