//! Fuzzy query - matches terms similar to a string value

use crate::error::Result;
use crate::schema::FieldName;
use crate::types::{finite, non_empty};

/// Query that matches terms within an edit distance of a string value
#[derive(Clone, Debug, PartialEq)]
pub struct FuzzyQuery {
    pub(crate) field: String,
    pub(crate) value: String,
    pub(crate) boost: Option<f64>,
    pub(crate) min_similarity: Option<f64>,
    pub(crate) prefix_length: Option<u32>,
    pub(crate) max_expansions: Option<u32>,
}

impl FuzzyQuery {
    const NODE: &'static str = "fuzzy query";

    /// Create a new fuzzy query
    pub fn new(field: impl FieldName, value: impl Into<String>) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            value: non_empty(Self::NODE, "value", value)?,
            boost: None,
            min_similarity: None,
            prefix_length: None,
            max_expansions: None,
        })
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Result<Self> {
        self.boost = Some(finite(Self::NODE, "boost", boost)?);
        Ok(self)
    }

    /// Set the minimum similarity (0.0 - 1.0, or an edit distance when >= 1)
    pub fn with_min_similarity(mut self, min_similarity: f64) -> Result<Self> {
        self.min_similarity = Some(finite(Self::NODE, "min_similarity", min_similarity)?);
        Ok(self)
    }

    /// Set the number of initial characters that must match exactly
    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    /// Set the maximum number of terms the query expands to
    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}
