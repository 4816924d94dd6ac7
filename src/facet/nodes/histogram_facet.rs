//! Histogram facet - document counts per fixed-width interval

use crate::error::{DslError, Result};
use crate::schema::FieldName;

#[derive(Clone, Debug, PartialEq)]
pub struct HistogramFacet {
    pub(crate) field: String,
    pub(crate) interval: u64,
}

impl HistogramFacet {
    const NODE: &'static str = "histogram facet";

    pub fn new(field: impl FieldName, interval: u64) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            interval: Self::checked_interval(interval)?,
        })
    }

    pub fn with_interval(mut self, interval: u64) -> Result<Self> {
        self.interval = Self::checked_interval(interval)?;
        Ok(self)
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn interval(&self) -> u64 {
        self.interval
    }

    fn checked_interval(interval: u64) -> Result<u64> {
        if interval == 0 {
            return Err(DslError::invalid(Self::NODE, "interval", "must be greater than zero"));
        }
        Ok(interval)
    }
}

/// Statistical facet - count, min, max, mean and variance of a numeric field
#[derive(Clone, Debug, PartialEq)]
pub struct StatisticalFacet {
    pub(crate) field: String,
}

impl StatisticalFacet {
    pub fn new(field: impl FieldName) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name("statistical facet")?,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}
