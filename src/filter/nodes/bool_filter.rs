//! Boolean filter - combines filter clauses with must / should / must_not

use crate::error::{DslError, Result};
use crate::filter::{Filter, FilterKind};

/// Boolean filter; finalize with [`BoolFilter::build`]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoolFilter {
    pub(crate) must: Vec<Filter>,
    pub(crate) should: Vec<Filter>,
    pub(crate) must_not: Vec<Filter>,
}

impl BoolFilter {
    const NODE: &'static str = "bool filter";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn must(mut self, filter: impl Into<Filter>) -> Self {
        self.must.push(filter.into());
        self
    }

    pub fn should(mut self, filter: impl Into<Filter>) -> Self {
        self.should.push(filter.into());
        self
    }

    pub fn must_not(mut self, filter: impl Into<Filter>) -> Self {
        self.must_not.push(filter.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.should.is_empty() && self.must_not.is_empty()
    }

    pub fn clause_count(&self) -> usize {
        self.must.len() + self.should.len() + self.must_not.len()
    }

    /// Finalize into a filter node; a bool filter without clauses is rejected
    pub fn build(self) -> Result<Filter> {
        if self.is_empty() {
            return Err(DslError::invalid(
                Self::NODE,
                "clauses",
                "a bool filter needs at least one clause",
            ));
        }
        Ok(Filter::from_kind(FilterKind::Bool(self)))
    }
}
