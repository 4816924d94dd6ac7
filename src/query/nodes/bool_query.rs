//! Boolean query - combines query clauses with must / should / must_not

use crate::error::{DslError, Result};
use crate::query::Query;
use crate::types::finite;

/// Boolean query combining multiple clauses
///
/// - `must`: all clauses must match
/// - `should`: at least `minimum_number_should_match` clauses should match
/// - `must_not`: no clause may match
///
/// Clause order is preserved in the rendered arrays. Finalize with
/// [`BoolQuery::build`], which rejects a query without clauses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BoolQuery {
    pub(crate) must: Vec<Query>,
    pub(crate) should: Vec<Query>,
    pub(crate) must_not: Vec<Query>,
    pub(crate) minimum_number_should_match: Option<u32>,
    pub(crate) boost: Option<f64>,
}

impl BoolQuery {
    const NODE: &'static str = "bool query";

    /// Create a new empty boolean query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a must clause
    pub fn must(mut self, query: impl Into<Query>) -> Self {
        self.must.push(query.into());
        self
    }

    /// Add a should clause
    pub fn should(mut self, query: impl Into<Query>) -> Self {
        self.should.push(query.into());
        self
    }

    /// Add a must_not clause
    pub fn must_not(mut self, query: impl Into<Query>) -> Self {
        self.must_not.push(query.into());
        self
    }

    pub fn with_minimum_number_should_match(mut self, count: u32) -> Self {
        self.minimum_number_should_match = Some(count);
        self
    }

    /// Set boost factor
    pub fn with_boost(mut self, boost: f64) -> Result<Self> {
        self.boost = Some(finite(Self::NODE, "boost", boost)?);
        Ok(self)
    }

    /// Check if this is an empty query
    pub fn is_empty(&self) -> bool {
        self.must.is_empty() && self.should.is_empty() && self.must_not.is_empty()
    }

    /// Get total number of clauses
    pub fn clause_count(&self) -> usize {
        self.must.len() + self.should.len() + self.must_not.len()
    }

    /// Finalize into a query node
    pub fn build(self) -> Result<Query> {
        if self.is_empty() {
            return Err(DslError::invalid(
                Self::NODE,
                "clauses",
                "a bool query needs at least one clause",
            ));
        }
        Ok(Query::Bool(BoolClauses(self)))
    }
}

/// A bool query with at least one clause, produced by [`BoolQuery::build`]
#[derive(Clone, Debug, PartialEq)]
pub struct BoolClauses(pub(crate) BoolQuery);

impl BoolClauses {
    pub fn query(&self) -> &BoolQuery {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::nodes::{MatchAllQuery, TermQuery};

    #[test]
    fn test_bool_query_creation() {
        let query = BoolQuery::new()
            .must(TermQuery::new("tags", "rust").unwrap())
            .should(TermQuery::new("tags", "tutorial").unwrap())
            .must_not(TermQuery::new("status", "draft").unwrap());

        assert_eq!(query.must.len(), 1);
        assert_eq!(query.should.len(), 1);
        assert_eq!(query.must_not.len(), 1);
        assert_eq!(query.clause_count(), 3);
        assert!(query.build().is_ok());
    }

    #[test]
    fn test_bool_query_empty_is_rejected() {
        let query = BoolQuery::new().with_minimum_number_should_match(1);
        assert!(query.is_empty());

        let err = query.build().unwrap_err();
        assert_eq!(err.node(), Some("bool query"));
    }

    #[test]
    fn test_built_bool_exposes_clauses() {
        let query = BoolQuery::new()
            .must(MatchAllQuery::new())
            .must_not(TermQuery::new("status", "draft").unwrap())
            .build()
            .unwrap();
        match query {
            Query::Bool(clauses) => assert_eq!(clauses.query().clause_count(), 2),
            other => panic!("expected bool query, got {other:?}"),
        }
    }

    #[test]
    fn test_bool_query_keeps_clause_order() {
        let query = BoolQuery::new()
            .should(TermQuery::new("tags", "a").unwrap())
            .should(MatchAllQuery::new())
            .should(TermQuery::new("tags", "b").unwrap());

        let kinds: Vec<&str> = query.should.iter().map(Query::kind).collect();
        assert_eq!(kinds, vec!["term", "match_all", "term"]);
    }
}
