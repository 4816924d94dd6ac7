//! Query nodes
//!
//! Query builders for the search request DSL:
//! - Match all, term and range queries
//! - Fuzzy queries on strings and numbers
//! - Analyzed text queries (boolean, phrase, phrase prefix)
//! - Boolean queries (must, should, must_not)
//!
//! # Example
//!
//! ```json
//! {
//!   "query": {
//!     "bool": {
//!       "must": [
//!         { "text": { "content": { "query": "rust programming" } } }
//!       ],
//!       "must_not": [
//!         { "term": { "status": "draft" } }
//!       ]
//!     }
//!   }
//! }
//! ```

pub mod nodes;

pub use nodes::{
    BoolClauses, BoolQuery, FuzzyNumericQuery, FuzzyQuery, MatchAllQuery, RangeQuery, TermQuery,
    TextQuery, TextQueryType,
};

/// A query node, one variant per query kind
#[derive(Clone, Debug, PartialEq)]
pub enum Query {
    MatchAll(MatchAllQuery),
    Term(TermQuery),
    Fuzzy(FuzzyQuery),
    FuzzyNumeric(FuzzyNumericQuery),
    Text(TextQuery),
    Range(RangeQuery),
    Bool(BoolClauses),
}

impl Query {
    /// Query that matches every document
    pub fn match_all() -> Self {
        Query::MatchAll(MatchAllQuery::new())
    }

    /// Kind name, as used in error messages and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Query::MatchAll(_) => "match_all",
            Query::Term(_) => "term",
            Query::Fuzzy(_) => "fuzzy",
            Query::FuzzyNumeric(_) => "fuzzy_numeric",
            Query::Text(_) => "text",
            Query::Range(_) => "range",
            Query::Bool(_) => "bool",
        }
    }

    /// Whether this query combines other queries
    pub fn is_compound(&self) -> bool {
        matches!(self, Query::Bool(_))
    }
}

impl From<MatchAllQuery> for Query {
    fn from(query: MatchAllQuery) -> Self {
        Query::MatchAll(query)
    }
}

impl From<TermQuery> for Query {
    fn from(query: TermQuery) -> Self {
        Query::Term(query)
    }
}

impl From<FuzzyQuery> for Query {
    fn from(query: FuzzyQuery) -> Self {
        Query::Fuzzy(query)
    }
}

impl From<FuzzyNumericQuery> for Query {
    fn from(query: FuzzyNumericQuery) -> Self {
        Query::FuzzyNumeric(query)
    }
}

impl From<TextQuery> for Query {
    fn from(query: TextQuery) -> Self {
        Query::Text(query)
    }
}

impl From<RangeQuery> for Query {
    fn from(query: RangeQuery) -> Self {
        Query::Range(query)
    }
}
