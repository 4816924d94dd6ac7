//! Filter nodes
//!
//! Non-scoring filters for the search request DSL:
//! - Field presence (missing, exists)
//! - Exact values (term, terms) and ranges
//! - Geo distance around a pin
//! - Combinators (and, or, not, bool) and wrapped queries
//!
//! Every filter can carry `_cache` and `_name` metadata.
//!
//! # Example
//!
//! ```json
//! {
//!   "filter": {
//!     "and": {
//!       "filters": [
//!         { "match_all": {} },
//!         { "missing": { "field": "loc" } }
//!       ],
//!       "_cache": true,
//!       "_name": "and_filter"
//!     }
//!   }
//! }
//! ```

pub mod nodes;

pub use nodes::{
    BoolFilter, ExistsFilter, GeoDistanceFilter, MissingFilter, RangeFilter, TermFilter,
    TermsExecution, TermsFilter,
};

use crate::error::{DslError, Result};
use crate::query::Query;
use crate::types::non_empty;

/// The kind of a filter node, one variant per filter kind
///
/// Read through [`Filter::kind`]; filters are only built through their
/// constructors, so a combinator always has at least one child.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterKind {
    MatchAll,
    Missing(MissingFilter),
    Exists(ExistsFilter),
    Term(TermFilter),
    Terms(TermsFilter),
    Range(RangeFilter),
    GeoDistance(GeoDistanceFilter),
    Query(Box<Query>),
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),
    Bool(BoolFilter),
}

/// A filter node with its optional cache and name metadata
#[derive(Clone, Debug, PartialEq)]
pub struct Filter {
    pub(crate) kind: FilterKind,
    pub(crate) cache: Option<bool>,
    pub(crate) name: Option<String>,
}

impl Filter {
    pub(crate) fn from_kind(kind: FilterKind) -> Self {
        Self {
            kind,
            cache: None,
            name: None,
        }
    }

    /// Filter that matches every document
    pub fn match_all() -> Self {
        Self::from_kind(FilterKind::MatchAll)
    }

    /// All children must match; children render in the given order
    pub fn and<F: Into<Filter>>(filters: impl IntoIterator<Item = F>) -> Result<Self> {
        Ok(Self::from_kind(FilterKind::And(Self::collect_children("and filter", filters)?)))
    }

    /// At least one child must match; children render in the given order
    pub fn or<F: Into<Filter>>(filters: impl IntoIterator<Item = F>) -> Result<Self> {
        Ok(Self::from_kind(FilterKind::Or(Self::collect_children("or filter", filters)?)))
    }

    /// The child must not match
    pub fn not(filter: impl Into<Filter>) -> Self {
        Self::from_kind(FilterKind::Not(Box::new(filter.into())))
    }

    /// Use a query as a filter
    pub fn query(query: impl Into<Query>) -> Self {
        Self::from_kind(FilterKind::Query(Box::new(query.into())))
    }

    /// Set the `_cache` flag
    pub fn with_cache(mut self, cache: bool) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set the `_name` tag
    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self> {
        self.name = Some(non_empty(self.kind_name(), "_name", name)?);
        Ok(self)
    }

    pub fn kind(&self) -> &FilterKind {
        &self.kind
    }

    pub fn cache(&self) -> Option<bool> {
        self.cache
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Kind name, as rendered
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            FilterKind::MatchAll => "match_all",
            FilterKind::Missing(_) => "missing",
            FilterKind::Exists(_) => "exists",
            FilterKind::Term(_) => "term",
            FilterKind::Terms(_) => "terms",
            FilterKind::Range(_) => "range",
            FilterKind::GeoDistance(_) => "geo_distance",
            FilterKind::Query(_) => "query",
            FilterKind::And(_) => "and",
            FilterKind::Or(_) => "or",
            FilterKind::Not(_) => "not",
            FilterKind::Bool(_) => "bool",
        }
    }

    /// Direct children of a combinator, in render order
    pub fn children(&self) -> Vec<&Filter> {
        match &self.kind {
            FilterKind::And(filters) | FilterKind::Or(filters) => filters.iter().collect(),
            FilterKind::Not(filter) => vec![filter.as_ref()],
            FilterKind::Bool(b) => b.must.iter().chain(&b.should).chain(&b.must_not).collect(),
            _ => Vec::new(),
        }
    }

    fn collect_children<F: Into<Filter>>(
        node: &'static str,
        filters: impl IntoIterator<Item = F>,
    ) -> Result<Vec<Filter>> {
        let filters: Vec<Filter> = filters.into_iter().map(Into::into).collect();
        if filters.is_empty() {
            return Err(DslError::invalid(node, "filters", "at least one filter is required"));
        }
        Ok(filters)
    }
}

macro_rules! impl_from_node {
    ($($node:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Filter {
                fn from(node: $node) -> Self {
                    Self::from_kind(FilterKind::$variant(node))
                }
            }
        )*
    };
}

impl_from_node! {
    MissingFilter => Missing,
    ExistsFilter => Exists,
    TermFilter => Term,
    TermsFilter => Terms,
    RangeFilter => Range,
    GeoDistanceFilter => GeoDistance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and_filter_keeps_child_order() {
        let filter = Filter::and([
            Filter::match_all(),
            MissingFilter::new("loc").unwrap().into(),
            ExistsFilter::new("name").unwrap().into(),
        ])
        .unwrap();

        let kinds: Vec<&str> = filter.children().iter().map(|f| f.kind_name()).collect();
        assert_eq!(kinds, vec!["match_all", "missing", "exists"]);
    }

    #[test]
    fn test_empty_combinators_rejected() {
        let err = Filter::and(Vec::<Filter>::new()).unwrap_err();
        assert_eq!(err.node(), Some("and filter"));

        let err = Filter::or(Vec::<Filter>::new()).unwrap_err();
        assert_eq!(err.node(), Some("or filter"));
    }

    #[test]
    fn test_filter_metadata() {
        let filter = Filter::not(Filter::match_all())
            .with_cache(true)
            .with_name("not_filter")
            .unwrap();
        assert_eq!(filter.cache(), Some(true));
        assert_eq!(filter.name(), Some("not_filter"));
        assert_eq!(filter.children().len(), 1);

        let err = Filter::match_all().with_name("").unwrap_err();
        assert_eq!(err.node(), Some("match_all"));
    }

    #[test]
    fn test_metadata_last_write_wins() {
        let filter = Filter::match_all()
            .with_cache(true)
            .with_cache(false)
            .with_name("a")
            .unwrap()
            .with_name("b")
            .unwrap();
        assert_eq!(filter.cache(), Some(false));
        assert_eq!(filter.name(), Some("b"));
    }
}
