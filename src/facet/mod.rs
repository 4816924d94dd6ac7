//! Facet nodes
//!
//! Facets summarize the documents matched by a request:
//! - Terms, range, histogram and statistical facets over fields
//! - Filter and query facets counting matches
//! - Geo distance facets bucketing by distance from a pin
//!
//! Every facet can be made global, restricted with a facet filter or
//! scoped to a nested path.

pub mod nodes;

pub use nodes::{
    GeoDistanceFacet, HistogramFacet, RangeFacet, RangeFacetField, StatisticalFacet, TermsFacet,
    TermsOrder, ValueSource,
};

use crate::error::Result;
use crate::filter::Filter;
use crate::query::Query;
use crate::schema::FieldName;

/// The kind of a facet, one variant per facet kind
#[derive(Clone, Debug, PartialEq)]
pub enum FacetKind {
    Terms(TermsFacet),
    Range(RangeFacet),
    Histogram(HistogramFacet),
    Statistical(StatisticalFacet),
    Filter(Filter),
    Query(Query),
    GeoDistance(GeoDistanceFacet),
}

/// A facet with its scope metadata
#[derive(Clone, Debug, PartialEq)]
pub struct Facet {
    pub(crate) kind: FacetKind,
    pub(crate) global: Option<bool>,
    pub(crate) facet_filter: Option<Filter>,
    pub(crate) nested: Option<String>,
}

impl Facet {
    fn from_kind(kind: FacetKind) -> Self {
        Self {
            kind,
            global: None,
            facet_filter: None,
            nested: None,
        }
    }

    /// Count documents matching a filter
    pub fn filter(filter: impl Into<Filter>) -> Self {
        Self::from_kind(FacetKind::Filter(filter.into()))
    }

    /// Count documents matching a query
    pub fn query(query: impl Into<Query>) -> Self {
        Self::from_kind(FacetKind::Query(query.into()))
    }

    /// Compute over all documents, ignoring the request query
    pub fn with_global(mut self, global: bool) -> Self {
        self.global = Some(global);
        self
    }

    /// Restrict the documents the facet sees
    pub fn with_facet_filter(mut self, filter: impl Into<Filter>) -> Self {
        self.facet_filter = Some(filter.into());
        self
    }

    /// Compute within a nested object path
    pub fn with_nested(mut self, path: impl FieldName) -> Result<Self> {
        self.nested = Some(path.into_field_name("facet")?);
        Ok(self)
    }

    pub fn kind(&self) -> &FacetKind {
        &self.kind
    }

    /// Kind name, as rendered
    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            FacetKind::Terms(_) => "terms",
            FacetKind::Range(_) => "range",
            FacetKind::Histogram(_) => "histogram",
            FacetKind::Statistical(_) => "statistical",
            FacetKind::Filter(_) => "filter",
            FacetKind::Query(_) => "query",
            FacetKind::GeoDistance(_) => "geo_distance",
        }
    }
}

macro_rules! impl_from_node {
    ($($node:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$node> for Facet {
                fn from(node: $node) -> Self {
                    Self::from_kind(FacetKind::$variant(node))
                }
            }
        )*
    };
}

impl_from_node! {
    TermsFacet => Terms,
    RangeFacet => Range,
    HistogramFacet => Histogram,
    StatisticalFacet => Statistical,
    GeoDistanceFacet => GeoDistance,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TermFilter;

    #[test]
    fn test_facet_metadata() {
        let facet = Facet::from(TermsFacet::new("tags").unwrap())
            .with_global(true)
            .with_facet_filter(TermFilter::new("status", "published").unwrap())
            .with_nested("comments")
            .unwrap();

        assert_eq!(facet.kind_name(), "terms");
        assert_eq!(facet.global, Some(true));
        assert!(facet.facet_filter.is_some());
        assert_eq!(facet.nested.as_deref(), Some("comments"));
    }

    #[test]
    fn test_filter_and_query_facets() {
        assert_eq!(Facet::filter(Filter::match_all()).kind_name(), "filter");
        assert_eq!(Facet::query(Query::match_all()).kind_name(), "query");
    }
}
