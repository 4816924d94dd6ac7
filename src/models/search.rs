use indexmap::IndexMap;
use serde_json::value::RawValue;
use serde_json::Value;

use super::sort::SortField;
use crate::error::{DslError, Result};
use crate::facet::Facet;
use crate::filter::Filter;
use crate::query::Query;
use crate::schema::FieldName;
use crate::types::{finite, non_empty};

/// Content of the `query` or `filter` slot of a request
#[derive(Clone, Debug, PartialEq)]
pub enum Slot<T> {
    /// Rendered from builder nodes
    Built(T),
    /// Inserted verbatim
    Raw(RawJson),
}

/// A raw JSON override, kept exactly as written
///
/// The text is what `Renderer::to_string` emits; the parsed value backs
/// `Renderer::render`. Numbers beyond `f64` precision survive only in the text.
#[derive(Clone, Debug)]
pub struct RawJson {
    text: Box<RawValue>,
    value: Value,
}

impl RawJson {
    fn parse(slot: &'static str, json: &str) -> Result<Self> {
        let invalid = |source| DslError::InvalidRawJson { slot, source };
        let text: Box<RawValue> = serde_json::from_str(json).map_err(invalid)?;
        let value = serde_json::from_str(text.get()).map_err(invalid)?;
        Ok(Self { text, value })
    }

    fn from_value(value: Value) -> Result<Self> {
        let text = serde_json::value::to_raw_value(&value)?;
        Ok(Self { text, value })
    }

    /// The override text, without surrounding whitespace
    pub fn as_str(&self) -> &str {
        self.text.get()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub(crate) fn raw_value(&self) -> &RawValue {
        &self.text
    }
}

impl PartialEq for RawJson {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

/// Search request envelope
///
/// Holds pagination, one query, any number of filters and named facets.
/// Every setter consumes the request and returns it, so a finished request
/// is an immutable value that renders the same way every time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchRequest {
    pub(crate) from: Option<u64>,
    pub(crate) size: Option<u64>,
    pub(crate) explain: Option<bool>,
    pub(crate) min_score: Option<f64>,
    pub(crate) fields: Vec<String>,
    pub(crate) sort: Vec<SortField>,
    pub(crate) query: Option<Slot<Query>>,
    pub(crate) filter: Option<Slot<Vec<Filter>>>,
    pub(crate) facets: IndexMap<String, Facet>,
}

impl SearchRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offset of the first hit
    pub fn with_from(mut self, from: u64) -> Self {
        self.from = Some(from);
        self
    }

    /// Number of hits to return
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = Some(explain);
        self
    }

    pub fn with_min_score(mut self, min_score: f64) -> Result<Self> {
        self.min_score = Some(finite("search request", "min_score", min_score)?);
        Ok(self)
    }

    /// Append a stored field to return
    pub fn with_field(mut self, field: impl FieldName) -> Result<Self> {
        self.fields.push(field.into_field_name("search request")?);
        Ok(self)
    }

    /// Append a sort criterion
    pub fn with_sort(mut self, sort: SortField) -> Self {
        self.sort.push(sort);
        self
    }

    /// Set the query; replaces an earlier query or raw query
    pub fn with_query(mut self, query: impl Into<Query>) -> Self {
        self.query = Some(Slot::Built(query.into()));
        self
    }

    /// Set the query from raw JSON; replaces an earlier query or raw query
    ///
    /// The text must be strict JSON and is emitted as written.
    pub fn with_query_raw_json(mut self, json: &str) -> Result<Self> {
        self.query = Some(Slot::Raw(RawJson::parse("query", json)?));
        Ok(self)
    }

    /// Set the query from an already parsed JSON value
    pub fn with_query_raw_value(mut self, value: Value) -> Result<Self> {
        self.query = Some(Slot::Raw(RawJson::from_value(value)?));
        Ok(self)
    }

    /// Add a filter; a raw filter set earlier is discarded
    pub fn with_filter(mut self, filter: impl Into<Filter>) -> Self {
        match &mut self.filter {
            Some(Slot::Built(filters)) => filters.push(filter.into()),
            _ => self.filter = Some(Slot::Built(vec![filter.into()])),
        }
        self
    }

    /// Set the filter from raw JSON; discards filters added earlier
    pub fn with_filter_raw_json(mut self, json: &str) -> Result<Self> {
        self.filter = Some(Slot::Raw(RawJson::parse("filter", json)?));
        Ok(self)
    }

    /// Set the filter from an already parsed JSON value
    pub fn with_filter_raw_value(mut self, value: Value) -> Result<Self> {
        self.filter = Some(Slot::Raw(RawJson::from_value(value)?));
        Ok(self)
    }

    /// Add a named facet; a facet with the same name is replaced in place
    pub fn with_facet(mut self, name: impl Into<String>, facet: impl Into<Facet>) -> Result<Self> {
        let name = non_empty("search request", "facet name", name)?;
        self.facets.insert(name, facet.into());
        Ok(self)
    }

    pub fn from_offset(&self) -> Option<u64> {
        self.from
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn query(&self) -> Option<&Slot<Query>> {
        self.query.as_ref()
    }

    pub fn filter(&self) -> Option<&Slot<Vec<Filter>>> {
        self.filter.as_ref()
    }

    pub fn facet(&self, name: &str) -> Option<&Facet> {
        self.facets.get(name)
    }

    pub fn facet_names(&self) -> impl Iterator<Item = &str> {
        self.facets.keys().map(String::as_str)
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }

    /// Number of slots filled from raw JSON
    pub fn raw_override_count(&self) -> usize {
        let query = matches!(self.query, Some(Slot::Raw(_)));
        let filter = matches!(self.filter, Some(Slot::Raw(_)));
        usize::from(query) + usize::from(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::TermsFacet;
    use crate::filter::MissingFilter;

    #[test]
    fn test_search_request_default() {
        let req = SearchRequest::new();
        assert_eq!(req.from_offset(), None);
        assert_eq!(req.size(), None);
        assert!(req.query().is_none());
        assert!(req.filter().is_none());
        assert_eq!(req.facet_count(), 0);
    }

    #[test]
    fn test_raw_query_replaces_built_query() {
        let req = SearchRequest::new()
            .with_query(Query::match_all())
            .with_query_raw_json(r#"{ "raw": "query" }"#)
            .unwrap();
        assert!(matches!(req.query(), Some(Slot::Raw(_))));
        assert_eq!(req.raw_override_count(), 1);

        let req = req.with_query(Query::match_all());
        assert!(matches!(req.query(), Some(Slot::Built(_))));
        assert_eq!(req.raw_override_count(), 0);
    }

    #[test]
    fn test_invalid_raw_json_rejected() {
        let err = SearchRequest::new().with_filter_raw_json("{ raw: ").unwrap_err();
        assert!(matches!(err, DslError::InvalidRawJson { slot: "filter", .. }));
    }

    #[test]
    fn test_unquoted_keys_rejected() {
        let err = SearchRequest::new().with_query_raw_json(r#"{ raw : "query"}"#).unwrap_err();
        assert!(matches!(err, DslError::InvalidRawJson { slot: "query", .. }));
        assert_eq!(err.node(), Some("query"));
    }

    #[test]
    fn test_raw_json_keeps_text() {
        let req = SearchRequest::new()
            .with_filter_raw_json("  {\"x\": 1.10}\n")
            .unwrap();
        match req.filter() {
            Some(Slot::Raw(raw)) => {
                assert_eq!(raw.as_str(), r#"{"x": 1.10}"#);
                assert_eq!(raw.value()["x"], 1.1);
            }
            other => panic!("expected raw filter, got {other:?}"),
        }

        let req = SearchRequest::new()
            .with_query_raw_value(serde_json::json!({ "raw": "query" }))
            .unwrap();
        match req.query() {
            Some(Slot::Raw(raw)) => assert_eq!(raw.as_str(), r#"{"raw":"query"}"#),
            other => panic!("expected raw query, got {other:?}"),
        }
    }

    #[test]
    fn test_filters_accumulate_until_raw() {
        let req = SearchRequest::new()
            .with_filter(Filter::match_all())
            .with_filter(MissingFilter::new("loc").unwrap());
        match req.filter() {
            Some(Slot::Built(filters)) => assert_eq!(filters.len(), 2),
            other => panic!("expected built filters, got {other:?}"),
        }

        let req = req
            .with_filter_raw_json(r#"{ "term": { "a": 1 } }"#)
            .unwrap()
            .with_filter(Filter::match_all());
        match req.filter() {
            Some(Slot::Built(filters)) => assert_eq!(filters.len(), 1),
            other => panic!("expected built filters, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_facet_name_replaces_in_place() {
        let req = SearchRequest::new()
            .with_facet("tags", TermsFacet::new("tags").unwrap())
            .unwrap()
            .with_facet("authors", TermsFacet::new("author").unwrap())
            .unwrap()
            .with_facet("tags", TermsFacet::new("labels").unwrap())
            .unwrap();

        let names: Vec<&str> = req.facet_names().collect();
        assert_eq!(names, vec!["tags", "authors"]);
        assert_eq!(req.facet_count(), 2);
        assert!(SearchRequest::new().with_facet("", Facet::query(Query::match_all())).is_err());
    }

    #[test]
    fn test_pagination_and_options() {
        let req = SearchRequest::new()
            .with_from(0)
            .with_size(10)
            .with_explain(true)
            .with_min_score(0.5)
            .unwrap();
        assert_eq!(req.from_offset(), Some(0));
        assert_eq!(req.size(), Some(10));
        assert!(SearchRequest::new().with_min_score(f64::NAN).is_err());
    }
}
