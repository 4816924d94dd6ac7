//! Document rendering
//!
//! Turns a finished [`SearchRequest`] into the JSON document the search
//! engine expects. Each node family is rendered by one function with a
//! `match` over its kinds; unset options never produce a key.

mod facet;
mod filter;
mod fragment;
mod query;

pub use facet::render_facet;
pub use filter::render_filter;
pub use query::render_query;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use self::fragment::Fragment;
use crate::config::{FilterJoin, RenderSettings};
use crate::error::Result;
use crate::filter::Filter;
use crate::metrics::RenderMetrics;
use crate::models::{RawJson, SearchRequest, Slot, SortField};

/// Renders search requests with a fixed set of settings
#[derive(Clone, Default)]
pub struct Renderer {
    settings: RenderSettings,
    metrics: Option<RenderMetrics>,
}

impl Renderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            metrics: None,
        }
    }

    /// Record every render in `metrics`
    pub fn with_metrics(mut self, metrics: RenderMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Render the request document
    ///
    /// Top-level keys appear in the order `from`, `size`, `explain`,
    /// `min_score`, `fields`, `sort`, `query`, `filter`, `facets`, each only
    /// when set. Raw overrides appear as their parsed value; use
    /// [`Renderer::to_string`] to emit them byte for byte.
    pub fn render(&self, request: &SearchRequest) -> Value {
        let entries = self.entries(request);
        self.observe(request);
        Value::Object(
            entries
                .into_iter()
                .map(|(key, entry)| (key, entry.into_value()))
                .collect(),
        )
    }

    /// Render to a JSON string, pretty-printed when the settings ask for it
    pub fn to_string(&self, request: &SearchRequest) -> Result<String> {
        let document = Wire(self.entries(request));
        self.observe(request);
        let json = if self.settings.pretty() {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        Ok(json)
    }

    /// Render to JSON bytes, ready to be sent as a request body
    pub fn to_vec(&self, request: &SearchRequest) -> Result<Vec<u8>> {
        let document = Wire(self.entries(request));
        self.observe(request);
        let bytes = if self.settings.pretty() {
            serde_json::to_vec_pretty(&document)?
        } else {
            serde_json::to_vec(&document)?
        };
        Ok(bytes)
    }

    fn entries<'r>(&self, request: &'r SearchRequest) -> Vec<(String, Entry<'r>)> {
        let mut entries: Vec<(String, Entry<'r>)> = Fragment::new()
            .opt("from", request.from)
            .opt("size", request.size)
            .opt("explain", request.explain)
            .opt_f64("min_score", request.min_score)
            .non_empty(
                "fields",
                request.fields.iter().map(|f| Value::from(f.as_str())).collect(),
            )
            .non_empty("sort", request.sort.iter().map(render_sort).collect())
            .into_map()
            .into_iter()
            .map(|(key, value)| (key, Entry::Built(value)))
            .collect();

        if let Some(slot) = &request.query {
            let entry = match slot {
                Slot::Raw(raw) => Entry::Raw(raw),
                Slot::Built(query) => Entry::Built(render_query(query)),
            };
            entries.push(("query".to_string(), entry));
        }

        if let Some(slot) = &request.filter {
            let entry = match slot {
                Slot::Raw(raw) => Entry::Raw(raw),
                Slot::Built(filters) => Entry::Built(self.join_filters(filters)),
            };
            entries.push(("filter".to_string(), entry));
        }

        if !request.facets.is_empty() {
            let mut map = Map::with_capacity(request.facets.len());
            for (name, facet) in &request.facets {
                trace!(facet = %name, kind = facet.kind_name(), "rendering facet");
                map.insert(name.clone(), render_facet(facet, &self.settings));
            }
            entries.push(("facets".to_string(), Entry::Built(Value::Object(map))));
        }

        entries
    }

    fn observe(&self, request: &SearchRequest) {
        let raw_overrides = request.raw_override_count();
        debug!(
            has_query = request.query.is_some(),
            has_filter = request.filter.is_some(),
            facets = request.facet_count(),
            raw_overrides,
            "rendered search request"
        );

        if let Some(metrics) = &self.metrics {
            metrics.record_request(raw_overrides, request.facet_count());
            if let Some(Slot::Built(filters)) = &request.filter {
                metrics.record_nodes("filter", filters.len());
            }
            if let Some(Slot::Built(_)) = &request.query {
                metrics.record_nodes("query", 1);
            }
            metrics.record_nodes("facet", request.facet_count());
        }
    }

    fn join_filters(&self, filters: &[Filter]) -> Value {
        if let [filter] = filters {
            return render_filter(filter);
        }
        let key = match self.settings.combine_filters() {
            FilterJoin::And => "and",
            FilterJoin::Or => "or",
        };
        Fragment::new()
            .push("filters", filters.iter().map(render_filter).collect::<Vec<_>>())
            .wrap(key)
    }
}

/// Top-level value of the document
enum Entry<'r> {
    Built(Value),
    Raw(&'r RawJson),
}

impl Entry<'_> {
    fn into_value(self) -> Value {
        match self {
            Entry::Built(value) => value,
            Entry::Raw(raw) => raw.value().clone(),
        }
    }
}

impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Entry::Built(value) => value.serialize(serializer),
            Entry::Raw(raw) => raw.raw_value().serialize(serializer),
        }
    }
}

/// Document whose raw overrides are written as their original text
struct Wire<'r>(Vec<(String, Entry<'r>)>);

impl Serialize for Wire<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, entry) in &self.0 {
            map.serialize_entry(key, entry)?;
        }
        map.end()
    }
}

fn render_sort(sort: &SortField) -> Value {
    match sort.order {
        Some(order) => Fragment::new().push(sort.field.as_str(), order.as_str()).into_value(),
        None => Value::from(sort.field.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::TermsFacet;
    use crate::filter::MissingFilter;
    use crate::query::Query;
    use serde_json::json;

    #[test]
    fn test_empty_request_renders_empty_object() {
        let renderer = Renderer::default();
        assert_eq!(renderer.render(&SearchRequest::new()), json!({}));
    }

    #[test]
    fn test_top_level_key_order() {
        let request = SearchRequest::new()
            .with_facet("tags", TermsFacet::new("tags").unwrap())
            .unwrap()
            .with_filter(Filter::match_all())
            .with_query(Query::match_all())
            .with_sort(SortField::descending("date").unwrap())
            .with_field("title")
            .unwrap()
            .with_min_score(0.5)
            .unwrap()
            .with_explain(true)
            .with_size(10)
            .with_from(0);

        let rendered = Renderer::default().render(&request);
        let keys: Vec<&String> = rendered.as_object().unwrap().keys().collect();
        assert_eq!(
            keys,
            vec!["from", "size", "explain", "min_score", "fields", "sort", "query", "filter", "facets"]
        );
        assert_eq!(rendered["sort"], json!([{ "date": "desc" }]));
    }

    #[test]
    fn test_multiple_filters_are_joined() {
        let request = SearchRequest::new()
            .with_filter(Filter::match_all())
            .with_filter(MissingFilter::new("loc").unwrap());

        let expected_filters = json!([{ "match_all": {} }, { "missing": { "field": "loc" } }]);
        let rendered = Renderer::default().render(&request);
        assert_eq!(rendered["filter"], json!({ "and": { "filters": expected_filters.clone() } }));

        let renderer = Renderer::new(RenderSettings::default().with_combine_filters(FilterJoin::Or));
        let rendered = renderer.render(&request);
        assert_eq!(rendered["filter"], json!({ "or": { "filters": expected_filters } }));
    }

    #[test]
    fn test_raw_slots_inserted_verbatim() {
        let request = SearchRequest::new()
            .with_query_raw_json(r#"{ "raw": "query" }"#)
            .unwrap()
            .with_filter_raw_json(r#"{ "raw": "filter" }"#)
            .unwrap();
        let rendered = Renderer::default().render(&request);
        assert_eq!(
            rendered,
            json!({ "query": { "raw": "query" }, "filter": { "raw": "filter" } })
        );
    }

    #[test]
    fn test_raw_numbers_survive_to_string() {
        let request = SearchRequest::new()
            .with_query(Query::match_all())
            .with_filter_raw_json(r#"{"n": 123456789012345678901234, "x": 1.10}"#)
            .unwrap();
        let renderer = Renderer::default();

        assert_eq!(
            renderer.to_string(&request).unwrap(),
            r#"{"query":{"match_all":{}},"filter":{"n": 123456789012345678901234, "x": 1.10}}"#
        );
        assert_eq!(
            renderer.to_vec(&request).unwrap(),
            renderer.to_string(&request).unwrap().into_bytes()
        );

        let pretty = Renderer::new(RenderSettings::default().with_pretty(true));
        assert!(pretty
            .to_string(&request)
            .unwrap()
            .contains("123456789012345678901234"));
    }

    #[test]
    fn test_to_string_and_to_vec() {
        let request = SearchRequest::new().with_from(0).with_size(10);
        let renderer = Renderer::default();
        assert_eq!(renderer.to_string(&request).unwrap(), r#"{"from":0,"size":10}"#);
        assert_eq!(renderer.to_vec(&request).unwrap(), br#"{"from":0,"size":10}"#.to_vec());

        let pretty = Renderer::new(RenderSettings::default().with_pretty(true));
        assert!(pretty.to_string(&request).unwrap().contains('\n'));
    }

    #[test]
    fn test_metrics_are_recorded() {
        let metrics = RenderMetrics::new().unwrap();
        let renderer = Renderer::default().with_metrics(metrics.clone());
        let request = SearchRequest::new()
            .with_query_raw_json(r#"{ "raw": "query" }"#)
            .unwrap()
            .with_facet("tags", TermsFacet::new("tags").unwrap())
            .unwrap();

        renderer.render(&request);
        renderer.render(&request);

        assert_eq!(metrics.requests_rendered.get(), 2.0);
        assert_eq!(metrics.raw_overrides.get(), 2.0);
    }
}
