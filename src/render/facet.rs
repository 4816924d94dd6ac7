//! Facet rendering

use serde_json::Value;

use super::filter::render_filter;
use super::fragment::Fragment;
use super::query::render_query;
use crate::config::RenderSettings;
use crate::facet::{Facet, FacetKind, GeoDistanceFacet, RangeFacetField};
use crate::types::FacetRange;

/// Render a facet to its JSON fragment
///
/// Scope metadata (`global`, `facet_filter`, `nested`) renders next to the
/// kind key.
pub fn render_facet(facet: &Facet, settings: &RenderSettings) -> Value {
    let body = match &facet.kind {
        FacetKind::Terms(f) => Fragment::new()
            .push("field", f.field.as_str())
            .opt("size", f.size)
            .opt_str("order", f.order.map(|o| o.as_str()))
            .opt("all_terms", f.all_terms)
            .non_empty("exclude", f.exclude.iter().map(|t| Value::from(t.as_str())).collect())
            .into_value(),
        FacetKind::Range(f) => {
            let fields = match &f.field {
                RangeFacetField::Field(field) => Fragment::new().push("field", field.as_str()),
                RangeFacetField::KeyValue {
                    key_field,
                    value_field,
                } => Fragment::new()
                    .push("key_field", key_field.as_str())
                    .push("value_field", value_field.as_str()),
            };
            fields.non_empty("ranges", ranges(&f.ranges)).into_value()
        }
        FacetKind::Histogram(f) => Fragment::new()
            .push("field", f.field.as_str())
            .push("interval", f.interval)
            .into_value(),
        FacetKind::Statistical(f) => Fragment::new().push("field", f.field.as_str()).into_value(),
        FacetKind::Filter(filter) => render_filter(filter),
        FacetKind::Query(query) => render_query(query),
        FacetKind::GeoDistance(f) => geo_distance_body(f, settings),
    };

    Fragment::new()
        .push(facet.kind_name(), body)
        .opt("global", facet.global)
        .opt("facet_filter", facet.facet_filter.as_ref().map(render_filter))
        .opt_str("nested", facet.nested.as_deref())
        .into_value()
}

fn geo_distance_body(f: &GeoDistanceFacet, settings: &RenderSettings) -> Value {
    let pin_field = f.pin_field.as_deref().unwrap_or(settings.default_pin_field());
    let mut body = Fragment::new().push(pin_field, f.pin.to_location_string());
    if let Some(source) = &f.value {
        body = body.push(source.key(), source.value());
    }
    body.non_empty("ranges", ranges(&f.ranges))
        .opt_str("unit", f.unit.map(|u| u.as_str()))
        .opt_str("distance_type", f.distance_type.map(|t| t.as_str()))
        .opt("params", f.params.as_ref().filter(|p| !p.is_empty()).map(|p| p.to_json()))
        .into_value()
}

fn ranges(ranges: &[FacetRange]) -> Vec<Value> {
    ranges
        .iter()
        .map(|r| {
            Fragment::new()
                .opt("from", r.from.as_ref().map(|v| v.to_json()))
                .opt("to", r.to.as_ref().map(|v| v.to_json()))
                .into_value()
        })
        .collect()
}
