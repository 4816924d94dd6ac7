//! Filter rendering

use serde_json::Value;

use super::fragment::Fragment;
use super::query::{range_body, render_query};
use crate::filter::{Filter, FilterKind, GeoDistanceFilter};
use crate::types::Scalar;

/// Render a filter node to its JSON fragment
///
/// `_cache` and `_name` follow the kind's own keys. A query filter carrying
/// metadata renders as `fquery`, the only form that accepts them.
pub fn render_filter(filter: &Filter) -> Value {
    if let FilterKind::Query(query) = &filter.kind {
        let body = Fragment::new().push("query", render_query(query));
        if filter.cache.is_none() && filter.name.is_none() {
            return body.into_value();
        }
        return with_metadata(body, filter).wrap("fquery");
    }

    with_metadata(kind_body(&filter.kind), filter).wrap(filter.kind_name())
}

fn with_metadata(body: Fragment, filter: &Filter) -> Fragment {
    body.opt("_cache", filter.cache)
        .opt_str("_name", filter.name.as_deref())
}

fn kind_body(kind: &FilterKind) -> Fragment {
    match kind {
        FilterKind::MatchAll => Fragment::new(),
        FilterKind::Missing(f) => Fragment::new()
            .push("field", f.field.as_str())
            .opt("existence", f.existence)
            .opt("null_value", f.null_value),
        FilterKind::Exists(f) => Fragment::new().push("field", f.field.as_str()),
        FilterKind::Term(f) => Fragment::new().push(f.field.as_str(), f.value.to_json()),
        FilterKind::Terms(f) => Fragment::new()
            .push(
                f.field.as_str(),
                f.values.iter().map(Scalar::to_json).collect::<Vec<_>>(),
            )
            .opt_str("execution", f.execution.map(|e| e.as_str())),
        FilterKind::Range(f) => Fragment::new().push(f.field.as_str(), range_body(&f.bounds).into_value()),
        FilterKind::GeoDistance(f) => geo_distance_body(f),
        FilterKind::And(filters) | FilterKind::Or(filters) => {
            Fragment::new().push("filters", filters.iter().map(render_filter).collect::<Vec<_>>())
        }
        FilterKind::Not(filter) => Fragment::new().push("filter", render_filter(filter)),
        FilterKind::Bool(b) => Fragment::new()
            .non_empty("must", b.must.iter().map(render_filter).collect())
            .non_empty("should", b.should.iter().map(render_filter).collect())
            .non_empty("must_not", b.must_not.iter().map(render_filter).collect()),
        // handled by render_filter
        FilterKind::Query(query) => Fragment::new().push("query", render_query(query)),
    }
}

fn geo_distance_body(f: &GeoDistanceFilter) -> Fragment {
    let distance = match f.unit {
        Some(unit) => Value::from(format!("{}{}", f.distance, unit.as_str())),
        None => Value::from(f.distance),
    };
    Fragment::new()
        .push(f.field.as_str(), f.pin.to_location_string())
        .push("distance", distance)
        .opt_str("distance_type", f.distance_type.map(|t| t.as_str()))
}
