//! Query rendering

use serde_json::Value;

use super::fragment::Fragment;
use crate::query::{BoolClauses, Query, TextQuery};
use crate::types::RangeBounds;

/// Render a query node to its JSON fragment
pub fn render_query(query: &Query) -> Value {
    match query {
        Query::MatchAll(q) => Fragment::new().opt_f64("boost", q.boost).wrap("match_all"),
        Query::Term(q) => {
            let body = match q.boost {
                Some(boost) => Fragment::new()
                    .push("value", q.value.to_json())
                    .push("boost", boost)
                    .into_value(),
                None => q.value.to_json(),
            };
            Fragment::new().push(q.field.as_str(), body).wrap("term")
        }
        Query::Fuzzy(q) => {
            let body = Fragment::new()
                .push("value", q.value.as_str())
                .opt_f64("boost", q.boost)
                .opt_f64("min_similarity", q.min_similarity)
                .opt("prefix_length", q.prefix_length)
                .opt("max_expansions", q.max_expansions);
            Fragment::new().push(q.field.as_str(), body.into_value()).wrap("fuzzy")
        }
        Query::FuzzyNumeric(q) => {
            let body = Fragment::new()
                .opt_f64("boost", q.boost)
                .opt_f64("min_similarity", q.min_similarity)
                .push("value", q.value);
            Fragment::new().push(q.field.as_str(), body.into_value()).wrap("fuzzy")
        }
        Query::Text(q) => render_text(q),
        Query::Range(q) => {
            let body = range_body(&q.bounds).opt_f64("boost", q.boost);
            Fragment::new().push(q.field.as_str(), body.into_value()).wrap("range")
        }
        Query::Bool(BoolClauses(q)) => Fragment::new()
            .non_empty("must", q.must.iter().map(render_query).collect())
            .non_empty("should", q.should.iter().map(render_query).collect())
            .non_empty("must_not", q.must_not.iter().map(render_query).collect())
            .opt("minimum_number_should_match", q.minimum_number_should_match)
            .opt_f64("boost", q.boost)
            .wrap("bool"),
    }
}

fn render_text(q: &TextQuery) -> Value {
    let body = Fragment::new()
        .push("query", q.query.as_str())
        .opt_str("type", q.kind.map(|k| k.as_str()))
        .opt_str("analyzer", q.analyzer.as_deref())
        .opt_f64("fuzziness", q.fuzziness)
        .opt("prefix_length", q.prefix_length)
        .opt("max_expansions", q.max_expansions)
        .opt("slop", q.slop)
        .opt_str("operator", q.operator.map(|o| o.as_str()));
    Fragment::new().push(q.field.as_str(), body.into_value()).wrap("text")
}

/// Bound keys shared by range queries and range filters
pub(crate) fn range_body(bounds: &RangeBounds) -> Fragment {
    Fragment::new()
        .opt("from", bounds.from.as_ref().map(|v| v.to_json()))
        .opt("to", bounds.to.as_ref().map(|v| v.to_json()))
        .opt("include_lower", bounds.include_lower)
        .opt("include_upper", bounds.include_upper)
}
