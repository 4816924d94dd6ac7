//! Typed builders for search requests, rendered to the engine's JSON query DSL
//!
//! # Example
//!
//! ```
//! use querykit::{Filter, MissingFilter, Renderer, SearchRequest};
//! use serde_json::json;
//!
//! let filter = Filter::and([Filter::match_all(), MissingFilter::new("loc")?.into()])?
//!     .with_cache(true)
//!     .with_name("and_filter")?;
//! let request = SearchRequest::new().with_from(0).with_size(10).with_filter(filter);
//!
//! let document = Renderer::default().render(&request);
//! assert_eq!(document["filter"]["and"]["_name"], json!("and_filter"));
//! # Ok::<(), querykit::DslError>(())
//! ```

pub mod config;
pub mod error;
pub mod facet;
pub mod filter;
pub mod metrics;
pub mod models;
pub mod query;
pub mod render;
pub mod schema;
pub mod testing;
pub mod types;

pub use config::{FilterJoin, RenderSettings};
pub use error::{DslError, Result};
pub use facet::{
    Facet, FacetKind, GeoDistanceFacet, HistogramFacet, RangeFacet, RangeFacetField,
    StatisticalFacet, TermsFacet, TermsOrder, ValueSource,
};
pub use filter::{
    BoolFilter, ExistsFilter, Filter, FilterKind, GeoDistanceFilter, MissingFilter, RangeFilter,
    TermFilter, TermsExecution, TermsFilter,
};
pub use metrics::RenderMetrics;
pub use models::{RawJson, SearchRequest, Slot, SortField, SortOrder};
pub use query::{
    BoolClauses, BoolQuery, FuzzyNumericQuery, FuzzyQuery, MatchAllQuery, Query, RangeQuery,
    TermQuery, TextQuery, TextQueryType,
};
pub use render::{render_facet, render_filter, render_query, Renderer};
pub use schema::{Document, FieldName, Member, MemberRef, NamingConvention};
pub use types::{
    FacetRange, GeoDistanceType, GeoPin, GeoUnit, Operator, Params, RangeBounds, RangeValue,
    Scalar,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
