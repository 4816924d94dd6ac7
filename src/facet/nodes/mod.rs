//! Concrete facet node implementations

mod geo_distance_facet;
mod histogram_facet;
mod range_facet;
mod terms_facet;

pub use geo_distance_facet::{GeoDistanceFacet, ValueSource};
pub use histogram_facet::{HistogramFacet, StatisticalFacet};
pub use range_facet::{RangeFacet, RangeFacetField};
pub use terms_facet::{TermsFacet, TermsOrder};
