//! Concrete filter node implementations

mod bool_filter;
mod geo_distance_filter;
mod missing;
mod range_filter;
mod term_filter;

pub use bool_filter::BoolFilter;
pub use geo_distance_filter::GeoDistanceFilter;
pub use missing::{ExistsFilter, MissingFilter};
pub use range_filter::RangeFilter;
pub use term_filter::{TermFilter, TermsExecution, TermsFilter};
