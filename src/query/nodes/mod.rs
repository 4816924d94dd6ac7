//! Concrete query node implementations
//!
//! One builder per query kind. Each builder validates its options at the
//! setter and stores only what the caller set.

mod bool_query;
mod fuzzy_numeric_query;
mod fuzzy_query;
mod match_all;
mod range_query;
mod term_query;
mod text_query;

pub use bool_query::{BoolClauses, BoolQuery};
pub use fuzzy_numeric_query::FuzzyNumericQuery;
pub use fuzzy_query::FuzzyQuery;
pub use match_all::MatchAllQuery;
pub use range_query::RangeQuery;
pub use term_query::TermQuery;
pub use text_query::{TextQuery, TextQueryType};
