pub mod search;
pub mod sort;

pub use search::{RawJson, SearchRequest, Slot};
pub use sort::{SortField, SortOrder};
