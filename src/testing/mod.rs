//! Testing infrastructure for rendered documents
//!
//! This module provides:
//! - Invariant checking framework
//! - Property-based testing support
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use querykit::testing::prelude::*;
//!
//! let document = Renderer::default().render(&request);
//! let violations = check_all_invariants(&document, &default_invariants());
//! assert!(violations.is_empty());
//! ```
//!
//! # Invariants
//!
//! The following invariants are provided:
//!
//! - **NoNullValues**: Unset options never render as `null`
//! - **EmptyObjectsOnlyForMatchAll**: No empty placeholder objects
//! - **CombinatorsNonEmpty**: and / or / bool nodes carry children
//! - **RangesHaveBounds**: Every range carries a bound

pub mod invariants;

pub use invariants::{
    check_all_invariants, default_invariants, CombinatorsNonEmpty, EmptyObjectsOnlyForMatchAll,
    Invariant, NoNullValues, RangesHaveBounds, Violation,
};

/// Prelude for easy imports
pub mod prelude {
    pub use super::invariants::{check_all_invariants, default_invariants, Invariant, Violation};
    pub use crate::render::Renderer;
}
