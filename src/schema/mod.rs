//! Schema collaborator and field resolution
//!
//! This module maps typed member references to engine field names:
//! - Naming conventions (snake case, camel case, ...)
//! - Per-member name overrides
//! - Nested members addressed with dotted paths

mod naming;
mod resolver;

pub use naming::NamingConvention;
pub use resolver::{resolve_path, Document, FieldName, Member, MemberRef};
