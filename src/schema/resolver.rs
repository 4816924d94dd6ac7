//! Field resolution from typed member paths
//!
//! A schema type describes its members once, as a constant table. Typed
//! member references are resolved against that table into the flat field
//! names the search engine expects.

use std::fmt;
use std::marker::PhantomData;

use super::naming::NamingConvention;
use crate::error::{DslError, Result};

/// A declared member of a document schema
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Member {
    name: &'static str,
    rename: Option<&'static str>,
    children: &'static [Member],
}

impl Member {
    /// Declare a member by its declared name
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            rename: None,
            children: &[],
        }
    }

    /// Override the field name; the override bypasses the naming convention
    pub const fn renamed(self, field: &'static str) -> Self {
        Self {
            rename: Some(field),
            ..self
        }
    }

    /// Attach nested members (object fields addressed with dotted paths)
    pub const fn with_children(self, children: &'static [Member]) -> Self {
        Self { children, ..self }
    }

    /// Declared name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Engine field name for this member under the given convention
    pub fn field_name(&self, naming: NamingConvention) -> String {
        match self.rename {
            Some(field) => field.to_string(),
            None => naming.apply(self.name),
        }
    }
}

/// Capability implemented per schema type: the member table and naming rule
pub trait Document {
    /// Schema name used in error messages
    const NAME: &'static str;

    /// Top-level members
    const MEMBERS: &'static [Member];

    /// Convention applied to members without an override
    const NAMING: NamingConvention = NamingConvention::SnakeCase;

    /// Resolve a dotted member path (`"Author.FirstName"`) to a field name
    fn resolve(path: &str) -> Result<String> {
        resolve_path(Self::NAME, Self::MEMBERS, Self::NAMING, path)
    }
}

/// Resolve `path` against a member table
pub fn resolve_path(
    schema: &'static str,
    members: &'static [Member],
    naming: NamingConvention,
    path: &str,
) -> Result<String> {
    let unresolvable = || DslError::UnresolvableField {
        schema,
        path: path.to_string(),
    };

    if path.is_empty() {
        return Err(unresolvable());
    }

    let mut scope = members;
    let mut parts = Vec::new();
    for segment in path.split('.') {
        let member = scope
            .iter()
            .find(|m| m.name == segment)
            .ok_or_else(unresolvable)?;
        parts.push(member.field_name(naming));
        scope = member.children;
    }

    let resolved = parts.join(".");
    tracing::trace!(schema, path, field = %resolved, "resolved member path");
    Ok(resolved)
}

/// Typed reference to a member path of schema `D`
pub struct MemberRef<D> {
    path: &'static str,
    _schema: PhantomData<fn() -> D>,
}

impl<D> MemberRef<D> {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            _schema: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }
}

impl<D: Document> MemberRef<D> {
    /// Resolve to the engine field name
    pub fn resolve(&self) -> Result<String> {
        D::resolve(self.path)
    }
}

impl<D> Clone for MemberRef<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for MemberRef<D> {}

impl<D> fmt::Debug for MemberRef<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MemberRef").field(&self.path).finish()
    }
}

/// Anything a `field` setter accepts: a literal name or a typed member path
pub trait FieldName {
    /// Produce the field name; `node` names the receiving node for errors
    fn into_field_name(self, node: &'static str) -> Result<String>;
}

impl FieldName for &str {
    fn into_field_name(self, node: &'static str) -> Result<String> {
        self.to_string().into_field_name(node)
    }
}

impl FieldName for String {
    fn into_field_name(self, node: &'static str) -> Result<String> {
        if self.trim().is_empty() {
            return Err(DslError::invalid(node, "field", "field name must not be empty"));
        }
        Ok(self)
    }
}

impl<D: Document> FieldName for MemberRef<D> {
    fn into_field_name(self, _node: &'static str) -> Result<String> {
        self.resolve()
    }
}

impl<D: Document> FieldName for &MemberRef<D> {
    fn into_field_name(self, _node: &'static str) -> Result<String> {
        self.resolve()
    }
}
