//! Invariant checking framework for rendered documents
//!
//! This module provides the trait and concrete implementations for
//! checking structural invariants of a rendered request document.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// A violation of an invariant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    pub invariant: String,
    pub description: String,
    pub paths: Vec<String>, // JSON pointers into the document
    pub context: HashMap<String, String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "INVARIANT VIOLATION: {}", self.invariant)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Paths: {:?}", self.paths)?;
        if !self.context.is_empty() {
            writeln!(f, "  Context:")?;
            for (key, value) in &self.context {
                writeln!(f, "    {}: {}", key, value)?;
            }
        }
        Ok(())
    }
}

/// Trait for invariant checkers
pub trait Invariant: Send + Sync {
    /// Name of the invariant
    fn name(&self) -> &str;

    /// Check the invariant against a rendered document
    fn check(&self, document: &Value) -> Result<(), Violation>;

    /// Human-readable description
    fn description(&self) -> &str {
        "No description provided"
    }
}

/// Check all invariants and return violations
pub fn check_all_invariants(document: &Value, invariants: &[Box<dyn Invariant>]) -> Vec<Violation> {
    invariants
        .iter()
        .filter_map(|invariant| invariant.check(document).err())
        .collect()
}

/// Visit every value with its JSON pointer and the key it sits under
fn walk(value: &Value, pointer: &str, key: Option<&str>, visit: &mut dyn FnMut(&str, Option<&str>, &Value)) {
    visit(pointer, key, value);
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let child = format!("{}/{}", pointer, k.replace('~', "~0").replace('/', "~1"));
                walk(v, &child, Some(k.as_str()), visit);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                walk(v, &format!("{}/{}", pointer, i), None, visit);
            }
        }
        _ => {}
    }
}

fn collect(document: &Value, mut offending: impl FnMut(Option<&str>, &Value) -> bool) -> Vec<String> {
    let mut paths = Vec::new();
    walk(document, "", None, &mut |pointer, key, value| {
        if offending(key, value) {
            paths.push(pointer.to_string());
        }
    });
    paths
}

fn violation(invariant: &dyn Invariant, paths: Vec<String>) -> Result<(), Violation> {
    if paths.is_empty() {
        return Ok(());
    }
    let mut context = HashMap::new();
    context.insert("count".to_string(), paths.len().to_string());
    Err(Violation {
        invariant: invariant.name().to_string(),
        description: invariant.description().to_string(),
        paths,
        context,
    })
}

// ============================================================================
// CONCRETE INVARIANTS FOR RENDERED REQUESTS
// ============================================================================

/// Invariant: no `null` anywhere in the document
///
/// Unset options are omitted, never rendered as placeholders.
pub struct NoNullValues;

impl Invariant for NoNullValues {
    fn name(&self) -> &str {
        "NoNullValues"
    }

    fn description(&self) -> &str {
        "Unset options must be omitted rather than rendered as null"
    }

    fn check(&self, document: &Value) -> Result<(), Violation> {
        violation(self, collect(document, |_, value| value.is_null()))
    }
}

/// Invariant: the only empty objects are `match_all` bodies
///
/// The top-level document itself may be empty.
pub struct EmptyObjectsOnlyForMatchAll;

impl Invariant for EmptyObjectsOnlyForMatchAll {
    fn name(&self) -> &str {
        "EmptyObjectsOnlyForMatchAll"
    }

    fn description(&self) -> &str {
        "Empty objects may only appear as match_all bodies"
    }

    fn check(&self, document: &Value) -> Result<(), Violation> {
        let paths = collect(document, |key, value| {
            let empty = value.as_object().is_some_and(|map| map.is_empty());
            empty && key.is_some() && key != Some("match_all")
        });
        violation(self, paths)
    }
}

/// Invariant: combinators carry at least one child
pub struct CombinatorsNonEmpty;

impl Invariant for CombinatorsNonEmpty {
    fn name(&self) -> &str {
        "CombinatorsNonEmpty"
    }

    fn description(&self) -> &str {
        "and/or filters need a non-empty filters array and bool nodes need a clause"
    }

    fn check(&self, document: &Value) -> Result<(), Violation> {
        let non_empty_array = |v: Option<&Value>| v.and_then(Value::as_array).is_some_and(|a| !a.is_empty());

        let paths = collect(document, |key, value| {
            let Some(map) = value.as_object() else {
                return false;
            };
            match key {
                Some("and") | Some("or") => !non_empty_array(map.get("filters")),
                Some("bool") => !["must", "should", "must_not"]
                    .iter()
                    .any(|clause| non_empty_array(map.get(*clause))),
                _ => false,
            }
        });
        violation(self, paths)
    }
}

/// Invariant: every range and bucket has at least one bound
pub struct RangesHaveBounds;

impl Invariant for RangesHaveBounds {
    fn name(&self) -> &str {
        "RangesHaveBounds"
    }

    fn description(&self) -> &str {
        "Every range bound object must carry a from or a to bound"
    }

    fn check(&self, document: &Value) -> Result<(), Violation> {
        let has_bound = |v: &Value| {
            v.as_object()
                .is_some_and(|m| m.contains_key("from") || m.contains_key("to"))
        };

        let mut paths = collect(document, |key, value| match (key, value) {
            (Some("ranges"), Value::Array(buckets)) => !buckets.iter().all(has_bound),
            _ => false,
        });
        paths.extend(collect(document, |key, value| match (key, value) {
            (Some("range"), Value::Object(fields)) => fields
                .values()
                .filter(|v| v.is_object())
                .any(|v| !has_bound(v)),
            _ => false,
        }));
        violation(self, paths)
    }
}

/// Create the default set of document invariants
pub fn default_invariants() -> Vec<Box<dyn Invariant>> {
    vec![
        Box::new(NoNullValues),
        Box::new(EmptyObjectsOnlyForMatchAll),
        Box::new(CombinatorsNonEmpty),
        Box::new(RangesHaveBounds),
    ]
}
