//! Naming conventions applied to declared member names

use serde::{Deserialize, Serialize};

/// Transformation from a member's declared name to the engine's field name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// `PublishedDate` -> `published_date`, `LOC` -> `loc`
    #[default]
    SnakeCase,
    /// `PublishedDate` -> `publishedDate`, `LOC` -> `loc`
    CamelCase,
    /// `PublishedDate` -> `publisheddate`
    Lowercase,
    /// Declared name used as-is
    Verbatim,
}

impl NamingConvention {
    /// Apply this convention to a declared member name
    pub fn apply(&self, name: &str) -> String {
        match self {
            NamingConvention::SnakeCase => to_snake_case(name),
            NamingConvention::CamelCase => to_camel_case(name),
            NamingConvention::Lowercase => name.to_lowercase(),
            NamingConvention::Verbatim => name.to_string(),
        }
    }
}

/// Split at lower->upper and digit->upper transitions; an acronym run stays
/// one word unless its last letter starts a capitalised word (`HTTPServer`).
fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_uppercase() {
            out.push(c);
            continue;
        }

        let prev = if i > 0 { Some(chars[i - 1]) } else { None };
        let next = chars.get(i + 1).copied();
        let boundary = match prev {
            Some(p) if p.is_lowercase() || p.is_ascii_digit() => true,
            Some(p) if p.is_uppercase() => next.is_some_and(|n| n.is_lowercase()),
            _ => false,
        };

        if boundary && !out.ends_with('_') {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }

    out
}

fn to_camel_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let run = chars.iter().take_while(|c| c.is_uppercase()).count();

    // Keep the capital that opens the next word: `HTTPServer` -> `httpServer`
    let lower_until = if run > 1 && chars.get(run).is_some_and(|c| c.is_lowercase()) {
        run - 1
    } else {
        run
    };

    let mut out = String::with_capacity(name.len());
    for (i, c) in chars.into_iter().enumerate() {
        if i < lower_until {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
