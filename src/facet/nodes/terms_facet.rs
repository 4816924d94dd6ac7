//! Terms facet - most frequent terms of a field

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::FieldName;
use crate::types::non_empty;

/// Ordering of terms facet entries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TermsOrder {
    Count,
    Term,
    ReverseCount,
    ReverseTerm,
}

impl TermsOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermsOrder::Count => "count",
            TermsOrder::Term => "term",
            TermsOrder::ReverseCount => "reverse_count",
            TermsOrder::ReverseTerm => "reverse_term",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TermsFacet {
    pub(crate) field: String,
    pub(crate) size: Option<u32>,
    pub(crate) order: Option<TermsOrder>,
    pub(crate) all_terms: Option<bool>,
    pub(crate) exclude: Vec<String>,
}

impl TermsFacet {
    const NODE: &'static str = "terms facet";

    pub fn new(field: impl FieldName) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            size: None,
            order: None,
            all_terms: None,
            exclude: Vec::new(),
        })
    }

    /// Number of terms to return
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_order(mut self, order: TermsOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Also return terms with a zero count
    pub fn with_all_terms(mut self, all_terms: bool) -> Self {
        self.all_terms = Some(all_terms);
        self
    }

    /// Exclude a term from the result; repeated calls accumulate
    pub fn exclude(mut self, term: impl Into<String>) -> Result<Self> {
        self.exclude.push(non_empty(Self::NODE, "exclude", term)?);
        Ok(self)
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_facet_options() {
        let facet = TermsFacet::new("tags")
            .unwrap()
            .with_size(5)
            .with_order(TermsOrder::ReverseCount)
            .exclude("draft")
            .unwrap()
            .exclude("spam")
            .unwrap();

        assert_eq!(facet.field(), "tags");
        assert_eq!(facet.size, Some(5));
        assert_eq!(facet.order.map(|o| o.as_str()), Some("reverse_count"));
        assert_eq!(facet.exclude, vec!["draft", "spam"]);
        assert_eq!(facet.all_terms, None);
    }

    #[test]
    fn test_terms_facet_rejects_empty_exclude() {
        assert!(TermsFacet::new("tags").unwrap().exclude(" ").is_err());
    }
}
