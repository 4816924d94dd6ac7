//! Text query - analyzed full-text match on a field

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::FieldName;
use crate::types::{finite, non_empty, Operator};

/// How the analyzed text is matched
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextQueryType {
    Boolean,
    Phrase,
    PhrasePrefix,
}

impl TextQueryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextQueryType::Boolean => "boolean",
            TextQueryType::Phrase => "phrase",
            TextQueryType::PhrasePrefix => "phrase_prefix",
        }
    }
}

/// Query that analyzes text and matches it against a field
#[derive(Clone, Debug, PartialEq)]
pub struct TextQuery {
    pub(crate) field: String,
    pub(crate) query: String,
    pub(crate) kind: Option<TextQueryType>,
    pub(crate) analyzer: Option<String>,
    pub(crate) fuzziness: Option<f64>,
    pub(crate) prefix_length: Option<u32>,
    pub(crate) max_expansions: Option<u32>,
    pub(crate) slop: Option<u32>,
    pub(crate) operator: Option<Operator>,
}

impl TextQuery {
    const NODE: &'static str = "text query";

    /// Create a new text query
    pub fn new(field: impl FieldName, query: impl Into<String>) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            query: non_empty(Self::NODE, "query", query)?,
            kind: None,
            analyzer: None,
            fuzziness: None,
            prefix_length: None,
            max_expansions: None,
            slop: None,
            operator: None,
        })
    }

    /// Create a phrase query
    pub fn phrase(field: impl FieldName, query: impl Into<String>) -> Result<Self> {
        Ok(Self::new(field, query)?.with_type(TextQueryType::Phrase))
    }

    /// Create a phrase prefix query
    pub fn phrase_prefix(field: impl FieldName, query: impl Into<String>) -> Result<Self> {
        Ok(Self::new(field, query)?.with_type(TextQueryType::PhrasePrefix))
    }

    pub fn with_type(mut self, kind: TextQueryType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Result<Self> {
        self.analyzer = Some(non_empty(Self::NODE, "analyzer", analyzer)?);
        Ok(self)
    }

    pub fn with_fuzziness(mut self, fuzziness: f64) -> Result<Self> {
        self.fuzziness = Some(finite(Self::NODE, "fuzziness", fuzziness)?);
        Ok(self)
    }

    pub fn with_prefix_length(mut self, prefix_length: u32) -> Self {
        self.prefix_length = Some(prefix_length);
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: u32) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Allowed distance between phrase terms
    pub fn with_slop(mut self, slop: u32) -> Self {
        self.slop = Some(slop);
        self
    }

    pub fn with_operator(mut self, operator: Operator) -> Self {
        self.operator = Some(operator);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_query_defaults_unset() {
        let query = TextQuery::new("content", "rust programming").unwrap();
        assert_eq!(query.query(), "rust programming");
        assert_eq!(query.kind, None);
        assert_eq!(query.operator, None);
        assert_eq!(query.slop, None);
    }

    #[test]
    fn test_text_query_phrase() {
        let query = TextQuery::phrase("content", "rust programming")
            .unwrap()
            .with_slop(2);
        assert_eq!(query.kind, Some(TextQueryType::Phrase));
        assert_eq!(query.slop, Some(2));
    }

    #[test]
    fn test_text_query_validation() {
        assert!(TextQuery::new("content", "").is_err());
        let query = TextQuery::new("content", "rust").unwrap();
        assert!(query.clone().with_analyzer("").is_err());
        assert!(query.with_fuzziness(f64::NAN).is_err());
    }

    #[test]
    fn test_text_query_type_tokens() {
        assert_eq!(TextQueryType::PhrasePrefix.as_str(), "phrase_prefix");
        assert_eq!(
            serde_json::to_value(TextQueryType::PhrasePrefix).unwrap(),
            "phrase_prefix"
        );
    }
}
