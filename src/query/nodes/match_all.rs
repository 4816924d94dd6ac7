//! Match all query - matches every document

use crate::error::Result;
use crate::types::finite;

/// Query that matches all documents
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchAllQuery {
    pub(crate) boost: Option<f64>,
}

impl MatchAllQuery {
    /// Create a new match all query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the boost factor
    pub fn with_boost(mut self, boost: f64) -> Result<Self> {
        self.boost = Some(finite("match_all query", "boost", boost)?);
        Ok(self)
    }

    pub fn boost(&self) -> Option<f64> {
        self.boost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_all_query() {
        let query = MatchAllQuery::new();
        assert_eq!(query.boost(), None);

        let query = query.with_boost(2.0).unwrap();
        assert_eq!(query.boost(), Some(2.0));
    }

    #[test]
    fn test_match_all_rejects_nan_boost() {
        let err = MatchAllQuery::new().with_boost(f64::NAN).unwrap_err();
        assert_eq!(err.node(), Some("match_all query"));
    }
}
