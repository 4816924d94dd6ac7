use thiserror::Error;

/// Main error type for request construction
#[derive(Error, Debug)]
pub enum DslError {
    #[error("Unresolvable field: `{path}` is not a member of {schema}")]
    UnresolvableField { schema: &'static str, path: String },

    #[error("Invalid option `{option}` on {node}: {reason}")]
    InvalidOption {
        node: &'static str,
        option: &'static str,
        reason: String,
    },

    #[error("Ambiguous configuration on {node}: `{option}` conflicts with `{conflicts_with}`")]
    AmbiguousNodeConfiguration {
        node: &'static str,
        option: &'static str,
        conflicts_with: &'static str,
    },

    #[error("Invalid raw JSON for {slot}: {source}")]
    InvalidRawJson {
        slot: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid render settings: {reason}")]
    Config { reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for request construction
pub type Result<T> = std::result::Result<T, DslError>;

impl DslError {
    pub(crate) fn invalid(node: &'static str, option: &'static str, reason: impl Into<String>) -> Self {
        DslError::InvalidOption {
            node,
            option,
            reason: reason.into(),
        }
    }

    /// The node kind the error was raised for, if any
    pub fn node(&self) -> Option<&'static str> {
        match self {
            DslError::InvalidOption { node, .. }
            | DslError::AmbiguousNodeConfiguration { node, .. } => Some(node),
            DslError::InvalidRawJson { slot, .. } => Some(slot),
            DslError::UnresolvableField { .. }
            | DslError::Config { .. }
            | DslError::Serialization(_) => None,
        }
    }

    /// Whether the error stems from the caller's input rather than encoding
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, DslError::Serialization(_))
    }
}
