//! Term and terms filters - exact value matching without scoring

use serde::{Deserialize, Serialize};

use crate::error::{DslError, Result};
use crate::schema::FieldName;
use crate::types::Scalar;

/// Filter matching documents with an exact value in a field
#[derive(Clone, Debug, PartialEq)]
pub struct TermFilter {
    pub(crate) field: String,
    pub(crate) value: Scalar,
}

impl TermFilter {
    const NODE: &'static str = "term filter";

    pub fn new(field: impl FieldName, value: impl Into<Scalar>) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            value: value.into().checked(Self::NODE, "value")?,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn value(&self) -> &Scalar {
        &self.value
    }
}

/// How a terms filter is executed by the engine
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermsExecution {
    Plain,
    Bool,
    And,
    Or,
}

impl TermsExecution {
    pub fn as_str(&self) -> &'static str {
        match self {
            TermsExecution::Plain => "plain",
            TermsExecution::Bool => "bool",
            TermsExecution::And => "and",
            TermsExecution::Or => "or",
        }
    }
}

/// Filter matching documents with any of several values in a field
#[derive(Clone, Debug, PartialEq)]
pub struct TermsFilter {
    pub(crate) field: String,
    pub(crate) values: Vec<Scalar>,
    pub(crate) execution: Option<TermsExecution>,
}

impl TermsFilter {
    const NODE: &'static str = "terms filter";

    /// Create a terms filter; at least one value is required
    pub fn new<V>(field: impl FieldName, values: impl IntoIterator<Item = V>) -> Result<Self>
    where
        V: Into<Scalar>,
    {
        let field = field.into_field_name(Self::NODE)?;
        let values = values
            .into_iter()
            .map(|v| v.into().checked(Self::NODE, "values"))
            .collect::<Result<Vec<_>>>()?;
        if values.is_empty() {
            return Err(DslError::invalid(Self::NODE, "values", "at least one value is required"));
        }
        Ok(Self {
            field,
            values,
            execution: None,
        })
    }

    pub fn with_execution(mut self, execution: TermsExecution) -> Self {
        self.execution = Some(execution);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn values(&self) -> &[Scalar] {
        &self.values
    }
}
