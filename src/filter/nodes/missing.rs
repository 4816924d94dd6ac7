//! Missing and exists filters - field presence checks

use crate::error::Result;
use crate::schema::FieldName;

/// Filter matching documents that have no value for a field
#[derive(Clone, Debug, PartialEq)]
pub struct MissingFilter {
    pub(crate) field: String,
    pub(crate) existence: Option<bool>,
    pub(crate) null_value: Option<bool>,
}

impl MissingFilter {
    const NODE: &'static str = "missing filter";

    pub fn new(field: impl FieldName) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
            existence: None,
            null_value: None,
        })
    }

    /// Match documents where the field does not exist at all
    pub fn with_existence(mut self, existence: bool) -> Self {
        self.existence = Some(existence);
        self
    }

    /// Match documents where the field holds an explicit null
    pub fn with_null_value(mut self, null_value: bool) -> Self {
        self.null_value = Some(null_value);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}

/// Filter matching documents that have a value for a field
#[derive(Clone, Debug, PartialEq)]
pub struct ExistsFilter {
    pub(crate) field: String,
}

impl ExistsFilter {
    const NODE: &'static str = "exists filter";

    pub fn new(field: impl FieldName) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name(Self::NODE)?,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }
}
