use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schema::FieldName;

/// Sort direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// One sort criterion; without an order the engine default applies
#[derive(Clone, Debug, PartialEq)]
pub struct SortField {
    pub(crate) field: String,
    pub(crate) order: Option<SortOrder>,
}

impl SortField {
    pub fn new(field: impl FieldName) -> Result<Self> {
        Ok(Self {
            field: field.into_field_name("sort")?,
            order: None,
        })
    }

    pub fn ascending(field: impl FieldName) -> Result<Self> {
        Ok(Self::new(field)?.with_order(SortOrder::Asc))
    }

    pub fn descending(field: impl FieldName) -> Result<Self> {
        Ok(Self::new(field)?.with_order(SortOrder::Desc))
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn order(&self) -> Option<SortOrder> {
        self.order
    }
}
