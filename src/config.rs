use serde::{Deserialize, Serialize};

use crate::error::{DslError, Result};

/// How several envelope-level filters are joined into one `filter` slot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterJoin {
    #[default]
    And,
    Or,
}

/// Renderer settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Pretty-print documents produced by `Renderer::to_string`
    pub(crate) pretty: bool,
    /// Pin key used by geo distance facets without an explicit pin field
    pub(crate) default_pin_field: String,
    /// Join used when a request carries more than one filter
    pub(crate) combine_filters: FilterJoin,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            pretty: false,
            default_pin_field: "pin.location".to_string(),
            combine_filters: FilterJoin::And,
        }
    }
}

impl RenderSettings {
    /// Load settings from a JSON document; missing keys keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).map_err(|e| DslError::Config {
            reason: e.to_string(),
        })?;
        let pin_field = settings.default_pin_field.clone();
        settings.with_default_pin_field(pin_field)
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the pin key; must not be blank
    pub fn with_default_pin_field(mut self, field: impl Into<String>) -> Result<Self> {
        let field = field.into();
        if field.trim().is_empty() {
            return Err(DslError::Config {
                reason: "default_pin_field must not be empty".to_string(),
            });
        }
        self.default_pin_field = field;
        Ok(self)
    }

    pub fn with_combine_filters(mut self, join: FilterJoin) -> Self {
        self.combine_filters = join;
        self
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    pub fn default_pin_field(&self) -> &str {
        &self.default_pin_field
    }

    pub fn combine_filters(&self) -> FilterJoin {
        self.combine_filters
    }
}
