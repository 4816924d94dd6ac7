//! Conditional object builder used by every node renderer

use serde_json::{Map, Value};

/// A JSON object under construction
///
/// Keys keep insertion order. The `opt*` methods skip `None`, so an unset
/// option never produces a key.
#[derive(Clone, Debug, Default)]
pub(crate) struct Fragment(Map<String, Value>);

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key unconditionally
    pub fn push(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert a key when the value is present
    pub fn opt<T: Into<Value>>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Insert a floating point option; `200` renders as `200.0`
    pub fn opt_f64(self, key: &str, value: Option<f64>) -> Self {
        self.opt(key, value.map(Value::from))
    }

    pub fn opt_str(self, key: &str, value: Option<&str>) -> Self {
        self.opt(key, value)
    }

    /// Insert an array when it has at least one element
    pub fn non_empty(self, key: &str, values: Vec<Value>) -> Self {
        if values.is_empty() {
            self
        } else {
            self.push(key, Value::Array(values))
        }
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Finish as a JSON object
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Finish as `{ key: <this object> }`
    pub fn wrap(self, key: &str) -> Value {
        Fragment::new().push(key, self.into_value()).into_value()
    }
}
