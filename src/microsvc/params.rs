//! Path parameters captured by the transport (e.g. `:id` in `/books/:id`).

use std::collections::HashMap;

/// Named path parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Shorthand for the common single `id` parameter.
    pub fn with_id(id: impl Into<String>) -> Self {
        let mut params = Self::new();
        params.set("id", id);
        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }
}
