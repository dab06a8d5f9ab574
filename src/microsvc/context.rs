//! Context passed to command handlers.
//!
//! Carries the parsed input, the path parameters, and a reference to the
//! store. Handlers access everything they need through the context.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;
use super::params::Params;
use crate::book::is_truthy;

/// The context passed to every command handler.
///
/// Generic over `S` (the store type) so handlers work with whatever store
/// the service is configured with.
pub struct Context<'a, S> {
    input: Value,
    params: Params,
    store: &'a S,
}

impl<'a, S> Context<'a, S> {
    pub(crate) fn new(input: Value, params: Params, store: &'a S) -> Self {
        Self {
            input,
            params,
            store,
        }
    }

    /// Deserialize the input payload into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.input.clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    pub fn raw_input(&self) -> &Value {
        &self.input
    }

    /// A required path parameter. Missing parameters are a decode failure.
    pub fn param(&self, key: &str) -> Result<&str, HandlerError> {
        self.params
            .get(key)
            .ok_or_else(|| HandlerError::DecodeFailed(format!("missing path parameter: {}", key)))
    }

    pub fn store(&self) -> &S {
        self.store
    }

    /// True when the input carries `field` with a truthy value.
    pub fn has_field(&self, field: &str) -> bool {
        self.input.get(field).is_some_and(is_truthy)
    }

    /// True when every listed field is present and truthy.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.has_field(f))
    }
}
