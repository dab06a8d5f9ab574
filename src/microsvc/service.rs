//! Service — command handler registry and dispatch for microsvc.
//!
//! `Service<S>` holds a store and a set of named command handlers.
//! Each handler receives a `Context<S>` and returns
//! `Result<CommandResponse, HandlerError>`.
//!
//! Dispatches are serialized: one command runs at a time against the store,
//! so a read-modify-write of the collection cannot interleave with another.
//!
//! ## Example
//!
//! ```ignore
//! use library_api::microsvc::{CommandResponse, Params, Service};
//! use library_api::InMemoryBookStore;
//! use serde_json::json;
//!
//! let service = Service::new(InMemoryBookStore::new())
//!     .command("ping", |_ctx| Ok(CommandResponse::ok(json!({ "pong": true }))));
//!
//! let response = service.dispatch("ping", json!({}), Params::new())?;
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use super::context::Context;
use super::error::HandlerError;
use super::params::Params;

type GuardFn<S> = Box<dyn Fn(&Context<S>) -> Result<(), HandlerError> + Send + Sync>;
type HandleFn<S> = Box<dyn Fn(&Context<S>) -> Result<CommandResponse, HandlerError> + Send + Sync>;

/// A registered command handler with optional guard.
struct CommandHandler<S> {
    guard: Option<GuardFn<S>>,
    handle: HandleFn<S>,
}

/// A microservice that routes commands to handler functions.
pub struct Service<S> {
    store: S,
    handlers: HashMap<String, CommandHandler<S>>,
    gate: Mutex<()>,
}

impl<S: Send + Sync + 'static> Service<S> {
    /// Create a new service with the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            handlers: HashMap::new(),
            gate: Mutex::new(()),
        }
    }

    /// Register a command handler.
    pub fn command<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context<S>) -> Result<CommandResponse, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: None,
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Register a command handler with a guard function.
    ///
    /// The guard runs before the handler; its error is returned as-is and
    /// the handler is skipped.
    pub fn command_guarded<G, F>(mut self, name: &str, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<S>) -> Result<(), HandlerError> + Send + Sync + 'static,
        F: Fn(&Context<S>) -> Result<CommandResponse, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: Some(Box::new(guard)),
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Dispatch a command by name.
    pub fn dispatch(
        &self,
        command: &str,
        input: Value,
        params: Params,
    ) -> Result<CommandResponse, HandlerError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;

        // The gate protects no data, so a poisoned lock is safe to reuse.
        let _turn = self.gate.lock().unwrap_or_else(|poisoned| {
            warn!(command, "dispatch gate poisoned by an earlier panic");
            poisoned.into_inner()
        });

        debug!(command, "dispatching command");
        let ctx = Context::new(input, params, &self.store);

        if let Some(guard) = &handler.guard {
            guard(&ctx)?;
        }

        (handler.handle)(&ctx)
    }

    /// Dispatch a `CommandRequest`, folding errors into the response.
    pub fn dispatch_request(&self, request: &CommandRequest) -> CommandResponse {
        let params = Params::from_map(request.params.clone());
        match self.dispatch(&request.command, request.input.clone(), params) {
            Ok(response) => response,
            Err(e) => CommandResponse::from_error(&e),
        }
    }

    /// List registered command names.
    pub fn commands(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

// =============================================================================
// Request / Response types
// =============================================================================

/// A transport-neutral command request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Command name — maps to a registered handler.
    pub command: String,
    /// Path parameters (e.g. `id`).
    #[serde(default)]
    pub params: HashMap<String, String>,
    /// JSON body forwarded to the handler.
    #[serde(default)]
    pub input: Value,
}

/// The status and JSON body produced by a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub status: u16,
    pub body: Value,
}

impl CommandResponse {
    pub fn ok(body: Value) -> Self {
        Self { status: 200, body }
    }

    pub fn created(body: Value) -> Self {
        Self { status: 201, body }
    }

    /// Error response: `{ "message": ... }` with the error's status code.
    pub fn from_error(err: &HandlerError) -> Self {
        Self {
            status: err.status_code(),
            body: serde_json::json!({ "message": err.message() }),
        }
    }
}

impl From<HandlerError> for CommandResponse {
    fn from(err: HandlerError) -> Self {
        Self::from_error(&err)
    }
}
