//! Error types for microsvc command handlers.

use std::error::Error;
use std::fmt;

/// Error type for command handler operations.
///
/// Only client-facing conditions live here. Storage failures are absorbed by
/// the `Books` accessor and never become a `HandlerError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerError {
    /// No handler registered for this command name.
    UnknownCommand(String),
    /// Request body could not be parsed or decoded.
    DecodeFailed(String),
    /// A guard rejected the input (e.g. a required field is missing).
    Validation(String),
    /// No record with the requested identifier.
    NotFound { resource: &'static str, id: String },
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::UnknownCommand(name) => write!(f, "unknown command: {}", name),
            HandlerError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            HandlerError::Validation(msg) => write!(f, "validation failed: {}", msg),
            HandlerError::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
        }
    }
}

impl Error for HandlerError {}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownCommand(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::Validation(_) => 400,
            HandlerError::NotFound { .. } => 404,
        }
    }

    /// The human-readable text returned to the client as `message`.
    pub fn message(&self) -> String {
        match self {
            HandlerError::UnknownCommand(_) => "Not found".to_string(),
            HandlerError::DecodeFailed(msg) => msg.clone(),
            HandlerError::Validation(msg) => msg.clone(),
            HandlerError::NotFound { resource, .. } => format!("{} not found", resource),
        }
    }
}
