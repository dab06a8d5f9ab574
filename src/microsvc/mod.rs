//! microsvc — Convention-based command handler framework.
//!
//! A `Service` owns a store and a registry of named command handlers. Each
//! handler receives a `Context<S>` with the JSON input, the path parameters,
//! and the store. Transports (HTTP here) only translate requests into
//! `dispatch` calls and `CommandResponse`s back into replies.
//!
//! ## Handler Convention
//!
//! Each handler file follows this convention:
//!
//! ```ignore
//! // src/handlers/book_get.rs
//!
//! pub const COMMAND: &str = "book.get";
//!
//! pub fn guard<S>(_ctx: &microsvc::Context<S>) -> Result<(), microsvc::HandlerError> {
//!     Ok(())
//! }
//!
//! pub fn handle<S: BookStore>(
//!     ctx: &microsvc::Context<S>,
//! ) -> Result<microsvc::CommandResponse, microsvc::HandlerError> {
//!     let id = ctx.param("id")?;
//!     // ...
//! }
//! ```

mod context;
mod error;
mod params;
mod service;

pub use context::Context;
pub use error::HandlerError;
pub use params::Params;
pub use service::{CommandRequest, CommandResponse, Service};

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{resource_router, router, serve};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `COMMAND: &str` — the command name
/// - `guard(ctx) -> Result<(), HandlerError>` — input validation
/// - `handle(ctx) -> Result<CommandResponse, HandlerError>` — the handler
///
/// # Example
/// ```ignore
/// let service = library_api::register_handlers!(
///     microsvc::Service::new(InMemoryBookStore::new()),
///     handlers::book_create,
///     handlers::book_list,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .command_guarded(
                $($seg)::+::COMMAND,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}
