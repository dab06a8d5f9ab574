//! HTTP transport for microsvc — maps REST routes to command dispatch.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! For the `book` resource mounted at `/books`:
//!
//! - `POST /books` → `book.create` (body = JSON input)
//! - `GET /books` → `book.list`
//! - `GET /books/:id` → `book.get`
//! - `PUT /books/:id` → `book.update` (body = JSON input)
//! - `DELETE /books/:id` → `book.delete`
//!
//! An empty body is read as `{}`. A body that is not JSON is answered with
//! 400 before any command runs.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use super::error::HandlerError;
use super::params::Params;
use super::service::{CommandResponse, Service};

/// A REST resource: a collection path bound to a command prefix.
struct Resource<S> {
    service: Arc<Service<S>>,
    name: &'static str,
}

impl<S> Clone for Resource<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            name: self.name,
        }
    }
}

impl<S: Send + Sync + 'static> Resource<S> {
    /// Dispatch on the blocking pool: commands take the service gate and do
    /// synchronous file I/O, which must not stall the async workers.
    async fn run(&self, action: &str, params: Params, body: Bytes) -> Response {
        let command = format!("{}.{}", self.name, action);
        let service = self.service.clone();
        let task = tokio::task::spawn_blocking(move || {
            parse_body(&body).and_then(|input| service.dispatch(&command, input, params))
        });

        match task.await {
            Ok(Ok(response)) => response.into_response(),
            Ok(Err(e)) => CommandResponse::from_error(&e).into_response(),
            Err(e) => {
                error!(error = %e, "command task failed");
                CommandResponse {
                    status: 500,
                    body: json!({ "message": "Internal server error" }),
                }
                .into_response()
            }
        }
    }
}

/// Build an axum `Router` exposing the book routes of the given service.
pub fn router<S: Send + Sync + 'static>(service: Arc<Service<S>>) -> Router {
    resource_router(service, "/books", "book")
}

/// Mount a collection at `path`, dispatching `<name>.<action>` commands.
pub fn resource_router<S: Send + Sync + 'static>(
    service: Arc<Service<S>>,
    path: &str,
    name: &'static str,
) -> Router {
    let item_path = format!("{}/:id", path);
    Router::new()
        .route(path, get(list_handler::<S>).post(create_handler::<S>))
        .route(
            &item_path,
            get(get_handler::<S>)
                .put(update_handler::<S>)
                .delete(delete_handler::<S>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(Resource { service, name })
}

/// Serve the router on an already-bound listener until Ctrl-C.
pub async fn serve<S: Send + Sync + 'static>(
    service: Arc<Service<S>>,
    listener: TcpListener,
) -> Result<(), std::io::Error> {
    let app = router(service);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

impl IntoResponse for CommandResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body)).into_response()
    }
}

async fn create_handler<S: Send + Sync + 'static>(
    State(resource): State<Resource<S>>,
    body: Bytes,
) -> Response {
    resource.run("create", Params::new(), body).await
}

async fn list_handler<S: Send + Sync + 'static>(State(resource): State<Resource<S>>) -> Response {
    resource.run("list", Params::new(), Bytes::new()).await
}

async fn get_handler<S: Send + Sync + 'static>(
    State(resource): State<Resource<S>>,
    Path(id): Path<String>,
) -> Response {
    resource.run("get", Params::with_id(id), Bytes::new()).await
}

async fn update_handler<S: Send + Sync + 'static>(
    State(resource): State<Resource<S>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    resource.run("update", Params::with_id(id), body).await
}

async fn delete_handler<S: Send + Sync + 'static>(
    State(resource): State<Resource<S>>,
    Path(id): Path<String>,
) -> Response {
    resource.run("delete", Params::with_id(id), Bytes::new()).await
}

/// Parse a request body as JSON. Blank bodies read as `{}`.
fn parse_body(body: &[u8]) -> Result<Value, HandlerError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|e| HandlerError::DecodeFailed(e.to_string()))
}
