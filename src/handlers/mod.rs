//! Book command handlers, one file per route.
//!
//! Every handler re-reads the collection from the store; nothing is cached
//! between requests.

use crate::microsvc::{HandlerError, Service};
use crate::store::BookStore;

pub mod book_create;
pub mod book_delete;
pub mod book_get;
pub mod book_list;
pub mod book_update;

/// Build a service with all book commands registered.
pub fn service<S: BookStore + 'static>(store: S) -> Service<S> {
    crate::register_handlers!(
        Service::new(store),
        book_create,
        book_list,
        book_get,
        book_update,
        book_delete,
    )
}

pub(crate) fn not_found(id: &str) -> HandlerError {
    HandlerError::NotFound {
        resource: "Book",
        id: id.to_string(),
    }
}
