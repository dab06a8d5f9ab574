//! library_api — a small HTTP/JSON service over a collection of books kept
//! in one JSON document.
//!
//! Requests are dispatched as named commands (`book.create`, `book.list`,
//! `book.get`, `book.update`, `book.delete`) against a `BookStore`. The
//! whole collection is read and rewritten on every call.

mod book;
pub mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod microsvc;
mod store;

pub use book::{is_truthy, Book, BookPatch, PATCHABLE_FIELDS, REQUIRED_FIELDS};
pub use config::{Config, ConfigError};
pub use error::StoreError;
pub use store::{BookStore, Books, BooksExt, InMemoryBookStore, JsonFileStore};
