//! Handler: book.create
//!
//! Appends a new book to the collection. Identifier uniqueness is not
//! checked: a second book with the same `book_id` is appended as well.

use serde_json::json;
use tracing::info;

use crate::book::{Book, REQUIRED_FIELDS};
use crate::microsvc::{CommandResponse, Context, HandlerError};
use crate::store::{BookStore, BooksExt};

pub const COMMAND: &str = "book.create";

pub const MISSING_FIELDS: &str = "All book fields are required.";

/// Every field must be present and truthy; `copies: 0` counts as missing.
pub fn guard<S>(ctx: &Context<S>) -> Result<(), HandlerError> {
    if ctx.has_fields(&REQUIRED_FIELDS) {
        Ok(())
    } else {
        Err(HandlerError::Validation(MISSING_FIELDS.to_string()))
    }
}

pub fn handle<S: BookStore>(ctx: &Context<S>) -> Result<CommandResponse, HandlerError> {
    let book = ctx.input::<Book>()?;

    let books = ctx.store().books();
    let mut collection = books.load();
    collection.push(book.clone());
    books.save(&collection);

    info!(book_id = %book.book_id, total = collection.len(), "book added");
    Ok(CommandResponse::created(json!({
        "message": "Book added successfully",
        "book": book,
    })))
}
