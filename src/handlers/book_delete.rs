//! Handler: book.delete
//!
//! Removes the first book with the given id. Repeating the call answers 404.

use serde_json::json;
use tracing::info;

use super::not_found;
use crate::microsvc::{CommandResponse, Context, HandlerError};
use crate::store::{BookStore, BooksExt};

pub const COMMAND: &str = "book.delete";

pub fn guard<S>(ctx: &Context<S>) -> Result<(), HandlerError> {
    ctx.param("id").map(|_| ())
}

pub fn handle<S: BookStore>(ctx: &Context<S>) -> Result<CommandResponse, HandlerError> {
    let id = ctx.param("id")?;

    let books = ctx.store().books();
    let mut collection = books.load();
    let position = collection
        .iter()
        .position(|book| book.has_id(id))
        .ok_or_else(|| not_found(id))?;

    collection.remove(position);
    books.save(&collection);

    info!(book_id = %id, remaining = collection.len(), "book deleted");
    Ok(CommandResponse::ok(json!({ "message": "Book deleted successfully" })))
}
