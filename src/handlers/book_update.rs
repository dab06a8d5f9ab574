//! Handler: book.update
//!
//! Overwrites the truthy fields of the body onto the first book with the
//! given id. The collection is read once and written once, inside the
//! service's dispatch gate, so no concurrent change is dropped.

use serde_json::json;
use tracing::info;

use super::not_found;
use crate::book::BookPatch;
use crate::microsvc::{CommandResponse, Context, HandlerError};
use crate::store::{BookStore, BooksExt};

pub const COMMAND: &str = "book.update";

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

    let patch = BookPatch::from_input(ctx.raw_input());
    let book = &mut collection[position];
    patch.apply_to(book);
    let book = book.clone();

    books.save(&collection);

    info!(book_id = %id, "book updated");
    Ok(CommandResponse::ok(json!({
        "message": "Book updated successfully",
        "book": book,
    })))
}
