//! Handler: book.list

use serde_json::json;

use crate::microsvc::{CommandResponse, Context, HandlerError};
use crate::store::{BookStore, BooksExt};

pub const COMMAND: &str = "book.list";

pub fn guard<S>(_ctx: &Context<S>) -> Result<(), HandlerError> {
    Ok(())
}

/// Never fails: an unreadable document lists as empty.
pub fn handle<S: BookStore>(ctx: &Context<S>) -> Result<CommandResponse, HandlerError> {
    let books = ctx.store().books().load();
    Ok(CommandResponse::ok(json!({ "books": books })))
}
