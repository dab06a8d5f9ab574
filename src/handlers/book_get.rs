//! Handler: book.get

use serde_json::json;

use super::not_found;
use crate::microsvc::{CommandResponse, Context, HandlerError};
use crate::store::{BookStore, BooksExt};

pub const COMMAND: &str = "book.get";

pub fn guard<S>(ctx: &Context<S>) -> Result<(), HandlerError> {
    ctx.param("id").map(|_| ())
}

pub fn handle<S: BookStore>(ctx: &Context<S>) -> Result<CommandResponse, HandlerError> {
    let id = ctx.param("id")?;
    let book = ctx
        .store()
        .books()
        .find_by_id(id)
        .ok_or_else(|| not_found(id))?;

    Ok(CommandResponse::ok(json!({ "book": book })))
}
