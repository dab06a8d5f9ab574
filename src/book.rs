//! Book — the single record type held in the collection.
//!
//! Every field is kept as a raw JSON value: field types are never checked,
//! and a document written with numeric titles or ids still loads.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields that must all be present and truthy to create a book.
pub const REQUIRED_FIELDS: [&str; 6] = ["book_id", "title", "author", "genre", "year", "copies"];

/// Fields a partial update may overwrite. `book_id` is never patched.
pub const PATCHABLE_FIELDS: [&str; 5] = ["title", "author", "genre", "year", "copies"];

/// A persisted book record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub book_id: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub author: Value,
    #[serde(default)]
    pub genre: Value,
    #[serde(default)]
    pub year: Value,
    #[serde(default)]
    pub copies: Value,
}

impl Book {
    /// Strict equality with a path identifier: only a string `book_id`
    /// can match, so a record stored with `book_id: 7` is never found as "7".
    pub fn has_id(&self, id: &str) -> bool {
        self.book_id.as_str() == Some(id)
    }
}

/// A partial update. Only `Some` fields are written onto the target book.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<Value>,
    pub author: Option<Value>,
    pub genre: Option<Value>,
    pub year: Option<Value>,
    pub copies: Option<Value>,
}

impl BookPatch {
    /// Build a patch from a raw request body, dropping falsy fields first.
    ///
    /// `{"copies": 0}` and `{"title": ""}` therefore leave the book untouched.
    pub fn from_input(input: &Value) -> Self {
        let mut fields = truthy_fields(input, &PATCHABLE_FIELDS);
        Self {
            title: fields.remove("title"),
            author: fields.remove("author"),
            genre: fields.remove("genre"),
            year: fields.remove("year"),
            copies: fields.remove("copies"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.genre.is_none()
            && self.year.is_none()
            && self.copies.is_none()
    }

    /// Overwrite the fields this patch carries.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(title) = &self.title {
            book.title = title.clone();
        }
        if let Some(author) = &self.author {
            book.author = author.clone();
        }
        if let Some(genre) = &self.genre {
            book.genre = genre.clone();
        }
        if let Some(year) = &self.year {
            book.year = year.clone();
        }
        if let Some(copies) = &self.copies {
            book.copies = copies.clone();
        }
    }
}

/// JSON truthiness: `null`, `false`, zero and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Collect the named fields of `input` whose values are truthy.
///
/// Non-object inputs yield an empty map.
pub fn truthy_fields(input: &Value, fields: &[&str]) -> Map<String, Value> {
    let mut out = Map::new();
    for field in fields {
        if let Some(value) = input.get(*field) {
            if is_truthy(value) {
                out.insert((*field).to_string(), value.clone());
            }
        }
    }
    out
}
