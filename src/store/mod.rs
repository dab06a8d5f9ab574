//! Storage Accessor — whole-collection reads and writes of the book document.
//!
//! A `BookStore` moves the full collection in and out of persistent storage
//! and reports failures as `StoreError`. Handlers never call it directly:
//! they go through the typed `Books` accessor, which logs storage failures and
//! degrades them (empty collection on read, no-op on write).
//!
//! ## Example
//!
//! ```ignore
//! use library_api::{BooksExt, JsonFileStore};
//!
//! let store = JsonFileStore::new("./data.json");
//! let mut books = store.books().load();
//! books.push(book);
//! store.books().save(&books);
//! let found = store.books().find_by_id("b1");
//! ```

mod books;
mod file;
mod in_memory;
mod store;

pub use books::{Books, BooksExt};
pub use file::JsonFileStore;
pub use in_memory::InMemoryBookStore;
pub use store::BookStore;
