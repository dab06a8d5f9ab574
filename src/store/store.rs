//! BookStore - Abstract whole-collection storage.

use crate::book::Book;
use crate::error::StoreError;

/// Persistent storage for the full, ordered book collection.
///
/// There are no partial reads or writes: `write_books` replaces everything
/// previously stored.
pub trait BookStore: Send + Sync {
    /// Read the entire collection in insertion order.
    fn read_books(&self) -> Result<Vec<Book>, StoreError>;

    /// Overwrite the entire collection.
    fn write_books(&self, books: &[Book]) -> Result<(), StoreError>;
}
