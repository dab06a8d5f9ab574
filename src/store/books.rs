//! Books - Typed accessor over a BookStore with silent recovery.

use tracing::error;

use super::BookStore;
use crate::book::Book;
use crate::error::StoreError;

/// Accessor used by handlers to load and save the collection.
///
/// `load` and `save` never fail: storage errors are logged and swallowed,
/// so a request is never answered with a 5xx because of the document.
/// `try_load` and `try_save` expose the underlying outcome.
pub struct Books<'a, S> {
    store: &'a S,
}

impl<'a, S: BookStore> Books<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn try_load(&self) -> Result<Vec<Book>, StoreError> {
        self.store.read_books()
    }

    pub fn try_save(&self, books: &[Book]) -> Result<(), StoreError> {
        self.store.write_books(books)
    }

    /// Load the full collection. An unreadable document reads as empty.
    pub fn load(&self) -> Vec<Book> {
        match self.try_load() {
            Ok(books) => books,
            Err(e) => {
                error!(error = %e, "error reading the book collection");
                Vec::new()
            }
        }
    }

    /// Persist the full collection. Failures are logged only.
    pub fn save(&self, books: &[Book]) {
        if let Err(e) = self.try_save(books) {
            error!(error = %e, count = books.len(), "error writing the book collection");
        }
    }

    /// First book whose id equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<Book> {
        self.load().into_iter().find(|book| book.has_id(id))
    }
}

/// Extension trait for typed book access on any BookStore.
pub trait BooksExt: BookStore + Sized {
    fn books(&self) -> Books<'_, Self> {
        Books::new(self)
    }
}

impl<S: BookStore> BooksExt for S {}
