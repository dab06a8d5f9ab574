//! InMemoryBookStore - Vec-backed book store for testing and embedding.

use std::sync::{Arc, RwLock};

use super::BookStore;
use crate::book::Book;
use crate::error::StoreError;

/// In-memory book store. Clone-friendly via Arc; clones share storage.
#[derive(Clone, Default)]
pub struct InMemoryBookStore {
    storage: Arc<RwLock<Vec<Book>>>,
}

impl InMemoryBookStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given collection.
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(books)),
        }
    }
}

impl BookStore for InMemoryBookStore {
    fn read_books(&self) -> Result<Vec<Book>, StoreError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))?;
        Ok(storage.clone())
    }

    fn write_books(&self, books: &[Book]) -> Result<(), StoreError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))?;
        *storage = books.to_vec();
        Ok(())
    }
}
