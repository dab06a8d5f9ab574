//! JsonFileStore - The book collection as one pretty-printed JSON document.

use std::fs;
use std::path::{Path, PathBuf};

use super::BookStore;
use crate::book::Book;
use crate::error::StoreError;

/// Book store backed by a single JSON file holding an array of books.
///
/// Every write re-serializes the full array with two-space indentation and
/// overwrites the file in one synchronous call. There is no locking; callers
/// serialize access themselves.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, err: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.display().to_string(),
            message: err.to_string(),
        }
    }
}

impl BookStore for JsonFileStore {
    fn read_books(&self) -> Result<Vec<Book>, StoreError> {
        let bytes = fs::read(&self.path).map_err(|e| self.io_error(e))?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    fn write_books(&self, books: &[Book]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(books)?;
        fs::write(&self.path, bytes).map_err(|e| self.io_error(e))
    }
}
