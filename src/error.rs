use std::fmt;

/// Failure at the storage boundary.
///
/// Never surfaced to HTTP clients: the `Books` accessor logs it and degrades
/// to an empty collection (reads) or a no-op (writes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Io { path: String, message: String },
    Serde(String),
    LockPoisoned(&'static str),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, message } => {
                write!(f, "i/o error on {}: {}", path, message)
            }
            StoreError::Serde(message) => write!(f, "book document is malformed: {}", message),
            StoreError::LockPoisoned(operation) => {
                write!(f, "store lock poisoned during {}", operation)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serde(err.to_string())
    }
}
