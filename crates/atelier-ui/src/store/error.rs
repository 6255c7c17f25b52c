use std::fmt;

/// A rejected attribute write or lookup.
///
/// The store is left unchanged whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The dot-separated path does not name a known attribute or field.
    UnknownPath(String),
    /// The value's kind does not fit the field at `path`.
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
    /// Nested fields always hold a value; only whole attributes can be cleared.
    Required(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::UnknownPath(path) => write!(f, "unknown attribute path {path:?}"),
            StoreError::TypeMismatch { path, expected, found } => {
                write!(f, "attribute {path:?} expects {expected}, got {found}")
            }
            StoreError::Required(path) => write!(f, "attribute field {path:?} cannot be cleared"),
        }
    }
}

impl std::error::Error for StoreError {}
