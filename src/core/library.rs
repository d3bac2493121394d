use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum LibraryError {
    // Raised only when an add would grow the registry past the capacity in force.
    // The registry is left untouched.
    LibraryFull {
        message: String,
        capacity: usize,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn library_full(message: &str, capacity: usize) -> LibraryError {
        LibraryError::LibraryFull { message: message.to_string(), capacity }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn is_library_full(&self) -> bool {
        matches!(self, LibraryError::LibraryFull { .. })
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::LibraryFull { message, capacity } => {
                write!(f, "{} (capacity {})", message, capacity)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Borrowed,
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Borrowed => write!(f, "Borrowed"),
        }
    }
}

// BookKind tags the concrete book variants held by a library
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BookKind {
    Novel,
    Standard,
    Comic,
}

impl From<String> for BookKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Novel" => BookKind::Novel,
            "Book" => BookKind::Standard,
            "Comic" => BookKind::Comic,
            _ => BookKind::Standard,
        }
    }
}

impl Display for BookKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            BookKind::Novel => write!(f, "Novel"),
            BookKind::Standard => write!(f, "Book"),
            BookKind::Comic => write!(f, "Comic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::{BookKind, BookStatus, LibraryError};

    #[tokio::test]
    async fn test_should_create_library_full_error() {
        let err = LibraryError::library_full("library is full", 5);
        assert!(matches!(err, LibraryError::LibraryFull{ message: _, capacity: 5 }));
        assert!(err.is_library_full());
        assert_eq!("library is full (capacity 5)", err.to_string());
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        let err = LibraryError::serialization("test");
        assert!(matches!(err, LibraryError::Serialization{ message: _ }));
        assert!(!err.is_library_full());
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(LibraryError::runtime("test", None), LibraryError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_convert_json_error() {
        let json_err = serde_json::from_str::<BookStatus>("not json").unwrap_err();
        assert!(matches!(LibraryError::from(json_err), LibraryError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_format_book_kind() {
        for kind in [BookKind::Novel, BookKind::Standard, BookKind::Comic] {
            assert_eq!(kind, BookKind::from(kind.to_string()));
        }
        assert_eq!(BookKind::Standard, BookKind::from("Pamphlet".to_string()));
    }

    #[tokio::test]
    async fn test_should_default_to_available() {
        assert_eq!(BookStatus::Available, BookStatus::default());
        assert_eq!("Borrowed", BookStatus::Borrowed.to_string());
    }
}
