//! Error handling module.
//!
//! Only strict construction can fail. Rendering never returns an error; see
//! [`crate::domain::render`].

/// Storage kind error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindError {
    /// No canonical kind has this identifier.
    #[error("Storage kind not found: {0}")]
    NotFound(String),
}

impl KindError {
    /// The identifier that failed to resolve.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::NotFound(identifier) => identifier,
        }
    }
}

/// Result type alias using `KindError`.
pub type Result<T> = std::result::Result<T, KindError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = KindError::NotFound("FileManager.desktopDirectory".to_string());
        assert_eq!(
            err.to_string(),
            "Storage kind not found: FileManager.desktopDirectory"
        );
        assert_eq!(err.identifier(), "FileManager.desktopDirectory");
    }
}
