//! Error types for the mood board

use thiserror::Error;

/// Main error type for mood board operations
#[derive(Error, Debug)]
pub enum BoardError {
    /// Color value is not `#` followed by six hex digits
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// Mood keyword appears more than once (keywords double as render keys)
    #[error("Duplicate mood keyword: {0}")]
    DuplicateKeyword(String),

    /// Swatch name appears more than once (names double as render keys)
    #[error("Duplicate swatch name: {0}")]
    DuplicateSwatch(String),

    /// Image manifest did not have the expected shape
    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using BoardError
pub type BoardResult<T> = Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::InvalidHex("#12345".to_string());
        assert_eq!(format!("{}", err), "Invalid hex color: #12345");

        let err = BoardError::DuplicateKeyword("Freedom".to_string());
        assert_eq!(format!("{}", err), "Duplicate mood keyword: Freedom");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BoardError = io_err.into();
        assert!(matches!(err, BoardError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
        let err: BoardError = json_err.into();
        assert!(matches!(err, BoardError::Manifest(_)));
    }
}
