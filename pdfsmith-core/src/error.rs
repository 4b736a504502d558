use crate::objects::ObjectId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid PDF structure: {0}")]
    InvalidStructure(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Dictionary has no entry for key /{0}")]
    MissingKey(String),

    #[error("Unknown object: {0}")]
    UnknownObject(ObjectId),

    #[error("Invalid object reference: {0} points to an unregistered object")]
    UnregisteredReference(ObjectId),

    #[error("Compression error: {0}")]
    CompressionError(String),

    #[error("Invalid PDF structure: trailer has no valid Root object")]
    MissingRoot,
}

pub type Result<T> = std::result::Result<T, PdfError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_pdf_error_display() {
        let error = PdfError::InvalidStructure("test message".to_string());
        assert_eq!(error.to_string(), "Invalid PDF structure: test message");
    }

    #[test]
    fn test_pdf_error_from_io_error() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let pdf_error = PdfError::from(io_error);

        match pdf_error {
            PdfError::Io(ref err) => {
                assert_eq!(err.kind(), ErrorKind::NotFound);
            }
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_error_chain_display() {
        let errors = [
            (
                "Dictionary has no entry for key /Kids",
                PdfError::MissingKey("Kids".to_string()),
            ),
            ("Unknown object: 7 0 R", PdfError::UnknownObject(ObjectId::new(7, 0))),
            (
                "Invalid object reference: 9 0 R points to an unregistered object",
                PdfError::UnregisteredReference(ObjectId::new(9, 0)),
            ),
            (
                "Compression error: deflate failed",
                PdfError::CompressionError("deflate failed".to_string()),
            ),
            (
                "Invalid PDF structure: trailer has no valid Root object",
                PdfError::MissingRoot,
            ),
        ];

        for (expected, error) in errors {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_error_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PdfError>();
    }
}
