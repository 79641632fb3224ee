//! Custom error types for ps3mem

use std::fmt;
use thiserror::Error;

/// Main error type for remote memory operations
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("Process not found: {0}")]
    ProcessNotFound(String),

    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    #[error("Failed to read memory at {address}: {reason}")]
    ReadFailed { address: String, reason: String },

    #[error("Failed to write memory at {address}: {reason}")]
    WriteFailed { address: String, reason: String },

    #[error("Short transfer at {address}: expected {expected} bytes, got {actual}")]
    ShortTransfer {
        address: String,
        expected: usize,
        actual: usize,
    },

    #[error("No null terminator within {limit} bytes of {address}")]
    StringOverflow { address: String, limit: usize },

    #[error("No backend selected")]
    NoBackendSelected,

    #[error("Unsupported backend: {0}")]
    UnsupportedBackend(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for memory operations
pub type MemoryResult<T> = Result<T, MemoryError>;

impl MemoryError {
    /// Creates a read failed error
    pub fn read_failed(address: impl fmt::Display, reason: impl Into<String>) -> Self {
        MemoryError::ReadFailed {
            address: address.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a write failed error
    pub fn write_failed(address: impl fmt::Display, reason: impl Into<String>) -> Self {
        MemoryError::WriteFailed {
            address: address.to_string(),
            reason: reason.into(),
        }
    }

    /// Creates a short transfer error
    pub fn short_transfer(address: impl fmt::Display, expected: usize, actual: usize) -> Self {
        MemoryError::ShortTransfer {
            address: address.to_string(),
            expected,
            actual,
        }
    }

    /// Creates a string overflow error
    pub fn string_overflow(address: impl fmt::Display, limit: usize) -> Self {
        MemoryError::StringOverflow {
            address: address.to_string(),
            limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MemoryError::ProcessNotFound("rpcs3".to_string());
        assert_eq!(err.to_string(), "Process not found: rpcs3");

        let err = MemoryError::read_failed("0x00100000", "page fault");
        assert_eq!(
            err.to_string(),
            "Failed to read memory at 0x00100000: page fault"
        );

        let err = MemoryError::short_transfer("0x00100000", 8, 3);
        assert_eq!(
            err.to_string(),
            "Short transfer at 0x00100000: expected 8 bytes, got 3"
        );

        let err = MemoryError::string_overflow("0x00100000", 1024);
        assert_eq!(
            err.to_string(),
            "No null terminator within 1024 bytes of 0x00100000"
        );

        assert_eq!(
            MemoryError::NoBackendSelected.to_string(),
            "No backend selected"
        );
        assert_eq!(
            MemoryError::UnsupportedBackend("ccapi".to_string()).to_string(),
            "Unsupported backend: ccapi"
        );
    }

    #[test]
    fn test_helper_methods() {
        let err = MemoryError::write_failed("0xDEAD", "protected memory");
        match err {
            MemoryError::WriteFailed { address, reason } => {
                assert_eq!(address, "0xDEAD");
                assert_eq!(reason, "protected memory");
            }
            _ => panic!("Wrong error type"),
        }

        let err = MemoryError::short_transfer("0xBEEF", 4, 0);
        match err {
            MemoryError::ShortTransfer {
                expected, actual, ..
            } => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 0);
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_from_implementations() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "test");
        let mem_err: MemoryError = io_err.into();
        assert!(matches!(mem_err, MemoryError::Io(_)));

        let utf8_err = String::from_utf8(vec![0xFF, 0xFE, 0xFD]).unwrap_err();
        let mem_err: MemoryError = utf8_err.into();
        assert!(matches!(mem_err, MemoryError::Utf8(_)));
    }

    #[test]
    fn test_memory_result_type() {
        fn example() -> MemoryResult<u32> {
            Ok(42)
        }

        assert_eq!(example().unwrap(), 42);
    }
}
