//! Error types for elfprobe operations.
//!
//! Load failures and inspect failures are errors; bounds questions are not.
//! Accessors that merely ask "does this range exist in the buffer?" answer
//! with `Option` instead, so a truncated or hostile file degrades to absent
//! views rather than error plumbing.

use thiserror::Error;

/// Main error type for elfprobe operations.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// File I/O errors while opening or reading a source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source delivered fewer bytes than its declared length
    #[error("Short read: expected {expected} bytes, got {got}")]
    ShortRead { expected: u64, got: u64 },

    /// File size of `found` bytes exceeds the configured cap
    #[error("File size of {found} bytes exceeds the maximum allowed size of {limit} bytes")]
    FileTooLarge { limit: u64, found: u64 },

    /// The object layer could not make sense of the image
    #[error("Malformed object: {0}")]
    Malformed(String),
}

/// Result type alias for elfprobe operations
pub type Result<T> = std::result::Result<T, ProbeError>;
