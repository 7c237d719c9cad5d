//! Bounded byte buffer for safe access to untrusted file images.
//!
//! A `Buffer` owns an immutable byte sequence and its length, and hands out
//! borrowed slices only after validating the requested range against that
//! length. Everything above this module goes through `slice`/`byte_at`;
//! there is no unchecked access path.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use bytes::Bytes;
use tracing::{debug, warn};

use crate::error::{ProbeError, Result};

/// Resource limits applied when loading a buffer from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IoLimits {
    /// The absolute maximum file size that can be loaded.
    pub max_file_size: u64,
}

impl Default for IoLimits {
    fn default() -> Self {
        Self {
            max_file_size: 100 * 1024 * 1024, // 100MB
        }
    }
}

/// An owned, immutable byte image with length-checked access.
///
/// Views returned by [`slice`](Buffer::slice) borrow from the buffer and
/// cannot outlive it. Storage is released exactly once, on drop.
#[derive(Debug, Clone)]
pub struct Buffer {
    data: Bytes,
}

impl Buffer {
    /// Loads the entire named file into owned storage with default limits.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_limits(path, &IoLimits::default())
    }

    /// Loads the entire named file into owned storage.
    ///
    /// Fails with [`ProbeError::FileTooLarge`] when the file exceeds
    /// `limits.max_file_size`, and with [`ProbeError::ShortRead`] when fewer
    /// bytes arrive than the file's declared length. No partial buffer is
    /// returned on any error path.
    pub fn load_with_limits<P: AsRef<Path>>(path: P, limits: &IoLimits) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)?;
        let declared = file.metadata()?.len();

        debug!(
            path = %path.display(),
            size = declared,
            limit = limits.max_file_size,
            "Loading file into buffer"
        );

        if declared > limits.max_file_size {
            warn!(
                path = %path.display(),
                size = declared,
                limit = limits.max_file_size,
                "File is too large"
            );
            return Err(ProbeError::FileTooLarge {
                limit: limits.max_file_size,
                found: declared,
            });
        }

        let mut data = Vec::with_capacity(declared as usize);
        let got = file.read_to_end(&mut data)? as u64;
        if got < declared {
            warn!(
                path = %path.display(),
                expected = declared,
                got = got,
                "Short read while loading"
            );
            return Err(ProbeError::ShortRead {
                expected: declared,
                got,
            });
        }

        Ok(Self {
            data: Bytes::from(data),
        })
    }

    /// Wraps an in-memory byte source. Loader swap point for callers that
    /// already hold the image.
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Total length of the owned storage in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// True iff the buffer holds any bytes at all.
    ///
    /// Every accessor treats an unusable buffer as a universal precondition
    /// failure and answers `None`.
    pub fn is_usable(&self) -> bool {
        !self.data.is_empty()
    }

    /// Borrows `len` bytes starting at `offset`.
    ///
    /// Returns `Some` iff the buffer is usable, `offset <= size`, and
    /// `offset + len <= size`. The addition is checked, so offsets near
    /// `u64::MAX` answer `None` instead of wrapping.
    pub fn slice(&self, offset: u64, len: usize) -> Option<&[u8]> {
        if !self.is_usable() {
            return None;
        }
        let size = self.data.len() as u64;
        if offset > size {
            return None;
        }
        let end = offset.checked_add(len as u64)?;
        if end > size {
            return None;
        }
        let start = offset as usize;
        Some(&self.data[start..start + len])
    }

    /// Reads the single byte at `offset`, `None` when out of bounds.
    pub fn byte_at(&self, offset: u64) -> Option<u8> {
        self.slice(offset, 1).map(|s| s[0])
    }

    /// The whole image. Same borrow discipline as `slice`, without a range.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_file(content: &[u8]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content).unwrap();
        temp_file
    }

    #[test]
    fn load_round_trip() {
        let file = create_temp_file(b"hello world");
        let buffer = Buffer::load(file.path()).unwrap();
        assert_eq!(buffer.size(), 11);
        assert!(buffer.is_usable());
        assert_eq!(buffer.as_bytes(), b"hello world");
    }

    #[test]
    fn load_file_too_large() {
        let file = create_temp_file(&[0; 100]);
        let limits = IoLimits { max_file_size: 50 };
        let result = Buffer::load_with_limits(file.path(), &limits);
        assert!(matches!(result, Err(ProbeError::FileTooLarge { .. })));
    }

    #[test]
    fn load_missing_file() {
        let result = Buffer::load("/nonexistent/elfprobe-test-file");
        assert!(matches!(result, Err(ProbeError::Io(_))));
    }

    #[test]
    fn empty_buffer_is_unusable() {
        let file = create_temp_file(b"");
        let buffer = Buffer::load(file.path()).unwrap();
        assert_eq!(buffer.size(), 0);
        assert!(!buffer.is_usable());
        assert!(buffer.slice(0, 0).is_none());
        assert!(buffer.byte_at(0).is_none());
    }

    #[test]
    fn slice_bounds() {
        let buffer = Buffer::from_bytes(&b"hello world"[..]);

        assert_eq!(buffer.slice(0, 5).unwrap(), b"hello");
        assert_eq!(buffer.slice(6, 5).unwrap(), b"world");
        // Read ending exactly at the last valid byte is allowed.
        assert_eq!(buffer.slice(0, 11).unwrap(), b"hello world");
        assert_eq!(buffer.slice(10, 1).unwrap(), b"d");
        assert_eq!(buffer.slice(11, 0).unwrap(), b"");

        assert!(buffer.slice(0, 12).is_none());
        assert!(buffer.slice(11, 1).is_none());
        assert!(buffer.slice(12, 0).is_none());
    }

    #[test]
    fn slice_never_overflows() {
        let buffer = Buffer::from_bytes(&b"hello"[..]);
        assert!(buffer.slice(u64::MAX, 1).is_none());
        assert!(buffer.slice(u64::MAX, usize::MAX).is_none());
        assert!(buffer.slice(1, usize::MAX).is_none());
        assert!(buffer.slice(u64::MAX - 1, 2).is_none());
    }

    #[test]
    fn byte_at_bounds() {
        let buffer = Buffer::from_bytes(&b"ab"[..]);
        assert_eq!(buffer.byte_at(0), Some(b'a'));
        assert_eq!(buffer.byte_at(1), Some(b'b'));
        assert_eq!(buffer.byte_at(2), None);
        assert_eq!(buffer.byte_at(u64::MAX), None);
    }
}
