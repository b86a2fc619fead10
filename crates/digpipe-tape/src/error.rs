//! Error types for tape storage.

use std::io;
use std::path::PathBuf;

use digpipe_core::ChunkError;

/// Errors that can occur while writing or reading a tape.
#[derive(Debug, thiserror::Error)]
pub enum TapeError {
    /// An I/O error occurred during read or write.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// A chunk was rejected at write time.
    #[error("invalid chunk: {0}")]
    InvalidChunk(#[from] ChunkError),
    /// A chunk has more digits than the format can address.
    #[error("chunk {index} holds {len} digits, above the u32 limit")]
    ChunkTooLarge {
        /// Index of the offending chunk.
        index: u64,
        /// Its digit count.
        len: usize,
    },
    /// No chunk exists at the requested index.
    #[error("chunk {index} not found")]
    ChunkNotFound {
        /// The requested index.
        index: u64,
    },
    /// The tape has no header, usually because it was never generated.
    #[error("tape header not found at {}", path.display())]
    HeaderNotFound {
        /// Where the header was expected.
        path: PathBuf,
    },
    /// The chunk file does not start with the expected `b"DGTP"` magic bytes.
    #[error("invalid magic bytes (expected b\"DGTP\")")]
    InvalidMagic,
    /// The format version is not supported by this build.
    #[error("unsupported format version {found}")]
    UnsupportedVersion {
        /// The version found in the file.
        found: u8,
    },
    /// A chunk record could not be decoded (truncated or corrupt data).
    #[error("malformed chunk: {detail}")]
    MalformedChunk {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The header record is not valid JSON for this format.
    #[error("malformed tape header: {0}")]
    Header(#[from] serde_json::Error),
}

impl TapeError {
    /// Whether this error means the requested chunk or tape is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ChunkNotFound { .. } | Self::HeaderNotFound { .. }
        )
    }
}
