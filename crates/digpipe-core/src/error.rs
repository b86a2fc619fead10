//! Error types shared across pipeline stages.
//!
//! Organized by the boundary that raises them: chunk admission
//! (validation), mapping, and sink writes.

use std::io;

/// A chunk violates the storage invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChunkError {
    /// Chunk length is odd.
    #[error("chunk {index}: chunk size must be even, got {len} digits")]
    OddLength {
        /// Index of the offending chunk.
        index: u64,
        /// Its digit count.
        len: usize,
    },
    /// A digit value lies outside `0..=9`.
    #[error("chunk {index}: invalid digit {value} at position {position} (expected 0-9)")]
    DigitOutOfRange {
        /// Index of the offending chunk.
        index: u64,
        /// Position of the first bad digit within the chunk.
        position: usize,
        /// The bad value.
        value: u8,
    },
}

/// Errors from translating a chunk into actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MapError {
    /// The mapper has no control for this digit value.
    #[error("chunk {index}: no control mapped for digit {value}")]
    InvalidDigit {
        /// Index of the chunk being mapped.
        index: u64,
        /// The unmapped value.
        value: u8,
    },
    /// The frame cursor would exceed `u64::MAX`.
    #[error("frame cursor overflow in chunk {index}")]
    FrameOverflow {
        /// Index of the chunk being mapped.
        index: u64,
    },
}

/// Errors from recording actions.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The sink was closed before this write.
    #[error("sink is closed")]
    Closed,
    /// The underlying stream failed.
    #[error("sink I/O error: {0}")]
    Io(#[from] io::Error),
}
