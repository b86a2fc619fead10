//! Pipeline error types.

use digpipe_core::{MapError, SinkError};
use digpipe_tape::TapeError;

/// A pipeline was configured with values it cannot run.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No source is registered under this name.
    #[error("unknown source '{name}' (known: {known})")]
    UnknownSource {
        /// The requested name.
        name: String,
        /// Registered names, comma separated.
        known: String,
    },
    /// No mapper is registered under this name.
    #[error("unknown mapper '{name}' (known: {known})")]
    UnknownMapper {
        /// The requested name.
        name: String,
        /// Registered names, comma separated.
        known: String,
    },
    /// No sink is registered under this name.
    #[error("unknown sink '{name}' (known: {known})")]
    UnknownSink {
        /// The requested name.
        name: String,
        /// Registered names, comma separated.
        known: String,
    },
    /// `chunk_size` is zero.
    #[error("chunk_size must be at least 1")]
    ZeroChunkSize,
}

/// Any failure of a generation, rendering, or inspection run.
///
/// Nothing is retried; the first error aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Tape validation, lookup, or I/O failure.
    #[error(transparent)]
    Tape(#[from] TapeError),
    /// A chunk could not be mapped.
    #[error(transparent)]
    Map(#[from] MapError),
    /// The sink rejected a write or failed to close.
    #[error(transparent)]
    Sink(#[from] SinkError),
    /// The absolute start frame for `start_chunk` exceeds `u64::MAX`.
    #[error("absolute start frame for chunk {start_chunk} overflows")]
    FrameOverflow {
        /// The requested start chunk.
        start_chunk: u64,
    },
}

impl PipelineError {
    /// Whether the run failed because a tape, header, or chunk is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Tape(e) if e.is_not_found())
    }
}
