//! Tape inspection: compare stored chunks against the header.

use std::path::Path;

use digpipe_core::TapeHeader;
use digpipe_tape::{FileTape, TapeStore};
use tracing::warn;

use crate::error::PipelineError;

/// What a tape holds versus what its header promises.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TapeSummary {
    /// The stored header.
    pub header: TapeHeader,
    /// Consecutive chunks present from index 0.
    pub chunks_present: u64,
    /// Digits across those chunks.
    pub digits_present: u64,
    /// `ceil(total_digits / chunk_size)` from the header.
    pub expected_chunks: u64,
}

impl TapeSummary {
    /// Whether the stored chunks account for every digit the header declares.
    pub fn is_complete(&self) -> bool {
        self.chunks_present == self.expected_chunks
            && self.digits_present == self.header.total_digits
    }
}

/// Read the header of `tape` and count its contiguous chunks.
///
/// Every present chunk is read back, so a corrupt record fails the
/// inspection rather than being counted.
pub fn inspect<S: TapeStore>(tape: &S) -> Result<TapeSummary, PipelineError> {
    let header = tape.read_header()?;
    let mut chunks_present = 0u64;
    let mut digits_present = 0u64;
    for chunk in tape.chunks_from(0) {
        digits_present += chunk?.len() as u64;
        chunks_present += 1;
    }

    let summary = TapeSummary {
        expected_chunks: header.expected_chunks(),
        header,
        chunks_present,
        digits_present,
    };
    if !summary.is_complete() {
        warn!(
            expected_chunks = summary.expected_chunks,
            chunks_present,
            total_digits = summary.header.total_digits,
            digits_present,
            "tape is incomplete"
        );
    }
    Ok(summary)
}

/// [`inspect`] the file tape at `path`.
pub fn inspect_path(path: impl AsRef<Path>) -> Result<TapeSummary, PipelineError> {
    inspect(&FileTape::new(path.as_ref()))
}
