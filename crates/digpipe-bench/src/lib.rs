//! Benchmark inputs for digpipe.
//!
//! - [`pi_chunk`]: one chunk cut from a computed π expansion
//! - [`cycled_chunk`]: a chunk of arbitrary size without computing π

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use digpipe_core::{DigitChunk, DigitSource};
use digpipe_source::PiDigitSource;

/// Chunk `index` of `chunk_size` π digits.
///
/// Computes `(index + 1) * chunk_size` digits, so keep inputs modest.
/// Returns `None` if the chunk would have odd length or lie past the end.
pub fn pi_chunk(index: u64, chunk_size: u64) -> Option<DigitChunk> {
    let source = PiDigitSource::new((index + 1) * chunk_size);
    source.chunk(index, chunk_size).filter(|c| c.len() % 2 == 0)
}

/// A chunk of `len` digits cycling `0..=9`, for sizes where computing π
/// would dominate setup.
pub fn cycled_chunk(index: u64, len: usize) -> DigitChunk {
    DigitChunk::new(index, (0..len).map(|i| (i % 10) as u8).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pi_chunk_is_valid() {
        let chunk = pi_chunk(1, 10).unwrap();
        assert_eq!(chunk.index(), 1);
        assert_eq!(chunk.digits(), &[5, 8, 9, 7, 9, 3, 2, 3, 8, 4]);
        assert!(chunk.validate().is_ok());
    }

    #[test]
    fn cycled_chunk_is_valid() {
        let chunk = cycled_chunk(3, 1_000);
        assert_eq!(chunk.len(), 1_000);
        assert!(chunk.validate().is_ok());
    }
}
