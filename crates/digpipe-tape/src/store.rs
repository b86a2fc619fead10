//! The [`TapeStore`] trait and sequential chunk iteration.

use digpipe_core::{DigitChunk, TapeHeader};

use crate::error::TapeError;

/// Durable, chunk-indexed storage for one tape.
///
/// # Contract
///
/// - [`write_chunk`](TapeStore::write_chunk) validates before touching
///   storage: odd-length chunks and digits outside `0..=9` are rejected
///   with [`TapeError::InvalidChunk`] and leave no partial record.
/// - Writing an index that already exists replaces it; a reader sees
///   either the old record or the new one, never a mix.
/// - Reading an index that was never written fails with
///   [`TapeError::ChunkNotFound`]; [`exists`](TapeStore::exists) answers
///   the same question without failing.
/// - Reading the header before it is written fails with
///   [`TapeError::HeaderNotFound`].
///
/// One writer at a time, never interleaved with readers.
pub trait TapeStore {
    /// Persist `chunk` at its declared index.
    fn write_chunk(&mut self, chunk: &DigitChunk) -> Result<(), TapeError>;

    /// Read back the chunk at `index`.
    fn read_chunk(&self, index: u64) -> Result<DigitChunk, TapeError>;

    /// Whether a chunk is stored at `index`.
    fn exists(&self, index: u64) -> bool;

    /// Persist the tape header.
    fn write_header(&mut self, header: &TapeHeader) -> Result<(), TapeError>;

    /// Read the tape header.
    fn read_header(&self) -> Result<TapeHeader, TapeError>;

    /// Iterate chunks from `start` until the first index with no chunk.
    fn chunks_from(&self, start: u64) -> ChunkIter<'_, Self>
    where
        Self: Sized,
    {
        ChunkIter {
            store: self,
            next: start,
            done: false,
        }
    }

    /// Number of consecutive stored chunks beginning at `start`.
    ///
    /// Counting ends at `u64::MAX`, the last addressable index.
    fn contiguous_chunks(&self, start: u64) -> u64 {
        let mut count = 0u64;
        let mut index = Some(start);
        while let Some(i) = index.filter(|&i| self.exists(i)) {
            count = count.saturating_add(1);
            index = i.checked_add(1);
        }
        count
    }
}

/// Iterator adapter over stored chunks.
///
/// Yields `Ok(chunk)` for each consecutive index, stops at the first gap,
/// and stops after yielding the first error. A chunk at `u64::MAX` is the
/// last one yielded.
pub struct ChunkIter<'a, S> {
    store: &'a S,
    next: u64,
    done: bool,
}

impl<S> ChunkIter<'_, S> {
    /// Index of the chunk the next call will read.
    pub fn next_index(&self) -> u64 {
        self.next
    }
}

impl<S: TapeStore> Iterator for ChunkIter<'_, S> {
    type Item = Result<DigitChunk, TapeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || !self.store.exists(self.next) {
            self.done = true;
            return None;
        }
        match self.store.read_chunk(self.next) {
            Ok(chunk) => {
                match self.next.checked_add(1) {
                    Some(next) => self.next = next,
                    None => self.done = true,
                }
                Some(Ok(chunk))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
