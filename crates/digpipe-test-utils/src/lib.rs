//! Test utilities and mock types for digpipe development.
//!
//! Provides in-memory implementations of the storage and sink seams
//! ([`MemoryTape`], [`CollectingSink`]) and fixed digit fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{digits_of, PI_DIGITS};

use std::collections::BTreeMap;

use digpipe_core::{Action, ActionSink, DigitChunk, SinkError, TapeHeader};
use digpipe_tape::{TapeError, TapeStore};

/// In-memory [`TapeStore`].
///
/// Applies the same admission checks as the file-backed store so tests
/// exercising validation behave identically.
#[derive(Clone, Debug, Default)]
pub struct MemoryTape {
    chunks: BTreeMap<u64, DigitChunk>,
    header: Option<TapeHeader>,
    writes: usize,
}

impl MemoryTape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chunks currently stored.
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Successful `write_chunk` calls, including overwrites.
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Drop the chunk at `index`, leaving a gap.
    pub fn remove_chunk(&mut self, index: u64) -> Option<DigitChunk> {
        self.chunks.remove(&index)
    }
}

impl TapeStore for MemoryTape {
    fn write_chunk(&mut self, chunk: &DigitChunk) -> Result<(), TapeError> {
        chunk.validate()?;
        self.chunks.insert(chunk.index(), chunk.clone());
        self.writes += 1;
        Ok(())
    }

    fn read_chunk(&self, index: u64) -> Result<DigitChunk, TapeError> {
        self.chunks
            .get(&index)
            .cloned()
            .ok_or(TapeError::ChunkNotFound { index })
    }

    fn exists(&self, index: u64) -> bool {
        self.chunks.contains_key(&index)
    }

    fn write_header(&mut self, header: &TapeHeader) -> Result<(), TapeError> {
        self.header = Some(header.clone());
        Ok(())
    }

    fn read_header(&self) -> Result<TapeHeader, TapeError> {
        self.header.clone().ok_or_else(|| TapeError::HeaderNotFound {
            path: "<memory>".into(),
        })
    }
}

/// [`ActionSink`] that keeps every action in memory.
#[derive(Clone, Debug, Default)]
pub struct CollectingSink {
    pub actions: Vec<Action>,
    closed: bool,
    close_calls: usize,
    fail_after: Option<usize>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose writes fail once it holds `n` actions.
    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::default()
        }
    }

    /// How many times `close` was called.
    pub fn close_calls(&self) -> usize {
        self.close_calls
    }

    /// Every action rendered as a frame-log line.
    pub fn lines(&self) -> Vec<String> {
        self.actions.iter().map(|a| a.to_string()).collect()
    }
}

impl ActionSink for CollectingSink {
    fn write_actions(&mut self, actions: &[Action]) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        if let Some(limit) = self.fail_after {
            if self.actions.len() + actions.len() > limit {
                return Err(SinkError::Io(std::io::Error::other("injected sink failure")));
            }
        }
        self.actions.extend_from_slice(actions);
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        self.close_calls += 1;
        self.closed = true;
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}
