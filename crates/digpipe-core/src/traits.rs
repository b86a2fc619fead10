//! Stage traits connecting sources, mappers, and sinks.
//!
//! All three traits are object-safe; the engine selects implementations
//! by name and holds them as trait objects.

use crate::action::Action;
use crate::chunk::DigitChunk;
use crate::error::{MapError, SinkError};

/// A deterministic, finite, restartable producer of digit chunks.
///
/// # Contract
///
/// - The stream is a pure function of the source's configuration:
///   the same `(index, chunk_size)` always yields the same chunk.
/// - Chunk `i` covers digits `i * chunk_size .. min((i + 1) * chunk_size, total)`.
/// - The last chunk may be shorter than `chunk_size`.
///
/// Restarting from any chunk index is a call to [`chunk`](DigitSource::chunk)
/// or [`chunks_from`](DigitSource::chunks_from); there is no hidden cursor.
pub trait DigitSource {
    /// Registry identifier (e.g. `"pi"`), recorded in the tape header.
    fn name(&self) -> &str;

    /// Total digits this source produces.
    fn total_digits(&self) -> u64;

    /// The chunk at `index`, or `None` past the end of the stream
    /// or when `chunk_size` is zero.
    fn chunk(&self, index: u64, chunk_size: u64) -> Option<DigitChunk>;

    /// Number of chunks the stream splits into at `chunk_size`.
    fn chunk_count(&self, chunk_size: u64) -> u64 {
        if chunk_size == 0 {
            return 0;
        }
        self.total_digits().div_ceil(chunk_size)
    }

    /// Lazy iterator over every chunk, starting at index 0.
    fn chunks(&self, chunk_size: u64) -> Chunks<'_, Self>
    where
        Self: Sized,
    {
        self.chunks_from(0, chunk_size)
    }

    /// Lazy iterator over chunks starting at `start`.
    fn chunks_from(&self, start: u64, chunk_size: u64) -> Chunks<'_, Self>
    where
        Self: Sized,
    {
        Chunks {
            source: self,
            chunk_size,
            next: start,
        }
    }
}

impl<S: DigitSource + ?Sized> DigitSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn total_digits(&self) -> u64 {
        (**self).total_digits()
    }

    fn chunk(&self, index: u64, chunk_size: u64) -> Option<DigitChunk> {
        (**self).chunk(index, chunk_size)
    }
}

/// Iterator adapter over a [`DigitSource`].
pub struct Chunks<'a, S> {
    source: &'a S,
    chunk_size: u64,
    next: u64,
}

impl<S: DigitSource> Iterator for Chunks<'_, S> {
    type Item = DigitChunk;

    fn next(&mut self) -> Option<DigitChunk> {
        let chunk = self.source.chunk(self.next, self.chunk_size)?;
        self.next += 1;
        Some(chunk)
    }
}

/// Actions produced from one chunk plus the advanced frame cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappedChunk {
    /// Actions in emission order; frames are non-decreasing.
    pub actions: Vec<Action>,
    /// Frame at which the first digit of the following chunk presses.
    pub next_frame: u64,
}

/// Translates digit chunks into timed device actions.
///
/// # Contract
///
/// `map_chunk` is a pure function of `(chunk, start_frame)` and the
/// mapper's construction-time configuration. Cross-chunk timing is
/// threaded explicitly: pass [`MappedChunk::next_frame`] as the
/// `start_frame` of the next call.
pub trait Mapper {
    /// Registry identifier (e.g. `"gba-tenkey"`).
    fn name(&self) -> &str;

    /// Device identifier stamped on every emitted action.
    fn device(&self) -> &'static str;

    /// Frames one digit advances the cursor by, or `None` if that
    /// overflows. Used to place a render that starts mid-tape on the
    /// tape's absolute timeline.
    fn frames_per_digit(&self) -> Option<u64>;

    /// Map every digit of `chunk`, starting at `start_frame`.
    fn map_chunk(&self, chunk: &DigitChunk, start_frame: u64) -> Result<MappedChunk, MapError>;
}

/// Durable recorder of action sequences.
///
/// A sink is acquired before the first write and closed exactly once.
/// Writes after [`close`](ActionSink::close) fail with [`SinkError::Closed`].
pub trait ActionSink {
    /// Record `actions` in order.
    fn write_actions(&mut self, actions: &[Action]) -> Result<(), SinkError>;

    /// Flush and release the sink. Closing an already closed sink is a no-op.
    fn close(&mut self) -> Result<(), SinkError>;

    /// Whether [`close`](ActionSink::close) has been called.
    fn is_closed(&self) -> bool;
}
