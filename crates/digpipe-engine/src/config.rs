//! Pipeline configuration and validation.
//!
//! [`GenerateConfig`] and [`RenderConfig`] are the inputs to the two
//! path-level entry points. [`validate()`](RenderConfig::validate) checks
//! names against the registries and numeric invariants before any I/O,
//! handing back the resolved registry kinds.

use std::path::PathBuf;

use digpipe_mapper::{GbaTenKeyMapper, MapperTiming};
use digpipe_sink::{FrameLogSink, OutputTarget};
use digpipe_source::PiDigitSource;

use crate::error::ConfigError;
use crate::registry::{MapperKind, SinkKind, SourceKind};

/// Digits per chunk when none is given.
pub const DEFAULT_CHUNK_SIZE: u64 = 1_000_000;

// ── FrameOrigin ────────────────────────────────────────────────────

/// Where frame numbering starts when rendering from `start_chunk > 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameOrigin {
    /// The first rendered digit presses at frame 0.
    #[default]
    Restart,
    /// Frames continue the tape's absolute timeline, as if every skipped
    /// chunk had also been rendered: the first press lands at
    /// `start_chunk × chunk_size × frames_per_digit`.
    Absolute,
}

impl FrameOrigin {
    /// First frame of a render beginning at `start_chunk`.
    ///
    /// Returns `None` when the absolute offset overflows `u64`.
    pub fn start_frame(
        self,
        start_chunk: u64,
        chunk_size: u64,
        frames_per_digit: u64,
    ) -> Option<u64> {
        match self {
            Self::Restart => Some(0),
            Self::Absolute => start_chunk
                .checked_mul(chunk_size)?
                .checked_mul(frames_per_digit),
        }
    }
}

// ── GenerateConfig ─────────────────────────────────────────────────

/// Inputs to [`run_generation`](crate::run_generation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Registered source name. Default: `"pi"`.
    pub source: String,
    /// Digits to generate.
    pub total_digits: u64,
    /// Digits per chunk. Default: [`DEFAULT_CHUNK_SIZE`].
    pub chunk_size: u64,
    /// Tape directory to write.
    pub tape_path: PathBuf,
}

impl GenerateConfig {
    /// Config for `total_digits` digits of the default source into `tape_path`.
    pub fn new(tape_path: impl Into<PathBuf>, total_digits: u64) -> Self {
        Self {
            tape_path: tape_path.into(),
            total_digits,
            ..Self::default()
        }
    }

    /// Set the chunk size.
    pub fn with_chunk_size(mut self, chunk_size: u64) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the source name.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Check the source name and chunk size, returning the resolved source.
    pub fn validate(&self) -> Result<SourceKind, ConfigError> {
        let source = SourceKind::from_name(&self.source)?;
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        Ok(source)
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            source: PiDigitSource::NAME.to_string(),
            total_digits: 0,
            chunk_size: DEFAULT_CHUNK_SIZE,
            tape_path: PathBuf::from("tape"),
        }
    }
}

// ── RenderConfig ───────────────────────────────────────────────────

/// Inputs to [`run_rendering`](crate::run_rendering).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderConfig {
    /// Tape directory to read.
    pub tape_path: PathBuf,
    /// Registered mapper name. Default: `"gba-tenkey"`.
    pub mapper: String,
    /// Registered sink name. Default: `"frame-log"`.
    pub sink: String,
    /// First chunk to render. Default: 0.
    pub start_chunk: u64,
    /// Sink destination. Default: stdout.
    pub output: OutputTarget,
    /// Mapper hold/release timing.
    pub timing: MapperTiming,
    /// Frame numbering policy for offset renders. Default: restart at 0.
    pub frame_origin: FrameOrigin,
}

impl RenderConfig {
    /// Config rendering `tape_path` with default mapper and sink.
    pub fn new(tape_path: impl Into<PathBuf>) -> Self {
        Self {
            tape_path: tape_path.into(),
            ..Self::default()
        }
    }

    /// Set the sink destination.
    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    /// Set the first chunk to render.
    pub fn with_start_chunk(mut self, start_chunk: u64) -> Self {
        self.start_chunk = start_chunk;
        self
    }

    /// Set the frame numbering policy.
    pub fn with_frame_origin(mut self, frame_origin: FrameOrigin) -> Self {
        self.frame_origin = frame_origin;
        self
    }

    /// Set the mapper timing.
    pub fn with_timing(mut self, timing: MapperTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Check the mapper and sink names, returning the resolved kinds.
    pub fn validate(&self) -> Result<(MapperKind, SinkKind), ConfigError> {
        Ok((
            MapperKind::from_name(&self.mapper)?,
            SinkKind::from_name(&self.sink)?,
        ))
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tape_path: PathBuf::from("tape"),
            mapper: GbaTenKeyMapper::NAME.to_string(),
            sink: FrameLogSink::NAME.to_string(),
            start_chunk: 0,
            output: OutputTarget::Stdout,
            timing: MapperTiming::default(),
            frame_origin: FrameOrigin::default(),
        }
    }
}
