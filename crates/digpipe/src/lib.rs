//! digpipe: turn deterministic digit streams into timed device input logs.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all digpipe sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use digpipe::prelude::*;
//!
//! let dir = tempfile::TempDir::new().unwrap();
//! let tape = dir.path().join("tape");
//!
//! // 50 digits of π in five 10-digit chunks.
//! let generated = run_generation(&GenerateConfig::new(&tape, 50).with_chunk_size(10)).unwrap();
//! assert_eq!(generated.chunks_written, 5);
//!
//! // Render chunks 2.. through the GBA ten-key mapper into memory.
//! let store = FileTape::new(&tape);
//! let header = store.read_header().unwrap();
//! let mapper = GbaTenKeyMapper::default();
//! let options = RenderOptions { start_chunk: 2, ..RenderOptions::default() };
//!
//! struct Lines(Vec<String>, bool);
//! impl ActionSink for Lines {
//!     fn write_actions(&mut self, actions: &[Action]) -> Result<(), SinkError> {
//!         self.0.extend(actions.iter().map(|a| a.to_string()));
//!         Ok(())
//!     }
//!     fn close(&mut self) -> Result<(), SinkError> {
//!         self.1 = true;
//!         Ok(())
//!     }
//!     fn is_closed(&self) -> bool {
//!         self.1
//!     }
//! }
//!
//! let mut sink = Lines(Vec::new(), false);
//! let report = render_and_close(&store, &header, &mapper, &mut sink, &options).unwrap();
//! assert_eq!(report.actions_written, 60);
//! assert_eq!(sink.0[0], "0: gba.LEFT=1");
//! assert!(sink.1);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `digpipe-core` | Chunks, actions, the tape header, stage traits |
//! | [`tape`] | `digpipe-tape` | Chunked tape storage and its file format |
//! | [`source`] | `digpipe-source` | Digit sources |
//! | [`mapper`] | `digpipe-mapper` | Digit-to-action mappers |
//! | [`sink`] | `digpipe-sink` | Action sinks |
//! | [`engine`] | `digpipe-engine` | Generation, rendering, inspection |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and stage traits (`digpipe-core`).
///
/// [`types::DigitChunk`], [`types::Action`], [`types::TapeHeader`], and the
/// [`types::DigitSource`], [`types::Mapper`], [`types::ActionSink`] seams.
pub use digpipe_core as types;

/// Chunked tape storage (`digpipe-tape`).
///
/// The [`tape::TapeStore`] trait and the directory-backed [`tape::FileTape`].
pub use digpipe_tape as tape;

/// Digit sources (`digpipe-source`).
pub use digpipe_source as source;

/// Digit-to-action mappers (`digpipe-mapper`).
pub use digpipe_mapper as mapper;

/// Action sinks (`digpipe-sink`).
pub use digpipe_sink as sink;

/// Pipeline orchestration (`digpipe-engine`).
///
/// [`engine::run_generation`] and [`engine::run_rendering`] drive whole
/// runs from a config; the store-generic functions compose stages directly.
pub use digpipe_engine as engine;

/// Common imports for typical digpipe usage.
///
/// ```rust
/// use digpipe::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use digpipe_core::{
        Action, ActionSink, DigitChunk, DigitSource, MappedChunk, Mapper, TapeHeader,
    };

    // Errors
    pub use digpipe_core::{ChunkError, MapError, SinkError};
    pub use digpipe_engine::{ConfigError, PipelineError};
    pub use digpipe_tape::TapeError;

    // Stages
    pub use digpipe_mapper::{GbaTenKeyMapper, MapperTiming};
    pub use digpipe_sink::{FrameLogSink, OutputTarget};
    pub use digpipe_source::PiDigitSource;
    pub use digpipe_tape::{FileTape, TapeStore};

    // Engine
    pub use digpipe_engine::{
        generate_into, inspect, inspect_path, render_and_close, render_from, run_generation,
        run_rendering, FrameOrigin, GenerateConfig, GenerationReport, RenderConfig, RenderOptions,
        RenderReport, TapeSummary,
    };
}
