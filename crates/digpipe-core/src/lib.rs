//! Core types and traits for the digpipe pipeline.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data that flows between pipeline stages and the seams between them:
//!
//! - [`DigitChunk`]: a positioned block of decimal digits
//! - [`TapeHeader`]: metadata describing a whole tape
//! - [`Action`]: one timed device input event
//! - [`DigitSource`], [`Mapper`], [`ActionSink`]: the stage traits

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod action;
pub mod chunk;
pub mod error;
pub mod header;
pub mod traits;

pub use action::{Action, PRESS, RELEASE};
pub use chunk::{DigitChunk, MAX_DIGIT};
pub use error::{ChunkError, MapError, SinkError};
pub use header::TapeHeader;
pub use traits::{ActionSink, Chunks, DigitSource, MappedChunk, Mapper};
