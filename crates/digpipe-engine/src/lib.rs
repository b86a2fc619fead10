//! Generation and rendering pipelines.
//!
//! Two one-directional paths connect the stages:
//!
//! ```text
//! generate:  DigitSource ──chunks──▶ TapeStore ──▶ header
//! render:    TapeStore ──chunks──▶ Mapper ──actions──▶ ActionSink
//! ```
//!
//! Stages are chosen by name through closed registries ([`SourceKind`],
//! [`MapperKind`], [`SinkKind`]). Path-level entry points
//! ([`run_generation`], [`run_rendering`], [`inspect_path`]) take a config
//! struct; the store-generic functions ([`generate_into`], [`render_from`],
//! [`inspect`]) accept any [`TapeStore`](digpipe_tape::TapeStore).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod generate;
pub mod inspect;
pub mod registry;
pub mod render;

pub use config::{FrameOrigin, GenerateConfig, RenderConfig, DEFAULT_CHUNK_SIZE};
pub use error::{ConfigError, PipelineError};
pub use generate::{generate_into, run_generation, GenerationReport};
pub use inspect::{inspect, inspect_path, TapeSummary};
pub use registry::{MapperKind, SinkKind, SourceKind};
pub use render::{render_and_close, render_from, run_rendering, RenderOptions, RenderReport};
