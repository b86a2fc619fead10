//! Action sinks.
//!
//! | Sink | Name | Output |
//! |------|------|--------|
//! | [`FrameLogSink`] | `"frame-log"` | one `"{frame}: {device}.{control}={value}"` line per action |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod frame_log;
pub mod output;

pub use frame_log::FrameLogSink;
pub use output::OutputTarget;
