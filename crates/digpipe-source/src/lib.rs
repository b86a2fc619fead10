//! Deterministic digit sources.
//!
//! Every source implements [`DigitSource`](digpipe_core::DigitSource):
//! a pure function from `(chunk index, chunk size)` to a chunk.
//!
//! | Source | Name | Digits |
//! |--------|------|--------|
//! | [`PiDigitSource`] | `"pi"` | decimal expansion of π, leading `3` included |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod pi;

pub use pi::PiDigitSource;
