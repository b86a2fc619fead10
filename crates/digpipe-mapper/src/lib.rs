//! Digit-to-input mappers.
//!
//! A mapper turns each digit into a press/release pair on one control of
//! a fixed device, spaced by a [`MapperTiming`]. Timing state crosses
//! chunk boundaries only through the frame cursor returned from
//! [`Mapper::map_chunk`](digpipe_core::Mapper::map_chunk).
//!
//! | Mapper | Name | Device |
//! |--------|------|--------|
//! | [`GbaTenKeyMapper`] | `"gba-tenkey"` | `"gba"` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod gba_tenkey;
pub mod timing;

pub use gba_tenkey::{GbaKey, GbaTenKeyMapper};
pub use timing::MapperTiming;
