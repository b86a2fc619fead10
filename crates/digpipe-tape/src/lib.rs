//! Chunked digit tape storage.
//!
//! A tape is one generated digit stream persisted as a header plus a
//! set of independently addressable chunk records. Chunks are validated
//! on admission and can be read back in any order.
//!
//! # Architecture
//!
//! - [`TapeStore`] is the storage seam: write, read, and existence checks
//!   by chunk index, plus the tape header
//! - [`FileTape`] stores a tape as a directory of files
//! - [`ChunkIter`] walks chunks sequentially until the first gap
//! - [`codec`] holds the binary chunk format and the JSON header record
//!
//! # Layout
//!
//! ```text
//! <tape>/header.json
//! <tape>/chunk_000000.dgt
//! <tape>/chunk_000001.dgt
//! ...
//! ```
//!
//! Each chunk file is:
//!
//! ```text
//! [MAGIC "DGTP"] [VERSION u8] [index u64] [len u32] [len raw digit bytes]
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod file;
pub mod store;

pub use error::TapeError;
pub use file::FileTape;
pub use store::{ChunkIter, TapeStore};

/// Magic bytes at the start of every chunk file.
pub const MAGIC: [u8; 4] = *b"DGTP";

/// Current chunk and header format version.
pub const FORMAT_VERSION: u8 = 1;

/// File name of the tape header inside a tape directory.
pub const HEADER_FILE_NAME: &str = "header.json";

/// File name of the chunk at `index`, zero-padded to six digits.
///
/// ```
/// assert_eq!(digpipe_tape::chunk_file_name(4), "chunk_000004.dgt");
/// assert_eq!(digpipe_tape::chunk_file_name(1_234_567), "chunk_1234567.dgt");
/// ```
pub fn chunk_file_name(index: u64) -> String {
    format!("chunk_{index:06}.dgt")
}
