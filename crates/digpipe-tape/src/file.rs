//! Directory-backed tape storage.
//!
//! [`FileTape`] keeps one file per chunk plus a JSON header. Every write
//! goes to a temporary file in the tape directory and is renamed over the
//! target, so readers never observe a half-written record.

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use digpipe_core::{DigitChunk, TapeHeader};
use tempfile::NamedTempFile;
use tracing::{debug, trace};

use crate::codec::{decode_chunk, decode_header, encode_chunk, encode_header, CHUNK_PREAMBLE_LEN};
use crate::error::TapeError;
use crate::store::TapeStore;
use crate::{chunk_file_name, HEADER_FILE_NAME};

/// A tape stored as a directory of chunk files.
///
/// Constructing a `FileTape` performs no I/O. The directory is created on
/// the first write; reads against a missing directory report not-found.
///
/// # Examples
///
/// ```
/// use digpipe_core::{DigitChunk, TapeHeader};
/// use digpipe_tape::{FileTape, TapeStore};
///
/// let dir = tempfile::tempdir().unwrap();
/// let mut tape = FileTape::new(dir.path().join("tape"));
///
/// tape.write_chunk(&DigitChunk::new(0, vec![3, 1, 4, 1])).unwrap();
/// tape.write_header(&TapeHeader {
///     source_name: "pi".into(),
///     total_digits: 4,
///     chunk_size: 4,
/// })
/// .unwrap();
///
/// assert!(tape.exists(0));
/// assert!(!tape.exists(1));
/// assert_eq!(tape.read_chunk(0).unwrap().digits(), &[3, 1, 4, 1]);
/// assert_eq!(tape.read_header().unwrap().total_digits, 4);
/// ```
#[derive(Clone, Debug)]
pub struct FileTape {
    root: PathBuf,
}

impl FileTape {
    /// A tape rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The tape directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the chunk file for `index`.
    pub fn chunk_path(&self, index: u64) -> PathBuf {
        self.root.join(chunk_file_name(index))
    }

    /// Path of the header file.
    pub fn header_path(&self) -> PathBuf {
        self.root.join(HEADER_FILE_NAME)
    }

    /// Atomically replace `target` with `bytes`.
    fn persist(&self, target: &Path, bytes: &[u8]) -> Result<(), TapeError> {
        fs::create_dir_all(&self.root)?;
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(target).map_err(|e| TapeError::Io(e.error))?;
        Ok(())
    }
}

impl TapeStore for FileTape {
    fn write_chunk(&mut self, chunk: &DigitChunk) -> Result<(), TapeError> {
        let mut buf = Vec::with_capacity(CHUNK_PREAMBLE_LEN + chunk.len());
        encode_chunk(&mut buf, chunk)?;
        let path = self.chunk_path(chunk.index());
        self.persist(&path, &buf)?;
        trace!(
            index = chunk.index(),
            digits = chunk.len(),
            path = %path.display(),
            "chunk written"
        );
        Ok(())
    }

    fn read_chunk(&self, index: u64) -> Result<DigitChunk, TapeError> {
        let path = self.chunk_path(index);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(TapeError::ChunkNotFound { index })
            }
            Err(e) => return Err(TapeError::Io(e)),
        };
        let chunk = decode_chunk(&mut BufReader::new(file))?;
        if chunk.index() != index {
            return Err(TapeError::MalformedChunk {
                detail: format!(
                    "{} records index {}, expected {index}",
                    path.display(),
                    chunk.index()
                ),
            });
        }
        Ok(chunk)
    }

    fn exists(&self, index: u64) -> bool {
        self.chunk_path(index).is_file()
    }

    fn write_header(&mut self, header: &TapeHeader) -> Result<(), TapeError> {
        let mut buf = Vec::new();
        encode_header(&mut buf, header)?;
        self.persist(&self.header_path(), &buf)?;
        debug!(root = %self.root.display(), ?header, "tape header written");
        Ok(())
    }

    fn read_header(&self) -> Result<TapeHeader, TapeError> {
        let path = self.header_path();
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(TapeError::HeaderNotFound { path })
            }
            Err(e) => return Err(TapeError::Io(e)),
        };
        decode_header(&mut BufReader::new(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use digpipe_core::ChunkError;
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn tape() -> (TempDir, FileTape) {
        let dir = TempDir::new().unwrap();
        let tape = FileTape::new(dir.path().join("tape"));
        (dir, tape)
    }

    fn even_digits() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec((0u8..=9, 0u8..=9), 0..128)
            .prop_map(|pairs| pairs.into_iter().flat_map(|(a, b)| [a, b]).collect())
    }

    #[test]
    fn round_trip() {
        let (_dir, mut tape) = tape();
        let chunk = DigitChunk::new(0, vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        tape.write_chunk(&chunk).unwrap();
        assert_eq!(tape.read_chunk(0).unwrap(), chunk);
        assert!(tape.chunk_path(0).ends_with("chunk_000000.dgt"));
    }

    #[test]
    fn odd_chunk_rejected_without_file() {
        let (_dir, mut tape) = tape();
        let result = tape.write_chunk(&DigitChunk::new(1, vec![1, 2, 3]));
        assert!(matches!(
            result,
            Err(TapeError::InvalidChunk(ChunkError::OddLength { index: 1, len: 3 }))
        ));
        assert!(!tape.exists(1));
        assert!(!tape.root().exists());
    }

    #[test]
    fn out_of_range_digit_rejected() {
        let (_dir, mut tape) = tape();
        let result = tape.write_chunk(&DigitChunk::new(2, vec![0, 10]));
        assert!(matches!(
            result,
            Err(TapeError::InvalidChunk(ChunkError::DigitOutOfRange { value: 10, .. }))
        ));
        assert!(!tape.exists(2));
    }

    #[test]
    fn missing_chunk_is_not_found() {
        let (_dir, tape) = tape();
        assert!(!tape.exists(99));
        let err = tape.read_chunk(99).unwrap_err();
        assert!(matches!(err, TapeError::ChunkNotFound { index: 99 }));
        assert!(err.is_not_found());
    }

    #[test]
    fn missing_header_is_not_found() {
        let (_dir, tape) = tape();
        let err = tape.read_header().unwrap_err();
        assert!(matches!(err, TapeError::HeaderNotFound { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn overwrite_is_last_write_wins() {
        let (_dir, mut tape) = tape();
        tape.write_chunk(&DigitChunk::new(3, vec![1, 1])).unwrap();
        tape.write_chunk(&DigitChunk::new(3, vec![2, 2, 2, 2])).unwrap();
        assert_eq!(tape.read_chunk(3).unwrap().digits(), &[2, 2, 2, 2]);
    }

    #[test]
    fn rejected_overwrite_keeps_previous_chunk() {
        let (_dir, mut tape) = tape();
        tape.write_chunk(&DigitChunk::new(0, vec![5, 5])).unwrap();
        assert!(tape.write_chunk(&DigitChunk::new(0, vec![5])).is_err());
        assert_eq!(tape.read_chunk(0).unwrap().digits(), &[5, 5]);
    }

    #[test]
    fn no_temp_files_left_behind() {
        let (_dir, mut tape) = tape();
        tape.write_chunk(&DigitChunk::new(0, vec![1, 2])).unwrap();
        tape.write_header(&TapeHeader {
            source_name: "pi".into(),
            total_digits: 2,
            chunk_size: 2,
        })
        .unwrap();
        let mut names: Vec<String> = fs::read_dir(tape.root())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["chunk_000000.dgt", "header.json"]);
    }

    #[test]
    fn renamed_chunk_file_detected() {
        let (_dir, mut tape) = tape();
        tape.write_chunk(&DigitChunk::new(0, vec![1, 2])).unwrap();
        fs::rename(tape.chunk_path(0), tape.chunk_path(1)).unwrap();
        assert!(matches!(
            tape.read_chunk(1),
            Err(TapeError::MalformedChunk { .. })
        ));
    }

    #[test]
    fn header_is_readable_json() {
        let (_dir, mut tape) = tape();
        let header = TapeHeader {
            source_name: "pi".into(),
            total_digits: 50,
            chunk_size: 10,
        };
        tape.write_header(&header).unwrap();
        let text = fs::read_to_string(tape.header_path()).unwrap();
        assert!(text.contains("\"total_digits\": 50"));
        assert_eq!(tape.read_header().unwrap(), header);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn write_then_read_returns_equal_chunk(index in 0u64..10_000, digits in even_digits()) {
            let (_dir, mut tape) = tape();
            let chunk = DigitChunk::new(index, digits);
            tape.write_chunk(&chunk).unwrap();
            prop_assert!(tape.exists(index));
            prop_assert_eq!(tape.read_chunk(index).unwrap(), chunk);
        }

        #[test]
        fn odd_length_never_persisted(
            index in 0u64..10_000,
            mut digits in prop::collection::vec(0u8..=9, 1..64),
        ) {
            if digits.len() % 2 == 0 {
                digits.pop();
            }
            let (_dir, mut tape) = tape();
            let result = tape.write_chunk(&DigitChunk::new(index, digits));
            let rejected = matches!(
                result,
                Err(TapeError::InvalidChunk(ChunkError::OddLength { .. }))
            );
            prop_assert!(rejected);
            prop_assert!(!tape.exists(index));
        }
    }
}
