//! Binary encode/decode for chunk records, JSON for the header record.
//!
//! All integers are little-endian. Digits are stored as raw byte values,
//! one per byte, so a chunk record is a fixed preamble followed by exactly
//! `len` digit bytes.

use std::io::{self, Read, Write};

use digpipe_core::{DigitChunk, TapeHeader};
use serde::{Deserialize, Serialize};

use crate::error::TapeError;
use crate::{FORMAT_VERSION, MAGIC};

/// Bytes preceding the digits in a chunk record: magic, version, index, length.
pub const CHUNK_PREAMBLE_LEN: usize = 4 + 1 + 8 + 4;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), TapeError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), TapeError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), TapeError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Fill `buf`, reporting a short read as a truncated record.
fn read_field(r: &mut dyn Read, buf: &mut [u8], what: &str) -> Result<(), TapeError> {
    r.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => TapeError::MalformedChunk {
            detail: format!("truncated {what}"),
        },
        _ => TapeError::Io(e),
    })
}

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, TapeError> {
    let mut buf = [0u8; 1];
    read_field(r, &mut buf, "u8")?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, TapeError> {
    let mut buf = [0u8; 4];
    read_field(r, &mut buf, "u32")?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, TapeError> {
    let mut buf = [0u8; 8];
    read_field(r, &mut buf, "u64")?;
    Ok(u64::from_le_bytes(buf))
}

// ── Chunk encode/decode ─────────────────────────────────────────

/// Encode a chunk record.
///
/// The chunk is validated first; nothing is written if it is rejected.
pub fn encode_chunk(w: &mut dyn Write, chunk: &DigitChunk) -> Result<(), TapeError> {
    chunk.validate()?;
    let len = u32::try_from(chunk.len()).map_err(|_| TapeError::ChunkTooLarge {
        index: chunk.index(),
        len: chunk.len(),
    })?;

    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u64_le(w, chunk.index())?;
    write_u32_le(w, len)?;
    w.write_all(chunk.digits())?;
    Ok(())
}

/// Decode a chunk record, consuming the whole stream.
///
/// Rejects bad magic, unknown versions, truncation, trailing bytes, and
/// digit values outside `0..=9`.
pub fn decode_chunk(r: &mut dyn Read) -> Result<DigitChunk, TapeError> {
    let mut magic = [0u8; 4];
    read_field(r, &mut magic, "magic")?;
    if magic != MAGIC {
        return Err(TapeError::InvalidMagic);
    }

    let version = read_u8(r)?;
    if version != FORMAT_VERSION {
        return Err(TapeError::UnsupportedVersion { found: version });
    }

    let index = read_u64_le(r)?;
    let len = read_u32_le(r)? as usize;

    // Allocation follows the bytes present, not the declared length.
    let mut digits = Vec::new();
    (&mut *r).take(len as u64).read_to_end(&mut digits)?;
    if digits.len() < len {
        return Err(TapeError::MalformedChunk {
            detail: format!(
                "truncated digit payload: {} of {len} bytes in chunk {index}",
                digits.len()
            ),
        });
    }

    let mut extra = [0u8; 1];
    loop {
        match r.read(&mut extra) {
            Ok(0) => break,
            Ok(_) => {
                return Err(TapeError::MalformedChunk {
                    detail: format!("trailing bytes after {len} digits in chunk {index}"),
                })
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(TapeError::Io(e)),
        }
    }

    let chunk = DigitChunk::new(index, digits);
    chunk.validate().map_err(|e| TapeError::MalformedChunk {
        detail: e.to_string(),
    })?;
    Ok(chunk)
}

// ── Header encode/decode ────────────────────────────────────────

/// On-disk header record: the tape header plus the format version.
#[derive(Serialize, Deserialize)]
struct HeaderRecord {
    format_version: u8,
    #[serde(flatten)]
    header: TapeHeader,
}

/// Encode the tape header as pretty-printed JSON.
pub fn encode_header(w: &mut dyn Write, header: &TapeHeader) -> Result<(), TapeError> {
    let record = HeaderRecord {
        format_version: FORMAT_VERSION,
        header: header.clone(),
    };
    serde_json::to_writer_pretty(&mut *w, &record)?;
    w.write_all(b"\n")?;
    Ok(())
}

/// Decode and version-check a tape header.
pub fn decode_header(r: &mut dyn Read) -> Result<TapeHeader, TapeError> {
    let record: HeaderRecord = serde_json::from_reader(r)?;
    if record.format_version != FORMAT_VERSION {
        return Err(TapeError::UnsupportedVersion {
            found: record.format_version,
        });
    }
    Ok(record.header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn encoded(chunk: &DigitChunk) -> Vec<u8> {
        let mut buf = Vec::new();
        encode_chunk(&mut buf, chunk).unwrap();
        buf
    }

    // ── Primitive round-trips ───────────────────────────────────

    proptest! {
        #[test]
        fn roundtrip_u64(v in any::<u64>()) {
            let mut buf = Vec::new();
            write_u64_le(&mut buf, v).unwrap();
            let got = read_u64_le(&mut buf.as_slice()).unwrap();
            prop_assert_eq!(v, got);
        }
    }

    // ── Chunk records ───────────────────────────────────────────

    #[test]
    fn record_layout_is_fixed_width() {
        let chunk = DigitChunk::new(2, vec![3, 1, 4, 1]);
        let buf = encoded(&chunk);
        assert_eq!(buf.len(), CHUNK_PREAMBLE_LEN + 4);
        assert_eq!(&buf[..4], b"DGTP");
        assert_eq!(buf[4], FORMAT_VERSION);
        assert_eq!(&buf[5..13], &2u64.to_le_bytes());
        assert_eq!(&buf[13..17], &4u32.to_le_bytes());
        assert_eq!(&buf[17..], &[3, 1, 4, 1]);
    }

    #[test]
    fn invalid_chunk_writes_nothing() {
        let mut buf = Vec::new();
        let result = encode_chunk(&mut buf, &DigitChunk::new(0, vec![1, 2, 3]));
        assert!(matches!(result, Err(TapeError::InvalidChunk(_))));
        assert!(buf.is_empty());
    }

    #[test]
    fn bad_magic_rejected() {
        let mut buf = encoded(&DigitChunk::new(0, vec![1, 2]));
        buf[0] = b'X';
        let result = decode_chunk(&mut buf.as_slice());
        assert!(matches!(result, Err(TapeError::InvalidMagic)));
    }

    #[test]
    fn bad_version_rejected() {
        let mut buf = encoded(&DigitChunk::new(0, vec![1, 2]));
        buf[4] = 99;
        let result = decode_chunk(&mut buf.as_slice());
        assert!(matches!(
            result,
            Err(TapeError::UnsupportedVersion { found: 99 })
        ));
    }

    #[test]
    fn truncated_payload_is_malformed() {
        let mut buf = encoded(&DigitChunk::new(0, vec![1, 2, 3, 4]));
        buf.truncate(buf.len() - 1);
        let result = decode_chunk(&mut buf.as_slice());
        assert!(matches!(result, Err(TapeError::MalformedChunk { .. })));
    }

    #[test]
    fn oversized_length_field_is_malformed() {
        let mut buf = encoded(&DigitChunk::new(0, vec![1, 2]));
        buf[13..17].copy_from_slice(&u32::MAX.to_le_bytes());
        let result = decode_chunk(&mut buf.as_slice());
        match result {
            Err(TapeError::MalformedChunk { detail }) => {
                assert!(detail.contains("2 of 4294967295"), "{detail}");
            }
            other => panic!("expected MalformedChunk, got {other:?}"),
        }
    }

    #[test]
    fn truncated_preamble_is_malformed() {
        let buf = encoded(&DigitChunk::new(0, vec![1, 2]));
        let result = decode_chunk(&mut &buf[..7]);
        assert!(matches!(result, Err(TapeError::MalformedChunk { .. })));
    }

    #[test]
    fn trailing_bytes_are_malformed() {
        let mut buf = encoded(&DigitChunk::new(0, vec![1, 2]));
        buf.push(0);
        let result = decode_chunk(&mut buf.as_slice());
        assert!(matches!(result, Err(TapeError::MalformedChunk { .. })));
    }

    #[test]
    fn corrupt_digit_is_malformed() {
        let mut buf = encoded(&DigitChunk::new(0, vec![1, 2]));
        let last = buf.len() - 1;
        buf[last] = 42;
        let result = decode_chunk(&mut buf.as_slice());
        assert!(matches!(result, Err(TapeError::MalformedChunk { .. })));
    }

    // ── Header records ──────────────────────────────────────────

    #[test]
    fn roundtrip_header() {
        let header = TapeHeader {
            source_name: "pi".into(),
            total_digits: 50,
            chunk_size: 10,
        };
        let mut buf = Vec::new();
        encode_header(&mut buf, &header).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json["format_version"], FORMAT_VERSION);

        let got = decode_header(&mut buf.as_slice()).unwrap();
        assert_eq!(header, got);
    }

    #[test]
    fn header_with_unknown_version_rejected() {
        let json = br#"{"format_version": 7, "source_name": "pi", "total_digits": 4, "chunk_size": 2}"#;
        let result = decode_header(&mut json.as_slice());
        assert!(matches!(
            result,
            Err(TapeError::UnsupportedVersion { found: 7 })
        ));
    }

    #[test]
    fn header_missing_field_rejected() {
        let json = br#"{"format_version": 1, "source_name": "pi"}"#;
        let result = decode_header(&mut json.as_slice());
        assert!(matches!(result, Err(TapeError::Header(_))));
    }
}
