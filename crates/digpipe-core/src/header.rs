//! Tape-level metadata.

use serde::{Deserialize, Serialize};

/// Metadata describing a tape as a whole.
///
/// Written once when a tape is generated and read at the start of
/// every rendering session. The header is the source of truth for the
/// total digit count and chunk size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TapeHeader {
    /// Identifier of the digit source that produced the tape (e.g. `"pi"`).
    pub source_name: String,
    /// Total digits across all chunks.
    pub total_digits: u64,
    /// Digits per chunk at generation time. The last chunk may be shorter.
    pub chunk_size: u64,
}

impl TapeHeader {
    /// Number of chunks a complete tape with this header holds.
    ///
    /// Returns 0 when `chunk_size` is 0.
    pub fn expected_chunks(&self) -> u64 {
        if self.chunk_size == 0 {
            return 0;
        }
        self.total_digits.div_ceil(self.chunk_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(total_digits: u64, chunk_size: u64) -> TapeHeader {
        TapeHeader {
            source_name: "pi".into(),
            total_digits,
            chunk_size,
        }
    }

    #[test]
    fn expected_chunks_rounds_up() {
        assert_eq!(header(50, 10).expected_chunks(), 5);
        assert_eq!(header(52, 10).expected_chunks(), 6);
        assert_eq!(header(0, 10).expected_chunks(), 0);
        assert_eq!(header(10, 0).expected_chunks(), 0);
    }

    #[test]
    fn json_field_names_are_stable() {
        let json = serde_json::to_value(header(50, 10)).unwrap();
        assert_eq!(json["source_name"], "pi");
        assert_eq!(json["total_digits"], 50);
        assert_eq!(json["chunk_size"], 10);
    }
}
