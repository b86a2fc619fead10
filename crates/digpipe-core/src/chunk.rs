//! Positioned blocks of decimal digits.

use crate::error::ChunkError;

/// Largest value a stored digit may take.
pub const MAX_DIGIT: u8 = 9;

/// An ordered block of digit values at a fixed position in the stream.
///
/// Digits are raw byte values in `0..=9`, not ASCII characters.
/// Construction does not validate; storage layers call
/// [`validate`](DigitChunk::validate) at their admission boundary so that
/// invalid data is rejected where it would otherwise be persisted.
///
/// # Examples
///
/// ```
/// use digpipe_core::DigitChunk;
///
/// let chunk = DigitChunk::new(3, vec![1, 4, 1, 5]);
/// assert_eq!(chunk.index(), 3);
/// assert_eq!(chunk.len(), 4);
/// assert!(chunk.validate().is_ok());
///
/// let odd = DigitChunk::new(0, vec![1, 2, 3]);
/// assert!(odd.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DigitChunk {
    index: u64,
    digits: Vec<u8>,
}

impl DigitChunk {
    /// Create a chunk at `index` holding `digits`.
    pub fn new(index: u64, digits: Vec<u8>) -> Self {
        Self { index, digits }
    }

    /// Zero-based position of this chunk within the stream.
    pub fn index(&self) -> u64 {
        self.index
    }

    /// The digit values, in stream order.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits in the chunk.
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Whether the chunk holds no digits.
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Consume the chunk and return its digit buffer.
    pub fn into_digits(self) -> Vec<u8> {
        self.digits
    }

    /// Check the storage invariants: even length, every digit in `0..=9`.
    ///
    /// Length is checked first, so an odd-length chunk with bad digits
    /// reports [`ChunkError::OddLength`].
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.digits.len() % 2 != 0 {
            return Err(ChunkError::OddLength {
                index: self.index,
                len: self.digits.len(),
            });
        }
        if let Some((position, &value)) = self
            .digits
            .iter()
            .enumerate()
            .find(|&(_, &d)| d > MAX_DIGIT)
        {
            return Err(ChunkError::DigitOutOfRange {
                index: self.index,
                position,
                value,
            });
        }
        Ok(())
    }
}
