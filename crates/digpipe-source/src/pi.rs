//! Decimal digits of π via the Chudnovsky series.
//!
//! The series is summed with binary splitting over arbitrary-precision
//! integers, giving `floor(π · 10^p)` exactly for a working precision `p`.
//! A few guard digits beyond the requested count absorb the truncation
//! of the final division.

use digpipe_core::{DigitChunk, DigitSource};
use num_bigint::{BigInt, BigUint};
use tracing::debug;

/// Chudnovsky constant `C`.
const C: u64 = 640_320;
/// `C³ / 24`, the per-term denominator factor.
const C3_OVER_24: u64 = C * C * C / 24;
/// Decimal digits contributed by each series term (log10 of `C³ / 1728`).
const DIGITS_PER_TERM: f64 = 14.181_647_462_725_477;
/// Extra digits computed past the requested count.
const GUARD_DIGITS: u64 = 10;

/// Digits of π, starting with the leading `3`.
///
/// All digits are computed once at construction; chunking is then a pure
/// slice of that buffer, so any chunk can be re-requested at any time.
///
/// # Examples
///
/// ```
/// use digpipe_core::DigitSource;
/// use digpipe_source::PiDigitSource;
///
/// let pi = PiDigitSource::new(10);
/// assert_eq!(pi.digits(), &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3]);
///
/// let chunks: Vec<_> = pi.chunks(4).collect();
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[2].digits(), &[5, 3]);
/// ```
#[derive(Clone, Debug)]
pub struct PiDigitSource {
    digits: Vec<u8>,
}

impl PiDigitSource {
    /// Registry name of this source.
    pub const NAME: &'static str = "pi";

    /// Compute the first `total_digits` digits of π.
    pub fn new(total_digits: u64) -> Self {
        Self {
            digits: pi_digits(total_digits),
        }
    }

    /// Every digit, in stream order.
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }
}

impl DigitSource for PiDigitSource {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn total_digits(&self) -> u64 {
        self.digits.len() as u64
    }

    fn chunk(&self, index: u64, chunk_size: u64) -> Option<DigitChunk> {
        if chunk_size == 0 {
            return None;
        }
        let start = usize::try_from(index.checked_mul(chunk_size)?).ok()?;
        if start >= self.digits.len() {
            return None;
        }
        let size = usize::try_from(chunk_size).unwrap_or(usize::MAX);
        let end = start.saturating_add(size).min(self.digits.len());
        Some(DigitChunk::new(index, self.digits[start..end].to_vec()))
    }
}

/// `(P, Q, T)` for the half-open term range `a..b`.
fn binary_split(a: u64, b: u64) -> (BigInt, BigInt, BigInt) {
    if b - a == 1 {
        let (p, q) = if a == 0 {
            (BigInt::from(1u32), BigInt::from(1u32))
        } else {
            let p = BigInt::from(6 * a - 5) * BigInt::from(2 * a - 1) * BigInt::from(6 * a - 1);
            let a_big = BigInt::from(a);
            let q = &a_big * &a_big * &a_big * BigInt::from(C3_OVER_24);
            (p, q)
        };
        let mut t = &p * (BigInt::from(13_591_409u64) + BigInt::from(545_140_134u64) * a);
        if a % 2 == 1 {
            t = -t;
        }
        return (p, q, t);
    }

    let m = a + (b - a) / 2;
    let (p_am, q_am, t_am) = binary_split(a, m);
    let (p_mb, q_mb, t_mb) = binary_split(m, b);
    let t = &q_mb * &t_am + &p_am * &t_mb;
    (p_am * p_mb, q_am * q_mb, t)
}

/// The first `count` decimal digits of π as raw values.
fn pi_digits(count: u64) -> Vec<u8> {
    if count == 0 {
        return Vec::new();
    }

    let precision = count - 1 + GUARD_DIGITS;
    let terms = (precision as f64 / DIGITS_PER_TERM) as u64 + 2;
    debug!(digits = count, precision, terms, "computing pi");

    let one: BigUint = num_traits::pow(BigUint::from(10u32), precision as usize);
    let sqrt_c = (BigUint::from(10_005u32) * &one * &one).sqrt();

    let (_, q, t) = binary_split(0, terms);
    let scaled = q * BigInt::from(426_880u32) * BigInt::from(sqrt_c) / t;

    scaled
        .to_str_radix(10)
        .bytes()
        .take(count as usize)
        .map(|b| b - b'0')
        .collect()
}
