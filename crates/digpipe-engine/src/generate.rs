//! Generation path: digit source into tape store.

use digpipe_core::{DigitSource, TapeHeader};
use digpipe_tape::{FileTape, TapeStore};
use tracing::{debug, info};

use crate::config::GenerateConfig;
use crate::error::{ConfigError, PipelineError};

/// Outcome of a completed generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// The header written after the last chunk.
    pub header: TapeHeader,
    /// Chunks persisted.
    pub chunks_written: u64,
    /// Digits persisted across all chunks.
    pub digits_written: u64,
}

/// Write every chunk of `source` to `tape`, then the header.
///
/// Fails fast on the first chunk the store rejects; chunks already
/// written stay in place and the header is not written, so a partial
/// tape never looks complete. Rerunning into the same store overwrites
/// chunk by chunk.
pub fn generate_into<S, D>(
    tape: &mut S,
    source: &D,
    chunk_size: u64,
) -> Result<GenerationReport, PipelineError>
where
    S: TapeStore,
    D: DigitSource,
{
    if chunk_size == 0 {
        return Err(ConfigError::ZeroChunkSize.into());
    }

    let mut chunks_written = 0u64;
    let mut digits_written = 0u64;
    for chunk in source.chunks(chunk_size) {
        tape.write_chunk(&chunk)?;
        debug!(index = chunk.index(), len = chunk.len(), "chunk written");
        chunks_written += 1;
        digits_written += chunk.len() as u64;
    }

    let header = TapeHeader {
        source_name: source.name().to_string(),
        total_digits: source.total_digits(),
        chunk_size,
    };
    tape.write_header(&header)?;

    Ok(GenerationReport {
        header,
        chunks_written,
        digits_written,
    })
}

/// Build the configured source and generate a file tape at `config.tape_path`.
pub fn run_generation(config: &GenerateConfig) -> Result<GenerationReport, PipelineError> {
    let kind = config.validate()?;

    info!(
        source = kind.name(),
        total_digits = config.total_digits,
        chunk_size = config.chunk_size,
        tape = %config.tape_path.display(),
        "generating tape"
    );
    let source = kind.build(config.total_digits);
    let mut tape = FileTape::new(&config.tape_path);
    let report = generate_into(&mut tape, &source, config.chunk_size)?;

    info!(
        chunks = report.chunks_written,
        digits = report.digits_written,
        "tape generated"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use digpipe_core::DigitChunk;
    use digpipe_tape::TapeError;
    use digpipe_test_utils::{digits_of, MemoryTape, PI_DIGITS};

    struct Fixed(Vec<u8>);

    impl DigitSource for Fixed {
        fn name(&self) -> &str {
            "fixed"
        }

        fn total_digits(&self) -> u64 {
            self.0.len() as u64
        }

        fn chunk(&self, index: u64, chunk_size: u64) -> Option<DigitChunk> {
            let start = index.checked_mul(chunk_size)? as usize;
            if chunk_size == 0 || start >= self.0.len() {
                return None;
            }
            let end = (start + chunk_size as usize).min(self.0.len());
            Some(DigitChunk::new(index, self.0[start..end].to_vec()))
        }
    }

    #[test]
    fn writes_chunks_then_header() {
        let source = Fixed(digits_of(&PI_DIGITS[..50]));
        let mut tape = MemoryTape::new();
        let report = generate_into(&mut tape, &source, 10).unwrap();

        assert_eq!(report.chunks_written, 5);
        assert_eq!(report.digits_written, 50);
        assert_eq!(tape.chunk_count(), 5);
        let header = tape.read_header().unwrap();
        assert_eq!(header, report.header);
        assert_eq!(header.source_name, "fixed");
        assert_eq!(header.total_digits, 50);
        assert_eq!(header.chunk_size, 10);
        assert_eq!(tape.read_chunk(2).unwrap().digits(), &source.0[20..30]);
    }

    #[test]
    fn odd_tail_aborts_without_header() {
        let source = Fixed(digits_of(&PI_DIGITS[..51]));
        let mut tape = MemoryTape::new();
        let err = generate_into(&mut tape, &source, 10).unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Tape(TapeError::InvalidChunk(_))
        ));
        assert_eq!(tape.chunk_count(), 5);
        assert!(tape.read_header().unwrap_err().is_not_found());
    }

    #[test]
    fn zero_chunk_size_rejected_before_writing() {
        let source = Fixed(vec![1, 2]);
        let mut tape = MemoryTape::new();
        let err = generate_into(&mut tape, &source, 0).unwrap_err();
        assert!(matches!(err, PipelineError::Config(ConfigError::ZeroChunkSize)));
        assert_eq!(tape.writes(), 0);
    }

    #[test]
    fn empty_source_writes_header_only() {
        let source = Fixed(Vec::new());
        let mut tape = MemoryTape::new();
        let report = generate_into(&mut tape, &source, 10).unwrap();
        assert_eq!(report.chunks_written, 0);
        assert_eq!(tape.read_header().unwrap().total_digits, 0);
    }

    #[test]
    fn regeneration_overwrites() {
        let source = Fixed(digits_of(&PI_DIGITS[..20]));
        let mut tape = MemoryTape::new();
        generate_into(&mut tape, &source, 10).unwrap();
        generate_into(&mut tape, &source, 10).unwrap();
        assert_eq!(tape.chunk_count(), 2);
        assert_eq!(tape.writes(), 4);
    }
}
