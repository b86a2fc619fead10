//! Generate command - write a digit tape to disk.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use digpipe_engine::{run_generation, GenerateConfig, DEFAULT_CHUNK_SIZE};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Digit source name
    #[arg(long, default_value = "pi")]
    source: String,

    /// Number of digits to generate
    #[arg(long)]
    digits: u64,

    /// Digits per chunk file
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: u64,

    /// Tape directory to write
    #[arg(short, long)]
    out: PathBuf,
}

impl GenerateArgs {
    pub fn config(&self) -> GenerateConfig {
        GenerateConfig::new(self.out.clone(), self.digits)
            .with_source(self.source.clone())
            .with_chunk_size(self.chunk_size)
    }
}

/// Run the generate command.
pub fn run(args: &GenerateArgs) -> Result<()> {
    let report = run_generation(&args.config())
        .with_context(|| format!("failed to generate tape at {}", args.out.display()))?;

    println!(
        "wrote {} chunks ({} digits of {}) to {}",
        report.chunks_written,
        report.digits_written,
        report.header.source_name,
        args.out.display()
    );
    Ok(())
}
