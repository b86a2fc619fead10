//! Inspect command - summarize a tape.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use digpipe_engine::inspect_path;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Tape directory to inspect
    #[arg(short, long)]
    tape: PathBuf,
}

/// Run the inspect command.
pub fn run(args: &InspectArgs) -> Result<()> {
    let summary = inspect_path(&args.tape)
        .with_context(|| format!("failed to inspect tape {}", args.tape.display()))?;
    let header = &summary.header;

    println!("tape:         {}", args.tape.display());
    println!("source:       {}", header.source_name);
    println!("total digits: {}", header.total_digits);
    println!("chunk size:   {}", header.chunk_size);
    println!(
        "chunks:       {} of {} ({} digits stored)",
        summary.chunks_present, summary.expected_chunks, summary.digits_present
    );
    println!(
        "status:       {}",
        if summary.is_complete() { "complete" } else { "incomplete" }
    );
    Ok(())
}
