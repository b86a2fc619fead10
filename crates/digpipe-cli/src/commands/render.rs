//! Render command - map a tape to an action log.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use digpipe_engine::{run_rendering, FrameOrigin, RenderConfig};
use digpipe_mapper::MapperTiming;
use digpipe_sink::OutputTarget;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Tape directory to read
    #[arg(short, long)]
    tape: PathBuf,

    /// Mapper name
    #[arg(long, default_value = "gba-tenkey")]
    mapper: String,

    /// Sink name
    #[arg(long, default_value = "frame-log")]
    sink: String,

    /// First chunk to render
    #[arg(long, default_value_t = 0)]
    start_chunk: u64,

    /// Output file, or "-" for stdout
    #[arg(short, long, default_value = "-")]
    out: OutputTarget,

    /// Frames each key is held down
    #[arg(long, default_value_t = MapperTiming::DEFAULT_HOLD_FRAMES)]
    hold_frames: u64,

    /// Frames between a release and the next press
    #[arg(long, default_value_t = MapperTiming::DEFAULT_RELEASE_FRAMES)]
    release_frames: u64,

    /// Number frames from the start of the tape instead of from zero
    #[arg(long)]
    absolute_frames: bool,
}

impl RenderArgs {
    pub fn config(&self) -> RenderConfig {
        let frame_origin = if self.absolute_frames {
            FrameOrigin::Absolute
        } else {
            FrameOrigin::Restart
        };
        RenderConfig {
            mapper: self.mapper.clone(),
            sink: self.sink.clone(),
            ..RenderConfig::new(self.tape.clone())
        }
        .with_start_chunk(self.start_chunk)
        .with_output(self.out.clone())
        .with_timing(MapperTiming::new(self.hold_frames, self.release_frames))
        .with_frame_origin(frame_origin)
    }
}

/// Run the render command.
pub fn run(args: &RenderArgs) -> Result<()> {
    let report = run_rendering(&args.config())
        .with_context(|| format!("failed to render tape {}", args.tape.display()))?;

    tracing::info!(
        chunks = report.chunks_rendered,
        digits = report.digits_rendered,
        actions = report.actions_written,
        first_frame = report.first_frame,
        next_frame = report.next_frame,
        "render complete"
    );
    Ok(())
}
