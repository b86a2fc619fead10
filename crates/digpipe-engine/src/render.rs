//! Rendering path: tape store through mapper into sink.

use digpipe_core::{ActionSink, Mapper, TapeHeader};
use digpipe_tape::{FileTape, TapeStore};
use tracing::{debug, info, warn};

use crate::config::{FrameOrigin, RenderConfig};
use crate::error::PipelineError;

/// Where a render starts and how its frames are numbered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// First chunk index to read.
    pub start_chunk: u64,
    /// Frame numbering policy.
    pub frame_origin: FrameOrigin,
}

/// Outcome of a completed rendering run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Chunks fed through the mapper.
    pub chunks_rendered: u64,
    /// Digits across those chunks.
    pub digits_rendered: u64,
    /// Actions forwarded to the sink.
    pub actions_written: u64,
    /// Frame the first digit was placed at.
    pub first_frame: u64,
    /// Frame cursor after the last chunk.
    pub next_frame: u64,
}

/// Map chunks from `options.start_chunk` onward into `sink`.
///
/// Reads consecutive indices until the first missing chunk. The frame
/// cursor returned by each chunk is the start frame of the next. Does
/// not close the sink; see [`render_and_close`].
pub fn render_from<S: TapeStore>(
    tape: &S,
    header: &TapeHeader,
    mapper: &dyn Mapper,
    sink: &mut dyn ActionSink,
    options: &RenderOptions,
) -> Result<RenderReport, PipelineError> {
    let overflow = || PipelineError::FrameOverflow {
        start_chunk: options.start_chunk,
    };
    let first_frame = match options.frame_origin {
        FrameOrigin::Restart => 0,
        FrameOrigin::Absolute => {
            let per_digit = mapper.frames_per_digit().ok_or_else(overflow)?;
            options
                .frame_origin
                .start_frame(options.start_chunk, header.chunk_size, per_digit)
                .ok_or_else(overflow)?
        }
    };

    let mut report = RenderReport {
        first_frame,
        next_frame: first_frame,
        ..RenderReport::default()
    };
    for chunk in tape.chunks_from(options.start_chunk) {
        let chunk = chunk?;
        let mapped = mapper.map_chunk(&chunk, report.next_frame)?;
        sink.write_actions(&mapped.actions)?;

        debug!(
            index = chunk.index(),
            actions = mapped.actions.len(),
            next_frame = mapped.next_frame,
            "chunk rendered"
        );
        report.chunks_rendered += 1;
        report.digits_rendered += chunk.len() as u64;
        report.actions_written += mapped.actions.len() as u64;
        report.next_frame = mapped.next_frame;
    }
    Ok(report)
}

/// [`render_from`], then close `sink` whether or not rendering succeeded.
///
/// The rendering error wins over a close error.
pub fn render_and_close<S: TapeStore>(
    tape: &S,
    header: &TapeHeader,
    mapper: &dyn Mapper,
    sink: &mut dyn ActionSink,
    options: &RenderOptions,
) -> Result<RenderReport, PipelineError> {
    let rendered = render_from(tape, header, mapper, sink, options);
    let closed = sink.close();
    match (rendered, closed) {
        (Ok(report), Ok(())) => Ok(report),
        (Err(e), Ok(())) => Err(e),
        (Ok(_), Err(e)) => Err(e.into()),
        (Err(e), Err(close_err)) => {
            warn!(error = %close_err, "sink close failed after render error");
            Err(e)
        }
    }
}

/// Render the file tape at `config.tape_path` through the configured
/// mapper and sink.
///
/// The header is read before the sink is opened, so a missing tape
/// fails without creating an output file.
pub fn run_rendering(config: &RenderConfig) -> Result<RenderReport, PipelineError> {
    let (mapper_kind, sink_kind) = config.validate()?;

    let tape = FileTape::new(&config.tape_path);
    let header = tape.read_header()?;
    info!(
        tape = %config.tape_path.display(),
        source = %header.source_name,
        total_digits = header.total_digits,
        chunk_size = header.chunk_size,
        start_chunk = config.start_chunk,
        "rendering tape"
    );

    let mapper = mapper_kind.build(config.timing);
    let mut sink = sink_kind.build(&config.output)?;
    let options = RenderOptions {
        start_chunk: config.start_chunk,
        frame_origin: config.frame_origin,
    };
    let report = render_and_close(&tape, &header, mapper.as_ref(), sink.as_mut(), &options)?;

    info!(
        chunks = report.chunks_rendered,
        actions = report.actions_written,
        next_frame = report.next_frame,
        output = %config.output,
        "tape rendered"
    );
    Ok(report)
}
