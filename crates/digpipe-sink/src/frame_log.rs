//! Line-per-action text log.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use digpipe_core::{Action, ActionSink, SinkError};
use tracing::debug;

use crate::output::OutputTarget;

enum Stream {
    Stdout(BufWriter<io::Stdout>),
    File(BufWriter<File>),
}

impl Stream {
    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Stream::Stdout(w) => w,
            Stream::File(w) => w,
        }
    }
}

/// Writes each action as `"{frame}: {device}.{control}={value}"`.
///
/// Closing a stdout-backed sink flushes it but leaves the process's
/// standard output open for other writers.
pub struct FrameLogSink {
    stream: Option<Stream>,
    target: OutputTarget,
    actions_written: u64,
}

impl FrameLogSink {
    /// Registry name of this sink.
    pub const NAME: &'static str = "frame-log";

    /// Open a sink writing to `target`. File targets are created or truncated.
    pub fn open(target: &OutputTarget) -> Result<Self, SinkError> {
        let stream = match target {
            OutputTarget::Stdout => Stream::Stdout(BufWriter::new(io::stdout())),
            OutputTarget::File(path) => Stream::File(BufWriter::new(File::create(path)?)),
        };
        Ok(Self {
            stream: Some(stream),
            target: target.clone(),
            actions_written: 0,
        })
    }

    /// A sink writing to standard output.
    pub fn stdout() -> Self {
        Self {
            stream: Some(Stream::Stdout(BufWriter::new(io::stdout()))),
            target: OutputTarget::Stdout,
            actions_written: 0,
        }
    }

    /// Where this sink writes.
    pub fn target(&self) -> &OutputTarget {
        &self.target
    }

    /// Actions written so far, counted per line. A batch that fails partway
    /// still counts the lines written before the failure.
    pub fn actions_written(&self) -> u64 {
        self.actions_written
    }
}

impl ActionSink for FrameLogSink {
    fn write_actions(&mut self, actions: &[Action]) -> Result<(), SinkError> {
        let stream = self.stream.as_mut().ok_or(SinkError::Closed)?;
        let w = stream.writer();
        for action in actions {
            writeln!(w, "{action}")?;
            self.actions_written += 1;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), SinkError> {
        let Some(mut stream) = self.stream.take() else {
            return Ok(());
        };
        stream.writer().flush()?;
        debug!(output = %self.target, actions = self.actions_written, "frame log closed");
        Ok(())
    }

    fn is_closed(&self) -> bool {
        self.stream.is_none()
    }
}
