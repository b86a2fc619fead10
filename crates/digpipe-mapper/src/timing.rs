//! Frame timing shared by press/release mappers.

/// How long each control is held and how long to wait before the next.
///
/// One digit occupies [`period`](MapperTiming::period) frames: pressed at
/// frame `f`, released at `f + hold_frames`, next press at
/// `f + hold_frames + release_frames`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapperTiming {
    /// Frames between a press and its release. Default: 5.
    pub hold_frames: u64,
    /// Frames between a release and the next press. Default: 5.
    pub release_frames: u64,
}

impl MapperTiming {
    /// Default hold duration in frames.
    pub const DEFAULT_HOLD_FRAMES: u64 = 5;
    /// Default release duration in frames.
    pub const DEFAULT_RELEASE_FRAMES: u64 = 5;

    /// Timing with explicit hold and release durations.
    pub fn new(hold_frames: u64, release_frames: u64) -> Self {
        Self {
            hold_frames,
            release_frames,
        }
    }

    /// Frames consumed per digit, or `None` on overflow.
    pub fn period(&self) -> Option<u64> {
        self.hold_frames.checked_add(self.release_frames)
    }
}

impl Default for MapperTiming {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOLD_FRAMES, Self::DEFAULT_RELEASE_FRAMES)
    }
}
