//! Ten-key mapping onto the Game Boy Advance button set.
//!
//! Each decimal digit selects one of the GBA's ten inputs:
//!
//! | Digit | Key | Digit | Key |
//! |-------|-----|-------|-----|
//! | 0 | `A` | 5 | `DOWN` |
//! | 1 | `B` | 6 | `LEFT` |
//! | 2 | `SELECT` | 7 | `RIGHT` |
//! | 3 | `START` | 8 | `L` |
//! | 4 | `UP` | 9 | `R` |

use digpipe_core::{Action, DigitChunk, MapError, MappedChunk, Mapper};
use tracing::trace;

use crate::timing::MapperTiming;

/// One of the ten GBA inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GbaKey {
    /// Face button A.
    A,
    /// Face button B.
    B,
    /// Select.
    Select,
    /// Start.
    Start,
    /// D-pad up.
    Up,
    /// D-pad down.
    Down,
    /// D-pad left.
    Left,
    /// D-pad right.
    Right,
    /// Left shoulder.
    L,
    /// Right shoulder.
    R,
}

impl GbaKey {
    /// Keys indexed by the digit that selects them.
    pub const BY_DIGIT: [GbaKey; 10] = [
        GbaKey::A,
        GbaKey::B,
        GbaKey::Select,
        GbaKey::Start,
        GbaKey::Up,
        GbaKey::Down,
        GbaKey::Left,
        GbaKey::Right,
        GbaKey::L,
        GbaKey::R,
    ];

    /// The key for `digit`, or `None` above 9.
    pub fn from_digit(digit: u8) -> Option<Self> {
        Self::BY_DIGIT.get(digit as usize).copied()
    }

    /// Control identifier written to action logs.
    pub fn as_str(self) -> &'static str {
        match self {
            GbaKey::A => "A",
            GbaKey::B => "B",
            GbaKey::Select => "SELECT",
            GbaKey::Start => "START",
            GbaKey::Up => "UP",
            GbaKey::Down => "DOWN",
            GbaKey::Left => "LEFT",
            GbaKey::Right => "RIGHT",
            GbaKey::L => "L",
            GbaKey::R => "R",
        }
    }
}

/// Maps each digit to a press and release of one [`GbaKey`].
///
/// # Examples
///
/// ```
/// use digpipe_core::{DigitChunk, Mapper};
/// use digpipe_mapper::GbaTenKeyMapper;
///
/// let mapper = GbaTenKeyMapper::default();
/// let out = mapper.map_chunk(&DigitChunk::new(0, vec![0, 1]), 100).unwrap();
///
/// let lines: Vec<String> = out.actions.iter().map(|a| a.to_string()).collect();
/// assert_eq!(lines, ["100: gba.A=1", "105: gba.A=0", "110: gba.B=1", "115: gba.B=0"]);
/// assert_eq!(out.next_frame, 120);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GbaTenKeyMapper {
    timing: MapperTiming,
}

impl GbaTenKeyMapper {
    /// Registry name of this mapper.
    pub const NAME: &'static str = "gba-tenkey";
    /// Device identifier on every emitted action.
    pub const DEVICE: &'static str = "gba";

    /// A mapper with the given timing.
    pub fn new(timing: MapperTiming) -> Self {
        Self { timing }
    }

    /// The configured timing.
    pub fn timing(&self) -> MapperTiming {
        self.timing
    }
}

impl Mapper for GbaTenKeyMapper {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn device(&self) -> &'static str {
        Self::DEVICE
    }

    fn frames_per_digit(&self) -> Option<u64> {
        self.timing.period()
    }

    fn map_chunk(&self, chunk: &DigitChunk, start_frame: u64) -> Result<MappedChunk, MapError> {
        let overflow = || MapError::FrameOverflow {
            index: chunk.index(),
        };

        let mut actions = Vec::with_capacity(chunk.len() * 2);
        let mut frame = start_frame;

        for &digit in chunk.digits() {
            let key = GbaKey::from_digit(digit).ok_or(MapError::InvalidDigit {
                index: chunk.index(),
                value: digit,
            })?;
            actions.push(Action::press(frame, Self::DEVICE, key.as_str()));
            frame = frame
                .checked_add(self.timing.hold_frames)
                .ok_or_else(overflow)?;
            actions.push(Action::release(frame, Self::DEVICE, key.as_str()));
            frame = frame
                .checked_add(self.timing.release_frames)
                .ok_or_else(overflow)?;
        }

        trace!(
            index = chunk.index(),
            start_frame,
            next_frame = frame,
            actions = actions.len(),
            "chunk mapped"
        );
        Ok(MappedChunk {
            actions,
            next_frame: frame,
        })
    }
}
