//! Timed device input events.

use std::fmt;

/// Action value for a control press.
pub const PRESS: u8 = 1;
/// Action value for a control release.
pub const RELEASE: u8 = 0;

/// One discrete input event at a global frame number.
///
/// Device and control identifiers come from closed, per-mapper
/// vocabularies, so they are held as `&'static str`.
///
/// The [`Display`](fmt::Display) form is the frame-log line format:
///
/// ```
/// use digpipe_core::Action;
///
/// let action = Action::press(12, "gba", "A");
/// assert_eq!(action.to_string(), "12: gba.A=1");
/// assert_eq!(Action::release(17, "gba", "A").to_string(), "17: gba.A=0");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Action {
    /// Global frame at which the event applies.
    pub frame: u64,
    /// Logical input device identifier.
    pub device: &'static str,
    /// Control activated on the device.
    pub control: &'static str,
    /// [`PRESS`] or [`RELEASE`].
    pub value: u8,
}

impl Action {
    /// A press of `control` at `frame`.
    pub fn press(frame: u64, device: &'static str, control: &'static str) -> Self {
        Self {
            frame,
            device,
            control,
            value: PRESS,
        }
    }

    /// A release of `control` at `frame`.
    pub fn release(frame: u64, device: &'static str, control: &'static str) -> Self {
        Self {
            frame,
            device,
            control,
            value: RELEASE,
        }
    }

    /// Whether this event activates its control.
    pub fn is_press(&self) -> bool {
        self.value == PRESS
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}.{}={}",
            self.frame, self.device, self.control, self.value
        )
    }
}
