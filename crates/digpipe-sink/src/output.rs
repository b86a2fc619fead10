//! Where a sink writes.

use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Destination of a sink's output.
///
/// Parsed from a command-line style argument where `"-"` means stdout:
///
/// ```
/// use digpipe_sink::OutputTarget;
///
/// assert_eq!("-".parse::<OutputTarget>().unwrap(), OutputTarget::Stdout);
/// assert_eq!(
///     "run.log".parse::<OutputTarget>().unwrap(),
///     OutputTarget::File("run.log".into())
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputTarget {
    /// The process's standard output.
    #[default]
    Stdout,
    /// A file, created or truncated when the sink opens.
    File(PathBuf),
}

impl FromStr for OutputTarget {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "-" => Self::Stdout,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => write!(f, "-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
