use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Where a capture session reads from: a local camera by index, or a
/// video file / stream URL by path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureSource {
    Device(i32),
    Path(PathBuf),
}

impl FromStr for CaptureSource {
    type Err = Infallible;

    /// A bare integer selects a camera; anything else is a path or URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i32>() {
            Ok(index) => Ok(Self::Device(index)),
            Err(_) => Ok(Self::Path(PathBuf::from(s))),
        }
    }
}

impl fmt::Display for CaptureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(index) => write!(f, "device {index}"),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}
