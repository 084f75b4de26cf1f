/// Keys into a capture backend's generic property table.
///
/// The wrapped library addresses stream properties through numeric ids;
/// this enum is the fixed set the sessions use, translated to the
/// library's ids at the infrastructure boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CaptureProperty {
    /// Frame width in pixels. The property table stores it as a float.
    FrameWidth,
    /// Frame height in pixels. The property table stores it as a float.
    FrameHeight,
    /// Nominal frames per second.
    Fps,
    /// Zero-based index of the frame to be decoded next.
    PosFrames,
    /// Total number of frames. Negative when the source cannot count
    /// (live devices).
    FrameCount,
}
