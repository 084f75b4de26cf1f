use crate::capture::domain::property::CaptureProperty;

/// Polling-style frame source: the seam between the sessions and the
/// underlying video library.
///
/// Implementations wrap one open device/file handle. `read` folds the
/// library's `(success, frame)` pair into an `Option`; a failed read and
/// end-of-stream are indistinguishable at this layer, matching the wrapped
/// library's own convention.
pub trait CaptureBackend {
    type Frame;

    /// Whether the underlying handle opened successfully and is still open.
    fn is_opened(&self) -> bool;

    /// Blocking read of the next frame. `None` on failure or end of stream.
    fn read(&mut self) -> Option<Self::Frame>;

    /// Reads a property table entry. Unsupported keys read as `0.0`.
    fn get(&self, prop: CaptureProperty) -> f64;

    /// Writes a property table entry, returning whether the backend
    /// accepted the value.
    fn set(&mut self, prop: CaptureProperty, value: f64) -> bool;

    /// Releases the underlying handle. Must not fail; the owning session
    /// guarantees at most one call.
    fn release(&mut self);
}
