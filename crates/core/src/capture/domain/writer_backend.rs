/// Frame sink: one open writer handle behind the session layer.
pub trait WriterBackend {
    type Frame;

    /// Whether the underlying handle opened successfully and is still open.
    fn is_opened(&self) -> bool;

    /// Appends one frame, returning whether the backend accepted it.
    fn write(&mut self, frame: &Self::Frame) -> bool;

    /// Releases the underlying handle. Must not fail; the owning session
    /// guarantees at most one call.
    fn release(&mut self);
}
