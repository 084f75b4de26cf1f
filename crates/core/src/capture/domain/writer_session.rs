use crate::capture::domain::writer_backend::WriterBackend;

/// Owning wrapper around one open writer handle.
///
/// Construction parameters (codec, frame rate, frame size) belong to the
/// backend; the session only ties the handle's lifetime to its scope and
/// forwards frames. Dropping it releases the handle on every exit path,
/// panics included.
pub struct WriterSession<B: WriterBackend> {
    backend: B,
    released: bool,
}

impl<B: WriterBackend> WriterSession<B> {
    /// Wraps an already-constructed backend. Never fails; whether the
    /// sink actually opened is observable via [`is_opened`](Self::is_opened).
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            released: false,
        }
    }

    pub fn is_opened(&self) -> bool {
        !self.released && self.backend.is_opened()
    }

    /// Appends one frame, returning whether the backend accepted it.
    /// Always `false` once the session has been released.
    pub fn write(&mut self, frame: &B::Frame) -> bool {
        if self.released {
            return false;
        }
        self.backend.write(frame)
    }

    /// Releases the underlying handle.
    ///
    /// Idempotent: the backend sees at most one release no matter how
    /// often this is called; later calls are no-ops. Never fails.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.backend.release();
    }
}

impl<B: WriterBackend> Drop for WriterSession<B> {
    fn drop(&mut self) {
        self.release();
    }
}
