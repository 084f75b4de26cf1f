use thiserror::Error;

use crate::capture::domain::capture_backend::CaptureBackend;
use crate::capture::domain::property::CaptureProperty;

/// Errors raised by indexed frame access.
///
/// Open failure is deliberately not represented here: a session whose
/// source did not open reports `is_opened() == false` and iterates as
/// empty, the same way the wrapped library behaves.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CaptureError {
    /// The source does not report a frame count (live devices).
    #[error("source does not support frame counting")]
    FrameCountUnsupported,
    /// Index outside `[0, count)` after negative-index resolution.
    #[error("frame index {index} out of range for {count} frames")]
    IndexOutOfRange { index: i64, count: usize },
    /// The seek was accepted but the read at the target position failed.
    #[error("failed to read frame at index {index}")]
    ReadFailed { index: usize },
}

/// Owning wrapper around one open capture handle.
///
/// The session ties the handle's lifetime to its own scope: dropping it
/// releases the handle on every exit path, panics included. On top of
/// that it adapts the backend's polling reads to iteration via
/// [`frames`](Self::frames) and exposes the property table through named
/// accessors.
pub struct CaptureSession<B: CaptureBackend> {
    backend: B,
    released: bool,
    ended: bool,
}

impl<B: CaptureBackend> CaptureSession<B> {
    /// Wraps an already-constructed backend.
    ///
    /// Never fails; whether the source actually opened is observable only
    /// via [`is_opened`](Self::is_opened), and callers must check it
    /// before relying on reads.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            released: false,
            ended: false,
        }
    }

    pub fn is_opened(&self) -> bool {
        !self.released && self.backend.is_opened()
    }

    /// Single polling read, bypassing the iteration state machine.
    pub fn read(&mut self) -> Option<B::Frame> {
        self.backend.read()
    }

    /// Lazy, forward-only sequence of the remaining frames.
    ///
    /// The sequence ends when the source is not open or a read fails, and
    /// the end is permanent: once exhausted, this and every later
    /// `frames()` call yield nothing without touching the backend again.
    pub fn frames(&mut self) -> Frames<'_, B> {
        Frames { session: self }
    }

    /// Reads a property table entry.
    pub fn get(&self, prop: CaptureProperty) -> f64 {
        self.backend.get(prop)
    }

    /// Writes a property table entry.
    pub fn set(&mut self, prop: CaptureProperty, value: f64) -> bool {
        self.backend.set(prop, value)
    }

    /// Nominal frames per second.
    pub fn fps(&self) -> f64 {
        self.get(CaptureProperty::Fps)
    }

    /// Frame width in pixels, truncated from the property table's float.
    pub fn width(&self) -> i32 {
        self.get(CaptureProperty::FrameWidth) as i32
    }

    /// Frame height in pixels, truncated from the property table's float.
    pub fn height(&self) -> i32 {
        self.get(CaptureProperty::FrameHeight) as i32
    }

    /// `(width, height)` in one call.
    pub fn shape(&self) -> (i32, i32) {
        (self.width(), self.height())
    }

    /// Requests a new frame size as two independent property writes.
    ///
    /// Not transactional: the backend may accept one dimension and refuse
    /// the other. Returns whether both writes were accepted.
    pub fn set_shape(&mut self, width: i32, height: i32) -> bool {
        let width_ok = self.set(CaptureProperty::FrameWidth, f64::from(width));
        let height_ok = self.set(CaptureProperty::FrameHeight, f64::from(height));
        width_ok && height_ok
    }

    /// Total number of frames in the source.
    ///
    /// Fails with [`CaptureError::FrameCountUnsupported`] when the source
    /// cannot count its frames; live devices report a negative count.
    pub fn frame_count(&self) -> Result<usize, CaptureError> {
        let raw = self.get(CaptureProperty::FrameCount);
        if raw < 0.0 {
            return Err(CaptureError::FrameCountUnsupported);
        }
        Ok(raw as usize)
    }

    /// Seeks to `index` and reads that frame.
    ///
    /// Negative indices count back from the end, so `-1` is the last
    /// frame. Every call is an independent seek plus read; the session
    /// caches neither frames nor the current position.
    pub fn frame_at(&mut self, index: i64) -> Result<B::Frame, CaptureError> {
        let count = self.frame_count()?;
        let resolved = if index < 0 {
            count as i64 + index
        } else {
            index
        };
        if resolved < 0 || resolved >= count as i64 {
            return Err(CaptureError::IndexOutOfRange { index, count });
        }
        let resolved = resolved as usize;
        self.backend
            .set(CaptureProperty::PosFrames, resolved as f64);
        self.backend
            .read()
            .ok_or(CaptureError::ReadFailed { index: resolved })
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

impl<B: CaptureBackend> Drop for CaptureSession<B> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Iterator over a session's remaining frames.
///
/// See [`CaptureSession::frames`]. The exhaustion flag lives on the
/// session, so the terminal state survives this iterator being dropped
/// and recreated.
pub struct Frames<'a, B: CaptureBackend> {
    session: &'a mut CaptureSession<B>,
}

impl<B: CaptureBackend> Iterator for Frames<'_, B> {
    type Item = B::Frame;

    fn next(&mut self) -> Option<B::Frame> {
        if self.session.ended {
            return None;
        }
        if !self.session.is_opened() {
            self.session.ended = true;
            return None;
        }
        match self.session.backend.read() {
            Some(frame) => Some(frame),
            None => {
                self.session.ended = true;
                None
            }
        }
    }
}
