use opencv::core::{Mat, Size};
use opencv::prelude::*;
use opencv::videoio::VideoWriter;

use crate::capture::domain::writer_backend::WriterBackend;

/// Writes frames via OpenCV's videoio module.
///
/// Thin adapter over [`VideoWriter`]; codec, frame rate, and frame size
/// are forwarded verbatim. As on the capture side, a sink that fails to
/// open is not an error; it is observable via `is_opened`.
pub struct OpencvWriter {
    inner: VideoWriter,
}

impl OpencvWriter {
    /// Opens an output file. `fourcc` is the four-character codec tag
    /// ("MJPG", "mp4v", ...); `frame_size` is `(width, height)` and must
    /// match the frames written later.
    pub fn create(
        path: &str,
        fourcc: &str,
        fps: f64,
        frame_size: (i32, i32),
    ) -> opencv::Result<Self> {
        let code = fourcc_code(fourcc)?;
        let (width, height) = frame_size;
        let inner = VideoWriter::new(path, code, fps, Size::new(width, height), true)?;
        Ok(Self { inner })
    }
}

fn fourcc_code(tag: &str) -> opencv::Result<i32> {
    let chars: Vec<char> = tag.chars().collect();
    if chars.len() != 4 {
        return Err(opencv::Error::new(
            opencv::core::StsBadArg,
            format!("fourcc must be four characters, got {tag:?}"),
        ));
    }
    VideoWriter::fourcc(chars[0], chars[1], chars[2], chars[3])
}

impl WriterBackend for OpencvWriter {
    type Frame = Mat;

    fn is_opened(&self) -> bool {
        self.inner.is_opened().unwrap_or(false)
    }

    fn write(&mut self, frame: &Mat) -> bool {
        match self.inner.write(frame) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("writer rejected frame: {e}");
                false
            }
        }
    }

    fn release(&mut self) {
        if let Err(e) = self.inner.release() {
            log::warn!("writer release failed: {e}");
        }
    }
}
