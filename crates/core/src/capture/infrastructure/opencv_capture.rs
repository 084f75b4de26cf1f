use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};

use crate::capture::domain::capture_backend::CaptureBackend;
use crate::capture::domain::property::CaptureProperty;
use crate::shared::source::CaptureSource;

/// Captures frames via OpenCV's videoio module.
///
/// Thin adapter over [`videoio::VideoCapture`]. Binding-level errors are
/// folded into the library's own failure conventions (`false` success
/// flags, zero property reads), so the session layer sees one uniform
/// contract. A source that fails to open is not an error either: the
/// handle is simply not opened, observable via `is_opened`.
pub struct OpencvCapture {
    inner: VideoCapture,
}

impl OpencvCapture {
    /// Opens a camera by device index with automatic API selection.
    pub fn from_device(index: i32) -> opencv::Result<Self> {
        Self::from_device_with_api(index, videoio::CAP_ANY)
    }

    /// Opens a camera by device index with an explicit `CAP_*` API
    /// preference, forwarded verbatim.
    pub fn from_device_with_api(index: i32, api: i32) -> opencv::Result<Self> {
        let inner = VideoCapture::new(index, api)?;
        Ok(Self { inner })
    }

    /// Opens a video file or stream URL with automatic API selection.
    pub fn from_path(path: &str) -> opencv::Result<Self> {
        Self::from_path_with_api(path, videoio::CAP_ANY)
    }

    /// Opens a video file or stream URL with an explicit `CAP_*` API
    /// preference, forwarded verbatim.
    pub fn from_path_with_api(path: &str, api: i32) -> opencv::Result<Self> {
        let inner = VideoCapture::from_file(path, api)?;
        Ok(Self { inner })
    }

    /// Opens whatever a [`CaptureSource`] describes.
    pub fn from_source(source: &CaptureSource) -> opencv::Result<Self> {
        match source {
            CaptureSource::Device(index) => Self::from_device(*index),
            CaptureSource::Path(path) => Self::from_path(&path.to_string_lossy()),
        }
    }
}

fn prop_id(prop: CaptureProperty) -> i32 {
    match prop {
        CaptureProperty::FrameWidth => videoio::CAP_PROP_FRAME_WIDTH,
        CaptureProperty::FrameHeight => videoio::CAP_PROP_FRAME_HEIGHT,
        CaptureProperty::Fps => videoio::CAP_PROP_FPS,
        CaptureProperty::PosFrames => videoio::CAP_PROP_POS_FRAMES,
        CaptureProperty::FrameCount => videoio::CAP_PROP_FRAME_COUNT,
    }
}

impl CaptureBackend for OpencvCapture {
    type Frame = Mat;

    fn is_opened(&self) -> bool {
        self.inner.is_opened().unwrap_or(false)
    }

    fn read(&mut self) -> Option<Mat> {
        let mut frame = Mat::default();
        match self.inner.read(&mut frame) {
            Ok(true) if !frame.empty() => Some(frame),
            Ok(_) => None,
            Err(e) => {
                log::debug!("capture read failed: {e}");
                None
            }
        }
    }

    fn get(&self, prop: CaptureProperty) -> f64 {
        self.inner.get(prop_id(prop)).unwrap_or(0.0)
    }

    fn set(&mut self, prop: CaptureProperty, value: f64) -> bool {
        self.inner.set(prop_id(prop), value).unwrap_or(false)
    }

    fn release(&mut self) {
        if let Err(e) = self.inner.release() {
            log::warn!("capture release failed: {e}");
        }
    }
}
