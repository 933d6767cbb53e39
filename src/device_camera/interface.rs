use image::RgbImage;
use std::fmt;
use std::sync::Arc;

/// One RGB frame, shared between the capture, analysis and render steps.
#[derive(Clone, PartialEq)]
pub struct Frame(pub Arc<RgbImage>);

impl Frame {
    pub fn new(image: RgbImage) -> Self {
        Self(Arc::new(image))
    }

    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({}x{})", self.width(), self.height())
    }
}

pub trait DeviceCamera {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
    /// `Ok(None)` when the source had no frame ready.
    fn capture_frame(&self) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>>;
}
