use crate::device_camera::interface::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceBox {
    /// Clamps the box to the frame so it can be cropped safely.
    pub fn clamp_to(&self, frame_width: u32, frame_height: u32) -> FaceBox {
        let x = self.x.min(frame_width);
        let y = self.y.min(frame_height);
        FaceBox {
            x,
            y,
            width: self.width.min(frame_width - x),
            height: self.height.min(frame_height - y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

pub trait FaceDetector {
    fn detect(
        &self,
        frame: &Frame,
    ) -> Result<Vec<FaceBox>, Box<dyn std::error::Error + Send + Sync>>;
}
