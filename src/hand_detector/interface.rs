use crate::device_camera::interface::Frame;
use crate::gesture_classifier::interface::HandPose;

pub trait HandDetector {
    /// One pose per detected hand, landmarks normalized to the frame.
    fn detect(
        &self,
        frame: &Frame,
    ) -> Result<Vec<HandPose>, Box<dyn std::error::Error + Send + Sync>>;
}
