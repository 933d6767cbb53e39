use crate::config::FaceDetectorConfig;
use crate::device_camera::interface::Frame;
use crate::face_detector::interface::{FaceBox, FaceDetector};
use crate::library::logger::interface::Logger;
use rand::Rng;
use std::sync::Arc;

/// Smallest window the cascade scans.
const MIN_WINDOW: u32 = 8;

/// Reports one face near the middle of the frame. The box side snaps to the
/// detection window pyramid (`MIN_WINDOW * scale_factor^k`), and the box
/// wobbles less the more neighbor hits are required to confirm it.
pub struct FaceDetectorFake {
    config: FaceDetectorConfig,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FaceDetectorFake {
    pub fn new(config: FaceDetectorConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let logger = logger.with_namespace("face_detector").with_namespace("fake");
        let _ = logger.info(&format!(
            "scale factor {}, min neighbors {}",
            config.scale_factor, config.min_neighbors
        ));
        Self { config, logger }
    }

    /// Largest pyramid window that fits in `limit`.
    pub fn window_side(&self, limit: u32) -> Option<u32> {
        if limit < MIN_WINDOW {
            return None;
        }
        if self.config.scale_factor <= 1.0 {
            return Some(MIN_WINDOW);
        }

        let mut side = MIN_WINDOW as f32;
        while side * self.config.scale_factor <= limit as f32 {
            side *= self.config.scale_factor;
        }
        Some(side as u32)
    }

    pub fn max_wobble(&self) -> i64 {
        16 / (i64::from(self.config.min_neighbors) + 1)
    }
}

impl FaceDetector for FaceDetectorFake {
    fn detect(
        &self,
        frame: &Frame,
    ) -> Result<Vec<FaceBox>, Box<dyn std::error::Error + Send + Sync>> {
        let Some(side) = self.window_side(frame.width().min(frame.height()) / 3) else {
            self.logger.info(&format!(
                "No detection window fits a {}x{} frame",
                frame.width(),
                frame.height()
            ))?;
            return Ok(vec![]);
        };

        let max_wobble = self.max_wobble();
        let wobble: i64 = rand::rng().random_range(-max_wobble..=max_wobble);
        let center_x = i64::from(frame.width() / 2) + wobble;
        let center_y = i64::from(frame.height() / 2) - wobble;
        let half = i64::from(side / 2);

        let face = FaceBox {
            x: (center_x - half).max(0) as u32,
            y: (center_y - half).max(0) as u32,
            width: side,
            height: side,
        };

        Ok(vec![face.clamp_to(frame.width(), frame.height())])
    }
}
