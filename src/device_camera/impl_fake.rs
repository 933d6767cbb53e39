use crate::config::CameraConfig;
use crate::device_camera::interface::{DeviceCamera, Frame};
use crate::library::logger::interface::Logger;
use image::{Rgb, RgbImage};
use rand::Rng;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

/// Scrolling gradient with per-frame brightness noise.
pub struct DeviceCameraFake {
    config: CameraConfig,
    started: AtomicBool,
    frame_count: AtomicU32,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceCameraFake {
    pub fn new(config: CameraConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            config,
            started: AtomicBool::new(false),
            frame_count: AtomicU32::new(0),
            logger: logger.with_namespace("camera").with_namespace("fake"),
        }
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

impl DeviceCamera for DeviceCameraFake {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info(&format!(
            "Opening camera {} at {}x{}",
            self.config.device_index, self.config.width, self.config.height
        ))?;
        self.started.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.started.swap(false, Ordering::SeqCst) {
            self.logger.info("Camera released")?;
        }
        Ok(())
    }

    fn capture_frame(&self) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>> {
        if !self.is_started() {
            return Err("camera is not started".into());
        }

        let mut rng = rand::rng();
        if rng.random::<f32>() < self.config.drop_rate {
            return Ok(None);
        }

        let offset = self.frame_count.fetch_add(1, Ordering::SeqCst);
        let brightness: u8 = rng.random_range(0..16);
        let image = RgbImage::from_fn(self.config.width, self.config.height, |x, y| {
            let shade = (x.wrapping_add(offset) % 256) as u8;
            Rgb([
                shade.saturating_add(brightness),
                (y % 256) as u8,
                128u8.saturating_add(brightness),
            ])
        });

        Ok(Some(Frame::new(image)))
    }
}
