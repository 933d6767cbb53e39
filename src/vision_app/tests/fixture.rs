use crate::config::{Config, DisplayKind};
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_camera::interface::{DeviceCamera, Frame};
use crate::device_display::impl_fake::DeviceDisplayFake;
use crate::device_display::interface::DeviceDisplay;
use crate::emotion_classifier::impl_fake::EmotionClassifierFake;
use crate::emotion_classifier::interface::EmotionClassifier;
use crate::face_detector::impl_fake::FaceDetectorFake;
use crate::gesture_classifier::impl_geometric::GestureClassifierGeometric;
use crate::gesture_classifier::interface::HandPose;
use crate::hand_detector::interface::HandDetector;
use crate::library::logger::impl_fake::LoggerFake;
use crate::vision_app::capture_session::CaptureSession;
use crate::vision_app::main::VisionApp;
use image::RgbImage;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Always reports the same hands.
pub struct HandDetectorStub {
    pub poses: Vec<HandPose>,
}

impl HandDetector for HandDetectorStub {
    fn detect(
        &self,
        _frame: &Frame,
    ) -> Result<Vec<HandPose>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.poses.clone())
    }
}

pub struct EmotionClassifierFailing {}

impl EmotionClassifier for EmotionClassifierFailing {
    fn dominant_emotion(
        &self,
        _face: &RgbImage,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Err("model not loaded".into())
    }
}

/// Takes a while to open, like a real device warming up.
pub struct DeviceCameraSlowStart {
    pub start_delay: Duration,
    pub open: AtomicBool,
}

impl DeviceCameraSlowStart {
    pub fn new(start_delay: Duration) -> Self {
        Self {
            start_delay,
            open: AtomicBool::new(false),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

impl DeviceCamera for DeviceCameraSlowStart {
    fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        std::thread::sleep(self.start_delay);
        self.open.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.open.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn capture_frame(&self) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(None)
    }
}

pub fn session_with_camera(camera: Arc<dyn DeviceCamera + Send + Sync>) -> CaptureSession {
    let config = test_config();
    let logger = Arc::new(LoggerFake::new());
    CaptureSession::new(
        logger.clone(),
        camera,
        Arc::new(HandDetectorStub { poses: vec![] }),
        Arc::new(FaceDetectorFake::new(config.face_detector, logger)),
        Arc::new(EmotionClassifierFailing {}),
        Arc::new(GestureClassifierGeometric::new(config.gesture)),
    )
}

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.frame_interval = Duration::from_millis(1);
    config.camera.width = 64;
    config.camera.height = 48;
    config.display = DisplayKind::Console;
    config
}

pub fn test_frame() -> Frame {
    Frame::new(RgbImage::new(64, 48))
}

pub struct Fixture {
    pub config: Config,
    pub logger: LoggerFake,
    pub camera: Arc<DeviceCameraFake>,
    pub session: Arc<CaptureSession>,
    pub device_display: Arc<Mutex<DeviceDisplayFake>>,
}

impl Fixture {
    pub fn new(poses: Vec<HandPose>) -> Self {
        Self::build(poses, Arc::new(EmotionClassifierFailing {}))
    }

    pub fn with_emotions(poses: Vec<HandPose>) -> Self {
        Self::build(
            poses,
            Arc::new(EmotionClassifierFake::new(Arc::new(LoggerFake::new()))),
        )
    }

    fn build(
        poses: Vec<HandPose>,
        emotion_classifier: Arc<dyn EmotionClassifier + Send + Sync>,
    ) -> Self {
        let config = test_config();
        let logger = LoggerFake::new();
        let shared_logger = Arc::new(logger.clone());
        let camera = Arc::new(DeviceCameraFake::new(
            config.camera.clone(),
            shared_logger.clone(),
        ));
        let session = Arc::new(CaptureSession::new(
            shared_logger.clone(),
            camera.clone(),
            Arc::new(HandDetectorStub { poses }),
            Arc::new(FaceDetectorFake::new(
                config.face_detector.clone(),
                shared_logger.clone(),
            )),
            emotion_classifier,
            Arc::new(GestureClassifierGeometric::new(config.gesture.clone())),
        ));
        let device_display = Arc::new(Mutex::new(DeviceDisplayFake::new(shared_logger)));

        Self {
            config,
            logger,
            camera,
            session,
            device_display,
        }
    }

    pub fn app(&self) -> VisionApp {
        let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
            self.device_display.clone();
        VisionApp::new(
            self.config.clone(),
            Arc::new(self.logger.clone()),
            self.session.clone(),
            device_display,
        )
    }
}
