use crate::device_camera::interface::{DeviceCamera, Frame};
use crate::emotion_classifier::interface::EmotionClassifier;
use crate::face_detector::interface::{FaceBox, FaceDetector};
use crate::gesture_classifier::interface::GestureClassifier;
use crate::hand_detector::interface::HandDetector;
use crate::library::logger::interface::Logger;
use crate::mode::Mode;
use crate::vision_app::analysis::{FaceAnalysis, FrameAnalysis, HandAnalysis};
use std::sync::{Arc, Mutex};

/// Owns the camera and the detectors for the lifetime of the app. The
/// camera is released exactly once, either through [`CaptureSession::release`]
/// or when the session is dropped. Starting and releasing hold the same lock,
/// so a release never lands in the middle of a start.
pub struct CaptureSession {
    logger: Arc<dyn Logger + Send + Sync>,
    camera: Arc<dyn DeviceCamera + Send + Sync>,
    hand_detector: Arc<dyn HandDetector + Send + Sync>,
    face_detector: Arc<dyn FaceDetector + Send + Sync>,
    emotion_classifier: Arc<dyn EmotionClassifier + Send + Sync>,
    gesture_classifier: Arc<dyn GestureClassifier + Send + Sync>,
    released: Mutex<bool>,
}

impl CaptureSession {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        camera: Arc<dyn DeviceCamera + Send + Sync>,
        hand_detector: Arc<dyn HandDetector + Send + Sync>,
        face_detector: Arc<dyn FaceDetector + Send + Sync>,
        emotion_classifier: Arc<dyn EmotionClassifier + Send + Sync>,
        gesture_classifier: Arc<dyn GestureClassifier + Send + Sync>,
    ) -> Self {
        Self {
            logger: logger.with_namespace("capture_session"),
            camera,
            hand_detector,
            face_detector,
            emotion_classifier,
            gesture_classifier,
            released: Mutex::new(false),
        }
    }

    pub fn start(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let released = self.released.lock().map_err(|e| e.to_string())?;
        if *released {
            return Err("capture session already released".into());
        }
        self.camera.start()
    }

    pub fn capture(&self) -> Result<Option<Frame>, Box<dyn std::error::Error + Send + Sync>> {
        self.camera.capture_frame()
    }

    pub fn analyze(
        &self,
        mode: Mode,
        frame: &Frame,
    ) -> Result<FrameAnalysis, Box<dyn std::error::Error + Send + Sync>> {
        match mode {
            Mode::Idle => Ok(FrameAnalysis::empty(mode)),
            Mode::FaceDetection => {
                let faces = self
                    .face_detector
                    .detect(frame)?
                    .into_iter()
                    .map(|face| FaceAnalysis {
                        face,
                        emotion: None,
                    })
                    .collect();
                Ok(FrameAnalysis {
                    mode,
                    hands: vec![],
                    faces,
                })
            }
            Mode::EmotionAnalysis => {
                let faces = self
                    .face_detector
                    .detect(frame)?
                    .into_iter()
                    .map(|face| FaceAnalysis {
                        face,
                        emotion: self.dominant_emotion(frame, face),
                    })
                    .collect();
                Ok(FrameAnalysis {
                    mode,
                    hands: vec![],
                    faces,
                })
            }
            Mode::HandGestures => {
                let mut hands = vec![];
                for pose in self.hand_detector.detect(frame)? {
                    match self
                        .gesture_classifier
                        .classify(&pose, frame.width(), frame.height())
                    {
                        Ok(labels) => hands.push(HandAnalysis { pose, labels }),
                        Err(e) => {
                            let _ = self.logger.error(&format!("Skipping hand: {}", e));
                        }
                    }
                }
                Ok(FrameAnalysis {
                    mode,
                    hands,
                    faces: vec![],
                })
            }
        }
    }

    /// A failure only costs this face its label.
    fn dominant_emotion(&self, frame: &Frame, face: FaceBox) -> Option<String> {
        let region = face.clamp_to(frame.width(), frame.height());
        if region.is_empty() {
            return None;
        }

        let crop = image::imageops::crop_imm(
            &*frame.0,
            region.x,
            region.y,
            region.width,
            region.height,
        )
        .to_image();

        match self.emotion_classifier.dominant_emotion(&crop) {
            Ok(emotion) => Some(emotion),
            Err(e) => {
                let _ = self
                    .logger
                    .error(&format!("Emotion analysis error: {}", e));
                None
            }
        }
    }

    pub fn release(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut released = self.released.lock().map_err(|e| e.to_string())?;
        if *released {
            return Ok(());
        }
        *released = true;
        self.logger.info("Releasing camera")?;
        self.camera.stop()
    }

    pub fn is_released(&self) -> bool {
        self.released.lock().map(|released| *released).unwrap_or(true)
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            eprintln!("Failed to release camera during shutdown: {}", e);
        }
    }
}
