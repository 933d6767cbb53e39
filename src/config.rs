use crate::mode::Mode;
use chrono::Offset;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// Pixel distance below which two fingertips (or a fingertip and the
    /// wrist) count as touching. Not scaled with the frame size.
    pub distance_threshold: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            distance_threshold: 30.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub device_index: u32,
    pub width: u32,
    pub height: u32,
    /// Fraction of reads that yield no frame.
    pub drop_rate: f32,
}

#[derive(Debug, Clone)]
pub struct HandDetectorConfig {
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
    pub max_num_hands: usize,
    /// Frames each scripted pose is held by the fake detector.
    pub hold_frames: usize,
}

#[derive(Debug, Clone)]
pub struct FaceDetectorConfig {
    pub scale_factor: f32,
    pub min_neighbors: u32,
}

#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Gui,
    Console,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub frame_interval: Duration,
    pub initial_mode: Mode,
    pub gesture: GestureConfig,
    pub camera: CameraConfig,
    pub hand_detector: HandDetectorConfig,
    pub face_detector: FaceDetectorConfig,
    pub window: WindowConfig,
    pub display: DisplayKind,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(10),
            initial_mode: Mode::Idle,
            gesture: GestureConfig::default(),
            camera: CameraConfig {
                device_index: 0,
                width: 640,
                height: 480,
                drop_rate: 0.0,
            },
            hand_detector: HandDetectorConfig {
                min_detection_confidence: 0.5,
                min_tracking_confidence: 0.5,
                max_num_hands: 2,
                hold_frames: 90,
            },
            face_detector: FaceDetectorConfig {
                scale_factor: 1.1,
                min_neighbors: 4,
            },
            window: WindowConfig {
                title: "AI Hand & Face Detection".to_string(),
                width: 800.0,
                height: 600.0,
            },
            display: DisplayKind::Gui,
            logger_timezone: chrono::Utc.fix(),
        }
    }
}
