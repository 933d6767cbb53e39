use crate::config::HandDetectorConfig;
use crate::device_camera::interface::Frame;
use crate::gesture_classifier::interface::{HandPose, Landmark, LANDMARKS_PER_HAND};
use crate::hand_detector::interface::HandDetector;
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Poses are laid out on a 640x480 reference frame; normalizing them makes
/// them scale with whatever frame they are detected on.
const REFERENCE_WIDTH: f32 = 640.0;
const REFERENCE_HEIGHT: f32 = 480.0;

/// Wrist, then thumb, index, middle, ring and pinky tips, in reference pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedPose {
    pub name: &'static str,
    pub wrist: (f32, f32),
    pub tips: [(f32, f32); 5],
}

pub const SCRIPTED_POSES: [ScriptedPose; 6] = [
    ScriptedPose {
        name: "open hand",
        wrist: (320.0, 400.0),
        tips: [
            (220.0, 300.0),
            (280.0, 150.0),
            (320.0, 130.0),
            (360.0, 150.0),
            (410.0, 200.0),
        ],
    },
    ScriptedPose {
        name: "thumbs up",
        wrist: (320.0, 400.0),
        tips: [
            (300.0, 150.0),
            (360.0, 300.0),
            (365.0, 320.0),
            (360.0, 340.0),
            (350.0, 355.0),
        ],
    },
    ScriptedPose {
        name: "ok sign",
        wrist: (320.0, 400.0),
        tips: [
            (300.0, 215.0),
            (310.0, 210.0),
            (340.0, 260.0),
            (380.0, 270.0),
            (420.0, 280.0),
        ],
    },
    ScriptedPose {
        name: "peace",
        wrist: (320.0, 400.0),
        tips: [
            (250.0, 300.0),
            (300.0, 100.0),
            (320.0, 105.0),
            (350.0, 320.0),
            (380.0, 330.0),
        ],
    },
    ScriptedPose {
        name: "rock",
        wrist: (320.0, 400.0),
        tips: [
            (250.0, 280.0),
            (290.0, 100.0),
            (330.0, 300.0),
            (360.0, 290.0),
            (375.0, 300.0),
        ],
    },
    ScriptedPose {
        name: "fist",
        wrist: (320.0, 400.0),
        tips: [
            (330.0, 400.0),
            (325.0, 410.0),
            (315.0, 405.0),
            (310.0, 395.0),
            (320.0, 415.0),
        ],
    },
];

impl ScriptedPose {
    /// Each finger gets three joints spaced evenly from the wrist to its tip.
    pub fn to_hand_pose(&self) -> HandPose {
        let normalize =
            |(x, y): (f32, f32)| Landmark::new(x / REFERENCE_WIDTH, y / REFERENCE_HEIGHT);

        let mut landmarks = Vec::with_capacity(LANDMARKS_PER_HAND);
        landmarks.push(normalize(self.wrist));
        for tip in self.tips {
            for step in 1..=4 {
                let t = step as f32 / 4.0;
                let joint = if step == 4 {
                    tip
                } else {
                    (
                        self.wrist.0 + (tip.0 - self.wrist.0) * t,
                        self.wrist.1 + (tip.1 - self.wrist.1) * t,
                    )
                };
                landmarks.push(normalize(joint));
            }
        }

        HandPose::new(landmarks)
    }
}

/// Cycles through [`SCRIPTED_POSES`], holding each one for a fixed number of
/// frames. Every read draws a detection confidence and drops the hand when
/// it falls under the configured minimum.
pub struct HandDetectorFake {
    config: HandDetectorConfig,
    frame_count: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl HandDetectorFake {
    pub fn new(config: HandDetectorConfig, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        let logger = logger.with_namespace("hand_detector").with_namespace("fake");
        let _ = logger.info(&format!(
            "max hands {}, detection confidence {}, tracking confidence {}",
            config.max_num_hands, config.min_detection_confidence, config.min_tracking_confidence
        ));
        Self {
            config,
            frame_count: AtomicUsize::new(0),
            logger,
        }
    }

    pub fn scripted_pose_at(&self, frame_number: usize) -> ScriptedPose {
        let hold = self.config.hold_frames.max(1);
        SCRIPTED_POSES[(frame_number / hold) % SCRIPTED_POSES.len()]
    }
}

impl HandDetector for HandDetectorFake {
    fn detect(
        &self,
        _frame: &Frame,
    ) -> Result<Vec<HandPose>, Box<dyn std::error::Error + Send + Sync>> {
        let frame_number = self.frame_count.fetch_add(1, Ordering::SeqCst);
        let scripted = self.scripted_pose_at(frame_number);

        if self.config.max_num_hands == 0 {
            return Ok(vec![]);
        }

        let confidence = rand::random::<f32>();
        if confidence < self.config.min_detection_confidence {
            return Ok(vec![]);
        }

        if frame_number % self.config.hold_frames.max(1) == 0 {
            self.logger
                .info(&format!("Showing scripted pose: {}", scripted.name))?;
        }

        Ok(vec![scripted.to_hand_pose()])
    }
}
