use crate::config::GestureConfig;
use crate::gesture_classifier::impl_geometric::GestureClassifierGeometric;
use crate::gesture_classifier::interface::{
    landmark_index, HandPose, Landmark, LANDMARKS_PER_HAND,
};

/// Powers of two keep pixel -> normalized -> pixel conversions exact.
pub const FRAME_WIDTH: u32 = 1024;
pub const FRAME_HEIGHT: u32 = 1024;

/// Pixel positions of the six landmarks the rules look at.
#[derive(Debug, Clone, Copy)]
pub struct Tips {
    pub wrist: (f32, f32),
    pub thumb: (f32, f32),
    pub index: (f32, f32),
    pub middle: (f32, f32),
    pub ring: (f32, f32),
    pub pinky: (f32, f32),
}

impl Tips {
    /// Knuckles and joints are parked on the wrist; no rule reads them.
    pub fn to_pose(&self, frame_width: u32, frame_height: u32) -> HandPose {
        let normalize = |(x, y): (f32, f32)| {
            Landmark::new(x / frame_width as f32, y / frame_height as f32)
        };

        let mut landmarks = vec![normalize(self.wrist); LANDMARKS_PER_HAND];
        landmarks[landmark_index::THUMB_TIP] = normalize(self.thumb);
        landmarks[landmark_index::INDEX_TIP] = normalize(self.index);
        landmarks[landmark_index::MIDDLE_TIP] = normalize(self.middle);
        landmarks[landmark_index::RING_TIP] = normalize(self.ring);
        landmarks[landmark_index::PINKY_TIP] = normalize(self.pinky);

        HandPose::new(landmarks)
    }

    pub fn pose(&self) -> HandPose {
        self.to_pose(FRAME_WIDTH, FRAME_HEIGHT)
    }
}

pub struct Fixture {
    pub classifier: GestureClassifierGeometric,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_threshold(GestureConfig::default().distance_threshold)
    }

    pub fn with_threshold(distance_threshold: f64) -> Self {
        Self {
            classifier: GestureClassifierGeometric::new(GestureConfig { distance_threshold }),
        }
    }
}
