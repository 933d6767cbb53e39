use crate::face_detector::interface::FaceBox;
use crate::gesture_classifier::interface::{GestureLabel, HandPose};
use crate::mode::Mode;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct HandAnalysis {
    pub pose: HandPose,
    pub labels: BTreeSet<GestureLabel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FaceAnalysis {
    pub face: FaceBox,
    pub emotion: Option<String>,
}

/// What one mode found in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAnalysis {
    pub mode: Mode,
    pub hands: Vec<HandAnalysis>,
    pub faces: Vec<FaceAnalysis>,
}

impl FrameAnalysis {
    pub fn empty(mode: Mode) -> Self {
        Self {
            mode,
            hands: vec![],
            faces: vec![],
        }
    }

    /// Labels over all hands, without repeats.
    pub fn gesture_labels(&self) -> BTreeSet<GestureLabel> {
        self.hands
            .iter()
            .flat_map(|hand| hand.labels.iter().copied())
            .collect()
    }
}
