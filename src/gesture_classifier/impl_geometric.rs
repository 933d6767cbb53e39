use crate::config::GestureConfig;
use crate::gesture_classifier::interface::{
    landmark_index, GestureClassifier, GestureError, GestureLabel, HandPose, PixelPoint,
    LANDMARKS_PER_HAND,
};
use std::collections::BTreeSet;

/// Wrist and fingertips in pixel space. Fingertips are whole pixels; the
/// wrist keeps its sub-pixel position.
#[derive(Debug, Clone, Copy)]
struct FingerTips {
    wrist: PixelPoint,
    thumb: PixelPoint,
    index: PixelPoint,
    middle: PixelPoint,
    ring: PixelPoint,
    pinky: PixelPoint,
}

impl FingerTips {
    fn from_hand(
        hand: &HandPose,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<Self, GestureError> {
        if hand.landmarks.len() != LANDMARKS_PER_HAND {
            return Err(GestureError::InvalidInput(format!(
                "expected {} landmarks, got {}",
                LANDMARKS_PER_HAND,
                hand.landmarks.len()
            )));
        }
        if frame_width == 0 || frame_height == 0 {
            return Err(GestureError::InvalidInput(format!(
                "frame dimensions must be positive, got {}x{}",
                frame_width, frame_height
            )));
        }

        let tip = |index: usize| {
            hand.landmarks[index]
                .to_pixel(frame_width, frame_height)
                .truncated()
        };

        Ok(Self {
            wrist: hand.landmarks[landmark_index::WRIST].to_pixel(frame_width, frame_height),
            thumb: tip(landmark_index::THUMB_TIP),
            index: tip(landmark_index::INDEX_TIP),
            middle: tip(landmark_index::MIDDLE_TIP),
            ring: tip(landmark_index::RING_TIP),
            pinky: tip(landmark_index::PINKY_TIP),
        })
    }

    fn all_below_index(&self, tips: [PixelPoint; 3]) -> bool {
        tips.iter().all(|tip| tip.y > self.index.y)
    }
}

#[derive(Debug, Clone, Default)]
pub struct GestureClassifierGeometric {
    config: GestureConfig,
}

impl GestureClassifierGeometric {
    pub fn new(config: GestureConfig) -> Self {
        Self { config }
    }

    fn is_close(&self, a: &PixelPoint, b: &PixelPoint) -> bool {
        a.distance(b) < self.config.distance_threshold
    }
}

impl GestureClassifier for GestureClassifierGeometric {
    fn classify(
        &self,
        hand: &HandPose,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<BTreeSet<GestureLabel>, GestureError> {
        let t = FingerTips::from_hand(hand, frame_width, frame_height)?;
        let mut labels = BTreeSet::new();

        // Image origin is top-left: a smaller y is higher on screen.
        if [t.index, t.middle, t.ring, t.pinky]
            .iter()
            .all(|tip| t.thumb.y < tip.y)
        {
            labels.insert(GestureLabel::ThumbsUp);
        }

        if self.is_close(&t.thumb, &t.index) && t.all_below_index([t.middle, t.ring, t.pinky]) {
            labels.insert(GestureLabel::OkSign);
        }

        if self.is_close(&t.index, &t.middle) && t.all_below_index([t.thumb, t.ring, t.pinky]) {
            labels.insert(GestureLabel::Peace);
        }

        if self.is_close(&t.pinky, &t.ring) && t.all_below_index([t.thumb, t.middle, t.ring]) {
            labels.insert(GestureLabel::Rock);
        }

        if [t.thumb, t.index, t.middle, t.ring, t.pinky]
            .iter()
            .all(|tip| self.is_close(&t.wrist, tip))
        {
            labels.insert(GestureLabel::Fist);
        }

        Ok(labels)
    }
}
