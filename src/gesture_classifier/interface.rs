use std::collections::BTreeSet;
use std::fmt;

/// Keypoint indices of the upstream 21-point hand model.
pub mod landmark_index {
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_TIP: usize = 8;
    pub const MIDDLE_TIP: usize = 12;
    pub const RING_TIP: usize = 16;
    pub const PINKY_TIP: usize = 20;
}

pub const LANDMARKS_PER_HAND: usize = 21;

/// Bone pairs of the hand skeleton, in the upstream model's order.
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 4),
    (0, 5),
    (5, 6),
    (6, 7),
    (7, 8),
    (5, 9),
    (9, 10),
    (10, 11),
    (11, 12),
    (9, 13),
    (13, 14),
    (14, 15),
    (15, 16),
    (13, 17),
    (0, 17),
    (17, 18),
    (18, 19),
    (19, 20),
];

/// Keypoint in normalized image coordinates, `[0, 1]` relative to the
/// frame width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn to_pixel(&self, frame_width: u32, frame_height: u32) -> PixelPoint {
        PixelPoint {
            x: f64::from(self.x) * f64::from(frame_width),
            y: f64::from(self.y) * f64::from(frame_height),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn distance(&self, other: &PixelPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Drops the sub-pixel part, rounding toward zero.
    pub fn truncated(&self) -> PixelPoint {
        PixelPoint {
            x: self.x.trunc(),
            y: self.y.trunc(),
        }
    }
}

/// Landmarks of one detected hand in one frame, in model index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HandPose {
    pub landmarks: Vec<Landmark>,
}

impl HandPose {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GestureLabel {
    ThumbsUp,
    OkSign,
    Peace,
    Rock,
    Fist,
}

impl GestureLabel {
    pub const ALL: [GestureLabel; 5] = [
        GestureLabel::ThumbsUp,
        GestureLabel::OkSign,
        GestureLabel::Peace,
        GestureLabel::Rock,
        GestureLabel::Fist,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            GestureLabel::ThumbsUp => "Thumbs Up",
            GestureLabel::OkSign => "OK Gesture",
            GestureLabel::Peace => "Peace Gesture",
            GestureLabel::Rock => "Rock Gesture",
            GestureLabel::Fist => "Fist Gesture",
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    InvalidInput(String),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
        }
    }
}

impl std::error::Error for GestureError {}

pub trait GestureClassifier {
    /// Every gesture the pose matches. Rules are independent, so the set may
    /// hold several labels at once.
    fn classify(
        &self,
        hand: &HandPose,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<BTreeSet<GestureLabel>, GestureError>;
}
