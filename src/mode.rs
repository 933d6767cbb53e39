/// Which analysis runs on each captured frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Mode {
    #[default]
    Idle,
    FaceDetection,
    EmotionAnalysis,
    HandGestures,
}

impl Mode {
    pub const ALL: [Mode; 4] = [
        Mode::Idle,
        Mode::FaceDetection,
        Mode::EmotionAnalysis,
        Mode::HandGestures,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::FaceDetection => "Face Detection",
            Mode::EmotionAnalysis => "Emotion Analysis",
            Mode::HandGestures => "Hand Gesture Detection",
        }
    }
}
