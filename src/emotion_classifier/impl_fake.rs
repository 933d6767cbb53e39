use crate::emotion_classifier::interface::EmotionClassifier;
use crate::library::logger::interface::Logger;
use image::RgbImage;
use rand::Rng;
use std::sync::Arc;

pub const EMOTIONS: [&str; 7] = [
    "angry", "disgust", "fear", "happy", "sad", "surprise", "neutral",
];

pub struct EmotionClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl EmotionClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("emotion_classifier").with_namespace("fake"),
        }
    }
}

impl EmotionClassifier for EmotionClassifierFake {
    fn dominant_emotion(
        &self,
        face: &RgbImage,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        if face.width() == 0 || face.height() == 0 {
            self.logger.error("Got an empty face region")?;
            return Err("face region is empty".into());
        }

        let mut rng = rand::rng();
        Ok(EMOTIONS[rng.random_range(0..EMOTIONS.len())].to_string())
    }
}
