use image::RgbImage;

pub trait EmotionClassifier {
    /// Dominant emotion of a cropped face, e.g. `"happy"`.
    fn dominant_emotion(
        &self,
        face: &RgbImage,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}
