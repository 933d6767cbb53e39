use crate::config::{Config, GestureConfig};
use crate::device_camera::interface::Frame;
use crate::gesture_classifier::impl_geometric::GestureClassifierGeometric;
use crate::gesture_classifier::interface::{GestureClassifier, GestureLabel, LANDMARKS_PER_HAND};
use crate::hand_detector::impl_fake::{HandDetectorFake, SCRIPTED_POSES};
use crate::hand_detector::interface::HandDetector;
use crate::library::logger::impl_fake::LoggerFake;
use image::RgbImage;
use std::collections::BTreeSet;
use std::sync::Arc;

fn detector(min_detection_confidence: f32) -> HandDetectorFake {
    let mut config = Config::default().hand_detector;
    config.min_detection_confidence = min_detection_confidence;
    config.hold_frames = 1;
    HandDetectorFake::new(config, Arc::new(LoggerFake::new()))
}

#[test]
fn test_detected_hands_have_all_landmarks() {
    let detector = detector(0.0);
    let frame = Frame::new(RgbImage::new(640, 480));

    let hands = detector.detect(&frame).unwrap();

    assert_eq!(hands.len(), 1);
    assert_eq!(hands[0].landmarks.len(), LANDMARKS_PER_HAND);
}

#[test]
fn test_confidence_above_one_never_detects() {
    let detector = detector(1.1);
    let frame = Frame::new(RgbImage::new(640, 480));

    assert!(detector.detect(&frame).unwrap().is_empty());
}

#[test]
fn test_scripted_poses_cycle() {
    let detector = detector(0.0);

    let names: Vec<&str> = (0..SCRIPTED_POSES.len() + 1)
        .map(|frame_number| detector.scripted_pose_at(frame_number).name)
        .collect();

    assert_eq!(names[0], "open hand");
    assert_eq!(names[1], "thumbs up");
    assert_eq!(names[SCRIPTED_POSES.len()], "open hand");
}

#[test]
fn test_scripted_poses_classify_as_named() {
    let classifier = GestureClassifierGeometric::new(GestureConfig::default());
    let expected = [
        ("open hand", None),
        ("thumbs up", Some(GestureLabel::ThumbsUp)),
        ("ok sign", Some(GestureLabel::OkSign)),
        ("peace", Some(GestureLabel::Peace)),
        ("rock", Some(GestureLabel::Rock)),
        ("fist", Some(GestureLabel::Fist)),
    ];

    for (scripted, (name, label)) in SCRIPTED_POSES.iter().zip(expected) {
        assert_eq!(scripted.name, name);
        let labels = classifier
            .classify(&scripted.to_hand_pose(), 640, 480)
            .unwrap();
        let wanted: BTreeSet<GestureLabel> = label.into_iter().collect();
        assert_eq!(labels, wanted, "pose {}", name);
    }
}
