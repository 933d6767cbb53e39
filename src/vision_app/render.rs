use crate::device_display::interface::{DeviceDisplay, Overlay, View};
use crate::gesture_classifier::interface::{GestureLabel, HAND_CONNECTIONS};
use crate::mode::Mode;
use crate::vision_app::analysis::FrameAnalysis;
use crate::vision_app::core::{Snapshot, State};
use std::sync::{Arc, Mutex};

const LANDMARK_COLOR: [u8; 3] = [255, 0, 0];
const CONNECTION_COLOR: [u8; 3] = [224, 224, 224];
const FACE_COLOR: [u8; 3] = [255, 0, 0];
const EMOTION_COLOR: [u8; 3] = [0, 255, 0];

/// Fixed screen anchor and color for each gesture label.
pub fn gesture_overlay(label: GestureLabel) -> Overlay {
    let (y, color) = match label {
        GestureLabel::ThumbsUp => (100, [0, 255, 0]),
        GestureLabel::OkSign => (150, [255, 0, 0]),
        GestureLabel::Peace => (200, [0, 0, 255]),
        GestureLabel::Rock => (250, [255, 255, 0]),
        GestureLabel::Fist => (300, [255, 0, 255]),
    };

    Overlay::Text {
        text: label.display_name().to_string(),
        x: 50,
        y,
        color,
    }
}

fn overlays(snapshot: &Snapshot) -> Vec<Overlay> {
    let FrameAnalysis { hands, faces, .. } = &snapshot.analysis;
    let (width, height) = (
        snapshot.frame.width() as f32,
        snapshot.frame.height() as f32,
    );
    let mut overlays = vec![];

    for hand in hands {
        let to_screen = |index: usize| {
            hand.pose
                .landmarks
                .get(index)
                .map(|landmark| (landmark.x * width, landmark.y * height))
        };

        // Bones first so the joints are painted over them.
        overlays.extend(HAND_CONNECTIONS.iter().filter_map(|&(from, to)| {
            Some(Overlay::Line {
                from: to_screen(from)?,
                to: to_screen(to)?,
                color: CONNECTION_COLOR,
            })
        }));
        overlays.extend(
            (0..hand.pose.landmarks.len())
                .filter_map(to_screen)
                .map(|(x, y)| Overlay::Point {
                    x,
                    y,
                    color: LANDMARK_COLOR,
                }),
        );
    }
    overlays.extend(
        snapshot
            .analysis
            .gesture_labels()
            .into_iter()
            .map(gesture_overlay),
    );

    for face in faces {
        overlays.push(Overlay::Rect {
            x: face.face.x,
            y: face.face.y,
            width: face.face.width,
            height: face.face.height,
            color: FACE_COLOR,
        });
        if let Some(emotion) = &face.emotion {
            overlays.push(Overlay::Text {
                text: format!("Emotion: {}", emotion),
                x: face.face.x as i32,
                y: face.face.y as i32 - 10,
                color: EMOTION_COLOR,
            });
        }
    }

    overlays
}

pub fn view(state: &State) -> View {
    match state {
        State::Starting { mode } => View {
            mode: *mode,
            status: "Opening camera...".to_string(),
            frame: None,
            overlays: vec![],
        },
        State::Streaming { mode, latest, .. } => View {
            mode: *mode,
            status: format!("Mode: {}", mode.label()),
            frame: latest.as_ref().map(|snapshot| snapshot.frame.clone()),
            overlays: latest.as_ref().map(overlays).unwrap_or_default(),
        },
        State::Failed { mode, message } => View {
            mode: *mode,
            status: format!("Error: {}", message),
            frame: None,
            overlays: vec![],
        },
        State::Stopping => View {
            mode: Mode::Idle,
            status: "Releasing camera...".to_string(),
            frame: None,
            overlays: vec![],
        },
        State::Stopped => View {
            mode: Mode::Idle,
            status: "Stopped".to_string(),
            frame: None,
            overlays: vec![],
        },
    }
}

#[derive(Clone)]
pub struct Render {
    device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
}

impl Render {
    pub fn new(device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>) -> Self {
        Self { device_display }
    }

    pub fn render(&self, state: &State) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let view = view(state);
        self.device_display
            .lock()
            .map_err(|e| e.to_string())?
            .render(&view)
    }
}
