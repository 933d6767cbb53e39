use crate::device_camera::interface::Frame;
use crate::mode::Mode;
use std::error::Error;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceDisplayEvent {
    ModeSelected(Mode),
    ExitRequested,
}

/// Something drawn on top of the frame, in frame pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    /// `y` is the text baseline.
    Text {
        text: String,
        x: i32,
        y: i32,
        color: [u8; 3],
    },
    Rect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        color: [u8; 3],
    },
    Point {
        x: f32,
        y: f32,
        color: [u8; 3],
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: [u8; 3],
    },
}

impl Overlay {
    pub fn text(&self) -> Option<&str> {
        match self {
            Overlay::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub mode: Mode,
    pub status: String,
    pub frame: Option<Frame>,
    pub overlays: Vec<Overlay>,
}

impl View {
    pub fn texts(&self) -> Vec<&str> {
        self.overlays.iter().filter_map(Overlay::text).collect()
    }
}

pub trait DeviceDisplay: Send + Sync {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Mode and exit requests coming from the user. Only the first caller
    /// gets a live receiver.
    fn events(&self) -> Receiver<DeviceDisplayEvent>;
}
