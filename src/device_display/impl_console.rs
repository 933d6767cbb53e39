use crate::device_display::interface::{DeviceDisplay, DeviceDisplayEvent, View};
use crate::mode::Mode;
use std::error::Error;
use std::io::BufRead;
use std::sync::mpsc::{channel, Receiver};

/// Prints the status line and overlay texts whenever they change, and
/// reads mode switches from stdin.
pub struct DeviceDisplayConsole {
    last_lines: Vec<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { last_lines: vec![] }
    }

    fn lines(view: &View) -> Vec<String> {
        let mut lines = vec![view.status.clone()];
        lines.extend(view.texts().into_iter().map(|text| format!("  {}", text)));
        lines
    }
}

/// `0`-`3` pick a mode, `q` exits.
pub fn parse_command(line: &str) -> Option<DeviceDisplayEvent> {
    match line.trim() {
        "0" | "idle" => Some(DeviceDisplayEvent::ModeSelected(Mode::Idle)),
        "1" | "face" => Some(DeviceDisplayEvent::ModeSelected(Mode::FaceDetection)),
        "2" | "emotion" => Some(DeviceDisplayEvent::ModeSelected(Mode::EmotionAnalysis)),
        "3" | "hand" => Some(DeviceDisplayEvent::ModeSelected(Mode::HandGestures)),
        "q" | "exit" => Some(DeviceDisplayEvent::ExitRequested),
        _ => None,
    }
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        println!("Controls: [0] Idle [1] Face [2] Emotion [3] Hand [q] Exit");
        Ok(())
    }

    fn render(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        let lines = Self::lines(view);
        if lines != self.last_lines {
            println!("┌────────────────────────────────");
            for line in &lines {
                println!("│ {}", line);
            }
            println!("└────────────────────────────────");
            self.last_lines = lines;
        }
        Ok(())
    }

    fn events(&self) -> Receiver<DeviceDisplayEvent> {
        let (tx, rx) = channel();

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if let Some(event) = parse_command(&line) {
                    if tx.send(event).is_err() {
                        break;
                    }
                }
            }
            let _ = tx.send(DeviceDisplayEvent::ExitRequested);
        });

        rx
    }
}
