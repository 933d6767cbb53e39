use crate::vision_app::core::{Effect, Event};
use crate::vision_app::main::VisionApp;

impl VisionApp {
    pub fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::SubscribeToDisplayEvents => {
                let events = match self.device_display.lock() {
                    Ok(display) => display.events(),
                    Err(_) => return,
                };
                while let Ok(event) = events.recv() {
                    if self.event_sender.send(Event::DisplayEvent(event)).is_err() {
                        break;
                    }
                }
            }
            Effect::SubscribeTick => {
                while !self.is_stopped() {
                    std::thread::sleep(self.config.frame_interval);
                    if self.event_sender.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
            Effect::StartCamera => {
                let started = self.session.start();
                let _ = self.event_sender.send(Event::CameraStartDone(started));
            }
            Effect::CaptureFrame => {
                let frame = self.session.capture();
                let _ = self.event_sender.send(Event::FrameCaptureDone(frame));
            }
            Effect::AnalyzeFrame { mode, frame } => {
                let analysis = self.session.analyze(mode, &frame);
                let _ = self.event_sender.send(Event::FrameAnalyzeDone(analysis));
            }
            Effect::StopCamera => {
                let released = self.session.release();
                let _ = self.event_sender.send(Event::CameraStopDone(released));
            }
        }
    }
}
