use crate::config::Config;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use crate::vision_app::capture_session::CaptureSession;
use crate::vision_app::core::{init, transition, Effect, Event, State};
use crate::vision_app::render::Render;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct VisionApp {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub session: Arc<CaptureSession>,
    pub device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    pub render: Render,
    pub event_sender: Sender<Event>,
    pub event_receiver: Arc<Mutex<Receiver<Event>>>,
    pub stopped: Arc<AtomicBool>,
}

impl VisionApp {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        session: Arc<CaptureSession>,
        device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>>,
    ) -> Self {
        let (event_sender, event_receiver) = channel();

        Self {
            config,
            logger: logger.with_namespace("vision_app"),
            session,
            render: Render::new(device_display.clone()),
            device_display,
            event_sender,
            event_receiver: Arc::new(Mutex::new(event_receiver)),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    fn spawn_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect));
        }
    }

    /// Frame-loop traffic is too chatty to log; failures always are.
    fn log_event(&self, event: &Event) {
        let _ = match event {
            Event::Tick | Event::FrameCaptureDone(Ok(_)) | Event::FrameAnalyzeDone(Ok(_)) => {
                Ok(())
            }
            Event::CameraStartDone(Err(e)) => {
                self.logger.error(&format!("Camera failed to start: {}", e))
            }
            Event::FrameCaptureDone(Err(e)) => {
                self.logger.error(&format!("Frame capture failed: {}", e))
            }
            Event::FrameAnalyzeDone(Err(e)) => {
                self.logger.error(&format!("Frame analysis failed: {}", e))
            }
            Event::CameraStopDone(Err(e)) => {
                self.logger.error(&format!("Camera failed to stop: {}", e))
            }
            event => self.logger.info(&format!("event: {:?}", event)),
        };
    }

    /// Runs until the user asks to exit and the camera has been released.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.device_display
            .lock()
            .map_err(|e| e.to_string())?
            .init()?;

        let (mut state, effects) = init(&self.config);
        self.render.render(&state)?;
        self.spawn_effects(effects);

        let event_receiver = self.event_receiver.lock().map_err(|e| e.to_string())?;

        loop {
            let event = event_receiver.recv()?;
            self.log_event(&event);

            let (new_state, effects) = transition(state.clone(), event);
            if new_state != state {
                self.render.render(&new_state)?;
            }
            state = new_state;

            if state == State::Stopped {
                self.stopped.store(true, Ordering::SeqCst);
                self.logger.info("Stopped")?;
                return Ok(());
            }

            self.spawn_effects(effects);
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
