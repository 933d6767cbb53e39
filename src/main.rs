use clap::Parser;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

mod args;
mod config;
mod device_camera;
mod device_display;
mod emotion_classifier;
mod face_detector;
mod gesture_classifier;
mod hand_detector;
mod library;
mod mode;
mod vision_app;

use args::Args;
use config::{Config, DisplayKind};
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use device_display::impl_gui::DeviceDisplayGui;
use device_display::interface::DeviceDisplay;
use emotion_classifier::impl_fake::EmotionClassifierFake;
use face_detector::impl_fake::FaceDetectorFake;
use gesture_classifier::impl_geometric::GestureClassifierGeometric;
use hand_detector::impl_fake::HandDetectorFake;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use vision_app::capture_session::CaptureSession;
use vision_app::main::VisionApp;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args = Args::parse();

    let mut config = Config::default();
    config.initial_mode = args.mode;
    config.gesture.distance_threshold = args.threshold;
    config.camera.device_index = args.cam_index;
    config.camera.drop_rate = args.drop_rate;
    if args.console {
        config.display = DisplayKind::Console;
    }

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let session = Arc::new(CaptureSession::new(
        logger.clone(),
        Arc::new(DeviceCameraFake::new(config.camera.clone(), logger.clone())),
        Arc::new(HandDetectorFake::new(
            config.hand_detector.clone(),
            logger.clone(),
        )),
        Arc::new(FaceDetectorFake::new(
            config.face_detector.clone(),
            logger.clone(),
        )),
        Arc::new(EmotionClassifierFake::new(logger.clone())),
        Arc::new(GestureClassifierGeometric::new(config.gesture.clone())),
    ));

    let result = match config.display {
        DisplayKind::Gui => run_with_window(config, logger, session.clone()),
        DisplayKind::Console => {
            let device_display: Arc<Mutex<dyn DeviceDisplay + Send + Sync>> =
                Arc::new(Mutex::new(DeviceDisplayConsole::new()));
            VisionApp::new(config, logger, session.clone(), device_display).run()
        }
    };

    session.release()?;
    result
}

/// The window owns the main thread; the app runs beside it and closes the
/// window once it stops.
fn run_with_window(
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    session: Arc<CaptureSession>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let device_display = DeviceDisplayGui::new(config.window.clone(), config.frame_interval);
    let window = device_display.window();
    let close_window = device_display.close_handle();

    let app = VisionApp::new(
        config,
        logger,
        session,
        Arc::new(Mutex::new(device_display)),
    );
    let worker = std::thread::spawn(move || {
        let result = app.run();
        close_window.store(true, Ordering::SeqCst);
        result
    });

    let window_result = window.run();
    let app_result = worker
        .join()
        .map_err(|_| "vision app thread panicked")?;

    app_result.and(window_result)
}
