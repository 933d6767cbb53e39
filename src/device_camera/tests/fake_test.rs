use crate::config::Config;
use crate::device_camera::impl_fake::DeviceCameraFake;
use crate::device_camera::interface::DeviceCamera;
use crate::library::logger::impl_fake::LoggerFake;
use std::sync::Arc;

fn camera(drop_rate: f32) -> DeviceCameraFake {
    let mut config = Config::default().camera;
    config.drop_rate = drop_rate;
    DeviceCameraFake::new(config, Arc::new(LoggerFake::new()))
}

#[test]
fn test_capture_before_start_fails() {
    let camera = camera(0.0);

    assert!(camera.capture_frame().is_err());
}

#[test]
fn test_capture_returns_frame_of_configured_size() {
    let camera = camera(0.0);
    camera.start().unwrap();

    let frame = camera.capture_frame().unwrap().unwrap();

    assert_eq!((frame.width(), frame.height()), (640, 480));
}

#[test]
fn test_full_drop_rate_yields_no_frame() {
    let camera = camera(1.0);
    camera.start().unwrap();

    assert!(camera.capture_frame().unwrap().is_none());
}

#[test]
fn test_stop_is_idempotent() {
    let camera = camera(0.0);
    camera.start().unwrap();

    camera.stop().unwrap();
    camera.stop().unwrap();

    assert!(!camera.is_started());
}
