use super::fixture::Fixture;
use crate::device_display::interface::DeviceDisplayEvent;
use crate::mode::Mode;
use std::time::Duration;

#[test]
fn test_app_streams_until_exit() {
    let f = Fixture::new(vec![]);
    let app = f.app();
    let events = f.device_display.lock().unwrap().event_sender();

    let handle = std::thread::spawn(move || app.run());

    events
        .send(DeviceDisplayEvent::ModeSelected(Mode::HandGestures))
        .unwrap();
    std::thread::sleep(Duration::from_millis(200));
    events.send(DeviceDisplayEvent::ExitRequested).unwrap();

    handle.join().unwrap().unwrap();

    let views = f.device_display.lock().unwrap().views();
    let views = views.lock().unwrap();
    assert_eq!(views.first().unwrap().status, "Opening camera...");
    assert!(views
        .iter()
        .any(|view| view.status == "Mode: Hand Gesture Detection" && view.frame.is_some()));
    assert_eq!(views.last().unwrap().status, "Stopped");
    assert!(!f.camera.is_started());
    assert!(f.session.is_released());
}
