use crate::config::Config;
use crate::device_display::impl_gui::DeviceDisplayGui;
use crate::device_display::interface::{DeviceDisplay, DeviceDisplayEvent};
use std::sync::atomic::Ordering;
use std::time::Duration;

fn display() -> DeviceDisplayGui {
    DeviceDisplayGui::new(Config::default().window, Duration::from_millis(10))
}

#[test]
fn test_init_does_not_open_a_window() {
    let mut display = display();
    let events = display.events();

    display.init().unwrap();

    assert!(events.recv_timeout(Duration::from_millis(50)).is_err());
}

#[test]
fn test_window_that_never_runs_still_requests_exit() {
    let display = display();
    let events = display.events();

    let window = display.window();
    drop(window);

    assert_eq!(
        events.recv_timeout(Duration::from_secs(1)).unwrap(),
        DeviceDisplayEvent::ExitRequested
    );
}

#[test]
fn test_window_dropped_during_a_panic_requests_exit() {
    let display = display();
    let events = display.events();
    let window = display.window();

    let result = std::thread::spawn(move || {
        let _window = window;
        panic!("event loop failed");
    })
    .join();

    assert!(result.is_err());
    assert_eq!(
        events.recv_timeout(Duration::from_secs(1)).unwrap(),
        DeviceDisplayEvent::ExitRequested
    );
}

#[test]
fn test_close_handle_starts_open() {
    let display = display();

    assert!(!display.close_handle().load(Ordering::SeqCst));
}
