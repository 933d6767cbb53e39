use crate::device_display::impl_console::parse_command;
use crate::device_display::interface::DeviceDisplayEvent;
use crate::mode::Mode;

#[test]
fn test_parse_command() {
    assert_eq!(
        parse_command("3\n"),
        Some(DeviceDisplayEvent::ModeSelected(Mode::HandGestures))
    );
    assert_eq!(
        parse_command(" face "),
        Some(DeviceDisplayEvent::ModeSelected(Mode::FaceDetection))
    );
    assert_eq!(parse_command("q"), Some(DeviceDisplayEvent::ExitRequested));
    assert_eq!(parse_command("9"), None);
}
