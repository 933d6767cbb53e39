use crate::library::logger::impl_fake::LoggerFake;
use crate::library::logger::interface::Logger;

#[test]
fn test_namespaces_nest_and_share_lines() {
    let logger = LoggerFake::new();

    let nested = logger.with_namespace("camera").with_namespace("fake");
    nested.info("Camera started").unwrap();
    logger.error("boom").unwrap();

    assert_eq!(
        logger.lines(),
        vec![
            "INFO camera:fake: Camera started".to_string(),
            "ERROR boom".to_string(),
        ]
    );
}
