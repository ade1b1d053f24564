use clinids::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    // Test with logging disabled
    let logger = Logger::from_config(false).unwrap();
    assert!(!logger.is_enabled());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_config_based_logging_enabled() {
    // Test with logging enabled
    let logger = Logger::from_config(true).unwrap();
    assert!(logger.is_enabled());

    // Initialising twice must not fail
    assert!(Logger::from_config(true).is_ok());

    logger.log("Test message with file".to_string());

    // Check in-memory logs (for UI display with "G" key)
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message with file"));

    let log_path = Logger::get_log_file_path().unwrap();
    assert!(log_path.ends_with("clinids/clinids.log"));
}

#[test]
fn test_clones_share_the_buffer() {
    let logger = Logger::new();
    let clone = logger.clone();
    clone.log("from a component".to_string());
    assert_eq!(logger.get_logs().len(), 1);

    logger.clear();
    assert!(clone.get_logs().is_empty());
}
