use super::*;

#[test]
fn test_global_level_filtering() {
    let log = LogCore::new(LogLevel::Warning, LogLevel::Warning);

    test_log!(log, LogLevel::Emergency, "emergency");
    test_log!(log, LogLevel::Error, "error");
    test_log!(log, LogLevel::Warning, "warning");
    test_log!(log, LogLevel::Info, "info");
    test_log!(log, LogLevel::Debug, "debug");

    assert_eq!(log.len(), 3);
    assert_eq!(log.read().unwrap().message(), "emergency");
    assert_eq!(log.read().unwrap().message(), "error");
    assert_eq!(log.read().unwrap().message(), "warning");
    assert!(log.is_empty());
}

#[test]
fn test_dynamic_level_change() {
    let log = LogCore::new(LogLevel::Info, LogLevel::Warning);

    test_log!(log, LogLevel::Debug, "debug1");
    test_log!(log, LogLevel::Info, "info1");
    assert_eq!(log.len(), 1);

    log.set_global_level(LogLevel::Debug);
    assert_eq!(log.global_level(), LogLevel::Debug);

    test_log!(log, LogLevel::Debug, "debug2");

    assert_eq!(log.len(), 2);
    assert_eq!(log.read().unwrap().message(), "info1");
    assert_eq!(log.read().unwrap().message(), "debug2");
}

#[test]
fn test_log_facade_level_mapping() {
    assert_eq!(LogLevel::from(log::Level::Error), LogLevel::Error);
    assert_eq!(LogLevel::from(log::Level::Warn), LogLevel::Warning);
    assert_eq!(LogLevel::from(log::Level::Info), LogLevel::Info);
    assert_eq!(LogLevel::from(log::Level::Trace), LogLevel::Debug);
}

#[test]
fn test_from_u8_roundtrip() {
    for level in [
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
    ] {
        assert_eq!(LogLevel::from_u8(level as u8), level);
    }
    assert_eq!(LogLevel::from_u8(200), LogLevel::Debug);
}
