use super::*;

#[test]
fn test_write_and_read() {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Warning);

    test_log!(log, LogLevel::Info, "test message");

    assert_eq!(log.len(), 1);

    let entry = log.read().unwrap();
    assert_eq!(entry.message(), "test message");
    assert_eq!(entry.level(), LogLevel::Info);

    assert!(log.is_empty());
}

#[test]
fn test_format_arguments() {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Warning);

    test_log!(log, LogLevel::Info, "major number {}", 254);
    test_log!(log, LogLevel::Debug, "hex: {:#x}", 0xDEAD);

    assert_eq!(log.read().unwrap().message(), "major number 254");
    assert_eq!(log.read().unwrap().message(), "hex: 0xdead");
}

#[test]
fn test_fifo_order() {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Warning);

    for i in 0..5 {
        test_log!(log, LogLevel::Debug, "message {}", i);
    }

    assert_eq!(log.len(), 5);

    for i in 0..5 {
        let entry = log.read().unwrap();
        let expected = alloc::format!("message {}", i);
        assert_eq!(entry.message(), expected.as_str());
        assert_eq!(entry.seq(), i);
    }

    assert!(log.is_empty());
}

#[test]
fn test_empty_buffer_read() {
    let log = LogCore::new(LogLevel::Debug, LogLevel::Warning);

    assert!(log.read().is_none());
    assert!(log.read().is_none());
}
